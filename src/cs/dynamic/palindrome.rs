/// Returns the minimum number of character insertions or deletions needed to
/// turn `s` into a palindrome.
///
/// Computed as the length of `s` minus the length of its longest palindromic
/// subsequence, using an O(n²) table over characters.
///
/// # Examples
///
/// ```
/// use pwcodec::cs::dynamic::palindrome::min_edits_to_palindrome;
///
/// assert_eq!(min_edits_to_palindrome("racecar"), 0);
/// assert_eq!(min_edits_to_palindrome("abcd"), 3);
/// ```
pub fn min_edits_to_palindrome(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    chars.len() - longest_palindromic_subsequence(&chars)
}

fn longest_palindromic_subsequence(chars: &[char]) -> usize {
    let n = chars.len();
    if n == 0 {
        return 0;
    }

    // dp[i][j] = LPS length of chars[i..=j]
    let mut dp = vec![vec![0; n]; n];
    for (i, row) in dp.iter_mut().enumerate() {
        row[i] = 1;
    }

    for length in 2..=n {
        for i in 0..=n - length {
            let j = i + length - 1;
            dp[i][j] = if chars[i] == chars[j] {
                // For length 2 the inner range is empty.
                if length == 2 {
                    2
                } else {
                    dp[i + 1][j - 1] + 2
                }
            } else {
                dp[i + 1][j].max(dp[i][j - 1])
            };
        }
    }

    dp[0][n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(min_edits_to_palindrome(""), 0);
        assert_eq!(min_edits_to_palindrome("a"), 0);
    }

    #[test]
    fn test_palindromes() {
        assert_eq!(min_edits_to_palindrome("aa"), 0);
        assert_eq!(min_edits_to_palindrome("abba"), 0);
        assert_eq!(min_edits_to_palindrome("racecar"), 0);
    }

    #[test]
    fn test_basic_cases() {
        assert_eq!(min_edits_to_palindrome("ab"), 1);
        assert_eq!(min_edits_to_palindrome("abc"), 2);
        assert_eq!(min_edits_to_palindrome("abcda"), 2);
        assert_eq!(min_edits_to_palindrome("geeksforgeeks"), 8);
        assert_eq!(min_edits_to_palindrome("password"), 6);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(min_edits_to_palindrome("éaé"), 0);
        assert_eq!(min_edits_to_palindrome("éa"), 1);
    }
}
