use rand::Rng;

use crate::cs::error::{Error, Result};

/// Characters drawn from by [`generate_default_password`].
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Returns a password of `length` characters, each picked uniformly from `alphabet`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `alphabet` is empty and `length` is not zero.
pub fn generate_password<R: Rng + ?Sized>(
    length: usize,
    alphabet: &[char],
    rng: &mut R,
) -> Result<String> {
    if length > 0 && alphabet.is_empty() {
        return Err(Error::InvalidInput(
            "cannot generate a password from an empty alphabet".to_string(),
        ));
    }
    Ok((0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect())
}

/// Generates a password from [`DEFAULT_ALPHABET`] using the thread-local RNG.
pub fn generate_default_password(length: usize) -> Result<String> {
    let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
    generate_password(length, &alphabet, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_length_and_alphabet() {
        let alphabet: Vec<char> = "xyz".chars().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let password = generate_password(32, &alphabet, &mut rng).unwrap();
        assert_eq!(password.chars().count(), 32);
        assert!(password.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let a = generate_password(16, &alphabet, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = generate_password(16, &alphabet, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            generate_password(4, &[], &mut rng),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(generate_password(0, &[], &mut rng).unwrap(), "");
    }

    #[test]
    fn test_default_password() {
        let password = generate_default_password(12).unwrap();
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| DEFAULT_ALPHABET.contains(c)));
        assert_eq!(generate_default_password(0).unwrap(), "");
    }
}
