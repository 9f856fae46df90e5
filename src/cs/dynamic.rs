pub mod palindrome;

pub use palindrome::min_edits_to_palindrome;
