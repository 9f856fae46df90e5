pub mod password_policy;

// Re-export password policy functionality
pub use password_policy::{is_length_valid, is_strong, PasswordPolicy};
