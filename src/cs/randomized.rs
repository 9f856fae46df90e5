pub mod password_generator;

pub use password_generator::{generate_default_password, generate_password, DEFAULT_ALPHABET};
