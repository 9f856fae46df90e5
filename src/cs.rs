pub mod compression;
pub mod dynamic;
pub mod error;
pub mod randomized;
pub mod security;

// Re-export all modules
pub use compression::*;
pub use dynamic::*;
pub use randomized::*;
pub use security::*;
