pub mod cs;

pub use cs::{compression, dynamic, randomized, security};
pub use cs::compression::{build_codec, code_table_of, Bitstring, CodeTable, CodecSession};
pub use cs::error::{Error, Result};
