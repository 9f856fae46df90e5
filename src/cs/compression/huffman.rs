//! Huffman prefix coding for short strings.
//!
//! A [`CodecSession`] counts the symbols of an input, builds the Huffman tree,
//! and derives a code table from it. The table drives encoding; the tree drives
//! decoding, one bit at a time, without any separators in the bitstream.
//!
//! Equal weights are broken deterministically (see [`build_huffman_tree`]), so the
//! same input always produces the same codes. An input with one distinct symbol
//! is given the one-bit code `0`.
//!
//! # Examples
//!
//! ```
//! use pwcodec::cs::compression::huffman::{
//!     build_code_table, build_frequency_table, build_huffman_tree, decode, encode,
//! };
//!
//! let freq = build_frequency_table("aabccc");
//! let tree = build_huffman_tree(&freq).unwrap();
//! let table = build_code_table(&tree);
//! let bits = encode("aabccc", &table).unwrap();
//! assert_eq!(bits.to_string(), "111110000");
//! assert_eq!(decode(&bits, &tree).unwrap(), "aabccc");
//! ```

mod bitstring;
mod codes;
mod session;
mod tree;

pub use bitstring::Bitstring;
pub use codes::{build_code_table, decode, encode, CodeTable};
pub use session::{build_codec, code_table_of, CodecSession};
pub use tree::{build_frequency_table, build_huffman_tree, FrequencyTable, HuffmanNode};
