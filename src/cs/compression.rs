//! Compression algorithms implementation.
//!
//! Currently provides Huffman prefix coding over in-memory strings.

pub mod huffman;
pub use huffman::{
    build_code_table, build_codec, build_frequency_table, build_huffman_tree, code_table_of,
    decode, encode, Bitstring, CodeTable, CodecSession, FrequencyTable, HuffmanNode,
};
