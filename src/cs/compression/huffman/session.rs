use log::debug;

use super::bitstring::Bitstring;
use super::codes::{build_code_table, decode, encode, CodeTable};
use super::tree::{build_frequency_table, build_huffman_tree, HuffmanNode};
use crate::cs::error::Result;

/// A Huffman tree and the code table derived from it, built from one input.
///
/// The session must be kept for as long as bitstrings encoded under it need
/// decoding. Encoding a different input means building a new session; the old
/// one (and its whole tree) is released when it is dropped or replaced.
///
/// # Examples
///
/// ```
/// use pwcodec::CodecSession;
///
/// let session = CodecSession::build("password").unwrap();
/// let bits = session.encode("password").unwrap();
/// assert_eq!(session.decode(&bits).unwrap(), "password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecSession {
    tree: HuffmanNode,
    table: CodeTable,
}

impl CodecSession {
    /// Counts the symbols of `input`, builds the tree and derives the code table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`](crate::Error::EmptyInput) if `input` is empty.
    pub fn build(input: &str) -> Result<Self> {
        let freq_table = build_frequency_table(input);
        let tree = build_huffman_tree(&freq_table)?;
        let table = build_code_table(&tree);
        let session = CodecSession { tree, table };
        debug!(
            "built codec session: {} distinct symbols, {} encoded bits",
            session.symbol_count(),
            session.encoded_bits()
        );
        Ok(session)
    }

    /// Encodes `input` with this session's code table.
    pub fn encode(&self, input: &str) -> Result<Bitstring> {
        encode(input, &self.table)
    }

    /// Decodes `bits` by walking this session's tree.
    pub fn decode(&self, bits: &Bitstring) -> Result<String> {
        decode(bits, &self.tree)
    }

    /// Parses a string of `'0'`/`'1'` characters and decodes it.
    pub fn decode_str(&self, bits: &str) -> Result<String> {
        self.decode(&bits.parse()?)
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn tree(&self) -> &HuffmanNode {
        &self.tree
    }

    /// Number of distinct symbols in the input the session was built from.
    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }

    /// Total length in bits of the encoding of the input the session was built from.
    pub fn encoded_bits(&self) -> usize {
        fn walk(node: &HuffmanNode, depth: usize) -> usize {
            match node {
                HuffmanNode::Leaf { freq, .. } => freq * depth.max(1),
                HuffmanNode::Internal { left, right, .. } => {
                    walk(left, depth + 1) + walk(right, depth + 1)
                }
            }
        }
        walk(&self.tree, 0)
    }
}

/// Builds a [`CodecSession`] from `input`.
pub fn build_codec(input: &str) -> Result<CodecSession> {
    CodecSession::build(input)
}

/// Returns the code table of `session`.
pub fn code_table_of(session: &CodecSession) -> &CodeTable {
    session.code_table()
}
