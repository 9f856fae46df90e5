use std::collections::BTreeMap;

use super::bitstring::Bitstring;
use super::tree::HuffmanNode;
use crate::cs::error::{Error, Result};

/// Maps each symbol to its prefix-free code.
pub type CodeTable = BTreeMap<char, Bitstring>;

/// Build the code table mapping characters to their Huffman codes.
///
/// Left edges contribute a `0`, right edges a `1`. If the tree consists of a
/// single leaf (one unique symbol), that symbol gets the one-bit code `0`
/// instead of an empty code.
pub fn build_code_table(node: &HuffmanNode) -> CodeTable {
    let mut table = CodeTable::new();
    if let HuffmanNode::Leaf { ch, .. } = node {
        table.insert(*ch, std::iter::once(false).collect());
        return table;
    }
    let mut path = Bitstring::new();
    build_code_table_helper(node, &mut path, &mut table);
    table
}

fn build_code_table_helper(node: &HuffmanNode, path: &mut Bitstring, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { ch, .. } => {
            table.insert(*ch, path.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push(false);
            build_code_table_helper(left, path, table);
            path.pop();
            path.push(true);
            build_code_table_helper(right, path, table);
            path.pop();
        }
    }
}

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] for the first character missing from the table.
pub fn encode(input: &str, code_table: &CodeTable) -> Result<Bitstring> {
    let mut encoded = Bitstring::new();
    for (position, symbol) in input.chars().enumerate() {
        let code = code_table
            .get(&symbol)
            .ok_or(Error::UnknownSymbol { symbol, position })?;
        encoded.extend_from(code);
    }
    Ok(encoded)
}

/// Decode an encoded bitstring using the Huffman tree.
///
/// Traverses the tree according to each bit until a leaf is reached, emits its
/// symbol and restarts at the root. A single-leaf tree emits its symbol once per bit.
///
/// The tree must be the one that produced `encoded`; a different tree decodes
/// to garbage rather than an error.
///
/// # Errors
///
/// Returns [`Error::MalformedBitstring`] if the input runs out partway through a code.
pub fn decode(encoded: &Bitstring, tree: &HuffmanNode) -> Result<String> {
    // Special case: if tree is a leaf, each bit represents one occurrence
    if let HuffmanNode::Leaf { ch, .. } = tree {
        return Ok(encoded.iter().map(|_| *ch).collect());
    }

    let mut result = String::new();
    let mut current = tree;
    for bit in encoded.iter() {
        if let HuffmanNode::Internal { left, right, .. } = current {
            current = if bit { right } else { left };
        }
        if let HuffmanNode::Leaf { ch, .. } = current {
            result.push(*ch);
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        return Err(Error::MalformedBitstring {
            consumed: encoded.len(),
        });
    }
    Ok(result)
}
