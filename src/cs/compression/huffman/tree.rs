use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use log::trace;

use crate::cs::error::{Error, Result};

/// Occurrence count for each distinct symbol of an input, ordered by symbol.
pub type FrequencyTable = BTreeMap<char, usize>;

/// Represents a node in the Huffman tree.
///
/// Children are owned by their parent, so dropping the root releases the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its frequency.
    Leaf { ch: char, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Number of leaves (distinct symbols) below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry ordered so that the lowest `(freq, order)` pair has the highest priority.
///
/// `order` is the tie-break: leaves take their rank in symbol order, merged nodes
/// take increasing numbers after the last leaf.
#[derive(Debug)]
struct NodeWrapper {
    node: HuffmanNode,
    order: usize,
}

impl NodeWrapper {
    fn key(&self) -> (usize, usize) {
        (self.node.freq(), self.order)
    }
}

impl PartialEq for NodeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NodeWrapper {}

impl Ord for NodeWrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower key should come first.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for NodeWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a frequency table mapping each character in `input` to its frequency.
pub fn build_frequency_table(input: &str) -> FrequencyTable {
    let mut freq = FrequencyTable::new();
    for ch in input.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}

/// Build the Huffman tree given a frequency table.
///
/// The two lowest-weight nodes are merged repeatedly; the first one popped becomes
/// the left child. Equal weights are broken by symbol order for leaves and by
/// creation order for merged nodes, so the same table always yields the same tree.
///
/// A table with a single symbol yields a lone leaf as the root.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if the table has no entries.
pub fn build_huffman_tree(freq_table: &FrequencyTable) -> Result<HuffmanNode> {
    let mut heap: BinaryHeap<NodeWrapper> = freq_table
        .iter()
        .enumerate()
        .map(|(order, (&ch, &freq))| NodeWrapper {
            node: HuffmanNode::Leaf { ch, freq },
            order,
        })
        .collect();

    let mut next_order = heap.len();
    // Combine nodes until only one tree remains.
    loop {
        let first = heap.pop().ok_or(Error::EmptyInput)?;
        let Some(second) = heap.pop() else {
            return Ok(first.node);
        };
        let freq = first.node.freq() + second.node.freq();
        trace!(
            "merging weights {} and {} into {}",
            first.node.freq(),
            second.node.freq(),
            freq
        );
        heap.push(NodeWrapper {
            node: HuffmanNode::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
            order: next_order,
        });
        next_order += 1;
    }
}
