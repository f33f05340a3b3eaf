//! Label trie for incremental marker narrowing

use crate::marker::Marker;
use std::collections::HashMap;

/// Result of narrowing the marker set with an accumulated label prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrowResult {
    /// The prefix is a complete label; index of the resolved marker
    Resolved(usize),
    /// More than one label still starts with the prefix; surviving marker
    /// indices, ascending
    Pending(Vec<usize>),
    /// No label starts with the prefix
    Exhausted,
}

/// A node in the label trie
#[derive(Debug, Default)]
struct TrieNode {
    /// Children nodes mapped by label key
    children: HashMap<char, TrieNode>,
    /// Marker index stored at this sequence (leaves only; labels are
    /// prefix-free so interior nodes never carry one)
    marker: Option<usize>,
}

impl TrieNode {
    fn insert(&mut self, label: &[char], marker: usize) {
        if label.is_empty() {
            self.marker = Some(marker);
            return;
        }

        self.children
            .entry(label[0])
            .or_default()
            .insert(&label[1..], marker);
    }

    fn collect(&self, out: &mut Vec<usize>) {
        if let Some(marker) = self.marker {
            out.push(marker);
        }
        for child in self.children.values() {
            child.collect(out);
        }
    }
}

/// Trie over marker labels, built once per allocation.
#[derive(Debug, Default)]
pub struct LabelTrie {
    root: TrieNode,
}

impl LabelTrie {
    /// Build a trie from a marker list; markers are referred to by index.
    pub fn build(markers: &[Marker]) -> Self {
        let mut trie = LabelTrie::default();
        for (index, marker) in markers.iter().enumerate() {
            let label: Vec<char> = marker.label.chars().collect();
            trie.root.insert(&label, index);
        }
        trie
    }

    /// Walk the accumulated prefix and classify what remains.
    ///
    /// Labels are prefix-free, so `Resolved` is only reachable once a full
    /// label has been typed, never earlier.
    pub fn narrow(&self, prefix: &str) -> NarrowResult {
        let mut node = &self.root;
        for key in prefix.chars() {
            match node.children.get(&key) {
                Some(child) => node = child,
                None => return NarrowResult::Exhausted,
            }
        }

        if let Some(marker) = node.marker {
            return NarrowResult::Resolved(marker);
        }

        let mut surviving = Vec::new();
        node.collect(&mut surviving);
        surviving.sort_unstable();
        match surviving.len() {
            0 => NarrowResult::Exhausted,
            1 => NarrowResult::Resolved(surviving[0]),
            _ => NarrowResult::Pending(surviving),
        }
    }
}
