//! OrderedIndex implementation
//!
//! Unbalanced binary search tree with Box-owned nodes.

use std::cmp::Ordering;

/// One key in the index: the key, the byte offset of its record line, and
/// exclusively-owned subtrees.
struct IndexNode<K> {
    key: K,
    offset: u64,
    left: Option<Box<IndexNode<K>>>,
    right: Option<Box<IndexNode<K>>>,
}

impl<K> IndexNode<K> {
    fn new(key: K, offset: u64) -> Box<Self> {
        Box::new(Self {
            key,
            offset,
            left: None,
            right: None,
        })
    }
}

/// Ordered map from record key to byte offset
///
/// The whole tree is discarded and regrown exactly once, at
/// [`Table`](crate::Table) construction, by replaying the record file.
pub struct OrderedIndex<K> {
    root: Option<Box<IndexNode<K>>>,
    len: usize,
}

impl<K: Ord> OrderedIndex<K> {
    /// Create an empty index
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a key → offset mapping.
    ///
    /// If the key is already present this is a silent no-op: the earlier
    /// offset wins. Never fails.
    pub fn insert(&mut self, key: K, offset: u64) {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(IndexNode::new(key, offset));
                    self.len += 1;
                    return;
                }
                Some(node) => match key.cmp(&node.key) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return,
                },
            }
        }
    }

    /// Look up the offset recorded for a key
    pub fn get(&self, key: &K) -> Option<u64> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match key.cmp(&n.key) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
                Ordering::Equal => return Some(n.offset),
            }
        }
        None
    }

    /// Whether the key is present
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key, returning its offset if it was present.
    ///
    /// Standard BST deletion: a node with two children is replaced by its
    /// in-order successor (minimum of the right subtree).
    pub fn remove(&mut self, key: &K) -> Option<u64> {
        let removed = Self::remove_node(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_node(link: &mut Option<Box<IndexNode<K>>>, key: &K) -> Option<u64> {
        match link {
            None => None,
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => Self::remove_node(&mut node.left, key),
                Ordering::Greater => Self::remove_node(&mut node.right, key),
                Ordering::Equal => {
                    let offset = node.offset;
                    let left = node.left.take();
                    let right = node.right.take();
                    *link = match (left, right) {
                        (None, None) => None,
                        (Some(l), None) => Some(l),
                        (None, Some(r)) => Some(r),
                        (Some(l), Some(r)) => {
                            let (succ_key, succ_offset, rest) = Self::detach_min(r);
                            let mut succ = IndexNode::new(succ_key, succ_offset);
                            succ.left = Some(l);
                            succ.right = rest;
                            Some(succ)
                        }
                    };
                    Some(offset)
                }
            },
        }
    }

    /// Detach the minimum node of a subtree, returning its key, offset, and
    /// the subtree with that node removed.
    fn detach_min(mut node: Box<IndexNode<K>>) -> (K, u64, Option<Box<IndexNode<K>>>) {
        match node.left.take() {
            Some(left) => {
                let (key, offset, rest) = Self::detach_min(left);
                node.left = rest;
                (key, offset, Some(node))
            }
            None => {
                let IndexNode {
                    key, offset, right, ..
                } = *node;
                (key, offset, right)
            }
        }
    }

    /// Lazy ascending-key iteration over `(key, offset)` pairs.
    ///
    /// Left-subtree / node / right-subtree order; restartable by calling
    /// again. This is what makes sorted reports free of per-call sorting.
    pub fn in_order(&self) -> InOrderIter<'_, K> {
        InOrderIter::new(self.root.as_deref())
    }

    /// Number of keys in the index
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no keys
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discard every node
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K: Ord> Default for OrderedIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(key, offset)` pairs in ascending key order
///
/// Holds the explicit stack of ancestors whose left subtrees have been
/// visited; `next` pops one and descends into its right subtree.
pub struct InOrderIter<'a, K> {
    stack: Vec<&'a IndexNode<K>>,
}

impl<'a, K> InOrderIter<'a, K> {
    fn new(root: Option<&'a IndexNode<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a IndexNode<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrderIter<'a, K> {
    type Item = (&'a K, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, node.offset))
    }
}
