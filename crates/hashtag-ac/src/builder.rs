//! Trie construction and link computation.

use std::collections::{HashMap, VecDeque};

use crate::trie::{Trie, NIL, ROOT};

/// Temporary trie node used during construction.
///
/// Links are indices into the builder's node arena. `fail` is `NIL` until
/// the link pass has run; `dict` holds the length of the pattern ending at
/// this node, or 0 for non-terminal nodes.
struct Node {
    children: HashMap<u8, u32>,
    dict: u32,
    fail: u32,
    dict_link: u32,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            dict: 0,
            fail: NIL,
            dict_link: NIL,
        }
    }
}

/// Accumulates patterns into a trie and emits the flat [`Trie`] automaton.
///
/// Patterns are unique by content: re-adding a pattern is a no-op beyond
/// re-marking the same terminal node. Empty patterns are silently ignored.
///
/// [`TrieBuilder::build`] consumes the builder, so the automaton cannot be
/// mutated after construction.
pub struct TrieBuilder {
    nodes: Vec<Node>,
}

impl TrieBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        // Index 0 is the nil sentinel, index 1 the root.
        Self {
            nodes: vec![Node::new(), Node::new()],
        }
    }

    /// Insert a byte pattern.
    pub fn add_pattern(&mut self, pattern: &[u8]) -> &mut Self {
        if pattern.is_empty() {
            return self;
        }

        let mut cur = ROOT;
        for &b in pattern {
            cur = match self.nodes[cur as usize].children.get(&b) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as u32;
                    self.nodes.push(Node::new());
                    self.nodes[cur as usize].children.insert(b, next);
                    next
                }
            };
        }
        self.nodes[cur as usize].dict = pattern.len() as u32;

        self
    }

    /// Insert a string pattern (its UTF-8 bytes).
    pub fn add_string(&mut self, pattern: &str) -> &mut Self {
        self.add_pattern(pattern.as_bytes())
    }

    /// Insert multiple byte patterns.
    pub fn add_patterns<I>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for pattern in patterns {
            self.add_pattern(pattern.as_ref());
        }
        self
    }

    /// Insert multiple string patterns.
    pub fn add_strings<I>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for pattern in patterns {
            self.add_pattern(pattern.as_ref().as_bytes());
        }
        self
    }

    /// Number of trie nodes allocated so far, sentinel and root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Finalize links and emit the flat automaton, consuming the builder.
    pub fn build(mut self) -> Trie {
        self.compute_fail_links();
        self.compute_dict_links();

        let n = self.nodes.len();
        let mut fail = vec![NIL; n];
        let mut dict_link = vec![NIL; n];
        let mut dict = vec![0u32; n];
        let mut trans = vec![[NIL; 256]; n];

        // Row 0 stays all-zero: the sentinel absorbs everything.
        for (id, node) in self.nodes.iter().enumerate().skip(ROOT as usize) {
            fail[id] = node.fail;
            dict_link[id] = node.dict_link;
            dict[id] = node.dict;
            for (&b, &target) in &node.children {
                trans[id][b as usize] = target;
            }
        }

        Trie {
            fail,
            dict_link,
            dict,
            trans,
        }
    }

    /// Failure links, computed breadth-first so a node's own link exists
    /// before any of its descendants' links are derived from it.
    fn compute_fail_links(&mut self) {
        let mut queue = VecDeque::new();

        self.nodes[ROOT as usize].fail = ROOT;

        // Depth-1 nodes fail to the root.
        let depth_one: Vec<u32> = self.nodes[ROOT as usize].children.values().copied().collect();
        for id in depth_one {
            self.nodes[id as usize].fail = ROOT;
            queue.push_back(id);
        }

        while let Some(id) = queue.pop_front() {
            let children: Vec<(u8, u32)> = self.nodes[id as usize]
                .children
                .iter()
                .map(|(&b, &child)| (b, child))
                .collect();

            for (b, child) in children {
                queue.push_back(child);

                // Walk the parent's failure chain until some state has a
                // goto on `b`, falling back to the root.
                let mut t = self.nodes[id as usize].fail;
                let fail = loop {
                    if let Some(&next) = self.nodes[t as usize].children.get(&b) {
                        break next;
                    }
                    if t == ROOT {
                        break ROOT;
                    }
                    t = self.nodes[t as usize].fail;
                };
                self.nodes[child as usize].fail = fail;
            }
        }
    }

    /// Dictionary-suffix links: nearest terminal reachable by one or more
    /// failure hops, or `NIL`. Requires failure links to be in place.
    fn compute_dict_links(&mut self) {
        for id in (ROOT as usize + 1)..self.nodes.len() {
            let mut t = self.nodes[id].fail;
            while t != ROOT {
                if self.nodes[t as usize].dict != 0 {
                    self.nodes[id].dict_link = t;
                    break;
                }
                t = self.nodes[t as usize].fail;
            }
        }
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
