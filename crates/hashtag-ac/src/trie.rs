//! The flat automaton and the scan loop.

/// "No link / no transition" sentinel id. Row 0 of every table belongs to
/// it and is all zero, so the scan loop can compare against 0 directly.
pub(crate) const NIL: u32 = 0;

/// Id of the root state.
pub(crate) const ROOT: u32 = 1;

/// A single pattern occurrence: start offset plus the matched bytes,
/// borrowed from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pos: usize,
    bytes: &'a [u8],
}

impl<'a> Match<'a> {
    /// Zero-based byte offset of the first matched byte.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The matched pattern, as a slice of the scanned input.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// An immutable Aho-Corasick automaton in flat form.
///
/// Four parallel tables indexed by state id: failure link, dictionary-suffix
/// link, pattern length (0 for non-terminal states), and a dense 256-entry
/// goto row. The goto rows hold the raw trie edges only; missing root
/// transitions are not self-looped, the matcher applies the root-absorbs
/// rule itself.
///
/// Sharing a `Trie` between threads is safe: nothing here mutates after
/// [`TrieBuilder::build`](crate::TrieBuilder::build).
#[derive(Clone, PartialEq, Eq)]
pub struct Trie {
    pub(crate) fail: Vec<u32>,
    pub(crate) dict_link: Vec<u32>,
    pub(crate) dict: Vec<u32>,
    pub(crate) trans: Vec<[u32; 256]>,
}

impl Trie {
    /// Report every occurrence of every pattern in `input`.
    ///
    /// Matches are emitted in non-decreasing order of end offset; when
    /// several patterns end on the same byte the longest (the state's own
    /// terminal) comes first, followed by its dictionary-suffix chain.
    pub fn match_bytes<'a>(&self, input: &'a [u8]) -> Vec<Match<'a>> {
        let mut matches = Vec::new();
        let mut cur = ROOT as usize;

        for (i, &b) in input.iter().enumerate() {
            while cur != ROOT as usize && self.trans[cur][b as usize] == NIL {
                cur = self.fail[cur] as usize;
            }

            let next = self.trans[cur][b as usize];
            if next != NIL {
                cur = next as usize;
            }

            if self.dict[cur] != 0 {
                let pos = i + 1 - self.dict[cur] as usize;
                matches.push(Match {
                    pos,
                    bytes: &input[pos..=i],
                });
            }

            let mut link = self.dict_link[cur] as usize;
            while link != NIL as usize {
                let pos = i + 1 - self.dict[link] as usize;
                matches.push(Match {
                    pos,
                    bytes: &input[pos..=i],
                });
                link = self.dict_link[link] as usize;
            }
        }

        matches
    }

    /// [`match_bytes`](Self::match_bytes) over the string's UTF-8 bytes.
    pub fn match_str<'a>(&self, input: &'a str) -> Vec<Match<'a>> {
        self.match_bytes(input.as_bytes())
    }

    /// Number of states in the flat tables, sentinel and root included.
    pub fn state_count(&self) -> usize {
        self.fail.len()
    }

    /// Estimated heap footprint of the flat tables in bytes.
    pub fn heap_bytes(&self) -> usize {
        let per_state = 3 * std::mem::size_of::<u32>() + std::mem::size_of::<[u32; 256]>();
        self.state_count() * per_state
    }
}
