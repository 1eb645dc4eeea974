//! Structural validation of built automata.
//!
//! Checks the invariants of the flat tables: link bounds, the root's
//! failure self-loop, dictionary-suffix chain termination, the all-zero
//! sentinel row, and goto-graph reachability. Useful in tests and when
//! debugging construction changes; a trie produced by
//! [`TrieBuilder::build`](crate::TrieBuilder::build) is expected to pass.

use crate::trie::{Trie, NIL, ROOT};

/// Statistics gathered while validating a trie.
#[derive(Debug, Clone, Default)]
pub struct TrieStats {
    /// Number of states in the flat tables, sentinel and root included.
    pub state_count: usize,
    /// Number of terminal states (`dict != 0`).
    pub terminal_count: usize,
    /// Number of goto transitions.
    pub transition_count: usize,
    /// States not reachable from the root via goto edges.
    pub orphaned_count: usize,
}

/// Outcome of [`validate_trie`].
#[derive(Debug, Clone)]
pub struct TrieValidationResult {
    /// Violations that make the automaton unusable.
    pub errors: Vec<String>,
    /// Suspicious but non-fatal findings.
    pub warnings: Vec<String>,
    /// Statistics gathered during validation.
    pub stats: TrieStats,
}

impl TrieValidationResult {
    /// True when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the structural invariants of a flat automaton.
pub fn validate_trie(trie: &Trie) -> TrieValidationResult {
    let n = trie.fail.len();
    let mut result = TrieValidationResult {
        errors: Vec::new(),
        warnings: Vec::new(),
        stats: TrieStats {
            state_count: n,
            ..TrieStats::default()
        },
    };

    if trie.dict_link.len() != n || trie.dict.len() != n || trie.trans.len() != n {
        result.errors.push(format!(
            "table lengths disagree: fail={}, dict_link={}, dict={}, trans={}",
            n,
            trie.dict_link.len(),
            trie.dict.len(),
            trie.trans.len()
        ));
        return result;
    }

    if n < 2 {
        result
            .errors
            .push(format!("too few states for sentinel and root: {}", n));
        return result;
    }

    // Sentinel row absorbs: every field of state 0 must be zero.
    if trie.fail[0] != NIL || trie.dict_link[0] != NIL || trie.dict[0] != 0 {
        result.errors.push("sentinel state 0 has links".to_string());
    }
    if trie.trans[0].iter().any(|&t| t != NIL) {
        result
            .errors
            .push("sentinel state 0 has goto transitions".to_string());
    }

    if trie.fail[ROOT as usize] != ROOT {
        result.errors.push(format!(
            "root failure link must be the root, found {}",
            trie.fail[ROOT as usize]
        ));
    }

    // Reachability and depth via BFS over goto edges from the root.
    let mut depth = vec![usize::MAX; n];
    depth[ROOT as usize] = 0;
    let mut queue = vec![ROOT as usize];
    while let Some(state) = queue.pop() {
        for &target in trie.trans[state].iter() {
            let target = target as usize;
            if target != NIL as usize && target < n && depth[target] == usize::MAX {
                depth[target] = depth[state] + 1;
                queue.push(target);
            }
        }
    }

    for state in 1..n {
        result.stats.transition_count +=
            trie.trans[state].iter().filter(|&&t| t != NIL).count();
        if trie.dict[state] != 0 {
            result.stats.terminal_count += 1;
        }

        // Goto targets must be real non-root states.
        for (byte, &target) in trie.trans[state].iter().enumerate() {
            if target != NIL && (target as usize >= n || target <= ROOT) {
                result.errors.push(format!(
                    "state {} goto on byte {:#04x} targets invalid state {}",
                    state, byte, target
                ));
            }
        }

        if state == ROOT as usize {
            continue;
        }

        let fail = trie.fail[state] as usize;
        if fail == NIL as usize || fail >= n {
            result
                .errors
                .push(format!("state {} has invalid failure link {}", state, fail));
        } else if fail == state {
            result
                .errors
                .push(format!("state {} has a self-referencing failure link", state));
        } else if depth[state] != usize::MAX
            && depth[fail] != usize::MAX
            && depth[fail] >= depth[state]
        {
            // A failure target is a proper suffix, hence strictly shallower.
            result.errors.push(format!(
                "state {} (depth {}) fails to state {} (depth {})",
                state, depth[state], fail, depth[fail]
            ));
        }

        // Dictionary-suffix chains must reach NIL through terminal states.
        let mut link = trie.dict_link[state] as usize;
        let mut hops = 0usize;
        while link != NIL as usize {
            if link >= n {
                result.errors.push(format!(
                    "state {} dictionary-suffix chain leaves the table at {}",
                    state, link
                ));
                break;
            }
            if trie.dict[link] == 0 {
                result.errors.push(format!(
                    "state {} dictionary-suffix chain visits non-terminal state {}",
                    state, link
                ));
                break;
            }
            hops += 1;
            if hops > n {
                result.errors.push(format!(
                    "state {} dictionary-suffix chain does not terminate",
                    state
                ));
                break;
            }
            link = trie.dict_link[link] as usize;
        }

        if depth[state] == usize::MAX {
            result.stats.orphaned_count += 1;
        }
    }

    if result.stats.orphaned_count > 0 {
        result.warnings.push(format!(
            "{} states unreachable from the root",
            result.stats.orphaned_count
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrieBuilder;

    #[test]
    fn built_trie_is_valid() {
        let mut builder = TrieBuilder::new();
        builder.add_strings(["he", "she", "his", "hers"]);
        let trie = builder.build();

        let result = validate_trie(&trie);
        assert!(result.is_valid(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "warnings: {:?}", result.warnings);
        // sentinel + root + {h,he,her,hers,hi,his,s,sh,she}
        assert_eq!(result.stats.state_count, 11);
        assert_eq!(result.stats.terminal_count, 4);
        assert_eq!(result.stats.orphaned_count, 0);
    }

    #[test]
    fn empty_trie_is_valid() {
        let trie = TrieBuilder::new().build();
        let result = validate_trie(&trie);
        assert!(result.is_valid(), "errors: {:?}", result.errors);
        assert_eq!(result.stats.state_count, 2);
        assert_eq!(result.stats.terminal_count, 0);
        assert_eq!(result.stats.transition_count, 0);
    }

    #[test]
    fn corrupted_failure_link_is_reported() {
        let mut builder = TrieBuilder::new();
        builder.add_strings(["ab", "bc"]);
        let mut trie = builder.build();

        let last = trie.fail.len() - 1;
        trie.fail[last] = last as u32;

        let result = validate_trie(&trie);
        assert!(!result.is_valid());
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("self-referencing")));
    }

    #[test]
    fn corrupted_dict_link_is_reported() {
        let mut builder = TrieBuilder::new();
        builder.add_strings(["she", "he"]);
        let mut trie = builder.build();

        // Point some dictionary-suffix link at a non-terminal state.
        let non_terminal = (1..trie.dict.len())
            .find(|&i| trie.dict[i] == 0)
            .unwrap() as u32;
        let victim = (1..trie.dict.len()).find(|&i| trie.dict[i] != 0).unwrap();
        trie.dict_link[victim] = non_terminal;

        let result = validate_trie(&trie);
        assert!(!result.is_valid());
    }
}
