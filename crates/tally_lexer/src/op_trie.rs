//! Operator prefix tree with greedy longest-match.
//!
//! Built once per operator set; matching walks a `Copy` of the cursor and
//! never mutates scan state. Greedy semantics: when both `=` and `==` are
//! configured, `"=="` matches as one operator.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::cursor::Cursor;

/// The operator set used when none is configured.
pub const DEFAULT_OPERATORS: [&str; 6] = ["+", "-", "*", "/", "^", "%"];

/// One trie node: sparse children keyed by byte, and the operator ending
/// here, if any.
#[derive(Clone, Debug, Default)]
struct Node {
    children: FxHashMap<u8, Node>,
    terminal: Option<Box<str>>,
}

/// Prefix tree over a configured operator set.
#[derive(Clone, Debug, Default)]
pub struct OpTrie {
    root: Node,
}

impl OpTrie {
    /// Build a trie from an operator set.
    ///
    /// Cost is O(total operator bytes); callers that reconfigure
    /// operators in a hot loop pay it on every rebuild.
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for op in operators {
            trie.insert(op.as_ref());
        }
        trie
    }

    /// Add one operator.
    ///
    /// Empty strings and strings containing the sentinel byte are
    /// ignored: neither can ever be matched at a cursor position.
    pub fn insert(&mut self, operator: &str) {
        if operator.is_empty() || operator.contains('\0') {
            return;
        }
        let mut node = &mut self.root;
        for &b in operator.as_bytes() {
            node = node.children.entry(b).or_default();
        }
        node.terminal = Some(operator.into());
    }

    /// The longest configured operator starting at the cursor, if any.
    ///
    /// Walks edges for each subsequent input byte, remembering the
    /// deepest terminal seen; stops at the first byte with no edge. The
    /// caller's cursor is untouched; advancing past the match is the
    /// scanner's job.
    pub fn longest_match(&self, cursor: &Cursor<'_>) -> Option<&str> {
        let mut walk = *cursor;
        let mut node = &self.root;
        let mut best = None;
        while let Some(child) = node.children.get(&walk.current()) {
            if let Some(op) = child.terminal.as_deref() {
                best = Some(op);
            }
            node = child;
            walk.advance();
        }
        best
    }
}

/// The shared trie for [`DEFAULT_OPERATORS`], built once per process and
/// reused by every lexer instance that keeps the default set.
pub(crate) fn default_trie() -> &'static OpTrie {
    static DEFAULT: OnceLock<OpTrie> = OnceLock::new();
    DEFAULT.get_or_init(|| OpTrie::new(DEFAULT_OPERATORS))
}
