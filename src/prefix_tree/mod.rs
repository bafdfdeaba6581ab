//! Prefix trees (tries).
//!
//! A [`PrefixTree`] stores a set of words over a small [`Alphabet`], and answers
//! whether a word is stored, and whether any stored word starts with a given prefix.
//! Each operation takes time linear in the length of its input.
//!
//! Every node owns its children through `Box`es. Traversals and deallocation are
//! iterative, so arbitrarily long words are fine.

mod alphabet;
mod iterative_deallocator;

pub use alphabet::*;

use std::fmt;
use std::marker::PhantomData;

use log::trace;

use crate::error::{Error, Result};
use iterative_deallocator::deallocate_iteratively;

/// A node of the prefix tree. The root represents the empty prefix.
struct PrefixNode<A> {
    /// Whether the path leading to this node spells a stored word.
    is_word: bool,
    /// One slot per symbol of the alphabet
    children: Box<[Option<Box<PrefixNode<A>>>]>,
    alphabet: PhantomData<fn() -> A>,
}

impl<A: Alphabet> PrefixNode<A> {
    fn new() -> Self {
        PrefixNode {
            is_word: false,
            children: (0..A::SIZE).map(|_| None).collect(),
            alphabet: PhantomData,
        }
    }
}

/// A set of words over the alphabet `A`.
///
///```
/// use copse::prefix_tree::PrefixTree;
///
/// let mut tree: PrefixTree = PrefixTree::new();
/// tree.insert("cat")?;
/// tree.insert("car")?;
///
/// assert!(tree.search("cat")?);
/// assert!(!tree.search("ca")?);
/// assert!(tree.starts_with("ca")?);
/// assert!(tree.search("Cat").is_err());
/// # Ok::<(), copse::Error>(())
///```
pub struct PrefixTree<A: Alphabet = Lowercase> {
    root: PrefixNode<A>,
    /// The number of stored words
    words: usize,
}

impl<A: Alphabet> PrefixTree<A> {
    /// Creates an empty prefix tree.
    pub fn new() -> Self {
        PrefixTree {
            root: PrefixNode::new(),
            words: 0,
        }
    }

    /// Builds a prefix tree holding all of the given words.
    /// Fails on the first word that has a symbol outside the alphabet.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for word in words {
            tree.insert(word.as_ref())?;
        }
        Ok(tree)
    }

    /// The number of distinct stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns true if no word is stored. The empty word counts as a word.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Stores `word`. Returns `true` if it wasn't stored before.
    ///
    /// All of the symbols are checked before the tree is modified, so on an
    /// [`Error::InvalidSymbol`] the tree is left as it was.
    ///
    ///```
    /// use copse::prefix_tree::PrefixTree;
    /// use copse::Error;
    ///
    /// let mut tree: PrefixTree = PrefixTree::new();
    /// assert_eq!(tree.insert("tree"), Ok(true));
    /// assert_eq!(tree.insert("tree"), Ok(false));
    /// assert_eq!(
    ///     tree.insert("tr3e"),
    ///     Err(Error::InvalidSymbol { symbol: '3', position: 2 })
    /// );
    /// assert_eq!(tree.starts_with("tr"), Ok(true));
    /// assert_eq!(tree.len(), 1);
    ///```
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let path = Self::encode(word)?;

        let mut created = 0;
        let mut node = &mut self.root;
        for index in path {
            let child = &mut node.children[index];
            if child.is_none() {
                created += 1;
            }
            node = &mut **child.get_or_insert_with(|| Box::new(PrefixNode::new()));
        }

        let is_new = !node.is_word;
        node.is_word = true;
        if is_new {
            self.words += 1;
        }
        trace!("inserted {:?} ({} new nodes)", word, created);
        Ok(is_new)
    }

    /// Returns whether `word` is stored.
    pub fn search(&self, word: &str) -> Result<bool> {
        let path = Self::encode(word)?;
        Ok(self.find_node(&path).map_or(false, |node| node.is_word))
    }

    /// Returns whether some stored word starts with `prefix`.
    /// A stored word counts as its own prefix.
    ///
    /// By convention, `starts_with("")` is true if and only if the tree isn't empty.
    ///
    ///```
    /// use copse::prefix_tree::PrefixTree;
    ///
    /// let mut tree: PrefixTree = PrefixTree::new();
    /// assert_eq!(tree.starts_with(""), Ok(false));
    /// tree.insert("ab")?;
    /// assert_eq!(tree.starts_with(""), Ok(true));
    /// assert_eq!(tree.starts_with("ab"), Ok(true));
    /// assert_eq!(tree.starts_with("abc"), Ok(false));
    /// # Ok::<(), copse::Error>(())
    ///```
    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        let path = Self::encode(prefix)?;
        if path.is_empty() {
            // the root always exists, even with no words
            return Ok(!self.is_empty());
        }
        Ok(self.find_node(&path).is_some())
    }

    /// Returns all of the stored words that start with `prefix`, in alphabet order.
    ///
    ///```
    /// use copse::prefix_tree::PrefixTree;
    ///
    /// let tree: PrefixTree = PrefixTree::from_words(["tea", "ten", "to", "te", "inn"])?;
    /// assert_eq!(tree.words_with_prefix("te")?, vec!["te", "tea", "ten"]);
    /// assert_eq!(tree.words_with_prefix("")?.len(), 5);
    /// assert!(tree.words_with_prefix("x")?.is_empty());
    /// # Ok::<(), copse::Error>(())
    ///```
    pub fn words_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let path = Self::encode(prefix)?;
        let mut res = vec![];
        if let Some(node) = self.find_node(&path) {
            Self::for_each_word(node, prefix, |word| res.push(word.to_string()));
        }
        Ok(res)
    }

    /// Returns the number of stored words that start with `prefix`.
    pub fn count_with_prefix(&self, prefix: &str) -> Result<usize> {
        let path = Self::encode(prefix)?;
        let mut count = 0;
        if let Some(node) = self.find_node(&path) {
            Self::for_each_word(node, "", |_| count += 1);
        }
        Ok(count)
    }

    /// Translates a word into symbol indices, failing on the first symbol that isn't
    /// in the alphabet.
    fn encode(word: &str) -> Result<Vec<usize>> {
        word.chars()
            .enumerate()
            .map(|(position, symbol)| {
                A::index(symbol).ok_or(Error::InvalidSymbol { symbol, position })
            })
            .collect()
    }

    /// Follows the path of indices from the root.
    fn find_node(&self, path: &[usize]) -> Option<&PrefixNode<A>> {
        let mut node = &self.root;
        for &index in path {
            node = node.children[index].as_deref()?;
        }
        Some(node)
    }

    /// Calls `f` on every word in the subtree of `start`, in alphabet order.
    /// `prefix` is the word spelled by the path to `start`.
    fn for_each_word<F: FnMut(&str)>(start: &PrefixNode<A>, prefix: &str, mut f: F) {
        let mut word = prefix.to_string();
        if start.is_word {
            f(word.as_str());
        }

        // depth first. every frame holds a node and the next child slot to look at.
        let mut stack = vec![(start, 0)];
        while let Some((node, next)) = stack.pop() {
            let found = node.children[next..]
                .iter()
                .enumerate()
                .find_map(|(offset, child)| Some((next + offset, child.as_deref()?)));
            match found {
                Some((index, child)) => {
                    stack.push((node, index + 1));
                    word.push(A::symbol(index));
                    if child.is_word {
                        f(word.as_str());
                    }
                    stack.push((child, 0));
                }
                // done with `node`. The starting node's symbols belong to `prefix`.
                None if !stack.is_empty() => {
                    word.pop();
                }
                None => {}
            }
        }
    }
}

impl<A: Alphabet> Default for PrefixTree<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Alphabet> Drop for PrefixTree<A> {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.root);
    }
}

impl<A: Alphabet> fmt::Debug for PrefixTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = vec![];
        Self::for_each_word(&self.root, "", |word| words.push(word.to_string()));
        f.debug_set().entries(words).finish()
    }
}
