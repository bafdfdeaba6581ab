#[cfg(feature = "bench")]
pub mod bench;

use copse::{DisjointSetForest, Error, PrefixTree, RangeSumTree};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::{self, Rng};
use std::collections::BTreeSet;

///////////////// naive models ///////////////////
// straightforward versions of every structure, to compare against

/// Every element holds the label of its group. Merging relabels a whole group.
#[derive(Clone, Debug)]
pub struct NaiveForest {
    label: Vec<usize>,
}

impl NaiveForest {
    pub fn new(n: usize) -> Self {
        NaiveForest {
            label: (0..n).collect(),
        }
    }

    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let (lx, ly) = (self.label[x], self.label[y]);
        if lx == ly {
            return false;
        }
        for label in self.label.iter_mut() {
            if *label == ly {
                *label = lx;
            }
        }
        true
    }

    pub fn connected(&self, x: usize, y: usize) -> bool {
        self.label[x] == self.label[y]
    }

    pub fn group_size(&self, x: usize) -> usize {
        self.label.iter().filter(|&&l| l == self.label[x]).count()
    }

    pub fn group_count(&self) -> usize {
        self.label.iter().collect::<BTreeSet<_>>().len()
    }
}

/// Word sets are kept sorted, which is the same as alphabet order for lowercase words.
#[derive(Clone, Debug, Default)]
pub struct NaiveWordSet {
    words: BTreeSet<String>,
}

impl NaiveWordSet {
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_string())
    }

    pub fn search(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.words
            .range(prefix.to_string()..)
            .take_while(|word| word.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        !self.words_with_prefix(prefix).is_empty()
    }
}

pub fn is_lowercase_word(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}

///////////////// round actions ///////////////////

/// Something to perform on a forest in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ForestAction {
    Unite { x: usize, y: usize },
    Connected { x: usize, y: usize },
    Find { x: usize },
    GroupSize { x: usize },
}

/// Something to perform on a prefix tree in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum WordAction {
    Insert { word: String },
    Search { word: String },
    StartsWith { prefix: String },
    WordsWithPrefix { prefix: String },
}

/// Something to perform on a range sum tree in one round of tests.
/// Ranges are inclusive, like the tree's own interface.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SumAction {
    Update { l: usize, r: usize, delta: i64 },
    Query { l: usize, r: usize },
    QueryImm { l: usize, r: usize },
    Get { index: usize },
}

fn out_of_range<T>(index: usize, len: usize) -> copse::Result<T> {
    Err(Error::IndexOutOfRange { index, len })
}

fn naive_sum(naive: &[i64], l: usize, r: usize) -> i64 {
    naive[l..=r].iter().sum()
}

/// Runs one round on both the forest and the model, and compares the results.
/// Indices may be out of range, in which case both the error and the lack of
/// change are checked.
pub fn run_forest_round(
    action: &ForestAction,
    forest: &mut DisjointSetForest,
    naive: &mut NaiveForest,
) -> Result<(), TestCaseError> {
    use ForestAction::*;
    let n = forest.len();

    match *action {
        Unite { x, y } if x < n && y < n => {
            prop_assert_eq!(forest.unite(x, y), Ok(naive.unite(x, y)));
            prop_assert!(forest.connected(x, y)?);
        }
        Connected { x, y } if x < n && y < n => {
            let res = forest.connected(x, y)?;
            prop_assert_eq!(res, naive.connected(x, y));
            prop_assert_eq!(forest.connected(y, x)?, res);
        }
        Find { x } if x < n => {
            let root = forest.find(x)?;
            prop_assert!(naive.connected(x, root));
            // the representative is stable until the next merge
            prop_assert_eq!(forest.find(root)?, root);
            prop_assert_eq!(forest.find(x)?, root);
        }
        GroupSize { x } if x < n => {
            prop_assert_eq!(forest.group_size(x)?, naive.group_size(x));
        }
        Unite { x, y } => {
            let before = forest.groups();
            prop_assert_eq!(forest.unite(x, y), out_of_range(if x < n { y } else { x }, n));
            prop_assert_eq!(forest.groups(), before);
        }
        Connected { x, y } => {
            prop_assert_eq!(
                forest.connected(x, y),
                out_of_range(if x < n { y } else { x }, n)
            );
        }
        Find { x } => {
            prop_assert_eq!(forest.find(x), out_of_range(x, n));
        }
        GroupSize { x } => {
            prop_assert_eq!(forest.group_size(x), out_of_range(x, n));
        }
    }

    prop_assert_eq!(forest.group_count(), naive.group_count());
    Ok(())
}

pub fn run_word_round(
    action: &WordAction,
    tree: &mut PrefixTree,
    naive: &mut NaiveWordSet,
) -> Result<(), TestCaseError> {
    use WordAction::*;
    let (word, valid) = match action {
        Insert { word } | Search { word } => (word, is_lowercase_word(word)),
        StartsWith { prefix } | WordsWithPrefix { prefix } => (prefix, is_lowercase_word(prefix)),
    };

    if !valid {
        let before = tree.words_with_prefix("")?;
        let res = match action {
            Insert { word } => tree.insert(word).map(|_| ()),
            Search { word } => tree.search(word).map(|_| ()),
            StartsWith { prefix } => tree.starts_with(prefix).map(|_| ()),
            WordsWithPrefix { prefix } => tree.words_with_prefix(prefix).map(|_| ()),
        };
        let is_invalid_symbol = matches!(res, Err(Error::InvalidSymbol { .. }));
        prop_assert!(is_invalid_symbol, "{:?} accepted {:?}", action, word);
        prop_assert_eq!(tree.words_with_prefix("")?, before);
        return Ok(());
    }

    match action {
        Insert { word } => {
            prop_assert_eq!(tree.insert(word)?, naive.insert(word));
            prop_assert!(tree.search(word)?);
        }
        Search { word } => {
            prop_assert_eq!(tree.search(word)?, naive.search(word));
        }
        StartsWith { prefix } => {
            prop_assert_eq!(tree.starts_with(prefix)?, naive.starts_with(prefix));
            prop_assert_eq!(
                tree.count_with_prefix(prefix)?,
                naive.words_with_prefix(prefix).len()
            );
        }
        WordsWithPrefix { prefix } => {
            prop_assert_eq!(tree.words_with_prefix(prefix)?, naive.words_with_prefix(prefix));
        }
    }

    prop_assert_eq!(tree.len(), naive.words.len());
    prop_assert_eq!(tree.starts_with("")?, !naive.words.is_empty());
    Ok(())
}

pub fn run_sum_round(
    action: &SumAction,
    tree: &mut RangeSumTree,
    naive: &mut Vec<i64>,
) -> Result<(), TestCaseError> {
    use SumAction::*;
    let len = naive.len();

    match *action {
        Update { l, r, delta } if l <= r && r < len => {
            tree.update(l, r, delta)?;
            for value in &mut naive[l..=r] {
                *value += delta;
            }
        }
        Query { l, r } if l <= r && r < len => {
            prop_assert_eq!(tree.query(l, r)?, naive_sum(naive, l, r));
        }
        QueryImm { l, r } if l <= r && r < len => {
            prop_assert_eq!(tree.query_imm(l, r)?, naive_sum(naive, l, r));
        }
        Get { index } if index < len => {
            prop_assert_eq!(tree.get(index)?, naive[index]);
        }
        Update { l, r, delta } => {
            prop_assert!(tree.update(l, r, delta).is_err());
        }
        Query { l, r } => {
            prop_assert!(tree.query(l, r).is_err());
        }
        QueryImm { l, r } => {
            prop_assert!(tree.query_imm(l, r).is_err());
        }
        Get { index } => {
            prop_assert_eq!(tree.get(index), Err(Error::IndexOutOfRange { index, len }));
        }
    }

    prop_assert_eq!(tree.total(), naive.iter().sum::<i64>());
    Ok(())
}

///////////////// consistency checks ///////////////////

pub fn check_forest_consistency(n: usize, actions: &[ForestAction]) -> Result<(), TestCaseError> {
    let mut forest = DisjointSetForest::new(n);
    let mut naive = NaiveForest::new(n);
    for action in actions {
        run_forest_round(action, &mut forest, &mut naive)?;
        forest.assert_correctness();
    }
    Ok(())
}

pub fn check_word_consistency(actions: &[WordAction]) -> Result<(), TestCaseError> {
    let mut tree = PrefixTree::new();
    let mut naive = NaiveWordSet::default();
    for action in actions {
        run_word_round(action, &mut tree, &mut naive)?;
    }
    prop_assert_eq!(tree.words_with_prefix("")?, naive.words_with_prefix(""));
    Ok(())
}

pub fn check_sum_consistency(initial: &[i64], actions: &[SumAction]) -> Result<(), TestCaseError> {
    let mut tree: RangeSumTree = initial.iter().cloned().collect();
    let mut naive = initial.to_vec();
    for action in actions {
        run_sum_round(action, &mut tree, &mut naive)?;
        tree.assert_correctness();
    }
    prop_assert_eq!(tree.to_vec(), naive);
    Ok(())
}

///////////////// random rounds ///////////////////

/// A random inclusive range inside `0..len`. `len` must be positive.
pub fn random_range(rng: &mut impl Rng, len: usize) -> (usize, usize) {
    let res = (rng.gen_range(0..len), rng.gen_range(0..len));
    if res.0 <= res.1 {
        res
    } else {
        (res.1, res.0)
    }
}

const MAX_ADD: i64 = 200;

pub fn random_forest_action(rng: &mut impl Rng, n: usize) -> ForestAction {
    use ForestAction::*;
    // one in a hundred indices is out of range
    let mut index = || rng.gen_range(0..n + n / 100 + 1);
    match index() % 4 {
        0 | 1 => Unite {
            x: index(),
            y: index(),
        },
        2 => Connected {
            x: index(),
            y: index(),
        },
        _ => {
            if rand::random() {
                Find { x: index() }
            } else {
                GroupSize { x: index() }
            }
        }
    }
}

pub fn random_word(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| {
            // mostly a small alphabet, to make the words share prefixes
            if rng.gen_ratio(1, 200) {
                'X'
            } else {
                rng.gen_range('a'..='e')
            }
        })
        .collect()
}

pub fn random_word_action(rng: &mut impl Rng) -> WordAction {
    use WordAction::*;
    let word = random_word(rng, 6);
    match rng.gen_range(0..4) {
        0 => Insert { word },
        1 => Search { word },
        2 => StartsWith { prefix: word },
        3 => WordsWithPrefix { prefix: word },
        _ => panic!(),
    }
}

pub fn random_sum_action(rng: &mut impl Rng, len: usize) -> SumAction {
    use SumAction::*;
    let (l, r) = random_range(rng, len);
    match rng.gen_range(0..4) {
        0 => Update {
            l,
            r,
            delta: rng.gen_range(-MAX_ADD..=MAX_ADD),
        },
        1 => Query { l, r },
        2 => QueryImm { l, r },
        3 => Get { index: l },
        _ => panic!(),
    }
}

pub fn check_consistency(num_rounds: usize) {
    let mut rng = rand::thread_rng();

    const N: usize = 300;
    let actions: Vec<_> = (0..num_rounds)
        .map(|_| random_forest_action(&mut rng, N))
        .collect();
    check_forest_consistency(N, &actions).unwrap();

    let actions: Vec<_> = (0..num_rounds).map(|_| random_word_action(&mut rng)).collect();
    check_word_consistency(&actions).unwrap();

    const LEN: usize = 200;
    let initial: Vec<i64> = (0..LEN).map(|_| rng.gen_range(-MAX_ADD..=MAX_ADD)).collect();
    let actions: Vec<_> = (0..num_rounds)
        .map(|_| random_sum_action(&mut rng, LEN))
        .collect();
    check_sum_consistency(&initial, &actions).unwrap();
}
