use super::*;
extern crate test;
use test::Bencher;

const BENCH_SIZE: usize = 10_000;

#[bench]
fn bench_forest(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut forest = DisjointSetForest::new(BENCH_SIZE);
    b.iter(|| {
        let action = random_forest_action(&mut rng, BENCH_SIZE);
        let res = match action {
            ForestAction::Unite { x, y } => forest.unite(x, y).is_ok(),
            ForestAction::Connected { x, y } => forest.connected(x, y).is_ok(),
            ForestAction::Find { x } => forest.find(x).is_ok(),
            ForestAction::GroupSize { x } => forest.group_size(x).is_ok(),
        };
        test::bench::black_box(res);
    });
}

#[bench]
fn bench_prefix_tree(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut tree: PrefixTree = PrefixTree::new();
    b.iter(|| {
        let res = match random_word_action(&mut rng) {
            WordAction::Insert { word } => tree.insert(&word).is_ok(),
            WordAction::Search { word } => tree.search(&word).is_ok(),
            WordAction::StartsWith { prefix } => tree.starts_with(&prefix).is_ok(),
            WordAction::WordsWithPrefix { prefix } => tree.count_with_prefix(&prefix).is_ok(),
        };
        test::bench::black_box(res);
    });
}

#[bench]
fn bench_range_sum(b: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let mut tree: RangeSumTree = (0..BENCH_SIZE as i64).collect();
    b.iter(|| {
        let res = match random_sum_action(&mut rng, BENCH_SIZE) {
            SumAction::Update { l, r, delta } => tree.update(l, r, delta).map(|()| 0),
            SumAction::Query { l, r } => tree.query(l, r),
            SumAction::QueryImm { l, r } => tree.query_imm(l, r),
            SumAction::Get { index } => tree.get(index),
        };
        test::bench::black_box(res);
    });
}
