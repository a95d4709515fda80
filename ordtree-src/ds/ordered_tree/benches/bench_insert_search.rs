use std::collections::BTreeSet;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use ordered_tree::OrderedTree;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sorted_vec_set::SortedVecSet;

fn rand_seq<T, I, R>(iter: I, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut res: Vec<_> = iter.into_iter().collect();
    res.shuffle(rng);
    res
}

fn bench_insert_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_tree");

    let mut rng = ChaCha20Rng::from_seed([
        0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
        0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
        0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
    ]);
    let len = 10_u32.pow(5);
    // even values are present, odd values miss
    let a = rand_seq((0..len).map(|x| 2 * x), &mut rng);
    let search_query = rand_seq(0..2 * len, &mut rng);

    let build_tree = || {
        let mut tree = OrderedTree::new(a[0]);
        tree.extend(a[1..].iter().copied());
        tree
    };
    let tree = build_tree();
    let btree: BTreeSet<_> = a.iter().copied().collect();
    let naive = {
        let mut naive = SortedVecSet::new();
        for &x in &a {
            naive.insert(x);
        }
        naive
    };
    eprintln!("height: {}", tree.height());

    group
        .bench_function(BenchmarkId::new("tree", "insert-rand"), |b| {
            b.iter(|| black_box(build_tree()))
        })
        .bench_function(BenchmarkId::new("btree", "insert-rand"), |b| {
            b.iter(|| black_box(a.iter().copied().collect::<BTreeSet<_>>()))
        });

    macro_rules! bench_fn {
        ($g:ident, $name:ident, $fn:ident, $fst:literal, $snd:literal, $iter:expr) => {
            $g.bench_function(BenchmarkId::new($fst, $snd), |b| {
                b.iter(|| {
                    for i in $iter {
                        black_box($name.$fn(&i));
                    }
                })
            });
        };
    }

    bench_fn! { group, tree, search, "tree", "search-rand", search_query.iter().copied() }
    bench_fn! { group, btree, get, "btree", "search-rand", search_query.iter().copied() }
    bench_fn! { group, naive, contains, "naive", "search-rand", search_query.iter().copied() }

    group.finish();
}

criterion_group!(benches, bench_insert_search);
criterion_main!(benches);
