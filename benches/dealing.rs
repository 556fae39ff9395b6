use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rummy_rs::deal::deal_hands;
use rummy_rs::deck::Deck;

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_deck", |b| b.iter(|| black_box(Deck::generate())));
}

fn bench_shuffle(c: &mut Criterion) {
    let mut g = c.benchmark_group("shuffle");
    g.bench_function("seeded", |b| {
        b.iter(|| {
            let mut d = Deck::generate();
            d.shuffle_seeded(black_box(42)).unwrap();
            d
        })
    });
    g.bench_function("os", |b| {
        b.iter(|| {
            let mut d = Deck::generate();
            d.shuffle_os().unwrap();
            d
        })
    });
    g.finish();
}

fn bench_deal(c: &mut Criterion) {
    let mut g = c.benchmark_group("deal_hands");
    for players in [2usize, 4, 6] {
        g.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &n| {
            b.iter(|| deal_hands(Deck::generate(), black_box(n)).unwrap())
        });
    }
    g.finish();
}

criterion_group!(benches, bench_generate, bench_shuffle, bench_deal);
criterion_main!(benches);
