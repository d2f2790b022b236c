use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{GildedRose, Item};

const NAMES: [&str; 6] = [
    "+5 Dexterity Vest",
    "Aged Brie",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured",
    "Elixir of the Mongoose",
];

/// Deterministic mixed inventory covering every category and both sides of expiry.
fn inventory(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let sell_in = (i % 31) as i64 - 15;
            let quality = (i % 51) as i64;
            Item::new(name, sell_in, quality)
        })
        .collect()
}

fn bench_update_quality(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_quality");

    for size in [100usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let items = inventory(size);
            b.iter(|| {
                let mut shop = GildedRose::new(items.clone());
                shop.update_quality();
                black_box(shop)
            });
        });
    }

    group.finish();
}

fn bench_simulate_month(c: &mut Criterion) {
    let items = inventory(1_000);
    c.bench_function("simulate_30_days_1000_items", |b| {
        b.iter(|| {
            let mut shop = GildedRose::new(items.clone());
            shop.simulate(black_box(30));
            black_box(shop)
        });
    });
}

criterion_group!(benches, bench_update_quality, bench_simulate_month);
criterion_main!(benches);
