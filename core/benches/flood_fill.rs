use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::{BoardEngine, GameConfig, MineLayout};

fn bench_first_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_reveal");
    for (name, config) in [
        ("classic", GameConfig::default()),
        ("large_sparse", GameConfig::new_unchecked(200, 200, 0.05)),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || BoardEngine::new(config, 42).expect("valid config"),
                |mut engine| black_box(engine.reveal((config.height / 2, config.width / 2))),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_open_empty_board(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((255, 255), &[]).expect("empty layout");
    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || BoardEngine::from_layout(layout.clone()),
            |mut engine| black_box(engine.reveal((0, 0))),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_first_reveal, bench_open_empty_board);
criterion_main!(benches);
