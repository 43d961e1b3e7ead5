//! Benchmarks for word placement and puzzle generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordsearch::grid::Grid;
use wordsearch::placement::{candidates, letters_of, Orientation};
use wordsearch::{svg, Mask, Puzzle, PuzzleConfig, SvgLayout};

const PLANETS: [&str; 8] = [
    "MERCURY", "VENUS", "EARTH", "MARS", "JUPITER", "SATURN", "URANUS", "NEPTUNE",
];

const ELEMENTS: [&str; 20] = [
    "HYDROGEN", "HELIUM", "LITHIUM", "BERYLLIUM", "BORON", "CARBON", "NITROGEN", "OXYGEN",
    "FLUORINE", "NEON", "SODIUM", "MAGNESIUM", "ALUMINIUM", "SILICON", "PHOSPHORUS", "SULFUR",
    "CHLORINE", "ARGON", "POTASSIUM", "CALCIUM",
];

/// Benchmark a complete 13x13 planets puzzle.
fn bench_make_planets(c: &mut Criterion) {
    let config = PuzzleConfig::new(13, 13).with_words(PLANETS);
    let mut puzzle = Puzzle::new(config).expect("valid config");
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("make_planets", |b| {
        b.iter(|| puzzle.make_with_rng(black_box(10), &mut rng))
    });
}

/// Benchmark a crowded 20x20 puzzle with backwards words and a circle mask.
fn bench_make_elements_circle(c: &mut Criterion) {
    let config = PuzzleConfig::new(20, 20)
        .with_words(ELEMENTS)
        .with_mask(Mask::Circle)
        .with_backwards(true);
    let mut puzzle = Puzzle::new(config).expect("valid config");
    let mut rng = StdRng::seed_from_u64(2);

    let mut group = c.benchmark_group("elements");
    group.sample_size(20);
    group.bench_function("make_circle", |b| {
        b.iter(|| puzzle.make_with_rng(black_box(50), &mut rng))
    });
    group.finish();
}

/// Benchmark the candidate scan on the largest grid.
fn bench_candidates(c: &mut Criterion) {
    let grid = Grid::new(32, 32);
    let letters = letters_of("PHOSPHORUS");

    c.bench_function("candidates_32x32", |b| {
        b.iter(|| candidates(black_box(&grid), &letters, Orientation::UP_RIGHT))
    });
}

/// Benchmark rendering a finished puzzle as SVG.
fn bench_render_svg(c: &mut Criterion) {
    let config = PuzzleConfig::new(13, 13).with_words(PLANETS);
    let mut puzzle = Puzzle::new(config).expect("valid config");
    let mut rng = StdRng::seed_from_u64(3);
    puzzle.make_with_rng(100, &mut rng);
    let Some(grid) = puzzle.grid() else {
        return;
    };
    let layout = SvgLayout::default();

    c.bench_function("render_svg", |b| {
        b.iter(|| svg::render(black_box(grid), puzzle.words(), &layout))
    });
}

criterion_group!(
    benches,
    bench_make_planets,
    bench_make_elements_circle,
    bench_candidates,
    bench_render_svg
);
criterion_main!(benches);
