use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazegrid::{Cell, Charset, Direction, Grid};

const WIDTH: usize = 100;
const HEIGHT: usize = 100;

fn carved_grid() -> Grid {
    // every row open to the east, joined by the first column
    let mut grid = Grid::new(WIDTH, HEIGHT).unwrap();
    let ids: Vec<_> = grid.cells().iter().map(Cell::id).collect();
    for id in ids {
        grid.link_towards(id, Direction::East);
        if grid[id].column() == 0 {
            grid.link_towards(id, Direction::South);
        }
    }
    grid
}

pub fn build(c: &mut Criterion) {
    c.bench_function("build", |b| {
        b.iter(|| Grid::new(black_box(WIDTH), black_box(HEIGHT)).unwrap())
    });
}

pub fn render(c: &mut Criterion) {
    let grid = carved_grid();
    c.bench_function("render", |b| {
        b.iter(|| black_box(&grid).render(black_box(&Charset::BLOCK)))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = build, render}
criterion_main!(benches);
