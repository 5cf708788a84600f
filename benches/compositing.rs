use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_board::core::{Board, BoardEvent, Grid, Piece};
use tetris_board::types::PieceKind;

fn settled_grid() -> Grid {
    let mut grid = Grid::empty(21, 10);
    for row in 15..21 {
        for col in 0..9 {
            grid.set((row, col), 'L');
        }
    }
    grid
}

fn bench_replace_piece(c: &mut Criterion) {
    let mut board = Board::new(21, 10).unwrap();
    board.replace_static_grid(settled_grid()).unwrap();
    let piece = Piece::from_kind(PieceKind::T, (3, 3));

    c.bench_function("replace_piece_21x10", |b| {
        b.iter(|| {
            board.replace_piece(black_box(piece.clone())).unwrap();
        })
    });
}

fn bench_replace_static_grid(c: &mut Criterion) {
    let mut board = Board::new(21, 10).unwrap();
    board
        .replace_piece(Piece::from_kind(PieceKind::I, (0, 3)))
        .unwrap();
    let grid = settled_grid();

    c.bench_function("replace_static_grid_21x10", |b| {
        b.iter(|| {
            board.replace_static_grid(black_box(grid.clone())).unwrap();
        })
    });
}

fn bench_apply_tick_json(c: &mut Criterion) {
    let mut board = Board::new(21, 10).unwrap();
    let line = BoardEvent::tick(&Piece::from_kind(PieceKind::S, (5, 2)))
        .to_json()
        .unwrap();

    c.bench_function("apply_tick_json", |b| {
        b.iter(|| {
            let ev = BoardEvent::parse(black_box(&line)).unwrap();
            board.apply(ev).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_replace_piece,
    bench_replace_static_grid,
    bench_apply_tick_json
);
criterion_main!(benches);
