// rules.rs - Conway transition rule (B3/S23) on a toroidal grid

use crate::grid::Grid;

/// Offsets of the eight Moore neighbours.
#[rustfmt::skip]
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Live neighbours of `(x, y)`, wrapping at every edge. Always in `0..=8`.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| grid.wrapped(x, y, dx, dy))
        .count() as u8
}

/// Next state of one cell given its current state and live-neighbour count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Compute the generation after `current` into `next`.
///
/// Every read goes to `current` and every write to `next`, so no cell ever
/// sees a half-updated neighbourhood. The caller swaps the buffers.
///
/// # Panics
/// If the two grids differ in shape.
pub fn step_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        current.dimensions(),
        next.dimensions(),
        "double buffer shapes diverged"
    );
    let width = current.width();
    for (i, cell) in next.cells_mut().iter_mut().enumerate() {
        let (x, y) = (i % width, i / width);
        *cell = next_state(current.get(x, y), live_neighbors(current, x, y));
    }
}

/// Pure form of [`step_into`]: returns a fresh grid, leaves the input alone.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::new(current.width(), current.height());
    step_into(current, &mut next);
    next
}
