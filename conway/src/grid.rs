// grid.rs - Toroidal cell grid for Conway's Game of Life

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size grid of live/dead cells whose edges wrap around.
///
/// Cells are stored row-major (`y * width + x`). The dimensions never
/// change after construction; the only way to get a differently sized grid
/// is to build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRows", into = "GridRows")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid. Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// A grid where every cell is independently alive with probability `density`.
    pub fn random<R: Rng>(width: usize, height: usize, density: f64, rng: &mut R) -> Self {
        let mut grid = Self::new(width, height);
        grid.randomize(density, rng);
        grid
    }

    /// Build a grid from `(x, y)` coordinates of live cells; out-of-range
    /// coordinates wrap.
    pub fn from_live_cells(width: usize, height: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(width, height);
        for &(x, y) in live {
            grid.set(x % width, y % height, true);
        }
        grid
    }

    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in cells.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell state; coordinates outside the grid read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Cell state at `(x + dx, y + dy)` with both axes wrapping.
    pub fn wrapped(&self, x: usize, y: usize, dx: isize, dy: isize) -> bool {
        let wx = (x as isize + dx).rem_euclid(self.width as isize) as usize;
        let wy = (y as isize + dy).rem_euclid(self.height as isize) as usize;
        self.cells[wy * self.width + wx]
    }

    /// Set a cell. Returns `false` (and does nothing) when out of range.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flip a single cell. Returns `false` (and does nothing) when out of range.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    /// One text row per grid row: `#` live, `.` dead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// On-disk shape of a grid: a list of rows, each a list of 0/1.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct GridRows(Vec<Vec<u8>>);

impl From<Grid> for GridRows {
    fn from(grid: Grid) -> Self {
        GridRows(
            grid.cells
                .chunks(grid.width)
                .map(|row| row.iter().map(|&alive| u8::from(alive)).collect())
                .collect(),
        )
    }
}

impl TryFrom<GridRows> for Grid {
    type Error = String;

    fn try_from(GridRows(rows): GridRows) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err("grid must have at least one row and one column".to_string());
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(format!("row {y} has {} cells, expected {width}", row.len()));
            }
            for (x, value) in row.into_iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    other => return Err(format!("cell ({x}, {y}) has value {other}, expected 0 or 1")),
                }
            }
        }

        Ok(Grid { width, height, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(40, 30);
        assert_eq!(grid.dimensions(), (40, 30));
        assert_eq!(grid.population(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn set_get_toggle() {
        let mut grid = Grid::new(10, 10);
        assert!(grid.set(3, 4, true));
        assert!(grid.get(3, 4));
        assert!(!grid.get(4, 3));

        assert!(grid.toggle(3, 4));
        assert!(!grid.get(3, 4));
        assert!(grid.toggle(0, 9));
        assert!(grid.get(0, 9));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut grid = Grid::new(4, 3);
        assert!(!grid.toggle(4, 0));
        assert!(!grid.toggle(0, 3));
        assert!(!grid.set(10, 10, true));
        assert!(!grid.get(4, 0));
        assert!(grid.is_empty());
    }

    #[test]
    fn wrapped_lookup() {
        let mut grid = Grid::new(5, 4);
        grid.set(4, 3, true);
        assert!(grid.wrapped(0, 0, -1, -1));
        assert!(grid.wrapped(3, 2, 1, 1));
        assert!(!grid.wrapped(0, 0, 1, 1));
    }

    #[test]
    fn random_density_is_roughly_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(100, 100, 0.2, &mut rng);
        let pop = grid.population();
        // 10000 cells at 20%, expect about 2000
        assert!(pop > 1500 && pop < 2500, "population {pop}");

        let empty = Grid::random(10, 10, 0.0, &mut rng);
        assert!(empty.is_empty());
        let full = Grid::random(10, 10, 1.0, &mut rng);
        assert_eq!(full.population(), 100);
    }

    #[test]
    fn live_cells_reports_coordinates() {
        let grid = Grid::from_live_cells(5, 5, &[(0, 1), (1, 1), (2, 1)]);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn display_renders_rows() {
        let grid = Grid::from_live_cells(3, 2, &[(1, 0), (2, 1)]);
        assert_eq!(grid.to_string(), ".#.\n..#\n");
    }

    #[test]
    fn rows_serialize_as_nested_arrays() {
        let grid = Grid::from_live_cells(3, 2, &[(0, 0), (2, 1)]);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[1,0,0],[0,0,1]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(serde_json::from_str::<Grid>("[]").is_err());
        assert!(serde_json::from_str::<Grid>("[[]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[1,0],[1]]").is_err());
        assert!(serde_json::from_str::<Grid>("[[1,2]]").is_err());
    }
}
