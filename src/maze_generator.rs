//! Maze generation
//!
//! Mazes are carved on a working grid of double resolution: rooms sit at even
//! (row, column) positions, the cells with exactly one odd coordinate are the
//! connectors between neighboring rooms, and the cells with both coordinates
//! odd are blocks that are never carved.
//!
//! Carving grows a spanning tree from index 0. Every walk starts from a cell
//! not yet touching the tree and wanders randomly. When the walk is about to
//! touch its own unfinished trunk it is erased back to the start, and when it
//! touches the finished tree it is committed as a new branch.

use std::iter;
use std::ops::AddAssign;

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::grid::{to_column, to_index, to_row, Grid, Tile};
use crate::MazeError;

/// State of a working grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Empty,
    /// Separates diagonal rooms, never carved
    Block,
    /// Part of the walk in progress
    BuildingPath,
    /// Part of the finished maze
    GeneratedPath,
}

/// Counters collected while carving one maze
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct CarveStats {
    walks: usize,
    erasures: usize,
    steps: usize,
}

impl AddAssign for CarveStats {
    fn add_assign(&mut self, other: Self) {
        self.walks += other.walks;
        self.erasures += other.erasures;
        self.steps += other.steps;
    }
}

/// Outcome of a single walk iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// The walk grew by one cell
    Advanced,
    /// The walk ran into itself and was cut back to its start
    Erased,
    /// The walk reached the maze and became part of it
    Committed,
}

/// Tentative path of one walk.
///
/// `trunk` is used as a stack; the start cell is kept apart so that the walk
/// always has a cell to continue from.
#[derive(Debug)]
struct Walk {
    start: usize,
    trunk: Vec<usize>,
}

impl Walk {
    fn new(start: usize) -> Self {
        Self {
            start,
            trunk: Vec::new(),
        }
    }

    fn current(&self) -> usize {
        self.trunk.last().copied().unwrap_or(self.start)
    }
}

/// Doubled resolution grid that the maze is carved on
#[derive(Clone, Debug)]
struct WorkingGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl WorkingGrid {
    /// Up, down, left, right
    const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    /// Create grid for a maze of `width` x `height` rooms.
    fn new(width: usize, height: usize) -> Self {
        let rows = height * 2 - 1;
        let columns = width * 2 - 1;
        let mut cells = vec![Cell::Empty; rows * columns];
        for row in (1..rows).step_by(2) {
            for column in (1..columns).step_by(2) {
                cells[to_index(row, column, columns)] = Cell::Block;
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// In-bounds, non-block cells next to `index`
    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let row = to_row(index, self.columns);
        let column = to_column(index, self.columns);
        Self::DIRECTIONS
            .iter()
            .filter_map(move |&(dy, dx)| {
                let y = row.checked_add_signed(dy)?;
                let x = column.checked_add_signed(dx)?;
                (y < self.rows && x < self.columns).then(|| to_index(y, x, self.columns))
            })
            .filter(move |&neighbor| self.cells[neighbor] != Cell::Block)
    }

    /// Empty cell with nothing but empty cells around it
    fn is_isolated(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
            && self
                .neighbors(index)
                .all(|neighbor| self.cells[neighbor] == Cell::Empty)
    }

    /// First isolated cell in index order
    fn find_isolated(&self) -> Option<usize> {
        (0..self.cells.len()).find(|&index| self.is_isolated(index))
    }

    /// Carve walks until no isolated cell is left.
    fn generate_paths<R: Rng>(&mut self, random: &mut R) -> CarveStats {
        let mut stats = CarveStats::default();
        self.cells[0] = Cell::GeneratedPath;
        while let Some(start) = self.find_isolated() {
            stats += self.generate_path(start, random);
        }
        stats
    }

    /// Walk from `start` until the walk is committed to the maze.
    fn generate_path<R: Rng>(&mut self, start: usize, random: &mut R) -> CarveStats {
        let mut stats = CarveStats {
            walks: 1,
            ..CarveStats::default()
        };
        let mut walk = Walk::new(start);
        self.cells[start] = Cell::BuildingPath;
        loop {
            match self.step(&mut walk, random) {
                Step::Advanced => stats.steps += 1,
                Step::Erased => stats.erasures += 1,
                Step::Committed => break,
            }
        }
        trace!(
            "Walk from {} joined the maze after {} steps and {} loop erasures",
            start,
            stats.steps,
            stats.erasures
        );
        stats
    }

    /// Take one step of `walk` in a random direction.
    fn step<R: Rng>(&mut self, walk: &mut Walk, random: &mut R) -> Step {
        let current = walk.current();
        let candidates: Vec<usize> = self
            .neighbors(current)
            .filter(|&neighbor| self.cells[neighbor] == Cell::Empty)
            .collect();

        // Every cell has two non-block neighbors, and all but the previous
        // one are empty when the cell joins the walk
        let Some(&next) = candidates.choose(random) else {
            unreachable!("walk is stuck at {}", current);
        };

        let collision = self
            .neighbors(next)
            .filter(|&neighbor| neighbor != current)
            .map(|neighbor| self.cells[neighbor])
            .find(|cell| matches!(cell, Cell::BuildingPath | Cell::GeneratedPath));

        match collision {
            None => {
                walk.trunk.push(next);
                self.cells[next] = Cell::BuildingPath;
                Step::Advanced
            }
            Some(Cell::BuildingPath) => {
                self.erase(walk);
                Step::Erased
            }
            Some(_) => {
                self.commit(walk, next);
                Step::Committed
            }
        }
    }

    /// Reset the walk back to its start cell.
    fn erase(&mut self, walk: &mut Walk) {
        while let Some(index) = walk.trunk.pop() {
            self.cells[index] = Cell::Empty;
        }
    }

    /// Turn the walk and the cell joining it to the maze into maze paths.
    fn commit(&mut self, walk: &mut Walk, joint: usize) {
        while let Some(index) = walk.trunk.pop() {
            self.cells[index] = Cell::GeneratedPath;
        }
        self.cells[walk.start] = Cell::GeneratedPath;
        self.cells[joint] = Cell::GeneratedPath;
    }

    /// Convert into a maze surrounded by a wall.
    fn into_grid(self) -> Grid {
        let width = self.columns + 2;
        let height = self.rows + 2;
        let border = || iter::repeat(Tile::Wall).take(width);
        let inner = self.cells.chunks(self.columns).flat_map(|row| {
            iter::once(Tile::Wall)
                .chain(row.iter().map(|&cell| match cell {
                    Cell::GeneratedPath => Tile::Path,
                    _ => Tile::Wall,
                }))
                .chain(iter::once(Tile::Wall))
        });
        let cells = border().chain(inner).chain(border()).collect();
        Grid::new(width, height, cells)
    }
}

/// Perfect maze generator.
///
/// Each call to [Self::generate_maze] carves a new maze; the random stream
/// continues from one maze to the next.
#[derive(Debug)]
pub struct MazeGenerator {
    width: usize,
    height: usize,
    random: StdRng,
}

impl MazeGenerator {
    /// Create generator for mazes of `width` x `height` rooms.
    ///
    /// - `width`, `height`: Number of rooms, both must be at least 2.
    /// - `seed`: Random seed. Without one, the generator is seeded from
    ///   system entropy.
    ///
    /// Returns [MazeError::InvalidDimensions] for too small dimensions.
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Result<Self, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        })
    }

    /// Generate maze
    ///
    /// The result is `2 * width + 1` tiles wide and `2 * height + 1` tiles
    /// high, border included.
    pub fn generate_maze(&mut self) -> Grid {
        let mut working = WorkingGrid::new(self.width, self.height);
        let stats = working.generate_paths(&mut self.random);
        debug!(
            "Generated {}x{} maze in {} walks, {} steps, {} loop erasures",
            self.width, self.height, stats.walks, stats.steps, stats.erasures
        );
        working.into_grid()
    }
}
