//! Generate perfect mazes with loop-erased random walks
//!
//! A perfect maze has exactly one route between any two of its rooms: the
//! open squares form a tree. The mazes are rendered as text, with `#` for
//! walls and a blank for paths.
//!
//! # Examples
//! ```
//! use lerw_maze::MazeGenerator;
//!
//! let mut generator = MazeGenerator::new(4, 3, Some(2024)).unwrap();
//! let maze = generator.generate_maze();
//! assert_eq!((maze.width(), maze.height()), (9, 7));
//! print!("{}", maze);
//! ```
//!
//! Dimensions below two rooms are rejected:
//! ```
//! use lerw_maze::{generate, MazeError};
//!
//! assert_eq!(
//!     generate(1, 5).err(),
//!     Some(MazeError::InvalidDimensions { width: 1, height: 5 })
//! );
//! ```

pub mod grid;
pub mod maze_generator;

use thiserror::Error;

pub use grid::{Grid, Tile};
pub use maze_generator::MazeGenerator;

/// Errors from maze generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Maze must be at least two rooms wide and high
    #[error("invalid [width, height] = [{width}, {height}], values must be >= 2")]
    InvalidDimensions { width: usize, height: usize },
}

/// Generate a maze of `width` x `height` rooms, seeded from system entropy.
pub fn generate(width: usize, height: usize) -> Result<Grid, MazeError> {
    Ok(MazeGenerator::new(width, height, None)?.generate_maze())
}
