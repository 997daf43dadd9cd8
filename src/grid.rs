//! Finished maze layout

use std::fmt;

use itertools::Itertools;

/// Single square of a rendered maze
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Path,
}

impl Tile {
    pub const WALL: char = '#';
    pub const PATH: char = ' ';

    /// Character used for this tile in the text rendering
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => Self::WALL,
            Tile::Path => Self::PATH,
        }
    }
}

/// Flat row-major index of (`row`, `column`) in a grid `columns` wide.
pub fn to_index(row: usize, column: usize, columns: usize) -> usize {
    row * columns + column
}

/// Row of a flat index in a grid `columns` wide.
pub fn to_row(index: usize, columns: usize) -> usize {
    index / columns
}

/// Column of a flat index in a grid `columns` wide.
pub fn to_column(index: usize, columns: usize) -> usize {
    index % columns
}

/// Rectangular maze of walls and paths, including the outer border.
///
/// The grid does not change after it has been generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Tiles in row-major order, `width * height` of them
    cells: Vec<Tile>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns, border included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, border included
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (`row`, `column`), or `None` when out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<Tile> {
        if row < self.height && column < self.width {
            Some(self.cells[to_index(row, column, self.width)])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width)
    }

    /// Render as text: one line per row, symbols separated by single spaces.
    ///
    /// Every row, the last one included, ends with a newline.
    ///
    /// # Examples
    /// ```
    /// use lerw_maze::MazeGenerator;
    ///
    /// let grid = MazeGenerator::new(2, 2, Some(1)).unwrap().generate_maze();
    /// let text = grid.render();
    /// assert_eq!(text.lines().count(), 5);
    /// assert!(text.lines().all(|line| line.chars().count() == 9));
    /// ```
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|tile| tile.symbol()).join(" ") + "\n")
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Grid {
        use Tile::{Path as P, Wall as W};
        Grid::new(3, 2, vec![W, P, W, P, W, P])
    }

    #[test]
    fn index_conversions_agree() {
        let columns = 7;
        for index in 0..35 {
            let (row, column) = (to_row(index, columns), to_column(index, columns));
            assert!(column < columns);
            assert_eq!(to_index(row, column, columns), index);
        }
        assert_eq!(to_index(2, 3, 7), 17);
    }

    #[test]
    fn render_separates_symbols_and_terminates_rows() {
        assert_eq!(checkerboard().render(), "#   #\n  #  \n");
        assert_eq!(checkerboard().to_string(), checkerboard().render());
    }

    #[test]
    fn get_respects_bounds() {
        let grid = checkerboard();
        assert_eq!(grid.get(0, 0), Some(Tile::Wall));
        assert_eq!(grid.get(1, 2), Some(Tile::Path));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn rows_are_width_long() {
        let grid = checkerboard();
        let rows = grid.rows().collect::<Vec<_>>();
        assert_eq!(rows.len(), grid.height());
        assert!(rows.iter().all(|row| row.len() == grid.width()));
        assert_eq!(rows[1], &[Tile::Path, Tile::Wall, Tile::Path]);
    }
}
