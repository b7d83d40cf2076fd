use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::{ConfigError, ParseError};

#[cfg(test)]
mod tests;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub const DEAD_GLYPH: char = '.';
    pub const ALIVE_GLYPH: char = '@';

    pub fn glyph(self) -> char {
        match self {
            Self::Dead => Self::DEAD_GLYPH,
            Self::Alive => Self::ALIVE_GLYPH,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::DEAD_GLYPH => Some(Self::Dead),
            Self::ALIVE_GLYPH => Some(Self::Alive),
            _ => None,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

/// Glyph rows of a board together with its dimensions and population.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGrid {
    pub width: usize,
    pub height: usize,
    pub population: usize,
    pub rows: Vec<Vec<char>>,
}

/// Fixed-size field with hard edges: cells outside the board do not exist.
///
/// Cells are stored row-major, `x` is the column and `y` is the row.
/// Dimensions never change after construction and `population` always
/// matches the number of alive cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
    population: usize,
}

impl Board {
    /// Create a board with every cell dead.
    pub fn blank(width: usize, height: usize) -> Result<Self, ConfigError> {
        let size = Self::checked_size(width, height)?;
        Ok(Self {
            cells: vec![CellState::Dead; size],
            width,
            height,
            population: 0,
        })
    }

    /// Create a board with exactly `floor(width * height * percentage / 100)`
    /// distinct alive cells picked uniformly at random.
    ///
    /// `percentage` - share of the board to seed, `0..=100`
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        percentage: u32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if percentage > 100 {
            return Err(ConfigError::PopulationPercentage(percentage));
        }
        let mut board = Self::blank(width, height)?;
        let size = board.cells.len();
        let target = (size as u128 * percentage as u128 / 100) as usize;

        // picking the minority state keeps rejection sampling from stalling on a nearly full board
        let (background, picked, picks) = if target > size - target {
            (CellState::Alive, CellState::Dead, size - target)
        } else {
            (CellState::Dead, CellState::Alive, target)
        };
        board.cells.fill(background);
        for _ in 0..picks {
            loop {
                let x = rng.gen_range(0..width);
                let y = rng.gen_range(0..height);
                let cell = &mut board.cells[x + y * width];
                if *cell == background {
                    *cell = picked;
                    break;
                }
            }
        }
        board.population = target;

        debug!(width, height, percentage, population = target, "seeded board");
        Ok(board)
    }

    /// Create a random board from a seed
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn seeded(
        width: usize,
        height: usize,
        percentage: u32,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::random(width, height, percentage, &mut rng)
    }

    /// Create a board from row-major cells.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, ParseError> {
        let size = Self::checked_size(width, height)?;
        if cells.len() != size {
            return Err(ParseError::LengthMismatch {
                expected: size,
                found: cells.len(),
            });
        }
        Ok(Self::from_parts(width, height, cells))
    }

    /// Parse a glyph grid: one row per line, `.` for dead and `@` for alive.
    ///
    /// Whitespace between glyphs and blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut cells = vec![];
        let (mut width, mut height) = (0, 0);
        for line in text.lines() {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, glyph)| {
                    CellState::from_glyph(glyph).ok_or(ParseError::UnknownGlyph {
                        glyph,
                        row: height,
                        col,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if row.is_empty() {
                continue;
            }
            if height == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(ParseError::RaggedRow {
                    row: height,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
            height += 1;
        }
        if height == 0 {
            return Err(ParseError::Empty);
        }
        Self::from_cells(width, height, cells)
    }

    /// Dimensions are validated by the caller.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        let population = cells.iter().filter(|c| c.is_alive()).count();
        Self {
            cells,
            width,
            height,
            population,
        }
    }

    fn checked_size(width: usize, height: usize) -> Result<usize, ConfigError> {
        if width == 0 {
            return Err(ConfigError::InvalidWidth(width));
        }
        if height == 0 {
            return Err(ConfigError::InvalidHeight(height));
        }
        width
            .checked_mul(height)
            .ok_or(ConfigError::BoardTooLarge { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn population(&self) -> usize {
        self.population
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Panics if `(x, y)` is outside the board.
    pub fn get(&self, x: usize, y: usize) -> CellState {
        assert!(self.contains(x, y), "({x}, {y}) is outside the board");
        self.cells[x + y * self.width]
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_alive()
    }

    /// Number of alive cells among the up to 8 cells around `(x, y)`.
    ///
    /// Positions beyond the edges are skipped, so border cells have fewer neighbors.
    /// Panics if `(x, y)` is outside the board.
    pub fn count_living_neighbors(&self, x: usize, y: usize) -> usize {
        assert!(self.contains(x, y), "({x}, {y}) is outside the board");
        let (x1, x2) = (x.saturating_sub(1), (x + 1).min(self.width - 1));
        let (y1, y2) = (y.saturating_sub(1), (y + 1).min(self.height - 1));
        let mut count = 0;
        for ny in y1..=y2 {
            let row = &self.cells[ny * self.width..(ny + 1) * self.width];
            for (nx, cell) in row.iter().enumerate().take(x2 + 1).skip(x1) {
                if (nx, ny) != (x, y) && cell.is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn to_text(&self) -> TextGrid {
        TextGrid {
            width: self.width,
            height: self.height,
            population: self.population,
            rows: self
                .rows()
                .map(|row| row.iter().map(|c| c.glyph()).collect())
                .collect(),
        }
    }
}

impl fmt::Display for TextGrid {
    /// Glyphs separated by spaces, one row per line, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y != 0 {
                writeln!(f)?;
            }
            for (x, glyph) in row.iter().enumerate() {
                if x != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_text(), f)
    }
}

impl std::str::FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
