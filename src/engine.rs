use tracing::trace;

use crate::{Board, CellState};

/// B3/S23 rule for a single cell.
pub fn transition(cell: CellState, living_neighbors: usize) -> CellState {
    match (cell, living_neighbors) {
        // survival
        (CellState::Alive, 2 | 3) => CellState::Alive,
        // underpopulation and overpopulation
        (CellState::Alive, _) => CellState::Dead,
        // reproduction
        (CellState::Dead, 3) => CellState::Alive,
        (CellState::Dead, _) => CellState::Dead,
    }
}

/// Compute the next generation of `board`.
///
/// Every cell is evaluated against `board` only; the result is a fresh board
/// of the same size with its population recounted.
pub fn next_generation(board: &Board) -> Board {
    let (width, height) = board.size();
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let neighbors = board.count_living_neighbors(x, y);
            cells.push(transition(board.get(x, y), neighbors));
        }
    }
    Board::from_parts(width, height, cells)
}

/// Current board plus the number of generations elapsed.
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    generation: u64,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    /// Extinction doesn't stop ticking: a dead board stays dead.
    pub fn is_extinct(&self) -> bool {
        self.board.population() == 0
    }

    pub fn tick(&mut self) {
        self.board = next_generation(&self.board);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.board.population(),
            "tick"
        );
    }

    /// Advance `n` generations.
    pub fn step(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }
}
