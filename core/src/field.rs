use alloc::vec::Vec;
use core::num::Saturating;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of walking a tile toward an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    /// Farthest cell the tile can slide to, the starting cell when it cannot move.
    pub destination: Cell,
    /// First occupied cell past `destination`, `None` when the walk ran off the field.
    pub blocker: Option<Cell>,
}

/// The puzzle grid: a `SIZE`×`SIZE` array of tile exponents plus the running score.
///
/// Termination is left to the caller, use [`GameField::can_move`] to detect a stuck board.
#[derive(Clone, Debug)]
pub struct GameField<G = RandomTileGenerator> {
    grid: Array2<Exponent>,
    score: Saturating<Score>,
    generator: G,
}

impl GameField {
    /// Empty field spawning tiles from a seeded generator with the default odds.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        Self::with_generator(RandomTileGenerator::new(seed, config))
    }
}

impl<G: TileGenerator> GameField<G> {
    pub fn with_generator(generator: G) -> Self {
        Self {
            grid: Array2::default([SIZE, SIZE]),
            score: Saturating(0),
            generator,
        }
    }

    pub fn from_exponents(generator: G, grid: Array2<Exponent>) -> Result<Self> {
        if grid.dim() != (SIZE, SIZE) {
            return Err(GameError::InvalidBoardShape);
        }
        if grid.iter().any(|&exponent| exponent > MAX_EXPONENT) {
            return Err(GameError::ExponentTooLarge);
        }
        Ok(Self {
            grid,
            score: Saturating(0),
            generator,
        })
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn exponents(&self) -> ArrayView2<'_, Exponent> {
        self.grid.view()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn set_cell_value(&mut self, cell: Cell, exponent: i32) -> Result<()> {
        if exponent < 0 {
            return Err(GameError::NegativeExponent);
        }
        let exponent = Exponent::try_from(exponent)
            .ok()
            .filter(|&exponent| exponent <= MAX_EXPONENT)
            .ok_or(GameError::ExponentTooLarge)?;
        self.grid[cell.to_nd_index()] = exponent;
        Ok(())
    }

    pub fn cell_value(&self, cell: Cell) -> Exponent {
        self[cell]
    }

    pub fn tile_value(&self, cell: Cell) -> Score {
        exponent_value(self[cell])
    }

    pub fn is_cell_occupied(&self, cell: Cell) -> bool {
        self[cell] != 0
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|&&exponent| exponent != 0).count()
    }

    pub fn max_exponent(&self) -> Exponent {
        self.grid.iter().copied().max().unwrap_or(0)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all()
            .filter(|&cell| !self.is_cell_occupied(cell))
            .collect()
    }

    pub fn random_empty_cell(&mut self) -> Result<Cell> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            log::warn!("No empty cell left to pick from");
            return Err(GameError::BoardFull);
        }
        Ok(empty[self.generator.pick_index(empty.len())])
    }

    /// Spawns a new tile on a random empty cell and returns where it landed.
    ///
    /// Fails with [`GameError::BoardFull`] and leaves the field untouched when there is no room.
    pub fn add_random_tile(&mut self) -> Result<Cell> {
        let cell = self.random_empty_cell()?;
        let exponent = self.generator.tile_exponent();
        debug_assert!((1..=MAX_EXPONENT).contains(&exponent));
        self.grid[cell.to_nd_index()] = exponent;
        log::trace!("Spawned exponent {exponent} at {cell:?}");
        Ok(cell)
    }

    pub fn next_cell_at(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        cell.step(dir)
    }

    /// Walks from `cell` along `dir` over empty cells.
    pub fn find_farthest_position(&self, cell: Cell, dir: Direction) -> Traversal {
        let mut destination = cell;
        let mut next = self.next_cell_at(cell, dir);
        while let Some(candidate) = next {
            if self.is_cell_occupied(candidate) {
                break;
            }
            destination = candidate;
            next = self.next_cell_at(candidate, dir);
        }
        Traversal {
            destination,
            blocker: next,
        }
    }

    /// Slides every tile toward `dir`, merging equal pairs once per tile.
    ///
    /// Returns whether any tile moved or merged.
    pub fn shift(&mut self, dir: Direction) -> bool {
        let mut merged = [[false; SIZE]; SIZE];
        let mut moved = false;
        let mut merges = 0usize;
        let score_before = self.score;

        let (dr, dc) = dir.delta();
        for row in scan_order(dr) {
            for column in scan_order(dc) {
                let current = Cell::new_unchecked(row, column);
                let value = self[current];
                if value == 0 {
                    continue;
                }

                let Traversal {
                    destination,
                    blocker,
                } = self.find_farthest_position(current, dir);
                self.grid[current.to_nd_index()] = 0;

                match blocker {
                    Some(next) if !merged_at(&merged, next) && self[next] == value => {
                        let exponent = value + 1;
                        self.grid[next.to_nd_index()] = exponent;
                        merged[usize::from(next.row())][usize::from(next.column())] = true;
                        self.score += exponent_value(exponent);
                        merges += 1;
                        moved = true;
                        log::trace!("Merged {current:?} into {next:?}, exponent {exponent}");
                    }
                    _ => {
                        self.grid[destination.to_nd_index()] = value;
                        if destination != current {
                            moved = true;
                            log::trace!("Slid {current:?} to {destination:?}");
                        }
                    }
                }
            }
        }

        log::debug!(
            "Shift {:?}: moved={}, merges={}, gained={}",
            dir,
            moved,
            merges,
            (self.score - score_before).0
        );
        moved
    }

    /// Whether some cell has a neighbour that is empty or holds the same exponent.
    ///
    /// Two adjacent empty cells count as a possible move.
    pub fn can_move(&self) -> bool {
        Cell::all().any(|cell| {
            let value = self[cell];
            Direction::ALL
                .iter()
                .filter_map(|&dir| self.next_cell_at(cell, dir))
                .any(|neighbor| {
                    let neighbor_value = self[neighbor];
                    neighbor_value == 0 || neighbor_value == value
                })
        })
    }
}

fn merged_at(mask: &[[bool; SIZE]; SIZE], cell: Cell) -> bool {
    mask[usize::from(cell.row())][usize::from(cell.column())]
}

impl<G> Index<Cell> for GameField<G> {
    type Output = Exponent;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.grid[cell.to_nd_index()]
    }
}
