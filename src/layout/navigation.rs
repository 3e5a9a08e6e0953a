// Directional focus graph over occupied grid cells

use super::grid::{Cell, GridShape};
use crate::core::math::wrap_step;

/// Direction of focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Button indices reached from one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl Neighbors {
    /// Neighbor index in `direction`
    pub fn get(&self, direction: Direction) -> usize {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Wraparound navigation between buttons, indexed by button
///
/// Movement wraps within the occupied part of a column or row, so a
/// neighbor is always a real button even when the last column is short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationGraph {
    neighbors: Vec<Neighbors>,
}

impl NavigationGraph {
    /// Build the graph for `count` buttons laid out in `shape`
    pub fn build(shape: &GridShape, count: usize) -> Self {
        let count = count.min(shape.capacity());
        let mut neighbors = Vec::with_capacity(count);

        for index in 0..count {
            let cell = shape.cell_of(index);
            let column_len = shape.column_len(count, cell.column);
            let row_len = shape.row_len(count, cell.row);

            let vertical = |step| {
                let row = wrap_step(cell.row, step, column_len).unwrap_or(cell.row);
                shape.index_of(Cell::new(cell.column, row))
            };
            let horizontal = |step| {
                let column = wrap_step(cell.column, step, row_len).unwrap_or(cell.column);
                shape.index_of(Cell::new(column, cell.row))
            };

            neighbors.push(Neighbors {
                up: vertical(-1),
                down: vertical(1),
                left: horizontal(-1),
                right: horizontal(1),
            });
        }

        Self { neighbors }
    }

    /// Button reached from `index` in `direction`
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        self.neighbors.get(index).map(|n| n.get(direction))
    }

    /// All four neighbors of `index`
    pub fn neighbors(&self, index: usize) -> Option<&Neighbors> {
        self.neighbors.get(index)
    }

    /// Number of buttons in the graph
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the graph has no buttons
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of every button, by index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Neighbors)> {
        self.neighbors.iter().enumerate()
    }
}
