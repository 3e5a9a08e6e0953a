// Grid shape and per-button placement for the rebind menu

use crate::core::math::div_round_up;
use glam::Vec2;

/// Tuning for the rebind button table
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Upper bound on the number of columns
    pub max_columns: usize,

    /// Lower bound on the number of rows
    pub min_rows: usize,

    /// Size of the whole table region
    pub table_size: Vec2,

    /// Table position relative to its parent anchor
    pub table_offset: Vec2,

    /// Space left free on each side of a button inside its cell
    pub button_padding: Vec2,

    /// Text scale applied on a compacted axis
    pub compact_text_scale: Vec2,

    /// Column count from which text is compacted horizontally
    pub compact_column_threshold: usize,

    /// Row count from which text is compacted vertically
    pub compact_row_threshold: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_columns: 3,
            min_rows: 7,
            table_size: Vec2::new(296.0, 126.0),
            table_offset: Vec2::new(0.0, -32.0),
            button_padding: Vec2::new(2.0, 1.0),
            compact_text_scale: Vec2::new(0.75, 0.75),
            compact_column_threshold: 3,
            compact_row_threshold: 10,
        }
    }
}

/// Column/row position of a button in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    /// Cell at `column`, `row`
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Table dimensions for a given button count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

impl GridShape {
    /// Shape holding `count` buttons, `None` when there is nothing to lay out
    ///
    /// Columns grow first, up to `max_columns`; after that rows grow past
    /// `min_rows`.
    pub fn for_count(count: usize, config: &LayoutConfig) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let max_columns = config.max_columns.max(1);
        let min_rows = config.min_rows.max(1);

        Some(Self {
            columns: div_round_up(count, min_rows).min(max_columns),
            rows: div_round_up(count, max_columns).max(min_rows),
        })
    }

    /// Number of cells in the table
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Cell of the button at `index`; buttons fill columns top to bottom
    pub fn cell_of(&self, index: usize) -> Cell {
        Cell::new(index / self.rows, index % self.rows)
    }

    /// Button index at `cell`
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.column * self.rows + cell.row
    }

    /// Occupied cells in `column` when `count` buttons are placed
    pub fn column_len(&self, count: usize, column: usize) -> usize {
        if column >= self.columns {
            return 0;
        }
        count.saturating_sub(column * self.rows).min(self.rows)
    }

    /// Occupied cells in `row` when `count` buttons are placed
    pub fn row_len(&self, count: usize, row: usize) -> usize {
        if row >= self.rows || row >= count {
            return 0;
        }
        div_round_up(count - row, self.rows).min(self.columns)
    }

    /// Size of one cell within a table of `table_size`
    pub fn cell_size(&self, table_size: Vec2) -> Vec2 {
        table_size / Vec2::new(self.columns as f32, self.rows as f32)
    }

    /// Text scale for this shape; each axis is compacted independently
    pub fn text_scale(&self, config: &LayoutConfig) -> Vec2 {
        let mut scale = Vec2::ONE;
        if self.columns >= config.compact_column_threshold {
            scale.x = config.compact_text_scale.x;
        }
        if self.rows >= config.compact_row_threshold {
            scale.y = config.compact_text_scale.y;
        }
        scale
    }
}

/// Where one button goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    /// Button index
    pub index: usize,

    pub cell: Cell,

    /// Button center relative to the table's top-left corner (y grows upward)
    pub anchor: Vec2,

    /// Button size after padding
    pub size: Vec2,
}

impl CellPlacement {
    /// Placement of the button at `index`
    pub fn new(shape: &GridShape, index: usize, config: &LayoutConfig) -> Self {
        let cell = shape.cell_of(index);
        let cell_size = shape.cell_size(config.table_size);
        Self {
            index,
            cell,
            anchor: cell_size * Vec2::new(cell.column as f32 + 0.5, -(cell.row as f32 + 0.5)),
            size: cell_size - 2.0 * config.button_padding,
        }
    }
}
