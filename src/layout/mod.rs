// Rebind menu layout
//
// Turns a button count into a table shape, one placement per button and a
// wraparound navigation graph. Nothing here touches the renderer: the host
// applies placements and neighbor links to its own widgets.

mod grid;
mod navigation;

pub use grid::{Cell, CellPlacement, GridShape, LayoutConfig};
pub use navigation::{Direction, NavigationGraph, Neighbors};

use glam::Vec2;
use log::debug;

/// Everything the renderer needs to lay out the rebind buttons
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Table shape, `None` when there are no buttons
    pub shape: Option<GridShape>,

    /// One placement per button, by button index
    pub placements: Vec<CellPlacement>,

    /// Focus movement between buttons
    pub navigation: NavigationGraph,

    /// Scale applied to every button label
    pub text_scale: Vec2,

    /// Size of the table region
    pub table_size: Vec2,

    /// Table position relative to its parent anchor
    pub table_offset: Vec2,
}

impl GridLayout {
    /// Layout with no buttons
    pub fn empty(config: &LayoutConfig) -> Self {
        Self {
            shape: None,
            placements: Vec::new(),
            navigation: NavigationGraph::default(),
            text_scale: Vec2::ONE,
            table_size: config.table_size,
            table_offset: config.table_offset,
        }
    }

    /// Whether there are no buttons
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of buttons laid out
    pub fn len(&self) -> usize {
        self.placements.len()
    }
}

/// Computes rebind menu layouts
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine using `config` for every layout
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lay out `count` buttons
    ///
    /// A count of zero yields an empty layout rather than an error.
    pub fn compute(&self, count: usize) -> GridLayout {
        let Some(shape) = GridShape::for_count(count, &self.config) else {
            return GridLayout::empty(&self.config);
        };

        let placements = (0..count)
            .map(|index| CellPlacement::new(&shape, index, &self.config))
            .collect();
        let navigation = NavigationGraph::build(&shape, count);
        let text_scale = shape.text_scale(&self.config);

        debug!(
            "Laid out {} buttons in {}x{} grid (text scale {:?})",
            count, shape.columns, shape.rows, text_scale
        );

        GridLayout {
            shape: Some(shape),
            placements,
            navigation,
            text_scale,
            table_size: self.config.table_size,
            table_offset: self.config.table_offset,
        }
    }
}
