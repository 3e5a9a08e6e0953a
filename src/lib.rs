// Rebindable per-player controls with conflict resolution and a
// navigable rebind menu layout.

pub mod controls;
pub mod core;
pub mod layout;

pub use controls::{
    ActionId, ActionRegistry, BindingChange, BindingStore, ConflictPolicy, ConflictResolver,
    ControlsConfig, ControlsError, ControlsManager, DisplayNameResolver, InputId, PlayerSlot,
    VanillaAction,
};
pub use layout::{GridLayout, GridShape, LayoutConfig, LayoutEngine, NavigationGraph};
