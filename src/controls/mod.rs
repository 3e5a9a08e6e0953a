// Rebindable controls
//
// This module keeps track of every rebindable action per player slot, the
// physical input bound to each one, and how conflicting rebinds are resolved.
//
// ## Architecture
//
// - `action`: Action ids, player slots, input symbols and the built-in action table
// - `registry`: Built-in and custom actions per player, in registration order
// - `bindings`: Current input per action, written through to settings
// - `conflict`: Rebinding with Swap / Unbind / Duplicate resolution
// - `config`: Conflict policy and session configuration
// - `display`: Labels shown on rebind buttons
// - `settings`: Persistence boundary
// - `poll`: Per-frame physical input polling
// - `manager`: Session facade tying everything together
//
// ## Usage Example
//
// ```rust
// use custom_controls::controls::{ControlsManager, ControlsConfig, InputId, PlayerSlot};
//
// let mut controls: ControlsManager = ControlsManager::in_memory(ControlsConfig::default());
// controls.register_vanilla();
// let next = controls.register_custom(PlayerSlot::new(0), "Next Loadout")?;
//
// // Player pressed a key while the "Next Loadout" button was waiting for input
// let changes = controls.assign(&next, InputId::named("KeyQ"))?;
// for change in changes {
//     // Redraw the button of `change.action`
// }
// ```

pub mod action;
pub mod bindings;
pub mod config;
pub mod conflict;
pub mod display;
pub mod manager;
pub mod poll;
pub mod registry;
pub mod settings;

// Re-export commonly used types
pub use action::{ActionId, ActionScope, InputId, PlayerSlot, VanillaAction};
pub use bindings::BindingStore;
pub use config::{ConflictPolicy, ControlsConfig};
pub use conflict::{BindingChange, ConflictResolver};
pub use display::DisplayNameResolver;
pub use manager::ControlsManager;
pub use poll::{InputPoller, KeyboardPoller};
pub use registry::{ActionRegistry, DEFAULT_PLAYER_SLOTS};
pub use settings::{MemorySettings, SettingsBackend};

/// Controls errors
#[derive(Debug, thiserror::Error)]
pub enum ControlsError {
    #[error("Action '{name}' already registered for player {player}")]
    DuplicateAction { player: usize, name: String },

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Player slot {player} out of range (slots: {slots})")]
    UnknownPlayer { player: usize, slots: usize },

    #[error("Invalid conflict policy: {0}")]
    InvalidPolicy(String),
}
