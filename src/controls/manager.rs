// Controls manager - one rebinding session for all players

use super::action::{ActionId, InputId, PlayerSlot};
use super::bindings::BindingStore;
use super::config::{ConflictPolicy, ControlsConfig};
use super::conflict::{BindingChange, ConflictResolver};
use super::display::DisplayNameResolver;
use super::poll::InputPoller;
use super::registry::{ActionRegistry, DEFAULT_PLAYER_SLOTS};
use super::settings::{MemorySettings, SettingsBackend};
use super::ControlsError;
use crate::layout::{GridLayout, LayoutEngine};

/// Owns the registry, bindings, resolver and layout engine of one session
///
/// Construct one per session and hand it to whatever needs controls; nothing
/// here is global.
#[derive(Debug)]
pub struct ControlsManager<const N: usize = DEFAULT_PLAYER_SLOTS> {
    /// Known actions per player
    registry: ActionRegistry<N>,

    /// Current bindings
    bindings: BindingStore<N>,

    /// Rebind conflict handling
    resolver: ConflictResolver,

    /// Rebind menu layout
    layout: LayoutEngine,
}

impl<const N: usize> ControlsManager<N> {
    /// Create a manager persisting bindings to `settings`
    pub fn new(config: ControlsConfig, settings: Box<dyn SettingsBackend>) -> Self {
        Self {
            registry: ActionRegistry::new(),
            bindings: BindingStore::new(settings),
            resolver: ConflictResolver::from_config(&config),
            layout: LayoutEngine::new(config.layout),
        }
    }

    /// Create a manager with in-memory settings
    pub fn in_memory(config: ControlsConfig) -> Self {
        Self::new(config, Box::new(MemorySettings::new()))
    }

    /// Seed the built-in actions for every player; a no-op after the first call
    pub fn register_vanilla(&mut self) -> Result<(), ControlsError> {
        for action in self.registry.register_vanilla() {
            self.bindings.track(&action, &self.resolver)?;
        }
        Ok(())
    }

    /// Register a custom action for one player
    pub fn register_custom(
        &mut self,
        player: PlayerSlot,
        name: &str,
    ) -> Result<ActionId, ControlsError> {
        let action = self.registry.register_custom(player, name)?;
        self.bindings.track(&action, &self.resolver)?;
        Ok(action)
    }

    /// All actions of a player, built-ins first
    pub fn all_actions(
        &self,
        player: PlayerSlot,
    ) -> Result<impl Iterator<Item = &ActionId> + '_, ControlsError> {
        self.registry.all_actions(player)
    }

    /// Input bound to an action
    pub fn current_input(&self, action: &ActionId) -> Result<&InputId, ControlsError> {
        self.registry.ensure_registered(action)?;
        self.bindings.current_input(action)
    }

    /// Rebind an action, returning every binding that changed
    pub fn assign(
        &mut self,
        action: &ActionId,
        input: InputId,
    ) -> Result<Vec<BindingChange>, ControlsError> {
        self.resolver
            .assign(&self.registry, &mut self.bindings, action, input)
    }

    /// Whether a bound action fired this frame
    pub fn was_action_pressed(
        &self,
        action: &ActionId,
        poller: &impl InputPoller,
    ) -> Result<bool, ControlsError> {
        self.registry.ensure_registered(action)?;
        self.bindings.was_action_pressed(action, poller)
    }

    /// Active conflict policy
    pub fn policy(&self) -> ConflictPolicy {
        self.resolver.policy()
    }

    /// Switch the conflict policy for later assignments
    pub fn set_policy(&mut self, policy: ConflictPolicy) {
        self.resolver.set_policy(policy);
    }

    /// Input that clears a binding when assigned
    pub fn set_unbind_input(&mut self, input: InputId) {
        self.resolver.set_unbind_input(input);
    }

    /// Layout for the rebind menu of one player
    pub fn layout_for(&self, player: PlayerSlot) -> Result<GridLayout, ControlsError> {
        let count = self.registry.action_count(player)?;
        Ok(self.layout.compute(count))
    }

    /// Button label for an action
    pub fn label(&self, action: &ActionId) -> String {
        DisplayNameResolver::action_label(action)
    }

    /// Label showing the input bound to an action
    pub fn binding_label(&self, action: &ActionId) -> Result<String, ControlsError> {
        Ok(DisplayNameResolver::binding_label(self.current_input(action)?))
    }

    /// Registered actions of every player
    pub fn registry(&self) -> &ActionRegistry<N> {
        &self.registry
    }

    /// Number of player slots
    pub fn num_players(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for ControlsManager<N> {
    fn default() -> Self {
        Self::in_memory(ControlsConfig::default())
    }
}
