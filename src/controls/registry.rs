// Table of known actions per player slot

use super::action::{ActionId, PlayerSlot, VanillaAction};
use super::ControlsError;
use indexmap::IndexSet;
use log::{info, warn};

/// Number of player slots when none is specified
pub const DEFAULT_PLAYER_SLOTS: usize = 2;

/// Owns the set of known actions for `N` player slots
///
/// Each slot keeps its actions in registration order: the built-in table
/// first, then custom actions in the order they were added.
#[derive(Debug)]
pub struct ActionRegistry<const N: usize = DEFAULT_PLAYER_SLOTS> {
    /// Actions per player, indexed by slot
    actions: [IndexSet<ActionId>; N],

    /// Whether the built-in table has been seeded
    vanilla_registered: bool,
}

impl<const N: usize> ActionRegistry<N> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            actions: std::array::from_fn(|_| IndexSet::new()),
            vanilla_registered: false,
        }
    }

    /// Number of player slots
    pub fn player_slots(&self) -> usize {
        N
    }

    /// Iterate over every valid player slot
    pub fn players(&self) -> impl Iterator<Item = PlayerSlot> {
        (0..N).map(PlayerSlot::new)
    }

    /// Seed the built-in actions for every player
    ///
    /// Returns the actions added by this call, which is empty when the table
    /// was already seeded.
    pub fn register_vanilla(&mut self) -> Vec<ActionId> {
        if self.vanilla_registered {
            return Vec::new();
        }
        self.vanilla_registered = true;

        let mut added = Vec::with_capacity(N * VanillaAction::ALL.len());
        for (index, actions) in self.actions.iter_mut().enumerate() {
            let player = PlayerSlot::new(index);
            // Built-ins go in front of anything registered earlier
            let custom: Vec<ActionId> = actions.drain(..).collect();
            for vanilla in VanillaAction::ALL {
                let id = ActionId::vanilla(player, vanilla);
                actions.insert(id.clone());
                added.push(id);
            }
            actions.extend(custom);
        }

        info!(
            "Registered {} built-in actions for {} player slots",
            VanillaAction::ALL.len(),
            N
        );
        added
    }

    /// Whether the built-in table has been seeded
    pub fn is_vanilla_registered(&self) -> bool {
        self.vanilla_registered
    }

    /// Register a custom action for one player
    pub fn register_custom(
        &mut self,
        player: PlayerSlot,
        name: &str,
    ) -> Result<ActionId, ControlsError> {
        let actions = self.slot_mut(player)?;
        let id = ActionId::custom(player, name);
        if actions.contains(&id) {
            warn!("Rejected duplicate custom action '{}' for {}", name, player);
            return Err(ControlsError::DuplicateAction {
                player: player.index(),
                name: name.to_string(),
            });
        }

        actions.insert(id.clone());
        info!("Registered custom action '{}' for {}", name, player);
        Ok(id)
    }

    /// All actions of a player in registration order
    ///
    /// The iterator borrows the registry and can be restarted by calling
    /// this again.
    pub fn all_actions(
        &self,
        player: PlayerSlot,
    ) -> Result<impl Iterator<Item = &ActionId> + '_, ControlsError> {
        Ok(self.slot(player)?.iter())
    }

    /// Number of actions registered for a player
    pub fn action_count(&self, player: PlayerSlot) -> Result<usize, ControlsError> {
        Ok(self.slot(player)?.len())
    }

    /// Whether an action is registered
    pub fn contains(&self, action: &ActionId) -> bool {
        self.actions
            .get(action.player().index())
            .is_some_and(|actions| actions.contains(action))
    }

    /// Fail with `UnknownAction` unless the action is registered
    pub fn ensure_registered(&self, action: &ActionId) -> Result<(), ControlsError> {
        if self.contains(action) {
            Ok(())
        } else {
            Err(ControlsError::UnknownAction(action.to_string()))
        }
    }

    /// Look up a registered custom action by name
    pub fn find_custom(&self, player: PlayerSlot, name: &str) -> Option<&ActionId> {
        self.slot(player)
            .ok()?
            .get(&ActionId::custom(player, name))
    }

    fn slot(&self, player: PlayerSlot) -> Result<&IndexSet<ActionId>, ControlsError> {
        self.actions
            .get(player.index())
            .ok_or(ControlsError::UnknownPlayer {
                player: player.index(),
                slots: N,
            })
    }

    fn slot_mut(&mut self, player: PlayerSlot) -> Result<&mut IndexSet<ActionId>, ControlsError> {
        self.actions
            .get_mut(player.index())
            .ok_or(ControlsError::UnknownPlayer {
                player: player.index(),
                slots: N,
            })
    }
}

impl<const N: usize> Default for ActionRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}
