// Current input assigned to each (player, action) pair

use super::action::{ActionId, InputId};
use super::conflict::ConflictResolver;
use super::poll::InputPoller;
use super::registry::DEFAULT_PLAYER_SLOTS;
use super::settings::SettingsBackend;
use super::ControlsError;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

/// Owns the bound input of every tracked action
///
/// Every write is mirrored to the settings backend under the action's
/// setting key. Collision handling lives in `ConflictResolver`; the store
/// overwrites unconditionally.
pub struct BindingStore<const N: usize = DEFAULT_PLAYER_SLOTS> {
    /// Bindings per player, indexed by slot
    bindings: [HashMap<ActionId, InputId>; N],

    /// Persistence collaborator
    settings: Box<dyn SettingsBackend>,
}

impl<const N: usize> BindingStore<N> {
    /// Create an empty store writing through to `settings`
    pub fn new(settings: Box<dyn SettingsBackend>) -> Self {
        Self {
            bindings: std::array::from_fn(|_| HashMap::new()),
            settings,
        }
    }

    /// Start tracking an action
    ///
    /// The binding is restored from the settings backend when a value was
    /// persisted earlier, otherwise it starts unbound. A restored unbind
    /// input counts as unbound. While `resolver`'s policy resolves
    /// collisions, a restored input already held by another tracked action
    /// of the same player is dropped, so the earlier registration keeps it.
    /// Tracking an action twice keeps the existing binding.
    pub(crate) fn track(
        &mut self,
        action: &ActionId,
        resolver: &ConflictResolver,
    ) -> Result<&InputId, ControlsError> {
        let key = action.setting_key();
        let mut restored = self
            .settings
            .load(&key)
            .map(InputId::named)
            .unwrap_or_default();
        let slot = slot_mut(&mut self.bindings, action)?;

        if !slot.contains_key(action) {
            if restored == *resolver.unbind_input() {
                restored = InputId::NONE;
            } else if restored.is_bound() && resolver.policy().resolves_collisions() {
                if let Some(holder) = slot
                    .iter()
                    .find(|(_, bound)| **bound == restored)
                    .map(|(other, _)| other)
                {
                    warn!(
                        "Restored {} for {} is already bound to {}, leaving it unbound",
                        restored, action, holder
                    );
                    restored = InputId::NONE;
                    self.settings.store(&key, restored.name());
                }
            }
        }

        let binding = slot.entry(action.clone()).or_insert(restored);
        Ok(&*binding)
    }

    /// Whether an action is tracked
    pub fn is_tracked(&self, action: &ActionId) -> bool {
        self.bindings
            .get(action.player().index())
            .is_some_and(|slot| slot.contains_key(action))
    }

    /// Input bound to an action, `InputId::NONE` when unbound
    pub fn current_input(&self, action: &ActionId) -> Result<&InputId, ControlsError> {
        self.bindings
            .get(action.player().index())
            .and_then(|slot| slot.get(action))
            .ok_or_else(|| ControlsError::UnknownAction(action.to_string()))
    }

    /// Overwrite the input bound to an action, returning the previous one
    pub(crate) fn set_input(
        &mut self,
        action: &ActionId,
        input: InputId,
    ) -> Result<InputId, ControlsError> {
        let current = slot_mut(&mut self.bindings, action)?
            .get_mut(action)
            .ok_or_else(|| ControlsError::UnknownAction(action.to_string()))?;
        self.settings.store(&action.setting_key(), input.name());
        debug!("{} bound to {}", action, input);
        Ok(std::mem::replace(current, input))
    }

    /// Whether the input bound to an action was pressed this frame
    pub fn was_action_pressed(
        &self,
        action: &ActionId,
        poller: &impl InputPoller,
    ) -> Result<bool, ControlsError> {
        let input = self.current_input(action)?;
        Ok(input.is_bound() && poller.was_pressed(input))
    }

    /// Read-only access to the settings backend
    pub fn settings(&self) -> &dyn SettingsBackend {
        self.settings.as_ref()
    }
}

impl<const N: usize> fmt::Debug for BindingStore<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingStore")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

fn slot_mut<'a, const N: usize>(
    bindings: &'a mut [HashMap<ActionId, InputId>; N],
    action: &ActionId,
) -> Result<&'a mut HashMap<ActionId, InputId>, ControlsError> {
    bindings
        .get_mut(action.player().index())
        .ok_or(ControlsError::UnknownPlayer {
            player: action.player().index(),
            slots: N,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::action::{PlayerSlot, VanillaAction};
    use crate::controls::config::ConflictPolicy;
    use crate::controls::poll::KeyboardPoller;
    use crate::controls::settings::MemorySettings;

    const P0: PlayerSlot = PlayerSlot::new(0);
    const P1: PlayerSlot = PlayerSlot::new(1);

    fn store() -> BindingStore {
        BindingStore::new(Box::new(MemorySettings::new()))
    }

    fn track(store: &mut BindingStore, action: &ActionId) -> InputId {
        store
            .track(action, &ConflictResolver::default())
            .unwrap()
            .clone()
    }

    #[test]
    fn test_tracked_action_starts_unbound() {
        let mut store = store();
        let dash = ActionId::custom(P0, "Dash");
        track(&mut store, &dash);

        assert!(store.is_tracked(&dash));
        assert_eq!(store.current_input(&dash).unwrap(), &InputId::NONE);
    }

    #[test]
    fn test_untracked_action_is_unknown() {
        let store = store();
        let dash = ActionId::custom(P0, "Dash");
        assert!(matches!(
            store.current_input(&dash),
            Err(ControlsError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_set_input_returns_previous() {
        let mut store = store();
        let dash = ActionId::custom(P0, "Dash");
        track(&mut store, &dash);

        let old = store.set_input(&dash, InputId::named("KeyQ")).unwrap();
        assert_eq!(old, InputId::NONE);
        let old = store.set_input(&dash, InputId::named("KeyE")).unwrap();
        assert_eq!(old, InputId::named("KeyQ"));
        assert_eq!(store.current_input(&dash).unwrap(), &InputId::named("KeyE"));
    }

    #[test]
    fn test_set_input_writes_through() {
        let mut store = store();
        let dash = ActionId::custom(P1, "Dash");
        track(&mut store, &dash);
        store.set_input(&dash, InputId::named("KeyQ")).unwrap();

        assert_eq!(
            store
                .settings()
                .load("CustomControls_Player2_Dash")
                .as_deref(),
            Some("KeyQ")
        );

        store.set_input(&dash, InputId::NONE).unwrap();
        assert_eq!(
            store
                .settings()
                .load("CustomControls_Player2_Dash")
                .as_deref(),
            Some("None")
        );
    }

    #[test]
    fn test_set_input_on_untracked_action_fails() {
        let mut store = store();
        let dash = ActionId::custom(P0, "Dash");
        assert!(store.set_input(&dash, InputId::named("KeyQ")).is_err());
        assert_eq!(store.settings().load(&dash.setting_key()), None);
    }

    #[test]
    fn test_track_restores_persisted_value() {
        let settings = MemorySettings::from_values([
            ("CustomControls_Player1_Dash", "KeyQ"),
            ("Player1_interact", "None"),
        ]);
        let mut store: BindingStore = BindingStore::new(Box::new(settings));
        let dash = ActionId::custom(P0, "Dash");
        let interact = ActionId::vanilla(P0, VanillaAction::Interact);

        assert_eq!(track(&mut store, &dash), InputId::named("KeyQ"));
        assert_eq!(track(&mut store, &interact), InputId::NONE);
    }

    #[test]
    fn test_track_twice_keeps_binding() {
        let mut store = store();
        let dash = ActionId::custom(P0, "Dash");
        track(&mut store, &dash);
        store.set_input(&dash, InputId::named("KeyQ")).unwrap();
        track(&mut store, &dash);

        assert_eq!(store.current_input(&dash).unwrap(), &InputId::named("KeyQ"));
    }

    #[test]
    fn test_players_are_independent() {
        let mut store = store();
        let dash0 = ActionId::custom(P0, "Dash");
        let dash1 = ActionId::custom(P1, "Dash");
        track(&mut store, &dash0);
        track(&mut store, &dash1);
        store.set_input(&dash0, InputId::named("KeyQ")).unwrap();

        assert_eq!(store.current_input(&dash1).unwrap(), &InputId::NONE);
    }

    #[test]
    fn test_out_of_range_player() {
        let mut store = store();
        let action = ActionId::custom(PlayerSlot::new(4), "Dash");
        assert!(matches!(
            store.track(&action, &ConflictResolver::default()),
            Err(ControlsError::UnknownPlayer { player: 4, .. })
        ));
    }

    #[test]
    fn test_was_action_pressed() {
        let mut store = store();
        let dash = ActionId::custom(P0, "Dash");
        let heal = ActionId::vanilla(P0, VanillaAction::Heal);
        track(&mut store, &dash);
        track(&mut store, &heal);
        store.set_input(&dash, InputId::named("KeyQ")).unwrap();

        let mut poller = KeyboardPoller::new();
        poller.press(InputId::named("KeyQ"));

        assert!(store.was_action_pressed(&dash, &poller).unwrap());
        // Unbound actions never fire
        assert!(!store.was_action_pressed(&heal, &poller).unwrap());
    }

    #[test]
    fn test_restored_shared_input_kept_by_first_action() {
        let settings = MemorySettings::from_values([
            ("CustomControls_Player1_A", "KeyQ"),
            ("CustomControls_Player1_B", "KeyQ"),
        ]);
        let mut store: BindingStore = BindingStore::new(Box::new(settings));
        let a = ActionId::custom(P0, "A");
        let b = ActionId::custom(P0, "B");

        assert_eq!(track(&mut store, &a), InputId::named("KeyQ"));
        assert_eq!(track(&mut store, &b), InputId::NONE);
        assert_eq!(
            store.settings().load("CustomControls_Player1_B").as_deref(),
            Some("None")
        );
    }

    #[test]
    fn test_restored_shared_input_kept_under_duplicate() {
        let settings = MemorySettings::from_values([
            ("CustomControls_Player1_A", "KeyQ"),
            ("CustomControls_Player1_B", "KeyQ"),
        ]);
        let mut store: BindingStore = BindingStore::new(Box::new(settings));
        let resolver =
            ConflictResolver::new(ConflictPolicy::Duplicate, InputId::named("Backspace"));
        let a = ActionId::custom(P0, "A");
        let b = ActionId::custom(P0, "B");

        assert_eq!(store.track(&a, &resolver).unwrap(), &InputId::named("KeyQ"));
        assert_eq!(store.track(&b, &resolver).unwrap(), &InputId::named("KeyQ"));
    }

    #[test]
    fn test_restored_shared_input_across_players() {
        let settings = MemorySettings::from_values([
            ("CustomControls_Player1_A", "KeyQ"),
            ("CustomControls_Player2_A", "KeyQ"),
        ]);
        let mut store: BindingStore = BindingStore::new(Box::new(settings));

        assert_eq!(track(&mut store, &ActionId::custom(P0, "A")), InputId::named("KeyQ"));
        assert_eq!(track(&mut store, &ActionId::custom(P1, "A")), InputId::named("KeyQ"));
    }

    #[test]
    fn test_restored_unbind_input_is_unbound() {
        let settings = MemorySettings::from_values([("CustomControls_Player1_Dash", "Delete")]);
        let mut store: BindingStore = BindingStore::new(Box::new(settings));
        let resolver = ConflictResolver::new(ConflictPolicy::Swap, InputId::named("Delete"));
        let dash = ActionId::custom(P0, "Dash");

        assert_eq!(store.track(&dash, &resolver).unwrap(), &InputId::NONE);
        assert!(!store.current_input(&dash).unwrap().is_bound());
    }
}
