// Rebinding with collision resolution

use super::action::{ActionId, InputId};
use super::bindings::BindingStore;
use super::config::{ConflictPolicy, ControlsConfig};
use super::registry::ActionRegistry;
use super::ControlsError;
use log::{debug, info};

/// One binding that changed during an assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingChange {
    pub action: ActionId,
    pub old: InputId,
    pub new: InputId,
}

/// Applies rebind requests so the store stays consistent with the policy
///
/// Outside of `Duplicate`, an assignment resolves the first collision in
/// registration order. Duplicates left over from `Duplicate` may persist.
#[derive(Debug, Clone)]
pub struct ConflictResolver {
    /// Active policy, read on every assignment
    policy: ConflictPolicy,

    /// Input that always clears the binding it is assigned to
    unbind_input: InputId,
}

impl ConflictResolver {
    /// Create a resolver with an explicit policy and unbind input
    pub fn new(policy: ConflictPolicy, unbind_input: InputId) -> Self {
        Self {
            policy,
            unbind_input,
        }
    }

    /// Create a resolver from the session configuration
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self::new(config.conflict_policy, config.unbind_input.clone())
    }

    /// Active policy
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Change the policy; existing duplicates are left as they are
    pub fn set_policy(&mut self, policy: ConflictPolicy) {
        if self.policy != policy {
            info!("Conflict policy changed from {} to {}", self.policy, policy);
        }
        self.policy = policy;
    }

    /// Input that clears the binding it is assigned to
    pub fn unbind_input(&self) -> &InputId {
        &self.unbind_input
    }

    /// Change the unbind input; `InputId::NONE` disables it
    pub fn set_unbind_input(&mut self, input: InputId) {
        self.unbind_input = input;
    }

    /// First other action of the same player bound to `input`, in registration order
    pub fn find_collision<const N: usize>(
        &self,
        registry: &ActionRegistry<N>,
        store: &BindingStore<N>,
        action: &ActionId,
        input: &InputId,
    ) -> Result<Option<ActionId>, ControlsError> {
        if input.is_none() {
            return Ok(None);
        }
        let collision = registry
            .all_actions(action.player())?
            .filter(|other| *other != action)
            .find(|other| store.current_input(other).is_ok_and(|bound| bound == input))
            .cloned();
        Ok(collision)
    }

    /// Bind `requested` to `action`, resolving a collision per the active policy
    ///
    /// Returns every binding whose value changed, so the caller can redraw
    /// only those buttons. Assigning an input the action already holds
    /// changes nothing.
    pub fn assign<const N: usize>(
        &self,
        registry: &ActionRegistry<N>,
        store: &mut BindingStore<N>,
        action: &ActionId,
        requested: InputId,
    ) -> Result<Vec<BindingChange>, ControlsError> {
        registry.ensure_registered(action)?;

        let requested = if requested == self.unbind_input {
            InputId::NONE
        } else {
            requested
        };
        let previous = store.current_input(action)?.clone();
        let mut changes = Vec::with_capacity(2);

        if self.policy.resolves_collisions() {
            if let Some(other) = self.find_collision(registry, store, action, &requested)? {
                let replacement = match self.policy {
                    ConflictPolicy::Swap => previous.clone(),
                    ConflictPolicy::Unbind | ConflictPolicy::Duplicate => InputId::NONE,
                };
                debug!(
                    "{} collides with {} on {}, {} -> {}",
                    action, other, requested, other, replacement
                );
                apply(store, &other, replacement, &mut changes)?;
            }
        }

        apply(store, action, requested, &mut changes)?;
        debug!(
            "Assigned {} under {}: {} change(s)",
            action,
            self.policy,
            changes.len()
        );
        Ok(changes)
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::from_config(&ControlsConfig::default())
    }
}

fn apply<const N: usize>(
    store: &mut BindingStore<N>,
    action: &ActionId,
    input: InputId,
    changes: &mut Vec<BindingChange>,
) -> Result<(), ControlsError> {
    if store.current_input(action)? == &input {
        return Ok(());
    }
    let old = store.set_input(action, input.clone())?;
    changes.push(BindingChange {
        action: action.clone(),
        old,
        new: input,
    });
    Ok(())
}
