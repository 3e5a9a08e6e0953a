// User-facing labels for actions and bindings

use super::action::{ActionId, InputId};

/// Namespace prepended to every custom action id and setting key
pub const NAMESPACE_PREFIX: &str = "CustomControls_";

/// Maps raw action identifiers to the labels players see
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayNameResolver;

impl DisplayNameResolver {
    /// Strip the internal namespace from a raw identifier
    ///
    /// Identifiers without the namespace come back unchanged.
    pub fn resolve(raw_id: &str) -> &str {
        raw_id.strip_prefix(NAMESPACE_PREFIX).unwrap_or(raw_id)
    }

    /// Label for an action button
    pub fn action_label(action: &ActionId) -> String {
        Self::resolve(&action.raw_id()).to_string()
    }

    /// Label for the input currently bound to a button, upper-cased
    pub fn binding_label(input: &InputId) -> String {
        input.name().to_uppercase()
    }
}
