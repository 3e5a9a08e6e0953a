// Controls configuration: conflict policy, unbind key and layout tuning

use super::action::InputId;
use super::ControlsError;
use crate::layout::LayoutConfig;
use std::fmt;
use std::str::FromStr;

/// What happens when a rebind targets an input another action already uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConflictPolicy {
    /// The other action takes over the rebound action's previous input
    #[default]
    Swap,
    /// The other action becomes unbound
    Unbind,
    /// Both actions keep the input
    Duplicate,
}

impl ConflictPolicy {
    /// Every policy, in settings order
    pub const ALL: [ConflictPolicy; 3] = [
        ConflictPolicy::Swap,
        ConflictPolicy::Unbind,
        ConflictPolicy::Duplicate,
    ];

    /// Canonical name, as stored by the settings layer
    pub fn name(&self) -> &'static str {
        match self {
            Self::Swap => "Swap",
            Self::Unbind => "Unbind",
            Self::Duplicate => "Duplicate",
        }
    }

    /// One-line explanation shown next to the setting
    pub fn description(&self) -> &'static str {
        match self {
            Self::Swap => "the two conflicting buttons will swap places",
            Self::Unbind => "the other button binding will be removed",
            Self::Duplicate => "allow for one button to be bound to many actions",
        }
    }

    /// Whether assignments under this policy look for collisions
    pub fn resolves_collisions(&self) -> bool {
        !matches!(self, Self::Duplicate)
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConflictPolicy {
    type Err = ControlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|policy| policy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ControlsError::InvalidPolicy(s.to_string()))
    }
}

/// Configuration for one controls session
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsConfig {
    /// Active conflict policy
    pub conflict_policy: ConflictPolicy,

    /// Input that clears a binding when chosen during a rebind
    ///
    /// `InputId::NONE` disables the unbind key.
    pub unbind_input: InputId,

    /// Rebind menu layout
    pub layout: LayoutConfig,
}

impl ControlsConfig {
    /// Config with a specific conflict policy
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Config with an unbind key
    pub fn with_unbind_input(mut self, input: impl Into<InputId>) -> Self {
        self.unbind_input = input.into();
        self
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            conflict_policy: ConflictPolicy::Swap,
            unbind_input: InputId::NONE,
            layout: LayoutConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_swap() {
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::Swap);
        assert_eq!(ControlsConfig::default().conflict_policy, ConflictPolicy::Swap);
    }

    #[test]
    fn test_policy_names_round_trip() {
        for policy in ConflictPolicy::ALL {
            assert_eq!(policy.to_string().parse::<ConflictPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_parse_is_case_insensitive() {
        assert_eq!(
            "duplicate".parse::<ConflictPolicy>().unwrap(),
            ConflictPolicy::Duplicate
        );
        assert_eq!(" UNBIND ".parse::<ConflictPolicy>().unwrap(), ConflictPolicy::Unbind);
    }

    #[test]
    fn test_policy_parse_rejects_unknown() {
        let err = "Merge".parse::<ConflictPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid conflict policy: Merge");
    }

    #[test]
    fn test_only_duplicate_skips_collisions() {
        assert!(ConflictPolicy::Swap.resolves_collisions());
        assert!(ConflictPolicy::Unbind.resolves_collisions());
        assert!(!ConflictPolicy::Duplicate.resolves_collisions());
    }

    #[test]
    fn test_default_has_no_unbind_key() {
        assert!(ControlsConfig::default().unbind_input.is_none());
    }

    #[test]
    fn test_builders() {
        let config = ControlsConfig::default()
            .with_policy(ConflictPolicy::Unbind)
            .with_unbind_input("Backspace");
        assert_eq!(config.conflict_policy, ConflictPolicy::Unbind);
        assert_eq!(config.unbind_input, InputId::named("Backspace"));
    }
}
