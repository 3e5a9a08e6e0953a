// Action identifiers, player slots and physical input symbols

use super::display::NAMESPACE_PREFIX;
use std::fmt;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Canonical name stored for an unbound input
pub const UNBOUND_NAME: &str = "None";

/// One independent rebinding namespace (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerSlot(usize);

impl PlayerSlot {
    /// Create a slot from its 0-based index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// 0-based index, used for array access
    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based number, as shown to players and used in setting keys
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player{}", self.number())
    }
}

/// Opaque symbol for one physical input (key or button)
///
/// The unbound value is [`InputId::NONE`]. Inputs are compared by their
/// canonical name only, so the same key coming from different sources
/// (a winit event or a persisted setting) is the same input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InputId(Option<String>);

impl InputId {
    /// The unbound input
    pub const NONE: InputId = InputId(None);

    /// Create an input from its canonical name
    ///
    /// An empty name or `"None"` yields [`InputId::NONE`].
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == UNBOUND_NAME {
            Self::NONE
        } else if trimmed.len() == name.len() {
            Self(Some(name))
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    /// Whether this is the unbound input
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Whether this refers to an actual physical input
    pub fn is_bound(&self) -> bool {
        self.0.is_some()
    }

    /// Canonical name, `"None"` when unbound
    pub fn name(&self) -> &str {
        self.0.as_deref().unwrap_or(UNBOUND_NAME)
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for InputId {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for InputId {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<KeyCode> for InputId {
    fn from(code: KeyCode) -> Self {
        Self(Some(format!("{code:?}")))
    }
}

impl From<MouseButton> for InputId {
    fn from(button: MouseButton) -> Self {
        Self(Some(format!("Mouse{button:?}")))
    }
}

/// Built-in actions every player slot starts with
///
/// Each variant maps to the host's input field by name, replacing any
/// runtime field lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VanillaAction {
    Interact,
    AimLock,
    Guard,
    Sword,
    Dash,
    Heal,
    Gun,
    Pause,
    Reload,
    Map,
    Run,
    Up,
    Left,
    Right,
    Down,
}

impl VanillaAction {
    /// All built-in actions in menu order
    pub const ALL: [VanillaAction; 15] = [
        VanillaAction::Interact,
        VanillaAction::AimLock,
        VanillaAction::Guard,
        VanillaAction::Sword,
        VanillaAction::Dash,
        VanillaAction::Heal,
        VanillaAction::Gun,
        VanillaAction::Pause,
        VanillaAction::Reload,
        VanillaAction::Map,
        VanillaAction::Run,
        VanillaAction::Up,
        VanillaAction::Left,
        VanillaAction::Right,
        VanillaAction::Down,
    ];

    /// Name of the field holding this binding on the host's input receiver
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Interact => "interact",
            Self::AimLock => "aimLock",
            Self::Guard => "guard",
            Self::Sword => "weapon0Input",
            Self::Dash => "dash",
            Self::Heal => "heal",
            Self::Gun => "weapon1Input",
            Self::Pause => "pause",
            Self::Reload => "reload",
            Self::Map => "map",
            Self::Run => "run",
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
        }
    }

    /// Input name the host's menu buttons use for this action
    pub fn input_name(&self) -> &'static str {
        match self {
            Self::Interact => "interact",
            Self::AimLock => "aimlock",
            Self::Guard => "guard",
            Self::Sword => "sword",
            Self::Dash => "dash",
            Self::Heal => "heal",
            Self::Gun => "gun",
            Self::Pause => "pause",
            Self::Reload => "reload",
            Self::Map => "map",
            Self::Run => "run",
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
        }
    }

    /// Look up a built-in action by input name (case-insensitive)
    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.input_name().eq_ignore_ascii_case(name))
    }
}

/// Where an action comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionScope {
    /// Fixed built-in action shared by all players
    Vanilla,
    /// Action registered at runtime for one player
    Custom,
}

/// Identifies one rebindable action of one player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionId {
    scope: ActionScope,
    player: PlayerSlot,
    key: String,
}

impl ActionId {
    /// Id of a built-in action for a player
    pub fn vanilla(player: PlayerSlot, action: VanillaAction) -> Self {
        Self {
            scope: ActionScope::Vanilla,
            player,
            key: action.input_name().to_string(),
        }
    }

    /// Id of a custom action for a player
    ///
    /// Constructing an id does not register it; see `ActionRegistry::register_custom`.
    pub fn custom(player: PlayerSlot, name: impl Into<String>) -> Self {
        Self {
            scope: ActionScope::Custom,
            player,
            key: name.into(),
        }
    }

    /// Whether the action is built-in or custom
    pub fn scope(&self) -> ActionScope {
        self.scope
    }

    /// Player slot the action belongs to
    pub fn player(&self) -> PlayerSlot {
        self.player
    }

    /// Action name without any namespace
    pub fn name(&self) -> &str {
        &self.key
    }

    /// Whether the action was registered at runtime
    pub fn is_custom(&self) -> bool {
        self.scope == ActionScope::Custom
    }

    /// The built-in action this id refers to, if any
    pub fn vanilla_action(&self) -> Option<VanillaAction> {
        match self.scope {
            ActionScope::Vanilla => VanillaAction::from_input_name(&self.key),
            ActionScope::Custom => None,
        }
    }

    /// Identifier the host's button uses for this action
    ///
    /// Custom actions are namespaced so they never shadow a built-in input name.
    pub fn raw_id(&self) -> String {
        match self.scope {
            ActionScope::Vanilla => self.key.clone(),
            ActionScope::Custom => format!("{NAMESPACE_PREFIX}{}", self.key),
        }
    }

    /// Stable persistence key for this (player, action) pair
    ///
    /// Built-in actions are keyed by their host field name and carry no
    /// namespace, so a custom action can never overwrite one.
    pub fn setting_key(&self) -> String {
        match self.vanilla_action() {
            Some(action) => format!("{}_{}", self.player, action.field_name()),
            None => format!("{NAMESPACE_PREFIX}{}_{}", self.player, self.key),
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.player, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_slot_numbering() {
        let slot = PlayerSlot::new(0);
        assert_eq!(slot.index(), 0);
        assert_eq!(slot.number(), 1);
        assert_eq!(slot.to_string(), "Player1");
    }

    #[test]
    fn test_input_none_round_trip_name() {
        assert!(InputId::named("None").is_none());
        assert!(InputId::named("").is_none());
        assert_eq!(InputId::NONE.name(), "None");
    }

    #[test]
    fn test_input_named() {
        let input = InputId::named("K1");
        assert!(input.is_bound());
        assert_eq!(input.name(), "K1");
        assert_eq!(input, InputId::from("K1"));
    }

    #[test]
    fn test_input_from_winit_key() {
        let input = InputId::from(KeyCode::KeyA);
        assert_eq!(input.name(), "KeyA");
        assert_eq!(input, InputId::named("KeyA"));
    }

    #[test]
    fn test_input_from_winit_mouse() {
        let input = InputId::from(MouseButton::Left);
        assert_eq!(input.name(), "MouseLeft");
    }

    #[test]
    fn test_vanilla_table_order() {
        assert_eq!(VanillaAction::ALL.len(), 15);
        assert_eq!(VanillaAction::ALL[0], VanillaAction::Interact);
        assert_eq!(VanillaAction::ALL[14], VanillaAction::Down);
    }

    #[test]
    fn test_vanilla_field_and_input_names() {
        assert_eq!(VanillaAction::Sword.field_name(), "weapon0Input");
        assert_eq!(VanillaAction::Sword.input_name(), "sword");
        assert_eq!(VanillaAction::AimLock.field_name(), "aimLock");
        assert_eq!(VanillaAction::AimLock.input_name(), "aimlock");
    }

    #[test]
    fn test_vanilla_from_input_name() {
        assert_eq!(
            VanillaAction::from_input_name("GUN"),
            Some(VanillaAction::Gun)
        );
        assert_eq!(VanillaAction::from_input_name("jump"), None);
    }

    #[test]
    fn test_action_ids_scoped_per_player() {
        let a = ActionId::custom(PlayerSlot::new(0), "Dash");
        let b = ActionId::custom(PlayerSlot::new(1), "Dash");
        assert_ne!(a, b);
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_custom_ids_differ_from_vanilla() {
        let custom = ActionId::custom(PlayerSlot::new(0), "dash");
        let vanilla = ActionId::vanilla(PlayerSlot::new(0), VanillaAction::Dash);
        assert_ne!(custom, vanilla);
        assert_eq!(vanilla.vanilla_action(), Some(VanillaAction::Dash));
        assert_eq!(custom.vanilla_action(), None);
    }

    #[test]
    fn test_raw_id_and_setting_key() {
        let custom = ActionId::custom(PlayerSlot::new(1), "Next Loadout");
        assert_eq!(custom.raw_id(), "CustomControls_Next Loadout");
        assert_eq!(custom.setting_key(), "CustomControls_Player2_Next Loadout");

        let vanilla = ActionId::vanilla(PlayerSlot::new(0), VanillaAction::Heal);
        assert_eq!(vanilla.raw_id(), "heal");
        assert_eq!(vanilla.setting_key(), "Player1_heal");

        let sword = ActionId::vanilla(PlayerSlot::new(1), VanillaAction::Sword);
        assert_eq!(sword.setting_key(), "Player2_weapon0Input");
    }

    #[test]
    fn test_custom_named_like_builtin_has_own_setting_key() {
        let vanilla = ActionId::vanilla(PlayerSlot::new(0), VanillaAction::Heal);
        let custom = ActionId::custom(PlayerSlot::new(0), "heal");
        assert_eq!(custom.setting_key(), "CustomControls_Player1_heal");
        assert_ne!(vanilla.setting_key(), custom.setting_key());
    }
}
