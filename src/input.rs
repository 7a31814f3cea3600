//! Logical actions and key bindings
//!
//! The simulation only ever sees [`ActionState`]; physical key names are
//! resolved here through [`KeyBindings`], which is validated against the fixed
//! [`Action`] list when settings are loaded.

use std::collections::{BTreeMap, HashSet};

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LaserDodgeError;
use crate::sim::MoveIntent;

/// Rebindable logical actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Dash,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Dash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::Dash => "dash",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "move_left" => Some(Action::MoveLeft),
            "move_right" => Some(Action::MoveRight),
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),
            "dash" => Some(Action::Dash),
            _ => None,
        }
    }

    /// Default physical key
    pub fn default_key(&self) -> &'static str {
        match self {
            Action::MoveLeft => "a",
            Action::MoveRight => "d",
            Action::MoveUp => "w",
            Action::MoveDown => "s",
            Action::Dash => "space",
        }
    }

    /// Arrow key that also drives a movement action
    pub fn arrow_alias(&self) -> Option<&'static str> {
        match self {
            Action::MoveLeft => Some("left"),
            Action::MoveRight => Some("right"),
            Action::MoveUp => Some("up"),
            Action::MoveDown => Some("down"),
            Action::Dash => None,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Normalized key name (lowercase, trimmed)
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Mapping from every logical action to one physical key name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, String>")]
pub struct KeyBindings {
    keys: [String; 5],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            keys: Action::ALL.map(|a| a.default_key().to_string()),
        }
    }
}

impl KeyBindings {
    pub fn key_for(&self, action: Action) -> &str {
        &self.keys[action.index()]
    }

    /// Bind `action` to `key`
    pub fn rebind(&mut self, action: Action, key: &str) -> Result<(), LaserDodgeError> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(LaserDodgeError::EmptyKey(action));
        }
        self.keys[action.index()] = key;
        Ok(())
    }

    /// Bind by action name, as stored in the settings file
    pub fn rebind_named(&mut self, name: &str, key: &str) -> Result<(), LaserDodgeError> {
        let action =
            Action::from_name(name).ok_or_else(|| LaserDodgeError::UnknownAction(name.to_string()))?;
        self.rebind(action, key)
    }

    /// First action bound to `key`, in [`Action::ALL`] order
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        let key = normalize_key(key);
        Action::ALL.into_iter().find(|a| self.key_for(*a) == key)
    }

    /// Whether `action` is held given the set of pressed key names.
    ///
    /// Movement actions also answer to their arrow key unless that arrow key
    /// has been bound to a different action.
    pub fn is_pressed(&self, action: Action, pressed: &HashSet<String>) -> bool {
        if pressed.contains(self.key_for(action)) {
            return true;
        }
        match action.arrow_alias() {
            Some(arrow) => {
                pressed.contains(arrow)
                    && self.action_for_key(arrow).is_none_or(|owner| owner == action)
            }
            None => false,
        }
    }
}

impl From<BTreeMap<String, Value>> for KeyBindings {
    fn from(map: BTreeMap<String, Value>) -> Self {
        let mut bindings = Self::default();
        for (name, key) in map {
            let Some(key) = key.as_str() else {
                warn!("Ignoring key binding {name:?} = {key}: not a key name");
                continue;
            };
            if let Err(e) = bindings.rebind_named(&name, key) {
                warn!("Ignoring key binding {name:?} = {key:?}: {e}");
            }
        }
        bindings
    }
}

impl From<KeyBindings> for BTreeMap<String, String> {
    fn from(bindings: KeyBindings) -> Self {
        Action::ALL
            .into_iter()
            .zip(bindings.keys)
            .map(|(action, key)| (action.as_str().to_string(), key))
            .collect()
    }
}

/// Per-tick state of the logical actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub dash: bool,
}

impl ActionState {
    /// Resolve physically pressed keys (normalized names) through `bindings`
    pub fn from_pressed_keys(bindings: &KeyBindings, pressed: &HashSet<String>) -> Self {
        Self {
            move_left: bindings.is_pressed(Action::MoveLeft, pressed),
            move_right: bindings.is_pressed(Action::MoveRight, pressed),
            move_up: bindings.is_pressed(Action::MoveUp, pressed),
            move_down: bindings.is_pressed(Action::MoveDown, pressed),
            dash: bindings.is_pressed(Action::Dash, pressed),
        }
    }

    pub fn movement(&self) -> MoveIntent {
        MoveIntent {
            left: self.move_left,
            right: self.move_right,
            up: self.move_up,
            down: self.move_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_action_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.as_str()), Some(action));
        }
        assert_eq!(Action::from_name(" Dash "), Some(Action::Dash));
        assert_eq!(Action::from_name("jump"), None);
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.key_for(Action::MoveLeft), "a");
        assert_eq!(bindings.key_for(Action::MoveRight), "d");
        assert_eq!(bindings.key_for(Action::MoveUp), "w");
        assert_eq!(bindings.key_for(Action::MoveDown), "s");
        assert_eq!(bindings.key_for(Action::Dash), "space");
    }

    #[test]
    fn test_rebind_normalizes_and_rejects_empty() {
        let mut bindings = KeyBindings::default();
        bindings.rebind(Action::Dash, "  LShift ").unwrap();
        assert_eq!(bindings.key_for(Action::Dash), "lshift");

        assert_eq!(
            bindings.rebind(Action::Dash, "   "),
            Err(LaserDodgeError::EmptyKey(Action::Dash))
        );
        assert_eq!(bindings.key_for(Action::Dash), "lshift");

        assert!(matches!(
            bindings.rebind_named("fly", "f"),
            Err(LaserDodgeError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_from_map_merges_onto_defaults() {
        let mut map = BTreeMap::new();
        map.insert("dash".to_string(), Value::from("k"));
        map.insert("teleport".to_string(), Value::from("t"));
        map.insert("move_up".to_string(), Value::from(""));

        let bindings = KeyBindings::from(map);
        assert_eq!(bindings.key_for(Action::Dash), "k");
        assert_eq!(bindings.key_for(Action::MoveUp), "w");
        assert_eq!(bindings.key_for(Action::MoveLeft), "a");
    }

    #[test]
    fn test_non_string_keys_are_skipped() {
        let bindings: KeyBindings =
            serde_json::from_str(r#"{ "dash": 5, "move_down": null, "move_left": "J" }"#).unwrap();
        assert_eq!(bindings.key_for(Action::Dash), "space");
        assert_eq!(bindings.key_for(Action::MoveDown), "s");
        assert_eq!(bindings.key_for(Action::MoveLeft), "j");
    }

    #[test]
    fn test_resolve_pressed_keys() {
        let bindings = KeyBindings::default();
        let state = ActionState::from_pressed_keys(&bindings, &keys(&["a", "space", "q"]));
        assert!(state.move_left);
        assert!(state.dash);
        assert!(!state.move_right && !state.move_up && !state.move_down);

        let intent = state.movement();
        assert!(intent.left && !intent.right);
    }

    #[test]
    fn test_arrow_keys_alias_movement() {
        let mut bindings = KeyBindings::default();
        let state = ActionState::from_pressed_keys(&bindings, &keys(&["up"]));
        assert!(state.move_up);

        // Once "up" is claimed by dash it no longer moves the player
        bindings.rebind(Action::Dash, "up").unwrap();
        let state = ActionState::from_pressed_keys(&bindings, &keys(&["up"]));
        assert!(state.dash);
        assert!(!state.move_up);
    }
}
