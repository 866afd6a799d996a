//! Input types for keyboard-driven avatar control
//!
//! Platform code (the browser event handlers, or the headless script runner)
//! feeds key presses into a [`KeyboardState`]; game code reads a
//! [`MovementIntent`] from it once per frame.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Keys
// ============================================================================

/// Physical keys the runtime cares about
///
/// Names follow the DOM `KeyboardEvent.code` values so the wasm bridge can
/// forward browser events unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyE,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,
}

impl Key {
    /// All known keys
    pub const ALL: [Key; 12] = [
        Key::KeyW,
        Key::KeyA,
        Key::KeyS,
        Key::KeyD,
        Key::KeyE,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::Space,
        Key::ShiftLeft,
        Key::ShiftRight,
    ];

    /// The DOM `KeyboardEvent.code` for this key
    pub fn code(&self) -> &'static str {
        match self {
            Key::KeyW => "KeyW",
            Key::KeyA => "KeyA",
            Key::KeyS => "KeyS",
            Key::KeyD => "KeyD",
            Key::KeyE => "KeyE",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Space => "Space",
            Key::ShiftLeft => "ShiftLeft",
            Key::ShiftRight => "ShiftRight",
        }
    }

    /// Look a key up by DOM code (`"KeyW"`) or short name (`"w"`, `"up"`, `"space"`)
    pub fn from_code(code: &str) -> Option<Key> {
        if let Some(key) = Key::ALL.iter().find(|k| k.code() == code) {
            return Some(*key);
        }

        let key = match code.to_ascii_lowercase().as_str() {
            "w" => Key::KeyW,
            "a" => Key::KeyA,
            "s" => Key::KeyS,
            "d" => Key::KeyD,
            "e" => Key::KeyE,
            "up" => Key::ArrowUp,
            "down" => Key::ArrowDown,
            "left" => Key::ArrowLeft,
            "right" => Key::ArrowRight,
            "space" | "jump" => Key::Space,
            "shift" => Key::ShiftLeft,
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Key::from_code(s.trim()).ok_or_else(|| Error::UnknownKey(s.to_string()))
    }
}

// ============================================================================
// Actions and bindings
// ============================================================================

/// Named intents produced from keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    Backward,
    Leftward,
    Rightward,
    Jump,
    Interact,
    Run,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::Leftward => "leftward",
            Action::Rightward => "rightward",
            Action::Jump => "jump",
            Action::Interact => "interact",
            Action::Run => "run",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "forward" => Ok(Action::Forward),
            "backward" => Ok(Action::Backward),
            "leftward" => Ok(Action::Leftward),
            "rightward" => Ok(Action::Rightward),
            "jump" => Ok(Action::Jump),
            "interact" => Ok(Action::Interact),
            "run" => Ok(Action::Run),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// Mapping from actions to the keys that trigger them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<(Action, Vec<Key>)>,
}

impl Default for KeyBindings {
    /// W/↑ forward, S/↓ backward, A/← left, D/→ right, Space jump, E interact
    fn default() -> Self {
        Self {
            bindings: vec![
                (Action::Forward, vec![Key::KeyW, Key::ArrowUp]),
                (Action::Backward, vec![Key::KeyS, Key::ArrowDown]),
                (Action::Leftward, vec![Key::KeyA, Key::ArrowLeft]),
                (Action::Rightward, vec![Key::KeyD, Key::ArrowRight]),
                (Action::Jump, vec![Key::Space]),
                (Action::Interact, vec![Key::KeyE]),
            ],
        }
    }
}

impl KeyBindings {
    /// Bindings with no keys assigned
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key to an action (keeps existing keys)
    pub fn bind(&mut self, action: Action, key: Key) {
        match self.bindings.iter_mut().find(|(a, _)| *a == action) {
            Some((_, keys)) => {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
            None => self.bindings.push((action, vec![key])),
        }
    }

    /// Keys currently bound to an action
    pub fn keys_for(&self, action: Action) -> &[Key] {
        self.bindings
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, keys)| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any key bound to `action` is in `pressed`
    pub fn is_active(&self, action: Action, pressed: &HashSet<Key>) -> bool {
        self.keys_for(action).iter().any(|k| pressed.contains(k))
    }
}

// ============================================================================
// Per-frame intent
// ============================================================================

/// Boolean movement intents sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementIntent {
    pub forward: bool,
    pub backward: bool,
    pub leftward: bool,
    pub rightward: bool,
    pub jump: bool,
    pub run: bool,
}

impl MovementIntent {
    /// Intent with only `forward` held
    pub fn forward() -> Self {
        Self {
            forward: true,
            ..Default::default()
        }
    }

    /// Intent with only `jump` held
    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Default::default()
        }
    }

    /// Check if any horizontal direction is held
    pub fn has_direction(&self) -> bool {
        self.forward || self.backward || self.leftward || self.rightward
    }
}

/// Set of currently held keys plus the bindings that interpret them
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<Key>,
    bindings: KeyBindings,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            pressed: HashSet::new(),
            bindings,
        }
    }

    /// Record a key press
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    /// Record a key release
    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Replace the held set wholesale
    pub fn set_pressed(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.pressed = keys.into_iter().collect();
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.bindings.is_active(action, &self.pressed)
    }

    /// Movement intent for this frame
    pub fn intent(&self) -> MovementIntent {
        MovementIntent {
            forward: self.is_active(Action::Forward),
            backward: self.is_active(Action::Backward),
            leftward: self.is_active(Action::Leftward),
            rightward: self.is_active(Action::Rightward),
            jump: self.is_active(Action::Jump),
            run: self.is_active(Action::Run),
        }
    }

    /// Whether the interact key is held (level, not edge)
    pub fn interact(&self) -> bool {
        self.is_active(Action::Interact)
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

/// Rising-edge detector for discrete inputs such as "interact"
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current level; returns true only on a false→true transition
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.previous;
        self.previous = level;
        rising
    }

    pub fn reset(&mut self) {
        self.previous = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_map_arrows_and_wasd() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::ArrowUp);
        keyboard.press(Key::KeyD);

        let intent = keyboard.intent();
        assert!(intent.forward);
        assert!(intent.rightward);
        assert!(!intent.backward);
        assert!(!intent.jump);
    }

    #[test]
    fn test_release_clears_intent() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::Space);
        assert!(keyboard.intent().jump);
        keyboard.release(Key::Space);
        assert!(!keyboard.intent().jump);
    }

    #[test]
    fn test_interact_bound_to_e() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.interact());
        keyboard.press(Key::KeyE);
        assert!(keyboard.interact());
    }

    #[test]
    fn test_run_unbound_by_default() {
        let mut keyboard = KeyboardState::new();
        keyboard.press(Key::ShiftLeft);
        assert!(!keyboard.intent().run);

        let mut bindings = KeyBindings::default();
        bindings.bind(Action::Run, Key::ShiftLeft);
        let mut keyboard = KeyboardState::with_bindings(bindings);
        keyboard.press(Key::ShiftLeft);
        assert!(keyboard.intent().run);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("KeyW".parse::<Key>(), Ok(Key::KeyW));
        assert_eq!("space".parse::<Key>(), Ok(Key::Space));
        assert_eq!("Up".parse::<Key>(), Ok(Key::ArrowUp));
        assert_eq!(
            "F13".parse::<Key>(),
            Err(Error::UnknownKey("F13".to_string()))
        );
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("interact".parse::<Action>(), Ok(Action::Interact));
        assert!("teleport".parse::<Action>().is_err());
    }

    #[test]
    fn test_edge_detector_fires_once_per_press() {
        let mut edge = EdgeDetector::new();
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_intent_serializes() {
        let json = serde_json::to_string(&MovementIntent::forward()).unwrap();
        assert!(json.contains("\"forward\":true"));
    }
}
