//! Key tokens, pointer phases and the event interpreter
//!
//! Raw host input arrives as loosely typed key strings and pointer
//! callbacks. This module narrows them to a closed set of recognized
//! tokens and maps them onto [`SelectCore`] transitions; anything
//! outside the set is ignored explicitly rather than by fallthrough.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::state::{Direction, SelectCore};

/// A key string the interpreter does not recognize. Callers normally
/// treat this as "leave the event to someone else".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized key token: {0:?}")]
pub struct UnknownKey(pub String);

/// The closed set of keys the select reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyToken {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Space,
}

impl KeyToken {
    /// The literal token as delivered by the host environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyToken::ArrowDown => "ArrowDown",
            KeyToken::ArrowUp => "ArrowUp",
            KeyToken::Enter => "Enter",
            KeyToken::Escape => "Escape",
            KeyToken::Space => " ",
        }
    }
}

impl FromStr for KeyToken {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowDown" => Ok(KeyToken::ArrowDown),
            "ArrowUp" => Ok(KeyToken::ArrowUp),
            "Enter" => Ok(KeyToken::Enter),
            "Escape" => Ok(KeyToken::Escape),
            " " => Ok(KeyToken::Space),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

/// Pointer interaction phase. Only the press phase drives transitions;
/// the later click phase of the same gesture must stay inert so a
/// selection commits with native-dropdown responsiveness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Press,
    Release,
    Click,
}

/// An input event aimed at a select.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectEvent<V> {
    /// A recognized key went down.
    Key(KeyToken),
    /// Pointer activity on the trigger area.
    TriggerPointer(PointerPhase),
    /// Pointer activity on an option's visual region.
    OptionPointer { value: V, phase: PointerPhase },
    /// External dismiss signal, e.g. the select lost activation.
    Dismiss,
}

impl<V> SelectCore<V>
where
    V: Clone + PartialEq + fmt::Debug,
{
    /// Apply one input event. Unrecognized combinations are ignored.
    pub fn handle(&mut self, event: SelectEvent<V>) {
        match event {
            SelectEvent::Key(key) => self.handle_key(key),
            SelectEvent::TriggerPointer(PointerPhase::Press) => self.toggle(),
            SelectEvent::TriggerPointer(_) => {}
            SelectEvent::OptionPointer {
                value,
                phase: PointerPhase::Press,
            } => self.commit(value),
            SelectEvent::OptionPointer { .. } => {}
            SelectEvent::Dismiss => self.close(),
        }
    }

    /// Apply one recognized key.
    pub fn handle_key(&mut self, key: KeyToken) {
        match (self.is_open(), key) {
            (false, KeyToken::ArrowDown | KeyToken::ArrowUp | KeyToken::Space) => {
                self.open();
            }
            (false, KeyToken::Enter | KeyToken::Escape) => {}
            (true, KeyToken::ArrowDown) => self.move_focus(Direction::Next),
            (true, KeyToken::ArrowUp) => self.move_focus(Direction::Previous),
            (true, KeyToken::Enter | KeyToken::Space) => self.commit_focused(),
            (true, KeyToken::Escape) => self.close(),
        }
    }

    /// Apply a raw key string; unrecognized tokens are ignored.
    pub fn handle_key_str(&mut self, key: &str) {
        if let Ok(token) = key.parse::<KeyToken>() {
            self.handle_key(token);
        }
    }
}
