//! Keyboard actions.
//!
//! Key types:
//! - [`KeyAction`] - What a slot of the keymap holds
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`UserKey`] - The custom keys of the layout, handled by the user key processor

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, including media keys.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Toggle a layer
    LayerToggle(u8),
    /// A custom key of the layout
    User(UserKey),
    /// Jump to the bootloader when released
    Bootloader,
}

/// Custom keys of the layout.
///
/// These keys are never reported to the host directly, the user key processor decides what they do.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UserKey {
    /// Hold for the Move layer, combines with `Symbol` into the Function layer
    Move,
    /// Hold for the Symbol layer, combines with `Move` into the Function layer
    Symbol,
    /// Hold for the Function layer
    Function,
    /// Switch the input language of the host and flip the Language layer
    Language,
}
