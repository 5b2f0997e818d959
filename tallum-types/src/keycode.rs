use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::modifier::HidModifiers;

/// Key codes from the HID keyboard usage page, plus the media keys which are
/// routed to the consumer page when reported.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x00,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x01,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x02,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x03,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// Non-US `#` and `~`
    NonusHash = 0x32,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    KpSlash = 0x54,
    KpAsterisk = 0x55,
    KpMinus = 0x56,
    KpPlus = 0x57,
    KpEnter = 0x58,
    Kp1 = 0x59,
    Kp2 = 0x5A,
    Kp3 = 0x5B,
    Kp4 = 0x5C,
    Kp5 = 0x5D,
    Kp6 = 0x5E,
    Kp7 = 0x5F,
    Kp8 = 0x60,
    Kp9 = 0x61,
    Kp0 = 0x62,
    KpDot = 0x63,
    /// Non-US `\` and `|`, the extra key next to left shift on ISO boards
    NonusBackslash = 0x64,
    Application = 0x65,
    AudioMute = 0xA8,
    AudioVolUp = 0xA9,
    AudioVolDown = 0xAA,
    MediaNextTrack = 0xAB,
    MediaPrevTrack = 0xAC,
    MediaStop = 0xAD,
    MediaPlayPause = 0xAE,
    /// Left Control
    LCtrl = 0xE0,
    /// Left Shift
    LShift = 0xE1,
    /// Left Alt
    LAlt = 0xE2,
    /// Left GUI
    LGui = 0xE3,
    /// Right Control
    RCtrl = 0xE4,
    /// Right Shift
    RShift = 0xE5,
    /// Right Alt
    RAlt = 0xE6,
    /// Right GUI
    RGui = 0xE7,
}

impl KeyCode {
    /// Returns `true` if the keycode goes into the 6-key array of a keyboard report
    pub fn is_basic(self) -> bool {
        KeyCode::A <= self && self <= KeyCode::Application
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Returns the modifier bit of a modifier keycode, empty for all other keycodes.
    pub fn to_hid_modifiers(self) -> HidModifiers {
        match self {
            KeyCode::LCtrl => HidModifiers::new().with_left_ctrl(true),
            KeyCode::LShift => HidModifiers::new().with_left_shift(true),
            KeyCode::LAlt => HidModifiers::new().with_left_alt(true),
            KeyCode::LGui => HidModifiers::new().with_left_gui(true),
            KeyCode::RCtrl => HidModifiers::new().with_right_ctrl(true),
            KeyCode::RShift => HidModifiers::new().with_right_shift(true),
            KeyCode::RAlt => HidModifiers::new().with_right_alt(true),
            KeyCode::RGui => HidModifiers::new().with_right_gui(true),
            _ => HidModifiers::new(),
        }
    }

    /// Some hid keycodes are processed as consumer keys, for compatibility
    pub fn process_as_consumer(self) -> Option<ConsumerKey> {
        match self {
            KeyCode::AudioMute => Some(ConsumerKey::Mute),
            KeyCode::AudioVolUp => Some(ConsumerKey::VolumeIncrement),
            KeyCode::AudioVolDown => Some(ConsumerKey::VolumeDecrement),
            KeyCode::MediaNextTrack => Some(ConsumerKey::NextTrack),
            KeyCode::MediaPrevTrack => Some(ConsumerKey::PrevTrack),
            KeyCode::MediaStop => Some(ConsumerKey::StopPlay),
            KeyCode::MediaPlayPause => Some(ConsumerKey::PlayPause),
            _ => None,
        }
    }
}

impl From<u8> for KeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(KeyCode::No)
    }
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/documents/hut1_12v2.pdf#page=75>
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    No = 0x00,
    // 15.7 Transport Controls
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    StopPlay = 0xB7,
    PlayPause = 0xCD,
    // 15.9.1 Audio Controls - Volume
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
}

impl ConsumerKey {
    /// Usage id to put into a consumer report
    pub fn usage_id(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_classes() {
        assert!(KeyCode::Q.is_basic());
        assert!(KeyCode::NonusBackslash.is_basic());
        assert!(!KeyCode::LGui.is_basic());
        assert!(KeyCode::LGui.is_modifier());
        assert!(KeyCode::RGui.is_modifier());
        assert!(!KeyCode::Space.is_modifier());
        assert!(KeyCode::AudioMute.process_as_consumer().is_some());
        assert!(!KeyCode::AudioMute.is_basic());
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(KeyCode::from(0x14), KeyCode::Q);
        assert_eq!(KeyCode::from(0xE3), KeyCode::LGui);
        // Gaps in the table fall back to `No`
        assert_eq!(KeyCode::from(0x90), KeyCode::No);
    }

    #[test]
    fn test_consumer_usage() {
        assert_eq!(KeyCode::AudioVolUp.process_as_consumer(), Some(ConsumerKey::VolumeIncrement));
        assert_eq!(ConsumerKey::PlayPause.usage_id(), 0xCD);
        assert_eq!(KeyCode::A.process_as_consumer(), None);
    }
}
