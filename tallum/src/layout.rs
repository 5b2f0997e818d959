//! The Planck layout: five layers on a 4x12 grid, based on the Callum layout.

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::{a, boot, k, layer, shifted, tg, user};

pub const ROW: usize = 4;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 5;

/// Layers of the layout, the value is the layer number in keymap
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    /// Swedish letters on a US host layout
    Language = 1,
    Move = 2,
    Symbol = 3,
    Function = 4,
}

impl Layer {
    pub const fn num(self) -> u8 {
        self as u8
    }
}

const LANG: u8 = Layer::Language.num();

/// The layer table
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = get_default_keymap();

/// Behavior of the layout: holding Move and Symbol together gives the Function layer
pub fn behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tri_layer: Some([Layer::Move.num(), Layer::Symbol.num(), Layer::Function.num()]),
    }
}

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Base
        // | Tab  |   Q  |   W  |   E  |   R  |   T  |   Y  |   U  |   I  |   O  |   P  | Bksp |
        // | RCtr |   A  |   S  |   D  |   F  |   G  |   H  |   J  |   K  |   L  |   ;  |Enter |
        // | Shift|   Z  |   X  |   C  |   V  |   B  |   N  |   M  |   ,  |   .  |   '  |   /  |
        // | Func | RAlt | LAlt | GUI  | Symb |    Space    | Move | GUI  | RAlt | LAlt |   -  |
        layer!([
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace)],
            [k!(RCtrl), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Enter)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Quote), k!(Slash)],
            [user!(Function), k!(RAlt), k!(LAlt), k!(LGui), user!(Symbol), k!(Space), k!(Space), user!(Move), k!(RGui), k!(RAlt), k!(LAlt), k!(Minus)]
        ]),
        // Language: Å Ö Ä sit on `[`, `;` and `'` of a Swedish host layout
        // | Tab  |   Q  |   W  |   E  |   R  |   T  |   Y  |   U  |   I  |   O  |   P  | Bksp |
        // | RCtr |   A  |   S  |   D  |   F  |   G  |   H  |   J  |   K  |   L  |  [Å  |Enter |
        // | Shift|   Z  |   X  |   C  |   V  |   B  |   N  |   M  |   ,  |   .  |  ;Ö  |  'Ä  |
        // | Func | RAlt | LAlt | GUI  | Symb |    Space    | Move | GUI  | RAlt | LAlt |   /  |
        layer!([
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace)],
            [k!(RCtrl), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(LeftBracket), k!(Enter)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Semicolon), k!(Quote)],
            [user!(Function), k!(RAlt), k!(LAlt), k!(LGui), user!(Symbol), k!(Space), k!(Space), user!(Move), k!(RGui), k!(RAlt), k!(LAlt), k!(Slash)]
        ]),
        // Move
        // | Esc  |Pg Up | Home |  Up  | End  |      |      | Home |  Up  | End  |Pg Up | Esc  |
        // | Del  |Pg Dn | Left | Down |Right |      |      | Left | Down |Right |Pg Dn | Del  |
        // |      |      |      |Pg Up |Pg Dn |      |      |Pg Dn |Pg Up |      |      |      |
        // |      |      |      |      |      |             |      |      |      |      |      |
        layer!([
            [k!(Escape), k!(PageUp), k!(Home), k!(Up), k!(End), a!(Transparent), a!(Transparent), k!(Home), k!(Up), k!(End), k!(PageUp), k!(Escape)],
            [k!(Delete), k!(PageDown), k!(Left), k!(Down), k!(Right), a!(Transparent), a!(Transparent), k!(Left), k!(Down), k!(Right), k!(PageDown), k!(Delete)],
            [a!(Transparent), a!(Transparent), a!(Transparent), k!(PageUp), k!(PageDown), a!(Transparent), a!(Transparent), k!(PageDown), k!(PageUp), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        // Symbol
        // |  Esc |   1  |   2  |   3  |   4  |   5  |   6  |   7  |   8  |   9  |   0  | Esc  |
        // |  Del |   !  |   @  |   #  |   $  |   %  |   ^  |   &  |   *  |   (  |   )  | Del  |
        // |      |   ~  |   |  |   +  |   [  |   ]  |  {   |   }  |   =  |   \  |   `  |   <  |
        // |      |      |      |      |      |             |      |      |      |      |      |
        layer!([
            [k!(Escape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Escape)],
            [k!(Delete), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), k!(Delete)],
            [a!(Transparent), shifted!(Grave), shifted!(Backslash), shifted!(Equal), k!(LeftBracket), k!(RightBracket), shifted!(LeftBracket), shifted!(RightBracket), k!(Equal), k!(Backslash), k!(Grave), k!(NonusBackslash)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
        // Function
        // | F12  |  F1  |  F2  |  F3  |  F4  |  F5  |  F6  |  F7  |  F8  |  F9  | F10  | F11  |
        // |TG(L) | Prev | Play | Next |Pause |      |      |      |      |      |      |      |
        // | LANG | Mute | Vol- | Vol+ |ScrLck| LANG |      |      |      |      |      |      |
        // |      |      |      |      |      |             |      |      |      |      |Reset |
        layer!([
            [k!(F12), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11)],
            [tg!(LANG), k!(MediaPrevTrack), k!(MediaPlayPause), k!(MediaNextTrack), k!(Pause), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [user!(Language), k!(AudioMute), k!(AudioVolDown), k!(AudioVolUp), k!(ScrollLock), user!(Language), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), boot!()]
        ]),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::{Action, UserKey};
    use crate::keycode::KeyCode;
    use crate::keymap::KeyMap;

    #[test]
    fn test_layer_numbers() {
        assert_eq!(Layer::Base.num(), 0);
        assert_eq!(Layer::Function.num() as usize, NUM_LAYER - 1);
    }

    #[test]
    fn test_every_layer_keeps_layer_keys_reachable() {
        // The layer keys on the bottom row must resolve on every layer, either directly or through transparency
        for layer in KEYMAP.iter() {
            for (col, key) in [(0, UserKey::Function), (4, UserKey::Symbol), (7, UserKey::Move)] {
                let slot = layer[3][col];
                assert!(
                    slot == KeyAction::Transparent || slot == KeyAction::Single(Action::User(key)),
                    "unexpected slot {:?} at (3, {})",
                    slot,
                    col
                );
            }
        }
    }

    #[test]
    fn test_every_position_resolves_on_every_layer() {
        for layer in 0..NUM_LAYER as u8 {
            let mut keymap = KeyMap::new(&KEYMAP, behavior_config());
            keymap.activate_layer(layer);
            for row in 0..ROW {
                for col in 0..COL {
                    let action = keymap.get_action(row, col);
                    assert!(
                        matches!(action, KeyAction::Single(_)),
                        "({}, {}) resolves to {:?} on layer {}",
                        row,
                        col,
                        action,
                        layer
                    );
                }
            }
        }
    }

    #[test]
    fn test_language_layer_differs_from_base() {
        let base = &KEYMAP[Layer::Base as usize];
        let lang = &KEYMAP[Layer::Language as usize];
        let mut diffs = 0;
        for row in 0..ROW {
            for col in 0..COL {
                if base[row][col] != lang[row][col] {
                    diffs += 1;
                }
            }
        }
        assert_eq!(diffs, 4);
        assert_eq!(lang[1][10], k!(LeftBracket));
        assert_eq!(lang[3][11], KeyAction::Single(Action::Key(KeyCode::Slash)));
    }
}
