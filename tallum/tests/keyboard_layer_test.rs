pub mod common;

use tallum::layout::Layer;

use crate::common::{KC_LGUI, create_test_keyboard, keyboard_reports, report};

const FUNC: (u8, u8) = (3, 0);
const SYMB: (u8, u8) = (3, 4);
const MOVE: (u8, u8) = (3, 7);
const LANG: (u8, u8) = (2, 0);

#[test]
fn test_move_press_release_restores_layers() {
    let mut kb = create_test_keyboard();
    assert!(kb.active_layers().is_empty());

    // Layer keys never produce reports
    assert!(kb.key(MOVE.0, MOVE.1, true).is_empty());
    assert_eq!(kb.active_layers(), [Layer::Move.num()]);
    assert!(kb.key(MOVE.0, MOVE.1, false).is_empty());
    assert!(kb.active_layers().is_empty());
}

#[test]
fn test_symbol_layer_scenario() {
    let mut kb = create_test_keyboard();

    let reports = keyboard_reports(kb.key(0, 1, true));
    assert_eq!(reports, [report(0, [kc!(Q), 0, 0, 0, 0, 0])]);
    kb.key(0, 1, false);

    kb.key(SYMB.0, SYMB.1, true);
    let reports = keyboard_reports(kb.tap(0, 1));
    assert_eq!(reports, [report(0, [kc!(Kc1), 0, 0, 0, 0, 0]), report(0, [0; 6])]);
    kb.key(SYMB.0, SYMB.1, false);

    let reports = keyboard_reports(kb.tap(0, 1));
    assert_eq!(reports, [report(0, [kc!(Q), 0, 0, 0, 0, 0]), report(0, [0; 6])]);
}

#[test]
fn test_move_and_symbol_activate_function() {
    let mut kb = create_test_keyboard();

    kb.key(MOVE.0, MOVE.1, true);
    kb.key(SYMB.0, SYMB.1, true);
    assert_eq!(
        kb.active_layers(),
        [Layer::Move.num(), Layer::Symbol.num(), Layer::Function.num()]
    );

    let reports = keyboard_reports(kb.tap(0, 1));
    assert_eq!(reports, [report(0, [kc!(F1), 0, 0, 0, 0, 0]), report(0, [0; 6])]);

    // Releasing either key deactivates the combination
    kb.key(SYMB.0, SYMB.1, false);
    assert_eq!(kb.active_layers(), [Layer::Move.num()]);

    kb.key(SYMB.0, SYMB.1, true);
    assert!(kb.keymap.borrow().is_layer_active(Layer::Function.num()));
    kb.key(MOVE.0, MOVE.1, false);
    assert_eq!(kb.active_layers(), [Layer::Symbol.num()]);
    kb.key(SYMB.0, SYMB.1, false);
    assert!(kb.active_layers().is_empty());
}

#[test]
fn test_release_after_layer_change() {
    let mut kb = create_test_keyboard();

    kb.key(MOVE.0, MOVE.1, true);
    kb.key(SYMB.0, SYMB.1, true);
    let reports = keyboard_reports(kb.key(0, 1, true));
    assert_eq!(reports, [report(0, [kc!(F1), 0, 0, 0, 0, 0])]);

    // F1 is still released from the Function layer, though the layer is gone
    kb.key(MOVE.0, MOVE.1, false);
    kb.key(SYMB.0, SYMB.1, false);
    let reports = keyboard_reports(kb.key(0, 1, false));
    assert_eq!(reports, [report(0, [0; 6])]);
}

#[test]
fn test_function_key() {
    let mut kb = create_test_keyboard();

    kb.key(FUNC.0, FUNC.1, true);
    assert_eq!(kb.active_layers(), [Layer::Function.num()]);
    let reports = keyboard_reports(kb.tap(0, 0));
    assert_eq!(reports, [report(0, [kc!(F12), 0, 0, 0, 0, 0]), report(0, [0; 6])]);
    kb.key(FUNC.0, FUNC.1, false);
    assert!(kb.active_layers().is_empty());
}

#[test]
fn test_move_resolves_tri_layer_while_function_is_held() {
    let mut kb = create_test_keyboard();

    // The tri layer is re-resolved on every Move/Symbol change, so it overrides a held Function key
    kb.key(FUNC.0, FUNC.1, true);
    kb.key(MOVE.0, MOVE.1, true);
    assert_eq!(kb.active_layers(), [Layer::Move.num()]);
    kb.key(MOVE.0, MOVE.1, false);
    kb.key(FUNC.0, FUNC.1, false);
    assert!(kb.active_layers().is_empty());
}

#[test]
fn test_language_key() {
    let mut kb = create_test_keyboard();

    kb.key(FUNC.0, FUNC.1, true);
    let reports = keyboard_reports(kb.key(LANG.0, LANG.1, true));
    assert_eq!(
        reports,
        [
            report(KC_LGUI, [0; 6]),
            report(KC_LGUI, [kc!(Space), 0, 0, 0, 0, 0]),
            report(KC_LGUI, [0; 6]),
            report(0, [0; 6]),
        ]
    );
    assert!(kb.keymap.borrow().is_layer_active(Layer::Language.num()));

    // Releasing the key changes nothing
    assert!(kb.key(LANG.0, LANG.1, false).is_empty());
    assert!(kb.keymap.borrow().is_layer_active(Layer::Language.num()));
    kb.key(FUNC.0, FUNC.1, false);
    assert_eq!(kb.active_layers(), [Layer::Language.num()]);

    // Swedish letters
    let reports = keyboard_reports(kb.tap(1, 10));
    assert_eq!(reports[0], report(0, [kc!(LeftBracket), 0, 0, 0, 0, 0]));
    let reports = keyboard_reports(kb.tap(2, 11));
    assert_eq!(reports[0], report(0, [kc!(Quote), 0, 0, 0, 0, 0]));

    // The second language key on the Function layer switches back
    kb.key(FUNC.0, FUNC.1, true);
    assert_eq!(kb.tap(2, 5).len(), 4);
    kb.key(FUNC.0, FUNC.1, false);
    assert!(kb.active_layers().is_empty());

    let reports = keyboard_reports(kb.tap(1, 10));
    assert_eq!(reports[0], report(0, [kc!(Semicolon), 0, 0, 0, 0, 0]));
}

#[test]
fn test_language_layer_toggle_without_shortcut() {
    let mut kb = create_test_keyboard();

    kb.key(FUNC.0, FUNC.1, true);
    assert!(kb.tap(1, 0).is_empty());
    kb.key(FUNC.0, FUNC.1, false);
    assert_eq!(kb.active_layers(), [Layer::Language.num()]);

    // Layer keys keep working on the Language layer
    kb.key(SYMB.0, SYMB.1, true);
    let reports = keyboard_reports(kb.tap(0, 1));
    assert_eq!(reports[0], report(0, [kc!(Kc1), 0, 0, 0, 0, 0]));
    kb.key(SYMB.0, SYMB.1, false);
    assert_eq!(kb.active_layers(), [Layer::Language.num()]);
}

#[test]
fn test_standard_keys_leave_layers_unchanged() {
    let mut kb = create_test_keyboard();

    kb.key(MOVE.0, MOVE.1, true);
    let before = kb.active_layers();
    let reports = keyboard_reports(kb.tap(0, 3));
    assert_eq!(reports, [report(0, [kc!(Up), 0, 0, 0, 0, 0]), report(0, [0; 6])]);
    assert_eq!(kb.active_layers(), before);
    kb.key(MOVE.0, MOVE.1, false);
}
