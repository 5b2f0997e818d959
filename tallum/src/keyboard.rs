use core::cell::RefCell;

use embassy_sync::channel::{Receiver, Sender};
use usbd_hid::descriptor::MediaKeyboardReport;

use crate::action::{Action, KeyAction};
use crate::boot;
use crate::event::KeyEvent;
use crate::hid::{KeyboardReport, Report};
use crate::keycode::KeyCode;
use crate::keymap::KeyMap;
use crate::modifier::{HidModifiers, ModifierCombination};
use crate::processor::{ProcessResult, UserKeyHost, process_user_action};
use crate::{EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    pub(crate) keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,

    /// Where the reports go
    report_sender: Sender<'a, RawMutex, Report, REPORT_CHANNEL_SIZE>,

    /// the held modifiers for the keyboard hid report
    held_modifiers: HidModifiers,

    /// Modifiers carried by `KeyWithModifier` actions, merged into the report but never into `held_modifiers`
    with_modifiers: HidModifiers,

    /// the held keys for the keyboard hid report, except the modifiers
    held_keycodes: [KeyCode; 6],

    /// Registered key position, `None` for keys registered without a position
    registered_keys: [Option<(u8, u8)>; 6],

    /// Internal media report buf
    media_report: MediaKeyboardReport,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(
        keymap: &'a RefCell<KeyMap<'a, ROW, COL, NUM_LAYER>>,
        report_sender: Sender<'a, RawMutex, Report, REPORT_CHANNEL_SIZE>,
    ) -> Self {
        Keyboard {
            keymap,
            report_sender,
            held_modifiers: HidModifiers::new(),
            with_modifiers: HidModifiers::new(),
            held_keycodes: [KeyCode::No; 6],
            registered_keys: [None; 6],
            media_report: MediaKeyboardReport { usage_id: 0 },
        }
    }

    /// Main keyboard processing task, it receives key events and processes keys.
    /// The reports are sent to the report channel.
    pub async fn run(&mut self, key_events: Receiver<'a, RawMutex, KeyEvent, EVENT_CHANNEL_SIZE>) -> ! {
        loop {
            let key_event = key_events.receive().await;
            self.process_inner(key_event).await;
        }
    }

    async fn send_report(&self, report: Report) {
        self.report_sender.send(report).await
    }

    /// Process key changes at (row, col)
    pub async fn process_inner(&mut self, key_event: KeyEvent) {
        let key_action = self.keymap.borrow_mut().get_action_with_layer_cache(key_event);
        debug!("Process key action: {:?}, {:?}", key_action, key_event);
        self.process_key_action(key_action, key_event).await;
    }

    async fn process_key_action(&mut self, key_action: KeyAction, key_event: KeyEvent) {
        match key_action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(action) => {
                if process_user_action(action, key_event, self).await == ProcessResult::Continue {
                    self.process_action(action, key_event).await;
                }
            }
        }
    }

    /// Default processing of an action
    async fn process_action(&mut self, action: Action, key_event: KeyEvent) {
        match action {
            Action::Key(key) => self.process_action_keycode(key, key_event).await,
            Action::KeyWithModifier(key, modifiers) => {
                self.process_action_key_with_modifier(key, modifiers, key_event).await
            }
            Action::LayerToggle(layer_num) => {
                // Toggle the layer when pressed
                if key_event.pressed {
                    self.keymap.borrow_mut().toggle_layer(layer_num);
                }
            }
            Action::Bootloader => {
                // Jump to the bootloader when the key is released
                if !key_event.pressed {
                    boot::jump_to_bootloader();
                }
            }
            // Custom keys never reach the default processing
            Action::User(_) => (),
        }
    }

    async fn process_action_keycode(&mut self, key: KeyCode, key_event: KeyEvent) {
        if let Some(consumer) = key.process_as_consumer() {
            self.media_report.usage_id = if key_event.pressed { consumer.usage_id() } else { 0 };
            self.send_media_report().await;
            return;
        }

        if key_event.pressed {
            self.register_key(key, Some((key_event.row, key_event.col)));
        } else {
            self.unregister_key(key, Some((key_event.row, key_event.col)));
        }
        self.send_keyboard_report().await;
    }

    async fn process_action_key_with_modifier(
        &mut self,
        key: KeyCode,
        modifiers: ModifierCombination,
        key_event: KeyEvent,
    ) {
        let position = Some((key_event.row, key_event.col));
        if key_event.pressed {
            self.with_modifiers |= modifiers.to_hid_modifiers();
            self.register_key(key, position);
        } else {
            self.with_modifiers &= !modifiers.to_hid_modifiers();
            self.unregister_key(key, position);
        }
        self.send_keyboard_report().await;
    }

    pub(crate) async fn send_keyboard_report(&mut self) {
        self.send_report(Report::KeyboardReport(KeyboardReport {
            modifier: self.resolve_modifiers().into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        }))
        .await;
    }

    /// Physically held modifiers plus the ones of the pressed `KeyWithModifier` actions
    fn resolve_modifiers(&self) -> HidModifiers {
        self.held_modifiers | self.with_modifiers
    }

    pub(crate) async fn send_media_report(&mut self) {
        self.send_report(Report::MediaKeyboardReport(MediaKeyboardReport {
            usage_id: self.media_report.usage_id,
        }))
        .await;
    }

    /// Register a key, the key can be a basic keycode or a modifier.
    fn register_key(&mut self, key: KeyCode, position: Option<(u8, u8)>) {
        if key.is_modifier() {
            self.held_modifiers |= key.to_hid_modifiers();
        } else if key.is_basic() {
            self.register_keycode(key, position);
        }
    }

    /// Unregister a key, the key can be a basic keycode or a modifier.
    fn unregister_key(&mut self, key: KeyCode, position: Option<(u8, u8)>) {
        if key.is_modifier() {
            self.held_modifiers &= !key.to_hid_modifiers();
        } else if key.is_basic() {
            self.unregister_keycode(key, position);
        }
    }

    fn find_slot(&self, position: Option<(u8, u8)>) -> Option<usize> {
        position.and_then(|pos| self.registered_keys.iter().position(|k| *k == Some(pos)))
    }

    /// Register a key to be sent in hid report.
    fn register_keycode(&mut self, key: KeyCode, position: Option<(u8, u8)>) {
        // First, find the key event slot according to the position
        if let Some(index) = self.find_slot(position) {
            self.held_keycodes[index] = key;
        } else if let Some(index) = self.held_keycodes.iter().position(|&k| k == KeyCode::No) {
            // Otherwise, find the first free slot
            self.held_keycodes[index] = key;
            self.registered_keys[index] = position;
        } else {
            warn!("Keyboard report is full, dropping {:?}", key);
        }
    }

    /// Unregister a key from hid report.
    fn unregister_keycode(&mut self, key: KeyCode, position: Option<(u8, u8)>) {
        // First, find the key event slot according to the position, otherwise release the first same key
        let slot = self
            .find_slot(position)
            .or_else(|| self.held_keycodes.iter().position(|&k| k == key));

        if let Some(index) = slot {
            self.held_keycodes[index] = KeyCode::No;
            self.registered_keys[index] = None;
        }
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> UserKeyHost for Keyboard<'_, ROW, COL, NUM_LAYER> {
    fn activate_layer(&mut self, layer_num: u8) {
        self.keymap.borrow_mut().activate_layer(layer_num);
    }

    fn deactivate_layer(&mut self, layer_num: u8) {
        self.keymap.borrow_mut().deactivate_layer(layer_num);
    }

    fn toggle_layer(&mut self, layer_num: u8) {
        self.keymap.borrow_mut().toggle_layer(layer_num);
    }

    fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8) {
        self.keymap.borrow_mut().update_tri_layer(layer1, layer2, layer3);
    }

    fn tri_layer(&self) -> Option<[u8; 3]> {
        self.keymap.borrow().behavior.tri_layer
    }

    async fn register_code(&mut self, key: KeyCode) {
        self.register_key(key, None);
        self.send_keyboard_report().await;
    }

    async fn unregister_code(&mut self, key: KeyCode) {
        self.unregister_key(key, None);
        self.send_keyboard_report().await;
    }
}
