use core::cell::RefCell;

use embassy_sync::channel::Channel;
use tallum::event::KeyEvent;
use tallum::hid::{KeyboardReport, Report};
use tallum::keyboard::Keyboard;
use tallum::keymap::KeyMap;
use tallum::layout::{COL, KEYMAP, NUM_LAYER, ROW, behavior_config};
use tallum::{REPORT_CHANNEL_SIZE, RawMutex};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KC_LSHIFT: u8 = 1 << 1;
pub const KC_LGUI: u8 = 1 << 3;

/// Convert a keycode name to its HID usage id
#[macro_export]
macro_rules! kc {
    ($k: ident) => {
        tallum::keycode::KeyCode::$k as u8
    };
}

pub type ReportChannel = Channel<RawMutex, Report, REPORT_CHANNEL_SIZE>;

pub struct TestKeyboard {
    pub keyboard: Keyboard<'static, ROW, COL, NUM_LAYER>,
    pub keymap: &'static RefCell<KeyMap<'static, ROW, COL, NUM_LAYER>>,
    pub reports: &'static ReportChannel,
}

impl TestKeyboard {
    /// Process one key event and collect every report it produced
    pub fn key(&mut self, row: u8, col: u8, pressed: bool) -> Vec<Report> {
        embassy_futures::block_on(self.keyboard.process_inner(KeyEvent { row, col, pressed }));
        let mut reports = Vec::new();
        while let Ok(report) = self.reports.try_receive() {
            reports.push(report);
        }
        reports
    }

    /// Press and release a key
    pub fn tap(&mut self, row: u8, col: u8) -> Vec<Report> {
        let mut reports = self.key(row, col, true);
        reports.extend(self.key(row, col, false));
        reports
    }

    pub fn active_layers(&self) -> Vec<u8> {
        self.keymap.borrow().active_layers().iter().copied().collect()
    }
}

/// Create a keyboard running the full layout
pub fn create_test_keyboard() -> TestKeyboard {
    // Box::leak is acceptable in tests
    let keymap: &'static RefCell<KeyMap<'static, ROW, COL, NUM_LAYER>> =
        Box::leak(Box::new(RefCell::new(KeyMap::new(&KEYMAP, behavior_config()))));
    let reports: &'static ReportChannel = Box::leak(Box::new(Channel::new()));
    TestKeyboard {
        keyboard: Keyboard::new(keymap, reports.sender()),
        keymap,
        reports,
    }
}

pub fn keyboard_reports(reports: Vec<Report>) -> Vec<KeyboardReport> {
    reports
        .into_iter()
        .map(|r| match r {
            Report::KeyboardReport(r) => r,
            Report::MediaKeyboardReport(r) => panic!("unexpected media report {:#x}", { r.usage_id }),
        })
        .collect()
}

pub fn report(modifier: u8, keycodes: [u8; 6]) -> KeyboardReport {
    KeyboardReport {
        modifier,
        reserved: 0,
        leds: 0,
        keycodes,
    }
}
