//! # Tallum
//!
//! A 48-key Planck layout, with the layer engine and the custom key processing it needs.
//!
//! Key events go through [`keyboard::Keyboard`], which resolves them against the layer stack in
//! [`keymap::KeyMap`], offers the resolved action to [`processor::process_user_action`] and sends
//! the resulting HID reports to a channel.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod boot;
pub mod channel;
pub mod config;
pub mod event;
pub mod hid;
pub mod keyboard;
pub mod keymap;
pub mod layout;
pub mod layout_macro;
pub mod processor;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
pub use tallum_types::{action, keycode, modifier};

pub type RawMutex = CriticalSectionRawMutex;

/// Size of the key event channel
pub const EVENT_CHANNEL_SIZE: usize = 16;
/// Size of the report channel
pub const REPORT_CHANNEL_SIZE: usize = 16;
