//! # Tallum Types
//!
//! Fundamental type definitions used by the tallum layout.
//!
//! ## Modules
//!
//! - [`action`] - Keymap slots and the actions they trigger, including the custom keys of the layout
//! - [`keycode`] - HID keycodes and consumer keys
//! - [`modifier`] - Modifier key combinations and the HID modifier byte

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod keycode;
pub mod modifier;
