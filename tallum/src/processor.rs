//! Processing of the custom keys of the layout.
//!
//! Every action resolved from the keymap is offered to [`process_user_action`] first.
//! Custom keys are consumed here, everything else is handed back to the keyboard's default processing.

use core::future::Future;

use crate::action::{Action, UserKey};
use crate::event::KeyEvent;
use crate::keycode::KeyCode;
use crate::layout::Layer;

/// Whether the default processing of an action should continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// The action isn't handled, continue with the default processing
    Continue,
    /// The action is handled, stop processing
    Stop,
}

/// The operations that custom keys are allowed to perform.
///
/// Layer requests go to the layer engine, key registration goes to the HID report.
/// Each `register_code` or `unregister_code` sends exactly one keyboard report.
pub trait UserKeyHost {
    /// Activate given layer
    fn activate_layer(&mut self, layer_num: u8);

    /// Deactivate given layer
    fn deactivate_layer(&mut self, layer_num: u8);

    /// Invert given layer
    fn toggle_layer(&mut self, layer_num: u8);

    /// Activate `layer3` if both `layer1` and `layer2` are active, deactivate it otherwise
    fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8);

    /// The configured tri layer
    fn tri_layer(&self) -> Option<[u8; 3]>;

    /// Press a key and send the report
    fn register_code(&mut self, key: KeyCode) -> impl Future<Output = ()>;

    /// Release a key and send the report
    fn unregister_code(&mut self, key: KeyCode) -> impl Future<Output = ()>;
}

/// Process an action if it's a custom key of the layout.
///
/// Returns [`ProcessResult::Stop`] for custom keys and [`ProcessResult::Continue`] for all other actions,
/// other actions never touch the host.
pub async fn process_user_action<H: UserKeyHost>(action: Action, key_event: KeyEvent, host: &mut H) -> ProcessResult {
    let Action::User(key) = action else {
        return ProcessResult::Continue;
    };

    debug!("Processing user key: {:?}, event: {:?}", key, key_event);
    match key {
        UserKey::Move => process_tri_layer_key(Layer::Move.num(), key_event, host),
        UserKey::Symbol => process_tri_layer_key(Layer::Symbol.num(), key_event, host),
        UserKey::Function => {
            if key_event.pressed {
                host.activate_layer(Layer::Function.num());
            } else {
                host.deactivate_layer(Layer::Function.num());
            }
        }
        UserKey::Language => {
            // Single shot, the release of the key does nothing
            if key_event.pressed {
                switch_language(host).await;
            }
        }
    }

    ProcessResult::Stop
}

fn process_tri_layer_key<H: UserKeyHost>(layer_num: u8, key_event: KeyEvent, host: &mut H) {
    if key_event.pressed {
        host.activate_layer(layer_num);
    } else {
        host.deactivate_layer(layer_num);
    }

    if let Some([layer1, layer2, layer3]) = host.tri_layer() {
        host.update_tri_layer(layer1, layer2, layer3);
    }
}

/// Tap GUI + Space, which switches the input language on the host, then flip the Language layer
async fn switch_language<H: UserKeyHost>(host: &mut H) {
    host.register_code(KeyCode::LGui).await;
    host.register_code(KeyCode::Space).await;
    host.unregister_code(KeyCode::Space).await;
    host.unregister_code(KeyCode::LGui).await;
    host.toggle_layer(Layer::Language.num());
}
