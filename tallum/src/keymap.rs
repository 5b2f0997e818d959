use heapless::Vec;

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// The layer table itself is read only. The only mutable state is which layers are active,
/// and it's changed through `activate_layer`, `deactivate_layer`, `toggle_layer` and `update_tri_layer`.
/// Hardware key strokes use tuple `(row, col, layer)` to retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
    /// Layer cache, records which layer a pressed key was resolved from
    layer_cache: [[u8; COL]; ROW],
    /// Options for configurable action behavior
    pub(crate) behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            behavior,
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Fetch the action at `(row, col)` of the given layer, without considering layer state
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Fetch the action in keymap, with layer cache
    pub(crate) fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        match self.resolve(row, col) {
            Some((layer_idx, action)) => {
                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx);
                action
            }
            None => KeyAction::No,
        }
    }

    /// Resolve the action at `(row, col)` against the current layer state, without touching the cache
    pub fn get_action(&self, row: usize, col: usize) -> KeyAction {
        self.resolve(row, col).map(|(_, action)| action).unwrap_or(KeyAction::No)
    }

    // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
    fn resolve(&self, row: usize, col: usize) -> Option<(u8, KeyAction)> {
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                // This layer is activated
                let action = layer[row][col];
                if action != KeyAction::Transparent {
                    return Some((layer_idx as u8, action));
                }
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        None
    }

    /// Get the highest active layer
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    /// Check whether the given layer is active
    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        self.layer_state
            .get(layer_num as usize)
            .copied()
            .unwrap_or(false)
    }

    /// All active layers, from low to high. The default layer isn't included unless it's activated explicitly.
    pub fn active_layers(&self) -> Vec<u8, NUM_LAYER> {
        self.layer_state
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Update Tri Layer state: `layer3` is active exactly when both `layer1` and `layer2` are active
    pub(crate) fn update_tri_layer(&mut self, layer1: u8, layer2: u8, layer3: u8) {
        if !(self.check_layer(layer1) && self.check_layer(layer2) && self.check_layer(layer3)) {
            return;
        }
        self.layer_state[layer3 as usize] = self.layer_state[layer1 as usize] && self.layer_state[layer2 as usize];
    }

    /// Activate given layer
    pub(crate) fn activate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = true;
        }
    }

    /// Deactivate given layer
    pub(crate) fn deactivate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = false;
        }
    }

    /// Toggle given layer
    pub(crate) fn toggle_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
        }
    }
}
