/// Options for configurable action behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    /// Tri layer `[layer1, layer2, layer3]`: `layer3` is activated when both `layer1` and `layer2` are active
    pub tri_layer: Option<[u8; 3]>,
}
