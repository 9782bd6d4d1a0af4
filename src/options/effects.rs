use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::effects::EffectCurve;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
/// Distance-driven fog/bloom curves and static post-process settings.
pub struct EffectsOptions {
    /// Fog density as a function of camera distance.
    pub fog: EffectCurve,
    /// Bloom strength as a function of camera distance.
    pub bloom: EffectCurve,
    /// Bloom blur radius.
    #[schemars(title = "Bloom Radius", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub bloom_radius: f32,
    /// Luminance threshold above which pixels bloom.
    #[schemars(title = "Bloom Threshold", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub bloom_threshold: f32,
    /// Linear RGB fog (and background) color.
    #[schemars(skip)]
    pub fog_color: [f32; 3],
}

impl Default for EffectsOptions {
    fn default() -> Self {
        Self {
            fog: EffectCurve {
                base: -0.02,
                slope: 0.01,
                min: 0.0,
                max: 0.1,
            },
            bloom: EffectCurve {
                base: 0.3,
                slope: 0.07,
                min: 0.3,
                max: 1.0,
            },
            bloom_radius: 0.4,
            bloom_threshold: 0.85,
            fog_color: [1.0, 1.0, 1.0],
        }
    }
}
