//! Distance-driven post-process parameters.
//!
//! Fog density and bloom strength are pure functions of how far the eye is
//! from the look-at target. Nothing here holds state; the render loop asks
//! for fresh values every frame.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::options::EffectsOptions;

/// Clamp `x` into `[lo, hi]` as `max(min(x, hi), lo)`.
///
/// Unlike [`f32::clamp`] this never panics: inverted bounds (`lo > hi`)
/// always yield `lo`.
#[inline]
#[must_use]
pub fn clamp_ordered(x: f32, lo: f32, hi: f32) -> f32 {
    x.min(hi).max(lo)
}

/// Linear response `base + distance * slope`, clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct EffectCurve {
    /// Value at zero distance, before clamping.
    pub base: f32,
    /// Change per world unit of distance.
    pub slope: f32,
    /// Lower output bound.
    pub min: f32,
    /// Upper output bound.
    pub max: f32,
}

impl EffectCurve {
    /// Evaluate the curve at `distance`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, distance: f32) -> f32 {
        clamp_ordered(self.base + distance * self.slope, self.min, self.max)
    }
}

impl Default for EffectCurve {
    fn default() -> Self {
        Self {
            base: 0.0,
            slope: 0.0,
            min: 0.0,
            max: 1.0,
        }
    }
}

/// Per-frame post-process uniform values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParams {
    /// Exponential fog density.
    pub fog_density: f32,
    /// Bloom pass strength.
    pub bloom_strength: f32,
}

/// Maps camera distance onto [`EffectParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectMapper {
    fog: EffectCurve,
    bloom: EffectCurve,
}

impl EffectMapper {
    /// Build a mapper from explicit curves.
    #[must_use]
    pub fn new(fog: EffectCurve, bloom: EffectCurve) -> Self {
        Self { fog, bloom }
    }

    /// Build a mapper from the `[effects]` options section.
    #[must_use]
    pub fn from_options(options: &EffectsOptions) -> Self {
        Self::new(options.fog, options.bloom)
    }

    /// Effect values for a given eye-to-target distance.
    #[must_use]
    pub fn at_distance(&self, distance: f32) -> EffectParams {
        EffectParams {
            fog_density: self.fog.evaluate(distance),
            bloom_strength: self.bloom.evaluate(distance),
        }
    }

    /// Effect values for the camera's current distance to its target.
    #[must_use]
    pub fn map(&self, camera: &Camera) -> EffectParams {
        self.at_distance(camera.distance_to_target())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::CameraOptions;

    const FOG: EffectCurve = EffectCurve {
        base: -0.1,
        slope: 0.05,
        min: 0.0,
        max: 0.4,
    };
    const BLOOM: EffectCurve = EffectCurve {
        base: 0.2,
        slope: 0.1,
        min: 0.3,
        max: 1.0,
    };

    fn distances() -> impl Iterator<Item = f32> {
        (0..=400).map(|i| i as f32 * 0.1)
    }

    #[test]
    fn clamp_orders_min_then_max() {
        assert_eq!(clamp_ordered(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp_ordered(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp_ordered(0.5, 0.0, 1.0), 0.5);
        // Inverted bounds collapse onto the lower bound.
        assert_eq!(clamp_ordered(0.5, 2.0, 1.0), 2.0);
        assert_eq!(clamp_ordered(-9.0, 2.0, 1.0), 2.0);
    }

    #[test]
    fn outputs_are_non_decreasing_and_bounded() {
        let mapper = EffectMapper::new(FOG, BLOOM);
        let mut prev = mapper.at_distance(0.0);
        for d in distances() {
            let p = mapper.at_distance(d);
            assert!(p.fog_density >= prev.fog_density);
            assert!(p.bloom_strength >= prev.bloom_strength);
            assert!((FOG.min..=FOG.max).contains(&p.fog_density));
            assert!((BLOOM.min..=BLOOM.max).contains(&p.bloom_strength));
            prev = p;
        }
    }

    #[test]
    fn saturates_at_thresholds() {
        let mapper = EffectMapper::new(FOG, BLOOM);
        // fog: low threshold 2.0, high threshold 10.0
        assert_eq!(mapper.at_distance(1.0).fog_density, FOG.min);
        assert_eq!(mapper.at_distance(25.0).fog_density, FOG.max);
        // bloom: low threshold 1.0, high threshold 8.0
        assert_eq!(mapper.at_distance(0.5).bloom_strength, BLOOM.min);
        assert_eq!(mapper.at_distance(12.0).bloom_strength, BLOOM.max);
        assert!((mapper.at_distance(5.0).bloom_strength - 0.7).abs() < 1e-6);
    }

    #[test]
    fn negative_slope_stays_bounded() {
        let fog = EffectCurve {
            slope: -0.05,
            ..FOG
        };
        let mapper = EffectMapper::new(fog, BLOOM);
        for d in distances() {
            let v = mapper.at_distance(d).fog_density;
            assert!((fog.min..=fog.max).contains(&v), "{v} at {d}");
        }
    }

    #[test]
    fn inverted_bounds_give_single_value() {
        let bloom = EffectCurve {
            min: 0.9,
            max: 0.1,
            ..BLOOM
        };
        let mapper = EffectMapper::new(FOG, bloom);
        for d in distances() {
            assert_eq!(mapper.at_distance(d).bloom_strength, 0.9);
        }
    }

    #[test]
    fn maps_from_camera_distance() {
        let mapper = EffectMapper::new(FOG, BLOOM);
        let mut camera = Camera::from_options(&CameraOptions::default(), 1.0);
        camera.target = Vec3::new(1.0, 0.0, 0.0);
        camera.eye = Vec3::new(1.0, 0.0, 5.0);
        assert_eq!(mapper.map(&camera), mapper.at_distance(5.0));
    }

    #[test]
    fn default_options_match_scene_bloom_at_start() {
        let mapper = EffectMapper::from_options(&EffectsOptions::default());
        let camera = Camera::from_options(&CameraOptions::default(), 1.0);
        let params = mapper.map(&camera);
        // Start pose sits ~4.27 units out; bloom lands near the scene's 0.6.
        assert!((params.bloom_strength - 0.6).abs() < 0.01);
        assert!(params.fog_density > 0.0);
    }
}
