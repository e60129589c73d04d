//! Sensor-noise simulation
//!
//! Skeletal tracking never reports a joint in exactly the same place two
//! frames running. The jitterer perturbs every joint position by a
//! seeded uniform offset so scripted motions exercise the same wobble,
//! reproducibly.

use mudra_core::{Joint, Position3, SkeletalFrame};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Noise configuration
#[derive(Clone, Debug)]
pub struct JitterConfig {
    /// Maximum per-axis offset (meters)
    pub amplitude: f32,
    /// RNG seed; equal seeds replay equal noise
    pub seed: u64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        JitterConfig {
            amplitude: 0.01,
            seed: 42,
        }
    }
}

impl JitterConfig {
    /// Barely perceptible wobble
    pub fn steady() -> Self {
        JitterConfig {
            amplitude: 0.004,
            seed: 42,
        }
    }

    /// Wobble strong enough to defeat tight margins
    pub fn shaky() -> Self {
        JitterConfig {
            amplitude: 0.03,
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Streaming frame perturbation
pub struct Jitterer {
    offsets: Uniform<f32>,
    rng: StdRng,
}

impl Jitterer {
    pub fn new(config: &JitterConfig) -> Self {
        Jitterer {
            offsets: Uniform::new_inclusive(-config.amplitude, config.amplitude),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Copy of `frame` with every joint position nudged
    ///
    /// Tracking states, the body id, and the timestamp pass through
    /// untouched.
    pub fn perturb(&mut self, frame: &SkeletalFrame) -> SkeletalFrame {
        let mut noisy = frame.clone();
        for &joint in Joint::all() {
            let p = frame.position(joint);
            noisy.set_position(
                joint,
                Position3::new(
                    p.x + self.offsets.sample(&mut self.rng),
                    p.y + self.offsets.sample(&mut self.rng),
                    p.z + self.offsets.sample(&mut self.rng),
                ),
            );
        }
        noisy
    }
}
