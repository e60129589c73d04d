//! Mudra Test Harness - Scripted motion and recognition validation
//!
//! This crate provides:
//! - A pose builder for composing skeletal frames
//! - Choreographed motion scripts for every built-in gesture
//! - Seeded sensor-noise simulation
//! - End-to-end recognition scenarios

pub mod pose;
pub mod script;
pub mod jitter;
pub mod scenarios;

pub use pose::*;
pub use script::*;
pub use jitter::*;
pub use scenarios::*;

#[cfg(test)]
mod properties;
