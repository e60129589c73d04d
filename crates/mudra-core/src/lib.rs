//! Mudra Core - Fundamental types for skeletal gesture recognition
//!
//! This crate defines the types shared across the mudra engine:
//! - Skeletal joints, tracking states, and 3D positions
//! - Frames (one sampled pose per body per tick)
//! - Hand grip state and grip events
//! - Gesture identities and segment results
//! - Error types

pub mod joint;
pub mod frame;
pub mod grip;
pub mod gesture;
pub mod error;

pub use joint::*;
pub use frame::*;
pub use grip::*;
pub use gesture::*;
pub use error::*;
