//! Mudra Session - The interaction layer above raw recognition
//!
//! This crate turns sensor-shaped input into controller input:
//! - Hand grip tracking from discrete hand events
//! - Primary body selection when several bodies are in view
//! - Pull-based display state with a hold window
//! - A session facade driving one controller update per frame

pub mod hands;
pub mod primary;
pub mod display;
pub mod session;

pub use hands::*;
pub use primary::*;
pub use display::*;
pub use session::*;
