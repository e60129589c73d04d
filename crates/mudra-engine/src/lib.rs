//! Mudra Engine - Frame-driven gesture recognition
//!
//! This crate implements the recognition core:
//! - The segment capability (one geometric predicate stage)
//! - The built-in segment library
//! - Per-gesture state machines with pause/fail/succeed semantics
//! - The controller fanning frames out to every registered machine
//! - The compiled-in catalog of built-in gesture definitions

pub mod segment;
pub mod segments;
pub mod machine;
pub mod controller;
pub mod catalog;

pub use segment::*;
pub use segments::*;
pub use machine::*;
pub use controller::*;
pub use catalog::*;
