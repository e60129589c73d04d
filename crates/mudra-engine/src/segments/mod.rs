//! Built-in segment library
//!
//! Every predicate follows the same shape: posture gates that return
//! `Fail` when violated, then the stage's own condition deciding between
//! `Succeed` and `Pausing`. Thresholds are offsets between named joints;
//! the few fixed distances are constants beside the segments that use them.

mod grip_swipe;
mod grip_zoom;
mod joined_hands;
mod menu;
mod swipe;
mod wave;
mod zoom;

pub use grip_swipe::*;
pub use grip_zoom::*;
pub use joined_hands::*;
pub use menu::*;
pub use swipe::*;
pub use wave::*;
pub use zoom::*;
