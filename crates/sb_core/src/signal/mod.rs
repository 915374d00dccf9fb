//! Signal buffers - rolling windows of tracked landmark positions
//!
//! One fixed-capacity window per landmark (left hand, right hand, head) per
//! vision-controlled fighter. Missing observations are carried forward so a
//! window never shrinks and never goes empty after the first tick.

mod buffer;
mod landmarks;

pub use buffer::SignalBuffer;
pub use landmarks::{Landmark, LandmarkBuffers, PoseSample, HAND_WINDOW, HEAD_WINDOW};
