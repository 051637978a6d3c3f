//! Small, independent utilities for native audio parameter handling.
//!
//! Two unrelated pieces live here:
//!
//! - [`elementwise`]: structural clamp/min/max over arbitrarily nested
//!   parameter values (scalars, vectors, records), with single-element
//!   broadcast rules for vector bounds and absence (`None`) as the only
//!   failure signal.
//! - [`strings`]: tokenizer-based splitting for device/flag strings of the
//!   `device|(device, addr)|...` and `0{4,300,350}9` shapes.
//!
//! The pieces share no state and no control flow; each module is usable on
//! its own.

pub mod elementwise;
pub mod strings;

pub use elementwise::{Elementwise, elementwise_clamp, elementwise_max, elementwise_min};
pub use strings::{DeviceAddress, ParseVectorError, Tokenizer};
