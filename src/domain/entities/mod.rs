//! Core domain entities.
//!
//! - [`Link`] - A short code and its target with usage counters
//! - [`NewLink`] - Input for creating a link
//! - [`ClickCounters`] - Counter state after a click increment

pub mod link;

pub use link::{ClickCounters, Link, NewLink};
