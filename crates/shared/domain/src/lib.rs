//! # Domain Models
//!
//! This crate contains the pure value types shared across the SDK: the typed forms of
//! values the random.org service sends over the wire, plus the SDK configuration models.
//! Keep it lean: no I/O, networking, or parsing, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod status;
pub mod time;

pub use crate::status::ApiKeyStatus;
pub use crate::time::{FractionPrecision, Timestamp};
