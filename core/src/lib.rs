//! # Checkwords Core
//!
//! Turns validated dollar amounts into the words written on a cheque.
//!
//! * **[`converter`]**: one pure function per digit tier (ones, tens, hundreds)
//!   plus the group converter that stitches three-digit groups together with
//!   scale words.
//! * **[`humanizer`]**: the public entry point. Validates the amount and
//!   assembles the final sentence.
//! * **[`batch`]**: converts many amounts at once on the rayon thread pool.

pub mod batch;
pub mod converter;
pub mod humanizer;

pub use humanizer::{Conversion, Humanizer};
