//! Digit-tier converters.
//!
//! The call graph is fixed: [`group`] -> [`hundreds`] -> [`tens`] -> [`ones`].
//! Every converter is a pure function of its input and returns an empty
//! string for zero, leaving it to the caller to decide what "nothing" means.

pub mod group;
pub mod hundreds;
pub mod ones;
pub mod tens;
