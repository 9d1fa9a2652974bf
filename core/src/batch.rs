//! Converts many amounts at once.
//!
//! Each conversion is independent, so inputs are fanned out over the rayon
//! thread pool. Results come back in input order.

use rayon::prelude::*;
use tracing::info;

use crate::humanizer::{Conversion, Humanizer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub valid: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn from_conversions(conversions: &[Conversion]) -> Self {
        let valid = conversions.iter().filter(|c| c.valid).count();
        Self {
            valid,
            rejected: conversions.len() - valid,
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.rejected
    }
}

pub fn humanize_all<S>(humanizer: &Humanizer, inputs: &[S]) -> Vec<Conversion>
where
    S: AsRef<str> + Sync,
{
    let conversions: Vec<Conversion> = inputs
        .par_iter()
        .map(|input| humanizer.convert(input.as_ref()))
        .collect();

    let summary = BatchSummary::from_conversions(&conversions);
    info!(
        "Converted {} of {} amounts ({} rejected)",
        summary.valid,
        summary.total(),
        summary.rejected
    );

    conversions
}
