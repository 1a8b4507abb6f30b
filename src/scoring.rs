//! Truthfulness scoring.
//!
//! Each rating label maps to a fixed value:
//!
//! | Label            | Value |
//! |------------------|-------|
//! | `True`           |  1.0  |
//! | `Mostly True`    |  0.8  |
//! | `Half True`      |  0.5  |
//! | `Mostly False`   |  0.2  |
//! | `False`          |  0.0  |
//! | `Pants on Fire!` | -1.0  |
//!
//! Anything else counts as 0. A speaker's score is the plain mean over all of
//! their records.

use crate::models::FactCheckRecord;

/// The rating labels the archive uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    True,
    MostlyTrue,
    HalfTrue,
    MostlyFalse,
    False,
    PantsOnFire,
}

impl Rating {
    /// Match a label exactly (case and punctuation included).
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "True" => Some(Rating::True),
            "Mostly True" => Some(Rating::MostlyTrue),
            "Half True" => Some(Rating::HalfTrue),
            "Mostly False" => Some(Rating::MostlyFalse),
            "False" => Some(Rating::False),
            "Pants on Fire!" => Some(Rating::PantsOnFire),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Rating::True => 1.0,
            Rating::MostlyTrue => 0.8,
            Rating::HalfTrue => 0.5,
            Rating::MostlyFalse => 0.2,
            Rating::False => 0.0,
            Rating::PantsOnFire => -1.0,
        }
    }
}

/// Numeric value of a rating label; unknown labels are 0.
pub fn rating_value(label: &str) -> f64 {
    Rating::from_label(label).map_or(0.0, Rating::value)
}

/// Mean rating value over `records`, or 0 when there are none.
pub fn average_score(records: &[FactCheckRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| rating_value(&r.rating)).sum();
    total / records.len() as f64
}
