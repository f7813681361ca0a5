//! Recall quality grade fed into the scheduler after each attempt.
use serde::{Deserialize, Serialize};

/// Recall quality on the SM-2 scale: 0 = blackout, 3 = correct with
/// difficulty, 5 = perfect. Values above 5 are clamped on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;
    /// Lowest grade that still counts as a correct answer.
    pub const PASSING: u8 = 3;

    pub const PERFECT: Quality = Quality(5);
    pub const INCORRECT: Quality = Quality(1);

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Binary grading used by the answer-checking screens: correct maps to 5,
    /// incorrect to 1.
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::PERFECT
        } else {
            Self::INCORRECT
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_correct(self) -> bool {
        self.0 >= Self::PASSING
    }
}

impl From<u8> for Quality {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}
