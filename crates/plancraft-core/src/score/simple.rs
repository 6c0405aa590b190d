//! SimpleScore - Single-level score implementation

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::{ParseableScore, Score, ScoreParseError};
use super::ScoreLevel;

/// A simple score with a single integer value.
///
/// This is the simplest score type, useful when there's only one
/// type of constraint to optimize. It has no hard level, so every
/// fully initialized solution is feasible.
///
/// # Examples
///
/// ```
/// use plancraft_core::{SimpleScore, Score};
///
/// let score1 = SimpleScore::of(-5);
/// let score2 = SimpleScore::of(-3);
///
/// assert!(score2 > score1);  // -3 is better than -5
///
/// // An uninitialized score loses to any initialized one.
/// let uninit = SimpleScore::of_uninit(-1, 0);
/// assert!(score1 > uninit);
/// assert!(!uninit.is_feasible());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SimpleScore {
    init: i32,
    score: i64,
}

impl SimpleScore {
    /// The zero score.
    pub const ZERO: SimpleScore = SimpleScore { init: 0, score: 0 };

    /// A score of 1 (useful for incrementing).
    pub const ONE: SimpleScore = SimpleScore { init: 0, score: 1 };

    /// Creates a new initialized SimpleScore with the given value.
    #[inline]
    pub const fn of(score: i64) -> Self {
        SimpleScore { init: 0, score }
    }

    /// Creates a new SimpleScore with the given init score and value.
    #[inline]
    pub const fn of_uninit(init: i32, score: i64) -> Self {
        SimpleScore { init, score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn score(&self) -> i64 {
        self.score
    }
}

impl Score for SimpleScore {
    #[inline]
    fn init_score(&self) -> i32 {
        self.init
    }

    #[inline]
    fn with_init_score(&self, init_score: i32) -> Self {
        SimpleScore {
            init: init_score,
            score: self.score,
        }
    }

    #[inline]
    fn is_feasible(&self) -> bool {
        self.init >= 0
    }

    #[inline]
    fn zero() -> Self {
        SimpleScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        1
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        vec![self.score]
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(levels.len(), 1, "SimpleScore requires exactly 1 level");
        SimpleScore::of(levels[0])
    }

    fn multiply(&self, multiplicand: f64) -> Self {
        SimpleScore::of_uninit(
            (self.init as f64 * multiplicand).floor() as i32,
            (self.score as f64 * multiplicand).floor() as i64,
        )
    }

    fn divide(&self, divisor: f64) -> Self {
        SimpleScore::of_uninit(
            (self.init as f64 / divisor).floor() as i32,
            (self.score as f64 / divisor).floor() as i64,
        )
    }

    fn power(&self, exponent: f64) -> Self {
        SimpleScore::of_uninit(
            (self.init as f64).powf(exponent).floor() as i32,
            (self.score as f64).powf(exponent).floor() as i64,
        )
    }

    fn abs(&self) -> Self {
        SimpleScore::of_uninit(self.init.abs(), self.score.abs())
    }

    fn level_label(index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Soft,
            _ => panic!("SimpleScore has 1 level, got index {}", index),
        }
    }
}

impl Ord for SimpleScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.init.cmp(&other.init) {
            Ordering::Equal => self.score.cmp(&other.score),
            other => other,
        }
    }
}

impl PartialOrd for SimpleScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for SimpleScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        SimpleScore::of_uninit(self.init + other.init, self.score + other.score)
    }
}

impl Sub for SimpleScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        SimpleScore::of_uninit(self.init - other.init, self.score - other.score)
    }
}

impl Neg for SimpleScore {
    type Output = Self;

    fn neg(self) -> Self {
        SimpleScore::of_uninit(-self.init, -self.score)
    }
}

impl fmt::Debug for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init != 0 {
            write!(f, "SimpleScore({}init, {})", self.init, self.score)
        } else {
            write!(f, "SimpleScore({})", self.score)
        }
    }
}

impl fmt::Display for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init != 0 {
            write!(f, "{}init/", self.init)?;
        }
        write!(f, "{}", self.score)
    }
}

impl ParseableScore for SimpleScore {
    fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let (init, rest) = match s.split_once('/') {
            Some((head, tail)) => match head.trim().strip_suffix("init") {
                Some(num_str) => {
                    let init = num_str.parse::<i32>().map_err(|e| ScoreParseError {
                        message: format!("Invalid init score '{}': {}", num_str, e),
                    })?;
                    (init, tail)
                }
                None => (0, s),
            },
            None => (0, s),
        };

        let score = rest.trim().parse::<i64>().map_err(|e| ScoreParseError {
            message: format!("Invalid SimpleScore '{}': {}", rest, e),
        })?;
        Ok(SimpleScore::of_uninit(init, score))
    }

    fn to_string_repr(&self) -> String {
        format!("{}", self)
    }
}

impl From<i64> for SimpleScore {
    fn from(score: i64) -> Self {
        SimpleScore::of(score)
    }
}
