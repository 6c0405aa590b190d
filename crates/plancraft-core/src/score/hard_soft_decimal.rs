//! HardSoftDecimalScore - Two-level score with i64 precision and ×100000 scaling
//!
//! This score type represents a decimal score without heap allocation.
//! Internal values are scaled by 100000 to provide 5 decimal places of
//! precision. Because values are stored as scaled integers, equality is
//! scale-independent: -1.5 and -1.50 are the same score.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::{ParseableScore, Score, ScoreParseError};
use super::ScoreLevel;

/// Scale factor for 5 decimal places of precision.
const SCALE: i64 = 100_000;

/// A score with separate hard and soft constraint levels, using i64 with ×100000 scaling.
///
/// This provides 5 decimal places of precision while maintaining zero heap
/// allocation and full type safety.
///
/// Internal values are stored pre-scaled. Use [`of`](Self::of) for unscaled input
/// or [`of_scaled`](Self::of_scaled) for pre-scaled values.
///
/// # Examples
///
/// ```
/// use plancraft_core::{HardSoftDecimalScore, Score};
///
/// // Create from unscaled values (automatically multiplied by 100000)
/// let score1 = HardSoftDecimalScore::of(-1, -100);
/// assert_eq!(score1.hard_scaled(), -100000);
/// assert_eq!(score1.soft_scaled(), -10000000);
///
/// // Create from pre-scaled values (for minute-based penalties)
/// let score2 = HardSoftDecimalScore::of_scaled(-3050000, 0);  // -30.5 hard
/// assert!(!score2.is_feasible());
///
/// // Display shows values (trailing zeros stripped)
/// let score3 = HardSoftDecimalScore::of_scaled(-150000, -250000);
/// assert_eq!(format!("{}", score3), "-1.5hard/-2.5soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftDecimalScore {
    init: i32,
    hard: i64,
    soft: i64,
}

impl HardSoftDecimalScore {
    /// The zero score.
    pub const ZERO: HardSoftDecimalScore = HardSoftDecimalScore {
        init: 0,
        hard: 0,
        soft: 0,
    };

    /// One hard constraint penalty (scaled).
    pub const ONE_HARD: HardSoftDecimalScore = HardSoftDecimalScore {
        init: 0,
        hard: SCALE,
        soft: 0,
    };

    /// One soft constraint penalty (scaled).
    pub const ONE_SOFT: HardSoftDecimalScore = HardSoftDecimalScore {
        init: 0,
        hard: 0,
        soft: SCALE,
    };

    /// Creates a new score from unscaled values.
    ///
    /// The values are automatically multiplied by 100000.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftDecimalScore {
            init: 0,
            hard: hard * SCALE,
            soft: soft * SCALE,
        }
    }

    /// Creates a new score from pre-scaled values.
    ///
    /// Use this for fractional penalties where precision matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use plancraft_core::HardSoftDecimalScore;
    ///
    /// // -30.5 hard constraint (overlap of 30.5 minutes)
    /// let score = HardSoftDecimalScore::of_scaled(-3050000, 0);
    /// assert_eq!(score.hard_scaled(), -3050000);
    /// ```
    #[inline]
    pub const fn of_scaled(hard: i64, soft: i64) -> Self {
        HardSoftDecimalScore {
            init: 0,
            hard,
            soft,
        }
    }

    /// Creates a new pre-scaled score with the given init score.
    #[inline]
    pub const fn of_uninit_scaled(init: i32, hard: i64, soft: i64) -> Self {
        HardSoftDecimalScore { init, hard, soft }
    }

    /// Creates a score with only a hard component (unscaled input).
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftDecimalScore {
            init: 0,
            hard: hard * SCALE,
            soft: 0,
        }
    }

    /// Creates a score with only a soft component (unscaled input).
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftDecimalScore {
            init: 0,
            hard: 0,
            soft: soft * SCALE,
        }
    }

    /// Creates a score with only a hard component (pre-scaled input).
    #[inline]
    pub const fn of_hard_scaled(hard: i64) -> Self {
        HardSoftDecimalScore {
            init: 0,
            hard,
            soft: 0,
        }
    }

    /// Creates a score with only a soft component (pre-scaled input).
    #[inline]
    pub const fn of_soft_scaled(soft: i64) -> Self {
        HardSoftDecimalScore {
            init: 0,
            hard: 0,
            soft,
        }
    }

    /// Returns the scaled hard score component.
    #[inline]
    pub const fn hard_scaled(&self) -> i64 {
        self.hard
    }

    /// Returns the scaled soft score component.
    #[inline]
    pub const fn soft_scaled(&self) -> i64 {
        self.soft
    }

    /// Returns the hard score as a new HardSoftDecimalScore.
    pub const fn hard_score(&self) -> HardSoftDecimalScore {
        HardSoftDecimalScore::of_scaled(self.hard, 0)
    }

    /// Returns the soft score as a new HardSoftDecimalScore.
    pub const fn soft_score(&self) -> HardSoftDecimalScore {
        HardSoftDecimalScore::of_scaled(0, self.soft)
    }

    /// Returns true if this score has a non-zero hard component.
    #[inline]
    pub const fn has_hard_component(&self) -> bool {
        self.hard != 0
    }

    /// Creates a score from `rust_decimal` values, truncating beyond 5 decimal
    /// places and saturating values outside the representable range.
    #[cfg(feature = "decimal")]
    pub fn from_decimals(hard: rust_decimal::Decimal, soft: rust_decimal::Decimal) -> Self {
        use rust_decimal::prelude::ToPrimitive;

        fn scaled(value: rust_decimal::Decimal) -> i64 {
            let scale = rust_decimal::Decimal::from(SCALE);
            (value * scale).trunc().to_i64().unwrap_or_else(|| {
                if value.is_sign_negative() {
                    i64::MIN
                } else {
                    i64::MAX
                }
            })
        }
        HardSoftDecimalScore::of_scaled(scaled(hard), scaled(soft))
    }

    /// Returns the hard and soft components as `rust_decimal` values.
    #[cfg(feature = "decimal")]
    pub fn to_decimals(&self) -> (rust_decimal::Decimal, rust_decimal::Decimal) {
        let scale = rust_decimal::Decimal::from(SCALE);
        (
            rust_decimal::Decimal::from(self.hard) / scale,
            rust_decimal::Decimal::from(self.soft) / scale,
        )
    }
}

impl Score for HardSoftDecimalScore {
    #[inline]
    fn init_score(&self) -> i32 {
        self.init
    }

    #[inline]
    fn with_init_score(&self, init_score: i32) -> Self {
        HardSoftDecimalScore {
            init: init_score,
            hard: self.hard,
            soft: self.soft,
        }
    }

    #[inline]
    fn is_feasible(&self) -> bool {
        self.init >= 0 && self.hard >= 0
    }

    #[inline]
    fn zero() -> Self {
        HardSoftDecimalScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        2
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        vec![self.hard, self.soft]
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(
            levels.len(),
            2,
            "HardSoftDecimalScore requires exactly 2 levels"
        );
        HardSoftDecimalScore::of_scaled(levels[0], levels[1])
    }

    fn multiply(&self, multiplicand: f64) -> Self {
        // Levels are decimal, so round at the scaled precision instead of flooring
        HardSoftDecimalScore::of_uninit_scaled(
            (self.init as f64 * multiplicand).floor() as i32,
            (self.hard as f64 * multiplicand).round() as i64,
            (self.soft as f64 * multiplicand).round() as i64,
        )
    }

    fn divide(&self, divisor: f64) -> Self {
        HardSoftDecimalScore::of_uninit_scaled(
            (self.init as f64 / divisor).floor() as i32,
            (self.hard as f64 / divisor).round() as i64,
            (self.soft as f64 / divisor).round() as i64,
        )
    }

    fn power(&self, exponent: f64) -> Self {
        // Exponentiation applies to the unscaled value, then rescales
        let unscale = |scaled: i64| scaled as f64 / SCALE as f64;
        HardSoftDecimalScore::of_uninit_scaled(
            (self.init as f64).powf(exponent).floor() as i32,
            (unscale(self.hard).powf(exponent) * SCALE as f64).round() as i64,
            (unscale(self.soft).powf(exponent) * SCALE as f64).round() as i64,
        )
    }

    fn abs(&self) -> Self {
        HardSoftDecimalScore::of_uninit_scaled(self.init.abs(), self.hard.abs(), self.soft.abs())
    }

    fn level_label(index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Soft,
            _ => panic!("HardSoftDecimalScore has 2 levels, got index {}", index),
        }
    }
}

impl Ord for HardSoftDecimalScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.init.cmp(&other.init) {
            Ordering::Equal => match self.hard.cmp(&other.hard) {
                Ordering::Equal => self.soft.cmp(&other.soft),
                other => other,
            },
            other => other,
        }
    }
}

impl PartialOrd for HardSoftDecimalScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftDecimalScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        HardSoftDecimalScore::of_uninit_scaled(
            self.init + other.init,
            self.hard + other.hard,
            self.soft + other.soft,
        )
    }
}

impl Sub for HardSoftDecimalScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        HardSoftDecimalScore::of_uninit_scaled(
            self.init - other.init,
            self.hard - other.hard,
            self.soft - other.soft,
        )
    }
}

impl Neg for HardSoftDecimalScore {
    type Output = Self;

    fn neg(self) -> Self {
        HardSoftDecimalScore::of_uninit_scaled(-self.init, -self.hard, -self.soft)
    }
}

impl fmt::Debug for HardSoftDecimalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardSoftDecimalScore({:.3}, {:.3})",
            self.hard as f64 / SCALE as f64,
            self.soft as f64 / SCALE as f64
        )
    }
}

impl fmt::Display for HardSoftDecimalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn format_score_part(scaled: i64) -> String {
            if scaled % SCALE == 0 {
                // Integer value, no decimals needed
                (scaled / SCALE).to_string()
            } else {
                // Has decimal part - format with precision and strip trailing zeros
                let value = scaled as f64 / SCALE as f64;
                let formatted = format!("{:.6}", value);
                formatted
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            }
        }
        if self.init != 0 {
            write!(f, "{}init/", self.init)?;
        }
        write!(
            f,
            "{}hard/{}soft",
            format_score_part(self.hard),
            format_score_part(self.soft)
        )
    }
}

impl ParseableScore for HardSoftDecimalScore {
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

        // Format: "0.000hard/-100.500soft" or "-1hard/0soft"
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 2 {
            return Err(ScoreParseError {
                message: format!(
                    "Invalid HardSoftDecimalScore format '{}': expected 'Xhard/Ysoft'",
                    s
                ),
            });
        }

        let hard_str = parts[0]
            .trim()
            .strip_suffix("hard")
            .ok_or_else(|| ScoreParseError {
                message: format!("Hard score part '{}' must end with 'hard'", parts[0]),
            })?;

        let soft_str = parts[1]
            .trim()
            .strip_suffix("soft")
            .ok_or_else(|| ScoreParseError {
                message: format!("Soft score part '{}' must end with 'soft'", parts[1]),
            })?;

        let hard_float = hard_str.parse::<f64>().map_err(|e| ScoreParseError {
            message: format!("Invalid hard score '{}': {}", hard_str, e),
        })?;

        let soft_float = soft_str.parse::<f64>().map_err(|e| ScoreParseError {
            message: format!("Invalid soft score '{}': {}", soft_str, e),
        })?;

        // Convert to scaled integers
        let hard = (hard_float * SCALE as f64).round() as i64;
        let soft = (soft_float * SCALE as f64).round() as i64;

        Ok(HardSoftDecimalScore::of_uninit_scaled(init, hard, soft))
    }

    fn to_string_repr(&self) -> String {
        format!("{}", self)
    }
}
