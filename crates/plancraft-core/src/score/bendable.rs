//! BendableScore - Score with a configurable number of hard and soft levels

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::{ParseableScore, Score, ScoreParseError};
use super::ScoreLevel;

/// A score with `H` hard levels and `S` soft levels, fixed at compile time.
///
/// All hard levels are compared before any soft level. A solution is feasible
/// only when every hard level is `>= 0`.
///
/// # Examples
///
/// ```
/// use plancraft_core::{BendableScore, Score};
///
/// let score1: BendableScore<2, 1> = BendableScore::of([-1, 0], [-50]);
/// let score2: BendableScore<2, 1> = BendableScore::of([0, -5], [-500]);
///
/// // The first hard level dominates everything below it
/// assert!(score2 > score1);
/// assert!(!score1.is_feasible());
/// assert_eq!(format!("{}", score2), "[0/-5]hard/[-500]soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BendableScore<const H: usize, const S: usize> {
    init: i32,
    hard: [i64; H],
    soft: [i64; S],
}

impl<const H: usize, const S: usize> BendableScore<H, S> {
    /// The zero score.
    pub const ZERO: BendableScore<H, S> = BendableScore {
        init: 0,
        hard: [0; H],
        soft: [0; S],
    };

    /// Creates a new initialized BendableScore.
    #[inline]
    pub const fn of(hard: [i64; H], soft: [i64; S]) -> Self {
        BendableScore {
            init: 0,
            hard,
            soft,
        }
    }

    /// Creates a new BendableScore with the given init score.
    #[inline]
    pub const fn of_uninit(init: i32, hard: [i64; H], soft: [i64; S]) -> Self {
        BendableScore { init, hard, soft }
    }

    /// Creates a score with a single non-zero hard level.
    ///
    /// # Panics
    /// Panics if `index >= H`.
    pub fn of_hard(index: usize, value: i64) -> Self {
        assert!(
            index < H,
            "BendableScore has {} hard levels, got index {}",
            H,
            index
        );
        let mut hard = [0; H];
        hard[index] = value;
        BendableScore {
            init: 0,
            hard,
            soft: [0; S],
        }
    }

    /// Creates a score with a single non-zero soft level.
    ///
    /// # Panics
    /// Panics if `index >= S`.
    pub fn of_soft(index: usize, value: i64) -> Self {
        assert!(
            index < S,
            "BendableScore has {} soft levels, got index {}",
            S,
            index
        );
        let mut soft = [0; S];
        soft[index] = value;
        BendableScore {
            init: 0,
            hard: [0; H],
            soft,
        }
    }

    /// Returns the hard levels, highest priority first.
    #[inline]
    pub const fn hard_levels(&self) -> &[i64; H] {
        &self.hard
    }

    /// Returns the soft levels, highest priority first.
    #[inline]
    pub const fn soft_levels(&self) -> &[i64; S] {
        &self.soft
    }

    /// Returns the hard level at the given index.
    #[inline]
    pub const fn hard_level(&self, index: usize) -> i64 {
        self.hard[index]
    }

    /// Returns the soft level at the given index.
    #[inline]
    pub const fn soft_level(&self, index: usize) -> i64 {
        self.soft[index]
    }
}

impl<const H: usize, const S: usize> Score for BendableScore<H, S> {
    #[inline]
    fn init_score(&self) -> i32 {
        self.init
    }

    #[inline]
    fn with_init_score(&self, init_score: i32) -> Self {
        BendableScore {
            init: init_score,
            hard: self.hard,
            soft: self.soft,
        }
    }

    fn is_feasible(&self) -> bool {
        self.init >= 0 && self.hard.iter().all(|&h| h >= 0)
    }

    #[inline]
    fn zero() -> Self {
        BendableScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        H + S
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        let mut levels = Vec::with_capacity(H + S);
        levels.extend_from_slice(&self.hard);
        levels.extend_from_slice(&self.soft);
        levels
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(
            levels.len(),
            H + S,
            "BendableScore<{}, {}> requires exactly {} levels",
            H,
            S,
            H + S
        );
        let mut hard = [0; H];
        hard.copy_from_slice(&levels[..H]);
        let mut soft = [0; S];
        soft.copy_from_slice(&levels[H..]);
        BendableScore::of(hard, soft)
    }

    fn multiply(&self, multiplicand: f64) -> Self {
        BendableScore {
            init: (self.init as f64 * multiplicand).floor() as i32,
            hard: self.hard.map(|h| (h as f64 * multiplicand).floor() as i64),
            soft: self.soft.map(|s| (s as f64 * multiplicand).floor() as i64),
        }
    }

    fn divide(&self, divisor: f64) -> Self {
        BendableScore {
            init: (self.init as f64 / divisor).floor() as i32,
            hard: self.hard.map(|h| (h as f64 / divisor).floor() as i64),
            soft: self.soft.map(|s| (s as f64 / divisor).floor() as i64),
        }
    }

    fn power(&self, exponent: f64) -> Self {
        BendableScore {
            init: (self.init as f64).powf(exponent).floor() as i32,
            hard: self.hard.map(|h| (h as f64).powf(exponent).floor() as i64),
            soft: self.soft.map(|s| (s as f64).powf(exponent).floor() as i64),
        }
    }

    fn abs(&self) -> Self {
        BendableScore {
            init: self.init.abs(),
            hard: self.hard.map(i64::abs),
            soft: self.soft.map(i64::abs),
        }
    }

    fn level_label(index: usize) -> ScoreLevel {
        if index < H {
            ScoreLevel::Hard
        } else if index < H + S {
            ScoreLevel::Soft
        } else {
            panic!(
                "BendableScore<{}, {}> has {} levels, got index {}",
                H,
                S,
                H + S,
                index
            )
        }
    }
}

impl<const H: usize, const S: usize> Default for BendableScore<H, S> {
    fn default() -> Self {
        BendableScore::ZERO
    }
}

impl<const H: usize, const S: usize> Ord for BendableScore<H, S> {
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

impl<const H: usize, const S: usize> PartialOrd for BendableScore<H, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const H: usize, const S: usize> Add for BendableScore<H, S> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut hard = self.hard;
        for (h, o) in hard.iter_mut().zip(other.hard.iter()) {
            *h += o;
        }
        let mut soft = self.soft;
        for (s, o) in soft.iter_mut().zip(other.soft.iter()) {
            *s += o;
        }
        BendableScore {
            init: self.init + other.init,
            hard,
            soft,
        }
    }
}

impl<const H: usize, const S: usize> Sub for BendableScore<H, S> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut hard = self.hard;
        for (h, o) in hard.iter_mut().zip(other.hard.iter()) {
            *h -= o;
        }
        let mut soft = self.soft;
        for (s, o) in soft.iter_mut().zip(other.soft.iter()) {
            *s -= o;
        }
        BendableScore {
            init: self.init - other.init,
            hard,
            soft,
        }
    }
}

impl<const H: usize, const S: usize> Neg for BendableScore<H, S> {
    type Output = Self;

    fn neg(self) -> Self {
        BendableScore {
            init: -self.init,
            hard: self.hard.map(|h| -h),
            soft: self.soft.map(|s| -s),
        }
    }
}

fn write_levels(f: &mut fmt::Formatter<'_>, levels: &[i64]) -> fmt::Result {
    write!(f, "[")?;
    for (i, level) in levels.iter().enumerate() {
        if i > 0 {
            write!(f, "/")?;
        }
        write!(f, "{}", level)?;
    }
    write!(f, "]")
}

impl<const H: usize, const S: usize> fmt::Debug for BendableScore<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BendableScore(")?;
        if self.init != 0 {
            write!(f, "{}init, ", self.init)?;
        }
        write!(f, "{:?}, {:?})", self.hard, self.soft)
    }
}

impl<const H: usize, const S: usize> fmt::Display for BendableScore<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init != 0 {
            write!(f, "{}init/", self.init)?;
        }
        write_levels(f, &self.hard)?;
        write!(f, "hard/")?;
        write_levels(f, &self.soft)?;
        write!(f, "soft")
    }
}

fn parse_levels<const N: usize>(s: &str, what: &str) -> Result<[i64; N], ScoreParseError> {
    let parts: Vec<&str> = if s.trim().is_empty() {
        Vec::new()
    } else {
        s.split('/').collect()
    };
    if parts.len() != N {
        return Err(ScoreParseError {
            message: format!("Expected {} {} levels in '{}'", N, what, s),
        });
    }
    let mut levels = [0; N];
    for (i, part) in parts.iter().enumerate() {
        levels[i] = part.trim().parse::<i64>().map_err(|e| ScoreParseError {
            message: format!("Invalid {} level '{}': {}", what, part, e),
        })?;
    }
    Ok(levels)
}

impl<const H: usize, const S: usize> ParseableScore for BendableScore<H, S> {
    fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let s = s.trim();
        let (init, rest) = match s.find("init/") {
            Some(pos) => {
                let init = s[..pos].trim().parse::<i32>().map_err(|e| ScoreParseError {
                    message: format!("Invalid init score '{}': {}", &s[..pos], e),
                })?;
                (init, &s[pos + 5..])
            }
            None => (0, s),
        };

        let invalid = || ScoreParseError {
            message: format!(
                "Invalid BendableScore format '{}': expected '[..]hard/[..]soft'",
                s
            ),
        };
        let hard_part = rest.trim().strip_prefix('[').ok_or_else(invalid)?;
        let (hard_str, tail) = hard_part.split_once("]hard/").ok_or_else(invalid)?;
        let soft_str = tail
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix("]soft"))
            .ok_or_else(invalid)?;

        let hard = parse_levels::<H>(hard_str, "hard")?;
        let soft = parse_levels::<S>(soft_str, "soft")?;
        Ok(BendableScore::of_uninit(init, hard, soft))
    }

    fn to_string_repr(&self) -> String {
        format!("{}", self)
    }
}
