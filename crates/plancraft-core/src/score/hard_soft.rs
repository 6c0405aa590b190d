//! HardSoftScore - Two-level score with hard and soft constraints

use std::cmp::Ordering;
use std::fmt;

use super::traits::Score;
use super::ScoreLevel;

/// A score with separate hard and soft constraint levels.
///
/// Hard constraints must be satisfied for a solution to be feasible.
/// Soft constraints are optimization objectives.
///
/// When comparing scores:
/// 1. Init scores are compared first
/// 2. Hard scores are compared next
/// 3. Soft scores are only compared when both are equal
///
/// # Examples
///
/// ```
/// use plancraft_core::HardSoftScore;
///
/// let score1 = HardSoftScore::of(-1, -100);  // 1 hard constraint broken
/// let score2 = HardSoftScore::of(0, -200);   // Feasible but poor soft score
///
/// // Feasible solutions are always better than infeasible ones
/// assert!(score2 > score1);
///
/// let score3 = HardSoftScore::of(0, -50);    // Better soft score
/// assert!(score3 > score2);
///
/// // Uninitialized solutions lose to initialized ones
/// let score4 = HardSoftScore::of_uninit(-7, 0, -3);
/// assert!(score1 > score4);
/// assert_eq!(format!("{}", score4), "-7init/0hard/-3soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    init: i32,
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore {
        init: 0,
        hard: 0,
        soft: 0,
    };

    /// One hard constraint penalty.
    pub const ONE_HARD: HardSoftScore = HardSoftScore {
        init: 0,
        hard: 1,
        soft: 0,
    };

    /// One soft constraint penalty.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore {
        init: 0,
        hard: 0,
        soft: 1,
    };

    /// Creates a new initialized HardSoftScore.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore {
            init: 0,
            hard,
            soft,
        }
    }

    /// Creates a new HardSoftScore with the given init score.
    #[inline]
    pub const fn of_uninit(init: i32, hard: i64, soft: i64) -> Self {
        HardSoftScore { init, hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore {
            init: 0,
            hard,
            soft: 0,
        }
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore {
            init: 0,
            hard: 0,
            soft,
        }
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns the hard score as a new HardSoftScore.
    pub const fn hard_score(&self) -> HardSoftScore {
        HardSoftScore::of_hard(self.hard)
    }

    /// Returns the soft score as a new HardSoftScore.
    pub const fn soft_score(&self) -> HardSoftScore {
        HardSoftScore::of_soft(self.soft)
    }
}

impl Score for HardSoftScore {
    #[inline]
    fn init_score(&self) -> i32 {
        self.init
    }

    #[inline]
    fn with_init_score(&self, init_score: i32) -> Self {
        HardSoftScore {
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
        HardSoftScore::ZERO
    }

    #[inline]
    fn levels_count() -> usize {
        2
    }

    fn to_level_numbers(&self) -> Vec<i64> {
        vec![self.hard, self.soft]
    }

    fn from_level_numbers(levels: &[i64]) -> Self {
        assert_eq!(levels.len(), 2, "HardSoftScore requires exactly 2 levels");
        HardSoftScore::of(levels[0], levels[1])
    }

    impl_score_scale!(HardSoftScore { hard, soft } => of_uninit);

    fn level_label(index: usize) -> ScoreLevel {
        match index {
            0 => ScoreLevel::Hard,
            1 => ScoreLevel::Soft,
            _ => panic!("HardSoftScore has 2 levels, got index {}", index),
        }
    }
}

impl Ord for HardSoftScore {
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

impl_score_ops!(HardSoftScore { hard, soft } => of_uninit);

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init != 0 {
            write!(
                f,
                "HardSoftScore({}init, {}, {})",
                self.init, self.hard, self.soft
            )
        } else {
            write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
        }
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init != 0 {
            write!(f, "{}init/", self.init)?;
        }
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

impl_score_parse!(HardSoftScore { hard => "hard", soft => "soft" } => of_uninit);
