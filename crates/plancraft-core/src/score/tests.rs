//! Tests for score types.

use super::*;
use std::cmp::Ordering;

// ============================================================================
// SimpleScore Tests
// ============================================================================

mod simple_score {
    use super::*;

    #[test]
    fn test_creation() {
        let score = SimpleScore::of(-5);
        assert_eq!(score.score(), -5);
        assert_eq!(score.init_score(), 0);
    }

    #[test]
    fn test_feasibility() {
        assert!(SimpleScore::of(0).is_feasible());
        assert!(SimpleScore::of(-1).is_feasible());
        assert!(!SimpleScore::of_uninit(-1, 0).is_feasible());
    }

    #[test]
    fn test_comparison() {
        let s1 = SimpleScore::of(-10);
        let s2 = SimpleScore::of(-5);
        let s3 = SimpleScore::of(0);

        assert!(s3 > s2);
        assert!(s2 > s1);
        assert!(s1 < s2);
    }

    #[test]
    fn test_init_compared_first() {
        let uninit = SimpleScore::of_uninit(-1, 1000);
        let init = SimpleScore::of(-1000);
        assert!(init > uninit);

        let less_uninit = SimpleScore::of_uninit(-1, 0);
        let more_uninit = SimpleScore::of_uninit(-2, 1000);
        assert!(less_uninit > more_uninit);
    }

    #[test]
    fn test_arithmetic() {
        let s1 = SimpleScore::of(10);
        let s2 = SimpleScore::of(3);

        assert_eq!(s1 + s2, SimpleScore::of(13));
        assert_eq!(s1 - s2, SimpleScore::of(7));
        assert_eq!(-s1, SimpleScore::of(-10));
    }

    #[test]
    fn test_arithmetic_threads_init() {
        let s1 = SimpleScore::of_uninit(-2, 10);
        let s2 = SimpleScore::of_uninit(-1, 3);

        assert_eq!(s1 + s2, SimpleScore::of_uninit(-3, 13));
        assert_eq!(s1 - s2, SimpleScore::of_uninit(-1, 7));
        assert_eq!(-s1, SimpleScore::of_uninit(2, -10));
    }

    #[test]
    fn test_multiply_divide_floor() {
        assert_eq!(SimpleScore::of(10).multiply(2.0), SimpleScore::of(20));
        assert_eq!(SimpleScore::of(5).multiply(1.2), SimpleScore::of(6));
        assert_eq!(SimpleScore::of(-7).multiply(0.5), SimpleScore::of(-4));
        assert_eq!(SimpleScore::of(10).divide(2.0), SimpleScore::of(5));
        assert_eq!(SimpleScore::of(-5).divide(2.0), SimpleScore::of(-3));
    }

    #[test]
    fn test_power() {
        assert_eq!(SimpleScore::of(5).power(2.0), SimpleScore::of(25));
        assert_eq!(SimpleScore::of(25).power(0.5), SimpleScore::of(5));
    }

    #[test]
    fn test_with_init_score() {
        let score = SimpleScore::of(-5).with_init_score(-3);
        assert_eq!(score, SimpleScore::of_uninit(-3, -5));
        assert!(!score.is_solution_initialized());
        assert!(score.with_init_score(0).is_solution_initialized());
    }

    #[test]
    fn test_parse() {
        assert_eq!(SimpleScore::parse("42").unwrap(), SimpleScore::of(42));
        assert_eq!(SimpleScore::parse("-10").unwrap(), SimpleScore::of(-10));
        assert_eq!(
            SimpleScore::parse("-7init/42").unwrap(),
            SimpleScore::of_uninit(-7, 42)
        );
        assert!(SimpleScore::parse("forty-two").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SimpleScore::of(-3)), "-3");
        assert_eq!(format!("{}", SimpleScore::of_uninit(-7, 42)), "-7init/42");
    }

    #[test]
    fn test_level_numbers() {
        let score = SimpleScore::of(-5);
        assert_eq!(score.to_level_numbers(), vec![-5]);
        assert_eq!(SimpleScore::from_level_numbers(&[-5]), score);
    }
}

// ============================================================================
// HardSoftScore Tests
// ============================================================================

mod hard_soft_score {
    use super::*;

    #[test]
    fn test_creation() {
        let score = HardSoftScore::of(-2, -100);
        assert_eq!(score.hard(), -2);
        assert_eq!(score.soft(), -100);
        assert_eq!(score.init_score(), 0);
    }

    #[test]
    fn test_feasibility() {
        assert!(HardSoftScore::of(0, -1000).is_feasible());
        assert!(HardSoftScore::of(10, -50).is_feasible());
        assert!(!HardSoftScore::of(-1, 0).is_feasible());
        assert!(!HardSoftScore::of_uninit(-1, 0, 0).is_feasible());
    }

    #[test]
    fn test_comparison() {
        // Infeasible vs feasible
        let infeasible = HardSoftScore::of(-1, 0);
        let feasible = HardSoftScore::of(0, -1000);
        assert!(feasible > infeasible);

        // Same hard, different soft
        let s1 = HardSoftScore::of(0, -100);
        let s2 = HardSoftScore::of(0, -50);
        assert!(s2 > s1);

        // Different hard
        let s3 = HardSoftScore::of(-2, 0);
        let s4 = HardSoftScore::of(-1, -1000);
        assert!(s4 > s3);
    }

    #[test]
    fn test_init_compared_first() {
        let uninit = HardSoftScore::of_uninit(-1, 100, 100);
        let init = HardSoftScore::of(-100, -100);
        assert!(init > uninit);
    }

    #[test]
    fn test_arithmetic() {
        let s1 = HardSoftScore::of(-1, -100);
        let s2 = HardSoftScore::of(-1, -50);

        assert_eq!(s1 + s2, HardSoftScore::of(-2, -150));
        assert_eq!(s1 - s2, HardSoftScore::of(0, -50));
        assert_eq!(-s1, HardSoftScore::of(1, 100));
    }

    #[test]
    fn test_arithmetic_threads_init() {
        let s1 = HardSoftScore::of_uninit(-3, -1, -100);
        let s2 = HardSoftScore::of_uninit(-1, -1, -50);

        assert_eq!(s1 + s2, HardSoftScore::of_uninit(-4, -2, -150));
        assert_eq!(s1 - s2, HardSoftScore::of_uninit(-2, 0, -50));
    }

    #[test]
    fn test_multiply_divide_floor() {
        let score = HardSoftScore::of(-5, 7);
        assert_eq!(score.multiply(0.5), HardSoftScore::of(-3, 3));
        assert_eq!(score.divide(2.0), HardSoftScore::of(-3, 3));
        assert_eq!(HardSoftScore::of(4, 10).multiply(2.0), HardSoftScore::of(8, 20));
    }

    #[test]
    fn test_power() {
        assert_eq!(HardSoftScore::of(3, 4).power(2.0), HardSoftScore::of(9, 16));
    }

    #[test]
    fn test_abs() {
        assert_eq!(
            HardSoftScore::of_uninit(-2, -3, 4).abs(),
            HardSoftScore::of_uninit(2, 3, 4)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            HardSoftScore::parse("0hard/-100soft").unwrap(),
            HardSoftScore::of(0, -100)
        );
        assert_eq!(
            HardSoftScore::parse("-1hard/0soft").unwrap(),
            HardSoftScore::of(-1, 0)
        );
        assert_eq!(
            HardSoftScore::parse("-7init/0hard/-3soft").unwrap(),
            HardSoftScore::of_uninit(-7, 0, -3)
        );
        assert!(HardSoftScore::parse("0hard").is_err());
        assert!(HardSoftScore::parse("0soft/-1hard").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", HardSoftScore::of(0, -100)), "0hard/-100soft");
        assert_eq!(
            format!("{}", HardSoftScore::of_uninit(-7, 0, -3)),
            "-7init/0hard/-3soft"
        );
    }

    #[test]
    fn test_level_numbers() {
        let score = HardSoftScore::of(-2, -50);
        assert_eq!(score.to_level_numbers(), vec![-2, -50]);
        assert_eq!(HardSoftScore::from_level_numbers(&[-2, -50]), score);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(HardSoftScore::level_label(0), ScoreLevel::Hard);
        assert_eq!(HardSoftScore::level_label(1), ScoreLevel::Soft);
    }
}

// ============================================================================
// HardMediumSoftScore Tests
// ============================================================================

mod hard_medium_soft_score {
    use super::*;

    #[test]
    fn test_creation() {
        let score = HardMediumSoftScore::of(-1, -10, -100);
        assert_eq!(score.hard(), -1);
        assert_eq!(score.medium(), -10);
        assert_eq!(score.soft(), -100);
    }

    #[test]
    fn test_comparison() {
        let s1 = HardMediumSoftScore::of(0, -10, -100);
        let s2 = HardMediumSoftScore::of(0, -5, -200);
        assert!(s2 > s1);

        let s3 = HardMediumSoftScore::of(0, -5, -100);
        assert!(s3 > s2);
    }

    #[test]
    fn test_feasibility() {
        assert!(HardMediumSoftScore::of(0, -10, -100).is_feasible());
        assert!(!HardMediumSoftScore::of(-1, 0, 0).is_feasible());
        assert!(!HardMediumSoftScore::of_uninit(-2, 0, 0, 0).is_feasible());
    }

    #[test]
    fn test_arithmetic() {
        let s1 = HardMediumSoftScore::of(-1, -10, -100);
        let s2 = HardMediumSoftScore::of(0, -5, -50);

        assert_eq!(s1 + s2, HardMediumSoftScore::of(-1, -15, -150));
        assert_eq!(s1 - s2, HardMediumSoftScore::of(-1, -5, -50));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            HardMediumSoftScore::parse("0hard/-5medium/-100soft").unwrap(),
            HardMediumSoftScore::of(0, -5, -100)
        );
        assert_eq!(
            HardMediumSoftScore::parse("-2init/0hard/0medium/-1soft").unwrap(),
            HardMediumSoftScore::of_uninit(-2, 0, 0, -1)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", HardMediumSoftScore::of(0, -5, -100)),
            "0hard/-5medium/-100soft"
        );
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(HardMediumSoftScore::level_label(0), ScoreLevel::Hard);
        assert_eq!(HardMediumSoftScore::level_label(1), ScoreLevel::Medium);
        assert_eq!(HardMediumSoftScore::level_label(2), ScoreLevel::Soft);
    }
}

// ============================================================================
// BendableScore Tests
// ============================================================================

mod bendable_score {
    use super::*;

    #[test]
    fn test_creation() {
        let score: BendableScore<2, 1> = BendableScore::of([-1, -2], [-3]);
        assert_eq!(score.hard_level(0), -1);
        assert_eq!(score.hard_level(1), -2);
        assert_eq!(score.soft_level(0), -3);
    }

    #[test]
    fn test_of_hard_of_soft() {
        let hard: BendableScore<2, 1> = BendableScore::of_hard(1, -5);
        assert_eq!(hard.hard_levels(), &[0, -5]);
        assert_eq!(hard.soft_levels(), &[0]);

        let soft: BendableScore<2, 1> = BendableScore::of_soft(0, -7);
        assert_eq!(soft.hard_levels(), &[0, 0]);
        assert_eq!(soft.soft_levels(), &[-7]);
    }

    #[test]
    #[should_panic(expected = "hard levels")]
    fn test_of_hard_index_out_of_range() {
        let _: BendableScore<2, 1> = BendableScore::of_hard(2, -5);
    }

    #[test]
    fn test_feasibility() {
        let feasible: BendableScore<2, 1> = BendableScore::of([0, 0], [-100]);
        assert!(feasible.is_feasible());

        let second_hard_broken: BendableScore<2, 1> = BendableScore::of([0, -1], [0]);
        assert!(!second_hard_broken.is_feasible());

        let uninit: BendableScore<2, 1> = BendableScore::of_uninit(-1, [0, 0], [0]);
        assert!(!uninit.is_feasible());
    }

    #[test]
    fn test_comparison_is_lexicographic() {
        let s1: BendableScore<2, 1> = BendableScore::of([-1, 100], [100]);
        let s2: BendableScore<2, 1> = BendableScore::of([0, -100], [-100]);
        assert!(s2 > s1);

        let s3: BendableScore<2, 1> = BendableScore::of([0, -50], [-500]);
        assert!(s3 > s2);
    }

    #[test]
    fn test_arithmetic() {
        let s1: BendableScore<1, 2> = BendableScore::of([-1], [-10, -100]);
        let s2: BendableScore<1, 2> = BendableScore::of([-2], [-5, -50]);

        assert_eq!(s1 + s2, BendableScore::of([-3], [-15, -150]));
        assert_eq!(s1 - s2, BendableScore::of([1], [-5, -50]));
        assert_eq!(-s1, BendableScore::of([1], [10, 100]));
    }

    #[test]
    fn test_multiply_floor() {
        let score: BendableScore<1, 1> = BendableScore::of([-5], [7]);
        assert_eq!(score.multiply(0.5), BendableScore::of([-3], [3]));
    }

    #[test]
    fn test_level_numbers() {
        let score: BendableScore<2, 1> = BendableScore::of([-1, -2], [-3]);
        assert_eq!(score.to_level_numbers(), vec![-1, -2, -3]);
        assert_eq!(
            BendableScore::<2, 1>::from_level_numbers(&[-1, -2, -3]),
            score
        );
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(BendableScore::<2, 1>::level_label(0), ScoreLevel::Hard);
        assert_eq!(BendableScore::<2, 1>::level_label(1), ScoreLevel::Hard);
        assert_eq!(BendableScore::<2, 1>::level_label(2), ScoreLevel::Soft);
    }

    #[test]
    fn test_parse_and_display() {
        let score: BendableScore<2, 1> = BendableScore::parse("[-1/-2]hard/[-3]soft").unwrap();
        assert_eq!(score, BendableScore::of([-1, -2], [-3]));
        assert_eq!(format!("{}", score), "[-1/-2]hard/[-3]soft");

        let uninit: BendableScore<2, 1> =
            BendableScore::parse("-7init/[0/0]hard/[-5]soft").unwrap();
        assert_eq!(uninit, BendableScore::of_uninit(-7, [0, 0], [-5]));
        assert_eq!(format!("{}", uninit), "-7init/[0/0]hard/[-5]soft");
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert!(BendableScore::<2, 1>::parse("[-1]hard/[-3]soft").is_err());
        assert!(BendableScore::<2, 1>::parse("[-1/-2]hard/[]soft").is_err());
        assert!(BendableScore::<2, 1>::parse("nonsense").is_err());
    }
}

// ============================================================================
// HardSoftDecimalScore Tests
// ============================================================================

mod hard_soft_decimal_score {
    use super::*;

    #[test]
    fn test_creation_unscaled() {
        let score = HardSoftDecimalScore::of(-2, -100);
        assert_eq!(score.hard_scaled(), -200000);
        assert_eq!(score.soft_scaled(), -10000000);
    }

    #[test]
    fn test_creation_scaled() {
        let score = HardSoftDecimalScore::of_scaled(-30500, -208250);
        assert_eq!(score.hard_scaled(), -30500);
        assert_eq!(score.soft_scaled(), -208250);
    }

    #[test]
    fn test_feasibility() {
        assert!(HardSoftDecimalScore::of(0, -1000).is_feasible());
        assert!(!HardSoftDecimalScore::of_scaled(-1, 0).is_feasible());
        assert!(!HardSoftDecimalScore::of(0, 0).with_init_score(-1).is_feasible());
    }

    #[test]
    fn test_comparison() {
        let infeasible = HardSoftDecimalScore::of(-1, 0);
        let feasible = HardSoftDecimalScore::of(0, -1000);
        assert!(feasible > infeasible);

        let s1 = HardSoftDecimalScore::of_scaled(0, -150000);
        let s2 = HardSoftDecimalScore::of_scaled(0, -149999);
        assert!(s2 > s1);
    }

    #[test]
    fn test_scale_independent_equality() {
        assert_eq!(
            HardSoftDecimalScore::parse("-1.5hard/0soft").unwrap(),
            HardSoftDecimalScore::parse("-1.50hard/0.00soft").unwrap()
        );
    }

    #[test]
    fn test_arithmetic() {
        let s1 = HardSoftDecimalScore::of_scaled(-1500, -100500);
        let s2 = HardSoftDecimalScore::of_scaled(-500, -50250);

        let sum = s1 + s2;
        assert_eq!(sum.hard_scaled(), -2000);
        assert_eq!(sum.soft_scaled(), -150750);
    }

    #[test]
    fn test_parse_decimal() {
        let score = HardSoftDecimalScore::parse("-30.5hard/-208.25soft").unwrap();
        assert_eq!(score.hard_scaled(), -3050000);
        assert_eq!(score.soft_scaled(), -20825000);
    }

    #[test]
    fn test_parse_uninit() {
        let score = HardSoftDecimalScore::parse("-2init/-1.5hard/0soft").unwrap();
        assert_eq!(score.init_score(), -2);
        assert_eq!(score.hard_scaled(), -150000);
    }

    #[test]
    fn test_display() {
        let score = HardSoftDecimalScore::of_scaled(-3050000, -20825000);
        assert_eq!(format!("{}", score), "-30.5hard/-208.25soft");
        assert_eq!(
            format!("{}", score.with_init_score(-1)),
            "-1init/-30.5hard/-208.25soft"
        );
    }

    #[test]
    fn test_display_integer() {
        let score = HardSoftDecimalScore::of(-2, -100);
        assert_eq!(format!("{}", score), "-2hard/-100soft");
    }

    #[test]
    fn test_power_on_unscaled_value() {
        let score = HardSoftDecimalScore::of(3, 4).power(2.0);
        assert_eq!(score, HardSoftDecimalScore::of(9, 16));
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_decimal_bridge() {
        use rust_decimal::Decimal;

        let score = HardSoftDecimalScore::from_decimals(
            Decimal::new(-15, 1), // -1.5
            Decimal::new(-25, 1), // -2.5
        );
        assert_eq!(score, HardSoftDecimalScore::of_scaled(-150000, -250000));

        let (hard, soft) = score.to_decimals();
        assert_eq!(hard, Decimal::new(-15, 1));
        assert_eq!(soft, Decimal::new(-25, 1));
    }
}

// ============================================================================
// Cross-variant law tests
// ============================================================================

mod laws {
    use super::*;

    fn check_laws<S: Score>(a: S, b: S) {
        assert_eq!((a + b) - b, a);
        assert_eq!(a + b, b + a);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert_eq!(a + S::zero(), a);
    }

    #[test]
    fn test_arithmetic_laws() {
        check_laws(SimpleScore::of(-42), SimpleScore::of_uninit(-2, 17));
        check_laws(
            HardSoftScore::of(-3, -500),
            HardSoftScore::of_uninit(-1, 2, 30),
        );
        check_laws(
            HardMediumSoftScore::of(-1, -2, -3),
            HardMediumSoftScore::of(4, 5, 6),
        );
        check_laws(
            BendableScore::<2, 2>::of([-1, -2], [-3, -4]),
            BendableScore::<2, 2>::of_uninit(-1, [5, 6], [7, 8]),
        );
        check_laws(
            HardSoftDecimalScore::of_scaled(-150000, -3),
            HardSoftDecimalScore::of_scaled(2, 50000),
        );
    }

    fn check_round_trip<S: ParseableScore>(s: &str) {
        let parsed = S::parse(s).unwrap();
        assert_eq!(parsed.to_string_repr(), s, "round trip failed for '{}'", s);
    }

    #[test]
    fn test_parse_format_round_trip() {
        check_round_trip::<SimpleScore>("42");
        check_round_trip::<SimpleScore>("-7init/42");
        check_round_trip::<HardSoftScore>("0hard/-100soft");
        check_round_trip::<HardSoftScore>("-7init/0hard/-3soft");
        check_round_trip::<HardMediumSoftScore>("0hard/-5medium/-100soft");
        check_round_trip::<BendableScore<2, 1>>("[-1/-2]hard/[-3]soft");
        check_round_trip::<HardSoftDecimalScore>("-30.5hard/-208.25soft");
        check_round_trip::<HardSoftDecimalScore>("-1init/0hard/0soft");
    }

    #[test]
    fn test_feasible_iff_initialized_and_hard_non_negative() {
        for init in [-2, -1, 0] {
            for hard in [-1i64, 0, 1] {
                let score = HardSoftScore::of_uninit(init, hard, -10);
                assert_eq!(score.is_feasible(), init >= 0 && hard >= 0);
                assert_eq!(score.is_solution_initialized(), init >= 0);
            }
        }
    }
}
