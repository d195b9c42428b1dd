/// Property-based tests for the blind curve using proptest
///
/// These check the structural guarantees of the generated blind levels
/// across the whole range the setup page allows.
use blind_timer::config::{TimerConfig, MAX_FIRST_BLIND, MAX_ROUNDS};
use blind_timer::{blind_levels, build_schedule, format_time, BlindLevelError};
use proptest::prelude::*;

const COMMON_STARTS: [u64; 5] = [5, 10, 25, 50, 100];

fn levels(first: u64, rounds: usize) -> Vec<u64> {
    blind_levels(first, rounds).expect("valid arguments")
}

// Every step's increment must already have appeared as a level
fn increments_are_earlier_levels(levels: &[u64]) -> bool {
    levels
        .windows(2)
        .enumerate()
        .all(|(i, w)| levels[..=i].contains(&(w[1] - w[0])))
}

#[test]
fn test_common_starts_hold_every_invariant_for_40_rounds() {
    for first in COMMON_STARTS {
        let levels = levels(first, 40);
        assert_eq!(levels.len(), 40);
        assert_eq!(levels[0], first);
        for w in levels.windows(2) {
            assert!(w[1] > w[0], "not increasing for {}: {:?}", first, w);
            assert!(w[1] <= w[0] * 2, "more than doubled for {}: {:?}", first, w);
            // at least 25% growth, checked without floats
            assert!(w[1] * 4 >= w[0] * 5, "grew less than 25% for {}: {:?}", first, w);
        }
        assert!(levels.iter().all(|v| v % first == 0));
        assert!(increments_are_earlier_levels(&levels));
    }
}

#[test]
fn test_reference_curve_for_25() {
    assert_eq!(levels(5, 1), vec![5]);
    assert_eq!(levels(25, 1), vec![25]);
    assert_eq!(levels(25, 4), vec![25, 50, 75, 100]);
    assert_eq!(levels(25, 6), vec![25, 50, 75, 100, 150, 200]);
    assert_eq!(
        levels(25, 10),
        vec![25, 50, 75, 100, 150, 200, 300, 500, 800, 1000]
    );
    assert_eq!(
        levels(25, 13),
        vec![25, 50, 75, 100, 150, 200, 300, 500, 800, 1000, 1500, 2000, 3000]
    );
}

#[test]
fn test_invalid_arguments_are_reported() {
    assert!(matches!(
        blind_levels(0, 5),
        Err(BlindLevelError::InvalidArgument { .. })
    ));
    assert_eq!(
        blind_levels(25, 0).unwrap_err().to_string(),
        "Invalid rounds: 0 (must be at least 1)"
    );
}

#[test]
fn test_countdown_display_format() {
    assert_eq!(format_time(600), "10:00");
}

#[test]
fn test_schedule_serializes_field_names() {
    let config = TimerConfig {
        first_blind: 10,
        rounds: 1,
        round_secs: 600,
    };
    let schedule = build_schedule(&config).unwrap();
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "level": 1, "small_blind": 10, "big_blind": 20, "duration_secs": 600 }
        ])
    );
}

proptest! {
    #[test]
    fn test_length_matches_rounds(first in 1u64..=MAX_FIRST_BLIND, rounds in 1usize..=MAX_ROUNDS) {
        prop_assert_eq!(levels(first, rounds).len(), rounds);
    }

    #[test]
    fn test_strictly_increasing_and_bounded(first in 1u64..=MAX_FIRST_BLIND, rounds in 2usize..=MAX_ROUNDS) {
        let levels = levels(first, rounds);
        for w in levels.windows(2) {
            prop_assert!(w[1] > w[0]);
            prop_assert!(w[1] <= w[0] * 2, "more than doubled: {:?}", w);
            prop_assert!(w[1] * 4 >= w[0] * 5, "grew less than 25%: {:?}", w);
        }
    }

    #[test]
    fn test_every_level_is_multiple_of_first(first in 1u64..=MAX_FIRST_BLIND, rounds in 1usize..=MAX_ROUNDS) {
        prop_assert!(levels(first, rounds).iter().all(|v| v % first == 0));
    }

    #[test]
    fn test_increments_are_denominations(first in 1u64..=MAX_FIRST_BLIND, rounds in 1usize..=MAX_ROUNDS) {
        prop_assert!(increments_are_earlier_levels(&levels(first, rounds)));
    }

    #[test]
    fn test_curve_scales_with_first_blind(first in 1u64..=MAX_FIRST_BLIND, rounds in 1usize..=MAX_ROUNDS) {
        let unit = levels(1, rounds);
        let scaled: Vec<u64> = unit.iter().map(|v| v * first).collect();
        prop_assert_eq!(levels(first, rounds), scaled);
    }

    #[test]
    fn test_deterministic(first in 1u64..=MAX_FIRST_BLIND, rounds in 1usize..=MAX_ROUNDS) {
        prop_assert_eq!(levels(first, rounds), levels(first, rounds));
    }
}
