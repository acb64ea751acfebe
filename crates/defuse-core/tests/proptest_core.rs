//! Property-based tests for the defusal coordination core.
//!
//! Uses proptest to generate counter sequences, serial numbers, and solver
//! queues, then verifies the structural invariants hold.

use defuse_core::bomb::BombSolver;
use defuse_core::edgework::{EdgeworkReport, serial_valid};
use defuse_core::error::SolveError;
use defuse_core::solver::ModuleSolver;
use defuse_core::test_utils::{StubSolver, acquired_edgework};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_serial() -> impl Strategy<Value = String> {
    // Valid serials: 6 alphanumerics with at least one letter and one digit.
    "[a-z0-9]{6}".prop_filter("needs a letter and a digit", |s| serial_valid(s))
}

fn arb_queue(max_types: usize) -> impl Strategy<Value = Vec<(String, u32)>> {
    proptest::collection::vec(("[a-z]{3,8}", 1..4u32), 1..=max_types)
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Solves never exceed the module total, and `defused` flips exactly
    /// when the total is reached.
    #[test]
    fn solves_clamp_and_defused_flips_at_total(total in 1..40u32, calls in 0..60u32) {
        let mut edgework = acquired_edgework(EdgeworkReport {
            total_modules: Some(total),
            ..Default::default()
        });
        for call in 1..=calls {
            edgework.register_solve();
            prop_assert!(edgework.solves() <= total);
            prop_assert_eq!(edgework.defused(), call >= total);
        }
    }

    /// With a limit of N, the Nth strike detonates and earlier ones do not.
    #[test]
    fn nth_strike_detonates(limit in 1..20u32) {
        let mut edgework = acquired_edgework(EdgeworkReport {
            max_strikes: Some(limit),
            ..Default::default()
        });
        for _ in 1..limit {
            prop_assert!(edgework.register_strike().is_ok());
        }
        let last = edgework.register_strike();
        prop_assert!(
            matches!(last, Err(SolveError::Detonated { strikes }) if strikes == limit),
            "expected detonation at strike limit"
        );
    }

    /// Serial scan queries agree with a direct character scan.
    #[test]
    fn serial_scans_match_direct_scan(serial in arb_serial()) {
        let edgework = acquired_edgework(EdgeworkReport {
            serial: Some(serial.clone()),
            ..Default::default()
        });
        let first_digit = serial.chars().find(char::is_ascii_digit);
        let first_letter = serial.chars().find(char::is_ascii_alphabetic);
        let last_digit_odd = serial
            .chars()
            .filter(char::is_ascii_digit)
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d % 2 == 1)
            .unwrap_or(false);
        prop_assert_eq!(edgework.serial_first_digit(), first_digit);
        prop_assert_eq!(edgework.serial_first_letter(), first_letter);
        prop_assert_eq!(edgework.serial_last_digit_odd(), last_digit_odd);
        prop_assert_eq!(
            edgework.serial_contains_vowel(),
            serial.chars().any(|c| "aeiou".contains(c))
        );
    }

    /// A queue of identity reorderers keeps its order across any number of
    /// passes, and the module total is the sum of the copy counts.
    #[test]
    fn identity_reorder_is_stable(queue in arb_queue(8), passes in 1..5usize) {
        let expected_total: u32 = queue.iter().map(|(_, count)| count).sum();
        let solvers: Vec<Box<dyn ModuleSolver>> = queue
            .iter()
            .map(|(id, count)| {
                Box::new(StubSolver::new(id.clone(), *count)) as Box<dyn ModuleSolver>
            })
            .collect();
        let mut bomb = BombSolver::new(solvers);
        prop_assert_eq!(bomb.module_count(), expected_total);

        let before: Vec<String> =
            bomb.queue_type_ids().iter().map(|id| id.to_string()).collect();
        for _ in 0..passes {
            bomb.reorder_pass().unwrap();
        }
        let after: Vec<&str> = bomb.queue_type_ids();
        prop_assert_eq!(after, before.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(bomb.module_count(), expected_total);
    }
}
