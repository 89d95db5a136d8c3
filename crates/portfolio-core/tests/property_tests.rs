//! Property-based tests for layout rules and widget state
//!
//! Uses proptest to verify invariants that must hold for any input.

use proptest::prelude::*;
use portfolio_core::{
    card_placement, skill_fill_percent, AccordionState, CardPlacement, DialogState,
    DismissReason, RevealOnce, ThemeSwitch, Typewriter, TypewriterOptions,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn dismiss_strategy() -> impl Strategy<Value = DismissReason> {
    prop_oneof![
        Just(DismissReason::Overlay),
        Just(DismissReason::CloseButton),
        Just(DismissReason::Escape),
    ]
}

/// Short phrases, including non-ASCII
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 éü👋]{0,20}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Fill width equals the level inside range and clamps outside it
    #[test]
    fn fill_is_clamped_level(level in any::<u8>()) {
        let fill = skill_fill_percent(level);
        prop_assert!(fill <= 100);
        if level <= 100 {
            prop_assert_eq!(fill, level);
        } else {
            prop_assert_eq!(fill, 100);
        }
    }

    /// Only index 3 is ever shifted
    #[test]
    fn shift_only_at_index_three(index in 0usize..10_000) {
        let shifted = card_placement(index) == CardPlacement::ShiftedToColumnTwo;
        prop_assert_eq!(shifted, index == 3);
    }

    /// An even number of toggles restores the initial theme
    #[test]
    fn even_toggles_round_trip(pairs in 0usize..50) {
        let mut switch = ThemeSwitch::new();
        let initial = switch.theme().root_style();
        let root = ();
        for _ in 0..pairs * 2 {
            switch.toggle(Some(&root)).unwrap();
        }
        prop_assert_eq!(switch.theme().root_style(), initial);
    }

    /// Toggles without a target never change the flag
    #[test]
    fn missing_target_never_changes_flag(start_dark in any::<bool>(), attempts in 1usize..20) {
        let mut switch = ThemeSwitch::new();
        let root = ();
        if start_dark {
            switch.toggle(Some(&root)).unwrap();
        }
        for _ in 0..attempts {
            prop_assert!(switch.toggle::<()>(None).is_err());
        }
        prop_assert_eq!(switch.is_dark(), start_dark);
    }

    /// Any dismissal leaves the dialog closed
    #[test]
    fn dismissal_always_closes(opens in 0usize..4, reason in dismiss_strategy()) {
        let mut dialog = DialogState::new();
        for _ in 0..opens {
            dialog.open();
        }
        dialog.dismiss(reason);
        prop_assert!(!dialog.is_open());
    }

    /// Reveal fires at most once over any observation sequence
    #[test]
    fn reveal_fires_at_most_once(observations in prop::collection::vec(any::<bool>(), 0..50)) {
        let mut reveal = RevealOnce::new();
        let fired = observations.iter().filter(|&&v| reveal.fire(v)).count();
        let any_visible = observations.iter().any(|&v| v);
        prop_assert_eq!(fired, usize::from(any_visible));
        prop_assert_eq!(reveal.is_revealed(), any_visible);
    }

    /// An item is open iff it was toggled an odd number of times
    #[test]
    fn accordion_parity(toggles in prop::collection::vec(0usize..4, 0..40)) {
        let keys = ["Frontend", "Backend", "Database", "Tools"];
        let mut state = AccordionState::new();
        let mut counts = [0usize; 4];
        for &k in &toggles {
            state.toggle(keys[k]);
            counts[k] += 1;
        }
        for (key, count) in keys.iter().zip(counts) {
            prop_assert_eq!(state.is_open(key), count % 2 == 1);
        }
    }

    /// Visible text is always a prefix of the current phrase
    #[test]
    fn typewriter_text_is_prefix(
        phrases in prop::collection::vec(phrase_strategy(), 1..4),
        ticks in 0usize..200,
    ) {
        let mut tw = Typewriter::new(phrases.clone(), TypewriterOptions::default());
        for _ in 0..ticks {
            if tw.tick().is_none() {
                break;
            }
            let current = &phrases[tw.phrase_index()];
            prop_assert!(current.starts_with(tw.text()));
        }
    }
}
