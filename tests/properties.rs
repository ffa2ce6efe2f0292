use accumula::{
    ast::{AngleMode, Operation},
    error::{Diagnostic, Discard, ErrorKind},
    evaluate_mode_aware,
    evaluate_mode_blind,
    interpreter::lexer::recognize,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e12..1.0e12
}

proptest! {
    #[test]
    fn rad_then_deg_round_trips(x in finite()) {
        let mut mode = AngleMode::Degrees;
        let radians = evaluate_mode_aware(x, &mut mode, "RAD", &mut Discard);
        let degrees = evaluate_mode_aware(radians, &mut mode, "DEG", &mut Discard);

        prop_assert_eq!(mode, AngleMode::Degrees);
        prop_assert!((degrees - x).abs() <= 1e-9 * x.abs().max(1.0));
    }

    #[test]
    fn second_toggle_changes_nothing(x in finite(), toggle in prop::sample::select(vec!["RAD", "DEG"])) {
        let mut mode = if toggle == "RAD" { AngleMode::Degrees } else { AngleMode::Radians };
        let once = evaluate_mode_aware(x, &mut mode, toggle, &mut Discard);
        let twice = evaluate_mode_aware(once, &mut mode, toggle, &mut Discard);

        prop_assert_eq!(once.to_bits(), twice.to_bits());
    }

    #[test]
    fn mode_blind_toggles_are_identity(x in finite(), toggle in prop::sample::select(vec!["RAD", "DEG"])) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        prop_assert_eq!(evaluate_mode_blind(x, toggle, &mut diagnostics).to_bits(), x.to_bits());
        prop_assert!(diagnostics.is_empty());
    }

    #[test]
    fn division_by_zero_keeps_any_accumulator(x in any::<f64>(), op in prop::sample::select(vec!["/", "%"])) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let line = format!("{op}0");

        prop_assert_eq!(evaluate_mode_blind(x, &line, &mut diagnostics).to_bits(), x.to_bits());
        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(diagnostics[0].kind(), ErrorKind::Domain);
    }

    #[test]
    fn failed_recognition_consumes_nothing(line in "[a-z .!?#]{0,12}") {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        prop_assert_eq!(recognize(&line, 0, &mut diagnostics), (Operation::Invalid, 0));
        prop_assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn set_value_round_trips_integers(n in 0u32..1_000_000_000) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let value = evaluate_mode_blind(-1.0, &n.to_string(), &mut diagnostics);

        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(value, f64::from(n));
    }

    #[test]
    fn rejected_lines_keep_the_accumulator(x in finite(), line in "\\PC{0,16}") {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut mode = AngleMode::Degrees;
        let value = evaluate_mode_aware(x, &mut mode, &line, &mut diagnostics);

        if !diagnostics.is_empty() {
            prop_assert_eq!(value.to_bits(), x.to_bits());
            prop_assert_eq!(mode, AngleMode::Degrees);
        }
    }
}
