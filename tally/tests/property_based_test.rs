use proptest::prelude::*;
use tally::{evaluate_expression, Engine, Operator, TallyError};

fn number() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(i, f)| format!("{}.{}", i, f)),
    ]
}

fn operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Well formed expressions: balanced parentheses, no empty groups.
fn expression() -> impl Strategy<Value = String> {
    number().prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(l, op, r)| format!("{}{}{}", l, op, r)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_well_formed_expressions_evaluate(expr in expression()) {
        match evaluate_expression(&expr) {
            Ok(value) => prop_assert!(value.is_finite(), "{} gave {}", expr, value),
            Err(e) => prop_assert_eq!(e, TallyError::DivisionByZero),
        }
    }

    #[test]
    fn prop_evaluation_is_idempotent(expr in expression()) {
        let engine = Engine::new();
        let first = engine.evaluate(&expr);
        let second = engine.evaluate(&expr);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_converter_output_is_understood(expr in expression()) {
        let engine = Engine::new();
        let postfix = engine.compile(&expr).unwrap();
        let is_unknown_token = matches!(
            engine.evaluate_postfix(&postfix),
            Err(TallyError::InvalidCharacter { .. })
        );
        prop_assert!(!is_unknown_token);
    }

    #[test]
    fn prop_multiplication_binds_tighter(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let value = evaluate_expression(&format!("{}+{}*{}", a, b, c)).unwrap();
        prop_assert_eq!(value, a as f64 + (b as f64 * c as f64));
    }

    #[test]
    fn prop_subtraction_is_left_associative(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let value = evaluate_expression(&format!("{}-{}-{}", a, b, c)).unwrap();
        prop_assert_eq!(value, (a as f64 - b as f64) - c as f64);
    }

    #[test]
    fn prop_redundant_parentheses_do_not_change_result(expr in expression()) {
        let plain = evaluate_expression(&expr);
        let wrapped = evaluate_expression(&format!("(({}))", expr));
        prop_assert_eq!(plain, wrapped);
    }

    #[test]
    fn prop_unclosed_parenthesis_is_reported(expr in expression()) {
        let err = evaluate_expression(&format!("({}", expr)).unwrap_err();
        prop_assert_eq!(err, TallyError::UnbalancedParentheses { position: 0 });
    }
}
