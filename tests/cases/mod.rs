#![allow(dead_code)]

use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use tally::{Error, Session, SessionOptions, render_error_to_string_no_color};

/// Declares one end-to-end test over the public API.
///
/// `ast` compares the fully parenthesized rendering of the tree, `value` the
/// evaluated result (bit for bit, or NaN), and `error` a fragment that must
/// appear in the rendered report.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $( ast: { $ast:expr }, )?
        $( value: { $value:expr }, )?
        $( error: { $error:expr }, )?
    ) => {
        #[test]
        fn $name() {
            let input: &str = $input;
            $( $crate::cases::check_ast(input, $ast); )?
            $( $crate::cases::check_value(input, $value); )?
            $( $crate::cases::check_error(input, $error); )?
        }
    };
}

pub fn session() -> Session {
    Session::new(SessionOptions::default()).unwrap()
}

pub fn check_ast(input: &str, expected: &str) {
    let rendered = session()
        .parse_and_then(input, |parsed| parsed.expr.to_string())
        .unwrap_or_else(|e| panic!("parsing {:?} failed:\n{}", input, render_error_to_string_no_color(&e)));
    assert_eq!(rendered, expected, "tree for {:?}", input);
}

pub fn check_value(input: &str, expected: f64) {
    let actual = session()
        .evaluate(input)
        .unwrap_or_else(|e| panic!("evaluating {:?} failed:\n{}", input, render_error_to_string_no_color(&e)));
    if expected.is_nan() {
        assert!(actual.is_nan(), "expected NaN for {:?}, got {}", input, actual);
    } else {
        assert_eq!(actual.to_bits(), expected.to_bits(), "{:?} gave {}, expected {}", input, actual, expected);
    }
}

pub fn check_error(input: &str, fragment: &str) {
    let err = match session().evaluate(input) {
        Ok(value) => panic!("expected {:?} to fail, got {}", input, value),
        Err(err) => err,
    };
    assert!(matches!(err, Error::Compilation { .. }), "unexpected error kind: {:?}", err);
    let rendered = render_error_to_string_no_color(&err);
    assert!(
        rendered.contains(fragment),
        "report for {:?} does not mention {:?}:\n{}",
        input,
        fragment,
        rendered
    );
}

pub struct Scenario {
    pub name: &'static str,
    pub expr: &'static str,
    pub value: f64,
}

pub static SCENARIOS: Lazy<Vec<Scenario>> = Lazy::new(|| {
    vec![
        Scenario {
            name: "mixed_precedence",
            expr: "2 - 1 * 2 + 10",
            value: 10.0,
        },
        Scenario {
            name: "left_assoc_subtraction",
            expr: "7 - 3 - 2",
            value: 2.0,
        },
        Scenario {
            name: "left_assoc_division",
            expr: "8 / 2 / 2",
            value: 2.0,
        },
        Scenario {
            name: "fractional_division",
            expr: "1 / 4",
            value: 0.25,
        },
        Scenario {
            name: "product_sum",
            expr: "4 * 5 + 6 * 7",
            value: 62.0,
        },
        Scenario {
            name: "grouping",
            expr: "(1 + 2) * 3",
            value: 9.0,
        },
        Scenario {
            name: "nested_groups",
            expr: "((2 + 3) * (4 - 1)) / 5",
            value: 3.0,
        },
        Scenario {
            name: "single_literal",
            expr: "42",
            value: 42.0,
        },
        Scenario {
            name: "decimal_literal",
            expr: "0.5 * 3",
            value: 1.5,
        },
        Scenario {
            name: "padded",
            expr: "   9   ",
            value: 9.0,
        },
    ]
});
