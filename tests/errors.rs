mod cases;

test_case! {
    name: empty_input,
    input: "",
    error: { "Expected a number or '(', found end of input" },
}

test_case! {
    name: whitespace_only,
    input: "   ",
    error: { "[P003]" },
}

test_case! {
    name: dangling_operator,
    input: "1 +",
    error: { "Expected a number or '(', found end of input" },
}

test_case! {
    name: doubled_operator,
    input: "1 + * 2",
    error: { "Expected a number or '(', found '*'" },
}

test_case! {
    name: unary_minus_is_not_supported,
    input: "-1",
    error: { "found '-'" },
}

test_case! {
    name: adjacent_numbers,
    input: "1 2",
    error: { "Expected an operator or end of input, found number 2" },
}

test_case! {
    name: unknown_character,
    input: "2 ^ 3",
    error: { "[P001]" },
}

test_case! {
    name: letters_are_rejected,
    input: "x + 1",
    error: { "Unknown character 'x'" },
}

test_case! {
    name: integer_overflow,
    input: "99999999999999999999 + 1",
    error: { "Invalid number literal '99999999999999999999'" },
}

test_case! {
    name: unclosed_group,
    input: "(1 + 2",
    error: { "Unclosed delimiter '('" },
}

test_case! {
    name: unclosed_group_mentions_opening,
    input: "3 * (1 + 2",
    error: { "unclosed delimiter opened here" },
}

test_case! {
    name: stray_closing_paren,
    input: "1 + 2)",
    error: { "found ')'" },
}

test_case! {
    name: empty_group,
    input: "()",
    error: { "Expected a number or '(', found ')'" },
}

test_case! {
    name: trailing_point,
    input: "1.",
    error: { "Unknown character '.'" },
}
