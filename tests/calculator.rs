use prefixa::{
    assign,
    error::{ParseError, RuntimeError},
    evaluate,
    Context,
    EvalError,
    Evaluation,
};

fn eval(src: &str) -> Result<Evaluation, EvalError> {
    evaluate(src, &Context::new())
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(result) => assert_eq!(result.value, expected, "wrong result for '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match eval(src) {
        Ok(result) => panic!("'{src}' evaluated to {} but was expected to fail", result.value),
        Err(EvalError::Parse(e)) => assert_eq!(&e, expected, "wrong error for '{src}'"),
        Err(e) => panic!("'{src}' failed with the wrong error kind: {e}"),
    }
}

fn assert_runtime_error(src: &str, expected: &RuntimeError) {
    match eval(src) {
        Ok(result) => panic!("'{src}' evaluated to {} but was expected to fail", result.value),
        Err(EvalError::Runtime(e)) => assert_eq!(&e, expected, "wrong error for '{src}'"),
        Err(e) => panic!("'{src}' failed with the wrong error kind: {e}"),
    }
}

#[test]
fn precedence_orders_multiplication_before_addition() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("1 + 2 ^ 3 * 4", 33.0);
}

#[test]
fn prefix_rendering_matches_precedence() {
    let result = eval("2 + 3 * 4").unwrap();
    assert_eq!(result.prefix, "+ 2 * 3 4");

    let result = eval("(2 + 3) * 4").unwrap();
    assert_eq!(result.prefix, "* + 2 3 4");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("(2 ^ 3) ^ 2", 64.0);
}

#[test]
fn equal_precedence_chains_group_rightward() {
    // The >= pop over the reversed stream binds equal-precedence chains from
    // the right: 10 - 3 - 2 is 10 - (3 - 2), as the original calculator
    // groups it.
    assert_value("10 - 3 - 2", 9.0);
    assert_value("100 / 5 / 2", 40.0);
    assert_value("8 / 2 * 4", 1.0);
    assert_value("10 % 7 % 2", 0.0);
    assert_value("2 + 3 - 4 + 5", -4.0);

    let result = eval("10 - 3 - 2").unwrap();
    assert_eq!(result.prefix, "- 10 - 3 2");
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("20 / (2 + 3)", 4.0);
    assert_value("((2))", 2.0);
}

#[test]
fn unary_minus_binds_to_the_following_number() {
    assert_value("-5 + 3", -2.0);
    assert_value("3 * -2", -6.0);
    assert_value("(-5)", -5.0);
    assert_value("2 - -2", 4.0);
    assert_value("-7 % 2", -1.0);
}

#[test]
fn division_and_modulo_by_zero_are_distinct_errors() {
    assert_runtime_error("5 / 0", &RuntimeError::DivisionByZero);
    assert_runtime_error("5 % 0", &RuntimeError::ModuloByZero);
}

#[test]
fn failed_assignment_stores_nothing() {
    let mut context = Context::new();
    assert!(assign("x", "5 / 0", &mut context).is_err());
    assert_eq!(context.get("x"), None);
    assert!(context.is_empty());
}

#[test]
fn variables_round_trip_through_the_table() {
    let mut context = Context::new();

    assert_eq!(assign("x", "2 + 3", &mut context).unwrap(), 5.0);
    assert_eq!(evaluate("x * 2", &context).unwrap().value, 10.0);
    assert_eq!(evaluate("-x + 1", &context).unwrap().value, -4.0);
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut context = Context::new();
    assign("x", "1", &mut context).unwrap();

    assert!(matches!(evaluate("X + 1", &context),
                     Err(EvalError::Runtime(RuntimeError::UnknownVariable { name })) if name == "X"));

    assign("X", "2", &mut context).unwrap();
    assert_eq!(context.get("x"), Some(1.0));
    assert_eq!(context.get("X"), Some(2.0));
}

#[test]
fn unknown_variables_abort_before_evaluation() {
    assert_runtime_error("y + 1", &RuntimeError::UnknownVariable { name: "y".into() });
}

#[test]
fn mismatched_parentheses_fail_before_evaluation() {
    assert_parse_error("(2 + 3", &ParseError::MismatchedParentheses);
    assert_parse_error("2 + 3)", &ParseError::MismatchedParentheses);
    // The lexical balance check runs first, so the zero divisor is never seen.
    assert_parse_error("(5 / 0", &ParseError::MismatchedParentheses);
}

#[test]
fn invalid_characters_name_the_offender() {
    assert_parse_error("2 $ 2",
                       &ParseError::InvalidCharacter { found:    '$',
                                                       position: 2, });
    assert_parse_error("2 + 3.5",
                       &ParseError::InvalidCharacter { found:    '.',
                                                       position: 5, });
}

#[test]
fn structural_errors_are_reported() {
    use prefixa::interpreter::lexer::Operator;

    assert_runtime_error("2 +", &RuntimeError::InsufficientOperands { operator: Operator::Add });
    assert_runtime_error("2 3", &RuntimeError::MalformedExpression { operands: 2 });
    assert_runtime_error("", &RuntimeError::MalformedExpression { operands: 0 });
    // A '-' followed by a digit with no gap reads as a sign, so this is two
    // operands with no operator between them.
    assert_runtime_error("5 -3", &RuntimeError::MalformedExpression { operands: 2 });
}

#[test]
fn clearing_the_table_is_idempotent() {
    let mut context = Context::new();
    assign("a", "1", &mut context).unwrap();
    assign("b", "2", &mut context).unwrap();
    assert_eq!(context.variables(),
               vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)]);

    context.clear();
    assert!(context.is_empty());
    assert!(context.variables().is_empty());

    context.clear();
    assert!(context.is_empty());

    assert_runtime_error("a + b", &RuntimeError::UnknownVariable { name: "a".into() });
}

/// A plain recursive-descent infix evaluator used as a reference to check the
/// reversal-based conversion, in particular the `>=` tie-break. Every grammar
/// level is right-recursive because the calculator binds equal-precedence
/// chains from the right (`10 - 3 - 2` is `10 - (3 - 2)`), exactly like the
/// original program.
struct RefParser<'a> {
    bytes: &'a [u8],
    pos:   usize,
}

impl RefParser<'_> {
    fn parse(src: &str) -> f64 {
        let mut parser = RefParser { bytes: src.as_bytes(),
                                     pos:   0, };
        parser.expr()
    }

    fn peek(&mut self) -> Option<u8> {
        while matches!(self.bytes.get(self.pos), Some(b' ')) {
            self.pos += 1;
        }
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.peek();
        self.pos += 1;
    }

    fn expr(&mut self) -> f64 {
        let value = self.term();
        if let Some(op @ (b'+' | b'-')) = self.peek() {
            self.bump();
            let rhs = self.expr();
            if op == b'+' { value + rhs } else { value - rhs }
        } else {
            value
        }
    }

    fn term(&mut self) -> f64 {
        let value = self.factor();
        if let Some(op @ (b'*' | b'/' | b'%')) = self.peek() {
            self.bump();
            let rhs = self.term();
            match op {
                b'*' => value * rhs,
                b'/' => value / rhs,
                _ => value % rhs,
            }
        } else {
            value
        }
    }

    fn factor(&mut self) -> f64 {
        let base = self.primary();
        if self.peek() == Some(b'^') {
            self.bump();
            base.powf(self.factor())
        } else {
            base
        }
    }

    fn primary(&mut self) -> f64 {
        match self.peek() {
            Some(b'(') => {
                self.bump();
                let value = self.expr();
                self.bump(); // the closing ')'
                value
            },
            Some(b'-') => {
                self.bump();
                -self.primary()
            },
            _ => self.number(),
        }
    }

    fn number(&mut self) -> f64 {
        self.peek();
        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.bytes[start..self.pos]).unwrap()
                                                         .parse()
                                                         .unwrap()
    }
}

#[test]
fn pipeline_agrees_with_a_reference_infix_evaluator() {
    let expressions = ["1 + 2 * 3",
                       "2 + 3 * 4",
                       "2 * 3 + 4 * 5",
                       "(2 + 3) * 4",
                       "(1 + 2) * (3 + 4)",
                       "2 ^ 3 ^ 2",
                       "(2 ^ 3) ^ 2",
                       "2 ^ 2 * 3",
                       "9 - 2 ^ 2",
                       "2 ^ 3 % 5",
                       "10 - 3 - 2",
                       "100 / 5 / 2",
                       "10 % 7 % 2",
                       "7 % 3 * 2",
                       "8 / 2 * 4",
                       "2 + 3 - 4 + 5",
                       "20 / (2 + 3)",
                       "-5 + 3",
                       "3 * -2",
                       "2 - -2",
                       "1 + 2 ^ 3 * 4",
                       "((2))"];

    for src in expressions {
        let expected = RefParser::parse(src);
        let result = eval(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
        assert_eq!(result.value, expected, "pipeline disagrees on '{src}'");
    }
}
