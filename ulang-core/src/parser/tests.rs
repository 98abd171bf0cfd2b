use crate::lexer::prelude::Token;
use super::prelude::*;

fn parse(src: &str) -> Program {
    parse_program(src).expect("parsing failed")
}

fn parse_err(src: &str) -> ParseError {
    parse_program(src).expect_err("parsing succeeded")
}

#[test]
fn test_assignment() {
    let program = parse("x = 1 + 2");

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "x = 1 + 2");
}

#[test]
fn test_call_statement() {
    // `name(` is a call, `name =` is an assignment
    let program = parse("greet() x = 1");

    assert!(matches!(program.statements[0], Statement::Call(_)));
    assert!(matches!(program.statements[1], Statement::Assign(_)));
}

#[test]
fn test_ident_without_assign_or_paren() {
    let error = parse_err("x + 1");

    assert!(matches!(error.error, ParseErrorType::UnexpectedToken { .. }));
}

#[test]
fn test_if_statement() {
    let program = parse("if x == 1 then print 1 end");

    let Statement::If(if_) = &program.statements[0] else {
        panic!("expected an if statement");
    };

    assert_eq!(if_.body.len(), 1);
    assert!(if_.elseifs.is_empty());
    assert!(if_.alternative.is_none());
}

#[test]
fn test_if_elseif_else() {
    let program = parse(
        "if x == 1 then print 1 elseif x == 2 then print 2 elseif x == 3 then print 3 else print 4 end"
    );

    let Statement::If(if_) = &program.statements[0] else {
        panic!("expected an if statement");
    };

    assert_eq!(if_.elseifs.len(), 2);
    assert!(if_.alternative.is_some());
    assert_eq!(
        program.to_string(),
        "if x == 1 then print 1 elseif x == 2 then print 2 elseif x == 3 then print 3 else print 4 end"
    );
}

#[test]
fn test_empty_bodies() {
    let program = parse("if x == 1 then else end while x < 1 do end func noop() end");

    assert_eq!(program.statements.len(), 3);
}

#[test]
fn test_while_and_until() {
    let program = parse("while i < 3 do i = i + 1 end until i == 0 do i = i - 1 end");

    assert!(matches!(program.statements[0], Statement::While(_)));
    assert!(matches!(program.statements[1], Statement::Until(_)));
}

#[test]
fn test_print_list() {
    let program = parse("print a, b + 1, f(c)");

    let Statement::Print(print) = &program.statements[0] else {
        panic!("expected a print statement");
    };

    assert_eq!(print.expressions.len(), 3);
}

#[test]
fn test_input() {
    let program = parse("input name");

    let Statement::Input(input) = &program.statements[0] else {
        panic!("expected an input statement");
    };

    assert_eq!(input.name.value, "name");
}

#[test]
fn test_func_def() {
    let program = parse("func add(a, b) return a + b end");

    let Statement::FuncDef(func) = &program.statements[0] else {
        panic!("expected a function definition");
    };

    assert_eq!(func.name.value, "add");
    assert_eq!(func.params.len(), 2);
    assert_eq!(func.body.len(), 1);
}

#[test]
fn test_func_def_no_params() {
    let program = parse("func zero() return 0 end");

    let Statement::FuncDef(func) = &program.statements[0] else {
        panic!("expected a function definition");
    };

    assert!(func.params.is_empty());
}

#[test]
fn test_call_arguments() {
    let program = parse("f() g(1) h(1, x + 2, i(3))");

    let args = |statement: &Statement| match statement {
        Statement::Call(call) => call.args.len(),
        _ => panic!("expected a call statement")
    };

    assert_eq!(args(&program.statements[0]), 0);
    assert_eq!(args(&program.statements[1]), 1);
    assert_eq!(args(&program.statements[2]), 3);
}

#[test]
fn test_addition_nests_right() {
    let program = parse("x = 1 - 2 - 3");

    let Statement::Assign(assign) = &program.statements[0] else {
        panic!("expected an assignment");
    };

    // 1 - (2 - 3)
    let Some((AddOp::Subtract, rest)) = &assign.value.rest else {
        panic!("expected a subtraction chain");
    };

    assert!(matches!(rest.rest, Some((AddOp::Subtract, _))));
}

#[test]
fn test_multiplication_nests_right() {
    let program = parse("x = 8 / 4 / 2");

    let Statement::Assign(assign) = &program.statements[0] else {
        panic!("expected an assignment");
    };

    let Some((MulOp::Divide, rest)) = &assign.value.left.rest else {
        panic!("expected a division chain");
    };

    assert!(matches!(rest.rest, Some((MulOp::Divide, _))));
}

#[test]
fn test_value_forms() {
    let program = parse("x = -2^2 y = (1 + 2) * 3 z = f(1)^2");

    assert_eq!(program.to_string(), "x = -2^2\ny = (1 + 2) * 3\nz = f(1)^2");
}

#[test]
fn test_exponent_must_be_literal() {
    let error = parse_err("x = 2^y");

    assert_eq!(error.error, ParseErrorType::ExpectedExponent);
}

#[test]
fn test_condition_chain() {
    let program = parse("if x < 1 and y > 2 or z == 3 then end");

    let Statement::If(if_) = &program.statements[0] else {
        panic!("expected an if statement");
    };

    // `and` binds the second comparison, whose rest carries the `or`
    let Some((LogicOp::And, rest)) = &if_.condition.rest else {
        panic!("expected an `and` chain");
    };

    assert!(matches!(rest.rest, Some((LogicOp::Or, _))));
}

#[test]
fn test_condition_requires_comparison() {
    let error = parse_err("if x then end");

    assert_eq!(error.error, ParseErrorType::ExpectedComparisonOperator);
}

#[test]
fn test_missing_end() {
    let error = parse_err("while x < 1 do x = x + 1");

    assert!(matches!(
        error.error,
        ParseErrorType::UnexpectedToken { token: Token::Eof, .. }
    ));
}

#[test]
fn test_trailing_tokens() {
    let error = parse_err("x = 1 end");

    assert!(matches!(
        error.error,
        ParseErrorType::UnexpectedToken { token: Token::End, .. }
    ));
}

#[test]
fn test_lex_error_wins() {
    // the `?` poisons the stream before the parser can complain
    let error = parse_err("x = ? end");

    assert!(matches!(error.error, ParseErrorType::LexError { .. }));
}

#[test]
fn test_spans() {
    let program = parse("x = 1 + 2");

    let Statement::Assign(assign) = &program.statements[0] else {
        panic!("expected an assignment");
    };

    assert_eq!(assign.location.start, 0);
    assert_eq!(assign.location.end, 9);
    assert_eq!(assign.value.location.start, 4);
}
