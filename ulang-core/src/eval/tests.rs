use std::io::Cursor;

use crate::utils::prelude::Error;
use super::prelude::*;

fn run(src: &str) -> String {
    run_with_input(src, "")
}

fn run_with_input(src: &str, input: &str) -> String {
    let mut output = Vec::new();

    run_source(src, Cursor::new(input.to_string()), &mut output)
        .expect("evaluation failed");

    String::from_utf8(output).expect("output is not utf8")
}

fn run_err(src: &str) -> RuntimeError {
    let mut output = Vec::new();

    match run_source(src, Cursor::new(String::new()), &mut output) {
        Err(Error::Runtime { error, .. }) => error,
        other => panic!("expected a runtime error, got {other:?}")
    }
}

#[test]
fn test_precedence() {
    assert_eq!(run("print 1 + 2 * 3"), "7\n");
    assert_eq!(run("print (1 + 2) * 3"), "9\n");
}

#[test]
fn test_division_nests_right() {
    // 8 / (4 / 2)
    assert_eq!(run("print 8 / 4 / 2"), "4\n");
}

#[test]
fn test_subtraction() {
    assert_eq!(run("print 5 - 2"), "3\n");

    // 10 - (2 - 3)
    assert_eq!(run("print 10 - 2 - 3"), "11\n");
}

#[test]
fn test_exponent() {
    assert_eq!(run("print 2^3"), "8\n");
    assert_eq!(run("print 2^0.5 * 2^0.5"), "2.0000000000000004\n");
}

#[test]
fn test_negation_applies_after_exponent() {
    assert_eq!(run("print -2^2"), "-4\n");
    assert_eq!(run("print (0 - 2)^2"), "4\n");
}

#[test]
fn test_number_formatting() {
    assert_eq!(run("print 1 / 2"), "0.5\n");
    assert_eq!(run("print 2 + 2"), "4\n");
    assert_eq!(run("print 0 - 0"), "0\n");
    assert_eq!(run("print -0"), "0\n");
}

#[test]
fn test_print_joins_with_spaces() {
    assert_eq!(run("print 1, 2 + 3, 4"), "1 5 4\n");
}

#[test]
fn test_variables() {
    assert_eq!(run("x = 2 y = x * x print y"), "4\n");
}

#[test]
fn test_if_elseif_else() {
    let src = "
        x = 1
        if x == 1 then print 1
        elseif x == 2 then print 2
        else print 3
        end
    ";

    assert_eq!(run(src), "1\n");
    assert_eq!(run(&src.replace("x = 1", "x = 2")), "2\n");
    assert_eq!(run(&src.replace("x = 1", "x = 9")), "3\n");
}

#[test]
fn test_first_true_branch_wins() {
    let src = "
        if 1 == 1 then print 1
        elseif 1 == 1 then print 2
        end
    ";

    assert_eq!(run(src), "1\n");
}

#[test]
fn test_while_loop() {
    assert_eq!(run("i = 0 while i < 3 do print i i = i + 1 end"), "0\n1\n2\n");
    assert_eq!(run("while 1 == 2 do print 9 end print 0"), "0\n");
}

#[test]
fn test_until_loop() {
    // until runs while the condition is false
    assert_eq!(run("i = 0 until i == 3 do print i i = i + 1 end"), "0\n1\n2\n");
    assert_eq!(run("until 1 == 1 do print 9 end print 0"), "0\n");
}

#[test]
fn test_logical_operators() {
    assert_eq!(run("if 1 < 2 and 3 < 2 then print 1 else print 2 end"), "2\n");
    assert_eq!(run("if 1 < 2 or 3 < 2 then print 1 else print 2 end"), "1\n");
    assert_eq!(
        run("if 1 > 2 and 3 < 4 then print 4 elseif 2 < 2 then print 2 else print 1 end"),
        "1\n"
    );
}

#[test]
fn test_logical_operators_do_not_short_circuit() {
    // the right side is evaluated even when the left already decides
    let error = run_err("if 1 == 1 or missing == 1 then print 1 end");

    assert_eq!(
        error.error,
        RuntimeErrorType::UndefinedVariable { name: "missing".to_string() }
    );
}

#[test]
fn test_function_call() {
    assert_eq!(run("func add(a, b) return a + b end print add(2, 3)"), "5\n");
}

#[test]
fn test_function_without_return_yields_zero() {
    assert_eq!(run("func noop() end print noop()"), "0\n");
}

#[test]
fn test_return_stops_the_body() {
    assert_eq!(run("func f() return 1 print 9 end print f()"), "1\n");
}

#[test]
fn test_return_propagates_from_nested_blocks() {
    let src = "
        func sign(x)
            if x < 0 then return 0 - 1 end
            if x > 0 then return 1 end
            return 0
        end
        print sign(0 - 5), sign(3), sign(0)
    ";

    assert_eq!(run(src), "-1 1 0\n");
}

#[test]
fn test_return_legality_is_per_frame() {
    // a finished inner call must not make the outer body return early
    let src = "
        func inner() return 1 end
        func outer()
            inner()
            return 2
        end
        print outer()
    ";

    assert_eq!(run(src), "2\n");
}

#[test]
fn test_recursion() {
    let src = "
        func fact(n)
            if n <= 1 then return 1 end
            return n * fact(n - 1)
        end
        print fact(5)
    ";

    assert_eq!(run(src), "120\n");
}

#[test]
fn test_locals_do_not_leak() {
    let src = "
        g = 1
        func f()
            g = 2
            return g
        end
        print f(), g
    ";

    // the write inside f shadows the global instead of mutating it
    assert_eq!(run(src), "2 1\n");
}

#[test]
fn test_globals_are_readable_in_functions() {
    assert_eq!(run("g = 7 func f() return g end print f()"), "7\n");
}

#[test]
fn test_input() {
    assert_eq!(run_with_input("input x print x * 2", "21\n"), "42\n");
    assert_eq!(run_with_input("input a input b print a - b", "10\n4\n"), "6\n");
}

#[test]
fn test_input_not_a_number() {
    let mut output = Vec::new();

    let result = run_source("input x", Cursor::new("oops\n".to_string()), &mut output);

    let Err(Error::Runtime { error, .. }) = result else {
        panic!("expected a runtime error");
    };

    assert_eq!(
        error.error,
        RuntimeErrorType::InvalidInput { line: "oops".to_string() }
    );
}

#[test]
fn test_division_by_zero() {
    let error = run_err("print 1 / 0");

    assert_eq!(error.error, RuntimeErrorType::DivisionByZero);

    let error = run_err("x = 0 print 1 / x");

    assert_eq!(error.error, RuntimeErrorType::DivisionByZero);
}

#[test]
fn test_undefined_variable() {
    let error = run_err("print missing");

    assert_eq!(
        error.error,
        RuntimeErrorType::UndefinedVariable { name: "missing".to_string() }
    );
    assert_eq!(error.location.start, 6);
}

#[test]
fn test_undefined_function() {
    let error = run_err("greet()");

    assert_eq!(
        error.error,
        RuntimeErrorType::UndefinedFunction { name: "greet".to_string() }
    );
}

#[test]
fn test_arity_mismatch() {
    let error = run_err("func add(a, b) return a + b end print add(1)");

    assert_eq!(
        error.error,
        RuntimeErrorType::ArityMismatch {
            name: "add".to_string(),
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_return_outside_function() {
    let error = run_err("return 1");

    assert_eq!(error.error, RuntimeErrorType::ReturnOutsideFunction);
}

#[test]
fn test_stack_overflow() {
    let error = run_err("func f() return f() end print f()");

    assert_eq!(error.error, RuntimeErrorType::StackOverflow);
}

#[test]
fn test_call_before_definition_fails() {
    // definitions take effect when execution reaches them
    let error = run_err("print f() func f() return 1 end");

    assert_eq!(
        error.error,
        RuntimeErrorType::UndefinedFunction { name: "f".to_string() }
    );
}
