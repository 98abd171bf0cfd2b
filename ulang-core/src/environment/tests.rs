use crate::parser::prelude::{parse_program, Statement};
use super::prelude::{Environment, Frame, Number};

fn func_def(src: &str) -> crate::parser::prelude::FuncDef {
    let program = parse_program(src).expect("parsing failed");

    match program.statements.into_iter().next() {
        Some(Statement::FuncDef(func)) => func,
        _ => panic!("expected a function definition")
    }
}

#[test]
fn test_global_assignment() {
    let mut env = Environment::new();
    let mut frame = Frame::global();

    env.set(&mut frame, "x", 1.0);

    assert_eq!(env.get(&frame, "x"), Some(1.0));
    assert_eq!(env.get(&frame, "y"), None);
}

#[test]
fn test_locals_shadow_globals() {
    let mut env = Environment::new();
    let mut global = Frame::global();

    env.set(&mut global, "x", 1.0);

    let func = func_def("func f(x) end");
    let mut call = Frame::call(&func.params, &[2.0]);

    assert_eq!(env.get(&call, "x"), Some(2.0));

    // a write inside the call never escapes to the global store
    env.set(&mut call, "x", 3.0);

    assert_eq!(env.get(&global, "x"), Some(1.0));
}

#[test]
fn test_call_frame_reads_globals() {
    let mut env = Environment::new();
    let mut global = Frame::global();

    env.set(&mut global, "g", 7.0);

    let call = Frame::call(&[], &[]);

    assert_eq!(env.get(&call, "g"), Some(7.0));
}

#[test]
fn test_return_legality() {
    assert!(!Frame::global().allows_return());
    assert!(Frame::call(&[], &[]).allows_return());
}

#[test]
fn test_function_redefinition() {
    let mut env = Environment::new();

    env.define_function(func_def("func f() return 1 end"));
    env.define_function(func_def("func f() return 2 end"));

    let func = env.function("f").expect("function not found");

    assert_eq!(func.body.len(), 1);
    assert_eq!(func.to_string(), "func f() return 2 end");
}

#[test]
fn test_number_display() {
    assert_eq!(Number(4.0).to_string(), "4");
    assert_eq!(Number(2.5).to_string(), "2.5");
    assert_eq!(Number(-3.0).to_string(), "-3");
    assert_eq!(Number(-0.0).to_string(), "0");
    assert_eq!(Number(0.1 + 0.2).to_string(), "0.30000000000000004");
}
