use crate::utils::prelude::SrcSpan;
use super::evaluator::MAX_CALL_DEPTH;

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    /// ```txt
    /// print x
    /// ```
    UndefinedVariable { name: String },

    /// ```txt
    /// greet()
    /// ```
    UndefinedFunction { name: String },

    /// ```txt
    /// func add(a, b) return a + b end
    /// print add(1)
    /// ```
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize
    },

    /// ```txt
    /// return 1
    /// ```
    ReturnOutsideFunction,

    /// ```txt
    /// print 1 / 0
    /// ```
    DivisionByZero,

    /// ```txt
    /// func f() return f() end
    /// print f()
    /// ```
    StackOverflow,

    /// `input` read a line that does not parse as a number.
    InvalidInput { line: String },

    /// Reading from stdin or writing to stdout failed.
    Io { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, String) {
        match &self.error {
            RuntimeErrorType::UndefinedVariable { name } => (
                "Variable is not defined",
                format!("There is no variable named `{name}` in scope")
            ),
            RuntimeErrorType::UndefinedFunction { name } => (
                "Function is not defined",
                format!("There is no function named `{name}`")
            ),
            RuntimeErrorType::ArityMismatch { name, expected, got } => (
                "Wrong number of arguments",
                format!("`{name}` takes {expected} argument(s), but {got} were given")
            ),
            RuntimeErrorType::ReturnOutsideFunction => (
                "`return` outside of a function",
                "`return` is only allowed inside a function body".to_string()
            ),
            RuntimeErrorType::DivisionByZero => (
                "Division by zero",
                "The right-hand side of this division evaluated to zero".to_string()
            ),
            RuntimeErrorType::StackOverflow => (
                "Maximum call depth exceeded",
                format!("Calls can nest at most {MAX_CALL_DEPTH} levels deep")
            ),
            RuntimeErrorType::InvalidInput { line } => (
                "Input is not a number",
                format!("Could not parse `{line}` as a number")
            ),
            RuntimeErrorType::Io { message } => (
                "IO operation failed",
                message.clone()
            )
        }
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, location: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, location })
}
