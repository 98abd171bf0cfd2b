use std::io::{BufRead, Write};

use crate::{
    environment::prelude::{Environment, Frame, Number},
    parser::prelude::{
        Add, AddOp, Base, Call, CompOp, Condition, LogicOp, Mul,
        MulOp, Program, Statement, Value
    },
};

use super::error::{runtime_error, RuntimeError, RuntimeErrorType};

pub const MAX_CALL_DEPTH: usize = 256;

/// Tree-walking evaluator. Line IO is injected so programs can run
/// against stdin/stdout or in-memory buffers alike.
pub struct Evaluator<R: BufRead, W: Write> {
    env: Environment,
    depth: usize,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Evaluator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            env: Environment::new(),
            depth: 0,
            input,
            output,
        }
    }

    pub fn eval_program(&mut self, program: &Program) -> Result<(), RuntimeError> {
        let mut frame = Frame::global();

        for statement in &program.statements {
            let _ = self.eval_statement(statement, &mut frame)?;
        }

        Ok(())
    }

    /// `Some(value)` means a `return` fired and the value must propagate
    /// up to the nearest enclosing call.
    fn eval_statement(
        &mut self,
        statement: &Statement,
        frame: &mut Frame
    ) -> Result<Option<f64>, RuntimeError> {
        match statement {
            Statement::Assign(assign) => {
                let value = self.eval_add(&assign.value, frame)?;

                self.env.set(frame, &assign.name.value, value);

                Ok(None)
            },
            Statement::If(if_) => {
                if self.eval_condition(&if_.condition, frame)? {
                    return self.eval_block(&if_.body, frame);
                }

                for elseif in &if_.elseifs {
                    if self.eval_condition(&elseif.condition, frame)? {
                        return self.eval_block(&elseif.body, frame);
                    }
                }

                match &if_.alternative {
                    Some(alternative) => self.eval_block(alternative, frame),
                    None => Ok(None)
                }
            },
            Statement::While(while_) => {
                while self.eval_condition(&while_.condition, frame)? {
                    if let Some(value) = self.eval_block(&while_.body, frame)? {
                        return Ok(Some(value));
                    }
                }

                Ok(None)
            },
            Statement::Until(until) => {
                while !self.eval_condition(&until.condition, frame)? {
                    if let Some(value) = self.eval_block(&until.body, frame)? {
                        return Ok(Some(value));
                    }
                }

                Ok(None)
            },
            Statement::Print(print) => {
                let mut parts = Vec::with_capacity(print.expressions.len());

                for expression in &print.expressions {
                    parts.push(Number(self.eval_add(expression, frame)?).to_string());
                }

                writeln!(self.output, "{}", parts.join(" ")).map_err(|err| RuntimeError {
                    error: RuntimeErrorType::Io { message: err.to_string() },
                    location: print.location
                })?;

                Ok(None)
            },
            Statement::Input(input) => {
                // make sure any pending prompt is visible before blocking
                self.output.flush().map_err(|err| RuntimeError {
                    error: RuntimeErrorType::Io { message: err.to_string() },
                    location: input.location
                })?;

                let mut line = String::new();

                let read = self.input.read_line(&mut line).map_err(|err| RuntimeError {
                    error: RuntimeErrorType::Io { message: err.to_string() },
                    location: input.location
                })?;

                if read == 0 {
                    return runtime_error(
                        RuntimeErrorType::Io { message: "unexpected end of input".to_string() },
                        input.location
                    );
                }

                let line = line.trim();

                let value = match line.parse::<f64>() {
                    Ok(value) => value,
                    Err(_) => return runtime_error(
                        RuntimeErrorType::InvalidInput { line: line.to_string() },
                        input.location
                    )
                };

                self.env.set(frame, &input.name.value, value);

                Ok(None)
            },
            Statement::FuncDef(func) => {
                self.env.define_function(func.clone());

                Ok(None)
            },
            Statement::Call(call) => {
                let _ = self.eval_call(call, frame)?;

                Ok(None)
            },
            Statement::Return(return_) => {
                if !frame.allows_return() {
                    return runtime_error(
                        RuntimeErrorType::ReturnOutsideFunction,
                        return_.location
                    );
                }

                let value = self.eval_add(&return_.value, frame)?;

                Ok(Some(value))
            }
        }
    }

    fn eval_block(
        &mut self,
        statements: &[Statement],
        frame: &mut Frame
    ) -> Result<Option<f64>, RuntimeError> {
        for statement in statements {
            if let Some(value) = self.eval_statement(statement, frame)? {
                return Ok(Some(value));
            }
        }

        Ok(None)
    }

    fn eval_condition(
        &mut self,
        condition: &Condition,
        frame: &Frame
    ) -> Result<bool, RuntimeError> {
        let left = self.eval_add(&condition.left, frame)?;
        let right = self.eval_add(&condition.right, frame)?;

        let value = match condition.operator {
            CompOp::Equal => left == right,
            CompOp::NotEqual => left != right,
            CompOp::LessThan => left < right,
            CompOp::GreaterThan => left > right,
            CompOp::LessThanOrEqual => left <= right,
            CompOp::GreaterThanOrEqual => left >= right
        };

        // both sides of a logical chain are always evaluated, there is
        // no short-circuiting
        match &condition.rest {
            Some((operator, rest)) => {
                let rest = self.eval_condition(rest, frame)?;

                Ok(match operator {
                    LogicOp::And => value && rest,
                    LogicOp::Or => value || rest
                })
            },
            None => Ok(value)
        }
    }

    fn eval_add(&mut self, add: &Add, frame: &Frame) -> Result<f64, RuntimeError> {
        let left = self.eval_mul(&add.left, frame)?;

        match &add.rest {
            Some((AddOp::Add, rest)) => Ok(left + self.eval_add(rest, frame)?),
            Some((AddOp::Subtract, rest)) => Ok(left - self.eval_add(rest, frame)?),
            None => Ok(left)
        }
    }

    fn eval_mul(&mut self, mul: &Mul, frame: &Frame) -> Result<f64, RuntimeError> {
        let left = self.eval_value(&mul.left, frame)?;

        match &mul.rest {
            Some((MulOp::Multiply, rest)) => Ok(left * self.eval_mul(rest, frame)?),
            Some((MulOp::Divide, rest)) => {
                let right = self.eval_mul(rest, frame)?;

                if right == 0.0 {
                    return runtime_error(RuntimeErrorType::DivisionByZero, rest.location);
                }

                Ok(left / right)
            },
            None => Ok(left)
        }
    }

    fn eval_value(&mut self, value: &Value, frame: &Frame) -> Result<f64, RuntimeError> {
        let base = match &value.base {
            Base::Number(number) => *number,
            Base::Variable(ident) => match self.env.get(frame, &ident.value) {
                Some(value) => value,
                None => return runtime_error(
                    RuntimeErrorType::UndefinedVariable { name: ident.value.clone() },
                    ident.location
                )
            },
            Base::Call(call) => self.eval_call(call, frame)?,
            Base::Grouping(expression) => self.eval_add(expression, frame)?
        };

        // exponent binds tighter than the unary minus: -2^2 is -4
        let mut result = match value.exponent {
            Some(exponent) => base.powf(exponent),
            None => base
        };

        if value.negated {
            result = -result;
        }

        Ok(result)
    }

    fn eval_call(&mut self, call: &Call, frame: &Frame) -> Result<f64, RuntimeError> {
        let func = match self.env.function(&call.name.value) {
            Some(func) => func,
            None => return runtime_error(
                RuntimeErrorType::UndefinedFunction { name: call.name.value.clone() },
                call.name.location
            )
        };

        if func.params.len() != call.args.len() {
            return runtime_error(
                RuntimeErrorType::ArityMismatch {
                    name: call.name.value.clone(),
                    expected: func.params.len(),
                    got: call.args.len()
                },
                call.location
            );
        }

        // arguments are evaluated in the caller's frame
        let mut args = Vec::with_capacity(call.args.len());

        for arg in &call.args {
            args.push(self.eval_add(arg, frame)?);
        }

        if self.depth >= MAX_CALL_DEPTH {
            return runtime_error(RuntimeErrorType::StackOverflow, call.location);
        }

        let mut call_frame = Frame::call(&func.params, &args);

        self.depth += 1;
        let result = self.eval_block(&func.body, &mut call_frame);
        self.depth -= 1;

        // a body that never returns yields zero
        Ok(result?.unwrap_or(0.0))
    }
}
