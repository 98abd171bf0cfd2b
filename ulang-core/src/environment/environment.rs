use std::{collections::HashMap, rc::Rc};

use crate::parser::prelude::{FuncDef, Identifier};

/// Global variable and function stores. Function bodies are shared behind
/// `Rc` so a call can run while the table stays borrowed elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    globals: HashMap<String, f64>,
    functions: HashMap<String, Rc<FuncDef>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads check the frame's locals first, then fall back to globals.
    pub fn get(&self, frame: &Frame, name: &str) -> Option<f64> {
        if let Frame::Call { locals } = frame {
            if let Some(value) = locals.get(name) {
                return Some(*value);
            }
        }

        self.globals.get(name).copied()
    }

    /// Writes always land in the frame's own store. A function body can
    /// read a global but never mutate one.
    pub fn set(&mut self, frame: &mut Frame, name: &str, value: f64) {
        match frame {
            Frame::Global => {
                let _ = self.globals.insert(name.to_string(), value);
            },
            Frame::Call { locals } => {
                let _ = locals.insert(name.to_string(), value);
            }
        }
    }

    /// A later definition with the same name replaces the earlier one.
    pub fn define_function(&mut self, func: FuncDef) {
        let _ = self.functions.insert(func.name.value.clone(), Rc::new(func));
    }

    pub fn function(&self, name: &str) -> Option<Rc<FuncDef>> {
        self.functions.get(name).cloned()
    }
}

/// One lexical frame. Each call gets a fresh local store seeded only with
/// its parameters, and `return` is legal exactly in `Call` frames.
#[derive(Debug, Clone)]
pub enum Frame {
    Global,
    Call { locals: HashMap<String, f64> },
}

impl Frame {
    pub fn global() -> Self {
        Self::Global
    }

    pub fn call(params: &[Identifier], args: &[f64]) -> Self {
        let locals = params.iter()
            .map(|param| param.value.clone())
            .zip(args.iter().copied())
            .collect();

        Self::Call { locals }
    }

    pub fn allows_return(&self) -> bool {
        matches!(self, Self::Call { .. })
    }
}
