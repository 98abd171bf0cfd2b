use crate::utils::prelude::SrcSpan;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexicalErrorType {
    UnrecognizedToken { tok: char },
    MultipleFloatingPoints,
    InvalidNumber,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexicalError {
    pub error: LexicalErrorType,
    pub location: SrcSpan
}

impl LexicalError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match self.error {
            LexicalErrorType::UnrecognizedToken { .. } => {
                ("This character is not part of the language", vec![])
            },
            LexicalErrorType::MultipleFloatingPoints => {
                ("Found more than one decimal point in a number", vec![])
            },
            LexicalErrorType::InvalidNumber => {
                ("This is not a valid number literal", vec![])
            }
        }
    }
}
