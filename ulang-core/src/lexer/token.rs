#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // <letter>{<letter>|<digit>}
    Ident(String),
    // integer or decimal literal, always a 64-bit float
    Number(f64),

    // comparison operators
    Equal, // ==
    NotEqual, // !=
    LessThan, // <
    LessThanOrEqual, // <=
    GreaterThan, // >
    GreaterThanOrEqual, // >=

    // arithmetic operators
    Plus, // +
    Minus, // -
    Asterisk, // *
    Slash, // /
    Caret, // ^

    // assignment
    Assign, // =

    // boolean connectives
    And, // and
    Or, // or

    // keywords
    If, // if
    Then, // then
    Elseif, // elseif
    Else, // else
    End, // end
    While, // while
    Until, // until
    Do, // do
    Print, // print
    Input, // input
    Func, // func
    Return, // return

    // punctuation
    LParen, // (
    RParen, // )
    Comma, // ,

    Eof,
}

impl Token {
    pub fn is_reserved_word(&self) -> bool {
        match self {
            Token::If
            | Token::Then
            | Token::Elseif
            | Token::Else
            | Token::End
            | Token::While
            | Token::Until
            | Token::Do
            | Token::Print
            | Token::Input
            | Token::Func
            | Token::Return
            | Token::And
            | Token::Or => true,
            _ => false
        }
    }

    pub fn is_comparison_operator(&self) -> bool {
        match self {
            Token::Equal
            | Token::NotEqual
            | Token::LessThan
            | Token::LessThanOrEqual
            | Token::GreaterThan
            | Token::GreaterThanOrEqual => true,
            _ => false
        }
    }

    /// Tokens that may begin a statement. A statement list stops at the
    /// first token this rejects, which is how block boundaries are found
    /// in a grammar without statement terminators.
    pub fn starts_statement(&self) -> bool {
        match self {
            Token::Ident(_)
            | Token::If
            | Token::While
            | Token::Until
            | Token::Print
            | Token::Input
            | Token::Func
            | Token::Return => true,
            _ => false
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => format!("{}", value),
            Token::Number(value) => format!("{}", value),

            Token::Equal => "==".to_string(),
            Token::NotEqual => "!=".to_string(),
            Token::LessThan => "<".to_string(),
            Token::LessThanOrEqual => "<=".to_string(),
            Token::GreaterThan => ">".to_string(),
            Token::GreaterThanOrEqual => ">=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Asterisk => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::Assign => "=".to_string(),
            Token::And => "and".to_string(),
            Token::Or => "or".to_string(),

            Token::If => "if".to_string(),
            Token::Then => "then".to_string(),
            Token::Elseif => "elseif".to_string(),
            Token::Else => "else".to_string(),
            Token::End => "end".to_string(),
            Token::While => "while".to_string(),
            Token::Until => "until".to_string(),
            Token::Do => "do".to_string(),
            Token::Print => "print".to_string(),
            Token::Input => "input".to_string(),
            Token::Func => "func".to_string(),
            Token::Return => "return".to_string(),

            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),

            Token::Eof => "\0".to_string(),
        }
    }
}
