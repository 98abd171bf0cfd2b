use std::fmt::Display;

use crate::{
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

// program -> {<statement>}
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Program {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let statements = Statement::parse_list(parser)?;

        // The statement list stops at the first token that cannot begin a
        // statement. At top level that token must be the end of input.
        match &parser.current_token {
            Some((_, Token::Eof, _)) | None => {},
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token: token.clone(),
                    expected: vec!["a statement".to_string()],
                },
                SrcSpan { start: *start, end: *end }
            )
        }

        let location = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => SrcSpan {
                start: first.location().start,
                end: last.location().end
            },
            _ => SrcSpan { start: 0, end: 0 }
        };

        Ok(Self {
            statements,
            location
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements.iter()
            .map(|statement| format!("{}", statement))
            .collect::<Vec<String>>();

        write!(f, "{}", statements.join("\n"))
    }
}

// statement -> <assign> | <if> | <while> | <until> | <print> | <input>
//            | <func_def> | <call> | <return>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(Assign),
    If(If),
    While(While),
    Until(Until),
    Print(Print),
    Input(Input),
    FuncDef(FuncDef),
    Call(Call),
    Return(Return),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Statement {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let res = match &parser.current_token {
            Some((start, token, end)) => match token {
                // one token of lookahead decides between an assignment
                // and a call statement
                Token::Ident(_) => match &parser.next_token {
                    Some((_, Token::Assign, _)) => Self::Assign(Assign::parse(parser)?),
                    Some((_, Token::LParen, _)) => Self::Call(Call::parse(parser)?),
                    Some((start, token, end)) => return parse_error(
                        ParseErrorType::UnexpectedToken {
                            token: token.clone(),
                            expected: vec!["`=`".to_string(), "`(`".to_string()]
                        },
                        SrcSpan { start: *start, end: *end }
                    ),
                    None => return parse_error(
                        ParseErrorType::UnexpectedEof,
                        SrcSpan { start: 0, end: 0 }
                    )
                },
                Token::If => Self::If(If::parse(parser)?),
                Token::While => Self::While(While::parse(parser)?),
                Token::Until => Self::Until(Until::parse(parser)?),
                Token::Print => Self::Print(Print::parse(parser)?),
                Token::Input => Self::Input(Input::parse(parser)?),
                Token::Func => Self::FuncDef(FuncDef::parse(parser)?),
                Token::Return => Self::Return(Return::parse(parser)?),
                _ => return parse_error(
                    ParseErrorType::ExpectedStatement,
                    SrcSpan { start: *start, end: *end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(res)
    }
}

impl Statement {
    /// Zero-or-more statements. Empty bodies are legal, so the list ends
    /// as soon as the current token cannot begin a statement (`end`,
    /// `elseif`, `else`, `Eof`, ...).
    pub fn parse_list<T: Iterator<Item = LexResult>>(
        parser: &mut Parser<T>
    ) -> Result<Vec<Statement>, ParseError> {
        let mut statements = vec![];

        while parser.current_token.as_ref()
            .is_some_and(|(_, token, _)| token.starts_statement())
        {
            statements.push(Statement::parse(parser)?);
        }

        Ok(statements)
    }

    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Assign(assign) => assign.location,
            Self::If(if_) => if_.location,
            Self::While(while_) => while_.location,
            Self::Until(until) => until.location,
            Self::Print(print) => print.location,
            Self::Input(input) => input.location,
            Self::FuncDef(func) => func.location,
            Self::Call(call) => call.location,
            Self::Return(return_) => return_.location
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assign(assign) => write!(f, "{assign}"),
            Self::If(if_) => write!(f, "{if_}"),
            Self::While(while_) => write!(f, "{while_}"),
            Self::Until(until) => write!(f, "{until}"),
            Self::Print(print) => write!(f, "{print}"),
            Self::Input(input) => write!(f, "{input}"),
            Self::FuncDef(func) => write!(f, "{func}"),
            Self::Call(call) => write!(f, "{call}"),
            Self::Return(return_) => write!(f, "{return_}")
        }
    }
}

// identifier -> <letter>{<letter>|<digit>}
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// assign -> <identifier> = <add>
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub name: Identifier,
    pub value: Add,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Assign {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let ident = parser.expect_ident()?;
        let start = ident.0;

        parser.expect_one(Token::Assign)?;

        let value = Add::parse(parser)?;
        let end = value.location.end;

        Ok(Self {
            name: ident.into(),
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Assign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

// if -> if <condition> then {<statement>} {<elseif>} [else {<statement>}] end
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Condition,
    pub body: Vec<Statement>,
    pub elseifs: Vec<ElseIf>,
    pub alternative: Option<Vec<Statement>>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for If {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::If)?;

        let condition = Condition::parse(parser)?;

        let _ = parser.expect_one(Token::Then)?;

        let body = Statement::parse_list(parser)?;

        let mut elseifs = vec![];

        while matches!(parser.current_token, Some((_, Token::Elseif, _))) {
            elseifs.push(ElseIf::parse(parser)?);
        }

        let alternative = match parser.expect_one(Token::Else) {
            Ok(_) => Some(Statement::parse_list(parser)?),
            Err(_) => None
        };

        let (_, end) = parser.expect_one(Token::End)?;

        Ok(Self {
            condition,
            body,
            elseifs,
            alternative,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if {} then", self.condition)?;

        for statement in &self.body {
            write!(f, " {statement}")?;
        }

        for elseif in &self.elseifs {
            write!(f, " {elseif}")?;
        }

        if let Some(alternative) = &self.alternative {
            write!(f, " else")?;

            for statement in alternative {
                write!(f, " {statement}")?;
            }
        }

        write!(f, " end")
    }
}

// elseif -> elseif <condition> then {<statement>}
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    pub condition: Condition,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for ElseIf {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Elseif)?;

        let condition = Condition::parse(parser)?;

        let (_, mut end) = parser.expect_one(Token::Then)?;

        let body = Statement::parse_list(parser)?;

        if let Some(last) = body.last() {
            end = last.location().end;
        }

        Ok(Self {
            condition,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for ElseIf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "elseif {} then", self.condition)?;

        for statement in &self.body {
            write!(f, " {statement}")?;
        }

        Ok(())
    }
}

// while -> while <condition> do {<statement>} end
#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Condition,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for While {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::While)?;

        let condition = Condition::parse(parser)?;

        let _ = parser.expect_one(Token::Do)?;

        let body = Statement::parse_list(parser)?;

        let (_, end) = parser.expect_one(Token::End)?;

        Ok(Self {
            condition,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for While {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "while {} do", self.condition)?;

        for statement in &self.body {
            write!(f, " {statement}")?;
        }

        write!(f, " end")
    }
}

// until -> until <condition> do {<statement>} end
#[derive(Debug, Clone, PartialEq)]
pub struct Until {
    pub condition: Condition,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Until {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Until)?;

        let condition = Condition::parse(parser)?;

        let _ = parser.expect_one(Token::Do)?;

        let body = Statement::parse_list(parser)?;

        let (_, end) = parser.expect_one(Token::End)?;

        Ok(Self {
            condition,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Until {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "until {} do", self.condition)?;

        for statement in &self.body {
            write!(f, " {statement}")?;
        }

        write!(f, " end")
    }
}

// print -> print <add> {, <add>}
#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub expressions: Vec<Add>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Print {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Print)?;

        let mut expressions = vec![Add::parse(parser)?];

        while let Ok(_) = parser.expect_one(Token::Comma) {
            expressions.push(Add::parse(parser)?);
        }

        let end = expressions.last().map(|expr| expr.location.end).unwrap_or(start);

        Ok(Self {
            expressions,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Print {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expressions = self.expressions.iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<String>>();

        write!(f, "print {}", expressions.join(", "))
    }
}

// input -> input <identifier>
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub name: Identifier,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Input {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Input)?;

        let ident = parser.expect_ident()?;
        let end = ident.2;

        Ok(Self {
            name: ident.into(),
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "input {}", self.name)
    }
}

// func_def -> func <identifier> ( [<identifier> {, <identifier>}] ) {<statement>} end
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for FuncDef {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Func)?;

        let name = parser.expect_ident()?;

        let _ = parser.expect_one(Token::LParen)?;

        let mut params = vec![];

        if matches!(parser.current_token, Some((_, Token::Ident(_), _))) {
            params.push(parser.expect_ident()?.into());

            while let Ok(_) = parser.expect_one(Token::Comma) {
                params.push(parser.expect_ident()?.into());
            }
        }

        let _ = parser.expect_one(Token::RParen)?;

        let body = Statement::parse_list(parser)?;

        let (_, end) = parser.expect_one(Token::End)?;

        Ok(Self {
            name: name.into(),
            params,
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for FuncDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params.iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>();

        write!(f, "func {}({})", self.name, params.join(", "))?;

        for statement in &self.body {
            write!(f, " {statement}")?;
        }

        write!(f, " end")
    }
}

// call -> <identifier> ( [<add> {, <add>}] )
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: Identifier,
    pub args: Vec<Add>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Call {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let name = parser.expect_ident()?;
        let start = name.0;

        let _ = parser.expect_one(Token::LParen)?;

        let mut args = vec![];

        if !matches!(parser.current_token, Some((_, Token::RParen, _))) {
            args.push(Add::parse(parser)?);

            while let Ok(_) = parser.expect_one(Token::Comma) {
                args.push(Add::parse(parser)?);
            }
        }

        let (_, end) = parser.expect_one(Token::RParen)?;

        Ok(Self {
            name: name.into(),
            args,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self.args.iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.name, args.join(", "))
    }
}

// return -> return <add>
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Add,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Return {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::Return)?;

        let value = Add::parse(parser)?;
        let end = value.location.end;

        Ok(Self {
            value,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Return {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {}", self.value)
    }
}

// condition -> <add> <comp_op> <add> [(and|or) <condition>]
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: Add,
    pub operator: CompOp,
    pub right: Add,
    pub rest: Option<(LogicOp, Box<Condition>)>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Condition {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let left = Add::parse(parser)?;
        let start = left.location.start;

        let operator = match &parser.current_token {
            Some((start, token, end)) => match CompOp::from_token(token) {
                Some(operator) => operator,
                None => return parse_error(
                    ParseErrorType::ExpectedComparisonOperator,
                    SrcSpan { start: *start, end: *end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };
        parser.step();

        let right = Add::parse(parser)?;

        let rest = match &parser.current_token {
            Some((_, Token::And, _)) => {
                parser.step();
                Some((LogicOp::And, Box::new(Condition::parse(parser)?)))
            },
            Some((_, Token::Or, _)) => {
                parser.step();
                Some((LogicOp::Or, Box::new(Condition::parse(parser)?)))
            },
            _ => None
        };

        let end = match &rest {
            Some((_, condition)) => condition.location.end,
            None => right.location.end
        };

        Ok(Self {
            left,
            operator,
            right,
            rest,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)?;

        if let Some((logic, condition)) = &self.rest {
            write!(f, " {logic} {condition}")?;
        }

        Ok(())
    }
}

// comp_op -> == | != | < | > | <= | >=
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompOp {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual
}

impl CompOp {
    pub fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
            Token::Equal => Self::Equal,
            Token::NotEqual => Self::NotEqual,
            Token::LessThan => Self::LessThan,
            Token::GreaterThan => Self::GreaterThan,
            Token::LessThanOrEqual => Self::LessThanOrEqual,
            Token::GreaterThanOrEqual => Self::GreaterThanOrEqual,
            _ => return None
        })
    }
}

impl Display for CompOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">="
        };

        write!(f, "{operator}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogicOp {
    And,
    Or
}

impl Display for LogicOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or"
        };

        write!(f, "{operator}")
    }
}

// add -> <mul> [(+|-) <add>]
//
// The chain nests on the right operand, so `a - b - c` groups as
// `a - (b - c)`. This is defined language semantics, not an accident.
#[derive(Debug, Clone, PartialEq)]
pub struct Add {
    pub left: Mul,
    pub rest: Option<(AddOp, Box<Add>)>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Add {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let left = Mul::parse(parser)?;
        let start = left.location.start;

        let rest = match &parser.current_token {
            Some((_, Token::Plus, _)) => {
                parser.step();
                Some((AddOp::Add, Box::new(Add::parse(parser)?)))
            },
            Some((_, Token::Minus, _)) => {
                parser.step();
                Some((AddOp::Subtract, Box::new(Add::parse(parser)?)))
            },
            _ => None
        };

        let end = match &rest {
            Some((_, add)) => add.location.end,
            None => left.location.end
        };

        Ok(Self {
            left,
            rest,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Add {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.left)?;

        if let Some((operator, add)) = &self.rest {
            write!(f, " {operator} {add}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOp {
    Add,
    Subtract
}

impl Display for AddOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-"
        };

        write!(f, "{operator}")
    }
}

// mul -> <value> [(*|/) <mul>]
//
// Right-recursive like <add>: `8 / 4 / 2` groups as `8 / (4 / 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mul {
    pub left: Value,
    pub rest: Option<(MulOp, Box<Mul>)>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Mul {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let left = Value::parse(parser)?;
        let start = left.location.start;

        let rest = match &parser.current_token {
            Some((_, Token::Asterisk, _)) => {
                parser.step();
                Some((MulOp::Multiply, Box::new(Mul::parse(parser)?)))
            },
            Some((_, Token::Slash, _)) => {
                parser.step();
                Some((MulOp::Divide, Box::new(Mul::parse(parser)?)))
            },
            _ => None
        };

        let end = match &rest {
            Some((_, mul)) => mul.location.end,
            None => left.location.end
        };

        Ok(Self {
            left,
            rest,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Mul {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.left)?;

        if let Some((operator, mul)) = &self.rest {
            write!(f, " {operator} {mul}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MulOp {
    Multiply,
    Divide
}

impl Display for MulOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Multiply => "*",
            Self::Divide => "/"
        };

        write!(f, "{operator}")
    }
}

// value -> [-] (<number> | <call> | <identifier> | ( <add> )) [^ <number>]
//
// The exponent applies to the base first, negation last: `-2^2` is `-4`.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub negated: bool,
    pub base: Base,
    pub exponent: Option<f64>,
    pub location: SrcSpan
}

#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    Number(f64),
    Call(Call),
    Variable(Identifier),
    Grouping(Box<Add>)
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Value {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, negated) = match &parser.current_token {
            Some((start, Token::Minus, _)) => {
                let start = *start;
                parser.step();

                (start, true)
            },
            Some((start, _, _)) => (*start, false),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let (base, mut end) = match parser.current_token.clone() {
            Some((_, Token::Number(value), end)) => {
                parser.step();

                (Base::Number(value), end)
            },
            Some((_, Token::Ident(_), _)) => match &parser.next_token {
                Some((_, Token::LParen, _)) => {
                    let call = Call::parse(parser)?;
                    let end = call.location.end;

                    (Base::Call(call), end)
                },
                _ => {
                    let ident = parser.expect_ident()?;
                    let end = ident.2;

                    (Base::Variable(ident.into()), end)
                }
            },
            Some((_, Token::LParen, _)) => {
                parser.step();

                let expression = Add::parse(parser)?;

                let (_, end) = parser.expect_one(Token::RParen)?;

                (Base::Grouping(Box::new(expression)), end)
            },
            Some((start, token, end)) => return parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec![
                        "a Number".to_string(),
                        "a variable or function call".to_string(),
                        "`(`".to_string()
                    ]
                },
                SrcSpan { start, end }
            ),
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        let exponent = match parser.expect_one(Token::Caret) {
            Ok(_) => {
                let (_, number, number_end) = parser.expect_number()?;
                end = number_end;

                Some(number)
            },
            Err(_) => None
        };

        Ok(Self {
            negated,
            base,
            exponent,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "-")?;
        }

        match &self.base {
            Base::Number(number) => write!(f, "{number}")?,
            Base::Call(call) => write!(f, "{call}")?,
            Base::Variable(ident) => write!(f, "{ident}")?,
            Base::Grouping(expression) => write!(f, "({expression})")?
        }

        if let Some(exponent) = self.exponent {
            write!(f, "^{exponent}")?;
        }

        Ok(())
    }
}
