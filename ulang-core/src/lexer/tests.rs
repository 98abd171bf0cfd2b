use super::prelude::{Lexer, LexicalErrorType, Token};

fn lex_all(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
    let mut tokens = vec![];

    loop {
        let (_, token, _) = lexer.next_token().expect("lexing failed");

        if token == Token::Eof {
            break;
        }

        tokens.push(token);
    }

    tokens
}

#[test]
fn test_numbers() {
    let tokens = lex_all("10 125 0.5 .5 1. 3.25");

    assert_eq!(tokens, vec![
        Token::Number(10.0),
        Token::Number(125.0),
        Token::Number(0.5),
        Token::Number(0.5),
        Token::Number(1.0),
        Token::Number(3.25),
    ]);
}

#[test]
fn test_multiple_floating_points() {
    let mut lexer = Lexer::new("1.2.3".char_indices().map(|(i, c)| (i as u32, c)));

    let err = lexer.next_token().unwrap_err();

    assert_eq!(err.error, LexicalErrorType::MultipleFloatingPoints);
}

#[test]
fn test_operators_are_greedy() {
    let tokens = lex_all("= == != < <= > >= + - * / ^");

    assert_eq!(tokens, vec![
        Token::Assign,
        Token::Equal,
        Token::NotEqual,
        Token::LessThan,
        Token::LessThanOrEqual,
        Token::GreaterThan,
        Token::GreaterThanOrEqual,
        Token::Plus,
        Token::Minus,
        Token::Asterisk,
        Token::Slash,
        Token::Caret,
    ]);
}

#[test]
fn test_adjacent_operators() {
    // `<==` must lex as `<=` then `=`, never `<` `==`
    let tokens = lex_all("<==");

    assert_eq!(tokens, vec![Token::LessThanOrEqual, Token::Assign]);

    let tokens = lex_all("a==b");

    assert_eq!(tokens, vec![
        Token::Ident("a".to_string()),
        Token::Equal,
        Token::Ident("b".to_string()),
    ]);
}

#[test]
fn test_comparison_operators() {
    for token in lex_all("== != < <= > >=") {
        assert!(token.is_comparison_operator());
    }

    assert!(!Token::Assign.is_comparison_operator());
    assert!(!Token::And.is_comparison_operator());
}

#[test]
fn test_keywords_and_idents() {
    let tokens = lex_all("if then elseif else end while until do print input func return and or x iffy");

    assert_eq!(tokens, vec![
        Token::If,
        Token::Then,
        Token::Elseif,
        Token::Else,
        Token::End,
        Token::While,
        Token::Until,
        Token::Do,
        Token::Print,
        Token::Input,
        Token::Func,
        Token::Return,
        Token::And,
        Token::Or,
        Token::Ident("x".to_string()),
        Token::Ident("iffy".to_string()),
    ]);
}

#[test]
fn test_bang_without_equal() {
    let mut lexer = Lexer::new("!x".char_indices().map(|(i, c)| (i as u32, c)));

    let err = lexer.next_token().unwrap_err();

    assert_eq!(err.error, LexicalErrorType::UnrecognizedToken { tok: '!' });
}

#[test]
fn test_unrecognized_character() {
    let mut lexer = Lexer::new("a ? b".char_indices().map(|(i, c)| (i as u32, c)));

    let _ = lexer.next_token().unwrap();
    let err = lexer.next_token().unwrap_err();

    assert_eq!(err.error, LexicalErrorType::UnrecognizedToken { tok: '?' });
    assert_eq!(err.location.start, 2);
}

#[test]
fn test_newlines_are_insignificant() {
    let tokens = lex_all("x\n=\n1");

    assert_eq!(tokens, vec![
        Token::Ident("x".to_string()),
        Token::Assign,
        Token::Number(1.0),
    ]);
}

#[test]
fn test_statement_sequence() {
    let tokens = lex_all("print add(2, 3)");

    assert_eq!(tokens, vec![
        Token::Print,
        Token::Ident("add".to_string()),
        Token::LParen,
        Token::Number(2.0),
        Token::Comma,
        Token::Number(3.0),
        Token::RParen,
    ]);
}

#[test]
fn test_spans() {
    let mut lexer = Lexer::new("ab <= 10".char_indices().map(|(i, c)| (i as u32, c)));

    let (start, token, end) = lexer.next_token().unwrap();
    assert_eq!((start, end), (0, 2));
    assert_eq!(token, Token::Ident("ab".to_string()));

    let (start, token, end) = lexer.next_token().unwrap();
    assert_eq!((start, end), (3, 5));
    assert_eq!(token, Token::LessThanOrEqual);

    let (start, token, end) = lexer.next_token().unwrap();
    assert_eq!((start, end), (6, 8));
    assert_eq!(token, Token::Number(10.0));
}
