use capuchin::interpreter::lexer::{Lexer, Token};

fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn int(literal: &str) -> Token {
    Token::Integer(literal.to_string())
}

#[test]
fn tokenizes_every_token_kind() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
  return true;
} else {
  return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
"#;

    let expected = vec![Token::Let,
                        ident("five"),
                        Token::Assign,
                        int("5"),
                        Token::Semicolon,
                        Token::Let,
                        ident("ten"),
                        Token::Assign,
                        int("10"),
                        Token::Semicolon,
                        Token::Let,
                        ident("add"),
                        Token::Assign,
                        Token::Function,
                        Token::LParen,
                        ident("x"),
                        Token::Comma,
                        ident("y"),
                        Token::RParen,
                        Token::LBrace,
                        ident("x"),
                        Token::Plus,
                        ident("y"),
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Semicolon,
                        Token::Let,
                        ident("result"),
                        Token::Assign,
                        ident("add"),
                        Token::LParen,
                        ident("five"),
                        Token::Comma,
                        ident("ten"),
                        Token::RParen,
                        Token::Semicolon,
                        Token::Bang,
                        Token::Minus,
                        Token::Slash,
                        Token::Asterisk,
                        int("5"),
                        Token::Semicolon,
                        int("5"),
                        Token::LessThan,
                        int("10"),
                        Token::GreaterThan,
                        int("5"),
                        Token::Semicolon,
                        Token::If,
                        Token::LParen,
                        int("5"),
                        Token::LessThan,
                        int("10"),
                        Token::RParen,
                        Token::LBrace,
                        Token::Return,
                        Token::True,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Else,
                        Token::LBrace,
                        Token::Return,
                        Token::False,
                        Token::Semicolon,
                        Token::RBrace,
                        int("10"),
                        Token::Equal,
                        int("10"),
                        Token::Semicolon,
                        int("10"),
                        Token::NotEqual,
                        int("9"),
                        Token::Semicolon,
                        Token::Str("foobar".to_string()),
                        Token::Str("foo bar".to_string()),
                        Token::LBracket,
                        int("1"),
                        Token::Comma,
                        int("2"),
                        Token::RBracket,
                        Token::Semicolon,
                        Token::LBrace,
                        Token::Str("foo".to_string()),
                        Token::Colon,
                        Token::Str("bar".to_string()),
                        Token::RBrace,
                        Token::Eof];

    assert_eq!(tokens(source), expected);
}

#[test]
fn empty_source_is_eof() {
    assert_eq!(tokens(""), vec![Token::Eof]);
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("5");

    assert_eq!(lexer.next_token(), int("5"));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    assert_eq!(tokens("@"), vec![Token::Illegal("@".to_string()), Token::Eof]);
    assert_eq!(tokens("5 ~ 5"),
               vec![int("5"), Token::Illegal("~".to_string()), int("5"), Token::Eof]);
}

// A digit ends an identifier: the scanner reads letters and underscores
// only.
#[test]
fn identifiers_do_not_contain_digits() {
    assert_eq!(tokens("foo123"), vec![ident("foo"), int("123"), Token::Eof]);
    assert_eq!(tokens("_foo_bar"), vec![ident("_foo_bar"), Token::Eof]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(tokens("\"abc"), vec![Token::Str("abc".to_string()), Token::Eof]);
}

#[test]
fn string_literals_have_no_escapes() {
    assert_eq!(tokens(r#""a\nb""#), vec![Token::Str(r"a\nb".to_string()), Token::Eof]);
}

#[test]
fn token_literals_are_substrings_of_the_source() {
    let source = "let add = fn(x) { x + 41 }; add(1) == 42; \"text\"";

    for token in Lexer::new(source) {
        if token == Token::Eof {
            continue;
        }

        assert!(source.contains(token.literal()),
                "literal {:?} of {token} not found in source",
                token.literal());
    }
}
