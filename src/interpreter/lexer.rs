use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// Identifier tokens; binding or parameter names such as `x` or `add`.
    /// Identifiers are runs of ASCII letters and underscores; a digit ends
    /// the run, so `foo123` lexes as `foo` followed by `123`.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The digits are kept as written;
    /// the parser converts them and reports literals that overflow.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens, such as `"hello"`. There are no escape
    /// sequences; an unterminated string runs to the end of the input.
    #[regex(r#""[^"]*""#, |lex| { let s = lex.slice(); s[1..s.len() - 1].to_string() })]
    #[regex(r#""[^"]*"#, |lex| lex.slice()[1..].to_string())]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Any character no other rule matches, carried verbatim so the parser
    /// can name it in a diagnostic.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Illegal(String),
    /// End of input. A NUL byte also lexes as `Eof`.
    #[token("\u{0}")]
    Eof,
}

impl Token {
    /// Returns the source text this token stands for.
    ///
    /// For fixed tokens this is the punctuation or keyword itself; for
    /// identifiers, integers, strings, and illegal tokens it is the matched
    /// text. `Eof` has no text.
    ///
    /// # Examples
    /// ```
    /// use capuchin::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Function.literal(), "fn");
    /// assert_eq!(Token::NotEqual.literal(), "!=");
    /// assert_eq!(Token::Identifier("add".to_string()).literal(), "add");
    /// ```
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::Identifier(s) | Self::Integer(s) | Self::Str(s) | Self::Illegal(s) => s,
            Self::Function => "fn",
            Self::Let => "let",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "",
        }
    }
}

// Token kinds display as the names used in parser diagnostics, e.g.
// "expected next token to be ), got EOF instead".
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Identifier(_) => "IDENT",
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            fixed => fixed.literal(),
        };
        write!(f, "{kind}")
    }
}

/// Streams tokens out of a source string.
///
/// Wraps the generated [`logos`] lexer so that exhausted input yields
/// [`Token::Eof`] forever and unmatched characters come out as
/// [`Token::Illegal`] values instead of errors.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    done:  bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source),
               done:  false, }
    }

    /// Returns the next token in the stream.
    ///
    /// Once the input is exhausted, every further call returns
    /// [`Token::Eof`].
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first [`Token::Eof`].
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.next_token();
        if token == Token::Eof {
            self.done = true;
        }

        Some(token)
    }
}
