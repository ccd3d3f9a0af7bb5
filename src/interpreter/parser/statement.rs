use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a binding declaration (`let x = ...;`),
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// The first two are recognized by their leading keyword; anything else
    /// is parsed as an expression statement.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding declaration.
    ///
    /// Grammar: `let := "let" identifier "=" expression [";"]`
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - the identifier is missing,
    /// - `=` is missing,
    /// - the bound expression is malformed.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_identifier()?;

        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Let { name, value })
    }

    /// Parses a `return` statement.
    ///
    /// Grammar: `return := "return" expression [";"]`
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Return { value })
    }

    /// Parses an expression in statement position.
    ///
    /// The trailing semicolon is optional so that expression values surface
    /// in interactive use.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.advance();
        }

        Ok(Statement::Expression { expression })
    }

    /// Parses a brace-delimited block of statements.
    ///
    /// The current token must be `{`. Statements are parsed until the
    /// closing `}` or the end of input.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        self.advance();

        while self.cur != Token::RBrace && self.cur != Token::Eof {
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(Block { statements })
    }
}
