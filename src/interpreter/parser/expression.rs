use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the expression form the current token can begin.
    ///
    /// This is the prefix half of the operator-precedence dispatch:
    /// literals, identifiers, prefix operators, grouped expressions,
    /// conditionals, function literals, and array/hash literals.
    ///
    /// # Errors
    /// `ParseError::NoPrefixFn` if the current token cannot begin an
    /// expression.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match &self.cur {
            Token::Identifier(name) => Ok(Expression::Identifier { name: name.clone() }),
            Token::Integer(literal) => {
                let value: i64 = literal.parse().map_err(|_| {
                                            ParseError::InvalidIntegerLiteral { literal:
                                                                                    literal.clone(), }
                                        })?;
                Ok(Expression::Literal { value: value.into() })
            },
            Token::Str(value) => Ok(Expression::Literal { value: value.clone().into() }),
            Token::True => Ok(Expression::Literal { value: true.into() }),
            Token::False => Ok(Expression::Literal { value: false.into() }),
            Token::Bang => self.parse_prefix_operation(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operation(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            other => Err(ParseError::NoPrefixFn { token: other.to_string() }),
        }
    }

    /// Parses the infix form the current token continues.
    ///
    /// The expression loop only calls this for tokens with a real infix
    /// precedence: binary operators, `(` for calls, and `[` for indexing.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expression)
                                                      -> ParseResult<Expression> {
        match self.cur {
            Token::LParen => self.parse_call(left),
            Token::LBracket => self.parse_index(left),
            _ => self.parse_infix_operation(left),
        }
    }

    /// Parses a prefix operator application (`!x`, `-x`).
    ///
    /// The operand binds at `Prefix` level, so `-a * b` parses as
    /// `((-a) * b)`.
    fn parse_prefix_operation(&mut self, op: PrefixOperator) -> ParseResult<Expression> {
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { op,
                                right: Box::new(right) })
    }

    /// Parses a binary operator application.
    ///
    /// The right side binds at this operator's own precedence, which makes
    /// every binary operator left-associative: `1 - 2 - 3` parses as
    /// `((1 - 2) - 3)`.
    fn parse_infix_operation(&mut self, left: Expression) -> ParseResult<Expression> {
        let op = match self.cur {
            Token::Plus => InfixOperator::Add,
            Token::Minus => InfixOperator::Sub,
            Token::Asterisk => InfixOperator::Mul,
            Token::Slash => InfixOperator::Div,
            Token::LessThan => InfixOperator::LessThan,
            Token::GreaterThan => InfixOperator::GreaterThan,
            Token::Equal => InfixOperator::Equal,
            Token::NotEqual => InfixOperator::NotEqual,
            _ => unreachable!("tokens without an infix precedence never reach infix position"),
        };

        let precedence = Precedence::of(&self.cur);
        self.advance();

        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               op,
                               right: Box::new(right) })
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouped := "(" expression ")"`
    fn parse_grouped(&mut self) -> ParseResult<Expression> {
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(&Token::RParen)?;

        Ok(expression)
    }

    /// Parses a conditional expression.
    ///
    /// Grammar: `if := "if" "(" expression ")" block ["else" block]`
    fn parse_if(&mut self) -> ParseResult<Expression> {
        self.expect_peek(&Token::LParen)?;
        self.advance();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;

        let consequence = self.parse_block()?;

        let alternative = if self.peek == Token::Else {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses a function literal.
    ///
    /// Grammar: `function := "fn" "(" [identifier ("," identifier)*] ")" block`
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(&Token::LParen)?;

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(&Token::LBrace)?;

        let body = self.parse_block()?;

        Ok(Expression::Function { parameters, body })
    }

    /// Parses the parameter list of a function literal, consuming the
    /// closing `)`. Parameters must be plain identifiers.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek == Token::RParen {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);

        while self.peek == Token::Comma {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }

        self.expect_peek(&Token::RParen)?;

        Ok(parameters)
    }

    /// Parses a call expression. The callee is whatever expression the `(`
    /// followed.
    ///
    /// Grammar: `call := expression "(" [expression ("," expression)*] ")"`
    fn parse_call(&mut self, callee: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Ok(Expression::Call { callee: Box::new(callee),
                              arguments })
    }

    /// Parses an array literal.
    ///
    /// Grammar: `array := "[" [expression ("," expression)*] "]"`
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Ok(Expression::Array { elements })
    }

    /// Parses a hash literal. Pair order is kept as written.
    ///
    /// Grammar: `hash := "{" [expression ":" expression ("," expression ":" expression)*] "}"`
    fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let mut pairs = Vec::new();

        while self.peek != Token::RBrace {
            self.advance();

            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(&Token::Colon)?;
            self.advance();

            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek != Token::RBrace {
                self.expect_peek(&Token::Comma)?;
            }
        }

        self.expect_peek(&Token::RBrace)?;

        Ok(Expression::Hash { pairs })
    }

    /// Parses an index expression. The container is whatever expression the
    /// `[` followed.
    ///
    /// Grammar: `index := expression "[" expression "]"`
    fn parse_index(&mut self, container: Expression) -> ParseResult<Expression> {
        self.advance();

        let index = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(&Token::RBracket)?;

        Ok(Expression::Index { container: Box::new(container),
                               index:     Box::new(index), })
    }
}
