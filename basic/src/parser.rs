// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;

use crate::{
    AssignStatement, BiOperator, Comparison, Expression, IfStatement, Keyword, LineNumber, Punctuator, SourceRange, Statement, Token, TokenKind
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parentheses may be open at the same time.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a whole statement, rejecting anything left on the line.
pub fn parse_statement(tokens: &[Token]) -> ParseResult<Statement> {
    Parser::new(tokens).parse_statement()
}

/// Parses an expression that must span all of `tokens`.
pub fn parse_expression(tokens: &[Token]) -> ParseResult<Expression> {
    Parser::new(tokens).parse_complete_expression()
}

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    pub cursor: usize,
    depth: usize,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.consume_token("a statement")?;

        let Some(keyword) = token.as_keyword() else {
            return Err(ParseError::UnknownStatement { token });
        };

        let statement = match keyword {
            Keyword::Rem => {
                self.cursor = self.tokens.len();
                Statement::Comment
            }

            Keyword::Let => Statement::Assign(self.parse_assign_statement()?),
            Keyword::Print => Statement::Print(self.parse_expression()?),
            Keyword::Input => Statement::Input(self.parse_variable_name(Keyword::Input)?),
            Keyword::Goto => Statement::Goto(self.parse_line_number(Keyword::Goto)?),
            Keyword::If => Statement::If(self.parse_if_statement()?),
            Keyword::End => Statement::Halt,

            Keyword::Then => return Err(ParseError::UnknownStatement { token }),
        };

        self.expect_end_of_line()?;
        Ok(statement)
    }

    fn parse_assign_statement(&mut self) -> ParseResult<AssignStatement> {
        let name = self.parse_variable_name(Keyword::Let)?;

        match self.peek_token() {
            Some(token) if token.as_punctuator() == Some(Punctuator::Equals) => {
                self.cursor += 1;
            }

            found => {
                return Err(ParseError::MalformedAssign {
                    name,
                    found: found.cloned(),
                    location: self.end_location(),
                });
            }
        }

        let expression = self.parse_expression()?;
        Ok(AssignStatement { name, expression })
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        let lhs = self.parse_expression()?;

        let Some(comparison) = self.peek_comparison() else {
            return Err(ParseError::MissingThen {
                found: self.peek_token().cloned(),
                location: self.end_location(),
            });
        };
        self.cursor += 1;

        let rhs = self.parse_expression()?;

        match self.peek_token() {
            Some(token) if token.as_keyword() == Some(Keyword::Then) => {
                self.cursor += 1;
            }

            found => {
                return Err(ParseError::MissingThen {
                    found: found.cloned(),
                    location: self.end_location(),
                });
            }
        }

        let target = self.parse_line_number(Keyword::Then)?;

        Ok(IfStatement {
            lhs,
            comparison,
            rhs,
            target,
        })
    }

    fn parse_variable_name(&mut self, after: Keyword) -> ParseResult<String> {
        let token = self.consume_token("a variable name")?;

        match token.kind {
            TokenKind::Word(name) => Ok(name),
            _ => Err(ParseError::ExpectedVariableName { token, after }),
        }
    }

    fn parse_line_number(&mut self, after: Keyword) -> ParseResult<LineNumber> {
        let token = self.consume_token("a line number")?;

        match token.kind {
            TokenKind::Number(number) => {
                LineNumber::try_from(number)
                    .map_err(|_| ParseError::InvalidLineNumber { token })
            }

            _ => Err(ParseError::ExpectedLineNumber { token, after }),
        }
    }

    /// Reads one full expression and leaves the cursor right after it,
    /// whatever follows.
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expression_above(0)
    }

    /// Reads one full expression that must end the line.
    pub fn parse_complete_expression(&mut self) -> ParseResult<Expression> {
        let expression = self.parse_expression()?;
        self.expect_end_of_line()?;
        Ok(expression)
    }

    /// Precedence climbing: keep folding operators into the left operand as
    /// long as they bind tighter than `threshold`, reading each right-hand
    /// side at the precedence of its operator.
    fn parse_expression_above(&mut self, threshold: u8) -> ParseResult<Expression> {
        let mut expression = self.parse_term()?;

        while let Some(operator) = self.peek_operator() {
            if operator.precedence() <= threshold {
                break;
            }

            self.cursor += 1;

            let rhs = self.parse_expression_above(operator.precedence())?;
            expression = Expression::binary(operator, expression, rhs);
        }

        Ok(expression)
    }

    fn parse_term(&mut self) -> ParseResult<Expression> {
        let token = self.consume_token("an expression")?;

        match &token.kind {
            TokenKind::Number(value) => Ok(Expression::Constant(*value)),
            TokenKind::Word(name) => Ok(Expression::Variable(name.clone())),

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { token: token.clone() });
                }

                self.depth += 1;
                let expression = self.parse_expression();
                self.depth -= 1;
                let expression = expression?;

                match self.peek_token() {
                    Some(closing) if closing.as_punctuator() == Some(Punctuator::RightParenthesis) => {
                        self.cursor += 1;
                        Ok(expression)
                    }

                    found => Err(ParseError::UnbalancedParentheses {
                        open: token.clone(),
                        found: found.cloned(),
                        location: self.end_location(),
                    }),
                }
            }

            _ => Err(ParseError::IllegalTerm { token: token.clone() }),
        }
    }

    fn peek_operator(&self) -> Option<BiOperator> {
        self.peek_token()?
            .as_punctuator()
            .and_then(BiOperator::from_punctuator)
    }

    fn peek_comparison(&self) -> Option<Comparison> {
        self.peek_token()?
            .as_punctuator()
            .and_then(Comparison::from_punctuator)
    }

    fn peek_token(&self) -> Option<&'tokens Token> {
        self.tokens.get(self.cursor)
    }

    fn consume_token(&mut self, expected: &'static str) -> ParseResult<Token> {
        let Some(token) = self.peek_token() else {
            return Err(ParseError::UnexpectedEndOfLine {
                expected,
                location: self.end_location(),
            });
        };

        self.cursor += 1;
        Ok(token.clone())
    }

    fn expect_end_of_line(&self) -> ParseResult<()> {
        match self.peek_token() {
            Some(token) => Err(ParseError::TrailingToken { token: token.clone() }),
            None => Ok(()),
        }
    }

    /// The column just past the last token, where end-of-line errors point.
    fn end_location(&self) -> usize {
        self.tokens.last()
            .map(|token| token.range().end())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("Unexpected end of line, expected {expected}")]
    UnexpectedEndOfLine { expected: &'static str, location: usize },

    #[error("Unknown statement `{token}`, expected one of REM, LET, PRINT, INPUT, GOTO, IF or END")]
    UnknownStatement { token: Token },

    #[error("Expected `=` after `LET {name}`, but got {}", describe(.found))]
    MalformedAssign { name: String, found: Option<Token>, location: usize },

    #[error("Expected a comparison with `=`, `<` or `>` followed by `THEN`, but got {}", describe(.found))]
    MissingThen { found: Option<Token>, location: usize },

    #[error("Unbalanced parentheses, expected `)` but got {}", describe(.found))]
    UnbalancedParentheses { open: Token, found: Option<Token>, location: usize },

    #[error("Parentheses are nested deeper than {} levels", MAX_NESTING_DEPTH)]
    NestingTooDeep { token: Token },

    #[error("Illegal term in expression: `{token}`")]
    IllegalTerm { token: Token },

    #[error("Unexpected `{token}` at the end of the statement")]
    TrailingToken { token: Token },

    #[error("Expected variable name after `{after}`, but got {} `{token}`", .token.kind.name())]
    ExpectedVariableName { token: Token, after: Keyword },

    #[error("Expected line number after `{after}`, but got {} `{token}`", .token.kind.name())]
    ExpectedLineNumber { token: Token, after: Keyword },

    #[error("Line number {token} is out of range")]
    InvalidLineNumber { token: Token },
}

impl ParseError {
    #[must_use]
    pub fn range(&self) -> SourceRange {
        match self {
            Self::UnexpectedEndOfLine { location, .. } => SourceRange::new(*location, *location),

            Self::MalformedAssign { found, location, .. }
            | Self::MissingThen { found, location }
            | Self::UnbalancedParentheses { found, location, .. } => {
                match found {
                    Some(token) => token.range(),
                    None => SourceRange::new(*location, *location),
                }
            }

            Self::UnknownStatement { token }
            | Self::IllegalTerm { token }
            | Self::NestingTooDeep { token }
            | Self::TrailingToken { token }
            | Self::ExpectedVariableName { token, .. }
            | Self::ExpectedLineNumber { token, .. }
            | Self::InvalidLineNumber { token } => token.range(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

fn describe(found: &Option<Token>) -> String {
    match found {
        Some(token) => format!("`{token}`"),
        None => "the end of the line".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{EvalState, Lexer};

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tokens(input: &str) -> Vec<Token> {
        let (tokens, errors) = Lexer::new(input).collect_all();
        assert!(errors.is_empty(), "Lexer errors: {errors:#?}");
        tokens
    }

    fn evaluate(input: &str) -> i64 {
        let expression = parse_expression(&tokens(input)).unwrap();
        expression.evaluate(EvalState::new().variables()).unwrap()
    }

    #[rstest]
    #[case("2 + 3 * 4", 14)]
    #[case("(2 + 3) * 4", 20)]
    #[case("2 * 3 + 4", 10)]
    #[case("10 - 4 - 3", 3)]
    #[case("100 / 10 / 5", 2)]
    #[case("1 + 2 * 3 - 4", 3)]
    #[case("8 / 2 * 4", 16)]
    #[case("((7))", 7)]
    #[case("2 * (3 + 4) * 5", 70)]
    #[case("7 / 2", 3)]
    fn precedence_and_associativity(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(evaluate(input), expected);
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expression = parse_expression(&tokens("A - B - C")).unwrap();

        assert_eq!(expression, Expression::binary(
            BiOperator::Subtract,
            Expression::binary(BiOperator::Subtract, Expression::variable("A"), Expression::variable("B")),
            Expression::variable("C"),
        ));
    }

    #[test]
    fn expression_stops_at_non_operator() {
        let tokens = tokens("X + 1 < 5");
        let mut parser = Parser::new(&tokens);

        let expression = parser.parse_expression().unwrap();

        assert_eq!(expression.to_string(), "X + 1");
        assert_eq!(parser.cursor, 3);
        assert!(!parser.is_at_end());
    }

    #[rstest]
    #[case("1 2", "TrailingToken")]
    #[case("(1 + 2", "UnbalancedParentheses")]
    #[case("(1 + 2 3", "UnbalancedParentheses")]
    #[case("1 + ", "UnexpectedEndOfLine")]
    #[case("* 2", "IllegalTerm")]
    #[case("1 + $", "IllegalTerm")]
    #[case("", "UnexpectedEndOfLine")]
    fn expression_errors(#[case] input: &str, #[case] expected: &str) {
        let error = parse_expression(&tokens(input)).unwrap_err();
        assert_eq!(error.name(), expected, "Unexpected error: {error}");
    }

    #[rstest]
    #[case("REM this is ignored = ( 12", Statement::Comment)]
    #[case("rem", Statement::Comment)]
    #[case("LET X = 5", Statement::Assign(AssignStatement { name: "X".into(), expression: Expression::Constant(5) }))]
    #[case("let total = total + 1", Statement::Assign(AssignStatement {
        name: "total".into(),
        expression: Expression::binary(BiOperator::Add, Expression::variable("total"), Expression::Constant(1)),
    }))]
    #[case("PRINT X * 2", Statement::Print(Expression::binary(BiOperator::Multiply, Expression::variable("X"), Expression::Constant(2))))]
    #[case("INPUT N", Statement::Input("N".into()))]
    #[case("GOTO 40", Statement::Goto(LineNumber::new(40)))]
    #[case("IF X < 3 THEN 20", Statement::If(IfStatement {
        lhs: Expression::variable("X"),
        comparison: Comparison::LessThan,
        rhs: Expression::Constant(3),
        target: LineNumber::new(20),
    }))]
    #[case("if a + 1 = b * 2 then 100", Statement::If(IfStatement {
        lhs: Expression::binary(BiOperator::Add, Expression::variable("a"), Expression::Constant(1)),
        comparison: Comparison::Equal,
        rhs: Expression::binary(BiOperator::Multiply, Expression::variable("b"), Expression::Constant(2)),
        target: LineNumber::new(100),
    }))]
    #[case("IF X > 0 THEN 5", Statement::If(IfStatement {
        lhs: Expression::variable("X"),
        comparison: Comparison::GreaterThan,
        rhs: Expression::Constant(0),
        target: LineNumber::new(5),
    }))]
    #[case("END", Statement::Halt)]
    fn statements(#[case] input: &str, #[case] expected: Statement) {
        assert_eq!(parse_statement(&tokens(input)), Ok(expected));
    }

    #[rstest]
    #[case("", "UnexpectedEndOfLine")]
    #[case("FOO X", "UnknownStatement")]
    #[case("THEN 10", "UnknownStatement")]
    #[case("10", "UnknownStatement")]
    #[case("LET X 5", "MalformedAssign")]
    #[case("LET X", "MalformedAssign")]
    #[case("LET 5 = X", "ExpectedVariableName")]
    #[case("LET X = 5 6", "TrailingToken")]
    #[case("PRINT", "UnexpectedEndOfLine")]
    #[case("PRINT (X", "UnbalancedParentheses")]
    #[case("PRINT X Y", "TrailingToken")]
    #[case("INPUT", "UnexpectedEndOfLine")]
    #[case("INPUT 5", "ExpectedVariableName")]
    #[case("INPUT X Y", "TrailingToken")]
    #[case("GOTO", "UnexpectedEndOfLine")]
    #[case("GOTO X", "ExpectedLineNumber")]
    #[case("GOTO 99999999999", "InvalidLineNumber")]
    #[case("GOTO 10 20", "TrailingToken")]
    #[case("IF X THEN 10", "MissingThen")]
    #[case("IF X", "MissingThen")]
    #[case("IF X + 1 10", "MissingThen")]
    #[case("IF X ( 1 THEN 10", "MissingThen")]
    #[case("IF X THEN", "MissingThen")]
    #[case("IF X = 1 10", "MissingThen")]
    #[case("IF X = 1", "MissingThen")]
    #[case("IF X = 1 THEN", "UnexpectedEndOfLine")]
    #[case("IF X = 1 THEN Y", "ExpectedLineNumber")]
    #[case("IF X = 1 THEN 10 20", "TrailingToken")]
    #[case("END NOW", "TrailingToken")]
    fn statement_errors(#[case] input: &str, #[case] expected: &str) {
        let error = parse_statement(&tokens(input)).unwrap_err();
        assert_eq!(error.name(), expected, "Unexpected error: {error}");
    }

    #[test]
    fn nesting_limit() {
        let nested = |depth: usize| format!("PRINT {}1{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(
            parse_statement(&tokens(&nested(MAX_NESTING_DEPTH))),
            Ok(Statement::Print(Expression::Constant(1)))
        );

        let error = parse_statement(&tokens(&nested(MAX_NESTING_DEPTH + 1))).unwrap_err();
        assert_eq!(error.name(), "NestingTooDeep");
        assert_eq!(error.range(), SourceRange::new(6 + MAX_NESTING_DEPTH, 7 + MAX_NESTING_DEPTH));
    }

    #[test]
    fn deeply_nested_line_is_rejected() {
        let line = format!("PRINT {}1{}", "(".repeat(200_000), ")".repeat(200_000));

        let error = parse_statement(&tokens(&line)).unwrap_err();
        assert_eq!(error.name(), "NestingTooDeep");
    }

    #[test]
    fn error_ranges_point_at_the_offending_token() {
        let error = parse_statement(&tokens("LET X 5")).unwrap_err();
        assert_eq!(error.range(), SourceRange::new(6, 7));

        let error = parse_statement(&tokens("IF X = 1")).unwrap_err();
        assert_eq!(error.range(), SourceRange::new(8, 8));
    }

    #[test]
    fn error_messages() {
        let error = parse_statement(&tokens("LET X")).unwrap_err();
        assert_eq!(error.to_string(), "Expected `=` after `LET X`, but got the end of the line");

        let error = parse_statement(&tokens("IF X = 1 ELSE 10")).unwrap_err();
        assert_eq!(error.to_string(), "Expected a comparison with `=`, `<` or `>` followed by `THEN`, but got `ELSE`");

        let error = parse_statement(&tokens("IF X THEN 10")).unwrap_err();
        assert_eq!(error.to_string(), "Expected a comparison with `=`, `<` or `>` followed by `THEN`, but got `THEN`");

        let error = parse_statement(&tokens("GOTO (")).unwrap_err();
        assert_eq!(error.to_string(), "Expected line number after `GOTO`, but got open parenthesis `(`");
    }
}
