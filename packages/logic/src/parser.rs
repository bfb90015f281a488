use log::trace;

use crate::{
    ast::Node,
    builder::{atom, conjoin, disjoin, equiv_to, imply_to, negate, nor, scheffer},
    error::{Error, ParseError},
    token::{tokenize, Token, TokenKind},
};

/// Identifier that introduces a NOR application when directly followed by `(`.
pub const NOR_KEYWORD: &str = "N";

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    /// Offset reported when input runs out.
    end: usize,
}

/// Parses a formula. Precedence, loosest first: `<->`/`->`, then `&`/`|`/`/`,
/// then `!`. Binary operators on one level fold left to right.
pub fn parse(text: &str) -> Result<Node, Error> {
    let tokens = tokenize(text)?;
    let node = parse_tokens(&tokens, text.len())?;

    trace!("Parsed {:?} as {}", text, node);

    Ok(node)
}

/// Parses an already tokenized formula; `end` is the offset reported for
/// premature end of input.
pub fn parse_tokens(tokens: &[Token], end: usize) -> Result<Node, ParseError> {
    let mut parser = Parser {
        tokens,
        position: 0,
        end,
    };

    let node = parser.equivalence_or_implication()?;

    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(ParseError::TrailingInput {
            offset: token.offset,
            found: token.spelling.clone(),
        }),
    }
}

impl<'a> Parser<'a> {
    fn equivalence_or_implication(&mut self) -> Result<Node, ParseError> {
        let mut stub = self.conjunction_or_disjunction()?;

        while let Some(kind) =
            self.next_if(|kind| matches!(kind, TokenKind::Equiv | TokenKind::Impl))
        {
            let right = self.conjunction_or_disjunction()?;

            stub = match kind {
                TokenKind::Equiv => equiv_to(stub, right),
                _ => imply_to(stub, right),
            };
        }

        Ok(stub)
    }

    fn conjunction_or_disjunction(&mut self) -> Result<Node, ParseError> {
        let mut stub = self.negation()?;

        while let Some(kind) = self.next_if(|kind| {
            matches!(kind, TokenKind::And | TokenKind::Or | TokenKind::Scheffer)
        }) {
            let right = self.negation()?;

            stub = match kind {
                TokenKind::And => conjoin(stub, right),
                TokenKind::Or => disjoin(stub, right),
                _ => scheffer(stub, right),
            };
        }

        Ok(stub)
    }

    // `!` applies to the next negation or parenthesized unit only.
    fn negation(&mut self) -> Result<Node, ParseError> {
        if self.next_if(|kind| kind == TokenKind::Not).is_some() {
            return Ok(negate(self.negation()?));
        }

        self.base_expression()
    }

    fn base_expression(&mut self) -> Result<Node, ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::LParen => self.parenthesized_expression(),
            Some(token) if token.kind == TokenKind::Ident && token.spelling == NOR_KEYWORD => {
                match self.tokens.get(self.position + 1) {
                    Some(next) if next.kind == TokenKind::LParen => self.nor_application(),
                    _ => self.propositional_variable(),
                }
            }
            _ => self.propositional_variable(),
        }
    }

    fn parenthesized_expression(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LParen)?;
        let node = self.equivalence_or_implication()?;
        self.expect(TokenKind::RParen)?;

        Ok(node)
    }

    fn nor_application(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::LParen)?;

        let first = self.equivalence_or_implication()?;
        let mut rest = Vec::new();

        while self.next_if(|kind| kind == TokenKind::Comma).is_some() {
            rest.push(self.equivalence_or_implication()?);
        }

        self.expect(TokenKind::RParen)?;

        Ok(nor(first, rest))
    }

    fn propositional_variable(&mut self) -> Result<Node, ParseError> {
        let token = self.expect(TokenKind::Ident)?;

        Ok(atom(token.spelling.clone()))
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn next_if(&mut self, predicate: impl FnOnce(TokenKind) -> bool) -> Option<TokenKind> {
        let token = self.peek()?;

        if predicate(token.kind) {
            self.position += 1;
            Some(token.kind)
        } else {
            None
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == expected => {
                self.position += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                offset: token.offset,
                expected: expected.describe().to_owned(),
                found: token.spelling.clone(),
            }),
            None => Err(ParseError::UnexpectedEnd {
                offset: self.end,
                expected: expected.describe().to_owned(),
            }),
        }
    }
}
