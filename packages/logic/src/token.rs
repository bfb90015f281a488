use std::fmt::Display;

use log::trace;
use strum::IntoStaticStr;
use winnow::{
    combinator::alt,
    stream::{Located, Location, Stream},
    token::{one_of, take_while},
    PResult, Parser,
};

use crate::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    And,
    Or,
    Not,
    Impl,
    Equiv,
    Scheffer,
    LParen,
    RParen,
    Comma,
    Ident,
    Unknown,
}

impl TokenKind {
    /// How the kind is named in parser diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::And => "`&`",
            TokenKind::Or => "`|`",
            TokenKind::Not => "`!`",
            TokenKind::Impl => "`->`",
            TokenKind::Equiv => "`<->`",
            TokenKind::Scheffer => "`/`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Ident => "identifier",
            TokenKind::Unknown => "unknown character",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    /// Byte offset of the first character in the source text.
    pub offset: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &'static str = self.kind.into();
        write!(f, "{}@{} `{}`", kind, self.offset, self.spelling)
    }
}

type Input<'a> = Located<&'a str>;

pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut input = Input::new(text);
    let mut tokens = Vec::new();

    loop {
        skip_whitespace(&mut input);

        if input.eof_offset() == 0 {
            break;
        }

        let offset = input.location();
        let kind = token_kind(&mut input).map_err(|_| lex_error(text, offset))?;

        tokens.push(Token {
            kind,
            spelling: text[offset..input.location()].to_owned(),
            offset,
        });
    }

    trace!("Tokenized {:?} into {} tokens", text, tokens.len());

    Ok(tokens)
}

/// Like [`tokenize`], but never fails: every character that does not start a
/// token becomes a one-character [`TokenKind::Unknown`] token.
pub fn tokenize_lossy(text: &str) -> Vec<Token> {
    let mut input = Input::new(text);
    let mut tokens = Vec::new();

    loop {
        skip_whitespace(&mut input);

        if input.eof_offset() == 0 {
            break;
        }

        let offset = input.location();
        let start = input.checkpoint();
        let kind = match token_kind(&mut input) {
            Ok(kind) => kind,
            Err(_) => {
                input.reset(&start);
                input.next_token();
                TokenKind::Unknown
            }
        };

        tokens.push(Token {
            kind,
            spelling: text[offset..input.location()].to_owned(),
            offset,
        });
    }

    tokens
}

fn skip_whitespace(input: &mut Input<'_>) {
    let length = input
        .offset_for(|c: char| !c.is_whitespace())
        .unwrap_or_else(|| input.eof_offset());

    input.next_slice(length);
}

fn token_kind(input: &mut Input<'_>) -> PResult<TokenKind> {
    alt((
        alt(("<->", "↔")).value(TokenKind::Equiv),
        alt(("->", "→")).value(TokenKind::Impl),
        one_of(['&', '∧']).value(TokenKind::And),
        one_of(['|', '∨']).value(TokenKind::Or),
        one_of(['!', '¬']).value(TokenKind::Not),
        one_of(['/', '↑']).value(TokenKind::Scheffer),
        '('.value(TokenKind::LParen),
        ')'.value(TokenKind::RParen),
        ','.value(TokenKind::Comma),
        take_while(1.., |c: char| c.is_ascii_alphanumeric()).value(TokenKind::Ident),
    ))
    .parse_next(input)
}

fn lex_error(text: &str, offset: usize) -> LexError {
    let rest = &text[offset..];
    let found = rest.chars().next().unwrap_or_default();

    let expected = match found {
        '-' => "`->`",
        '<' => "`<->`",
        _ => "identifier",
    };

    LexError {
        offset,
        expected,
        found,
    }
}
