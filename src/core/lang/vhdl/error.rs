//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use super::super::lexer::Position;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum VhdlError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    UnbalancedParen(#[from] UnbalancedParenError),
}

impl VhdlError {
    /// References the location in the source code where the error was detected.
    pub fn locate(&self) -> &Position {
        match self {
            Self::Lex(e) => &e.position,
            Self::Parse(e) => e.locate(),
            Self::UnbalancedParen(e) => &e.position,
        }
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
#[error("{position} {reason}")]
pub struct LexError {
    pub reason: String,
    pub position: Position,
}

impl LexError {
    pub fn new(reason: &str, position: Position) -> Self {
        Self {
            reason: reason.to_string(),
            position: position,
        }
    }
}

/// What the parser actually saw when it stopped.
#[derive(Debug, PartialEq, Clone)]
pub enum Found {
    Token(String),
    Eof,
}

impl Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(t) => write!(f, "\"{}\"", t),
            Self::Eof => write!(f, "end of file"),
        }
    }
}

/// The set of tokens that would have been accepted.
#[derive(Debug, PartialEq, Clone)]
pub struct Expected(pub Vec<String>);

impl Expected {
    pub fn one(s: &str) -> Self {
        Self(vec![s.to_string()])
    }

    pub fn any(items: &[&str]) -> Self {
        Self(items.iter().map(|s| s.to_string()).collect())
    }

    pub fn contains(&self, s: &str) -> bool {
        self.0.iter().any(|e| e == s)
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quoted: Vec<String> = self.0.iter().map(|e| format!("\"{}\"", e)).collect();
        match quoted.len() {
            0 => write!(f, "nothing"),
            1 => write!(f, "{}", quoted[0]),
            _ => write!(f, "one of {}", quoted.join(", ")),
        }
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    #[error("{position} unexpected {found}; expecting {expected}")]
    Unexpected {
        found: Found,
        expected: Expected,
        position: Position,
    },
    #[error("{position} closing name \"{found}\" does not match entity \"{expected}\"")]
    NameMismatch {
        expected: String,
        found: String,
        position: Position,
    },
    #[error("{position} duplicate generic \"{name}\"")]
    DuplicateGeneric { name: String, position: Position },
    #[error("{position} duplicate port \"{name}\"")]
    DuplicatePort { name: String, position: Position },
}

impl ParseError {
    pub fn locate(&self) -> &Position {
        match self {
            Self::Unexpected { position, .. } => position,
            Self::NameMismatch { position, .. } => position,
            Self::DuplicateGeneric { position, .. } => position,
            Self::DuplicatePort { position, .. } => position,
        }
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
#[error("{position} unbalanced parentheses: \"(\" opened at {opened_at} is not closed before {found}")]
pub struct UnbalancedParenError {
    pub opened_at: Position,
    pub found: Found,
    pub position: Position,
}

/// A construct the parser can delimit but does not decompose.
///
/// This is never fatal: the construct is kept as opaque text or skipped.
#[derive(Debug, Error, PartialEq, Clone)]
#[error("{position} unsupported {construct} is kept as opaque text")]
pub struct UnsupportedConstruct {
    pub construct: String,
    pub position: Position,
}
