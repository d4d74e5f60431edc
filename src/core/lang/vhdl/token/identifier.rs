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

use super::tokenizer::char_set;
use crate::core::lang::vhdl::token::ToColor;
use colored::ColoredString;
use colored::Colorize;
use serde::Serialize;
use serde::Serializer;
use std::fmt::Display;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum Identifier {
    Basic(String),
    Extended(String),
}

impl Identifier {
    /// References the inner text without any extended-identifier delimiters.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(id) => id.as_ref(),
            Self::Extended(id) => id.as_ref(),
        }
    }

    /// Checks if `self` is an extended identifier or not.
    pub fn is_extended(&self) -> bool {
        match self {
            Self::Extended(_) => true,
            Self::Basic(_) => false,
        }
    }

    /// Number of characters the identifier occupies when written out.
    pub fn len(&self) -> usize {
        match self {
            Self::Basic(id) => id.chars().count(),
            Self::Extended(id) => {
                id.chars().count() + 2 + id.chars().filter(|c| c == &'\\').count()
            }
        }
    }
}

impl std::cmp::Eq for Identifier {}

impl std::cmp::PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        // instantly not equal if not they are not of same type
        if self.is_extended() != other.is_extended() {
            return false;
        };
        match self.is_extended() {
            true => self.as_str() == other.as_str(),
            false => self.as_str().to_lowercase() == other.as_str().to_lowercase(),
        }
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Basic(id) => id.to_lowercase().hash(state),
            Self::Extended(id) => id.hash(state),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum IdentifierError {
    #[error("empty identifier")]
    Empty,
    #[error("first character must be letter but found '{0}'")]
    InvalidFirstChar(char),
    #[error("invalid character '{0}' in identifier")]
    InvalidChar(char),
    #[error("underline must be followed by a letter or digit")]
    DanglingUnderline,
    #[error("missing closing backslash for extended identifier")]
    MissingBackslash,
    #[error("characters '{0}' found following closing extended backslash")]
    CharsAfterDelimiter(String),
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().peekable();
        match chars.next() {
            None => Err(Self::Err::Empty),
            Some(char_set::BACKSLASH) => {
                let mut id = String::new();
                loop {
                    match chars.next() {
                        Some(char_set::BACKSLASH) => {
                            if chars.peek() == Some(&char_set::BACKSLASH) {
                                chars.next();
                                id.push(char_set::BACKSLASH);
                            } else {
                                break;
                            }
                        }
                        Some(c) => id.push(c),
                        None => return Err(Self::Err::MissingBackslash),
                    }
                }
                let rem: String = chars.collect();
                if rem.is_empty() == false {
                    Err(Self::Err::CharsAfterDelimiter(rem))
                } else if id.is_empty() == true {
                    Err(Self::Err::Empty)
                } else {
                    Ok(Self::Extended(id))
                }
            }
            Some(c) => {
                if char_set::is_letter(&c) == false {
                    return Err(Self::Err::InvalidFirstChar(c));
                }
                let mut id = String::from(c);
                let mut after_underline = false;
                for c in chars {
                    if c == char_set::UNDERLINE {
                        if after_underline == true {
                            return Err(Self::Err::DanglingUnderline);
                        }
                        after_underline = true;
                    } else if char_set::is_letter_or_digit(&c) == true {
                        after_underline = false;
                    } else {
                        return Err(Self::Err::InvalidChar(c));
                    }
                    id.push(c);
                }
                match after_underline {
                    true => Err(Self::Err::DanglingUnderline),
                    false => Ok(Self::Basic(id)),
                }
            }
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic(id) => write!(f, "{}", id),
            Self::Extended(id) => write!(f, "\\{}\\", id.replace('\\', r#"\\"#)),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl ToColor for Identifier {
    fn to_color(&self) -> ColoredString {
        self.to_string().normal()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn from_str() {
        assert_eq!(
            Identifier::from_str("top_level"),
            Ok(Identifier::Basic(String::from("top_level")))
        );
        assert_eq!(
            Identifier::from_str("\\my \\\\ ent\\"),
            Ok(Identifier::Extended(String::from("my \\ ent")))
        );
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
        assert_eq!(
            Identifier::from_str("9lives"),
            Err(IdentifierError::InvalidFirstChar('9'))
        );
        assert_eq!(
            Identifier::from_str("a__b"),
            Err(IdentifierError::DanglingUnderline)
        );
        assert_eq!(
            Identifier::from_str("clk_"),
            Err(IdentifierError::DanglingUnderline)
        );
        assert_eq!(
            Identifier::from_str("alu-2"),
            Err(IdentifierError::InvalidChar('-'))
        );
        assert_eq!(
            Identifier::from_str("\\abc\\d"),
            Err(IdentifierError::CharsAfterDelimiter(String::from("d")))
        );
    }

    #[test]
    fn equality_and_len() {
        let id0 = Identifier::Basic("fa".to_owned());
        let id1 = Identifier::Basic("Fa".to_owned());
        assert_eq!(id0, id1);

        let id2 = Identifier::Extended("fa".to_owned());
        assert_ne!(id0, id2);
        assert_ne!(id2, Identifier::Extended("FA".to_owned()));

        assert_eq!(id0.len(), 2);
        assert_eq!(Identifier::Extended("a\\b".to_owned()).len(), 6);
        assert_eq!(
            Identifier::Extended("a\\b".to_owned()).to_string(),
            "\\a\\\\b\\"
        );
    }

    #[test]
    fn hash_ignores_basic_case() {
        let mut set = HashSet::new();
        set.insert(Identifier::Basic("DATA_IN".to_owned()));
        assert_eq!(set.contains(&Identifier::Basic("data_in".to_owned())), true);
        assert_eq!(set.contains(&Identifier::Extended("data_in".to_owned())), false);
    }
}
