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

use super::super::lexer::TrainCar;
use colored::ColoredString;
use std::fmt::Display;
use std::str::FromStr;

pub mod delimiter;
pub mod identifier;
pub mod keyword;
pub mod literal;
pub mod tokenizer;

use super::highlight::*;

use literal::{AbstLiteral, BaseSpec, BitStrLiteral, Character};
use tokenizer::char_set;

pub type Identifier = identifier::Identifier;
pub type Keyword = keyword::Keyword;
pub type Delimiter = delimiter::Delimiter;
pub type VhdlTokenizer = tokenizer::VhdlTokenizer;

pub trait ToColor: Display {
    fn to_color(&self) -> ColoredString;
}

#[derive(Debug, PartialEq, Clone)]
pub enum VhdlToken {
    Identifier(Identifier), // (String) ...can be general or extended (case-sensitive) identifier
    AbstLiteral(AbstLiteral), // (String)
    CharLiteral(Character), // (String)
    StrLiteral(String),     // (String)
    BitStrLiteral(BitStrLiteral), // (String)
    Keyword(Keyword),
    Delimiter(Delimiter),
}

impl ToColor for VhdlToken {
    fn to_color(&self) -> ColoredString {
        match &self {
            Self::Identifier(i) => i.to_color(),
            Self::AbstLiteral(a) => a.to_color(),
            Self::CharLiteral(c) => c.to_color(),
            Self::StrLiteral(_) => color(&self.to_string(), STRINGS),
            Self::BitStrLiteral(b) => b.to_color(),
            Self::Keyword(k) => k.to_color(),
            Self::Delimiter(d) => d.to_color(),
        }
    }
}

impl Display for VhdlToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(id) => write!(f, "{}", id),
            Self::AbstLiteral(a) => write!(f, "{}", a),
            Self::CharLiteral(c) => write!(f, "{}", c),
            Self::StrLiteral(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Self::BitStrLiteral(b) => write!(f, "{}", b),
            Self::Keyword(kw) => write!(f, "{}", kw),
            Self::Delimiter(d) => write!(f, "{}", d),
        }
    }
}

impl VhdlToken {
    /// Captures VHDL Tokens: keywords, basic identifiers, and regular bit string literals.
    ///
    /// Assumes the first `letter` char was the last char consumed before the function call.
    pub fn consume_word(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
        c0: char,
    ) -> Result<VhdlToken, String> {
        let mut word = Self::consume_value_pattern(train, Some(c0), char_set::is_letter_or_digit)?;
        if let Some(kw) = Keyword::match_keyword(&word) {
            return Ok(VhdlToken::Keyword(kw));
        }
        // * bit string literal: the word is a base specifier directly followed by a double quote
        if train.peek() == Some(&char_set::DOUBLE_QUOTE) && BaseSpec::from_str(&word).is_ok() {
            train.consume();
            word.push(char_set::DOUBLE_QUOTE);
            return Self::consume_bit_str_literal(train, word);
        }
        Ok(VhdlToken::Identifier(Identifier::Basic(word)))
    }

    /// Captures VHDL Tokens that begin with `integer` production rule:
    /// decimal literal, based_literal, and bit_string_literals.
    ///
    /// Assumes the incoming char `c0` was last char consumed as it a digit `0..=9`.
    pub fn consume_numeric(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
        c0: char,
    ) -> Result<VhdlToken, String> {
        let mut number = Self::consume_value_pattern(train, Some(c0), char_set::is_digit)?;
        // * based_literal
        if train.peek() == Some(&char_set::HASH) {
            train.consume();
            number.push(char_set::HASH);
            number.push_str(&Self::consume_value_pattern(
                train,
                None,
                char_set::is_letter_or_digit,
            )?);
            if train.peek() == Some(&char_set::DOT) {
                train.consume();
                number.push(char_set::DOT);
                number.push_str(&Self::consume_value_pattern(
                    train,
                    None,
                    char_set::is_letter_or_digit,
                )?);
            }
            match train.consume() {
                Some(char_set::HASH) => number.push(char_set::HASH),
                _ => return Err(String::from("expecting closing '#' for based literal")),
            }
            number.push_str(&Self::consume_exponent(train)?);
            return Ok(VhdlToken::AbstLiteral(AbstLiteral::Based(number)));
        }
        // * bit string literal with an explicit width
        if let Some(base_spec) = Self::peek_base_spec(train) {
            for _ in 0..=base_spec.len() {
                train.consume();
            }
            number.push_str(&base_spec);
            number.push(char_set::DOUBLE_QUOTE);
            return Self::consume_bit_str_literal(train, number);
        }
        // * decimal_literal
        if train.peek() == Some(&char_set::DOT)
            && train.peek_nth(1).map_or(false, |c| char_set::is_digit(&c))
        {
            train.consume();
            number.push(char_set::DOT);
            number.push_str(&Self::consume_value_pattern(train, None, char_set::is_digit)?);
        }
        number.push_str(&Self::consume_exponent(train)?);
        Ok(VhdlToken::AbstLiteral(AbstLiteral::Decimal(number)))
    }

    /// Looks ahead for a base specifier that is directly followed by a double quote.
    fn peek_base_spec(train: &TrainCar<impl Iterator<Item = char> + Clone>) -> Option<String> {
        let mut base_spec = String::new();
        let mut n = 0;
        while let Some(c) = train.peek_nth(n) {
            if char_set::is_letter(&c) == false {
                break;
            }
            base_spec.push(c);
            n += 1;
        }
        match train.peek_nth(n) == Some(char_set::DOUBLE_QUOTE)
            && BaseSpec::from_str(&base_spec).is_ok()
        {
            true => Some(base_spec),
            false => None,
        }
    }

    /// Captures the remaining characters for a bit string literal.
    ///
    /// Assumes the integer, base_specifier, and first " char are already consumed
    /// and moved as `s0`. A bit string literal is allowed to have no characters
    /// within the " ".
    fn consume_bit_str_literal(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
        s0: String,
    ) -> Result<VhdlToken, String> {
        let mut literal = s0;
        while let Some(c) = train.consume() {
            if char_set::is_newline(&c) == true {
                break;
            }
            literal.push(c);
            if c == char_set::DOUBLE_QUOTE {
                return Ok(VhdlToken::BitStrLiteral(BitStrLiteral(literal)));
            }
        }
        Err(String::from("unterminated bit string literal"))
    }

    /// Captures an extended identifier token.
    ///
    /// Errors if the identifier is empty.
    pub fn consume_extended_identifier(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
    ) -> Result<VhdlToken, String> {
        let id = Self::consume_literal(train, &char_set::BACKSLASH, "extended identifier")?;
        match id.is_empty() {
            true => Err(String::from("extended identifier cannot be empty")),
            false => Ok(VhdlToken::Identifier(Identifier::Extended(id))),
        }
    }

    /// Captures a character literal according to VHDL-2018 LRM p231.
    ///
    /// Assumes the first single quote '\'' was the last char consumed.
    pub fn consume_char_lit(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
    ) -> Result<VhdlToken, String> {
        let c = match train.consume() {
            Some(c) if char_set::is_newline(&c) == false => c,
            _ => return Err(String::from("unterminated character literal")),
        };
        match train.consume() {
            Some(char_set::SINGLE_QUOTE) => Ok(VhdlToken::CharLiteral(Character(c.to_string()))),
            _ => Err(String::from("unterminated character literal")),
        }
    }

    /// Captures a string literal.
    ///
    /// Assumes the first double quote '\"' was the last char consumed before entering the function.
    pub fn consume_str_lit(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
    ) -> Result<VhdlToken, String> {
        let value = Self::consume_literal(train, &char_set::DOUBLE_QUOTE, "string literal")?;
        Ok(VhdlToken::StrLiteral(value))
    }

    /// Skips a single-line comment (all characters after a `--` up until end-of-line).
    ///
    /// Assumes the opening '-' was the last char consumed before entering the function.
    pub fn skip_comment(train: &mut TrainCar<impl Iterator<Item = char> + Clone>) {
        while let Some(c) = train.consume() {
            if char_set::is_newline(&c) == true {
                break;
            }
        }
    }

    /// Captures the longest VHDL delimiter that begins with `c0`.
    pub fn collect_delimiter(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
        c0: char,
    ) -> Result<VhdlToken, String> {
        for width in (1..=Delimiter::MAX_WIDTH).rev() {
            let mut delim = String::from(c0);
            for i in 0..width - 1 {
                match train.peek_nth(i) {
                    Some(c) => delim.push(c),
                    None => break,
                }
            }
            if delim.chars().count() != width {
                continue;
            }
            if let Some(d) = Delimiter::transform(&delim) {
                for _ in 1..width {
                    train.consume();
                }
                return Ok(VhdlToken::Delimiter(d));
            }
        }
        Err(format!("invalid character '{}'", c0))
    }

    /// Captures the generic pattern production rule by passing a fn as `eval` to compare.
    ///
    /// This function allows for an empty result to be returned as `Ok`.
    /// - A ::= A { \[ underline ] A }
    fn consume_value_pattern(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
        c0: Option<char>,
        eval: fn(&char) -> bool,
    ) -> Result<String, String> {
        let mut car = match c0 {
            Some(c) => String::from(c),
            None => String::new(),
        };
        while let Some(&c) = train.peek() {
            if eval(&c) == true {
                train.consume();
                car.push(c);
            } else if c == char_set::UNDERLINE {
                if car.is_empty() == true {
                    return Err(String::from("expecting a letter or digit before underline"));
                }
                train.consume();
                car.push(c);
                // a letter or digit must follow the underline
                match train.consume() {
                    Some(c_next) if eval(&c_next) == true => car.push(c_next),
                    _ => {
                        return Err(String::from(
                            "expecting a letter or digit to follow underline",
                        ))
                    }
                }
            } else {
                break;
            }
        }
        Ok(car)
    }

    /// Captures an exponent, if one is next in the stream.
    ///
    /// - exponent ::= E \[ + ] integer | E – integer
    fn consume_exponent(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
    ) -> Result<String, String> {
        let is_expon = match train.peek_nth(0) {
            Some('e') | Some('E') => match train.peek_nth(1) {
                Some(char_set::PLUS) | Some(char_set::DASH) => {
                    train.peek_nth(2).map_or(false, |c| char_set::is_digit(&c))
                }
                Some(c) => char_set::is_digit(&c),
                None => false,
            },
            _ => false,
        };
        if is_expon == false {
            return Ok(String::new());
        }
        let mut expon = String::new();
        if let Some(e) = train.consume() {
            expon.push(e);
        }
        if let Some(&sign) = train.peek() {
            if sign == char_set::PLUS || sign == char_set::DASH {
                train.consume();
                expon.push(sign);
            }
        }
        expon.push_str(&Self::consume_value_pattern(train, None, char_set::is_digit)?);
        Ok(expon)
    }

    /// Walks through the stream to gather a `String` literal until finding the
    /// exiting character `br`.
    ///
    /// An escape is allowed by double placing the `br`, i.e. """hello"" world".
    /// A literal cannot span lines.
    fn consume_literal(
        train: &mut TrainCar<impl Iterator<Item = char> + Clone>,
        br: &char,
        what: &str,
    ) -> Result<String, String> {
        let mut result = String::new();
        while let Some(c) = train.consume() {
            if &c == br {
                // detect escape sequence
                if train.peek() == Some(br) {
                    train.consume();
                } else {
                    return Ok(result);
                }
            } else if char_set::is_newline(&c) == true {
                break;
            }
            result.push(c);
        }
        Err(format!("unterminated {}", what))
    }
}

impl VhdlToken {
    /// Checks if the element is a particular keyword `kw`.
    pub fn check_keyword(&self, kw: &Keyword) -> bool {
        match self {
            VhdlToken::Keyword(r) => r == kw,
            _ => false,
        }
    }

    /// Accesses the underlying `Keyword`, if one exists.
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            VhdlToken::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Accesses the underlying `Identifier`, if one exists.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            VhdlToken::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Checks if the element is a particular delimiter `d`.
    pub fn check_delimiter(&self, d: &Delimiter) -> bool {
        match self {
            VhdlToken::Delimiter(r) => r == d,
            _ => false,
        }
    }

    /// Accesses the underlying `Delimiter`, if one exists.
    pub fn as_delimiter(&self) -> Option<&Delimiter> {
        match self {
            VhdlToken::Delimiter(d) => Some(d),
            _ => None,
        }
    }
}
