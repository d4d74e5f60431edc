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

pub mod char_set {
    pub const DOUBLE_QUOTE: char = '\"';
    pub const BACKSLASH: char = '\\';
    pub const DASH: char = '-';
    pub const UNDERLINE: char = '_';
    pub const SINGLE_QUOTE: char = '\'';
    pub const DOT: char = '.';
    pub const HASH: char = '#';
    pub const PLUS: char = '+';
    pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

    /// Checks if `c` is a digit according to VHDL-2008 LRM p225.
    pub fn is_digit(c: &char) -> bool {
        match c {
            '0'..='9' => true,
            _ => false,
        }
    }

    /// Checks if `c` is an upper-case letter according to VHDL-2019 LRM p257.
    /// Set: `ABCDEFGHIJKLMNOPQRSTUVWXYZÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞ`
    pub fn is_upper(c: &char) -> bool {
        match c {
            '\u{00D7}' => false, // reject multiplication sign
            'A'..='Z' | 'À'..='Þ' => true,
            _ => false,
        }
    }

    /// Checks if `c` is a lower-case letter according to VHDL-2019 LRM p257.
    /// Set: `abcdefghijklmnopqrstuvwxyzßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ`
    pub fn is_lower(c: &char) -> bool {
        match c {
            '\u{00F7}' => false, // reject division sign
            'a'..='z' | 'ß'..='ÿ' => true,
            _ => false,
        }
    }

    /// Checks if `c` is a letter according to VHDL-2019 LRM p257.
    pub fn is_letter(c: &char) -> bool {
        is_lower(&c) || is_upper(&c)
    }

    /// Checks if `c` is a digit | letter according to VHDL-2008 LRM p229.
    pub fn is_letter_or_digit(c: &char) -> bool {
        is_digit(&c) || is_letter(&c)
    }

    /// Checks if `c` ends a line (lf, cr, vt).
    pub fn is_newline(c: &char) -> bool {
        c == &'\u{000A}' || c == &'\u{000D}' || c == &'\u{000B}'
    }

    /// Checks if the character is a seperator according to VHDL-2019 LRM p259.
    pub fn is_separator(c: &char) -> bool {
        // whitespace: space, nbsp
        c == &'\u{0020}' || c == &'\u{00A0}' ||
        // format-effectors: ht (\t), vt, cr (\r), lf (\n), ff
        c == &'\u{0009}' || c == &'\u{000B}' || c == &'\u{000D}' || c == &'\u{000A}' || c == &'\u{000C}'
    }
}

use super::super::super::lexer::{Token, TrainCar};
use super::super::error::{LexError, VhdlError};
use super::super::token::{Delimiter, VhdlToken};
use std::str::FromStr;

/// The complete token stream of one VHDL source text.
///
/// Comments are dropped during scanning so the stream only holds the tokens
/// the interface parser needs to inspect.
#[derive(Debug, PartialEq)]
pub struct VhdlTokenizer {
    tokens: Vec<Token<VhdlToken>>,
}

impl FromStr for VhdlTokenizer {
    type Err = VhdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            tokens: Self::tokenize(s)?,
        })
    }
}

impl VhdlTokenizer {
    /// Scans the source text `s` into its list of tokens.
    ///
    /// Stops at the first malformed token. A leading byte-order mark is not
    /// part of the text.
    pub fn tokenize(s: &str) -> Result<Vec<Token<VhdlToken>>, VhdlError> {
        let s = s.strip_prefix(char_set::BYTE_ORDER_MARK).unwrap_or(s);
        let mut train = TrainCar::new(s.chars());
        let mut tokens: Vec<Token<VhdlToken>> = Vec::new();
        // consume every character (lexical analysis)
        while let Some(c) = train.consume() {
            // skip over whitespace
            if char_set::is_separator(&c) {
                continue;
            }
            let tk_loc = train.locate().clone();
            let result = if char_set::is_letter(&c) {
                // collect general identifier, keyword, or bit string literal
                VhdlToken::consume_word(&mut train, c)
            } else if c == char_set::BACKSLASH {
                VhdlToken::consume_extended_identifier(&mut train)
            } else if c == char_set::DOUBLE_QUOTE {
                VhdlToken::consume_str_lit(&mut train)
            } else if c == char_set::SINGLE_QUOTE && Self::opens_char_lit(tokens.last()) {
                VhdlToken::consume_char_lit(&mut train)
            } else if char_set::is_digit(&c) {
                // collect decimal literal (or bit string literal or based literal)
                VhdlToken::consume_numeric(&mut train, c)
            } else if c == char_set::DASH && train.peek() == Some(&char_set::DASH) {
                VhdlToken::skip_comment(&mut train);
                continue;
            } else {
                VhdlToken::collect_delimiter(&mut train, c)
            };
            match result {
                Ok(tk) => tokens.push(Token::new(tk, tk_loc)),
                Err(reason) => return Err(LexError::new(&reason, tk_loc).into()),
            }
        }
        Ok(tokens)
    }

    /// Decides if a `'` begins a character literal instead of an attribute tick,
    /// given the token captured before it.
    fn opens_char_lit(prev: Option<&Token<VhdlToken>>) -> bool {
        match prev.map(|t| t.as_type()) {
            None => true,
            Some(VhdlToken::Delimiter(d)) => match d {
                Delimiter::ParenR | Delimiter::BrackR => false,
                _ => true,
            },
            Some(VhdlToken::Keyword(_)) => true,
            Some(_) => false,
        }
    }

    pub fn into_tokens(self) -> Vec<Token<VhdlToken>> {
        self.tokens
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::lang::lexer::Position;
    use crate::core::lang::vhdl::token::literal::{AbstLiteral, BitStrLiteral, Character};
    use crate::core::lang::vhdl::token::{Identifier, Keyword};

    fn types(s: &str) -> Vec<VhdlToken> {
        VhdlTokenizer::tokenize(s)
            .unwrap()
            .into_iter()
            .map(|t| t.take())
            .collect()
    }

    #[test]
    fn is_separator() {
        let c = ' '; // space
        assert_eq!(char_set::is_separator(&c), true);
        let c = '\u{00A0}'; // nbsp
        assert_eq!(char_set::is_separator(&c), true);
        let c = '\t'; // horizontal tab
        assert_eq!(char_set::is_separator(&c), true);
        let c = '\n'; // new-line
        assert_eq!(char_set::is_separator(&c), true);
        let c = 'c'; // negative case: ascii char
        assert_eq!(char_set::is_separator(&c), false);
    }

    #[test]
    fn lex_port_line() {
        let s = "data_in : IN std_logic_vector(7 DOWNTO 0) := (others => '0');";
        assert_eq!(
            types(s),
            vec![
                VhdlToken::Identifier(Identifier::Basic("data_in".to_owned())),
                VhdlToken::Delimiter(Delimiter::Colon),
                VhdlToken::Keyword(Keyword::In),
                VhdlToken::Identifier(Identifier::Basic("std_logic_vector".to_owned())),
                VhdlToken::Delimiter(Delimiter::ParenL),
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("7".to_owned())),
                VhdlToken::Keyword(Keyword::Downto),
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("0".to_owned())),
                VhdlToken::Delimiter(Delimiter::ParenR),
                VhdlToken::Delimiter(Delimiter::VarAssign),
                VhdlToken::Delimiter(Delimiter::ParenL),
                VhdlToken::Keyword(Keyword::Others),
                VhdlToken::Delimiter(Delimiter::Arrow),
                VhdlToken::CharLiteral(Character("0".to_owned())),
                VhdlToken::Delimiter(Delimiter::ParenR),
                VhdlToken::Delimiter(Delimiter::Terminator),
            ]
        );
    }

    #[test]
    fn comments_are_discarded() {
        let s = "\
-- leading comment
entity foo is -- trailing comment
end;";
        assert_eq!(
            types(s),
            vec![
                VhdlToken::Keyword(Keyword::Entity),
                VhdlToken::Identifier(Identifier::Basic("foo".to_owned())),
                VhdlToken::Keyword(Keyword::Is),
                VhdlToken::Keyword(Keyword::End),
                VhdlToken::Delimiter(Delimiter::Terminator),
            ]
        );
    }

    #[test]
    fn single_quote_as_delimiter() {
        assert_eq!(
            types("x'length"),
            vec![
                VhdlToken::Identifier(Identifier::Basic("x".to_owned())),
                VhdlToken::Delimiter(Delimiter::SingleQuote),
                VhdlToken::Identifier(Identifier::Basic("length".to_owned())),
            ]
        );
        assert_eq!(
            types("(a)'high"),
            vec![
                VhdlToken::Delimiter(Delimiter::ParenL),
                VhdlToken::Identifier(Identifier::Basic("a".to_owned())),
                VhdlToken::Delimiter(Delimiter::ParenR),
                VhdlToken::Delimiter(Delimiter::SingleQuote),
                VhdlToken::Identifier(Identifier::Basic("high".to_owned())),
            ]
        );
        assert_eq!(
            types("'1'"),
            vec![VhdlToken::CharLiteral(Character("1".to_owned()))]
        );
    }

    #[test]
    fn lex_numeric() {
        assert_eq!(
            types("1_000 0.5 6.02E+23 16#FF# 2#1010.01#e3"),
            vec![
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("1_000".to_owned())),
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("0.5".to_owned())),
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("6.02E+23".to_owned())),
                VhdlToken::AbstLiteral(AbstLiteral::Based("16#FF#".to_owned())),
                VhdlToken::AbstLiteral(AbstLiteral::Based("2#1010.01#e3".to_owned())),
            ]
        );
        // a unit name written directly after the number is its own token
        assert_eq!(
            types("10ns"),
            vec![
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("10".to_owned())),
                VhdlToken::Identifier(Identifier::Basic("ns".to_owned())),
            ]
        );
    }

    #[test]
    fn lex_bit_str() {
        assert_eq!(
            types("x\"FF\" 8b\"1010\" UX\"0_F\""),
            vec![
                VhdlToken::BitStrLiteral(BitStrLiteral("x\"FF\"".to_owned())),
                VhdlToken::BitStrLiteral(BitStrLiteral("8b\"1010\"".to_owned())),
                VhdlToken::BitStrLiteral(BitStrLiteral("UX\"0_F\"".to_owned())),
            ]
        );
    }

    #[test]
    fn lex_strings_and_extended() {
        assert_eq!(
            types("\"say \"\"hi\"\"\" \\odd name\\"),
            vec![
                VhdlToken::StrLiteral("say \"hi\"".to_owned()),
                VhdlToken::Identifier(Identifier::Extended("odd name".to_owned())),
            ]
        );
    }

    #[test]
    fn lex_delimiters_greedy() {
        assert_eq!(
            types("<=> ?/= => <= :="),
            vec![
                VhdlToken::Delimiter(Delimiter::SigAssoc),
                VhdlToken::Delimiter(Delimiter::MatchNE),
                VhdlToken::Delimiter(Delimiter::Arrow),
                VhdlToken::Delimiter(Delimiter::SigAssign),
                VhdlToken::Delimiter(Delimiter::VarAssign),
            ]
        );
    }

    #[test]
    fn locate_tokens() {
        let tokens = VhdlTokenizer::tokenize("entity foo is\n  port(").unwrap();
        let locs: Vec<Position> = tokens.iter().map(|t| t.locate().clone()).collect();
        assert_eq!(
            locs,
            vec![
                Position::place(1, 1),
                Position::place(1, 8),
                Position::place(1, 12),
                Position::place(2, 3),
                Position::place(2, 7),
            ]
        );
    }

    #[test]
    fn lex_errors() {
        let e = VhdlTokenizer::tokenize("x := \"open").unwrap_err();
        assert_eq!(
            e,
            VhdlError::Lex(LexError::new(
                "unterminated string literal",
                Position::place(1, 6)
            ))
        );
        let e = VhdlTokenizer::tokenize("a :=\n'0").unwrap_err();
        assert_eq!(
            e,
            VhdlError::Lex(LexError::new(
                "unterminated character literal",
                Position::place(2, 1)
            ))
        );
        let e = VhdlTokenizer::tokenize("\\never closed").unwrap_err();
        assert_eq!(e.locate(), &Position::place(1, 1));
        let e = VhdlTokenizer::tokenize("a $ b").unwrap_err();
        assert_eq!(
            e,
            VhdlError::Lex(LexError::new(
                "invalid character '$'",
                Position::place(1, 3)
            ))
        );
    }

    #[test]
    fn multi_line_matches_single_line() {
        let one = types("port (a, b : in std_logic; y : out std_logic);");
        let many = types("port (\n    a,\n    b : in  std_logic;\n    y : out std_logic\n);");
        assert_eq!(one, many);
    }

    #[test]
    fn from_str() {
        let tokens = VhdlTokenizer::from_str("end entity;").unwrap().into_tokens();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn leading_byte_order_mark() {
        let plain = VhdlTokenizer::tokenize("entity e is port (a : in bit); end;").unwrap();
        let marked = VhdlTokenizer::tokenize("\u{FEFF}entity e is port (a : in bit); end;").unwrap();
        assert_eq!(marked, plain);
        assert_eq!(marked[0].locate(), &Position::place(1, 1));
        // only a leading mark is skipped
        assert_eq!(
            VhdlTokenizer::tokenize("entity \u{FEFF}e").unwrap_err(),
            VhdlError::from(LexError::new("invalid character '\u{feff}'", Position::place(1, 8)))
        );
    }
}
