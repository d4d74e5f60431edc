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

// @note: interface_signal_declaration ::= [signal] identifier_list : [ mode ] subtype_indication [ bus ] [ := static_expression ]
// @note: identifier_list ::= identifier { , identifier }

use super::highlight::*;
use super::token::{Delimiter, Identifier, Keyword, ToColor, VhdlToken};
use colored::ColoredString;
use serde_derive::Serialize;
use std::fmt::Display;

#[derive(Debug, PartialEq)]
enum ColorTone {
    Color(ColoredString),
    Bland(String),
}

impl ColorTone {
    /// Accesses the text without any coloring.
    fn as_plain(&self) -> &str {
        match &self {
            Self::Color(c) => &**c,
            Self::Bland(s) => s.as_ref(),
        }
    }
}

impl Display for ColorTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Color(c) => write!(f, "{}", c),
            Self::Bland(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ColorVec(Vec<ColorTone>);

impl Display for ColorVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for item in &self.0 {
            write!(f, "{}", item)?
        }
        Ok(())
    }
}

impl ColorVec {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push_str(&mut self, s: &str) -> () {
        self.0.push(ColorTone::Bland(String::from(s)));
    }

    pub fn push_color(&mut self, c: ColoredString) -> () {
        self.0.push(ColorTone::Color(c));
    }

    pub fn append(&mut self, mut cv: ColorVec) -> () {
        self.0.append(&mut cv.0);
    }

    pub fn push_whitespace(&mut self, count: usize) -> () {
        self.0
            .push(ColorTone::Bland(format!("{:<width$}", "", width = count)));
    }

    /// Writes the text without any coloring.
    pub fn to_plain_string(&self) -> String {
        self.0.iter().map(|t| t.as_plain()).collect()
    }
}

/// Checks if `next` is a `+` or `-` sign rather than an adding operator.
///
/// A sign follows a keyword or any delimiter except a closing parenthesis.
fn is_sign(prev: &VhdlToken, next: &VhdlToken) -> bool {
    match next.as_delimiter() {
        Some(Delimiter::Plus) | Some(Delimiter::Dash) => {
            prev.as_keyword().is_some()
                || prev.as_delimiter().map_or(false, |d| d != &Delimiter::ParenR)
        }
        _ => false,
    }
}

/// Checks if a space separates `prev` and `next` when the tokens are written
/// back out as text.
fn is_spaced(prev: &VhdlToken, next: &VhdlToken) -> bool {
    if let Some(d) = prev.as_delimiter() {
        if d.binds_right() == true {
            return false;
        }
    }
    if let Some(d) = next.as_delimiter() {
        // a sign keeps the space of whatever precedes it
        if d.binds_left() == true && is_sign(prev, next) == false {
            return false;
        }
    }
    true
}

/// Rebuilds the text of a run of tokens.
///
/// Keywords are written in lower case while identifiers keep their casing.
pub fn tokens_to_string(tokens: &[VhdlToken]) -> String {
    let mut result = String::new();
    let mut prev: Option<&VhdlToken> = None;
    for t in tokens {
        if let Some(p) = prev {
            if is_spaced(p, t) == true {
                result.push(' ');
            }
        }
        result.push_str(&t.to_string());
        prev = Some(t);
    }
    result
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

impl Direction {
    /// Interprets a port mode keyword.
    pub fn from_keyword(kw: &Keyword) -> Option<Self> {
        Some(match kw {
            Keyword::In => Self::In,
            Keyword::Out => Self::Out,
            Keyword::Inout => Self::InOut,
            Keyword::Buffer => Self::Buffer,
            Keyword::Linkage => Self::Linkage,
            _ => return None,
        })
    }

    pub fn as_keyword(&self) -> Keyword {
        match self {
            Self::In => Keyword::In,
            Self::Out => Keyword::Out,
            Self::InOut => Keyword::Inout,
            Self::Buffer => Keyword::Buffer,
            Self::Linkage => Keyword::Linkage,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenericClass {
    Constant,
    Type,
    Subprogram,
    Package,
}

impl GenericClass {
    /// Checks if the generic is kept as unparsed declaration text.
    pub fn is_opaque(&self) -> bool {
        self != &Self::Constant
    }
}

impl Display for GenericClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Constant => "constant",
                Self::Type => "type",
                Self::Subprogram => "subprogram",
                Self::Package => "package",
            }
        )
    }
}

/// A single generic of an entity's generic clause.
///
/// For opaque classes, `type_desc` holds the entire declaration text.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Generic {
    name: Identifier,
    #[serde(rename = "type")]
    type_desc: String,
    default: Option<String>,
    class: GenericClass,
}

impl Generic {
    pub fn new(
        name: Identifier,
        type_desc: String,
        default: Option<String>,
        class: GenericClass,
    ) -> Self {
        Self {
            name: name,
            type_desc: type_desc,
            default: default,
            class: class,
        }
    }

    pub fn get_name(&self) -> &Identifier {
        &self.name
    }

    pub fn get_type(&self) -> &str {
        &self.type_desc
    }

    pub fn get_default(&self) -> Option<&String> {
        self.default.as_ref()
    }

    pub fn get_class(&self) -> &GenericClass {
        &self.class
    }

    /// Creates the line written inside a generic clause.
    ///
    /// Note: `offset` is used for padding after the identifier string and before ':'.
    pub fn into_interface_string(&self, offset: usize) -> ColorVec {
        let mut result = ColorVec::new();
        if self.class.is_opaque() == true {
            result.push_str(&self.type_desc);
            return result;
        }
        result.push_color(color(&self.name.to_string(), SIGNAL_DEC_IDENTIFIER));
        result.push_whitespace(offset - self.name.len() + 1);
        result.push_color(Delimiter::Colon.to_color());
        result.push_str(" ");
        result.push_color(color(&self.type_desc, DATA_TYPE));
        if let Some(expr) = &self.default {
            result.push_str(" ");
            result.push_color(Delimiter::VarAssign.to_color());
            result.push_str(" ");
            result.push_str(expr);
        }
        result
    }
}

/// A single port of an entity's port clause.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Port {
    name: Identifier,
    direction: Direction,
    #[serde(rename = "type")]
    type_desc: String,
    default: Option<String>,
}

impl Port {
    pub fn new(
        name: Identifier,
        direction: Direction,
        type_desc: String,
        default: Option<String>,
    ) -> Self {
        Self {
            name: name,
            direction: direction,
            type_desc: type_desc,
            default: default,
        }
    }

    pub fn get_name(&self) -> &Identifier {
        &self.name
    }

    pub fn get_direction(&self) -> &Direction {
        &self.direction
    }

    pub fn get_type(&self) -> &str {
        &self.type_desc
    }

    pub fn get_default(&self) -> Option<&String> {
        self.default.as_ref()
    }

    /// Creates the line written inside a port clause.
    pub fn into_interface_string(&self, offset: usize) -> ColorVec {
        let mut result = ColorVec::new();
        result.push_color(color(&self.name.to_string(), SIGNAL_DEC_IDENTIFIER));
        result.push_whitespace(offset - self.name.len() + 1);
        result.push_color(Delimiter::Colon.to_color());
        result.push_str(" ");
        result.push_color(self.direction.as_keyword().to_color());
        result.push_str(" ");
        result.push_color(color(&self.type_desc, DATA_TYPE));
        if let Some(expr) = &self.default {
            result.push_str(" ");
            result.push_color(Delimiter::VarAssign.to_color());
            result.push_str(" ");
            result.push_str(expr);
        }
        result
    }
}

/// Determines the length of the longest identifier.
pub fn longest_identifier<'a>(names: impl Iterator<Item = &'a Identifier>) -> usize {
    names.map(|n| n.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::lang::vhdl::token::VhdlTokenizer;

    fn join(s: &str) -> String {
        let tokens: Vec<VhdlToken> = VhdlTokenizer::tokenize(s)
            .unwrap()
            .into_iter()
            .map(|t| t.take())
            .collect();
        tokens_to_string(&tokens)
    }

    #[test]
    fn canonical_spacing() {
        assert_eq!(
            join("std_logic_vector ( WIDTH - 1 DOWNTO 0 )"),
            "std_logic_vector(WIDTH-1 downto 0)"
        );
        assert_eq!(join("( OTHERS=>'0' )"), "(others => '0')");
        assert_eq!(join("natural range 0 to 2**N - 1"), "natural range 0 to 2**N-1");
        assert_eq!(join("ieee.numeric_std.unsigned(x'length-1 downto 0)"), "ieee.numeric_std.unsigned(x'length-1 downto 0)");
        assert_eq!(join("foo( a , b )"), "foo(a, b)");
        assert_eq!(join("\"ab\" & x\"F\""), "\"ab\"&x\"F\"");
    }

    #[test]
    fn signs_keep_leading_space() {
        assert_eq!(join("integer range -8 to 7"), "integer range -8 to 7");
        assert_eq!(join("integer range - 8 to + 7"), "integer range -8 to +7");
        assert_eq!(join("foo( -1 , - 2 )"), "foo(-1, -2)");
        assert_eq!(join("x := - 1"), "x := -1");
        assert_eq!(join("(others => -1)"), "(others => -1)");
        assert_eq!(join("2 * - 1"), "2*-1");
        assert_eq!(join("WIDTH - 1"), "WIDTH-1");
        assert_eq!(join("(a) - 1"), "(a)-1");
    }

    #[test]
    fn direction_keywords() {
        assert_eq!(Direction::from_keyword(&Keyword::Inout), Some(Direction::InOut));
        assert_eq!(Direction::from_keyword(&Keyword::Bus), None);
        assert_eq!(Direction::Linkage.to_string(), "linkage");
        assert_eq!(
            serde_json::to_string(&Direction::InOut).unwrap(),
            "\"inout\""
        );
    }

    #[test]
    fn interface_lines() {
        let port = Port::new(
            Identifier::Basic("clk".to_owned()),
            Direction::In,
            "std_logic".to_owned(),
            None,
        );
        assert_eq!(
            port.into_interface_string(6).to_plain_string(),
            "clk    : in std_logic"
        );
        let generic = Generic::new(
            Identifier::Basic("WIDTH".to_owned()),
            "positive".to_owned(),
            Some("8".to_owned()),
            GenericClass::Constant,
        );
        assert_eq!(
            generic.into_interface_string(5).to_plain_string(),
            "WIDTH : positive := 8"
        );
    }

    #[test]
    fn longest() {
        let names = vec![
            Identifier::Basic("a".to_owned()),
            Identifier::Basic("data_in".to_owned()),
        ];
        assert_eq!(longest_identifier(names.iter()), 7);
        assert_eq!(longest_identifier(Vec::<Identifier>::new().iter()), 0);
    }
}
