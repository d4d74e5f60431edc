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

use crate::core::lang::vhdl::token::ToColor;
use colored::ColoredString;
use colored::Colorize;
use std::fmt::Display;

/// Reserved words that matter when delimiting an entity header.
///
/// Every other reserved word is lexed as an identifier; the interface parser
/// only ever copies those into opaque type text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    // logical and arithmetic operators
    Abs,
    And,
    Mod,
    Nand,
    Nor,
    Not,
    Or,
    Rem,
    Rol,
    Ror,
    Sla,
    Sll,
    Sra,
    Srl,
    Xnor,
    Xor,
    // interface declarations
    Entity,
    Is,
    Generic,
    Port,
    In,
    Out,
    Inout,
    Buffer,
    Linkage,
    End,
    Begin,
    Signal,
    Constant,
    Variable,
    File,
    Bus,
    Type,
    Subtype,
    Function,
    Procedure,
    Impure,
    Pure,
    Package,
    New,
    Return,
    // subtype indications and expressions
    Downto,
    To,
    Range,
    Others,
    Open,
    Null,
    Array,
    Of,
    // constructs with their own `end`
    Architecture,
    Block,
    Case,
    Component,
    For,
    Generate,
    If,
    Loop,
    Process,
    Protected,
    Record,
    Units,
    Postponed,
    Assert,
}

impl Keyword {
    /// Attempts to match the given string of characters `s` to a VHDL keyword.
    ///
    /// Compares `s` against keywords using ascii lowercase comparison.
    pub fn match_keyword(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_ref() {
            "abs" => Self::Abs,
            "and" => Self::And,
            "mod" => Self::Mod,
            "nand" => Self::Nand,
            "nor" => Self::Nor,
            "not" => Self::Not,
            "or" => Self::Or,
            "rem" => Self::Rem,
            "rol" => Self::Rol,
            "ror" => Self::Ror,
            "sla" => Self::Sla,
            "sll" => Self::Sll,
            "sra" => Self::Sra,
            "srl" => Self::Srl,
            "xnor" => Self::Xnor,
            "xor" => Self::Xor,
            "entity" => Self::Entity,
            "is" => Self::Is,
            "generic" => Self::Generic,
            "port" => Self::Port,
            "in" => Self::In,
            "out" => Self::Out,
            "inout" => Self::Inout,
            "buffer" => Self::Buffer,
            "linkage" => Self::Linkage,
            "end" => Self::End,
            "begin" => Self::Begin,
            "signal" => Self::Signal,
            "constant" => Self::Constant,
            "variable" => Self::Variable,
            "file" => Self::File,
            "bus" => Self::Bus,
            "type" => Self::Type,
            "subtype" => Self::Subtype,
            "function" => Self::Function,
            "procedure" => Self::Procedure,
            "impure" => Self::Impure,
            "pure" => Self::Pure,
            "package" => Self::Package,
            "new" => Self::New,
            "return" => Self::Return,
            "downto" => Self::Downto,
            "to" => Self::To,
            "range" => Self::Range,
            "others" => Self::Others,
            "open" => Self::Open,
            "null" => Self::Null,
            "array" => Self::Array,
            "of" => Self::Of,
            "architecture" => Self::Architecture,
            "block" => Self::Block,
            "case" => Self::Case,
            "component" => Self::Component,
            "for" => Self::For,
            "generate" => Self::Generate,
            "if" => Self::If,
            "loop" => Self::Loop,
            "process" => Self::Process,
            "protected" => Self::Protected,
            "record" => Self::Record,
            "units" => Self::Units,
            "postponed" => Self::Postponed,
            "assert" => Self::Assert,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Abs => "abs",
            Self::And => "and",
            Self::Mod => "mod",
            Self::Nand => "nand",
            Self::Nor => "nor",
            Self::Not => "not",
            Self::Or => "or",
            Self::Rem => "rem",
            Self::Rol => "rol",
            Self::Ror => "ror",
            Self::Sla => "sla",
            Self::Sll => "sll",
            Self::Sra => "sra",
            Self::Srl => "srl",
            Self::Xnor => "xnor",
            Self::Xor => "xor",
            Self::Entity => "entity",
            Self::Is => "is",
            Self::Generic => "generic",
            Self::Port => "port",
            Self::In => "in",
            Self::Out => "out",
            Self::Inout => "inout",
            Self::Buffer => "buffer",
            Self::Linkage => "linkage",
            Self::End => "end",
            Self::Begin => "begin",
            Self::Signal => "signal",
            Self::Constant => "constant",
            Self::Variable => "variable",
            Self::File => "file",
            Self::Bus => "bus",
            Self::Type => "type",
            Self::Subtype => "subtype",
            Self::Function => "function",
            Self::Procedure => "procedure",
            Self::Impure => "impure",
            Self::Pure => "pure",
            Self::Package => "package",
            Self::New => "new",
            Self::Return => "return",
            Self::Downto => "downto",
            Self::To => "to",
            Self::Range => "range",
            Self::Others => "others",
            Self::Open => "open",
            Self::Null => "null",
            Self::Array => "array",
            Self::Of => "of",
            Self::Architecture => "architecture",
            Self::Block => "block",
            Self::Case => "case",
            Self::Component => "component",
            Self::For => "for",
            Self::Generate => "generate",
            Self::If => "if",
            Self::Loop => "loop",
            Self::Process => "process",
            Self::Protected => "protected",
            Self::Record => "record",
            Self::Units => "units",
            Self::Postponed => "postponed",
            Self::Assert => "assert",
        }
    }

    /// Checks if an `end` followed by this keyword closes a nested construct
    /// rather than the entity itself.
    pub fn is_inner_ending(&self) -> bool {
        match self {
            Self::Architecture
            | Self::Block
            | Self::Case
            | Self::Component
            | Self::For
            | Self::Function
            | Self::Generate
            | Self::If
            | Self::Loop
            | Self::Package
            | Self::Procedure
            | Self::Process
            | Self::Protected
            | Self::Record
            | Self::Units => true,
            _ => false,
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToColor for Keyword {
    fn to_color(&self) -> ColoredString {
        self.to_string().blue()
    }
}
