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

use super::super::highlight;
use crate::core::lang::vhdl::token::ToColor;
use colored::ColoredString;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub struct Character(pub String);

impl Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.0)
    }
}

/// The full text of a bit string literal, base specifier and quotes included.
#[derive(Debug, PartialEq, Clone)]
pub struct BitStrLiteral(pub String);

impl Display for BitStrLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum AbstLiteral {
    Decimal(String),
    Based(String),
}

impl Display for AbstLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Decimal(val) => val,
                Self::Based(val) => val,
            }
        )
    }
}

impl ToColor for Character {
    fn to_color(&self) -> ColoredString {
        highlight::color(&self.to_string(), highlight::CHARS)
    }
}

impl ToColor for BitStrLiteral {
    fn to_color(&self) -> ColoredString {
        highlight::color(&self.to_string(), highlight::NUMBERS)
    }
}

impl ToColor for AbstLiteral {
    fn to_color(&self) -> ColoredString {
        highlight::color(&self.to_string(), highlight::NUMBERS)
    }
}

/// Set: B | O | X | UB | UO | UX | SB | SO | SX | D
#[derive(Debug, PartialEq)]
pub enum BaseSpec {
    B,
    O,
    X,
    UB,
    UO,
    UX,
    SB,
    SO,
    SX,
    D,
}

impl FromStr for BaseSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_ref() {
            "b" => Self::B,
            "o" => Self::O,
            "x" => Self::X,
            "ub" => Self::UB,
            "uo" => Self::UO,
            "ux" => Self::UX,
            "sb" => Self::SB,
            "so" => Self::SO,
            "sx" => Self::SX,
            "d" => Self::D,
            _ => return Err(format!("invalid base specifier '{}'", s)),
        })
    }
}
