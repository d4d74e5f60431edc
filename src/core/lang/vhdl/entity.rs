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
use super::highlight::*;
use super::interface::{longest_identifier, ColorVec, Generic, Port};
use super::token::{Delimiter, Identifier, Keyword, ToColor};
use serde_derive::Serialize;

/// The interface of a VHDL entity: its name, generics, and ports in
/// declaration order.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Entity {
    name: Identifier,
    generics: Vec<Generic>,
    ports: Vec<Port>,
    #[serde(skip_serializing)]
    pos: Position,
}

impl Entity {
    pub fn new(name: Identifier, generics: Vec<Generic>, ports: Vec<Port>, pos: Position) -> Self {
        Self {
            name: name,
            generics: generics,
            ports: ports,
            pos: pos,
        }
    }

    /// Accesses the entity's identifier.
    pub fn get_name(&self) -> &Identifier {
        &self.name
    }

    /// Accesses the entity's generics.
    pub fn get_generics(&self) -> &Vec<Generic> {
        &self.generics
    }

    /// Accesses the entity's ports.
    pub fn get_ports(&self) -> &Vec<Port> {
        &self.ports
    }

    /// References the location of the `entity` keyword that declared this entity.
    pub fn get_position(&self) -> &Position {
        &self.pos
    }

    /// Generates the entity declaration as highlighted text.
    pub fn into_declaration(&self, tab_size: usize) -> ColorVec {
        let mut result = ColorVec::new();
        result.push_color(Keyword::Entity.to_color());
        result.push_str(" ");
        result.push_color(color(&self.name.to_string(), ENTITY_NAME));
        result.push_str(" ");
        result.push_color(Keyword::Is.to_color());
        result.push_str("\n");

        if self.generics.is_empty() == false {
            let offset = longest_identifier(self.generics.iter().map(|g| g.get_name()));
            let lines = self
                .generics
                .iter()
                .map(|g| g.into_interface_string(offset))
                .collect();
            result.append(Self::interface_part(Keyword::Generic, lines, tab_size));
        }
        if self.ports.is_empty() == false {
            let offset = longest_identifier(self.ports.iter().map(|p| p.get_name()));
            let lines = self
                .ports
                .iter()
                .map(|p| p.into_interface_string(offset))
                .collect();
            result.append(Self::interface_part(Keyword::Port, lines, tab_size));
        }

        result.push_color(Keyword::End.to_color());
        result.push_str(" ");
        result.push_color(Keyword::Entity.to_color());
        result.push_str(" ");
        result.push_color(color(&self.name.to_string(), ENTITY_NAME));
        result.push_color(Delimiter::Terminator.to_color());
        result.push_str("\n");
        result
    }

    /// Wraps the interface `lines` into a generic or port clause.
    fn interface_part(kw: Keyword, lines: Vec<ColorVec>, tab_size: usize) -> ColorVec {
        let mut result = ColorVec::new();
        let count = lines.len();
        result.push_whitespace(tab_size);
        result.push_color(kw.to_color());
        result.push_str(" ");
        result.push_color(Delimiter::ParenL.to_color());
        result.push_str("\n");
        for (i, line) in lines.into_iter().enumerate() {
            result.push_whitespace(tab_size * 2);
            result.append(line);
            if i + 1 < count {
                result.push_color(Delimiter::Terminator.to_color());
            }
            result.push_str("\n");
        }
        result.push_whitespace(tab_size);
        result.push_color(Delimiter::ParenR.to_color());
        result.push_color(Delimiter::Terminator.to_color());
        result.push_str("\n");
        result
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_declaration(2).to_plain_string())
    }
}
