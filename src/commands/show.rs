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

use crate::commands::bench::{read_entity, report};
use crate::commands::helps::show;
use crate::core::lang::vhdl::entity::Entity;
use crate::core::lang::vhdl::format::BenchFormat;
use crate::core::lang::vhdl::token::Identifier;
use crate::util::anyerror::Fault;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Show {
    json: bool,
    input: PathBuf,
    entity: Option<Identifier>,
}

impl Subcommand<()> for Show {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(show::HELP))?;
        Ok(Show {
            json: cli.check(Arg::flag("json"))?,
            entity: cli.get(Arg::option("entity").value("name"))?,
            input: cli.require(Arg::option("input").switch('i').value("file"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run()
    }
}

impl Show {
    fn run(&self) -> Result<(), Fault> {
        let (entity, diagnostics) = read_entity(&self.input, self.entity.as_ref())?;
        report(&self.input, &diagnostics);
        println!("{}", Self::format_entity(&entity, self.json)?);
        Ok(())
    }

    /// Renders the interface as highlighted VHDL or as a JSON document.
    fn format_entity(entity: &Entity, json: bool) -> Result<String, Fault> {
        match json {
            true => Ok(serde_json::to_string_pretty(entity)?),
            false => Ok(entity
                .into_declaration(BenchFormat::new().get_tab_size() as usize)
                .to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_keeps_declaration_order() {
        let (entity, _) = read_entity(&PathBuf::from("./tests/data/vhdl/alu.vhd"), None).unwrap();
        let text = Show::format_entity(&entity, true).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["name"], "alu");
        let ports: Vec<&str> = doc["ports"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(ports.first(), Some(&"clk"));
        assert_eq!(ports.len(), entity.get_ports().len());
    }

    #[test]
    fn plain_declaration() {
        colored::control::set_override(false);
        let (entity, _) = read_entity(&PathBuf::from("./tests/data/vhdl/units.vhd"), None).unwrap();
        assert_eq!(
            Show::format_entity(&entity, false).unwrap(),
            "entity and_gate is\n  port (\n    a : in bit;\n    b : in bit;\n    y : out bit\n  );\nend entity and_gate;\n"
        );
    }
}
