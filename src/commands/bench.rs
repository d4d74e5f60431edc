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

use crate::commands::helps::bench;
use crate::core::config::Config;
use crate::core::lang::vhdl::entity::Entity;
use crate::core::lang::vhdl::error::UnsupportedConstruct;
use crate::core::lang::vhdl::format::BenchFormat;
use crate::core::lang::vhdl::parser::Parser;
use crate::core::lang::vhdl::testbench::Testbench;
use crate::core::lang::vhdl::token::{Identifier, VhdlTokenizer};
use crate::error::{Error, Hint};
use crate::util::anyerror::{AnyError, CodeFault, Fault};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Bench {
    force: bool,
    vunit: bool,
    input: PathBuf,
    output: Option<PathBuf>,
    entity: Option<Identifier>,
    config: Option<PathBuf>,
    tab_size: Option<u8>,
    suffix: Option<String>,
}

impl Subcommand<()> for Bench {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(bench::HELP))?;
        Ok(Bench {
            // flags
            force: cli.check(Arg::flag("force"))?,
            vunit: cli.check(Arg::flag("vunit"))?,
            // options
            output: cli.get(Arg::option("output").switch('o').value("file"))?,
            entity: cli.get(Arg::option("entity").value("name"))?,
            config: cli.get(Arg::option("config").value("file"))?,
            tab_size: cli.get(Arg::option("tab-size").value("n"))?,
            suffix: cli.get(Arg::option("suffix").value("name"))?,
            input: cli.require(Arg::option("input").switch('i').value("file"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run()
    }
}

impl Bench {
    fn run(&self) -> Result<(), Fault> {
        // verify the destination before doing any work
        if let Some(out) = &self.output {
            if out.exists() == true && self.force == false {
                return Err(Error::OutputExists(out.clone(), Hint::OverwriteWithForce))?;
            }
        }

        let (entity, diagnostics) = read_entity(&self.input, self.entity.as_ref())?;
        report(&self.input, &diagnostics);

        let format = self.into_format(Config::load(self.config.as_ref())?);
        let tb = Testbench::new(&entity, &format);

        match &self.output {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    if parent.as_os_str().is_empty() == false {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(out, tb.to_string())?;
                println!(
                    "info: testbench {} written to {:?}",
                    tb.get_name(),
                    out.display().to_string()
                );
            }
            None => print!("{}", tb),
        }
        Ok(())
    }

    /// Combines the command-line settings with the configuration's
    /// `[testbench]` table. Command-line settings take precedence.
    fn into_format(&self, config: Config) -> BenchFormat {
        let mut format = BenchFormat::default();
        if self.vunit == true {
            format = format.set_vunit(true);
        }
        if let Some(n) = self.tab_size {
            format = format.set_tab_size(n);
        }
        if let Some(s) = &self.suffix {
            format = format.set_suffix(s);
        }
        format.merge(config.get_testbench().cloned());
        format
    }
}

/// Reads the source file at `path` and parses the entity it declares.
///
/// Without a `name`, the first entity in the file is chosen. Only the
/// diagnostics raised while parsing the chosen entity are returned.
pub fn read_entity(
    path: &PathBuf,
    name: Option<&Identifier>,
) -> Result<(Entity, Vec<UnsupportedConstruct>), Fault> {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            return Err(AnyError(format!(
                "failed to read file {:?}: {}",
                path.display().to_string(),
                e
            )))?
        }
    };
    let src = path.display().to_string();
    let tokens = match VhdlTokenizer::from_str(&contents) {
        Ok(t) => t.into_tokens(),
        Err(e) => return Err(CodeFault(Some(src), Box::new(e)))?,
    };
    let (entities, diagnostics) = match Parser::parse_all_with_diagnostics(&tokens) {
        Ok(r) => r,
        Err(e) => return Err(CodeFault(Some(src), Box::new(e)))?,
    };
    Ok(select_entity(entities, diagnostics, name, path)?)
}

/// Picks the requested entity out of every entity parsed from one file.
fn select_entity(
    mut entities: Vec<Entity>,
    diagnostics: Vec<UnsupportedConstruct>,
    name: Option<&Identifier>,
    path: &PathBuf,
) -> Result<(Entity, Vec<UnsupportedConstruct>), Error> {
    if entities.is_empty() == true {
        return Err(Error::NoEntityInFile(path.clone()));
    }
    let index = match name {
        Some(n) => match entities.iter().position(|e| e.get_name() == n) {
            Some(i) => i,
            None => {
                return Err(Error::EntityNotFound(
                    n.to_string(),
                    path.clone(),
                    Hint::EntitiesList(entities.iter().map(|e| e.get_name().to_string()).collect()),
                ))
            }
        },
        None => 0,
    };
    // diagnostics belong to the entity declared before them
    let start = *entities[index].get_position();
    let end = entities.get(index + 1).map(|e| *e.get_position());
    let diagnostics = diagnostics
        .into_iter()
        .filter(|d| d.position >= start && end.map_or(true, |e| d.position < e))
        .collect();
    Ok((entities.swap_remove(index), diagnostics))
}

/// Prints every diagnostic as a warning.
///
/// Warnings go to stderr so the generated text can be piped from stdout.
pub fn report(path: &PathBuf, diagnostics: &[UnsupportedConstruct]) -> () {
    diagnostics
        .iter()
        .for_each(|d| eprintln!("{}: {}{}", "warning".yellow(), path.display(), d));
}

#[cfg(test)]
mod test {
    use super::*;

    fn command(input: &str, output: Option<PathBuf>, force: bool) -> Bench {
        Bench {
            force: force,
            vunit: false,
            input: PathBuf::from(input),
            output: output,
            entity: None,
            config: None,
            tab_size: None,
            suffix: None,
        }
    }

    #[test]
    fn first_entity_by_default() {
        let (entity, _) = read_entity(&PathBuf::from("./tests/data/vhdl/units.vhd"), None).unwrap();
        assert_eq!(entity.get_name().as_str(), "and_gate");
    }

    #[test]
    fn entity_by_name() {
        let name = Identifier::from_str("TOP").unwrap();
        let (entity, diagnostics) =
            read_entity(&PathBuf::from("./tests/data/vhdl/units.vhd"), Some(&name)).unwrap();
        assert_eq!(entity.get_name().as_str(), "top");
        assert_eq!(entity.get_ports().len(), 0);
        assert_eq!(diagnostics.len(), 0);
    }

    #[test]
    fn missing_entity_lists_available() {
        let name = Identifier::from_str("alu").unwrap();
        let path = PathBuf::from("./tests/data/vhdl/units.vhd");
        let err = read_entity(&path, Some(&name)).unwrap_err();
        colored::control::set_override(false);
        assert_eq!(
            err.to_string(),
            Error::EntityNotFound(
                String::from("alu"),
                path,
                Hint::EntitiesList(vec![String::from("and_gate"), String::from("top")])
            )
            .to_string()
        );
    }

    #[test]
    fn diagnostics_stay_with_their_entity() {
        let path = PathBuf::from("./tests/data/vhdl/generics2008.vhd");
        let (entity, diagnostics) = read_entity(&path, None).unwrap();
        assert_eq!(entity.get_name().as_str(), "sorter");
        assert_eq!(diagnostics.len() > 0, true);

        let src = format!(
            "{}\nentity other is end entity;\n",
            std::fs::read_to_string(&path).unwrap()
        );
        let tokens = VhdlTokenizer::tokenize(&src).unwrap();
        let (entities, all) = Parser::parse_all_with_diagnostics(&tokens).unwrap();
        let other = Identifier::from_str("other").unwrap();
        let (_, scoped) = select_entity(entities, all, Some(&other), &path).unwrap();
        assert_eq!(scoped.len(), 0);
    }

    #[test]
    fn no_entity_in_file() {
        let tokens = VhdlTokenizer::tokenize("package p is end package;").unwrap();
        let (entities, diagnostics) = Parser::parse_all_with_diagnostics(&tokens).unwrap();
        let path = PathBuf::from("p.vhd");
        assert_eq!(
            select_entity(entities, diagnostics, None, &path),
            Err(Error::NoEntityInFile(path))
        );
    }

    #[test]
    fn source_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.vhd");
        std::fs::write(&path, "entity bad is port (a : in bit;\nend;").unwrap();
        let err = read_entity(&path, None).unwrap_err();
        assert_eq!(
            err.to_string()
                .starts_with(&format!("failed to parse file {:?}: ", path.display().to_string())),
            true
        );
    }

    #[test]
    fn writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sim").join("alu_tb.vhd");
        command("./tests/data/vhdl/alu.vhd", Some(out.clone()), false)
            .run()
            .unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.contains("entity alu_tb is"), true);

        let err = command("./tests/data/vhdl/alu.vhd", Some(out.clone()), false)
            .run()
            .unwrap_err();
        colored::control::set_override(false);
        assert_eq!(
            err.to_string(),
            Error::OutputExists(out.clone(), Hint::OverwriteWithForce).to_string()
        );
        assert_eq!(
            command("./tests/data/vhdl/alu.vhd", Some(out), true)
                .run()
                .is_ok(),
            true
        );
    }

    #[test]
    fn command_line_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("tbgen.toml");
        std::fs::write(&cfg, "[testbench]\nsuffix = \"_bench\"\nvunit = false\n").unwrap();
        let mut b = command("./tests/data/vhdl/alu.vhd", None, false);
        b.vunit = true;
        b.config = Some(cfg.clone());
        let format = b.into_format(Config::load(Some(&cfg)).unwrap());
        assert_eq!(format.is_vunit(), true);
        assert_eq!(format.get_suffix(), "_bench");
        assert_eq!(format.get_tab_size(), 2);
    }

    #[test]
    fn suffix_and_tab_size_from_command_line() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("tbgen.toml");
        std::fs::write(&cfg, "[testbench]\nsuffix = \"_bench\"\ntab-size = 8\n").unwrap();
        let mut b = command("./tests/data/vhdl/alu.vhd", None, false);
        b.suffix = Some(String::from("_test"));
        b.tab_size = Some(4);
        let format = b.into_format(Config::load(Some(&cfg)).unwrap());
        assert_eq!(format.get_suffix(), "_test");
        assert_eq!(format.get_tab_size(), 4);

        let (entity, _) = read_entity(&b.input, None).unwrap();
        let text = Testbench::new(&entity, &format).to_string();
        assert_eq!(text.contains("entity alu_test is"), true);
        assert_eq!(text.contains("\n    signal "), true);
    }
}
