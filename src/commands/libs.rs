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

use crate::commands::helps::libs;
use crate::core::config::Config;
use crate::core::library::{LibraryMap, LIBRARY_FILE};
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use std::env::current_dir;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Libs {
    json: bool,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Subcommand<()> for Libs {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(libs::HELP))?;
        Ok(Libs {
            json: cli.check(Arg::flag("json"))?,
            config: cli.get(Arg::option("config").value("file"))?,
            output: cli.get(Arg::option("output").switch('o').value("file"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run()
    }
}

impl Libs {
    fn run(&self) -> Result<(), Fault> {
        let map = self.collect()?;
        match (self.json, &self.output) {
            // json without a destination goes to the console
            (true, None) => println!("{}", map.to_json()?),
            (true, Some(out)) => Self::write(out, &map.to_json()?, &map)?,
            (false, out) => {
                let out = out.clone().unwrap_or(PathBuf::from(LIBRARY_FILE));
                Self::write(&out, &map.to_toml(), &map)?
            }
        }
        Ok(())
    }

    /// Loads the configured libraries and resolves their patterns.
    ///
    /// Patterns are relative to the directory holding the configuration file.
    fn collect(&self) -> Result<LibraryMap, Fault> {
        let config = Config::load(self.config.as_ref())?;
        let libraries = match config.get_libraries() {
            Some(l) if l.is_empty() == false => l,
            _ => return Err(Error::NoLibrariesConfigured(Hint::ConfigureLibraries))?,
        };
        let root = match self.config.as_ref().and_then(|c| c.parent()) {
            Some(p) if p.as_os_str().is_empty() == false => p.to_path_buf(),
            _ => current_dir()?,
        };
        Ok(libraries.collect(&root)?)
    }

    fn write(path: &PathBuf, contents: &str, map: &LibraryMap) -> Result<(), Fault> {
        std::fs::write(path, contents)?;
        println!(
            "info: {} libraries written to {:?}",
            map.len(),
            path.display().to_string()
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn resolves_relative_to_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("rtl")).unwrap();
        fs::write(dir.path().join("rtl").join("alu.vhd"), "").unwrap();
        let cfg = dir.path().join("tbgen.toml");
        fs::write(&cfg, "[libraries.riscv]\nfiles = [\"rtl/*.vhd\"]\n").unwrap();

        let out = dir.path().join("vhdl_ls.toml");
        let cmd = Libs {
            json: false,
            config: Some(cfg),
            output: Some(out.clone()),
        };
        cmd.run().unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.starts_with("[libraries.riscv]\n"), true);
        assert_eq!(text.contains("alu.vhd"), true);
    }

    #[test]
    fn no_libraries_configured() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("tbgen.toml");
        fs::write(&cfg, "[testbench]\ntab-size = 4\n").unwrap();
        let cmd = Libs {
            json: true,
            config: Some(cfg),
            output: None,
        };
        colored::control::set_override(false);
        assert_eq!(
            cmd.run().unwrap_err().to_string(),
            Error::NoLibrariesConfigured(Hint::ConfigureLibraries).to_string()
        );
    }
}
