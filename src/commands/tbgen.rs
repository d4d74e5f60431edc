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

use crate::commands::helps::tbgen;
use crate::error::Error;
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
pub struct Tbgen {
    version: bool,
    color: Option<ColorMode>,
    command: Option<TbgenSubcommand>,
}

impl Command for Tbgen {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(tbgen::HELP))?;
        Ok(Tbgen {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // need to set this coloring mode ASAP
        self.color.unwrap_or(ColorMode::Auto).apply();
        // prioritize version information
        if self.version == true {
            println!("tbgen {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            c.execute(&())
        // if no command is given then print default help
        } else {
            Ok(println!("{}", tbgen::HELP))
        }
    }
}

use crate::commands::bench::Bench;
use crate::commands::help::Help as HelpCmd;
use crate::commands::libs::Libs;
use crate::commands::show::Show;

#[derive(Debug, PartialEq)]
enum TbgenSubcommand {
    Bench(Bench),
    Show(Show),
    Libs(Libs),
    Help(HelpCmd),
}

impl Subcommand<()> for TbgenSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["bench", "b", "show", "libs", "help"])?
            .as_ref()
        {
            "b" | "bench" => Ok(Self::Bench(Bench::interpret(cli)?)),
            "show" => Ok(Self::Show(Show::interpret(cli)?)),
            "libs" => Ok(Self::Libs(Libs::interpret(cli)?)),
            "help" => Ok(Self::Help(HelpCmd::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &()) -> proc::Result {
        match self {
            Self::Bench(c) => c.execute(context),
            Self::Show(c) => c.execute(context),
            Self::Libs(c) => c.execute(context),
            Self::Help(c) => c.execute(context),
        }
    }
}

/// When to colorize console output.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Overrides the terminal detection of `colored` for the rest of the process.
    pub fn apply(&self) -> () {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => colored::control::unset_override(),
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(Error::InvalidColorMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_modes() {
        assert_eq!(ColorMode::from_str("always"), Ok(ColorMode::Always));
        assert_eq!(ColorMode::from_str("NEVER"), Ok(ColorMode::Never));
        assert_eq!(ColorMode::from_str("auto"), Ok(ColorMode::Auto));
        assert_eq!(
            ColorMode::from_str("sometimes"),
            Err(Error::InvalidColorMode(String::from("sometimes")))
        );
    }
}
