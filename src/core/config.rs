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

use crate::core::lang::vhdl::format::BenchFormat;
use crate::core::library::Libraries;
use crate::util::anyerror::AnyError;
use serde_derive::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const CONFIG_FILE: &str = "tbgen.toml";

pub trait FromFile: FromStr
where
    Self: Sized,
    <Self as std::str::FromStr>::Err: 'static + Error,
{
    fn from_file(path: &PathBuf) -> Result<Self, Box<dyn Error>> {
        // try to open the file in read-only mode
        let text = std::fs::read_to_string(&path)?;
        Ok(Self::from_str(&text)?)
    }
}

#[derive(PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    testbench: Option<BenchFormat>,
    libraries: Option<Libraries>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            testbench: None,
            libraries: None,
        }
    }

    /// Reads the configuration for a command.
    ///
    /// An explicit `path` must exist. Without one, the `CONFIG_FILE` in the
    /// current directory is read when present and an empty configuration is
    /// used otherwise.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                match default.is_file() {
                    true => Self::from_file(&default),
                    false => Ok(Self::new()),
                }
            }
        }
    }

    pub fn get_testbench(&self) -> Option<&BenchFormat> {
        self.testbench.as_ref()
    }

    pub fn get_libraries(&self) -> Option<&Libraries> {
        self.libraries.as_ref()
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl FromFile for Config {
    fn from_file(path: &PathBuf) -> Result<Self, Box<dyn Error>> {
        // verify the path exists
        if path.is_file() == false {
            return Err(AnyError(format!(
                "failed to locate configuration file \"{}\"",
                path.display()
            )))?;
        }
        let contents = std::fs::read_to_string(&path)?;
        match Self::from_str(&contents) {
            Ok(r) => Ok(r),
            Err(e) => {
                return Err(AnyError(format!(
                    "failed to parse \"{}\" file: {}",
                    path.display(),
                    e
                )))?
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::library::Library;

    const C_0: &str = r#"
# This is a blank configuration file.
"#;

    const C_1: &str = r#"
# tbgen configuration file

[testbench]
tab-size = 4
instance-name = "uut"
vunit = true

[libraries.riscv]
files = ["../pkg/riscv/*.vhd"]

[libraries.cpu]
files = [
    "../pkg/*.vhd",
    "../rtl/common/*.vhd",
    "../rtl/*.vhd",
    "*.vhd",
]
allow-empty = true
"#;

    #[test]
    fn parse_empty_config() {
        match Config::from_str(C_0) {
            Ok(r) => assert_eq!(r, Config::new()),
            Err(e) => {
                println!("{}", e);
                panic!("failed to parse")
            }
        }
    }

    #[test]
    fn parse_full_config() {
        let cfg = Config::from_str(C_1).unwrap();
        let fmt = cfg.get_testbench().unwrap();
        assert_eq!(fmt.get_tab_size(), 4);
        assert_eq!(fmt.get_instance_name(), "uut");
        assert_eq!(fmt.is_vunit(), true);
        assert_eq!(fmt.get_suffix(), "_tb");

        let mut expected = Libraries::new();
        expected.insert("riscv", Library::new(vec![String::from("../pkg/riscv/*.vhd")]));
        assert_ne!(cfg.get_libraries(), Some(&expected));
        assert_eq!(cfg.get_libraries().unwrap().is_empty(), false);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(Config::from_str("[vhdl-format]\ntab-size = 3\n").is_err(), true);
        assert_eq!(Config::from_str("[testbench]\ntabsize = 3\n").is_err(), true);
    }

    #[test]
    fn missing_explicit_file() {
        let path = PathBuf::from("./tests/data/missing.toml");
        assert_eq!(Config::load(Some(&path)).is_err(), true);
    }
}
