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

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("output file {0:?} already exists{1}")]
    OutputExists(PathBuf, Hint),
    #[error("entity {0:?} is not declared in file {1:?}{2}")]
    EntityNotFound(String, PathBuf, Hint),
    #[error("file {0:?} does not declare any entity")]
    NoEntityInFile(PathBuf),
    #[error("no libraries are configured{0}")]
    NoLibrariesConfigured(Hint),
    #[error("invalid color mode {0:?}: expecting one of auto, always, never")]
    InvalidColorMode(String),
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    OverwriteWithForce,
    EntitiesList(Vec<String>),
    ConfigureLibraries,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::OverwriteWithForce => {
                String::from("use the \"--force\" flag to overwrite the existing file")
            }
            Self::EntitiesList(names) => format!("available entities: {}", names.join(", ")),
            Self::ConfigureLibraries => String::from(
                "add a [libraries.<name>] table with a \"files\" list to the configuration file",
            ),
        };
        write!(f, "\n\n{}: {}", "hint".green(), Error::lowerize(message))
    }
}
