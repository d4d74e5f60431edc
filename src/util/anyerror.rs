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

use std::error::Error;
use std::fmt::Display;

/// Quickly implement a custom/unique error message.
///
/// Can also be used to wrap an error's message.
#[derive(Debug, PartialEq)]
pub struct AnyError(pub String);

impl Error for AnyError {}

impl Display for AnyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AnyError {
    fn from(value: &str) -> Self {
        AnyError(value.to_string())
    }
}

pub type Fault = Box<dyn Error>;

#[derive(Debug, thiserror::Error)]
/// Stores the (source code file, error message)
pub struct CodeFault(pub Option<String>, pub Fault);

impl Display for CodeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(src) => write!(f, "failed to parse file {:?}: {}", src, self.1),
            None => write!(f, "{}", self.1),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_fault_names_file() {
        let err = CodeFault(
            Some(String::from("alu.vhd")),
            Box::new(AnyError::from(":3:14 unexpected end of file")),
        );
        assert_eq!(
            err.to_string(),
            "failed to parse file \"alu.vhd\": :3:14 unexpected end of file"
        );
        let err = CodeFault(None, Box::new(AnyError::from("oops")));
        assert_eq!(err.to_string(), "oops");
    }
}
