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

//! Library manifest: expands per-library glob patterns into absolute file
//! lists and writes them in the `vhdl_ls.toml` layout.

use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use toml_edit::{Array, Document, Item, Table, Value};

pub const LIBRARY_FILE: &str = "vhdl_ls.toml";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LibraryError {
    #[error("library {0:?} has invalid pattern {1:?}: {2}")]
    InvalidPattern(String, String, String),
    #[error("library {0:?} has pattern {1:?} that does not match any files")]
    NoMatches(String, String),
    #[error("failed to resolve path {0:?}: {1}")]
    Unresolved(String, String),
}

/// The source files configured for a single library.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Library {
    files: Vec<String>,
    #[serde(rename = "allow-empty")]
    allow_empty: Option<bool>,
}

impl Library {
    pub fn new(files: Vec<String>) -> Self {
        Self {
            files: files,
            allow_empty: None,
        }
    }
    /// Checks if a pattern is allowed to match zero files.
    pub fn is_empty_allowed(&self) -> bool {
        self.allow_empty.unwrap_or(false)
    }

    /// Expands every pattern relative to `root` into a list of absolute paths.
    ///
    /// Paths keep the order of the patterns; matches of one pattern are sorted
    /// and a path is only listed once.
    fn collect(&self, name: &str, root: &Path) -> Result<Vec<String>, LibraryError> {
        let mut files: Vec<String> = Vec::new();
        for pattern in &self.files {
            let full = root.join(pattern).display().to_string();
            let mut matches: Vec<_> = glob::glob(&full)
                .map_err(|e| {
                    LibraryError::InvalidPattern(name.to_string(), pattern.clone(), e.to_string())
                })?
                .filter_map(|p| p.ok())
                .filter(|p| p.is_file())
                .collect();
            if matches.is_empty() == true && self.is_empty_allowed() == false {
                return Err(LibraryError::NoMatches(name.to_string(), pattern.clone()));
            }
            matches.sort();
            for m in matches {
                let abs = m.canonicalize().map_err(|e| {
                    LibraryError::Unresolved(m.display().to_string(), e.to_string())
                })?;
                let abs = abs.display().to_string();
                if files.contains(&abs) == false {
                    files.push(abs);
                }
            }
        }
        Ok(files)
    }
}

/// The `[libraries]` table of the configuration file.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Libraries(BTreeMap<String, Library>);

impl Libraries {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, name: &str, lib: Library) -> () {
        self.0.insert(name.to_string(), lib);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolves every library's patterns against the directory `root`.
    pub fn collect(&self, root: &Path) -> Result<LibraryMap, LibraryError> {
        let mut libraries = BTreeMap::new();
        for (name, lib) in &self.0 {
            libraries.insert(name.clone(), LibraryFiles {
                files: lib.collect(name, root)?,
            });
        }
        Ok(LibraryMap {
            libraries: libraries,
        })
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct LibraryFiles {
    files: Vec<String>,
}

/// Library names mapped to their resolved source files, sorted by name.
#[derive(Debug, PartialEq, Serialize)]
pub struct LibraryMap {
    libraries: BTreeMap<String, LibraryFiles>,
}

impl LibraryMap {
    /// Accesses the files of library `name`, if it exists.
    pub fn get(&self, name: &str) -> Option<&Vec<String>> {
        self.libraries.get(name).map(|l| &l.files)
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Writes the map as a `vhdl_ls.toml` document.
    pub fn to_toml(&self) -> String {
        let mut doc = Document::new();
        let mut libraries = Table::new();
        libraries.set_implicit(true);
        for (name, lib) in &self.libraries {
            let mut files = Array::new();
            lib.files.iter().for_each(|f| files.push(f.as_str()));
            // one path on every line
            files.iter_mut().for_each(|f| {
                f.decor_mut().set_prefix("\n    ");
                f.decor_mut().set_suffix("");
            });
            files.set_trailing("\n");
            let mut table = Table::new();
            table.insert("files", Item::Value(Value::Array(files)));
            libraries.insert(name, Item::Table(table));
        }
        doc.insert("libraries", Item::Table(libraries));
        doc.to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Debug, serde_derive::Deserialize)]
    struct Reread {
        libraries: BTreeMap<String, Library>,
    }

    fn touch(root: &Path, files: &[&str]) {
        for f in files {
            let path = root.join(f);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "-- vhdl\n").unwrap();
        }
    }

    fn libraries(text: &str) -> Libraries {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn collect_in_pattern_order() {
        let dir = tempdir().unwrap();
        touch(
            dir.path(),
            &["pkg/b_pkg.vhd", "pkg/a_pkg.vhd", "rtl/alu.vhd", "rtl/notes.txt", "tb/alu_tb.vhd"],
        );
        let libs = libraries(
            r#"
[cpu]
files = ["rtl/*.vhd", "pkg/*.vhd", "rtl/alu.vhd"]

[sim]
files = ["tb/*.vhd"]
"#,
        );
        let map = libs.collect(dir.path()).unwrap();
        let root = dir.path().canonicalize().unwrap();
        let abs = |f: &str| root.join(f).display().to_string();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("cpu").unwrap(),
            &vec![abs("rtl/alu.vhd"), abs("pkg/a_pkg.vhd"), abs("pkg/b_pkg.vhd")]
        );
        assert_eq!(map.get("sim").unwrap(), &vec![abs("tb/alu_tb.vhd")]);
    }

    #[test]
    fn relative_to_root() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["pkg/riscv/types.vhd", "test/run.vhd"]);
        let libs = libraries("[riscv]\nfiles = [\"../pkg/riscv/*.vhd\"]\n");
        let map = libs.collect(&dir.path().join("test")).unwrap();
        let expected = dir
            .path()
            .join("pkg/riscv/types.vhd")
            .canonicalize()
            .unwrap()
            .display()
            .to_string();
        assert_eq!(map.get("riscv").unwrap(), &vec![expected]);
    }

    #[test]
    fn empty_matches() {
        let dir = tempdir().unwrap();
        let libs = libraries("[cpu]\nfiles = [\"rtl/*.vhd\"]\n");
        assert_eq!(
            libs.collect(dir.path()).unwrap_err(),
            LibraryError::NoMatches(String::from("cpu"), String::from("rtl/*.vhd"))
        );
        let libs = libraries("[cpu]\nfiles = [\"rtl/*.vhd\"]\nallow-empty = true\n");
        let map = libs.collect(dir.path()).unwrap();
        assert_eq!(map.get("cpu").unwrap().len(), 0);

        let err = toml::from_str::<Libraries>("[cpu]\nfile = [\"rtl/*.vhd\"]\n");
        assert_eq!(err.is_err(), true);
    }

    #[test]
    fn write_manifest() {
        let dir = tempdir().unwrap();
        touch(dir.path(), &["rtl/alu.vhd", "rtl/fifo.vhd", "pkg/riscv.vhd"]);
        let libs = libraries(
            r#"
[riscv]
files = ["pkg/*.vhd"]

[cpu]
files = ["rtl/*.vhd"]
"#,
        );
        let map = libs.collect(dir.path()).unwrap();

        let text = map.to_toml();
        // libraries are written in name order
        assert_eq!(
            text.find("[libraries.cpu]").unwrap() < text.find("[libraries.riscv]").unwrap(),
            true
        );
        assert_eq!(text.contains("[libraries]\n"), false);
        let reread: Reread = toml::from_str(&text).unwrap();
        assert_eq!(&reread.libraries.get("cpu").unwrap().files, map.get("cpu").unwrap());
        assert_eq!(
            &reread.libraries.get("riscv").unwrap().files,
            map.get("riscv").unwrap()
        );

        let json: serde_json::Value = serde_json::from_str(&map.to_json().unwrap()).unwrap();
        assert_eq!(
            json["libraries"]["cpu"]["files"].as_array().unwrap().len(),
            2
        );
    }
}
