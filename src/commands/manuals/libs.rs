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

// This manual page was automatically generated from the mangen.py tool.
pub const MANUAL: &str = r#"NAME
    libs - write the library manifest for editor tooling

SYNOPSIS
    tbgen libs [options]

DESCRIPTION
    This command expands the glob patterns of every '[libraries.<name>]'
    table in the configuration file into absolute file paths and writes them
    in the layout read by vhdl_ls.

    Patterns are relative to the directory holding the configuration file.
    A pattern that matches no files is an error unless the library sets
    'allow-empty = true'.

OPTIONS
    --config <file>
        The configuration file declaring the libraries

    --output, -o <file>
        The file to write the manifest to (default: vhdl_ls.toml)

    --json
        Write the manifest as json (printed to the console without '--output')

EXAMPLES
    tbgen libs
    tbgen libs --config hw/tbgen.toml -o hw/vhdl_ls.toml
"#;
