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

// This help page was automatically generated from the mangen.py tool.
pub const HELP: &str = r#"Synthesize a testbench for an entity.

Usage:
    tbgen bench [options] --input <file>

Options:
    --input, -i <file>      vhdl source file declaring the entity
    --output, -o <file>     file to write the testbench to
    --entity <name>         entity to read when the file declares several
    --config <file>         configuration file to read settings from
    --suffix <name>         text appended to the entity name (default: _tb)
    --tab-size <n>          spaces per indentation level (default: 2)
    --vunit                 wrap the stimulus in a vunit test runner
    --force                 overwrite an existing output file

Use 'tbgen help bench' to read more about the command.
"#;
