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
    config - settings read from 'tbgen.toml'

DESCRIPTION
    Every setting is optional. Settings given on the command line take
    precedence over the configuration file, which takes precedence over the
    built-in defaults.

    [testbench]
    tab-size = 2                      spaces per indentation level
    suffix = "_tb"                    appended to the entity name
    architecture = "sim"              architecture name of the testbench
    instance-name = "dut"             label of the instantiation
    library = "work"                  library the entity is compiled into
    signal-prefix = ""                prepended to every signal name
    signal-suffix = ""                appended to every signal name
    mapping-auto-alignment = true     align the '=>' of generic and port maps
    type-auto-alignment = true        align the ':' of declarations
    clock-half-period = "5 ns"        half the period of each clock
    reset-duration = "100 ns"         time each reset is held active
    vunit = false                     wrap the stimulus in a vunit test runner

    [libraries.<name>]
    files = ["<glob>", ...]           source files of the library
    allow-empty = false               accept patterns that match no files

EXAMPLES
    [testbench]
    tab-size = 4
    vunit = true

    [libraries.riscv]
    files = ["rtl/*.vhd", "pkg/*.vhd"]
"#;
