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
    bench - synthesize a testbench for an entity

SYNOPSIS
    tbgen bench [options] --input <file>

DESCRIPTION
    This command parses the entity declared in the input file and writes a
    testbench for it. Without '--output', the testbench is printed to the
    console. Options given on the command-line take precedence over the
    '[testbench]' table of the configuration file.

    Input ports named like a clock ('clk', 'clock', 'sys_clk', ...) are driven
    by a free-running clock process. Input ports named like a reset ('rst',
    'reset', 'rst_n', 'resetn', ...) are driven by a reset process that holds
    the reset active for the configured duration. Every other input is left
    for the stimulus process.

    Constructs the parser keeps as opaque text, such as vhdl-2008 type,
    subprogram, and package generics, are reported as warnings.

OPTIONS
    --input, -i <file>
        The vhdl source file declaring the entity

    --output, -o <file>
        The file to write the testbench to

    --entity <name>
        The entity to read when the file declares several (default: the first)

    --config <file>
        The configuration file to read '[testbench]' settings from

    --suffix <name>
        The text appended to the entity name to name the testbench (default: _tb)

    --tab-size <n>
        The number of spaces per indentation level (default: 2)

    --vunit
        Wrap the stimulus in a vunit test runner

    --force
        Overwrite the output file if it already exists

EXAMPLES
    tbgen bench -i rtl/fifo.vhd
    tbgen bench -i rtl/units.vhd --entity top -o sim/top_tb.vhd --force
"#;
