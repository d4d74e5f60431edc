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
    tbgen - generate testbench skeletons for vhdl entities

SYNOPSIS
    tbgen [options] [command]

DESCRIPTION
    Tbgen reads the interface of a vhdl entity (its generics and ports) and
    writes the boilerplate of a testbench around it: signal declarations,
    clock and reset processes, the device-under-test instantiation with full
    generic and port maps, and an empty stimulus process.

    Settings are read from 'tbgen.toml' in the working directory when it
    exists, or from the file given with '--config'.

OPTIONS
    --version
        Print version information and exit

    --color <when>
        Coloring of console output: auto, always, never

    --help, -h
        Print help information

EXAMPLES
    tbgen bench -i rtl/alu.vhd -o sim/alu_tb.vhd
    tbgen show -i rtl/alu.vhd --json
    tbgen help config
"#;
