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
    show - display the interface of an entity

SYNOPSIS
    tbgen show [options] --input <file>

DESCRIPTION
    This command parses the entity declared in the input file and prints its
    declaration with normalized spacing. With '--json', the name, generics,
    and ports are printed as a json document instead.

OPTIONS
    --input, -i <file>
        The vhdl source file declaring the entity

    --entity <name>
        The entity to read when the file declares several (default: the first)

    --json
        Print the interface as json

EXAMPLES
    tbgen show -i rtl/alu.vhd
    tbgen show -i rtl/units.vhd --entity and_gate --json
"#;
