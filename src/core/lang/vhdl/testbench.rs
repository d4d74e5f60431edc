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

//! Testbench synthesizer: writes the VHDL skeleton that drives an `Entity`.
//!
//! The text is a pure function of the entity and the format settings.

use super::entity::Entity;
use super::format::BenchFormat;
use super::interface::{Direction, Generic, Port};
use super::token::Identifier;
use std::fmt::Display;

const CLOCK_WORDS: [&str; 2] = ["clk", "clock"];
const CLOCK_QUALIFIERS: [&str; 5] = ["en", "ena", "enable", "sel", "div"];
const RESET_WORDS: [&str; 2] = ["rst", "reset"];
const ACTIVE_LOW_RESET_WORDS: [&str; 4] = ["rstn", "resetn", "nrst", "nreset"];

const LOGIC_SCALARS: [&str; 3] = ["std_logic", "std_ulogic", "bit"];
const LOGIC_VECTORS: [&str; 5] = [
    "std_logic_vector",
    "std_ulogic_vector",
    "bit_vector",
    "signed",
    "unsigned",
];

const TODO_VALUE: &str = "-- TODO: supply value";
const TODO_INIT: &str = "-- TODO: unresolved initial value";
const TODO_STIMULUS: &str = "-- TODO: write test vectors here";
const TODO_ASSERT: &str = "-- TODO: assert reset";
const TODO_RELEASE: &str = "-- TODO: release reset";

/// A stimulus process that can be inferred from a port's name.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Driver {
    Clock,
    Reset { active_low: bool },
}

impl Driver {
    /// Guesses the driver for `port` from the `_`-separated segments of its
    /// name.
    ///
    /// Only input ports with basic identifiers are considered.
    pub fn detect(port: &Port) -> Option<Self> {
        if port.get_direction() != &Direction::In {
            return None;
        }
        let name = match port.get_name() {
            Identifier::Basic(s) => s.to_lowercase(),
            Identifier::Extended(_) => return None,
        };
        let segments: Vec<&str> = name.split('_').collect();
        let first = segments.first().copied().unwrap_or_default();
        let last = segments.last().copied().unwrap_or_default();
        let either = |words: &[&str]| words.contains(&first) || words.contains(&last);

        // `clk_en` and `clk_sel` qualify a clock rather than carry one
        let is_clock = CLOCK_WORDS.contains(&last)
            || (CLOCK_WORDS.contains(&first) && CLOCK_QUALIFIERS.contains(&last) == false);

        if is_clock == true {
            Some(Self::Clock)
        } else if either(&ACTIVE_LOW_RESET_WORDS) == true {
            Some(Self::Reset { active_low: true })
        } else if RESET_WORDS.contains(&first) == true && segments.len() > 1 && last == "n" {
            Some(Self::Reset { active_low: true })
        } else if either(&RESET_WORDS) == true {
            Some(Self::Reset { active_low: false })
        } else {
            None
        }
    }
}

/// Reduces a type description to its lower-case type mark (`ieee.numeric_std.unsigned(7 downto 0)`
/// becomes `unsigned`).
fn type_mark(type_desc: &str) -> String {
    let head = type_desc
        .split(|c: char| c == '(' || c == ' ')
        .next()
        .unwrap_or_default();
    head.rsplit('.').next().unwrap_or_default().to_lowercase()
}

/// Selects a stand-in value for a generic that has no default.
fn placeholder(type_desc: &str) -> Option<&'static str> {
    let mark = type_mark(type_desc);
    match mark.as_str() {
        "integer" | "natural" => Some("0"),
        "positive" => Some("1"),
        "real" => Some("0.0"),
        "time" => Some("0 ns"),
        "string" => Some("\"\""),
        _ => initial_value(type_desc),
    }
}

/// Selects the initial value of a signal that connects to a port without a
/// default.
fn initial_value(type_desc: &str) -> Option<&'static str> {
    let mark = type_mark(type_desc);
    if LOGIC_SCALARS.contains(&mark.as_str()) == true {
        Some("'0'")
    } else if LOGIC_VECTORS.contains(&mark.as_str()) == true {
        Some("(others => '0')")
    } else if mark == "boolean" {
        Some("false")
    } else {
        None
    }
}

/// Returns the asserted and released values of a reset signal.
///
/// Returns `None` for a type without known logic levels.
fn reset_levels(type_desc: &str, active_low: bool) -> Option<(&'static str, &'static str)> {
    let mark = type_mark(type_desc);
    let (on, off) = if LOGIC_SCALARS.contains(&mark.as_str()) == true {
        ("'1'", "'0'")
    } else if LOGIC_VECTORS.contains(&mark.as_str()) == true {
        ("(others => '1')", "(others => '0')")
    } else if mark == "boolean" {
        ("true", "false")
    } else {
        return None;
    };
    match active_low {
        true => Some((off, on)),
        false => Some((on, off)),
    }
}

/// Surrounds the name of `id` with `prefix` and `suffix`, keeping extended
/// identifiers extended.
fn affix(id: &Identifier, prefix: &str, suffix: &str) -> Identifier {
    match id {
        Identifier::Basic(s) => Identifier::Basic(format!("{}{}{}", prefix, s, suffix)),
        Identifier::Extended(s) => Identifier::Extended(format!("{}{}{}", prefix, s, suffix)),
    }
}

/// Writes a complete testbench for an entity.
#[derive(Debug, PartialEq)]
pub struct Testbench<'a> {
    entity: &'a Entity,
    format: &'a BenchFormat,
}

/// Synthesizes the testbench text for `entity`.
pub fn synthesize(entity: &Entity, format: &BenchFormat) -> String {
    Testbench::new(entity, format).to_string()
}

impl<'a> Testbench<'a> {
    pub fn new(entity: &'a Entity, format: &'a BenchFormat) -> Self {
        Self {
            entity: entity,
            format: format,
        }
    }

    /// The name of the testbench entity.
    pub fn get_name(&self) -> Identifier {
        affix(self.entity.get_name(), "", self.format.get_suffix())
    }

    fn tab(&self, depth: usize) -> String {
        " ".repeat(self.format.get_tab_size() as usize * depth)
    }

    /// Computes the spaces written after a name of width `len` so the next
    /// token lines up at `offset`.
    fn padding(len: usize, offset: usize, aligned: bool) -> String {
        match aligned {
            true => " ".repeat(offset - len + 1),
            false => String::from(" "),
        }
    }

    fn signal_name(&self, port: &Port) -> Identifier {
        affix(
            port.get_name(),
            self.format.get_signal_prefix(),
            self.format.get_signal_suffix(),
        )
    }

    /// Creates the header comment and context clause.
    fn into_context(&self) -> String {
        let mut result = format!(
            "-- Testbench for entity {}.\n-- Generated by tbgen.\n",
            self.entity.get_name()
        );
        result.push_str("library ieee;\n");
        result.push_str("use ieee.std_logic_1164.all;\n");
        result.push_str("use ieee.numeric_std.all;\n");
        if self.format.is_vunit() == true {
            result.push_str("\nlibrary vunit_lib;\n");
            result.push_str("context vunit_lib.vunit_context;\n");
        }
        result
    }

    /// Creates the testbench entity, which has no ports.
    fn into_entity(&self) -> String {
        let name = self.get_name();
        let mut result = format!("entity {} is\n", name);
        if self.format.is_vunit() == true {
            result.push_str(&format!("{}generic (\n", self.tab(1)));
            result.push_str(&format!("{}runner_cfg : string\n", self.tab(2)));
            result.push_str(&format!("{});\n", self.tab(1)));
        }
        result.push_str(&format!("end entity {};\n", name));
        result
    }

    /// Creates one constant for each generic of the entity.
    fn into_constants(&self) -> String {
        let constants: Vec<&Generic> = self
            .entity
            .get_generics()
            .iter()
            .filter(|g| g.get_class().is_opaque() == false)
            .collect();
        let offset = constants
            .iter()
            .map(|g| g.get_name().len())
            .max()
            .unwrap_or(0);
        let aligned = self.format.is_auto_type_aligned();

        let mut result = String::new();
        for generic in self.entity.get_generics() {
            result.push_str(&self.tab(1));
            if generic.get_class().is_opaque() == true {
                result.push_str(&format!(
                    "-- TODO: supply actual for {} generic {}\n",
                    generic.get_class(),
                    generic.get_name()
                ));
                continue;
            }
            result.push_str(&format!(
                "constant {}{}: {}",
                generic.get_name(),
                Self::padding(generic.get_name().len(), offset, aligned),
                generic.get_type()
            ));
            match generic.get_default() {
                Some(expr) => result.push_str(&format!(" := {};\n", expr)),
                None => match placeholder(generic.get_type()) {
                    Some(value) => {
                        result.push_str(&format!(" := {}; {}\n", value, TODO_VALUE))
                    }
                    None => result.push_str(&format!("; {}\n", TODO_VALUE)),
                },
            }
        }
        result
    }

    /// Lists the inferred drivers in port order.
    fn drivers(&self) -> Vec<(&'a Port, Driver)> {
        self.entity
            .get_ports()
            .iter()
            .filter_map(|p| Driver::detect(p).map(|d| (p, d)))
            .collect()
    }

    /// Creates the timing constants used by the clock and reset drivers.
    fn into_timing(&self) -> String {
        let mut timing: Vec<(String, &str)> = Vec::new();
        let mut has_reset = false;
        for (port, driver) in self.drivers() {
            match driver {
                Driver::Clock => timing.push((
                    Self::half_period(port),
                    self.format.get_clock_half_period(),
                )),
                Driver::Reset { .. } => has_reset = true,
            }
        }
        if has_reset == true {
            timing.push((
                String::from("RESET_DURATION"),
                self.format.get_reset_duration(),
            ));
        }
        let offset = timing
            .iter()
            .map(|(n, _)| n.chars().count())
            .max()
            .unwrap_or(0);
        let aligned = self.format.is_auto_type_aligned();
        timing
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}constant {}{}: time := {};\n",
                    self.tab(1),
                    name,
                    Self::padding(name.chars().count(), offset, aligned),
                    value
                )
            })
            .collect()
    }

    fn half_period(port: &Port) -> String {
        format!("{}_HALF_PERIOD", port.get_name().as_str().to_uppercase())
    }

    /// Creates one signal for each port of the entity.
    fn into_signals(&self) -> String {
        let names: Vec<Identifier> = self
            .entity
            .get_ports()
            .iter()
            .map(|p| self.signal_name(p))
            .collect();
        let offset = names.iter().map(|n| n.len()).max().unwrap_or(0);
        let aligned = self.format.is_auto_type_aligned();

        let mut result = String::new();
        for (port, name) in self.entity.get_ports().iter().zip(names.iter()) {
            result.push_str(&format!(
                "{}signal {}{}: {}",
                self.tab(1),
                name,
                Self::padding(name.len(), offset, aligned),
                port.get_type()
            ));
            let init = match port.get_default() {
                Some(expr) => Some(expr.as_str()),
                None => initial_value(port.get_type()),
            };
            match init {
                Some(value) => result.push_str(&format!(" := {};\n", value)),
                None => result.push_str(&format!("; {}\n", TODO_INIT)),
            }
        }
        result
    }

    /// Creates a process for every port that looks like a clock or reset.
    fn into_drivers(&self) -> Vec<String> {
        self.drivers()
            .into_iter()
            .map(|(port, driver)| {
                let signal = self.signal_name(port);
                let mut result = format!(
                    "{}{}_driver : process\n{}begin\n",
                    self.tab(1),
                    port.get_name(),
                    self.tab(1)
                );
                match driver {
                    Driver::Clock => {
                        result.push_str(&format!(
                            "{}wait for {};\n",
                            self.tab(2),
                            Self::half_period(port)
                        ));
                        result.push_str(&format!(
                            "{}{} <= not {};\n",
                            self.tab(2),
                            signal,
                            signal
                        ));
                    }
                    Driver::Reset { active_low } => {
                        match reset_levels(port.get_type(), active_low) {
                            Some((asserted, released)) => {
                                result.push_str(&format!(
                                    "{}{} <= {};\n",
                                    self.tab(2),
                                    signal,
                                    asserted
                                ));
                                result.push_str(&format!(
                                    "{}wait for RESET_DURATION;\n",
                                    self.tab(2)
                                ));
                                result.push_str(&format!(
                                    "{}{} <= {};\n",
                                    self.tab(2),
                                    signal,
                                    released
                                ));
                            }
                            None => {
                                result.push_str(&format!(
                                    "{}{} {}\n",
                                    self.tab(2),
                                    TODO_ASSERT,
                                    signal
                                ));
                                result.push_str(&format!(
                                    "{}wait for RESET_DURATION;\n",
                                    self.tab(2)
                                ));
                                result.push_str(&format!(
                                    "{}{} {}\n",
                                    self.tab(2),
                                    TODO_RELEASE,
                                    signal
                                ));
                            }
                        }
                        result.push_str(&format!("{}wait;\n", self.tab(2)));
                    }
                }
                result.push_str(&format!("{}end process;\n", self.tab(1)));
                result
            })
            .collect()
    }

    /// Creates a `generic map` or `port map` with one association per line.
    fn into_map(&self, keyword: &str, pairs: Vec<(String, String)>) -> String {
        let offset = pairs
            .iter()
            .map(|(lhs, _)| lhs.chars().count())
            .max()
            .unwrap_or(0);
        let aligned = self.format.is_auto_mapping_aligned();
        let count = pairs.len();

        let mut result = format!("{}{} map (\n", self.tab(2), keyword);
        for (i, (lhs, rhs)) in pairs.iter().enumerate() {
            result.push_str(&format!(
                "{}{}{}=> {}",
                self.tab(3),
                lhs,
                Self::padding(lhs.chars().count(), offset, aligned),
                rhs
            ));
            if i + 1 < count {
                result.push(',');
            }
            result.push('\n');
        }
        result.push_str(&format!("{})", self.tab(2)));
        result
    }

    /// Creates the instantiation of the device under test.
    fn into_instance(&self) -> String {
        let mut result = format!(
            "{}{} : entity {}.{}",
            self.tab(1),
            self.format.get_instance_name(),
            self.format.get_library(),
            self.entity.get_name()
        );
        let generics: Vec<(String, String)> = self
            .entity
            .get_generics()
            .iter()
            .map(|g| {
                let actual = match g.get_class().is_opaque() {
                    true => String::from("open"),
                    false => g.get_name().to_string(),
                };
                (g.get_name().to_string(), actual)
            })
            .collect();
        let ports: Vec<(String, String)> = self
            .entity
            .get_ports()
            .iter()
            .map(|p| (p.get_name().to_string(), self.signal_name(p).to_string()))
            .collect();
        if generics.is_empty() == false {
            result.push('\n');
            result.push_str(&self.into_map("generic", generics));
        }
        if ports.is_empty() == false {
            result.push('\n');
            result.push_str(&self.into_map("port", ports));
        }
        result.push_str(";\n");
        result
    }

    /// Creates the process where test vectors are written.
    fn into_stimulus(&self) -> String {
        let label = match self.format.is_vunit() {
            true => "main",
            false => "stimulus",
        };
        let mut result = format!("{}{} : process\n{}begin\n", self.tab(1), label, self.tab(1));
        match self.format.is_vunit() {
            true => {
                result.push_str(&format!(
                    "{}test_runner_setup(runner, runner_cfg);\n",
                    self.tab(2)
                ));
                result.push_str(&format!("{}{}\n", self.tab(2), TODO_STIMULUS));
                result.push_str(&format!("{}test_runner_cleanup(runner);\n", self.tab(2)));
            }
            false => {
                result.push_str(&format!("{}{}\n", self.tab(2), TODO_STIMULUS));
                result.push_str(&format!("{}wait;\n", self.tab(2)));
            }
        }
        result.push_str(&format!("{}end process;\n", self.tab(1)));
        result
    }

    /// Creates the architecture holding the declarations and processes.
    fn into_architecture(&self) -> String {
        let arch = self.format.get_architecture();
        let mut result = format!("architecture {} of {} is\n", arch, self.get_name());

        let declarations: Vec<String> = vec![
            self.into_constants(),
            self.into_timing(),
            self.into_signals(),
        ]
        .into_iter()
        .filter(|s| s.is_empty() == false)
        .collect();
        result.push_str(&declarations.join("\n"));
        result.push_str("begin\n");

        let mut statements = self.into_drivers();
        statements.push(self.into_instance());
        statements.push(self.into_stimulus());
        result.push_str(&statements.join("\n"));
        result.push_str(&format!("end architecture {};\n", arch));
        result
    }
}

impl Display for Testbench<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.into_context(),
            self.into_entity(),
            self.into_architecture()
        )
    }
}
