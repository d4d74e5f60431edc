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

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Layout and heuristic settings for synthesized testbenches.
///
/// Every field is optional so settings from several sources can be layered
/// with `merge`; the getters supply the built-in defaults.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchFormat {
    #[serde(rename = "tab-size")]
    tab_size: Option<u8>,
    suffix: Option<String>,
    architecture: Option<String>,
    #[serde(rename = "instance-name")]
    instance_name: Option<String>,
    library: Option<String>,
    #[serde(rename = "signal-prefix")]
    signal_prefix: Option<String>,
    #[serde(rename = "signal-suffix")]
    signal_suffix: Option<String>,
    #[serde(rename = "mapping-auto-alignment")]
    mapping_auto_alignment: Option<bool>,
    #[serde(rename = "type-auto-alignment")]
    type_auto_alignment: Option<bool>,
    #[serde(rename = "clock-half-period")]
    clock_half_period: Option<String>,
    #[serde(rename = "reset-duration")]
    reset_duration: Option<String>,
    vunit: Option<bool>,
}

impl BenchFormat {
    pub fn new() -> Self {
        Self {
            tab_size: Some(2),
            suffix: Some(String::from("_tb")),
            architecture: Some(String::from("sim")),
            instance_name: Some(String::from("dut")),
            library: Some(String::from("work")),
            signal_prefix: Some(String::new()),
            signal_suffix: Some(String::new()),
            mapping_auto_alignment: Some(true),
            type_auto_alignment: Some(true),
            clock_half_period: Some(String::from("5 ns")),
            reset_duration: Some(String::from("100 ns")),
            vunit: Some(false),
        }
    }

    pub fn get_tab_size(&self) -> u8 {
        self.tab_size.unwrap_or(2)
    }

    /// Text appended to the entity name to name the testbench.
    pub fn get_suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or("_tb")
    }

    pub fn get_architecture(&self) -> &str {
        self.architecture.as_deref().unwrap_or("sim")
    }

    pub fn get_instance_name(&self) -> &str {
        self.instance_name.as_deref().unwrap_or("dut")
    }

    /// The library the device under test is compiled into.
    pub fn get_library(&self) -> &str {
        self.library.as_deref().unwrap_or("work")
    }

    pub fn get_signal_prefix(&self) -> &str {
        self.signal_prefix.as_deref().unwrap_or("")
    }

    pub fn get_signal_suffix(&self) -> &str {
        self.signal_suffix.as_deref().unwrap_or("")
    }

    pub fn is_auto_mapping_aligned(&self) -> bool {
        self.mapping_auto_alignment.unwrap_or(true)
    }

    pub fn is_auto_type_aligned(&self) -> bool {
        self.type_auto_alignment.unwrap_or(true)
    }

    pub fn get_clock_half_period(&self) -> &str {
        self.clock_half_period.as_deref().unwrap_or("5 ns")
    }

    pub fn get_reset_duration(&self) -> &str {
        self.reset_duration.as_deref().unwrap_or("100 ns")
    }

    /// Checks if the testbench is written as a VUnit test bench.
    pub fn is_vunit(&self) -> bool {
        self.vunit.unwrap_or(false)
    }

    pub fn set_vunit(mut self, enabled: bool) -> Self {
        self.vunit = Some(enabled);
        self
    }

    pub fn set_tab_size(mut self, size: u8) -> Self {
        self.tab_size = Some(size);
        self
    }

    pub fn set_suffix(mut self, suffix: &str) -> Self {
        self.suffix = Some(suffix.to_string());
        self
    }

    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<Self>) -> () {
        if let Some(rhs) = rhs {
            if self.tab_size.is_some() == false {
                self.tab_size = rhs.tab_size
            }
            if self.suffix.is_some() == false {
                self.suffix = rhs.suffix
            }
            if self.architecture.is_some() == false {
                self.architecture = rhs.architecture
            }
            if self.instance_name.is_some() == false {
                self.instance_name = rhs.instance_name
            }
            if self.library.is_some() == false {
                self.library = rhs.library
            }
            if self.signal_prefix.is_some() == false {
                self.signal_prefix = rhs.signal_prefix
            }
            if self.signal_suffix.is_some() == false {
                self.signal_suffix = rhs.signal_suffix
            }
            if self.mapping_auto_alignment.is_some() == false {
                self.mapping_auto_alignment = rhs.mapping_auto_alignment
            }
            if self.type_auto_alignment.is_some() == false {
                self.type_auto_alignment = rhs.type_auto_alignment
            }
            if self.clock_half_period.is_some() == false {
                self.clock_half_period = rhs.clock_half_period
            }
            if self.reset_duration.is_some() == false {
                self.reset_duration = rhs.reset_duration
            }
            if self.vunit.is_some() == false {
                self.vunit = rhs.vunit
            }
        }
    }
}
