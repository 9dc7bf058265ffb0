// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(deprecated)]

mod commandline;

use self::commandline::CommandLine;
use config_crate::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, sync::RwLock};

lazy_static! {
    static ref SETTINGS: RwLock<Config> = RwLock::new({
        let mut settings = Config::default();

        // 1. Default values
        set_defaults(&mut settings).unwrap();

        // 2. Override with the optional TOML file "Sll.toml" (if there is any)
        settings.merge(
            File::with_name("Sll.toml").required(false)
        ).unwrap();

        // 3. Override with an optional TOML file specified by the `SLL_CONFIG` env variable
        settings.merge(
            File::with_name(&env::var("SLL_CONFIG").unwrap_or_default()).required(false)
        ).unwrap();

        // 4. Override with env variables (`SLL_QUIET`, ...)
        settings.merge(
            Environment::with_prefix("SLL").ignore_empty(true)
        ).unwrap();

        // 5. Override with command-line arguments -S<arg>=<val>
        settings.merge(
            CommandLine::with_prefix("-S").ignore_invalid(true)
        ).unwrap();

        settings
    });
}

// Keys are lowercase: the environment and command-line sources lowercase
// theirs, and TOML files must spell them that way (`quiet = true`).
const DEMO_VALUES: &str = "demo_values";
const EDGE_CASE_VALUE: &str = "edge_case_value";
const OUT_OF_RANGE_POSITION: &str = "out_of_range_position";
const QUIET: &str = "quiet";

fn set_defaults(settings: &mut Config) -> Result<(), ConfigError> {
    settings.set_default::<Vec<i64>>(DEMO_VALUES, vec![10, 20, 30, 40, 50])?;
    settings.set_default(EDGE_CASE_VALUE, 100)?;
    settings.set_default(OUT_OF_RANGE_POSITION, 5)?;
    settings.set_default(QUIET, false)?;
    Ok(())
}

/// Return vector of arguments filtered out by prefix
pub fn get_filtered_args() -> Vec<String> {
    CommandLine::with_prefix("-S")
        .get_remaining_args()
        .collect::<Vec<String>>()
}

/// Generate a dump of the settings
pub fn dump() -> String {
    format!("{:?}", SETTINGS.read().unwrap())
}

fn read_optional_setting<T>(name: &'static str) -> Option<T>
where
    T: Deserialize<'static>,
{
    SETTINGS.read().unwrap().get(name).ok()
}

fn read_setting<T>(name: &'static str) -> T
where
    T: Deserialize<'static>,
{
    read_optional_setting(name).unwrap()
}

/// The values appended to the list at the start of the demonstration.
pub fn demo_values() -> Vec<i64> {
    read_setting(DEMO_VALUES)
}

/// The single value appended before the out-of-range deletions.
pub fn edge_case_value() -> i64 {
    read_setting(EDGE_CASE_VALUE)
}

/// A position past the end of the one-element edge-case list.
pub fn out_of_range_position() -> usize {
    read_setting(OUT_OF_RANGE_POSITION)
}

/// Should we hide the printed transcript?
pub fn quiet() -> bool {
    read_setting(QUIET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_crate::FileFormat;

    fn with_defaults() -> Config {
        let mut settings = Config::default();
        set_defaults(&mut settings).unwrap();
        settings
    }

    #[test]
    fn settings_have_defaults() {
        assert!(read_optional_setting::<Vec<i64>>(DEMO_VALUES).is_some());
        assert!(read_optional_setting::<i64>(EDGE_CASE_VALUE).is_some());
        assert!(read_optional_setting::<usize>(OUT_OF_RANGE_POSITION).is_some());
        assert!(read_optional_setting::<bool>(QUIET).is_some());
        assert!(read_optional_setting::<String>("no_such_setting").is_none());
    }

    #[test]
    fn command_line_overrides_defaults() {
        let mut settings = with_defaults();
        settings.merge(
            CommandLine::with_prefix("-S")
                .ignore_invalid(true)
                .with_args(&["sll-demo", "-SQUIET=true", "-Sout_of_range_position=9"])
        ).unwrap();

        assert_eq!(settings.get::<bool>(QUIET).unwrap(), true);
        assert_eq!(settings.get::<usize>(OUT_OF_RANGE_POSITION).unwrap(), 9);
        assert_eq!(settings.get::<i64>(EDGE_CASE_VALUE).unwrap(), 100);
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut settings = with_defaults();
        settings.merge(
            File::from_str("demo_values = [1, 2]\nedge_case_value = 3", FileFormat::Toml)
        ).unwrap();

        assert_eq!(settings.get::<Vec<i64>>(DEMO_VALUES).unwrap(), vec![1, 2]);
        assert_eq!(settings.get::<i64>(EDGE_CASE_VALUE).unwrap(), 3);
        assert_eq!(settings.get::<bool>(QUIET).unwrap(), false);
    }
}
