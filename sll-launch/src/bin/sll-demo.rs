// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(unused_must_use)]

extern crate env_logger;
#[macro_use]
extern crate log;
extern crate sll_common;
extern crate sll_launch;

use sll_common::config;
use sll_launch::{demo, DemoSettings};
use std::{io, process};

fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter_or("SLL_LOG", "info"));

    for arg in config::get_filtered_args().into_iter().skip(1) {
        warn!("Ignoring unexpected argument '{}'", arg);
    }
    debug!("Settings: {}", config::dump());

    let settings = DemoSettings::from_config();
    let result = if config::quiet() {
        demo::run(&settings, &mut io::sink())
    } else {
        demo::run(&settings, &mut io::stdout().lock())
    };

    match result {
        Ok(report) if report.all_edge_cases_as_expected() => {}
        Ok(report) => {
            for case in report.edge_cases.iter().filter(|case| !case.as_expected()) {
                error!(
                    "Edge case '{}' at position {} did not fail with {:?}: {:?}",
                    case.description, case.position, case.expected, case.outcome
                );
            }
            process::exit(1);
        }
        Err(err) => {
            error!("Failed to write the demonstration transcript: {}", err);
            process::exit(2);
        }
    }
}
