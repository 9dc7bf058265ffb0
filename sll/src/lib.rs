// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(unused_must_use)]

#[macro_use]
extern crate error_chain;

mod display;
pub mod errors;
mod list;
mod node;

pub use display::*;
pub use list::*;
