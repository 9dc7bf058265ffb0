// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// The values of a list rendered in order, or the marker of an empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplaySequence {
    Empty,
    Values(Vec<String>),
}

impl DisplaySequence {
    pub fn is_empty(&self) -> bool {
        matches!(self, DisplaySequence::Empty)
    }

    pub fn values(&self) -> &[String] {
        match self {
            DisplaySequence::Empty => &[],
            DisplaySequence::Values(values) => values,
        }
    }
}

impl fmt::Display for DisplaySequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in self.values() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "None")
    }
}
