// © 2026, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The demonstration walk over a `LinkedList`: build a list, delete its
//! first, middle and last elements, then provoke each error kind.

use sll::{
    errors::{ErrorKind, Result},
    DisplaySequence, LinkedList,
};
use sll_common::config;
use std::{
    fmt,
    io::{self, Write},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoSettings {
    pub values: Vec<i64>,
    pub edge_case_value: i64,
    pub out_of_range_position: usize,
}

impl DemoSettings {
    pub fn from_config() -> Self {
        DemoSettings {
            values: config::demo_values(),
            edge_case_value: config::edge_case_value(),
            out_of_range_position: config::out_of_range_position(),
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            values: vec![10, 20, 30, 40, 50],
            edge_case_value: 100,
            out_of_range_position: 5,
        }
    }
}

/// Which element a deletion step aims at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    First,
    Middle,
    Last,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::First, Target::Middle, Target::Last];

    /// The 1-based position of the target in a list of `size` elements.
    pub fn position(self, size: usize) -> usize {
        match self {
            Target::First => 1,
            Target::Middle => (size + 1) / 2,
            Target::Last => size,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::First => write!(f, "first"),
            Target::Middle => write!(f, "middle"),
            Target::Last => write!(f, "last"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deletion {
    pub target: Target,
    pub position: usize,
    /// The deleted value, or the message of the error.
    pub outcome: std::result::Result<i64, String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedError {
    EmptyList,
    IndexOutOfRange,
}

impl ExpectedError {
    fn matches(self, kind: &ErrorKind) -> bool {
        matches!(
            (self, kind),
            (ExpectedError::EmptyList, ErrorKind::EmptyList)
                | (ExpectedError::IndexOutOfRange, ErrorKind::IndexOutOfRange(..))
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeCaseOutcome {
    FailedAsExpected(String),
    WrongError(String),
    Deleted(i64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeCase {
    pub description: &'static str,
    pub position: usize,
    pub expected: ExpectedError,
    pub outcome: EdgeCaseOutcome,
}

impl EdgeCase {
    pub fn as_expected(&self) -> bool {
        matches!(self.outcome, EdgeCaseOutcome::FailedAsExpected(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoReport {
    pub deletions: Vec<Deletion>,
    pub edge_cases: Vec<EdgeCase>,
    pub final_sequence: DisplaySequence,
    pub final_size: usize,
}

impl DemoReport {
    pub fn all_edge_cases_as_expected(&self) -> bool {
        self.edge_cases.iter().all(EdgeCase::as_expected)
    }
}

pub fn append_logged<T: fmt::Display>(list: &mut LinkedList<T>, value: T) {
    let shown = value.to_string();
    list.append(value);
    info!("Added node with data: {}", shown);
}

/// Delete the `n`th node, logging the error before handing it back.
pub fn delete_logged<T: fmt::Display>(list: &mut LinkedList<T>, n: usize) -> Result<T> {
    match list.delete_nth(n) {
        Ok(value) => {
            info!("Deleted node at position {} with data: {}", n, value);
            Ok(value)
        }
        Err(err) => {
            error!("Error: {}", err);
            Err(err)
        }
    }
}

fn print_list<W: Write>(out: &mut W, list: &LinkedList<i64>) -> io::Result<()> {
    match list.to_display_sequence() {
        DisplaySequence::Empty => writeln!(out, "The list is empty!"),
        sequence => writeln!(out, "Linked List: {}", sequence),
    }
}

fn edge_case<W: Write>(
    out: &mut W,
    list: &mut LinkedList<i64>,
    description: &'static str,
    position: usize,
    expected: ExpectedError,
) -> io::Result<EdgeCase> {
    let outcome = match delete_logged(list, position) {
        Ok(value) => {
            writeln!(out, "Unexpectedly deleted node with data: {}", value)?;
            EdgeCaseOutcome::Deleted(value)
        }
        Err(err) if expected.matches(err.kind()) => {
            writeln!(out, "Expected error caught: {}", err)?;
            EdgeCaseOutcome::FailedAsExpected(err.to_string())
        }
        Err(err) => {
            writeln!(out, "Unexpected error: {}", err)?;
            EdgeCaseOutcome::WrongError(err.to_string())
        }
    };
    Ok(EdgeCase {
        description,
        position,
        expected,
        outcome,
    })
}

/// Run the demonstration, writing its transcript to `out`.
pub fn run<W: Write>(settings: &DemoSettings, out: &mut W) -> io::Result<DemoReport> {
    let rule = "=".repeat(60);
    writeln!(out, "{}", rule)?;
    writeln!(out, "LINKED LIST IMPLEMENTATION")?;
    writeln!(out, "{}", rule)?;

    let mut list = LinkedList::new();

    writeln!(out, "\n1. Creating an empty linked list:")?;
    writeln!(out, "Is empty: {}", list.is_empty())?;
    writeln!(out, "Size: {}", list.size())?;
    print_list(out, &list)?;

    writeln!(out, "\n2. Adding nodes to the list:")?;
    for &value in &settings.values {
        append_logged(&mut list, value);
    }
    writeln!(out, "\nAfter adding nodes - Size: {}", list.size())?;
    print_list(out, &list)?;

    writeln!(out, "\n3. Testing delete operations:")?;
    let mut deletions = Vec::new();
    for target in Target::ALL {
        if list.is_empty() {
            break;
        }
        writeln!(out, "\nBefore deletion - Size: {}", list.size())?;
        print_list(out, &list)?;

        // The middle is taken on the current size, which shrinks between steps.
        let position = target.position(list.size());
        debug!("Deleting the {} node (position {})", target, position);
        let outcome = match delete_logged(&mut list, position) {
            Ok(value) => {
                writeln!(out, "After deletion - Size: {}", list.size())?;
                print_list(out, &list)?;
                Ok(value)
            }
            Err(err) => {
                writeln!(out, "Deletion failed: {}", err)?;
                Err(err.to_string())
            }
        };
        deletions.push(Deletion {
            target,
            position,
            outcome,
        });
    }

    writeln!(out, "\n4. Testing edge cases:")?;
    let mut edge_cases = Vec::new();

    writeln!(out, "\nTesting deletion from empty list:")?;
    let mut list = LinkedList::new();
    edge_cases.push(edge_case(
        out,
        &mut list,
        "deletion from an empty list",
        1,
        ExpectedError::EmptyList,
    )?);

    writeln!(out, "\nTesting deletion with invalid index:")?;
    append_logged(&mut list, settings.edge_case_value);
    print_list(out, &list)?;

    let position = settings.out_of_range_position;
    writeln!(out, "\nDeleting from position {}", position)?;
    edge_cases.push(edge_case(
        out,
        &mut list,
        "deletion past the end",
        position,
        ExpectedError::IndexOutOfRange,
    )?);

    writeln!(out, "\nDeleting from position 0")?;
    edge_cases.push(edge_case(
        out,
        &mut list,
        "deletion at position zero",
        0,
        ExpectedError::IndexOutOfRange,
    )?);

    writeln!(out, "\n5. Final state of the linked list:")?;
    print_list(out, &list)?;
    writeln!(out, "Final size: {}", list.size())?;

    let report = DemoReport {
        deletions,
        edge_cases,
        final_sequence: list.to_display_sequence(),
        final_size: list.size(),
    };

    writeln!(out, "\n{}", rule)?;
    if report.all_edge_cases_as_expected() {
        writeln!(out, "IMPLEMENTATION COMPLETED SUCCESSFULLY!")?;
    } else {
        writeln!(out, "IMPLEMENTATION COMPLETED WITH UNEXPECTED RESULTS!")?;
    }
    writeln!(out, "{}", rule)?;

    Ok(report)
}
