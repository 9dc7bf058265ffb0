use sll::DisplaySequence;
use sll_launch::{
    demo::{self, Deletion, EdgeCaseOutcome, ExpectedError, Target},
    DemoSettings,
};

fn run(settings: &DemoSettings) -> (demo::DemoReport, String) {
    let mut transcript = Vec::new();
    let report = demo::run(settings, &mut transcript).expect("writing to a vector cannot fail");
    (report, String::from_utf8(transcript).unwrap())
}

#[test]
fn default_walk() {
    let (report, transcript) = run(&DemoSettings::default());

    assert_eq!(
        report.deletions,
        vec![
            Deletion { target: Target::First, position: 1, outcome: Ok(10) },
            Deletion { target: Target::Middle, position: 2, outcome: Ok(30) },
            Deletion { target: Target::Last, position: 3, outcome: Ok(50) },
        ]
    );

    let kinds = report.edge_cases.iter().map(|case| (case.position, case.expected)).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            (1, ExpectedError::EmptyList),
            (5, ExpectedError::IndexOutOfRange),
            (0, ExpectedError::IndexOutOfRange),
        ]
    );
    assert!(report.all_edge_cases_as_expected());
    assert_eq!(
        report.edge_cases[1].outcome,
        EdgeCaseOutcome::FailedAsExpected("Index 5 is out of range. List has 1 elements.".to_string())
    );

    assert_eq!(report.final_sequence, DisplaySequence::Values(vec!["100".to_string()]));
    assert_eq!(report.final_size, 1);

    assert!(transcript.contains("Is empty: true"));
    assert!(transcript.contains("The list is empty!"));
    assert!(transcript.contains("Linked List: 10 -> 20 -> 30 -> 40 -> 50 -> None"));
    assert!(transcript.contains("Linked List: 20 -> 40 -> None"));
    assert!(transcript.contains("Expected error caught: Cannot delete from an empty list!"));
    assert!(transcript.contains("Final size: 1"));
    assert!(transcript.contains("IMPLEMENTATION COMPLETED SUCCESSFULLY!"));
}

#[test]
fn walk_stops_once_the_list_is_empty() {
    let settings = DemoSettings {
        values: vec![7],
        ..DemoSettings::default()
    };
    let (report, _) = run(&settings);

    assert_eq!(
        report.deletions,
        vec![Deletion { target: Target::First, position: 1, outcome: Ok(7) }]
    );
    assert!(report.all_edge_cases_as_expected());
}

#[test]
fn walk_without_values_skips_deletions() {
    let settings = DemoSettings {
        values: vec![],
        ..DemoSettings::default()
    };
    let (report, transcript) = run(&settings);

    assert!(report.deletions.is_empty());
    assert!(transcript.contains("After adding nodes - Size: 0"));
}

#[test]
fn in_range_edge_position_is_reported() {
    let settings = DemoSettings {
        out_of_range_position: 1,
        ..DemoSettings::default()
    };
    let (report, transcript) = run(&settings);

    assert!(!report.all_edge_cases_as_expected());
    assert_eq!(report.edge_cases[1].outcome, EdgeCaseOutcome::Deleted(100));
    // The list is empty again, so deleting position 0 reports the empty list.
    assert_eq!(
        report.edge_cases[2].outcome,
        EdgeCaseOutcome::WrongError("Cannot delete from an empty list!".to_string())
    );
    assert_eq!(report.final_sequence, DisplaySequence::Empty);
    assert!(transcript.contains("IMPLEMENTATION COMPLETED WITH UNEXPECTED RESULTS!"));
}
