//! Smoke test for the sr-app service layer.

use sr_app::{AppError, Reply, RoadForm, Session, parse_command};

/// Feed a shell script through the parser and session, collecting outcomes.
fn run_script(session: &mut Session, script: &str) -> Vec<Result<Reply, AppError>> {
    script
        .lines()
        .filter_map(|line| parse_command(line).transpose())
        .map(|cmd| cmd.and_then(|cmd| session.execute(cmd)))
        .collect()
}

#[test]
fn scripted_session() {
    let mut session = Session::new();
    let outcomes = run_script(
        &mut session,
        "
        # build a small network
        road UiTM Jasin, Jasin, 4
        road Jasin, Melaka Sentral, 30
        road UiTM Jasin, Melaka Sentral, 40
        road Jasin, Nowhere, abc
        route UiTM Jasin, Melaka Sentral
        locations
        ",
    );

    assert_eq!(outcomes.len(), 6);
    assert!(outcomes[..3].iter().all(|o| matches!(o, Ok(Reply::RoadAdded(_)))));
    assert!(matches!(
        outcomes[3],
        Err(AppError::MalformedDistance { .. })
    ));

    match &outcomes[4] {
        Ok(Reply::Route(report)) => {
            assert_eq!(report.route.distance, 34.0);
            assert_eq!(
                report.route.path,
                ["UiTM Jasin", "Jasin", "Melaka Sentral"]
            );
            assert_eq!(
                report.route.to_string(),
                "UiTM Jasin → Jasin → Melaka Sentral"
            );
        }
        other => panic!("expected a route, got {other:?}"),
    }

    match &outcomes[5] {
        Ok(Reply::Locations(locations)) => {
            assert_eq!(locations, &["Jasin", "Melaka Sentral", "UiTM Jasin"]);
        }
        other => panic!("expected locations, got {other:?}"),
    }
}

#[test]
fn parallel_roads_are_all_kept() {
    let mut session = Session::new();
    session.submit_road(&RoadForm::new("A", "B", "5")).unwrap();
    session.submit_road(&RoadForm::new("A", "B", "2")).unwrap();

    let listing = session.network_listing().unwrap();
    assert_eq!(listing[0].to_string(), "A: B (5), B (2)");
    assert_eq!(listing[1].to_string(), "B: A (5), A (2)");

    let report = session.compute_route("A", "B").unwrap();
    assert_eq!(report.route.distance, 2.0);
    assert_eq!(report.view.edges.len(), 1);
    assert_eq!(report.view.edges[0].weights, [5.0, 2.0]);
}

#[test]
fn rejected_submissions_do_not_register_locations() {
    let mut session = Session::new();
    for form in [
        RoadForm::new("A", "B", ""),
        RoadForm::new("A", "", "1"),
        RoadForm::new("A", "B", "abc"),
        RoadForm::new("A", "B", "-1"),
        RoadForm::new("A", "B", "NaN"),
    ] {
        assert!(session.submit_road(&form).is_err());
    }
    assert!(session.locations().is_empty());
    assert!(session.network_listing().unwrap().is_empty());
    assert!(session.view().unwrap().edges.is_empty());
}

#[test]
fn no_route_is_distinct_from_bad_input() {
    let mut session = Session::new();
    session.submit_road(&RoadForm::new("A", "B", "1")).unwrap();
    session.submit_road(&RoadForm::new("C", "D", "1")).unwrap();

    let err = session.compute_route("B", "C").unwrap_err();
    assert!(err.is_informational());

    let err = session
        .submit_road(&RoadForm::new("A", "B", "x"))
        .unwrap_err();
    assert!(!err.is_informational());
}
