use std::path::PathBuf;

use assertables::*;
use chrono::{
    TimeZone,
    Utc,
};
use ocg_core::ocel::ObjectType;
use ocg_gen::{
    save_ocel_log,
    FakeNames,
    FlightGenerator,
    GeneratorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use super::*;

#[fixture]
fn log_file(#[default(5)] num_flights: usize) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let generator = FlightGenerator::new(
        GeneratorConfig::default()
            .with_num_flights(num_flights)
            .with_delay_probability(0.0),
    )
    .unwrap();
    let mut clock = Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap();
    let log = generator.generate(&mut StdRng::seed_from_u64(3), &mut FakeNames, &mut clock);
    let path = save_ocel_log(&log, &dir.path().join("flights")).unwrap();
    (dir, path)
}

fn show_args(input: PathBuf, offset: usize, limit: usize, object_type: ObjectType) -> show::Args {
    show::Args { input, offset, limit, object_type }
}

fn render(args: &show::Args) -> String {
    let mut out = Vec::new();
    show::run(args, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[rstest]
fn test_show_plane_window(log_file: (TempDir, PathBuf)) {
    let (_dir, path) = log_file;
    let output = render(&show_args(path, 2, 2, ObjectType::Plane));

    let lines: Vec<_> = output.lines().collect();
    // two cases, each a header + 4 events + separator
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "Window index: 0 Case index: 2 Case ID: p3");
    assert_starts_with!(lines[1], "Event index: 0 Event activity: boarding Event time: 2024-03-14T");
    assert_starts_with!(lines[4], "Event index: 3 Event activity: arrival");
    assert_eq!(lines[6], "Window index: 1 Case index: 3 Case ID: p4");
}

#[rstest]
fn test_show_orders_cases_by_flight_number(#[with(12)] log_file: (TempDir, PathBuf)) {
    let (_dir, path) = log_file;

    let headers = |offset| {
        render(&show_args(path.clone(), offset, 3, ObjectType::Plane))
            .lines()
            .filter(|line| line.starts_with("Window index"))
            .map(String::from)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        headers(0),
        vec![
            "Window index: 0 Case index: 0 Case ID: p1",
            "Window index: 1 Case index: 1 Case ID: p2",
            "Window index: 2 Case index: 2 Case ID: p3",
        ]
    );
    assert_eq!(
        headers(9),
        vec![
            "Window index: 0 Case index: 9 Case ID: p10",
            "Window index: 1 Case index: 10 Case ID: p11",
            "Window index: 2 Case index: 11 Case ID: p12",
        ]
    );
}

#[rstest]
fn test_show_airports(log_file: (TempDir, PathBuf)) {
    let (_dir, path) = log_file;
    let output = render(&show_args(path, 0, 1, ObjectType::Airport));
    assert_starts_with!(output, "Window index: 0 Case index: 0 Case ID: a1\n");
}

#[rstest]
fn test_show_offset_past_end(log_file: (TempDir, PathBuf)) {
    let (_dir, path) = log_file;
    assert_eq!(render(&show_args(path, 10, 3, ObjectType::Plane)), "");
}

#[rstest]
fn test_show_missing_file() {
    let args = show_args(PathBuf::from("/does/not/exist.jsonocel"), 0, 3, ObjectType::Plane);
    assert!(show::run(&args, &mut Vec::new()).is_err());
}

#[rstest]
fn test_parse_show_defaults() {
    let root = OcgCommandRoot::try_parse_from(["ocgctl", "show", "flights.jsonocel"]).unwrap();
    let OcgSubcommand::Show(args) = root.subcommand else {
        panic!("expected show subcommand");
    };
    assert_eq!(args.input, PathBuf::from("flights.jsonocel"));
    assert_eq!(args.offset, 0);
    assert_eq!(args.limit, 3);
    assert_eq!(args.object_type, ObjectType::Plane);
}

#[rstest]
fn test_parse_show_options() {
    let root = OcgCommandRoot::try_parse_from([
        "ocgctl",
        "show",
        "flights.jsonocel",
        "--offset",
        "2",
        "--limit",
        "5",
        "--object-type",
        "airport",
    ])
    .unwrap();
    let OcgSubcommand::Show(args) = root.subcommand else {
        panic!("expected show subcommand");
    };
    assert_eq!((args.offset, args.limit, args.object_type), (2, 5, ObjectType::Airport));
}

#[rstest]
fn test_parse_rejects_unknown_object_type() {
    assert!(OcgCommandRoot::try_parse_from(["ocgctl", "show", "f", "--object-type", "train"]).is_err());
}

#[rstest]
fn test_command_definition() {
    OcgCommandRoot::command().debug_assert();
}
