// File: crates/ratings-core/tests/loader.rs
// Purpose: CSV loading contract: header required, any column order, text preserved.

use std::io::Cursor;

use ratings_core::{BarChart, ChartConfig, ChartError, Dataset};

const CSV: &str = "\
Year,Season,Avg. Viewers (mil),Episodes,Viewers (mil),Most watched episode
2010,1,2.1,12,3.2,\"\"\"Pilot\"\"\"
2011,2, 3.4 ,13,4.41,\"\"\"Homecoming, Part 1\"\"\"
";

#[test]
fn loads_rows_in_source_order() {
    let ds = Dataset::from_reader(Cursor::new(CSV)).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.headers()[0], "Year");
    let second = &ds.rows()[1];
    assert_eq!(second.get("Season"), Some("2"));
    assert_eq!(second.get("Most watched episode"), Some("\"Homecoming, Part 1\""));
    assert_eq!(second.get("Avg. Viewers (mil)"), Some(" 3.4 "));
    assert_eq!(second.fields().count(), 6);
}

#[test]
fn whitespace_around_numbers_still_parses() {
    let ds = Dataset::from_reader(Cursor::new(CSV)).unwrap();
    let chart = BarChart::new(ds, ChartConfig::default()).unwrap();
    assert_eq!(chart.bounds().y_max, 3.45);
    // Label keeps the raw text.
    assert_eq!(chart.bars()[1].label, " 3.4 ");
}

#[test]
fn missing_column_is_reported() {
    let err = Dataset::from_reader(Cursor::new("Season,Year\n1,2010\n")).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn(ref c) if c == "Episodes"));
}

#[test]
fn unreachable_source_is_an_io_error() {
    let err = Dataset::from_path("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }));
}

#[test]
fn ragged_rows_are_rejected() {
    let text = "Season,Year,Episodes,Avg. Viewers (mil),Most watched episode,Viewers (mil)\n1,2010,12\n";
    assert!(matches!(Dataset::from_reader(Cursor::new(text)), Err(ChartError::Csv(_))));
}

#[test]
fn header_only_file_has_no_rows() {
    let text = "Season,Year,Episodes,Avg. Viewers (mil),Most watched episode,Viewers (mil)\n";
    let ds = Dataset::from_reader(Cursor::new(text)).unwrap();
    assert!(ds.is_empty());
    assert!(matches!(BarChart::new(ds, ChartConfig::default()), Err(ChartError::EmptyDataset)));
}
