mod common;

use common::SAMPLE_CSV;
use movelog::MovementCollection;
use movelog::config::ColumnLabels;
use movelog::core::Report;

fn collection() -> MovementCollection {
    MovementCollection::from_reader(SAMPLE_CSV.as_bytes(), &ColumnLabels::default()).unwrap()
}

#[test]
fn test_build_report() {
    let report = Report::build(&collection(), 2, Some(4));

    assert_eq!(report.file_count, Some(4));
    assert_eq!(report.total, 3);
    assert_eq!(
        report.recent.iter().map(|m| m.id()).collect::<Vec<_>>(),
        vec![2, 4]
    );
    assert_eq!(
        report.by_room.iter().map(|m| m.room()).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert_eq!(report.workplace, 2);
    assert_eq!(report.non_workplace, 1);
}

#[test]
fn test_render_report() {
    let text = Report::build(&collection(), 5, None).render();

    assert!(!text.contains("Files found"));
    assert!(text.contains("Latest 3 movements (by date):"));
    assert!(text.contains("2024-01-03 09:30:00 | 2    | No"));
    assert!(text.contains("Room | Timestamp"));
    assert!(text.contains("Workplace movements:     2"));
    assert!(text.contains("Non-workplace movements: 1"));
}

#[test]
fn test_report_json_keeps_csv_timestamps() {
    let report = Report::build(&collection(), 1, None);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["recent"][0]["timestamp"], "2024-01-03 09:30:00");
    assert_eq!(json["recent"][0]["is_workplace"], false);
    assert_eq!(json["file_count"], serde_json::Value::Null);
}
