//! Integration tests for `ReportService`

mod support;

use std::sync::Arc;

use bitacora_core::{ActivityService, ReportService, ReportSummary};
use bitacora_domain::constants::{EMPTY_REPORT_MESSAGE, REPORT_HEADER};
use bitacora_domain::BitacoraError;
use support::{activity_fields, FailingReportSink, InMemoryActivityRepository, RecordingReportSink};

struct Fixture {
    activities: ActivityService,
    reports: ReportService,
    sink: Arc<RecordingReportSink>,
}

fn fixture() -> Fixture {
    let repository = Arc::new(InMemoryActivityRepository::new());
    let sink = Arc::new(RecordingReportSink::new());
    Fixture {
        activities: ActivityService::new(repository.clone()),
        reports: ReportService::new(repository, sink.clone()),
        sink,
    }
}

#[test]
fn test_report_lists_header_then_activities() {
    let fx = fixture();
    fx.activities.record(activity_fields("2025-03-06")).unwrap();
    fx.activities.record(activity_fields("2025-03-02")).unwrap();
    fx.activities.record(activity_fields("2025-04-01")).unwrap();

    let summary = fx.reports.generate("2025-03-01", "2025-03-31", "march.txt").unwrap();
    assert_eq!(
        summary,
        ReportSummary { destination: "memory://march.txt".to_string(), activity_count: 2 }
    );

    let lines = fx.sink.lines("march.txt").unwrap();
    assert_eq!(lines[0], format!("{REPORT_HEADER} from 2025-03-01 to 2025-03-31"));
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("#2 | 2025-03-02 | supervisor: Juan Pérez"));
    assert!(lines[2].starts_with("#1 | 2025-03-06 |"));
    assert!(lines[2].ends_with("attachments: - | weather: Sunny"));
}

#[test]
fn test_empty_report_has_placeholder() {
    let fx = fixture();

    let summary = fx.reports.generate("2025-03-01", "2025-03-31", "empty.txt").unwrap();
    assert_eq!(summary.activity_count, 0);

    let lines = fx.sink.lines("empty.txt").unwrap();
    assert_eq!(lines.last().map(String::as_str), Some(EMPTY_REPORT_MESSAGE));
}

#[test]
fn test_invalid_dates_and_range_are_rejected() {
    let fx = fixture();

    let err = fx.reports.generate("2025/03/01", "2025-03-31", "r.txt").unwrap_err();
    assert!(matches!(err, BitacoraError::InvalidDate(_)));

    let err = fx.reports.generate("2025-03-31", "2025-03-01", "r.txt").unwrap_err();
    assert!(matches!(err, BitacoraError::InvalidRange(_)));

    assert!(fx.sink.is_empty());
}

#[test]
fn test_invalid_destination_name_is_a_report_error() {
    let fx = fixture();

    let names = ["", "no-extension", "../escape.txt", "bad*.txt", "tab\there.txt", "a\nb.txt"];
    for name in names {
        let err = fx.reports.generate("2025-03-01", "2025-03-31", name).unwrap_err();
        assert!(matches!(err, BitacoraError::Report(_)), "{name:?} gave {err:?}");
    }

    assert!(fx.sink.is_empty());
}

#[test]
fn test_date_errors_take_precedence_over_name_errors() {
    let fx = fixture();

    let err = fx.reports.generate("bad", "2025-03-31", "").unwrap_err();
    assert!(matches!(err, BitacoraError::InvalidDate(_)));
}

#[test]
fn test_sink_failure_surfaces_as_report_error() {
    let repository = Arc::new(InMemoryActivityRepository::new());
    let reports = ReportService::new(repository, Arc::new(FailingReportSink));

    let err = reports.generate("2025-03-01", "2025-03-31", "report.txt").unwrap_err();
    assert!(matches!(err, BitacoraError::Report(ref msg) if msg.contains("disk full")));
}
