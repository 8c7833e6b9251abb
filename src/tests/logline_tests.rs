// src/tests/logline_tests.rs

//! tests for `logline.rs`

#![allow(non_snake_case)]

use crate::data::logline::{has_marker, EventKind, LogLine};

use ::test_case::test_case;

#[test_case("Jan 1 00:00:01 host bbackupd: NOTICE: backup-start", true)]
#[test_case("Jan 1 00:00:01 host Box Backup: NOTICE: hello", true)]
#[test_case("Jan 1 00:00:01 host cron[12]: (root) CMD (run-parts)", false)]
#[test_case("", false; "empty")]
fn test_has_marker(line: &str, expect: bool) {
    assert_eq!(has_marker(line), expect);
}

#[test]
fn test_parse_fields() {
    let logline = LogLine::parse("Jan  1 00:00:05 myhost bbackupd[123]: Uploading complete file: /etc/passwd").unwrap();
    assert_eq!(logline.month, "Jan");
    assert_eq!(logline.day, "1");
    assert_eq!(logline.time, "00:00:05");
    assert_eq!(logline.hostname, "myhost");
    assert_eq!(logline.process_tag, "bbackupd[123]");
    assert_eq!(logline.category, "Uploading complete file");
    assert_eq!(logline.detail, "/etc/passwd");
    assert_eq!(logline.timestamp(), "1 Jan 00:00:05");
}

#[test]
fn test_parse_unwraps_level() {
    let logline = LogLine::parse("Jan 1 00:00:05 host bbackupd: NOTICE: Uploaded file: /etc/passwd").unwrap();
    assert_eq!(logline.category, "Uploaded file");
    assert_eq!(logline.detail, "/etc/passwd");
    assert_eq!(logline.event_kind(), EventKind::Uploaded);
}

#[test]
fn test_parse_keeps_warning_detail() {
    let logline = LogLine::parse("Jan 1 00:00:05 host bbackupd: WARNING: Failed to read file: /x/y").unwrap();
    assert_eq!(logline.category, "WARNING");
    assert_eq!(logline.detail, "Failed to read file: /x/y");
    assert_eq!(logline.event_kind(), EventKind::Warning);
}

#[test]
fn test_parse_strips_cr() {
    let logline = LogLine::parse("Jan 1 00:00:05 host bbackupd: ERROR: bad thing\r").unwrap();
    assert_eq!(logline.detail, "bad thing");
}

#[test_case("Jan 1 00:00:05 host kernel: NOTICE: Uploaded file: /a"; "no marker")]
#[test_case("bbackupd started"; "marker without grammar")]
#[test_case("Jan 1 00:00:05 host bbackupd: no category here"; "one colon")]
fn test_parse_none(line: &str) {
    assert_eq!(LogLine::parse(line), None);
}

#[test_case("Jan 1 00:00:01 host bbackupd: NOTICE: backup-start", EventKind::Start)]
#[test_case("Jan 1 00:00:01 host bbackupd[9]: backup-start: run", EventKind::Start; "start in category")]
#[test_case("Jan 1 00:01:00 host bbackupd: NOTICE: backup-finish", EventKind::Finish)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Uploading patch to file: /a", EventKind::Patched)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Uploading complete file: /a", EventKind::Uploaded)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Uploaded file: /a", EventKind::Uploaded)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Synchronised file: /a", EventKind::Synced)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: WARNING: w", EventKind::Warning)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: ERROR: e", EventKind::Error)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: error: e", EventKind::Other; "category is case sensitive")]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Uploaded files: /a", EventKind::Other; "category is exact")]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: NOTICE: Connection: open", EventKind::Other)]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Uploaded file: /home/backup-start.log", EventKind::Start; "start in path")]
#[test_case("Jan 1 00:00:02 host bbackupd[9]: Synchronised file: /backup-finish", EventKind::Finish; "finish in path")]
fn test_event_kind(line: &str, expect: EventKind) {
    let logline = LogLine::parse(line).unwrap();
    assert_eq!(logline.event_kind(), expect);
}

#[test]
fn test_parse_marked_no_prefilter() {
    let line = "Jan 1 00:00:05 host cron[12]: ERROR: e";
    assert_eq!(LogLine::parse(line), None);
    let logline = LogLine::parse_marked(line).unwrap();
    assert_eq!(logline.process_tag, "cron[12]");
    assert_eq!(logline.category, "ERROR");
    assert_eq!(logline.detail, "e");
}

#[test]
fn test_parse_marked_same_as_parse() {
    let line = "Jan 1 00:00:05 host bbackupd: NOTICE: Uploaded file: /etc/passwd\r\n";
    assert_eq!(LogLine::parse_marked(line), LogLine::parse(line));
}
