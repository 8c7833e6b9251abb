// src/tests/session_tests.rs

//! tests for `session.rs`

#![allow(non_snake_case)]

use crate::data::session::{PathSet, Session, SessionBuilder, END_UNFINISHED, START_UNKNOWN};

use ::test_case::test_case;

#[test]
fn test_PathSet_dedup() {
    let mut paths = PathSet::new();
    assert!(paths.is_empty());
    assert!(paths.insert("/a/b"));
    assert!(!paths.insert("/a/b"));
    assert!(paths.insert("/a/c"));
    assert_eq!(paths.len(), 2);
    assert_eq!(paths.into_vec(false), vec!["/a/b", "/a/c"]);
}

#[test_case(false, &["/z", "/a", "/m"]; "first seen order")]
#[test_case(true, &["/a", "/m", "/z"]; "sorted")]
fn test_PathSet_into_vec(sort: bool, expect: &[&str]) {
    let mut paths = PathSet::new();
    for path in ["/z", "/a", "/z", "/m"] {
        paths.insert(path);
    }
    assert_eq!(paths.into_vec(sort), expect);
}

#[test]
fn test_SessionBuilder_not_started_drops_events() {
    let mut builder = SessionBuilder::new();
    assert!(!builder.is_started());
    builder.add_uploaded("/a");
    builder.add_patched("/b");
    builder.add_synced("/c");
    builder.add_warning("w");
    builder.add_error("e");
    builder.set_end(String::from("1 Jan 00:00:09"));
    let session = builder.finish(String::from("host"), false);
    assert!(!session.has_data());
    assert!(session.is_empty());
    assert!(session.warnings.is_empty());
    assert!(session.errors.is_empty());
    assert_eq!(session.start_str(), START_UNKNOWN);
    assert_eq!(session.end_str(), "1 Jan 00:00:09");
}

#[test]
fn test_SessionBuilder_messages_keep_duplicates() {
    let mut builder = SessionBuilder::started(String::from("1 Jan 00:00:01"));
    builder.add_warning("w1");
    builder.add_warning("w1");
    builder.add_error("e2");
    builder.add_error("e1");
    let session = builder.finish(String::from("host"), true);
    assert_eq!(session.warnings, vec!["w1", "w1"]);
    assert_eq!(session.errors, vec!["e2", "e1"]);
    assert_eq!(session.end_str(), END_UNFINISHED);
}

#[test]
fn test_SessionBuilder_finish_sort_skips_synced() {
    let mut builder = SessionBuilder::started(String::from("1 Jan 00:00:01"));
    for path in ["/u2", "/u1"] {
        builder.add_uploaded(path);
    }
    for path in ["/p2", "/p1"] {
        builder.add_patched(path);
    }
    for path in ["/s2", "/s1"] {
        builder.add_synced(path);
    }
    let session = builder.finish(String::from("host"), true);
    assert_eq!(session.uploaded, vec!["/u1", "/u2"]);
    assert_eq!(session.patched, vec!["/p1", "/p2"]);
    assert_eq!(session.synced, vec!["/s2", "/s1"]);
    assert_eq!(session.count_backed_up(), 4);
}

#[test]
fn test_Session_default() {
    let session = Session::default();
    assert!(!session.has_data());
    assert_eq!(session.start_str(), "Unknown");
    assert_eq!(session.end_str(), "Unfinished");
    assert_eq!(session.count_backed_up(), 0);
}
