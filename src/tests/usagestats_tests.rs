// src/tests/usagestats_tests.rs

//! tests for `usagestats.rs`

#![allow(non_snake_case)]

use crate::readers::usagestats::{
    extract_usage_stats,
    usage_stats,
    BbackupqueryCommand,
    UsageQuery,
    USAGE_UNAVAILABLE,
};

use ::test_case::test_case;

const BBACKUPQUERY_OUTPUT: &str = "\
Box Backup Query Tool v0.11, (c) Ben Summers and contributors 2003-2010
Using configuration file /etc/box/bbackupd.conf
Connecting to store...
Handshake with store...
Login to store...
Login complete.

Type \"help\" for a list of commands.

Used:     1024 blocks,    4.0Mb, 25%
Old files:   0 blocks,    0.0Mb,  0%
Soft limit: 4096 blocks, 16.0Mb
Hard limit: 5120 blocks, 20.0Mb

";

#[test]
fn test_extract_usage_stats_found() {
    let stats = extract_usage_stats(Some(BBACKUPQUERY_OUTPUT));
    assert_eq!(
        stats,
        "\
Used:     1024 blocks,    4.0Mb, 25%
Old files:   0 blocks,    0.0Mb,  0%
Soft limit: 4096 blocks, 16.0Mb
Hard limit: 5120 blocks, 20.0Mb
"
    );
}

#[test]
fn test_extract_usage_stats_single_newline() {
    let stats = extract_usage_stats(Some("commands.\n\nUsed: 1 blocks\n"));
    assert_eq!(stats, "Used: 1 blocks");
}

#[test_case(None; "absent")]
#[test_case(Some(""); "empty")]
#[test_case(Some("bbackupquery: command not found\n"); "no banner")]
fn test_extract_usage_stats_unavailable(raw: Option<&str>) {
    assert_eq!(extract_usage_stats(raw), USAGE_UNAVAILABLE);
}

#[test]
fn test_usage_stats_closure() {
    let query = || Some(String::from(BBACKUPQUERY_OUTPUT));
    assert!(query.query_usage().is_some());
    let stats = usage_stats(&query);
    assert!(stats.starts_with("Used:     1024 blocks"));
}

#[test]
fn test_usage_stats_closure_none() {
    let query = || -> Option<String> { None };
    assert_eq!(usage_stats(&query), USAGE_UNAVAILABLE);
}

#[test]
fn test_BbackupqueryCommand_missing_program() {
    let query = BbackupqueryCommand {
        program: String::from("/nonexistent/path/to/bbackupquery"),
    };
    assert_eq!(query.query_usage(), None);
    assert_eq!(usage_stats(&query), USAGE_UNAVAILABLE);
}

#[test]
fn test_BbackupqueryCommand_default() {
    assert_eq!(BbackupqueryCommand::default().program, "bbackupquery");
}
