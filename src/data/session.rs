// src/data/session.rs

//! Implements a [`Session`], one reconstructed backup run, and the
//! [`SessionBuilder`] that accumulates it.
//!
//! A `SessionBuilder` is the one "live" session while a log is scanned.
//! Once the scan completes the builder is finished into a read-only
//! `Session`.

use std::collections::HashSet;
use std::fmt;

use crate::common::Count;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Displayed start of a [`Session`] when no start event was seen.
pub const START_UNKNOWN: &str = "Unknown";
/// Displayed end of a [`Session`] when no finish event was seen.
pub const END_UNFINISHED: &str = "Unfinished";

// -------
// PathSet

/// A set of file paths. Duplicates are collapsed on insert.
///
/// First-seen order is remembered so that an unsorted listing is stable.
#[derive(Clone, Debug, Default)]
pub struct PathSet {
    seen: HashSet<String>,
    order: Vec<String>,
}

impl PathSet {
    pub fn new() -> PathSet {
        PathSet::default()
    }

    /// Insert `path`. Returns `false` if `path` was already present.
    pub fn insert(&mut self, path: &str) -> bool {
        if self.seen.contains(path) {
            return false;
        }
        self.seen.insert(String::from(path));
        self.order.push(String::from(path));

        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Materialize into a sequence, lexicographically sorted if `sort`.
    pub fn into_vec(self, sort: bool) -> Vec<String> {
        let mut paths = self.order;
        if sort {
            paths.sort();
        }

        paths
    }
}

// --------------
// SessionBuilder

/// Accumulates one backup run.
///
/// File paths and messages are only accepted once a start timestamp is
/// known; lines seen before any start event are dropped.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    start: Option<String>,
    end: Option<String>,
    patched: PathSet,
    uploaded: PathSet,
    synced: PathSet,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl SessionBuilder {
    /// A builder with an unknown start. Accepts nothing but a finish
    /// timestamp.
    pub fn new() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// A fresh builder for a run that began at `start`.
    pub fn started(start: String) -> SessionBuilder {
        SessionBuilder {
            start: Some(start),
            ..SessionBuilder::default()
        }
    }

    /// `true` if a start event has been seen; this session is "open".
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    pub fn set_end(&mut self, end: String) {
        self.end = Some(end);
    }

    pub fn add_patched(&mut self, path: &str) {
        if self.is_started() {
            self.patched.insert(path);
        }
    }

    pub fn add_uploaded(&mut self, path: &str) {
        if self.is_started() {
            self.uploaded.insert(path);
        }
    }

    pub fn add_synced(&mut self, path: &str) {
        if self.is_started() {
            self.synced.insert(path);
        }
    }

    pub fn add_warning(&mut self, message: &str) {
        if self.is_started() {
            self.warnings.push(String::from(message));
        }
    }

    pub fn add_error(&mut self, message: &str) {
        if self.is_started() {
            self.errors.push(String::from(message));
        }
    }

    /// Finalize into a [`Session`].
    ///
    /// If `sort_files` then the patched and uploaded files are sorted.
    /// Synchronised files are kept in first-seen order regardless.
    pub fn finish(self, hostname: String, sort_files: bool) -> Session {
        defñ!("hostname {:?}, sort_files {}", hostname, sort_files);
        Session {
            hostname,
            start: self.start,
            end: self.end,
            patched: self.patched.into_vec(sort_files),
            uploaded: self.uploaded.into_vec(sort_files),
            synced: self.synced.into_vec(false),
            warnings: self.warnings,
            errors: self.errors,
        }
    }
}

// -------
// Session

/// One reconstructed backup run, read-only.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Session {
    pub hostname: String,
    /// `None` if no start event was found. A `Session` without a start has
    /// no report data.
    pub start: Option<String>,
    /// `None` if the run has no finish event (yet).
    pub end: Option<String>,
    pub patched: Vec<String>,
    pub uploaded: Vec<String>,
    pub synced: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Session {
    /// `true` if a start event was found.
    pub fn has_data(&self) -> bool {
        self.start.is_some()
    }

    /// The start timestamp or [`START_UNKNOWN`].
    pub fn start_str(&self) -> &str {
        self.start
            .as_deref()
            .unwrap_or(START_UNKNOWN)
    }

    /// The end timestamp or [`END_UNFINISHED`].
    pub fn end_str(&self) -> &str {
        self.end
            .as_deref()
            .unwrap_or(END_UNFINISHED)
    }

    /// Files backed up, uploaded plus patched.
    pub fn count_backed_up(&self) -> Count {
        (self.patched.len() + self.uploaded.len()) as Count
    }

    /// `true` if no file was patched, uploaded, or synchronised.
    pub fn is_empty(&self) -> bool {
        self.patched.is_empty() && self.uploaded.is_empty() && self.synced.is_empty()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("hostname", &self.hostname)
            .field("start", &self.start_str())
            .field("end", &self.end_str())
            .field("patched.len", &self.patched.len())
            .field("uploaded.len", &self.uploaded.len())
            .field("synced.len", &self.synced.len())
            .field("warnings.len", &self.warnings.len())
            .field("errors.len", &self.errors.len())
            .finish()
    }
}
