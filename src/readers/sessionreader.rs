// src/readers/sessionreader.rs

//! Implements a [`SessionReader`], the single pass over the system log that
//! reconstructs the most relevant backup [`Session`].
//!
//! The [`OperatingMode`] decides what a `backup-start` message does:
//!
//! * `Snapshot`: every `backup-start` begins a new session, all state of the
//!   previous session is dropped. Only the most recent run is reported.
//! * `Lazy`: a `backup-start` only begins a session when no session is open.
//!   Later `backup-start` messages are ignored and the open session keeps
//!   accumulating. The log must be rotated as often as reports are made,
//!   otherwise the same files are reported again.
//!
//! [`Session`]: crate::data::session::Session
//! [`OperatingMode`]: crate::readers::modedetector::OperatingMode

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{Count, FPath, ReportError, ResultReport};
use crate::data::logline::{has_marker, EventKind, LogLine};
use crate::data::session::{Session, SessionBuilder};
use crate::printer::report::ReportOptions;
use crate::readers::helpers::open_lines;
use crate::readers::modedetector::OperatingMode;

/// Accumulated statistics about a [`SessionReader`] pass.
///
/// For CLI option `--debug`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SummarySessionReader {
    /// every line passed to `process_line`
    pub lines_read: Count,
    /// lines that contain a `bbackupd` marker
    pub lines_marked: Count,
    /// lines that parsed as a [`LogLine`]
    pub lines_matched: Count,
    /// `backup-start` messages that began a new session
    pub starts_honored: Count,
    /// `backup-start` messages ignored because a session was open
    pub starts_ignored: Count,
    pub finishes: Count,
}

impl fmt::Display for SummarySessionReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines read {}, lines marked {}, lines matched {}, starts honored {}, starts ignored {}, finishes {}",
            self.lines_read, self.lines_marked, self.lines_matched, self.starts_honored, self.starts_ignored, self.finishes,
        )
    }
}

/// Reconstructs a [`Session`] from the lines of a system log, one line at a
/// time.
///
/// Create with [`new`], pass each line to [`process_line`], then
/// [`finish`].
///
/// [`Session`]: crate::data::session::Session
/// [`new`]: SessionReader::new
/// [`process_line`]: SessionReader::process_line
/// [`finish`]: SessionReader::finish
pub struct SessionReader {
    mode: OperatingMode,
    /// hostname of the most recent matched line, presumed the same for the
    /// entire log
    hostname: String,
    /// the live session
    session: SessionBuilder,
    summary: SummarySessionReader,
}

impl fmt::Debug for SessionReader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SessionReader")
            .field("mode", &self.mode)
            .field("hostname", &self.hostname)
            .field("started", &self.session.is_started())
            .field("summary", &self.summary)
            .finish()
    }
}

impl SessionReader {
    pub fn new(mode: OperatingMode) -> SessionReader {
        defñ!("({:?})", mode);
        SessionReader {
            mode,
            hostname: String::new(),
            session: SessionBuilder::new(),
            summary: SummarySessionReader::default(),
        }
    }

    pub fn summary(&self) -> SummarySessionReader {
        self.summary
    }

    /// Process one line of the log. Lines that are not `bbackupd` messages
    /// are skipped.
    pub fn process_line(&mut self, line: &str) {
        self.summary.lines_read += 1;
        if !has_marker(line) {
            return;
        }
        self.summary.lines_marked += 1;
        let logline = match LogLine::parse_marked(line) {
            Some(val) => val,
            None => return,
        };
        self.summary.lines_matched += 1;
        self.hostname.clear();
        self.hostname.push_str(logline.hostname);

        match logline.event_kind() {
            EventKind::Start => {
                if self.mode == OperatingMode::Snapshot || !self.session.is_started() {
                    defo!("new session at {:?}", logline.timestamp());
                    self.session = SessionBuilder::started(logline.timestamp());
                    self.summary.starts_honored += 1;
                } else {
                    defo!("ignore start at {:?}, session is open", logline.timestamp());
                    self.summary.starts_ignored += 1;
                }
            }
            EventKind::Finish => {
                self.session.set_end(logline.timestamp());
                self.summary.finishes += 1;
            }
            EventKind::Patched => self.session.add_patched(logline.detail),
            EventKind::Uploaded => self.session.add_uploaded(logline.detail),
            EventKind::Synced => self.session.add_synced(logline.detail),
            EventKind::Warning => self.session.add_warning(logline.detail),
            EventKind::Error => self.session.add_error(logline.detail),
            EventKind::Other => {}
        }
    }

    /// Finalize the live session.
    ///
    /// If `sort_files` then patched and uploaded files are sorted.
    pub fn finish(self, sort_files: bool) -> Session {
        defñ!("{:?}", self);

        self.session.finish(self.hostname, sort_files)
    }
}

/// Scan the log file at `path` and return the reconstructed [`Session`].
///
/// Files are sorted only if `options` asks for a sorted _and_ verbose
/// report.
///
/// A `Session` without a start timestamp means no report data was found.
///
/// [`Session`]: crate::data::session::Session
pub fn extract_session(
    path: &FPath,
    mode: OperatingMode,
    options: &ReportOptions,
) -> ResultReport<(Session, SummarySessionReader)> {
    defn!("({:?}, {:?})", path, mode);
    let unreadable = |err: std::io::Error| ReportError::LogUnreadable {
        path: path.clone(),
        err,
    };
    let mut reader = SessionReader::new(mode);
    for result in open_lines(path).map_err(unreadable)? {
        let line = result.map_err(unreadable)?;
        reader.process_line(&line);
    }
    let summary = reader.summary();
    let session = reader.finish(options.sort && options.verbose);
    defx!("{:?}", session);

    Ok((session, summary))
}
