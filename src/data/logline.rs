// src/data/logline.rs

//! Implements a [`LogLine`], the fields of one `bbackupd` syslog line, and
//! the [`EventKind`] classification of that line.
//!
//! A syslog line written by `bbackupd` looks like
//!
//! ```text
//! Jan  1 00:00:05 host bbackupd[123]: Uploading complete file: /etc/passwd
//! Jan  1 00:00:01 host bbackupd: NOTICE: backup-start
//! ```
//!
//! which is `<month> <day> <time> <hostname> <process-tag>: <category>: <detail>`.

use ::lazy_static::lazy_static;
use ::memchr::memmem;
use ::phf::phf_map;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Marker substrings, at least one must be in a line for the line to be
/// parsed. Cheaper than running the full [`struct@RE_SYSLOG`] on every line.
pub const MARKERS: [&str; 2] = ["Box Backup", "bbackupd"];

/// Substring of a message that signals the beginning of a backup run.
pub const MARKER_BACKUP_START: &str = "backup-start";
/// Substring of a message that signals the end of a backup run.
pub const MARKER_BACKUP_FINISH: &str = "backup-finish";

/// Plain syslog levels that `bbackupd` may put in front of the real
/// category, e.g. `NOTICE: Uploaded file: /etc/passwd`.
///
/// `WARNING` and `ERROR` are categories themselves and are not listed.
const LEVEL_PREFIXES: [&str; 3] = ["NOTICE", "INFO", "TRACE"];

lazy_static! {
    /// The syslog line grammar. Capture groups in order: month, day, time,
    /// hostname, process-tag, category, detail.
    pub static ref RE_SYSLOG: Regex = Regex::new(
        r"(\S+) +(\S+) +([\d:]+) +(\S+) +([^:]+): +([^:]+): *(.*)"
    ).unwrap();
    /// `<category>: <detail>` remainder of a message, for unwrapping a
    /// [`LEVEL_PREFIXES`] level.
    static ref RE_CATEGORY_DETAIL: Regex = Regex::new(r"^([^:]+): *(.*)$").unwrap();
    static ref FINDERS_MARKERS: [memmem::Finder<'static>; 2] = [
        memmem::Finder::new(MARKERS[0]),
        memmem::Finder::new(MARKERS[1]),
    ];
}

/// Classification of a [`LogLine`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EventKind {
    /// A backup run began.
    Start,
    /// A backup run ended.
    Finish,
    /// A file was uploaded as a patch against the stored version.
    Patched,
    /// A complete file was uploaded.
    Uploaded,
    /// A file was found to be already synchronised.
    Synced,
    Warning,
    Error,
    /// Anything else; ignored.
    Other,
}

/// exact category strings and the event each one signals
static MAP_CATEGORY_TO_EVENTKIND: phf::Map<&'static str, EventKind> = phf_map! {
    "Uploading patch to file" => EventKind::Patched,
    "Uploading complete file" => EventKind::Uploaded,
    "Uploaded file" => EventKind::Uploaded,
    "Synchronised file" => EventKind::Synced,
    "WARNING" => EventKind::Warning,
    "ERROR" => EventKind::Error,
};

/// The fields of a syslog line that matched [`struct@RE_SYSLOG`].
///
/// Ephemeral; a `LogLine` is classified and dropped while the log is scanned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogLine<'a> {
    pub month: &'a str,
    pub day: &'a str,
    pub time: &'a str,
    pub hostname: &'a str,
    pub process_tag: &'a str,
    pub category: &'a str,
    pub detail: &'a str,
}

/// `true` if `line` contains any of the [`MARKERS`].
#[inline(always)]
pub fn has_marker(line: &str) -> bool {
    FINDERS_MARKERS
        .iter()
        .any(|finder| finder.find(line.as_bytes()).is_some())
}

impl<'a> LogLine<'a> {
    /// Parse `line` with the syslog grammar.
    ///
    /// Returns `None` for a line without one of the [`MARKERS`] or for a line
    /// that does not have the grammar's shape. A severity level in front of
    /// the category (see `LEVEL_PREFIXES`) is unwrapped.
    pub fn parse(line: &'a str) -> Option<LogLine<'a>> {
        if !has_marker(line) {
            return None;
        }

        LogLine::parse_marked(line)
    }

    /// Parse `line` with the syslog grammar, without the [`MARKERS`]
    /// pre-filter. For a caller that already checked [`has_marker`].
    pub fn parse_marked(line: &'a str) -> Option<LogLine<'a>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let captures = RE_SYSLOG.captures(line)?;
        // every group of `RE_SYSLOG` participates in a match
        let field = |index: usize| -> &'a str {
            captures
                .get(index)
                .map_or("", |m| m.as_str())
        };
        let mut logline = LogLine {
            month: field(1),
            day: field(2),
            time: field(3),
            hostname: field(4),
            process_tag: field(5),
            category: field(6),
            detail: field(7),
        };
        if LEVEL_PREFIXES.contains(&logline.category) {
            if let Some(inner) = RE_CATEGORY_DETAIL.captures(logline.detail) {
                if let (Some(category), Some(detail)) = (inner.get(1), inner.get(2)) {
                    defo!("unwrap level {:?} from {:?}", logline.category, logline.detail);
                    logline.category = category.as_str();
                    logline.detail = detail.as_str();
                }
            }
        }

        Some(logline)
    }

    /// Classify this line.
    ///
    /// Start and finish markers are searched for in both the category and
    /// the detail, whatever the category. Every other kind requires an exact
    /// category.
    ///
    /// A file path containing a marker is therefore a start or finish, e.g.
    /// `Uploaded file: /home/backup-start.log` is a `Start`.
    pub fn event_kind(&self) -> EventKind {
        if self.category.contains(MARKER_BACKUP_START) || self.detail.contains(MARKER_BACKUP_START) {
            return EventKind::Start;
        }
        if self.category.contains(MARKER_BACKUP_FINISH) || self.detail.contains(MARKER_BACKUP_FINISH) {
            return EventKind::Finish;
        }
        match MAP_CATEGORY_TO_EVENTKIND.get(self.category) {
            Some(kind) => *kind,
            None => EventKind::Other,
        }
    }

    /// The `"<day> <month> <time>"` timestamp of this line, e.g.
    /// `"1 Jan 00:00:01"`.
    pub fn timestamp(&self) -> String {
        format!("{} {} {}", self.day, self.month, self.time)
    }
}
