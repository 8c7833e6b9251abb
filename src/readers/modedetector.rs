// src/readers/modedetector.rs

//! Derive the [`OperatingMode`] of `bbackupd` from its configuration file.

use std::fmt;

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{FPath, ReportError, ResultReport};
use crate::readers::helpers::open_lines;

/// Comment marker of the configuration file.
pub const CONFIG_COMMENT: char = '#';

lazy_static! {
    /// Matches a configuration line that turns automatic backups off.
    pub static ref RE_AUTOMATIC_BACKUP_OFF: Regex = Regex::new(
        r"(?i)^\s*AutomaticBackup\s*=\s*(?:no|false)\b"
    ).unwrap();
}

/// How `bbackupd` runs backups. Derived once per run, never changes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OperatingMode {
    /// Continuous backups. A log may hold several `backup-start` messages
    /// for what is reported as one session.
    #[default]
    Lazy,
    /// Discrete backups started externally (`AutomaticBackup = no`). Every
    /// `backup-start` begins a new session.
    Snapshot,
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingMode::Lazy => write!(f, "Lazy"),
            OperatingMode::Snapshot => write!(f, "Snapshot"),
        }
    }
}

/// `true` if `line` is not a comment and turns automatic backups off.
pub fn line_disables_automatic_backup(line: &str) -> bool {
    if line.trim_start().starts_with(CONFIG_COMMENT) {
        return false;
    }

    RE_AUTOMATIC_BACKUP_OFF.is_match(line)
}

/// Read the `bbackupd` configuration file at `path` and derive the
/// [`OperatingMode`].
pub fn detect_operating_mode(path: &FPath) -> ResultReport<OperatingMode> {
    defn!("({:?})", path);
    let unreadable = |err: std::io::Error| ReportError::ConfigUnreadable {
        path: path.clone(),
        err,
    };
    let lines = open_lines(path).map_err(unreadable)?;
    for result in lines {
        let line = result.map_err(unreadable)?;
        if line_disables_automatic_backup(&line) {
            defx!("return Snapshot; {:?}", line);
            return Ok(OperatingMode::Snapshot);
        }
    }
    defx!("return Lazy");

    Ok(OperatingMode::Lazy)
}
