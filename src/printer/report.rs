// src/printer/report.rs

//! Render a finalized [`Session`] into the fixed-layout text report, and
//! classify the [`Outcome`] used for an e-mail subject line.
//!
//! [`Session`]: crate::data::session::Session

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::NL_REPORT;
use crate::data::session::Session;

/// The entire report when no `backup-start` message was found.
pub const REPORT_NO_DATA: &str = "No report data has been found.";

pub const REPORT_BANNER: &str = "--------------------------------------------------";
pub const REPORT_TITLE: &str = "Box Backup - Backup Statistics";
/// Underline of a listing heading, e.g. "Uploaded Files (3)".
pub const REPORT_HEADING_UNDERLINE: &str = "---------------------";

pub const HEADING_UPLOADED: &str = "Uploaded Files";
pub const HEADING_PATCHED: &str = "Patched Files";
pub const HEADING_WARNINGS: &str = "Warnings";
pub const HEADING_ERRORS: &str = "Errors";

/// Prefix of an e-mail subject line, followed by the hostname.
pub const SUBJECT_PREFIX: &str = "BoxBackup Reporter";

/// Rendering options, from the command-line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReportOptions {
    /// list every uploaded and patched file
    pub verbose: bool,
    /// sort listed files; only has an effect with `verbose`
    pub sort: bool,
    /// include the backup store usage statistics
    pub stats: bool,
}

// -------
// Outcome

/// Overall result of a backup run, for the e-mail subject line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// No start was found, or no file was patched, uploaded, or synchronised.
    Failed,
    Success,
    /// Files were backed up but errors were logged.
    SuccessWithErrors,
}

impl Outcome {
    pub fn classify(session: &Session) -> Outcome {
        if !session.has_data() || session.is_empty() {
            return Outcome::Failed;
        }
        if !session.errors.is_empty() {
            return Outcome::SuccessWithErrors;
        }

        Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failed => write!(f, "FAILED"),
            Outcome::Success => write!(f, "SUCCESS"),
            Outcome::SuccessWithErrors => write!(f, "SUCCESS (with errors)"),
        }
    }
}

/// The e-mail subject line for `session`,
/// e.g. `"BoxBackup Reporter (host) - SUCCESS"`.
pub fn subject_line(session: &Session) -> String {
    format!("{} ({}) - {}", SUBJECT_PREFIX, session.hostname, Outcome::classify(session))
}

// ---------
// rendering

/// Append a listing: heading with count, underline, one entry per line,
/// two blank lines. Nothing is appended for an empty listing.
fn push_listing(lines: &mut Vec<String>, heading: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    lines.push(format!("{} ({})", heading, entries.len()));
    lines.push(String::from(REPORT_HEADING_UNDERLINE));
    lines.extend(entries.iter().cloned());
    lines.push(String::new());
    lines.push(String::new());
}

/// Render the report lines for `session`.
///
/// `stats` is only rendered if `options.stats` and it is not empty.
pub fn render_report_lines(
    session: &Session,
    options: &ReportOptions,
    stats: Option<&str>,
) -> Vec<String> {
    defn!("({:?}, {:?})", session, options);
    if !session.has_data() {
        defx!("no data");
        return vec![String::from(REPORT_NO_DATA)];
    }

    let mut lines: Vec<String> = Vec::with_capacity(
        24 + session.uploaded.len() + session.patched.len() + session.warnings.len() + session.errors.len(),
    );
    lines.push(String::from(REPORT_BANNER));
    lines.push(format!("Report Title  : {}", REPORT_TITLE));
    lines.push(format!("Report Period : {} - {}", session.start_str(), session.end_str()));
    lines.push(String::from(REPORT_BANNER));
    lines.push(String::new());
    lines.push(String::from("This is your box backup report, in summary:"));
    lines.push(String::new());
    lines.push(format!("{} file(s) have been backed up.", session.count_backed_up()));
    lines.push(format!("{} file(s) were uploaded.", session.uploaded.len()));
    lines.push(format!("{} file(s) were patched.", session.patched.len()));
    lines.push(format!("{} file(s) were synchronised.", session.synced.len()));
    lines.push(String::new());
    lines.push(format!("{} warning(s) occurred.", session.warnings.len()));
    lines.push(format!("{} error(s) occurred.", session.errors.len()));
    lines.push(String::new());
    lines.push(String::new());

    match stats {
        Some(stats) if options.stats && !stats.is_empty() => {
            lines.push(String::from("Your backup usage information follows:"));
            lines.push(String::new());
            lines.push(String::from(stats));
            lines.push(String::new());
            lines.push(String::new());
        }
        _ => {}
    }

    if options.verbose {
        push_listing(&mut lines, HEADING_UPLOADED, &session.uploaded);
        push_listing(&mut lines, HEADING_PATCHED, &session.patched);
    }

    // warnings and errors are listed regardless of `verbose`
    push_listing(&mut lines, HEADING_WARNINGS, &session.warnings);
    push_listing(&mut lines, HEADING_ERRORS, &session.errors);
    defx!("{} lines", lines.len());

    lines
}

/// Render the report for `session` as one string, lines separated by
/// [`NL_REPORT`].
pub fn render_report(
    session: &Session,
    options: &ReportOptions,
    stats: Option<&str>,
) -> String {
    render_report_lines(session, options, stats).join(NL_REPORT)
}

// ------
// Report

/// A finalized [`Session`] together with its rendered text. Handed to a
/// delivery collaborator.
///
/// [`Session`]: crate::data::session::Session
#[derive(Clone, Debug)]
pub struct Report {
    session: Session,
    text: String,
}

impl Report {
    /// Take ownership of `session` and render it.
    pub fn new(
        session: Session,
        options: &ReportOptions,
        stats: Option<&str>,
    ) -> Report {
        let text = render_report(&session, options, stats);

        Report { session, text }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::classify(&self.session)
    }

    pub fn subject(&self) -> String {
        subject_line(&self.session)
    }
}
