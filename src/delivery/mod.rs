// src/delivery/mod.rs

//! Delivery collaborators hand a finished [`Report`] to the user.
//!
//! * [`ConsolePrinter`] prints to stdout.
//! * [`MailDelivery`] pipes an e-mail message to the `sendmail` binary.
//!
//! [`Report`]: crate::printer::report::Report
//! [`ConsolePrinter`]: crate::printer::printers::ConsolePrinter

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{
    FPath,
    FPaths,
    ReportError,
    ResultReport,
    EMAIL_FROM_DEFAULT,
    NL_REPORT,
    SENDMAIL_BIN,
    SENDMAIL_PATHS,
};
use crate::printer::report::Report;

/// Hands a [`Report`] to the user.
///
/// [`Report`]: crate::printer::report::Report
pub trait Deliver {
    fn deliver(&self, report: &Report) -> ResultReport<()>;
}

/// Return the first regular file named `binary` in `search_paths`.
pub fn locate_binary(
    search_paths: &[FPath],
    binary: &str,
) -> Option<FPath> {
    defn!("({:?}, {:?})", search_paths, binary);
    for dir in search_paths.iter() {
        let candidate = Path::new(dir).join(binary);
        if candidate.is_file() {
            let found: FPath = candidate.to_string_lossy().into_owned();
            defx!("found {:?}", found);
            return Some(found);
        }
    }
    defx!("not found");

    None
}

/// The e-mail message for `report`: `To:`, `From:` and `Subject:` headers, a
/// blank line, then the report text. Lines are separated by `\r\n`.
pub fn mail_message(
    report: &Report,
    to: &str,
    from: &str,
) -> String {
    let lines: [String; 5] = [
        format!("To: {}", to),
        format!("From: {}", from),
        format!("Subject: {}", report.subject()),
        String::new(),
        String::from(report.text()),
    ];

    lines.join(NL_REPORT)
}

// ------------
// MailDelivery

/// Delivers a [`Report`] by e-mail using `sendmail -t`.
///
/// [`Report`]: crate::printer::report::Report
#[derive(Clone, Debug)]
pub struct MailDelivery {
    pub to: String,
    pub from: String,
    /// directories searched for [`SENDMAIL_BIN`], in order
    pub search_paths: FPaths,
}

impl MailDelivery {
    pub fn new(to: String) -> MailDelivery {
        MailDelivery {
            to,
            from: String::from(EMAIL_FROM_DEFAULT),
            search_paths: SENDMAIL_PATHS
                .iter()
                .map(|path| FPath::from(*path))
                .collect(),
        }
    }

    /// The `sendmail` binary, or [`ReportError::DeliveryUnavailable`].
    pub fn sendmail(&self) -> ResultReport<FPath> {
        locate_binary(&self.search_paths, SENDMAIL_BIN).ok_or_else(|| ReportError::DeliveryUnavailable {
            searched: self.search_paths.clone(),
        })
    }
}

impl Deliver for MailDelivery {
    fn deliver(&self, report: &Report) -> ResultReport<()> {
        defn!("to {:?}, from {:?}", self.to, self.from);
        let program: FPath = self.sendmail()?;
        let failed = |err: std::io::Error| ReportError::DeliveryFailed {
            program: program.clone(),
            err,
        };
        let message: String = mail_message(report, &self.to, &self.from);

        defo!("Command::new({:?}).arg(\"-t\").spawn()", program);
        let mut child = Command::new(program.as_str())
            .arg("-t")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(failed)?;
        match child.stdin.take() {
            Some(mut stdin) => {
                stdin
                    .write_all(message.as_bytes())
                    .map_err(failed)?;
                // `stdin` dropped here, closing the pipe
            }
            None => {
                return Err(failed(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin was not captured")));
            }
        }
        let _status = child.wait().map_err(failed)?;
        defx!("{:?} exit status {:?}", program, _status);

        Ok(())
    }
}
