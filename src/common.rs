// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

//! Common type aliases, default values, and the [`ReportError`] type shared
//! by all modules of _bbrlib_.

use std::fmt;
use std::io::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// general counting type, used for statistics
pub type Count = u64;

/// Default path of the `bbackupd` configuration file.
pub const CONFIG_FILE_DEFAULT: &str = "/etc/box/bbackupd.conf";

/// Default path of the system log scanned for `bbackupd` messages.
pub const LOG_FILE_DEFAULT: &str = "/var/log/syslog";

/// Default `From:` address of an e-mailed report.
pub const EMAIL_FROM_DEFAULT: &str = "report@boxbackup";

/// Directories searched, in order, for [`SENDMAIL_BIN`].
pub const SENDMAIL_PATHS: [&str; 4] = ["/usr/sbin/", "/usr/bin/", "/bin/", "/sbin/"];

/// Name of the mail-transfer binary.
pub const SENDMAIL_BIN: &str = "sendmail";

/// Program queried for backup store usage statistics.
pub const BBACKUPQUERY_BIN: &str = "bbackupquery";

/// Line separator of a rendered report and of an e-mail envelope.
pub const NL_REPORT: &str = "\r\n";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Failures that abort a run, or abort the delivery of a report.
///
/// An unavailable usage statistic is not an error; it is replaced with
/// placeholder text, see [`extract_usage_stats`].
///
/// [`extract_usage_stats`]: crate::readers::usagestats::extract_usage_stats
pub enum ReportError {
    /// The `bbackupd` configuration file could not be opened or read.
    ConfigUnreadable { path: FPath, err: Error },
    /// The log file could not be opened or read.
    LogUnreadable { path: FPath, err: Error },
    /// No mail-transfer binary was found in any of the searched directories.
    DeliveryUnavailable { searched: FPaths },
    /// The mail-transfer binary was found but handing it the message failed.
    DeliveryFailed { program: FPath, err: Error },
    /// Writing the report to stdout failed, other than a closed pipe.
    PrintFailed { err: Error },
}

pub type ResultReport<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// `true` if the error occurred before any report was generated.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, ReportError::ConfigUnreadable { .. } | ReportError::LogUnreadable { .. })
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::ConfigUnreadable { path, .. } => {
                write!(f, "Error: Config file {:?} could not be read.", path)
            }
            ReportError::LogUnreadable { path, .. } => {
                write!(f, "Error: Log file {:?} could not be read.", path)
            }
            ReportError::DeliveryUnavailable { .. } => {
                write!(f, "Error: Could not find {} binary - Unable to send e-mail!", SENDMAIL_BIN)
            }
            ReportError::DeliveryFailed { program, err } => {
                write!(f, "Error: Failed to send e-mail using {:?}; {}", program, err)
            }
            ReportError::PrintFailed { err } => {
                write!(f, "Error: Failed to print the report; {}", err)
            }
        }
    }
}

impl fmt::Debug for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::ConfigUnreadable { path, err } => f
                .debug_struct("ReportError::ConfigUnreadable")
                .field("path", path)
                .field("err", err)
                .finish(),
            ReportError::LogUnreadable { path, err } => f
                .debug_struct("ReportError::LogUnreadable")
                .field("path", path)
                .field("err", err)
                .finish(),
            ReportError::DeliveryUnavailable { searched } => f
                .debug_struct("ReportError::DeliveryUnavailable")
                .field("searched", searched)
                .finish(),
            ReportError::DeliveryFailed { program, err } => f
                .debug_struct("ReportError::DeliveryFailed")
                .field("program", program)
                .field("err", err)
                .finish(),
            ReportError::PrintFailed { err } => f
                .debug_struct("ReportError::PrintFailed")
                .field("err", err)
                .finish(),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::ConfigUnreadable { err, .. }
            | ReportError::LogUnreadable { err, .. }
            | ReportError::DeliveryFailed { err, .. }
            | ReportError::PrintFailed { err } => Some(err),
            ReportError::DeliveryUnavailable { .. } => None,
        }
    }
}
