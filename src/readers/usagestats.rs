// src/readers/usagestats.rs

//! Backup store usage statistics, as printed by `bbackupquery usage`.
//!
//! Running `bbackupquery` is a collaborator boundary; the [`UsageQuery`]
//! trait lets a caller pass a closure instead of spawning a process.

use std::process::{Command, Stdio};

use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{FPath, BBACKUPQUERY_BIN};

/// Replaces the usage statistics when they cannot be retrieved.
pub const USAGE_UNAVAILABLE: &str = "Unable to retrieve usage information.";

/// Arguments passed to `bbackupquery`.
pub const BBACKUPQUERY_ARGS: [&str; 2] = ["usage", "quit"];

lazy_static! {
    /// The usage table follows the `bbackupquery` banner line that ends with
    /// "commands.".
    static ref RE_USAGE: Regex = Regex::new(r"(?s)commands.[\n ]*\n(.*)\n+").unwrap();
}

/// Source of the raw output of `bbackupquery usage quit`.
pub trait UsageQuery {
    /// The raw output, or `None` if the query could not be run.
    fn query_usage(&self) -> Option<String>;
}

impl<F> UsageQuery for F
where
    F: Fn() -> Option<String>,
{
    fn query_usage(&self) -> Option<String> {
        self()
    }
}

/// Runs `bbackupquery usage quit` and captures stdout.
#[derive(Clone, Debug)]
pub struct BbackupqueryCommand {
    pub program: FPath,
}

impl Default for BbackupqueryCommand {
    fn default() -> Self {
        BbackupqueryCommand {
            program: FPath::from(BBACKUPQUERY_BIN),
        }
    }
}

impl UsageQuery for BbackupqueryCommand {
    fn query_usage(&self) -> Option<String> {
        defn!("Command::new({:?}).args({:?})", self.program, BBACKUPQUERY_ARGS);
        let output = match Command::new(self.program.as_str())
            .args(BBACKUPQUERY_ARGS)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(val) => val,
            Err(_err) => {
                defx!("{:?} failed to start; {}", self.program, _err);
                return None;
            }
        };
        defx!("{:?} exit status {:?}", self.program, output.status);

        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Pick the usage table out of `raw` output of `bbackupquery`.
///
/// Returns [`USAGE_UNAVAILABLE`] if `raw` is `None` or does not contain the
/// expected banner.
pub fn extract_usage_stats(raw: Option<&str>) -> String {
    defñ!();
    raw.and_then(|raw| RE_USAGE.captures(raw))
        .and_then(|captures| captures.get(1))
        .map_or_else(
            || String::from(USAGE_UNAVAILABLE),
            |m| String::from(m.as_str()),
        )
}

/// Query `source` and extract the usage table.
pub fn usage_stats(source: &dyn UsageQuery) -> String {
    let raw: Option<String> = source.query_usage();

    extract_usage_stats(raw.as_deref())
}
