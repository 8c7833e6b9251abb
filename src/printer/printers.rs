// src/printer/printers.rs

//! The console-print collaborator [`ConsolePrinter`] and helper functions
//! for writing a [`Report`] to a terminal.
//!
//! [`Report`]: crate::printer::report::Report

use std::io::ErrorKind;

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{ReportError, ResultReport, NL_REPORT};
use crate::debug::printers::de_err;
use crate::delivery::Deliver;
use crate::printer::report::{
    Report,
    HEADING_ERRORS,
    HEADING_PATCHED,
    HEADING_UPLOADED,
    HEADING_WARNINGS,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] of the file listing headings.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_HEADING: Color = Color::Cyan;

/// [`Color`] of the warnings heading.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_WARNING: Color = Color::Yellow;

/// [`Color`] for printing some user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Write `value` in `color` if `out` supports color, otherwise write plain.
pub fn write_colored<W: WriteColor>(
    color: Color,
    value: &[u8],
    out: &mut W,
) -> std::io::Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("write_colored: out.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write_all(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("write_colored: out.write_all(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("write_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }

    Ok(())
}

/// The color of `line` if it is a listing heading of `report`.
fn heading_color(
    report: &Report,
    line: &str,
) -> Option<Color> {
    let session = report.session();
    let headings: [(&str, usize, Color); 4] = [
        (HEADING_UPLOADED, session.uploaded.len(), COLOR_HEADING),
        (HEADING_PATCHED, session.patched.len(), COLOR_HEADING),
        (HEADING_WARNINGS, session.warnings.len(), COLOR_WARNING),
        (HEADING_ERRORS, session.errors.len(), COLOR_ERROR),
    ];
    headings
        .iter()
        .find(|(heading, count, _)| {
            *count > 0 && line == format!("{} ({})", heading, count)
        })
        .map(|(_, _, color)| *color)
}

/// Write the text of `report` to `out`, listing headings colored.
pub fn write_report<W: WriteColor>(
    report: &Report,
    out: &mut W,
) -> std::io::Result<()> {
    defn!();
    let mut first = true;
    for line in report.text().split(NL_REPORT) {
        if !first {
            out.write_all(NL_REPORT.as_bytes())?;
        }
        first = false;
        match heading_color(report, line) {
            Some(color) => write_colored(color, line.as_bytes(), out)?,
            None => out.write_all(line.as_bytes())?,
        }
    }
    out.write_all(NL_REPORT.as_bytes())?;
    out.flush()?;
    defx!();

    Ok(())
}

// --------------
// ConsolePrinter

/// Delivers a [`Report`] by printing it to stdout.
///
/// [`Report`]: crate::printer::report::Report
#[derive(Clone, Copy, Debug)]
pub struct ConsolePrinter {
    pub color_choice: ColorChoice,
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        ConsolePrinter {
            color_choice: ColorChoice::Auto,
        }
    }
}

/// Write `report` to `out` as the console delivery.
///
/// A broken pipe, e.g. `bbreporter | head`, is not a failure. Any other
/// write error is [`ReportError::PrintFailed`].
pub fn print_report<W: WriteColor>(
    report: &Report,
    out: &mut W,
) -> ResultReport<()> {
    match write_report(report, out) {
        Ok(_) => Ok(()),
        Err(_err) if _err.kind() == ErrorKind::BrokenPipe => {
            de_err!("print_report: write_report error {}", _err);

            Ok(())
        }
        Err(err) => Err(ReportError::PrintFailed { err }),
    }
}

impl Deliver for ConsolePrinter {
    fn deliver(&self, report: &Report) -> ResultReport<()> {
        defn!("color_choice {:?}", self.color_choice);
        let mut stdout = termcolor::StandardStream::stdout(self.color_choice);
        let result = print_report(report, &mut stdout);
        defx!("{:?}", result);

        result
    }
}
