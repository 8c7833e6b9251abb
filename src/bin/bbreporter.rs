// src/bin/bbreporter.rs

//! Driver program _bbreporter_ drives the [_bbrlib_].
//!
//! Processes user-passed command-line arguments.
//! Then determines the `bbackupd` operating mode from the `bbackupd`
//! configuration file, scans the system log for the most relevant backup
//! session, renders a report, and prints the report or e-mails it.
//!
//! To make use of this program run `bbackupd` with the `-v` command-line
//! option and set `LogAllFileAccess = yes` in `bbackupd.conf`.
//!
//! In lazy mode the log file must be rotated at the same rate at which this
//! program is run, otherwise the same backup sessions are reported again.
//!
//! [_bbrlib_]: bbrlib

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::clap::{
    Parser,
    ValueEnum,
};
use ::const_format::concatcp;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use ::bbrlib::common::{
    FPath,
    BBACKUPQUERY_BIN,
    CONFIG_FILE_DEFAULT,
    EMAIL_FROM_DEFAULT,
    LOG_FILE_DEFAULT,
};
use ::bbrlib::debug::printers::e_dbg;
use ::bbrlib::delivery::{
    Deliver,
    MailDelivery,
};
use ::bbrlib::printer::printers::{
    ColorChoice,
    ConsolePrinter,
};
use ::bbrlib::printer::report::{
    Report,
    ReportOptions,
};
use ::bbrlib::readers::modedetector::{
    detect_operating_mode,
    OperatingMode,
};
use ::bbrlib::readers::sessionreader::extract_session;
use ::bbrlib::readers::usagestats::{
    usage_stats,
    BbackupqueryCommand,
};

// --------------------
// command-line parsing

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.1.2/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

const CLI_HELP_AFTER: &str = concatcp!(
    r#"To make use of this program run bbackupd with the -v command-line option
and set "LogAllFileAccess = yes" in the bbackupd configuration file.

bbackupd is in snapshot mode if the configuration file sets
"AutomaticBackup = no", otherwise bbackupd is in lazy mode.
In snapshot mode only the most recent backup session in the log file is
reported.
In lazy mode all backup activity after the first "backup-start" in the log
file is reported. Rotate the log file at the same rate at which bbreporter is
run or the same backup sessions will be reported on each run.

The report is e-mailed using the "sendmail" binary.

---

Version: "#, env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#,
    CLI_HELP_AFTER_NOTE_DEBUG,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "bbreporter",
    version = concatcp!(
        "(Box Backup Reporter)\n",
        "Version: ", env!("CARGO_PKG_VERSION"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// The log file to process.
    #[clap(
        short = 'l',
        long = "logfile",
        verbatim_doc_comment,
        default_value = LOG_FILE_DEFAULT,
    )]
    logfile: FPath,

    /// The bbackupd configuration file.
    #[clap(
        short = 'c',
        long = "configfile",
        verbatim_doc_comment,
        default_value = CONFIG_FILE_DEFAULT,
    )]
    configfile: FPath,

    /// E-mail address(es) to send the report to.
    /// By default the report is printed to the console.
    #[clap(
        short = 't',
        long = "email-to",
        verbatim_doc_comment,
    )]
    email_to: Option<String>,

    /// E-mail address to set the From: address to.
    #[clap(
        short = 'f',
        long = "email-from",
        verbatim_doc_comment,
        default_value = EMAIL_FROM_DEFAULT,
    )]
    email_from: String,

    /// List every file that was uploaded or patched.
    /// By default only the summary is reported.
    #[clap(
        short = 'v',
        long,
        verbatim_doc_comment,
    )]
    verbose: bool,

    /// Include the usage statistics retrieved from "bbackupquery usage".
    #[clap(
        short = 's',
        long,
        verbatim_doc_comment,
    )]
    stats: bool,

    /// Sort the file lists of a --verbose report.
    #[clap(
        short = 'o',
        long,
        verbatim_doc_comment,
    )]
    sort: bool,

    /// Print debug messages to stderr.
    #[clap(
        short = 'd',
        long,
        verbatim_doc_comment,
    )]
    debug: bool,

    /// Path of the bbackupquery program, for --stats.
    #[clap(
        long = "bbackupquery",
        verbatim_doc_comment,
        default_value = BBACKUPQUERY_BIN,
    )]
    bbackupquery: FPath,

    /// Choose to print to terminal using colors.
    #[clap(
        required = false,
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,
}

// ----
// main

/// Generate the report and hand it to the chosen delivery collaborator.
fn run(args: CLI_Args) -> anyhow::Result<()> {
    defn!();

    let mode: OperatingMode = detect_operating_mode(&args.configfile)?;
    if args.debug {
        e_dbg!("Operating in {} mode.", mode);
    }

    let options = ReportOptions {
        verbose: args.verbose,
        sort: args.sort,
        stats: args.stats,
    };
    defo!("options {:?}", options);

    let (session, summary) = extract_session(&args.logfile, mode, &options)?;
    if args.debug {
        e_dbg!("{:?}: {}", args.logfile, summary);
        e_dbg!("Report period {:?} - {:?}", session.start_str(), session.end_str());
    }

    let stats: Option<String> = if options.stats {
        let query = BbackupqueryCommand {
            program: args.bbackupquery.clone(),
        };
        Some(usage_stats(&query))
    } else {
        None
    };

    let report = Report::new(session, &options, stats.as_deref());

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };
    let deliverer: Box<dyn Deliver> = match args.email_to {
        Some(to) => {
            let mut mail = MailDelivery::new(to);
            mail.from = args.email_from;
            if args.debug {
                e_dbg!("E-mailing report {:?}", report.subject());
            }
            Box::new(mail)
        }
        None => Box::new(ConsolePrinter { color_choice }),
    };
    deliverer.deliver(&report)?;
    defx!();

    Ok(())
}

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    let exitcode = match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
