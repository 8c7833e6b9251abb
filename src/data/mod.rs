// src/data/mod.rs

//! The `data` module is specialized data containers for
//! [`LogLine`]s and [`Session`]s.
//!
//! ## Definitions of data
//!
//! ### LogLine
//!
//! A "log line" is one line of the system log that:
//!
//! * contains a `bbackupd` marker string.
//! * has the shape `<month> <day> <time> <hostname> <process-tag>: <category>: <detail>`.
//!
//! A `LogLine` borrows from the line it was parsed from and is dropped once
//! it has been classified.
//!
//! ### Session
//!
//! A "session" is one backup run, bounded by a `backup-start` message and
//! (optionally) a `backup-finish` message.
//!
//! A session is accumulated by a [`SessionBuilder`] and finalized into a
//! read-only `Session`.
//!
//! [`LogLine`]: crate::data::logline::LogLine
//! [`Session`]: crate::data::session::Session
//! [`SessionBuilder`]: crate::data::session::SessionBuilder

pub mod logline;
pub mod session;
