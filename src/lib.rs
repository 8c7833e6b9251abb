// src/lib.rs

//! _bbrlib_ reports on Box Backup sessions found in the system log.
//!
//! A run is strictly sequential:
//!
//! 1. [`detect_operating_mode`] reads the `bbackupd` configuration file.
//! 2. [`extract_session`] scans the log once and reconstructs the most
//!    relevant [`Session`].
//! 3. A [`Report`] renders the `Session`.
//! 4. A [`Deliver`] collaborator prints or e-mails the `Report`.
//!
//! The driver program is `bbreporter`.
//!
//! [`detect_operating_mode`]: crate::readers::modedetector::detect_operating_mode
//! [`extract_session`]: crate::readers::sessionreader::extract_session
//! [`Session`]: crate::data::session::Session
//! [`Report`]: crate::printer::report::Report
//! [`Deliver`]: crate::delivery::Deliver

pub mod common;
pub mod data;
pub mod debug;
pub mod delivery;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
