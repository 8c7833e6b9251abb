// src/readers/mod.rs

//! "Readers" for _bbrlib_.
//!
//! ## Overview of readers
//!
//! * [`detect_operating_mode`] reads the `bbackupd` configuration file once
//!   to derive the [`OperatingMode`].
//! * A [`SessionReader`] is fed the lines of the system log and derives a
//!   [`Session`].
//! * [`extract_usage_stats`] picks the usage table out of the output of a
//!   [`UsageQuery`].
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`detect_operating_mode`]: crate::readers::modedetector::detect_operating_mode
//! [`OperatingMode`]: crate::readers::modedetector::OperatingMode
//! [`SessionReader`]: crate::readers::sessionreader::SessionReader
//! [`Session`]: crate::data::session::Session
//! [`extract_usage_stats`]: crate::readers::usagestats::extract_usage_stats
//! [`UsageQuery`]: crate::readers::usagestats::UsageQuery

pub mod helpers;
pub mod modedetector;
pub mod sessionreader;
pub mod usagestats;
