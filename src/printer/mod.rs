// src/printer/mod.rs

//! The `printer` module renders a [`Session`] into a user-facing [`Report`]
//! and prints a `Report` to the console.
//!
//! [`Session`]: crate::data::session::Session
//! [`Report`]: crate::printer::report::Report

pub mod printers;
pub mod report;
