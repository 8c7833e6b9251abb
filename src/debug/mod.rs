// src/debug/mod.rs

//! The `debug` module is macros for printing to stderr, and helpers for
//! test builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
