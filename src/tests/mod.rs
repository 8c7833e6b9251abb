// src/tests/mod.rs

//! Tests for _bbrlib_.
//!
//! Tests are placed at `src/tests/`, inside the `bbrlib`. This is a
//! reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility.

pub mod logline_tests;
pub mod session_tests;
pub mod usagestats_tests;
