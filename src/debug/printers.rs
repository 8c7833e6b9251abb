// src/debug/printers.rs

//! Printer macros for user-facing and debug-build messages on stderr.

/// `d`ebug `e`println! an `err`or
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            eprint!("ERROR: ");
            #[cfg(any(debug_assertions,test))]
            eprintln!($($args)*)
        }
    }
}
pub use de_err;

/// `e`println! a `d`e`b`u`g` message; the `--debug` option.
#[macro_export]
macro_rules! e_dbg {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("[bbreporter debug]: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_dbg;
