// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use std::fs::File;
use std::io::{BufRead, BufReader, Result, Split};

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::common::FPath;

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &std::path::Path {
    std::path::Path::new(path)
}

/// Iterator over the lines of a file. Bytes that are not valid UTF-8 are
/// replaced, a log line is never an error.
pub type LossyLines = std::iter::Map<Split<BufReader<File>>, fn(Result<Vec<u8>>) -> Result<String>>;

fn bytes_to_string_lossy(result: Result<Vec<u8>>) -> Result<String> {
    result.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Open `path` for reading line by line.
///
/// The file handle is closed when the returned iterator is dropped.
pub fn open_lines(path: &FPath) -> Result<LossyLines> {
    defn!("({:?})", path);
    let file = match File::open(fpath_to_path(path)) {
        Ok(val) => val,
        Err(err) => {
            defx!("File::open error {}", err);
            return Err(err);
        }
    };
    defx!();

    Ok(BufReader::new(file)
        .split(b'\n')
        .map(bytes_to_string_lossy as fn(Result<Vec<u8>>) -> Result<String>))
}
