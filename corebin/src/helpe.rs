pub use std::{
    io::{BufRead, BufReader, Write},
    path::PathBuf,
    hash::Hash,
    time::Instant,
};
pub use thiserror::Error;
pub use itertools::Itertools;
pub use rayon::prelude::*;
pub use indexmap::IndexMap;
pub use clap::Parser;

pub use crate::{Bin, Chunk, Fit,
    catalog::*,
};

/// The unit for measuring sizes. Chunk sizes, allocation sizes and
/// effective portions are all plain byte counts; sharing one type
/// keeps the solver arithmetic free of conversions.
///
/// TODO: the emitted table is meant for 32-bit-friendly C structs
/// while we compute in `usize`; add an overflow check at emit time.
pub type Bytes = usize;

pub const KB: Bytes = 1024;
pub const MB: Bytes = 1024 * KB;

#[derive(Error, Debug)]
#[error("{message} ({culprit} bytes)")]
/// Appears while constructing the [Catalog] or [Requests] to be
/// solved against. Carries the offending size.
pub struct ConfigError {
    pub message: String,
    pub culprit: Bytes,
}

//---START EXTERNAL INTERFACES
// The types listed below implement interfaces to several
// data sources for size lists.
//
// To write your own interface, simply make sure that it
// satisfies the `SizeGen` trait.

/// Defines the interface for reading size lists.
///
/// A chunk catalog and an allocation-size ladder are, on disk, the
/// same thing: an ordered list of byte counts. [SizeListParser]
/// covers the plain-text case; users can implement their own types
/// as needed.
pub trait SizeGen {
    fn new(path: PathBuf) -> Self;
    /// Either a list of sizes is successfully returned, or some
    /// arbitrary type that implements [std::error::Error].
    fn read_sizes(&self) -> Result<Vec<Bytes>, Box<dyn std::error::Error>>;
}

/// Reads one size per line. Blank lines and lines starting with
/// `#` are skipped.
pub struct SizeListParser {
    pub path: PathBuf,
}

impl SizeGen for SizeListParser {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
        }
    }

    fn read_sizes(&self) -> Result<Vec<Bytes>, Box<dyn std::error::Error>> {
        let path = self.path.as_path();
        let mut res = vec![];
        match std::fs::metadata(path) {
            Ok(_)   => {
                let fd = std::fs::File::open(path)?;
                let reader = BufReader::new(fd);
                for line in reader.lines() {
                    let line = line?;
                    let token = line.trim();
                    if token.is_empty() || token.starts_with('#') {
                        continue;
                    }
                    res.push(parse_size(token)?);
                }
            },
            Err(e)  => { return Err(Box::new(e)); }
        }

        Ok(res)
    }
}
//---END EXTERNAL INTERFACES

/// Parses a single size token: a decimal byte count, optionally
/// suffixed with `KB` or `MB` (e.g. `24`, `16KB`, `2MB`).
pub fn parse_size(token: &str) -> Result<Bytes, std::num::ParseIntError> {
    let (digits, unit) = match token.find(|c: char| !c.is_ascii_digit()) {
        Some(at)    => token.split_at(at),
        None        => (token, ""),
    };
    let raw: Bytes = digits.parse()?;

    Ok(match unit.trim() {
        ""      => raw,
        "KB"    => raw * KB,
        "MB"    => raw * MB,
        _       => { panic!("Unknown size suffix: {unit}"); }
    })
}

pub fn read_sizes_from_path<T>(file_path: PathBuf) -> Result<Vec<Bytes>, Box<dyn std::error::Error>>
where T: SizeGen {
    let parser = T::new(file_path);
    let sizes = parser.read_sizes()?;
    assert!(sizes.len() > 0);

    Ok(sizes)
}
