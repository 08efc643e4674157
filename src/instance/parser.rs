//! TSPLIB reader for explicit triangular instances.
//!
//! Header lines are matched by keyword prefix and take the text after the
//! first `:` as their value; unknown headers are skipped. After
//! `EDGE_WEIGHT_SECTION` every whitespace-separated token is read as an
//! integer until a line holding only `EOF`, or the end of input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::ProblemInstance;
use crate::distance::EdgeWeightFormat;
use crate::error::{Error, Result};

const NAME: &str = "NAME";
const COMMENT: &str = "COMMENT";
const DIMENSION: &str = "DIMENSION";
const EDGE_WEIGHT_FORMAT: &str = "EDGE_WEIGHT_FORMAT";
const EDGE_WEIGHT_TYPE: &str = "EDGE_WEIGHT_TYPE";
const EDGE_WEIGHT_SECTION: &str = "EDGE_WEIGHT_SECTION";
const EOF: &str = "EOF";

/// Header values collected before the weight section.
#[derive(Debug, Default)]
struct Header {
    name: Option<String>,
    comment: Option<String>,
    dimension: Option<i64>,
    weight_format: Option<String>,
    weight_type: Option<String>,
}

impl Header {
    fn absorb(&mut self, line: &str) -> Result<()> {
        if line.starts_with(NAME) {
            self.name = Some(header_value(line, NAME)?.to_string());
        } else if line.starts_with(COMMENT) {
            self.comment = Some(header_value(line, COMMENT)?.to_string());
        } else if line.starts_with(DIMENSION) {
            let raw = header_value(line, DIMENSION)?;
            let dimension = raw
                .parse::<i64>()
                .map_err(|_| Error::malformed_header(format!("`{DIMENSION}` value `{raw}` is not an integer")))?;
            self.dimension = Some(dimension);
        } else if line.starts_with(EDGE_WEIGHT_FORMAT) {
            self.weight_format = Some(header_value(line, EDGE_WEIGHT_FORMAT)?.to_string());
        } else if line.starts_with(EDGE_WEIGHT_TYPE) {
            self.weight_type = Some(header_value(line, EDGE_WEIGHT_TYPE)?.to_string());
        }
        Ok(())
    }

    fn dimension(&self) -> Result<usize> {
        let dimension = self
            .dimension
            .ok_or_else(|| Error::malformed_header(format!("no `{DIMENSION}` before `{EDGE_WEIGHT_SECTION}`")))?;
        match usize::try_from(dimension) {
            Ok(0) | Err(_) => Err(Error::EmptyInstance),
            Ok(n) => Ok(n),
        }
    }

    /// `EDGE_WEIGHT_FORMAT` takes precedence; `EDGE_WEIGHT_TYPE` is the fallback.
    fn format(&self) -> Result<EdgeWeightFormat> {
        let tag = self
            .weight_format
            .as_deref()
            .or(self.weight_type.as_deref())
            .ok_or_else(|| {
                Error::malformed_header(format!(
                    "no `{EDGE_WEIGHT_FORMAT}` or `{EDGE_WEIGHT_TYPE}` before `{EDGE_WEIGHT_SECTION}`"
                ))
            })?;
        tag.parse()
    }
}

fn header_value<'a>(line: &'a str, keyword: &str) -> Result<&'a str> {
    line.split_once(':')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| Error::malformed_header(format!("`{keyword}` declaration has no `:`")))
}

/// Decodes an instance from any buffered reader.
///
/// # Errors
///
/// - [`Error::MalformedHeader`] when the dimension or format declaration is
///   missing before the weight section, or the section never starts
/// - [`Error::UnsupportedFormat`] for a format tag other than
///   `UPPER_DIAG_ROW` / `LOWER_DIAG_ROW`
/// - [`Error::EmptyInstance`] for a dimension below 1
/// - [`Error::InvalidWeight`] for a non-integer token in the section
/// - [`Error::TruncatedData`] / [`Error::SurplusData`] when the number of
///   weights is not `dimension * (dimension + 1) / 2`
pub fn read_instance<R: BufRead>(reader: R) -> Result<ProblemInstance> {
    let mut header = Header::default();
    let mut lines = reader.lines();
    let mut section_found = false;

    for line in lines.by_ref() {
        let line = line?;
        let line = line.trim();
        if line.starts_with(EDGE_WEIGHT_SECTION) {
            section_found = true;
            break;
        }
        header.absorb(line)?;
    }

    let dimension = header.dimension()?;
    if !section_found {
        return Err(Error::malformed_header(format!("no `{EDGE_WEIGHT_SECTION}`")));
    }
    let format = header.format()?;

    let mut weights = Vec::new();
    for line in lines {
        let line = line?;
        let line = line.trim();
        if line == EOF {
            break;
        }
        for token in line.split_whitespace() {
            let weight = token.parse::<i64>().map_err(|_| Error::InvalidWeight {
                token: token.to_string(),
                position: weights.len(),
            })?;
            weights.push(weight);
        }
    }

    debug!(
        "decoded instance: dimension={dimension} format={format} weights={}",
        weights.len()
    );

    let mut instance = ProblemInstance::new(dimension, format, weights)?;
    if let Some(name) = header.name {
        instance = instance.with_name(name);
    }
    if let Some(comment) = header.comment {
        instance = instance.with_comment(comment);
    }
    Ok(instance)
}

/// Decodes an instance from a file on disk.
pub fn read_instance_file(path: impl AsRef<Path>) -> Result<ProblemInstance> {
    let file = File::open(path.as_ref())?;
    read_instance(BufReader::new(file))
}

impl FromStr for ProblemInstance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        read_instance(s.as_bytes())
    }
}
