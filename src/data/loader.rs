//! Row-oriented dataset loading.
//!
//! Format: one sample per line, comma-separated, no header. The first field
//! is the integer class label, the remaining fields are integer pixel
//! intensities. Rows may differ in length; the network rejects a sample whose
//! feature count does not match its input layer.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::{
    data::sample::Sample,
    error::{Error, Result},
    math::matrix::Matrix,
};

/// Reads every sample from the CSV file at `path`.
///
/// The first malformed row aborts the whole read.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let samples = parse_csv(File::open(path)?)?;
    debug!(path = %path.display(), samples = samples.len(), "loaded dataset");
    Ok(samples)
}

/// Parses samples from any reader holding CSV text.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        samples.push(parse_record(&record?, line)?);
    }
    Ok(samples)
}

fn parse_record(record: &StringRecord, line: usize) -> Result<Sample> {
    let raw_label = record.get(0).unwrap_or_default();
    let label = raw_label
        .parse::<usize>()
        .map_err(|_| Error::InvalidLabel {
            line,
            value: raw_label.to_string(),
        })?;

    let fields: Vec<&str> = record.iter().skip(1).collect();
    let pixels = Matrix::from_numeric_strings(&fields)?;

    Ok(Sample { label, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label_and_pixels() {
        let samples = parse_csv("7,0,128,255\n2,1,2,3\n".as_bytes()).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].label, 7);
        assert_eq!(samples[0].pixels.as_slice(), &[0.0, 128.0, 255.0]);
        assert_eq!(samples[1].pixels.dim(), (3, 1));
    }

    #[test]
    fn bad_label_reports_line() {
        let err = parse_csv("1,0,0\nx,0,0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidLabel { line: 1, .. }));
    }

    #[test]
    fn bad_pixel_aborts_read() {
        let err = parse_csv("1,0,0\n3,0,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { index: 1, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_csv("/nonexistent/digits.csv"),
            Err(Error::Io(_))
        ));
    }
}
