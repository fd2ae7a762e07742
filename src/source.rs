//! Reading roster records from a line-oriented source.
//!
//! `RecordReader` streams records from any `BufRead` one line at a time.
//! Blank lines are ignored. What happens to a short line is decided by
//! [`MalformedPolicy`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, RosterError};
use crate::record::{DEFAULT_DELIMITER, Record, strip_terminator};

/// What to do with a line that has fewer than five fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Stop and report `RosterError::MalformedRecord`.
    #[default]
    Fail,
    /// Log a warning and drop the line.
    Skip,
}

/// Options controlling how roster lines are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: char,
    pub on_malformed: MalformedPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            on_malformed: MalformedPolicy::Fail,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Shorthand for `with_malformed(MalformedPolicy::Skip)`.
    pub fn skip_malformed(self) -> Self {
        self.with_malformed(MalformedPolicy::Skip)
    }
}

/// Open `path` for buffered reading, mapping failure to `RosterError::Io`.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened roster {}", path.display());
    Ok(BufReader::new(file))
}

/// Streaming iterator of parsed records.
///
/// Yields `Err` for read failures and, under `MalformedPolicy::Fail`, for
/// short lines. Iteration may continue after an error; callers that collect
/// into `Result` stop at the first one.
pub struct RecordReader<R> {
    reader: R,
    options: ParseOptions,
    line_no: usize,
    skipped: usize,
    buf: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, options: ParseOptions) -> Self {
        Self {
            reader,
            options,
            line_no: 0,
            skipped: 0,
            buf: String::new(),
        }
    }

    /// Number of lines read so far, blank lines included.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Number of malformed lines dropped under `MalformedPolicy::Skip`.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(RosterError::Read(e))),
            }
            self.line_no += 1;

            if strip_terminator(&self.buf).is_empty() {
                continue;
            }

            match Record::parse_with(&self.buf, self.line_no, self.options.delimiter) {
                Ok(record) => return Some(Ok(record)),
                Err(e) if self.options.on_malformed == MalformedPolicy::Skip => {
                    warn!("skipping {e}");
                    self.skipped += 1;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Read every record from `reader`.
pub fn read_records<R: BufRead>(reader: R, options: ParseOptions) -> Result<Vec<Record>> {
    let mut records = RecordReader::new(reader, options);
    let collected = records.by_ref().collect::<Result<Vec<_>>>()?;
    debug!(
        "parsed {} records from {} lines ({} skipped)",
        collected.len(),
        records.lines_read(),
        records.skipped()
    );
    Ok(collected)
}

/// Read every record from the file at `path`.
pub fn read_path(path: &Path, options: ParseOptions) -> Result<Vec<Record>> {
    read_records(open(path)?, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    const SAMPLE: &str = "Harry|Potter|Gryffindor|McGonagall|Fall 2015
Ron|Weasley|Gryffindor|McGonagall|Fall 2015

Severus|Snape|||I
";

    #[test]
    fn test_reads_all_records_skipping_blank_lines() {
        let records = read_records(Cursor::new(SAMPLE), ParseOptions::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].full_name(), "Harry Potter");
        assert_eq!(records[2].cohort, "I");
    }

    #[test]
    fn test_reader_counts_lines() {
        let mut reader = RecordReader::new(Cursor::new(SAMPLE), ParseOptions::default());
        let count = reader.by_ref().filter(|r| r.is_ok()).count();
        assert_eq!(count, 3);
        assert_eq!(reader.lines_read(), 4);
        assert_eq!(reader.skipped(), 0);
    }

    #[test]
    fn test_malformed_fails_by_default() {
        let input = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nbroken|line\n";
        let err = read_records(Cursor::new(input), ParseOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            RosterError::MalformedRecord {
                line: 2,
                fields: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_skipped_when_requested() {
        let input = "broken|line\nHarry|Potter|Gryffindor|McGonagall|Fall 2015\n";
        let mut reader = RecordReader::new(Cursor::new(input), ParseOptions::new().skip_malformed());
        let records: Vec<Record> = reader.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name(), "Harry Potter");
        assert_eq!(reader.skipped(), 1);
    }

    #[test]
    fn test_tab_delimited_empty_cohort() {
        let input = "Argus\tFilch\t\t\t\nFat\tFriar\t\t\tG\n";
        let options = ParseOptions::new().with_delimiter('\t');
        let records = read_records(Cursor::new(input), options).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cohort, "");
        assert!(records[1].is_ghost());
    }

    #[test]
    fn test_custom_delimiter() {
        let input = "Cho;Chang;Ravenclaw;Flitwick;Fall 2015\n";
        let options = ParseOptions::new().with_delimiter(';');
        let records = read_records(Cursor::new(input), options).unwrap();
        assert_eq!(records[0].house, "Ravenclaw");
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let input: &[u8] = b"Harry|Potter|Gryffindor|McGonagall|\xff\n";
        let err = read_records(Cursor::new(input), ParseOptions::default()).unwrap_err();
        assert!(matches!(err, RosterError::Read(_)));
    }

    #[test]
    fn test_read_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let records = read_path(file.path(), ParseOptions::default()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_path(&missing, ParseOptions::default()).unwrap_err();
        match err {
            RosterError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected Io, got {other:?}"),
        }
    }
}
