// src/convert/decode.rs

use csv::{ByteRecord, ReaderBuilder};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};
use tracing::{debug, trace};

use super::Document;
use crate::error::{ConvertError, ConvertResult, MalformedReason};

impl Document {
    /// Decode CSV text: the first record is the header, every later record a row.
    ///
    /// Empty input gives an empty document. Blank lines are skipped and quoted
    /// fields are unescaped.
    pub fn from_reader<R: Read>(reader: R) -> ConvertResult<Self> {
        decode(reader, Path::new("<reader>"))
    }

    /// Read the whole file at `path` into memory and decode it.
    #[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn read_csv<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConvertError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::InputRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        debug!(bytes = bytes.len(), "read input");
        decode(bytes.as_slice(), path)
    }
}

fn decode<R: Read>(reader: R, source: &Path) -> ConvertResult<Document> {
    // flexible: push_row checks field counts so the error names the line
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut record = ByteRecord::new();

    // 1) header
    if !rdr
        .read_byte_record(&mut record)
        .map_err(|e| map_csv_error(e, source))?
    {
        debug!("input is empty");
        return Ok(Document::default());
    }
    let header_line = line_of(&record);
    let headers = fields_to_strings(&record, header_line)?;
    trace!(?headers, "header");
    let mut doc = Document::with_headers(headers, header_line)?;

    // 2) rows, in source order
    while rdr
        .read_byte_record(&mut record)
        .map_err(|e| map_csv_error(e, source))?
    {
        let line = line_of(&record);
        let row = fields_to_strings(&record, line)?;
        doc.push_row(row, line)?;
    }

    debug!(records = doc.len(), "decoded");
    Ok(doc)
}

fn line_of(record: &ByteRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn fields_to_strings(record: &ByteRecord, line: u64) -> ConvertResult<Vec<String>> {
    record
        .iter()
        .enumerate()
        .map(|(field, bytes)| {
            std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|_| ConvertError::Malformed {
                    line,
                    reason: MalformedReason::Encoding { field },
                })
        })
        .collect()
}

fn map_csv_error(err: csv::Error, source: &Path) -> ConvertError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let msg = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => ConvertError::InputRead {
            path: source.to_path_buf(),
            source: e,
        },
        _ => ConvertError::Malformed {
            line,
            reason: MalformedReason::Syntax(msg),
        },
    }
}
