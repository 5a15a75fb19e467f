// src/convert/document.rs

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;
use std::{
    collections::HashSet,
    io::{self, Write},
};

use crate::error::{ConvertError, ConvertResult, MalformedReason};

/// A decoded CSV table: the header row once, then one value vector per data row.
///
/// Every row has exactly `headers.len()` values, so each [`Record`] carries the
/// header's key set in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// One data row viewed as a field-name → value mapping.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl Document {
    /// Build a document from an already split header and rows.
    ///
    /// Rows are numbered from line 2 in errors, as if the header sat on line 1.
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> ConvertResult<Self> {
        let mut doc = Self::with_headers(headers, 1)?;
        for (idx, row) in rows.into_iter().enumerate() {
            doc.push_row(row, idx as u64 + 2)?;
        }
        Ok(doc)
    }

    pub(crate) fn with_headers(headers: Vec<String>, line: u64) -> ConvertResult<Self> {
        let mut seen = HashSet::with_capacity(headers.len());
        for name in &headers {
            if !seen.insert(name.as_str()) {
                return Err(ConvertError::Malformed {
                    line,
                    reason: MalformedReason::DuplicateHeader { name: name.clone() },
                });
            }
        }
        Ok(Self {
            headers,
            rows: Vec::new(),
        })
    }

    pub(crate) fn push_row(&mut self, row: Vec<String>, line: u64) -> ConvertResult<()> {
        if row.len() != self.headers.len() {
            return Err(ConvertError::Malformed {
                line,
                reason: MalformedReason::FieldCount {
                    expected: self.headers.len(),
                    found: row.len(),
                },
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of records (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> + '_ {
        self.rows.iter().map(move |values| Record {
            headers: &self.headers,
            values,
        })
    }

    pub fn record(&self, idx: usize) -> Option<Record<'_>> {
        self.rows.get(idx).map(|values| Record {
            headers: &self.headers,
            values,
        })
    }

    /// Write the document as a JSON array of objects, four-space indented,
    /// keys in header order and no trailing newline.
    pub fn write_json<W: Write>(&self, writer: W) -> io::Result<()> {
        self.serialize_pretty(writer).map_err(io::Error::from)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        self.serialize_pretty(&mut buf)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }

    fn serialize_pretty<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)
    }

    /// Re-encode as CSV: header line, then each record's values in header order.
    /// An empty document (no header) writes nothing.
    pub fn write_csv<W: Write>(&self, writer: W) -> io::Result<()> {
        if self.headers.is_empty() && self.rows.is_empty() {
            return Ok(());
        }
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        wtr.write_record(&self.headers).map_err(io::Error::from)?;
        for row in &self.rows {
            wtr.write_record(row).map_err(io::Error::from)?;
        }
        wtr.flush()
    }
}

impl<'a> Record<'a> {
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == field)
            .map(|i| self.values[i].as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.headers.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for record in self.records() {
            seq.serialize_element(&record)?;
        }
        seq.end()
    }
}
