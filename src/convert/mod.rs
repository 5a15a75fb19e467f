// src/convert/mod.rs

mod decode;
mod document;

pub use document::{Document, Record};

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::error::{ConvertError, ConvertResult};

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Converted {} to {}",
            self.input.display(),
            self.output.display()
        )
    }
}

/// Read the CSV at `input` and write it to `output` as a JSON array of records.
///
/// The output is created or truncated in place. A failure part-way through the
/// write can leave a truncated file behind.
#[tracing::instrument(
    level = "info",
    skip(input, output),
    fields(input = %input.as_ref().display(), output = %output.as_ref().display())
)]
pub fn convert_file<P, Q>(input: P, output: Q) -> ConvertResult<Conversion>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    // 1) decode the whole input
    let doc = Document::read_csv(input)?;
    debug!(records = doc.len(), fields = doc.headers().len(), "decoded input");

    // 2) serialize straight into the destination
    let write_err = |source: io::Error| ConvertError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    doc.write_json(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    info!(records = doc.len(), "conversion finished");
    Ok(Conversion {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records: doc.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,powerconv=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    #[test]
    fn converts_power_records() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let input = dir.path().join("power_consumption_records.csv");
        let output = dir.path().join("power_consumption_records.json");
        fs::write(
            &input,
            "timestamp,power_watts\n2024-01-01T00:00:00,120\n2024-01-01T01:00:00,115\n",
        )?;

        let done = convert_file(&input, &output)?;
        assert_eq!(done.records, 2);
        assert_eq!(
            done.to_string(),
            format!("Converted {} to {}", input.display(), output.display())
        );

        let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
        assert_eq!(
            written,
            serde_json::json!([
                {"timestamp": "2024-01-01T00:00:00", "power_watts": "120"},
                {"timestamp": "2024-01-01T01:00:00", "power_watts": "115"}
            ])
        );
        Ok(())
    }

    #[test]
    fn running_twice_is_byte_identical() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.json");
        fs::write(&input, "a,b,c\n1,2,3\n4,5,6\n")?;

        convert_file(&input, &output)?;
        let first = fs::read(&output)?;
        convert_file(&input, &output)?;
        let second = fs::read(&output)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn overwrites_existing_output() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.json");
        fs::write(&input, "a\n1\n")?;
        fs::write(&output, "a much longer stale file that must disappear entirely")?;

        convert_file(&input, &output)?;
        assert_eq!(
            fs::read_to_string(&output)?,
            "[\n    {\n        \"a\": \"1\"\n    }\n]"
        );
        Ok(())
    }

    #[test]
    fn header_only_writes_empty_array() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.json");
        fs::write(&input, "timestamp,power_watts\n")?;

        let done = convert_file(&input, &output)?;
        assert_eq!(done.records, 0);
        assert_eq!(fs::read_to_string(&output)?, "[]");
        Ok(())
    }

    #[test]
    fn missing_input_is_reported_and_output_untouched() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("out.json");
        let err = convert_file(dir.path().join("absent.csv"), &output).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn malformed_input_fails_before_writing() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.json");
        fs::write(&input, "timestamp,power_watts\n2024-01-01T00:00:00\n")?;

        let err = convert_file(&input, &output).unwrap_err();
        assert!(err.is_malformed());
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn unwritable_output_is_a_write_failure() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("in.csv");
        fs::write(&input, "a\n1\n")?;
        let output = dir.path().join("no_such_dir").join("out.json");

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::OutputWrite { .. }));
        Ok(())
    }
}
