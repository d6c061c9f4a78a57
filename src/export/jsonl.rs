//! JSONL export functionality.

use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ContainerReport;

/// A writer wrapper that swallows broken-pipe errors, so piping output to
/// `head` or a closed `jq` does not turn into a hard failure.
struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                // Downstream command closed the pipe
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes reports as JSONL to a file, or to stdout when `output` is None.
///
/// Returns the number of records written.
pub fn export_jsonl(reports: &[ContainerReport], output: Option<&Path>) -> Result<usize> {
    let mut writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Box::new(file)
    } else {
        Box::new(IgnoreBrokenPipe::new(io::stdout()))
    };

    let mut record_count = 0;
    for report in reports {
        serde_json::to_writer(&mut writer, report)?;
        writeln!(writer)?;
        record_count += 1;
    }
    writer.flush()?;

    Ok(record_count)
}
