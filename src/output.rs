// src/output.rs
// =============================================================================
// Where visited URLs go.
//
// Every page the crawler visits successfully is recorded once, one URL per
// line. Two destinations are provided:
// - StreamSink: any writer, stdout by default
// - FileSink: a file opened in append mode (never truncated, never read)
//
// FileSink buffers its writes. Call close() when the crawl ends so buffered
// lines reach the disk and write errors are reported; dropping it flushes as
// a last resort but has to ignore errors.
// =============================================================================

use crate::error::SinkError;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Destination for successfully visited URLs.
pub trait Sink {
    fn record(&mut self, url: &str) -> Result<(), SinkError>;
}

/// Writes one URL per line to a stream.
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl StreamSink<io::Stdout> {
    /// The default output channel.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn record(&mut self, url: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", url)?;
        // Lines show up as they are crawled, not when the buffer fills
        self.writer.flush()?;
        Ok(())
    }
}

/// Appends URLs to a file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    // Opens (or creates) the file for appending
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Flushes buffered lines and releases the file
    pub fn close(mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Sink for FileSink {
    fn record(&mut self, url: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_stream_sink_writes_lines() {
        let mut sink = StreamSink::new(Vec::new());
        sink.record("https://ex.com").unwrap();
        sink.record("https://ex.com/x").unwrap();
        assert_eq!(
            String::from_utf8(sink.writer).unwrap(),
            "https://ex.com\nhttps://ex.com/x\n"
        );
    }

    #[test]
    fn test_file_sink_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visited.txt");

        let mut sink = FileSink::open(&path).unwrap();
        assert_eq!(sink.path(), path.as_path());
        sink.record("https://ex.com").unwrap();
        sink.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "https://ex.com\n");
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visited.txt");
        fs::write(&path, "https://earlier.com\n").unwrap();

        let mut sink = FileSink::open(&path).unwrap();
        sink.record("https://ex.com").unwrap();
        sink.close().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "https://earlier.com\nhttps://ex.com\n"
        );
    }

    #[test]
    fn test_file_sink_flushes_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("visited.txt");

        {
            let mut sink = FileSink::open(&path).unwrap();
            sink.record("https://ex.com").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "https://ex.com\n");
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("visited.txt");
        assert!(FileSink::open(path).is_err());
    }
}
