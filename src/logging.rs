use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_FILTER: &str = "homework_bot=debug";

/// Hands out writers that copy every log line to stdout and, when configured,
/// to an append-mode log file.
#[derive(Clone)]
pub(crate) struct TeeMakeWriter {
    file: Option<Arc<Mutex<File>>>,
    echo_stdout: bool,
}

impl TeeMakeWriter {
    pub(crate) fn new(log_file: Option<&Path>, echo_stdout: bool) -> std::io::Result<Self> {
        let file = match log_file {
            Some(path) => Some(Arc::new(Mutex::new(
                OpenOptions::new().create(true).append(true).open(path)?,
            ))),
            None => None,
        };
        Ok(Self { file, echo_stdout })
    }
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = TeeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            file: self.file.clone(),
            echo_stdout: self.echo_stdout,
        }
    }
}

pub(crate) struct TeeWriter {
    file: Option<Arc<Mutex<File>>>,
    echo_stdout: bool,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Some(file) = &self.file {
            // A broken log file must not take stdout logging down with it.
            let mut file = file.lock().unwrap_or_else(|e| e.into_inner());
            let _ = file.write_all(buf);
        }
        if self.echo_stdout {
            std::io::stdout().write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if let Some(file) = &self.file {
            let _ = file.lock().unwrap_or_else(|e| e.into_inner()).flush();
        }
        if self.echo_stdout {
            std::io::stdout().flush()?;
        }
        Ok(())
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub(crate) fn init(log_file: Option<&Path>) -> anyhow::Result<()> {
    let writer = TeeMakeWriter::new(log_file, true)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
