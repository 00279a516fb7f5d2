//! Line-oriented output shared by entities and their capabilities.

use std::{
    fmt::Display,
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

#[derive(Debug, Clone, Default)]
enum Sink {
    #[default]
    Stdout,
    Capture(Arc<Mutex<Vec<String>>>),
}

/// Cloneable handle to where output lines go.
///
/// Every clone writes to the same destination, so a host and the capability
/// attached to it produce one ordered transcript.
#[derive(Debug, Clone, Default)]
pub struct Console {
    sink: Sink,
}

impl Console {
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Keeps lines in memory instead of printing them.
    pub fn capture() -> Self {
        Self {
            sink: Sink::Capture(Arc::default()),
        }
    }

    pub fn line(&self, text: impl Display) -> io::Result<()> {
        match &self.sink {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{text}")?;
                out.flush()
            }
            Sink::Capture(lines) => {
                lines
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(text.to_string());
                Ok(())
            }
        }
    }

    /// Lines written so far. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}
