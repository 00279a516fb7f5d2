use std::fmt::Write;

use chrono::{
    format::{Item, StrftimeItems},
    Local, NaiveDateTime, Timelike,
};

use crate::error::{Error, Result};

const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Wall-clock time source used to stamp log lines.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Reports the same instant on every read.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Renders timestamps for log lines.
///
/// The default style prints microseconds and drops the fractional part
/// entirely when it is zero. A custom style is any chrono strftime string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampStyle {
    #[default]
    Naive,
    Custom(String),
}

impl TimestampStyle {
    /// Accepts a strftime string only if it renders a naive local time.
    /// Offset and zone specifiers such as `%z` or `%Z` are rejected.
    pub fn custom(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        let malformed = format.is_empty()
            || StrftimeItems::new(&format).any(|item| matches!(item, Item::Error));
        if malformed {
            return Err(Error::InvalidTimestampFormat { format });
        }
        let style = Self::Custom(format);
        style.render(NaiveDateTime::default())?;
        Ok(style)
    }

    pub fn render(&self, at: NaiveDateTime) -> Result<String> {
        let format = match self {
            Self::Naive if at.nanosecond() / 1_000 == 0 => SECONDS_FORMAT,
            Self::Naive => MICROS_FORMAT,
            Self::Custom(format) => format.as_str(),
        };
        let mut text = String::new();
        write!(text, "{}", at.format(format)).map_err(|_| Error::InvalidTimestampFormat {
            format: format.to_string(),
        })?;
        Ok(text)
    }
}
