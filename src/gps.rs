//! The GPS capability: location retrieval plus timestamped logging that can
//! be attached to any host type.
//!
//! A host opts in by owning a [`GpsUnit`] and implementing [`GpsTracking`],
//! which only asks for access to that unit. Everything else comes from the
//! trait's provided methods.
//!
//! When a host and the capability define an operation with the same name, the
//! host's wins:
//!
//! * a host may override any provided method of [`GpsTracking`], and
//!   [`GpsTracking::log_location`] always reads the position through
//!   `self.get_location()`, so an overridden `get_location` is what gets
//!   logged;
//! * an inherent method on the host shadows the trait method of the same name
//!   at call sites, though the trait's own methods keep calling the trait
//!   version.

use std::sync::Arc;

use crate::{
    clock::{Clock, SystemClock, TimestampStyle},
    console::Console,
    error::Result,
    location::{Coordinates, FixedLocation, LocationSource},
};

/// Collaborators a GPS unit is built from.
#[derive(Clone)]
pub struct GpsSettings {
    pub source: Arc<dyn LocationSource>,
    pub clock: Arc<dyn Clock>,
    pub timestamps: TimestampStyle,
}

impl GpsSettings {
    pub fn with_source(mut self, source: impl LocationSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_timestamps(mut self, timestamps: TimestampStyle) -> Self {
        self.timestamps = timestamps;
        self
    }
}

impl Default for GpsSettings {
    fn default() -> Self {
        Self {
            source: Arc::new(FixedLocation::default()),
            clock: Arc::new(SystemClock),
            timestamps: TimestampStyle::default(),
        }
    }
}

/// State-free GPS receiver owned by a host. Only hosts inside this crate can
/// build one.
pub struct GpsUnit {
    console: Console,
    settings: GpsSettings,
}

impl GpsUnit {
    pub(crate) fn attach(console: Console, settings: GpsSettings) -> Self {
        Self { console, settings }
    }

    pub fn location(&self) -> Coordinates {
        self.settings.source.locate()
    }

    /// Writes `[<timestamp>] Location: (<lat>, <lon>)` for the given position.
    pub fn record(&self, at: Coordinates) -> Result<()> {
        let stamp = self.settings.timestamps.render(self.settings.clock.now())?;
        self.console.line(format_args!("[{stamp}] Location: {at}"))?;
        Ok(())
    }
}

pub trait GpsTracking {
    fn gps(&self) -> &GpsUnit;

    fn get_location(&self) -> Coordinates {
        self.gps().location()
    }

    fn log_location(&self) -> Result<()> {
        let at = self.get_location();
        tracing::debug!(latitude = at.latitude, longitude = at.longitude, "logging location");
        self.gps().record(at)
    }
}
