pub mod clock;
pub mod console;
pub mod demo;
pub mod error;
pub mod gps;
pub mod location;
pub mod profile;
pub mod tracked;
pub mod vehicles;

pub use error::{Error, Result};
pub use gps::{GpsSettings, GpsTracking};
pub use tracked::{GpsCar, GpsDrone};
