//! Vehicles with GPS attached. Each composite owns its vehicle and a GPS unit
//! and forwards to whichever one provides the requested operation.

use crate::{
    console::Console,
    error::Result,
    gps::{GpsSettings, GpsTracking, GpsUnit},
    vehicles::{Car, Drone},
};

pub struct GpsCar {
    car: Car,
    gps: GpsUnit,
}

impl GpsCar {
    /// Prints to stdout with the system clock and the default location.
    pub fn new() -> Self {
        Self::with_settings(Console::stdout(), GpsSettings::default())
    }

    pub fn with_settings(console: Console, settings: GpsSettings) -> Self {
        Self {
            car: Car::with_console(console.clone()),
            gps: GpsUnit::attach(console, settings),
        }
    }

    pub fn drive(&self) -> Result<()> {
        self.car.drive()
    }
}

impl Default for GpsCar {
    fn default() -> Self {
        Self::new()
    }
}

impl GpsTracking for GpsCar {
    fn gps(&self) -> &GpsUnit {
        &self.gps
    }
}

pub struct GpsDrone {
    drone: Drone,
    gps: GpsUnit,
}

impl GpsDrone {
    /// Prints to stdout with the system clock and the default location.
    pub fn new() -> Self {
        Self::with_settings(Console::stdout(), GpsSettings::default())
    }

    pub fn with_settings(console: Console, settings: GpsSettings) -> Self {
        Self {
            drone: Drone::with_console(console.clone()),
            gps: GpsUnit::attach(console, settings),
        }
    }

    pub fn fly(&self) -> Result<()> {
        self.drone.fly()
    }
}

impl Default for GpsDrone {
    fn default() -> Self {
        Self::new()
    }
}

impl GpsTracking for GpsDrone {
    fn gps(&self) -> &GpsUnit {
        &self.gps
    }
}
