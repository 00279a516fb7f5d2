use crate::{
    console::Console,
    error::Result,
    gps::{GpsSettings, GpsTracking},
    tracked::{GpsCar, GpsDrone},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Car,
    Drone,
}

/// Builds each composite in turn, runs its native action, then logs its
/// location.
pub struct Demo {
    console: Console,
    settings: GpsSettings,
    stages: Vec<Stage>,
}

impl Demo {
    pub fn new(console: Console, settings: GpsSettings) -> Self {
        Self {
            console,
            settings,
            stages: vec![Stage::Car, Stage::Drone],
        }
    }

    pub fn only(mut self, stage: Stage) -> Self {
        self.stages = vec![stage];
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn run(&self) -> Result<()> {
        for stage in &self.stages {
            let _span = tracing::debug_span!("stage", ?stage).entered();
            match stage {
                Stage::Car => {
                    let car = GpsCar::with_settings(self.console.clone(), self.settings.clone());
                    car.drive()?;
                    car.log_location()?;
                }
                Stage::Drone => {
                    let drone =
                        GpsDrone::with_settings(self.console.clone(), self.settings.clone());
                    drone.fly()?;
                    drone.log_location()?;
                }
            }
        }
        Ok(())
    }
}
