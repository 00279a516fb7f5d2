//! Entity kinds. Neither knows about the other or about GPS.

mod car;
mod drone;

pub use car::Car;
pub use drone::Drone;
