pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{fleet_file::FleetFile, CliConfig, ReportFormat};
pub use core::fleet::Fleet;
pub use core::report::{JsonReport, TextReport};
pub use domain::model::{
    ElectricCar, FamilyCar, Snapshot, SportsCar, Vehicle, VehicleRecord, FALLBACK_YEAR, MAX_YEAR,
    MIN_YEAR,
};
pub use domain::ports::{Describable, ReportSink};
pub use utils::error::{Result, VehicleError};
