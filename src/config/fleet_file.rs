use crate::core::fleet::Fleet;
use crate::domain::model::{ElectricCar, FamilyCar, SportsCar, Vehicle, VehicleRecord};
use crate::utils::error::{Result, VehicleError};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::Deserialize;
use std::path::Path;

/// On-disk fleet catalog:
///
/// ```toml
/// name = "demo lot"
///
/// [[vehicle]]
/// type = "sports"
/// brand = "Ferrari"
/// model = "488"
/// year = 2022
/// horsepower = 661
/// has_turbo = true
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FleetFile {
    pub name: Option<String>,
    #[serde(default)]
    pub vehicle: Vec<VehicleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleEntry {
    Car {
        brand: String,
        model: String,
        year: i32,
    },
    Sports {
        brand: String,
        model: String,
        year: i32,
        horsepower: u32,
        has_turbo: bool,
    },
    Family {
        brand: String,
        model: String,
        year: i32,
        seating_capacity: u32,
        has_airbags: bool,
    },
    Electric {
        brand: String,
        model: String,
        year: i32,
        battery_capacity_kwh: f64,
        range_miles: f64,
    },
}

impl FleetFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: FleetFile = toml::from_str(&content)?;
        Ok(file)
    }

    /// Builds the fleet, applying the strict validation policy to every
    /// entry. The first invalid entry aborts the build.
    pub fn build(&self) -> Result<Fleet> {
        let mut fleet = Fleet::new();
        for entry in &self.vehicle {
            fleet.add(entry.to_vehicle()?);
        }
        Ok(fleet)
    }
}

impl Validate for FleetFile {
    fn validate(&self) -> Result<()> {
        if self.vehicle.is_empty() {
            return Err(VehicleError::Config {
                message: "Fleet catalog contains no vehicles".to_string(),
            });
        }
        Ok(())
    }
}

impl VehicleEntry {
    pub fn to_vehicle(&self) -> Result<Vehicle> {
        let vehicle = match self.clone() {
            VehicleEntry::Car { brand, model, year } => {
                Vehicle::Car(VehicleRecord::try_new(brand, model, year)?)
            }
            VehicleEntry::Sports {
                brand,
                model,
                year,
                horsepower,
                has_turbo,
            } => Vehicle::Sports(SportsCar {
                record: VehicleRecord::try_new(brand, model, year)?,
                horsepower,
                has_turbo,
            }),
            VehicleEntry::Family {
                brand,
                model,
                year,
                seating_capacity,
                has_airbags,
            } => Vehicle::Family(FamilyCar {
                record: VehicleRecord::try_new(brand, model, year)?,
                seating_capacity,
                has_airbags,
            }),
            VehicleEntry::Electric {
                brand,
                model,
                year,
                battery_capacity_kwh,
                range_miles,
            } => {
                validate_positive_number("battery_capacity_kwh", battery_capacity_kwh)?;
                validate_positive_number("range_miles", range_miles)?;
                Vehicle::Electric(ElectricCar {
                    record: VehicleRecord::try_new(brand, model, year)?,
                    battery_capacity_kwh,
                    range_miles,
                })
            }
        };
        Ok(vehicle)
    }
}
