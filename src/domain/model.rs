use crate::domain::ports::Describable;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range};
use serde_json::Value;

/// Earliest accepted model year (the Benz Patent-Motorwagen).
pub const MIN_YEAR: i32 = 1885;
/// Latest accepted model year.
pub const MAX_YEAR: i32 = 2030;
/// Substituted by [`VehicleRecord::new`] when the caller-supplied year is out
/// of range, so a record is always fully initialized.
pub const FALLBACK_YEAR: i32 = 2000;

/// An ordered field-name-to-value mapping produced by [`Describable::describe`].
///
/// This is the only surface the model exposes to reporting: scalar values
/// keyed by field name, in declaration order, under a type label.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    label: String,
    fields: Vec<(String, Value)>,
}

impl Snapshot {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("type".to_string(), Value::from(self.label.clone()));
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.clone());
        }
        Value::Object(map)
    }
}

/// Core identity of any vehicle: brand, model and model year.
///
/// Fields are private; mutation goes through the validated setters, which
/// reject invalid input with a field-named error and leave the previous value
/// in place. Getters never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    brand: String,
    model: String,
    year: i32,
}

impl VehicleRecord {
    /// Total constructor: brand and model are stored as given, an
    /// out-of-range year is replaced by [`FALLBACK_YEAR`].
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        let year = if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            year
        } else {
            tracing::warn!(
                "year {} outside [{}, {}], falling back to {}",
                year,
                MIN_YEAR,
                MAX_YEAR,
                FALLBACK_YEAR
            );
            FALLBACK_YEAR
        };
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
        }
    }

    /// Validating constructor: applies the same policy as the setters to all
    /// three fields and refuses to build a record that violates it.
    pub fn try_new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Result<Self> {
        let brand = brand.into();
        let model = model.into();
        validate_non_empty_string("brand", &brand)?;
        validate_non_empty_string("model", &model)?;
        validate_range("year", year, MIN_YEAR, MAX_YEAR)?;
        Ok(Self { brand, model, year })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Replaces the brand. On `Err` the field is unchanged.
    pub fn set_brand(&mut self, new_brand: impl Into<String>) -> Result<()> {
        let new_brand = new_brand.into();
        validate_non_empty_string("brand", &new_brand)?;
        self.brand = new_brand;
        Ok(())
    }

    /// Replaces the model. On `Err` the field is unchanged.
    pub fn set_model(&mut self, new_model: impl Into<String>) -> Result<()> {
        let new_model = new_model.into();
        validate_non_empty_string("model", &new_model)?;
        self.model = new_model;
        Ok(())
    }

    /// Replaces the year if it lies in `[MIN_YEAR, MAX_YEAR]`. On `Err` the
    /// field is unchanged.
    pub fn set_year(&mut self, new_year: i32) -> Result<()> {
        validate_range("year", new_year, MIN_YEAR, MAX_YEAR)?;
        self.year = new_year;
        Ok(())
    }

    pub fn age(&self, current_year: i32) -> i32 {
        current_year - self.year
    }

    /// Vehicles 25 years or older count as vintage.
    pub fn is_vintage(&self, current_year: i32) -> bool {
        self.age(current_year) >= 25
    }
}

impl Describable for VehicleRecord {
    fn describe(&self) -> Snapshot {
        let mut snapshot = Snapshot::new("car");
        snapshot.push("brand", self.brand.clone());
        snapshot.push("model", self.model.clone());
        snapshot.push("year", self.year);
        snapshot
    }
}

/// Performance-oriented variant. Extra attributes are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsCar {
    pub record: VehicleRecord,
    pub horsepower: u32,
    pub has_turbo: bool,
}

impl SportsCar {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        horsepower: u32,
        has_turbo: bool,
    ) -> Self {
        Self {
            record: VehicleRecord::new(brand, model, year),
            horsepower,
            has_turbo,
        }
    }

    /// Rough top-speed estimate in mph; illustrative only.
    pub fn top_speed(&self) -> u32 {
        let base = self.horsepower / 3 + 120;
        if self.has_turbo {
            base + 20
        } else {
            base
        }
    }
}

impl Describable for SportsCar {
    fn describe(&self) -> Snapshot {
        let mut snapshot = self.record.describe().with_label("sports_car");
        snapshot.push("horsepower", self.horsepower);
        snapshot.push("has_turbo", self.has_turbo);
        snapshot
    }
}

/// Passenger-oriented variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyCar {
    pub record: VehicleRecord,
    pub seating_capacity: u32,
    pub has_airbags: bool,
}

impl FamilyCar {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        seating_capacity: u32,
        has_airbags: bool,
    ) -> Self {
        Self {
            record: VehicleRecord::new(brand, model, year),
            seating_capacity,
            has_airbags,
        }
    }

    /// Number of passengers actually seated, capped at capacity.
    pub fn load_passengers(&self, requested: u32) -> u32 {
        requested.min(self.seating_capacity)
    }
}

impl Describable for FamilyCar {
    fn describe(&self) -> Snapshot {
        let mut snapshot = self.record.describe().with_label("family_car");
        snapshot.push("seating_capacity", self.seating_capacity);
        snapshot.push("has_airbags", self.has_airbags);
        snapshot
    }
}

/// Battery-electric variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricCar {
    pub record: VehicleRecord,
    pub battery_capacity_kwh: f64,
    pub range_miles: f64,
}

impl ElectricCar {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        battery_capacity_kwh: f64,
        range_miles: f64,
    ) -> Self {
        Self {
            record: VehicleRecord::new(brand, model, year),
            battery_capacity_kwh,
            range_miles,
        }
    }

    /// Miles per kWh; illustrative only.
    pub fn efficiency(&self) -> f64 {
        self.range_miles / self.battery_capacity_kwh
    }
}

impl Describable for ElectricCar {
    fn describe(&self) -> Snapshot {
        let mut snapshot = self.record.describe().with_label("electric_car");
        snapshot.push("battery_capacity_kwh", self.battery_capacity_kwh);
        snapshot.push("range_miles", self.range_miles);
        snapshot
    }
}

/// All vehicle shapes the catalog knows about. The base record is embedded by
/// value in every variant; adding a variant forces every match to be revisited.
#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
    Car(VehicleRecord),
    Sports(SportsCar),
    Family(FamilyCar),
    Electric(ElectricCar),
}

impl Vehicle {
    pub fn record(&self) -> &VehicleRecord {
        match self {
            Vehicle::Car(record) => record,
            Vehicle::Sports(car) => &car.record,
            Vehicle::Family(car) => &car.record,
            Vehicle::Electric(car) => &car.record,
        }
    }

    pub fn record_mut(&mut self) -> &mut VehicleRecord {
        match self {
            Vehicle::Car(record) => record,
            Vehicle::Sports(car) => &mut car.record,
            Vehicle::Family(car) => &mut car.record,
            Vehicle::Electric(car) => &mut car.record,
        }
    }
}

impl Describable for Vehicle {
    fn describe(&self) -> Snapshot {
        match self {
            Vehicle::Car(record) => record.describe(),
            Vehicle::Sports(car) => car.describe(),
            Vehicle::Family(car) => car.describe(),
            Vehicle::Electric(car) => car.describe(),
        }
    }
}
