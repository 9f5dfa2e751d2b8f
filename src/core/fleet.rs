use crate::domain::model::Vehicle;
use crate::domain::ports::{Describable, ReportSink};
use crate::utils::error::Result;

/// Ordered registry of vehicles. Owns its entries outright; reporting walks
/// them in insertion order.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn report_to(&self, sink: &mut dyn ReportSink) -> Result<()> {
        for vehicle in &self.vehicles {
            sink.submit(&vehicle.describe())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Snapshot, SportsCar, VehicleRecord};

    struct LabelCollector(Vec<String>);

    impl ReportSink for LabelCollector {
        fn submit(&mut self, snapshot: &Snapshot) -> Result<()> {
            self.0.push(snapshot.label().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_report_walks_vehicles_in_insertion_order() {
        let mut fleet = Fleet::new();
        fleet.add(Vehicle::Sports(SportsCar::new("Ferrari", "488", 2022, 661, true)));
        fleet.add(Vehicle::Car(VehicleRecord::new("Ford", "Mustang", 2013)));
        assert_eq!(fleet.len(), 2);

        let mut sink = LabelCollector(Vec::new());
        fleet.report_to(&mut sink).unwrap();
        assert_eq!(sink.0, vec!["sports_car", "car"]);
    }

    #[test]
    fn test_empty_fleet_reports_nothing() {
        let fleet = Fleet::new();
        assert!(fleet.is_empty());
        let mut sink = LabelCollector(Vec::new());
        fleet.report_to(&mut sink).unwrap();
        assert!(sink.0.is_empty());
    }
}
