use showroom::utils::validation::Validate;
use showroom::{
    Describable, FleetFile, JsonReport, SportsCar, TextReport, Vehicle, VehicleRecord,
    FALLBACK_YEAR,
};
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("fleet.toml");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_text_report_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(
        &temp_dir,
        r#"
        name = "demo lot"

        [[vehicle]]
        type = "car"
        brand = "Ford"
        model = "Mustang"
        year = 2013

        [[vehicle]]
        type = "sports"
        brand = "Ferrari"
        model = "488"
        year = 2022
        horsepower = 661
        has_turbo = true

        [[vehicle]]
        type = "family"
        brand = "Volvo"
        model = "XC90"
        year = 2021
        seating_capacity = 7
        has_airbags = true

        [[vehicle]]
        type = "electric"
        brand = "Tesla"
        model = "Model 3"
        year = 2023
        battery_capacity_kwh = 82.0
        range_miles = 333.0
        "#,
    );

    let file = FleetFile::load(&path).unwrap();
    file.validate().unwrap();
    let fleet = file.build().unwrap();
    assert_eq!(fleet.len(), 4);

    let mut report = TextReport::new();
    fleet.report_to(&mut report).unwrap();
    let out = report.render();

    assert!(out.contains("Car Details"));
    assert!(out.contains("Sports Car Details"));
    assert!(out.contains("Family Car Details"));
    assert!(out.contains("Electric Car Details"));
    assert!(out.contains("    Brand: Ford"));
    assert!(out.contains("    Horsepower: 661"));
    assert!(out.contains("    Seating Capacity: 7"));
    assert!(out.contains("    Range Miles: 333.0"));

    // Catalog order is report order.
    let ford = out.find("Ford").unwrap();
    let tesla = out.find("Tesla").unwrap();
    assert!(ford < tesla);
}

#[test]
fn test_end_to_end_json_report_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(
        &temp_dir,
        r#"
        [[vehicle]]
        type = "sports"
        brand = "Ferrari"
        model = "488"
        year = 2022
        horsepower = 661
        has_turbo = true
        "#,
    );

    let fleet = FleetFile::load(&path).unwrap().build().unwrap();
    let mut report = JsonReport::new();
    fleet.report_to(&mut report).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&report.render().unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["type"], "sports_car");
    assert_eq!(parsed[0]["brand"], "Ferrari");
    assert_eq!(parsed[0]["model"], "488");
    assert_eq!(parsed[0]["year"], 2022);
    assert_eq!(parsed[0]["horsepower"], 661);
    assert_eq!(parsed[0]["has_turbo"], true);
}

#[test]
fn test_catalog_with_invalid_entry_fails_to_build() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(
        &temp_dir,
        r#"
        [[vehicle]]
        type = "car"
        brand = ""
        model = "Mustang"
        year = 2013
        "#,
    );

    let file = FleetFile::load(&path).unwrap();
    let err = file.build().unwrap_err();
    assert!(err.to_string().contains("brand"));
}

#[test]
fn test_missing_catalog_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    assert!(FleetFile::load(&path).is_err());
}

#[test]
fn test_mutation_scenario_matches_source_behavior() {
    // Construct, reject an out-of-range year, then accept a valid one.
    let mut car = VehicleRecord::new("Ford", "Mustang", 2013);
    assert_eq!(car.brand(), "Ford");
    assert_eq!(car.model(), "Mustang");
    assert_eq!(car.year(), 2013);

    assert!(car.set_year(1800).is_err());
    assert_eq!(car.year(), 2013);

    assert!(car.set_year(2021).is_ok());
    assert_eq!(car.year(), 2021);

    assert!(car.set_brand("Chevrolet").is_ok());
    assert!(car.set_model("Camaro").is_ok());
    assert_eq!(car.brand(), "Chevrolet");
    assert_eq!(car.model(), "Camaro");
}

#[test]
fn test_lenient_construction_vs_strict_loading() {
    // In-process construction stays total; an out-of-range year falls back.
    let vehicle = Vehicle::Sports(SportsCar::new("Ferrari", "488", 3000, 661, true));
    assert_eq!(vehicle.record().year(), FALLBACK_YEAR);

    // The same data coming through the catalog is refused outright.
    let file: FleetFile = toml::from_str(
        r#"
        [[vehicle]]
        type = "sports"
        brand = "Ferrari"
        model = "488"
        year = 3000
        horsepower = 661
        has_turbo = true
        "#,
    )
    .unwrap();
    assert!(file.build().is_err());
}

#[test]
fn test_describe_snapshot_for_ferrari_488() {
    let car = SportsCar::new("Ferrari", "488", 2022, 661, true);
    let snapshot = car.describe();
    let json = snapshot.to_json();
    assert_eq!(json["brand"], "Ferrari");
    assert_eq!(json["model"], "488");
    assert_eq!(json["year"], 2022);
    assert_eq!(json["horsepower"], 661);
    assert_eq!(json["has_turbo"], true);
}
