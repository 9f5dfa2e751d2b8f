// Domain layer: entity model and ports (interfaces). No dependencies beyond
// std/serde_json.

pub mod model;
pub mod ports;
