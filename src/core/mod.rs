pub mod fleet;
pub mod report;

pub use crate::domain::ports::{Describable, ReportSink};
