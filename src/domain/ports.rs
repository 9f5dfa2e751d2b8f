use crate::domain::model::Snapshot;
use crate::utils::error::Result;

/// Capability of producing a structured snapshot of current state.
pub trait Describable {
    fn describe(&self) -> Snapshot;
}

/// Consumer of snapshots. The model never formats or prints; whatever
/// rendering happens lives behind this seam.
pub trait ReportSink {
    fn submit(&mut self, snapshot: &Snapshot) -> Result<()>;
}
