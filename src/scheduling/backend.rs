use super::{DraftRequest, ScheduleError};

/// Destination for finished scheduling requests.
///
/// Nothing real sits behind this yet; the dashboard only simulates the call.
pub trait SchedulingBackend {
    fn submit(&self, request: &DraftRequest) -> Result<(), ScheduleError>;
}

/// Accepts every request without side effects
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBackend;

impl SchedulingBackend for SimulatedBackend {
    fn submit(&self, request: &DraftRequest) -> Result<(), ScheduleError> {
        tracing::info!(
            candidate = request.candidate_id,
            interview_type = %request.interview_type(),
            participants = request.participants().len(),
            dates = request.dates().summary().as_deref().unwrap_or("none"),
            "Simulated scheduling request"
        );
        Ok(())
    }
}
