/// Aggregate availability of the selected participants.
///
/// Interviewer unavailability dominates observer unavailability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    /// Every interviewer and observer is available (green)
    AllAvailable,
    /// Interviewers are available but at least one observer is not (orange)
    ObserversUnavailable,
    /// At least one interviewer is unavailable (red)
    InterviewersUnavailable,
}

impl AvailabilityStatus {
    /// Reduce per-participant availability into a single status
    pub fn reduce<I, O>(interviewers: I, observers: O) -> Self
    where
        I: IntoIterator<Item = bool>,
        O: IntoIterator<Item = bool>,
    {
        if !interviewers.into_iter().all(|available| available) {
            AvailabilityStatus::InterviewersUnavailable
        } else if !observers.into_iter().all(|available| available) {
            AvailabilityStatus::ObserversUnavailable
        } else {
            AvailabilityStatus::AllAvailable
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            AvailabilityStatus::AllAvailable => "green",
            AvailabilityStatus::ObserversUnavailable => "orange",
            AvailabilityStatus::InterviewersUnavailable => "red",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::AllAvailable => "All participants available",
            AvailabilityStatus::ObserversUnavailable => "Some observers unavailable",
            AvailabilityStatus::InterviewersUnavailable => "Some interviewers unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_available_is_green() {
        let status = AvailabilityStatus::reduce([true, true], [true]);
        assert_eq!(status, AvailabilityStatus::AllAvailable);
        assert_eq!(status.color_name(), "green");
        assert_eq!(status.label(), "All participants available");
    }

    #[test]
    fn test_observer_unavailable_is_orange() {
        let status = AvailabilityStatus::reduce([true], [true, false]);
        assert_eq!(status, AvailabilityStatus::ObserversUnavailable);
        assert_eq!(status.color_name(), "orange");
    }

    #[test]
    fn test_interviewer_unavailable_dominates() {
        for observers in [[true, true], [false, true], [false, false]] {
            let status = AvailabilityStatus::reduce([true, false], observers);
            assert_eq!(status, AvailabilityStatus::InterviewersUnavailable);
            assert_eq!(status.color_name(), "red");
        }
    }

    #[test]
    fn test_no_observers_only_interviewers_count() {
        let status = AvailabilityStatus::reduce([true], std::iter::empty());
        assert_eq!(status, AvailabilityStatus::AllAvailable);
    }
}
