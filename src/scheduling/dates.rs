//! Calendar-day selection for the scheduling draft.
//!
//! Only whole days are modeled. There is no time-of-day, timezone or
//! calendar conflict handling.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether the picker selects one day or a span of days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    Single,
    #[default]
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelection {
    #[default]
    None,
    Single(NaiveDate),
    Range {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
}

impl DateSelection {
    /// Apply a click on `date` under the given picker mode.
    ///
    /// Range mode: the first pick starts a range, a pick on or after the
    /// start completes it, a pick before the start restarts the range there,
    /// and a pick on a complete range starts a new one.
    pub fn pick(self, date: NaiveDate, mode: DateMode) -> Self {
        match mode {
            DateMode::Single => DateSelection::Single(date),
            DateMode::Range => match self {
                DateSelection::Range { start, end: None } if date >= start => {
                    DateSelection::Range {
                        start,
                        end: Some(date),
                    }
                }
                _ => DateSelection::Range {
                    start: date,
                    end: None,
                },
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            DateSelection::None => false,
            DateSelection::Single(_) => true,
            DateSelection::Range { end, .. } => end.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DateSelection::None)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            DateSelection::None => None,
            DateSelection::Single(d) => Some(*d),
            DateSelection::Range { start, .. } => Some(*start),
        }
    }

    /// Whether `date` falls inside the current selection
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            DateSelection::None => false,
            DateSelection::Single(d) => *d == date,
            DateSelection::Range { start, end: None } => *start == date,
            DateSelection::Range {
                start,
                end: Some(end),
            } => *start <= date && date <= *end,
        }
    }

    /// Number of days covered by a complete selection
    pub fn day_count(&self) -> Option<i64> {
        match self {
            DateSelection::Single(_) => Some(1),
            DateSelection::Range {
                start,
                end: Some(end),
            } => Some((*end - *start).num_days() + 1),
            _ => None,
        }
    }

    /// Human-readable summary, e.g. "Fri Oct 16 2026" or "Oct 16 – Oct 18, 2026"
    pub fn summary(&self) -> Option<String> {
        match self {
            DateSelection::None => None,
            DateSelection::Single(d) => Some(long_date(*d)),
            DateSelection::Range { start, end: None } => {
                Some(format!("{} – …", start.format("%b %-d, %Y")))
            }
            DateSelection::Range {
                start,
                end: Some(end),
            } if start == end => Some(long_date(*start)),
            DateSelection::Range {
                start,
                end: Some(end),
            } => {
                if start.year() == end.year() {
                    Some(format!(
                        "{} – {}",
                        start.format("%b %-d"),
                        end.format("%b %-d, %Y")
                    ))
                } else {
                    Some(format!(
                        "{} – {}",
                        start.format("%b %-d, %Y"),
                        end.format("%b %-d, %Y")
                    ))
                }
            }
        }
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_single_mode_replaces_selection() {
        let sel = DateSelection::None.pick(day(16), DateMode::Single);
        assert_eq!(sel, DateSelection::Single(day(16)));
        let sel = sel.pick(day(20), DateMode::Single);
        assert_eq!(sel, DateSelection::Single(day(20)));
        assert!(sel.is_complete());
    }

    #[test]
    fn test_range_two_picks_complete() {
        let sel = DateSelection::None.pick(day(16), DateMode::Range);
        assert!(!sel.is_complete());
        let sel = sel.pick(day(18), DateMode::Range);
        assert_eq!(
            sel,
            DateSelection::Range {
                start: day(16),
                end: Some(day(18))
            }
        );
        assert_eq!(sel.day_count(), Some(3));
        assert!(sel.contains(day(17)));
        assert!(!sel.contains(day(19)));
    }

    #[test]
    fn test_range_pick_before_start_restarts() {
        let sel = DateSelection::None
            .pick(day(16), DateMode::Range)
            .pick(day(10), DateMode::Range);
        assert_eq!(
            sel,
            DateSelection::Range {
                start: day(10),
                end: None
            }
        );
    }

    #[test]
    fn test_range_same_day_is_complete() {
        let sel = DateSelection::None
            .pick(day(16), DateMode::Range)
            .pick(day(16), DateMode::Range);
        assert!(sel.is_complete());
        assert_eq!(sel.day_count(), Some(1));
        assert_eq!(sel.summary().unwrap(), "Fri Oct 16 2026");
    }

    #[test]
    fn test_pick_on_complete_range_starts_over() {
        let sel = DateSelection::None
            .pick(day(16), DateMode::Range)
            .pick(day(18), DateMode::Range)
            .pick(day(20), DateMode::Range);
        assert_eq!(
            sel,
            DateSelection::Range {
                start: day(20),
                end: None
            }
        );
    }

    #[test]
    fn test_summaries() {
        assert_eq!(DateSelection::None.summary(), None);
        assert_eq!(
            DateSelection::Single(day(16)).summary().unwrap(),
            "Fri Oct 16 2026"
        );
        let range = DateSelection::Range {
            start: day(16),
            end: Some(day(18)),
        };
        assert_eq!(range.summary().unwrap(), "Oct 16 – Oct 18, 2026");
        let open = DateSelection::Range {
            start: day(16),
            end: None,
        };
        assert_eq!(open.summary().unwrap(), "Oct 16, 2026 – …");
    }

    #[test]
    fn test_summary_across_years() {
        let range = DateSelection::Range {
            start: NaiveDate::from_ymd_opt(2026, 12, 30).unwrap(),
            end: Some(NaiveDate::from_ymd_opt(2027, 1, 2).unwrap()),
        };
        assert_eq!(range.summary().unwrap(), "Dec 30, 2026 – Jan 2, 2027");
    }
}
