//! Time range panel visibility

/// Radio value that reveals the time range sections
pub const USE_TIME_RANGE_YES: &str = "yes";
/// Radio value that hides the time range sections
pub const USE_TIME_RANGE_NO: &str = "no";

/// Visibility of the start/end date sections.
///
/// Both sections share one flag, so they are never independently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    shown: bool,
}

impl Visibility {
    pub const HIDDEN: Self = Self { shown: false };

    /// Derive visibility from the current `useTimeRange` value
    pub fn from_choice(value: &str) -> Self {
        Self {
            shown: value == USE_TIME_RANGE_YES,
        }
    }

    /// `startDateFormGroup`
    pub fn start_date_visible(self) -> bool {
        self.shown
    }

    /// `endDateFormGroup`
    pub fn end_date_visible(self) -> bool {
        self.shown
    }
}
