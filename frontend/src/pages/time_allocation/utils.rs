use chrono::NaiveTime;
use leptos::*;

use crate::api::{ApiError, TimeAllocation};

fn parse_time(label: &str, raw: &str) -> Result<NaiveTime, ApiError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| ApiError::validation(format!("{} must be a time (HH:MM).", label)))
}

/// Checks every window and returns the allocation with normalised `HH:MM` values.
pub fn validate_allocation(allocation: &TimeAllocation) -> Result<TimeAllocation, ApiError> {
    let check_in_start = parse_time("Check-in start", &allocation.check_in_start)?;
    let check_in_end = parse_time("Check-in end", &allocation.check_in_end)?;
    let check_out_start = parse_time("Check-out start", &allocation.check_out_start)?;
    let check_out_end = parse_time("Check-out end", &allocation.check_out_end)?;
    let late_after = parse_time("Late after", &allocation.late_after)?;
    let half_day_after = parse_time("Half day after", &allocation.half_day_after)?;

    if check_in_start >= check_in_end {
        return Err(ApiError::validation("Check-in start must be before check-in end."));
    }
    if check_out_start >= check_out_end {
        return Err(ApiError::validation("Check-out start must be before check-out end."));
    }
    if check_in_end > check_out_start {
        return Err(ApiError::validation(
            "Check-in must end no later than check-out starts.",
        ));
    }
    if late_after < check_in_start || late_after > check_in_end {
        return Err(ApiError::validation("Late after must fall within the check-in window."));
    }

    let format = |t: NaiveTime| t.format("%H:%M").to_string();
    Ok(TimeAllocation {
        check_in_start: format(check_in_start),
        check_in_end: format(check_in_end),
        check_out_start: format(check_out_start),
        check_out_end: format(check_out_end),
        late_after: format(late_after),
        half_day_after: format(half_day_after),
    })
}

#[derive(Clone, Copy)]
pub struct TimeAllocationForm {
    pub check_in_start: RwSignal<String>,
    pub check_in_end: RwSignal<String>,
    pub check_out_start: RwSignal<String>,
    pub check_out_end: RwSignal<String>,
    pub late_after: RwSignal<String>,
    pub half_day_after: RwSignal<String>,
}

impl Default for TimeAllocationForm {
    fn default() -> Self {
        Self {
            check_in_start: create_rw_signal(String::new()),
            check_in_end: create_rw_signal(String::new()),
            check_out_start: create_rw_signal(String::new()),
            check_out_end: create_rw_signal(String::new()),
            late_after: create_rw_signal(String::new()),
            half_day_after: create_rw_signal(String::new()),
        }
    }
}

impl TimeAllocationForm {
    pub fn fill(&self, allocation: &TimeAllocation) {
        self.check_in_start.set(allocation.check_in_start.clone());
        self.check_in_end.set(allocation.check_in_end.clone());
        self.check_out_start.set(allocation.check_out_start.clone());
        self.check_out_end.set(allocation.check_out_end.clone());
        self.late_after.set(allocation.late_after.clone());
        self.half_day_after.set(allocation.half_day_after.clone());
    }

    pub fn snapshot(&self) -> TimeAllocation {
        TimeAllocation {
            check_in_start: self.check_in_start.get_untracked(),
            check_in_end: self.check_in_end.get_untracked(),
            check_out_start: self.check_out_start.get_untracked(),
            check_out_end: self.check_out_end.get_untracked(),
            late_after: self.late_after.get_untracked(),
            half_day_after: self.half_day_after.get_untracked(),
        }
    }
}

#[cfg(test)]
pub(crate) fn office_hours() -> TimeAllocation {
    TimeAllocation {
        check_in_start: "08:00".into(),
        check_in_end: "10:00".into(),
        check_out_start: "16:00".into(),
        check_out_end: "20:00".into(),
        late_after: "09:15".into(),
        half_day_after: "12:00".into(),
    }
}
