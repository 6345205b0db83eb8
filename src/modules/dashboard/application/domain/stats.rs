use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub projects: u64,
    pub certificates: u64,
    pub skills: u64,
    pub visitors: u64,
    pub unread_messages: u64,
    pub years_of_experience: u32,
}

/// Whole 365-day periods between `earliest_start` and `today`; 0 without a
/// start date or when it lies in the future.
pub fn years_of_experience(earliest_start: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(start) = earliest_start else {
        return 0;
    };
    let days = (today - start).num_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from(days / 365).unwrap_or(u32::MAX)
}
