use soroban_sdk::String;

use crate::storage_types::{CrowdfundError, MAX_DURATION_DAYS, MIN_DURATION_DAYS, SECONDS_PER_DAY};

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Deadline for a campaign opened at `now` that runs for `duration_days`.
pub fn compute_deadline(now: u64, duration_days: u32) -> Result<u64, CrowdfundError> {
    now.checked_add(days_to_seconds(duration_days))
        .ok_or(CrowdfundError::ArithmeticOverflow)
}

/// Validate creation parameters. Any violation is reported as `InvalidInput`.
pub fn validate_campaign_input(
    title: &String,
    description: &String,
    goal_amount: i128,
    duration_days: u32,
) -> Result<(), CrowdfundError> {
    if title.is_empty() || description.is_empty() {
        return Err(CrowdfundError::InvalidInput);
    }
    if goal_amount <= 0 {
        return Err(CrowdfundError::InvalidInput);
    }
    validate_duration(duration_days)
}

/// Validate duration is within the accepted window (inclusive)
pub fn validate_duration(days: u32) -> Result<(), CrowdfundError> {
    if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&days) {
        return Err(CrowdfundError::InvalidInput);
    }
    Ok(())
}
