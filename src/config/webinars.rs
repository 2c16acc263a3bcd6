//! Webinar scheduling rules configuration

use chrono::Duration;
use serde::Deserialize;

use super::error::ConfigError;
use crate::application::handlers::webinar::SchedulingPolicy;

/// Ten years.
const MAX_NOTICE_HOURS: i64 = 24 * 365 * 10;

/// Optional deployment-level limits applied by the use cases.
///
/// Both limits are off unless configured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebinarsConfig {
    /// Earliest allowed start, in hours from now
    #[serde(default)]
    pub minimum_notice_hours: Option<i64>,

    /// Largest allowed seat count
    #[serde(default)]
    pub max_seats: Option<i32>,
}

impl WebinarsConfig {
    /// Builds the scheduling policy.
    ///
    /// Fails on the same values `validate` rejects.
    pub fn policy(&self) -> Result<SchedulingPolicy, ConfigError> {
        self.validate()?;
        let mut policy = SchedulingPolicy::default();
        if let Some(hours) = self.minimum_notice_hours {
            let notice = Duration::try_hours(hours).ok_or_else(|| {
                ConfigError::invalid("WEBINARS__WEBINARS__MINIMUM_NOTICE_HOURS", "out of range")
            })?;
            policy = policy.with_minimum_notice(notice);
        }
        if let Some(max) = self.max_seats {
            policy = policy.with_max_seats(max);
        }
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(hours) = self.minimum_notice_hours {
            if !(0..=MAX_NOTICE_HOURS).contains(&hours) {
                return Err(ConfigError::invalid(
                    "WEBINARS__WEBINARS__MINIMUM_NOTICE_HOURS",
                    format!("must be between 0 and {MAX_NOTICE_HOURS}"),
                ));
            }
        }
        if matches!(self.max_seats, Some(m) if m <= 0) {
            return Err(ConfigError::invalid(
                "WEBINARS__WEBINARS__MAX_SEATS",
                "must be positive",
            ));
        }
        Ok(())
    }
}
