use std::time::Duration;

use serde::{Deserialize, Serialize};

/// duration as it appears in config trees, split into explicit unit fields
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub millis: Option<u64>,
}

impl ConfigDuration {
    pub fn to_std_duration(&self) -> Duration {
        let secs = self.days.unwrap_or(0) * 24 * 60 * 60
            + self.hours.unwrap_or(0) * 60 * 60
            + self.minutes.unwrap_or(0) * 60
            + self.seconds.unwrap_or(0);
        Duration::from_secs(secs) + Duration::from_millis(self.millis.unwrap_or(0))
    }

    pub fn from_secs(seconds: u64) -> Self {
        Self {
            seconds: Some(seconds),
            ..Default::default()
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self {
            millis: Some(millis),
            ..Default::default()
        }
    }

    pub fn from_mins(minutes: u64) -> Self {
        Self {
            minutes: Some(minutes),
            ..Default::default()
        }
    }
}

impl From<ConfigDuration> for Duration {
    fn from(value: ConfigDuration) -> Self {
        value.to_std_duration()
    }
}
