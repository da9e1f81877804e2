use serde::{Deserialize, Serialize};

use crate::util::duration::ConfigDuration;

/// raw shape of the `cluster.singleton-proxy` config section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingletonProxyConfig {
    #[serde(rename = "singleton-name")]
    pub singleton_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "singleton-identification-interval")]
    pub singleton_identification_interval: ConfigDuration,
    #[serde(rename = "buffer-size")]
    pub buffer_size: usize,
}
