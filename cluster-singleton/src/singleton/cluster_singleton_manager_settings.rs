use std::any::type_name;
use std::time::Duration;

use tracing::debug;

use crate::config::singleton_config::SingletonConfig;
use crate::config::SINGLETON_CONFIG_PATH;
use crate::downing_provider::DowningProvider;
use crate::error::{Error, Result};
use crate::singleton::role_option;

/// Parameters of the cluster singleton manager, fixed at manager startup.
///
/// Instances are immutable; the `with_*` methods hand back a replacement
/// that went through the same validation as a fresh construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSingletonManagerSettings {
    singleton_name: String,
    role: Option<String>,
    removal_margin: Duration,
    hand_over_retry_interval: Duration,
}

impl ClusterSingletonManagerSettings {
    pub fn new(
        singleton_name: impl Into<String>,
        role: Option<String>,
        removal_margin: Duration,
        hand_over_retry_interval: Duration,
    ) -> Result<Self> {
        let singleton_name = singleton_name.into();
        if singleton_name.trim().is_empty() {
            return Err(Error::invalid_argument(
                "singleton-name",
                "must not be blank",
            ));
        }
        if hand_over_retry_interval.is_zero() {
            return Err(Error::invalid_argument(
                "hand-over-retry-interval",
                "must be positive",
            ));
        }
        Ok(Self {
            singleton_name,
            role: role_option(role),
            removal_margin,
            hand_over_retry_interval,
        })
    }

    /// Reads the `cluster.singleton` section of `config`.
    ///
    /// The removal margin is not part of that section; it starts out at
    /// zero and is replaced from the cluster's downing provider in
    /// [`ClusterSingletonManagerSettings::create`].
    pub fn from_config(config: &config::Config) -> Result<Self> {
        let singleton: SingletonConfig = config.get(SINGLETON_CONFIG_PATH).map_err(|error| {
            Error::configuration(
                type_name::<Self>(),
                format!("section {}: {}", SINGLETON_CONFIG_PATH, error),
            )
        })?;
        singleton.try_into()
    }

    /// Resolves the settings a singleton manager starts with: the
    /// `cluster.singleton` section of `config` plus the removal margin of
    /// the cluster's configured downing provider.
    pub fn create(
        config: &config::Config,
        downing_provider: &dyn DowningProvider,
    ) -> Result<Self> {
        if config.get_table(SINGLETON_CONFIG_PATH).is_err() {
            return Err(Error::configuration(
                type_name::<Self>(),
                format!("section {} is missing", SINGLETON_CONFIG_PATH),
            ));
        }
        let settings = Self::from_config(config)?
            .with_removal_margin(downing_provider.down_removal_margin())?;
        debug!("resolved {:?}", settings);
        Ok(settings)
    }

    pub fn singleton_name(&self) -> &str {
        &self.singleton_name
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn removal_margin(&self) -> Duration {
        self.removal_margin
    }

    pub fn hand_over_retry_interval(&self) -> Duration {
        self.hand_over_retry_interval
    }

    pub fn with_singleton_name(&self, singleton_name: impl Into<String>) -> Result<Self> {
        Self::new(
            singleton_name,
            self.role.clone(),
            self.removal_margin,
            self.hand_over_retry_interval,
        )
    }

    pub fn with_role(&self, role: Option<String>) -> Result<Self> {
        Self::new(
            self.singleton_name.clone(),
            role,
            self.removal_margin,
            self.hand_over_retry_interval,
        )
    }

    pub fn with_removal_margin(&self, removal_margin: Duration) -> Result<Self> {
        Self::new(
            self.singleton_name.clone(),
            self.role.clone(),
            removal_margin,
            self.hand_over_retry_interval,
        )
    }

    pub fn with_hand_over_retry_interval(&self, hand_over_retry_interval: Duration) -> Result<Self> {
        Self::new(
            self.singleton_name.clone(),
            self.role.clone(),
            self.removal_margin,
            hand_over_retry_interval,
        )
    }
}

impl TryFrom<SingletonConfig> for ClusterSingletonManagerSettings {
    type Error = Error;

    fn try_from(config: SingletonConfig) -> Result<Self> {
        let SingletonConfig {
            singleton_name,
            role,
            hand_over_retry_interval,
        } = config;
        Self::new(
            singleton_name,
            role,
            Duration::ZERO,
            hand_over_retry_interval.to_std_duration(),
        )
    }
}
