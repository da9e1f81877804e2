use std::any::type_name;
use std::time::Duration;

use tracing::debug;

use crate::config::singleton_proxy_config::SingletonProxyConfig;
use crate::config::SINGLETON_PROXY_CONFIG_PATH;
use crate::error::{Error, Result};
use crate::singleton::role_option;

const MAX_BUFFER_SIZE: usize = 10000;

/// Parameters of the singleton proxy that forwards messages to wherever
/// the singleton currently runs. A buffer size of zero drops messages
/// while the singleton location is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSingletonProxySettings {
    singleton_name: String,
    role: Option<String>,
    singleton_identification_interval: Duration,
    buffer_size: usize,
}

impl ClusterSingletonProxySettings {
    pub fn new(
        singleton_name: impl Into<String>,
        role: Option<String>,
        singleton_identification_interval: Duration,
        buffer_size: usize,
    ) -> Result<Self> {
        let singleton_name = singleton_name.into();
        if singleton_name.trim().is_empty() {
            return Err(Error::invalid_argument(
                "singleton-name",
                "must not be blank",
            ));
        }
        if singleton_identification_interval.is_zero() {
            return Err(Error::invalid_argument(
                "singleton-identification-interval",
                "must be positive",
            ));
        }
        if buffer_size > MAX_BUFFER_SIZE {
            return Err(Error::invalid_argument(
                "buffer-size",
                format!("must be <= {}, got {}", MAX_BUFFER_SIZE, buffer_size),
            ));
        }
        Ok(Self {
            singleton_name,
            role: role_option(role),
            singleton_identification_interval,
            buffer_size,
        })
    }

    /// Reads the `cluster.singleton-proxy` section of `config`.
    pub fn from_config(config: &config::Config) -> Result<Self> {
        let proxy: SingletonProxyConfig =
            config.get(SINGLETON_PROXY_CONFIG_PATH).map_err(|error| {
                Error::configuration(
                    type_name::<Self>(),
                    format!("section {}: {}", SINGLETON_PROXY_CONFIG_PATH, error),
                )
            })?;
        proxy.try_into()
    }

    /// Resolves the settings a singleton proxy starts with. Unlike the
    /// manager there is no downing margin involved.
    pub fn create(config: &config::Config) -> Result<Self> {
        if config.get_table(SINGLETON_PROXY_CONFIG_PATH).is_err() {
            return Err(Error::configuration(
                type_name::<Self>(),
                format!("section {} is missing", SINGLETON_PROXY_CONFIG_PATH),
            ));
        }
        let settings = Self::from_config(config)?;
        debug!("resolved {:?}", settings);
        Ok(settings)
    }

    pub fn singleton_name(&self) -> &str {
        &self.singleton_name
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn singleton_identification_interval(&self) -> Duration {
        self.singleton_identification_interval
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn with_singleton_name(&self, singleton_name: impl Into<String>) -> Result<Self> {
        Self::new(
            singleton_name,
            self.role.clone(),
            self.singleton_identification_interval,
            self.buffer_size,
        )
    }

    pub fn with_role(&self, role: Option<String>) -> Result<Self> {
        Self::new(
            self.singleton_name.clone(),
            role,
            self.singleton_identification_interval,
            self.buffer_size,
        )
    }

    pub fn with_singleton_identification_interval(
        &self,
        singleton_identification_interval: Duration,
    ) -> Result<Self> {
        Self::new(
            self.singleton_name.clone(),
            self.role.clone(),
            singleton_identification_interval,
            self.buffer_size,
        )
    }

    pub fn with_buffer_size(&self, buffer_size: usize) -> Result<Self> {
        Self::new(
            self.singleton_name.clone(),
            self.role.clone(),
            self.singleton_identification_interval,
            buffer_size,
        )
    }
}

impl TryFrom<SingletonProxyConfig> for ClusterSingletonProxySettings {
    type Error = Error;

    fn try_from(config: SingletonProxyConfig) -> Result<Self> {
        let SingletonProxyConfig {
            singleton_name,
            role,
            singleton_identification_interval,
            buffer_size,
        } = config;
        Self::new(
            singleton_name,
            role,
            singleton_identification_interval.to_std_duration(),
            buffer_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use config::{Config, File, FileFormat};

    use crate::config::{ConfigBuilder, SingletonConfigBuilder};
    use crate::error::Error;
    use crate::singleton::cluster_singleton_proxy_settings::ClusterSingletonProxySettings;

    fn config_from(toml: &str) -> anyhow::Result<Config> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config)
    }

    #[test]
    fn test_fields_round_trip() -> anyhow::Result<()> {
        let settings = ClusterSingletonProxySettings::new(
            "mySingleton",
            Some("backend".to_string()),
            Duration::from_secs(1),
            0,
        )?;
        assert_eq!(settings.singleton_name(), "mySingleton");
        assert_eq!(settings.role(), Some("backend"));
        assert_eq!(
            settings.singleton_identification_interval(),
            Duration::from_secs(1)
        );
        assert_eq!(settings.buffer_size(), 0);
        Ok(())
    }

    #[test]
    fn test_buffer_size_bounds() -> anyhow::Result<()> {
        let settings = ClusterSingletonProxySettings::new(
            "mySingleton",
            None,
            Duration::from_secs(1),
            10000,
        )?;
        let result = settings.with_buffer_size(10001);
        assert!(matches!(
            result,
            Err(Error::InvalidArgument { field: "buffer-size", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_zero_identification_interval_rejected() {
        let result =
            ClusterSingletonProxySettings::new("mySingleton", None, Duration::ZERO, 1000);
        assert!(matches!(
            result,
            Err(Error::InvalidArgument { field: "singleton-identification-interval", .. })
        ));
    }

    #[test]
    fn test_with_role_normalizes_empty() -> anyhow::Result<()> {
        let settings = ClusterSingletonProxySettings::new(
            "mySingleton",
            Some("backend".to_string()),
            Duration::from_secs(1),
            1000,
        )?;
        let derived = settings.with_role(Some(String::new()))?;
        assert_eq!(derived.role(), None);
        assert_eq!(derived.buffer_size(), settings.buffer_size());
        Ok(())
    }

    #[test]
    fn test_create_from_defaults() -> anyhow::Result<()> {
        let config = SingletonConfigBuilder::default().build()?;
        let settings = ClusterSingletonProxySettings::create(&config)?;
        assert_eq!(settings.singleton_name(), "singleton");
        assert_eq!(settings.role(), None);
        assert_eq!(
            settings.singleton_identification_interval(),
            Duration::from_secs(1)
        );
        assert_eq!(settings.buffer_size(), 1000);
        Ok(())
    }

    #[test]
    fn test_create_missing_section() -> anyhow::Result<()> {
        let config = config_from(
            r#"
            [cluster.singleton]
            singleton-name = "leader-watcher"
            hand-over-retry-interval = { seconds = 1 }
        "#,
        )?;
        let result = ClusterSingletonProxySettings::create(&config);
        match result {
            Err(Error::Configuration { settings, reason }) => {
                assert!(settings.contains("ClusterSingletonProxySettings"));
                assert!(reason.contains("missing"));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
        Ok(())
    }
}
