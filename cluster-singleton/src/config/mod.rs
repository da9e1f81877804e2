use config::builder::DefaultState;
use config::{Config, File, FileFormat, Source};

use crate::CLUSTER_SINGLETON_CONFIG;

pub mod singleton_config;
pub mod singleton_proxy_config;

pub const SINGLETON_CONFIG_PATH: &'static str = "cluster.singleton";
pub const SINGLETON_PROXY_CONFIG_PATH: &'static str = "cluster.singleton-proxy";

pub trait ConfigBuilder: Sized {
    type C;

    fn add_source<T>(self, source: T) -> anyhow::Result<Self>
    where
        T: Source + Send + Sync + 'static;

    fn build(self) -> anyhow::Result<Self::C>;
}

/// Builds the config tree consumed by the singleton settings factories.
///
/// The defaults embedded from `singleton.toml` are installed as the bottom
/// layer before any caller source, so every tree built here carries the
/// `cluster.singleton` and `cluster.singleton-proxy` sections and caller
/// sources only override individual keys.
#[derive(Debug)]
pub struct SingletonConfigBuilder {
    builder: config::ConfigBuilder<DefaultState>,
}

impl Default for SingletonConfigBuilder {
    fn default() -> Self {
        let builder = Config::builder().add_source(File::from_str(
            CLUSTER_SINGLETON_CONFIG,
            FileFormat::Toml,
        ));
        Self { builder }
    }
}

impl ConfigBuilder for SingletonConfigBuilder {
    type C = Config;

    fn add_source<T>(self, source: T) -> anyhow::Result<Self>
    where
        T: Source + Send + Sync + 'static,
    {
        Ok(Self {
            builder: self.builder.add_source(source),
        })
    }

    fn build(self) -> anyhow::Result<Self::C> {
        let config = self.builder.build()?;
        Ok(config)
    }
}
