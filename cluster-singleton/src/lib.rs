pub const CLUSTER_SINGLETON_CONFIG: &'static str = include_str!("../singleton.toml");

pub mod config;
pub mod downing_provider;
pub mod error;
pub mod singleton;
pub mod util;
