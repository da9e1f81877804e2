use std::time::Duration;

/// Cluster-side policy that decides when an unreachable member is declared
/// down, and how long to wait after the removal before the singleton it
/// hosted may be taken over elsewhere.
pub trait DowningProvider {
    fn down_removal_margin(&self) -> Duration;
}

/// Members are never downed automatically, so there is no margin to honor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDowning;

impl DowningProvider for NoDowning {
    fn down_removal_margin(&self) -> Duration {
        Duration::ZERO
    }
}
