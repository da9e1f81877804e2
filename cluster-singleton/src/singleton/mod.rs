pub mod cluster_singleton_manager_settings;
pub mod cluster_singleton_proxy_settings;

/// A role filter is either a real role name or absent; empty and blank
/// strings collapse to absent here so the two are never distinguishable
/// downstream.
pub(crate) fn role_option(role: Option<String>) -> Option<String> {
    role.filter(|role| !role.trim().is_empty())
}
