//! View configuration shared through Leptos context

use client_launch_core::ClientViewConfig;
use leptos::prelude::*;

pub fn provide_view_config(config: ClientViewConfig) {
    provide_context(config);
}

/// The provided config, or defaults when none was provided
pub fn use_view_config() -> ClientViewConfig {
    use_context::<ClientViewConfig>().unwrap_or_default()
}
