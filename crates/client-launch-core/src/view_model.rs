//! The view-model contract the client views observe
//!
//! Implementations are owned by the host. Getters are expected to be cheap
//! and may read reactive state; the views decide which reads are tracked.

use std::sync::Arc;

use crate::types::{InstallViewModel, Stage};

/// Observable state and callbacks of a client screen
#[cfg_attr(test, mockall::automock)]
pub trait ClientViewModel: Send + Sync {
    fn name(&self) -> String;

    fn description(&self) -> String;

    fn icon_url(&self) -> String;

    /// Ordered platform names. Never empty while rendered.
    fn available_on_platform_names(&self) -> Vec<String>;

    fn stage(&self) -> Stage;

    fn deep_link(&self) -> String;

    /// Whether the "Continue with X. Change" row is visible
    fn show_back(&self) -> bool;

    /// Install stage data; `None` outside the install stage
    fn install(&self) -> Option<InstallViewModel>;

    /// The deep link was followed
    fn deep_link_activated(&self);

    /// The user asked to pick another client
    fn back(&self);
}

/// Shared handle the views hold on to
pub type SharedViewModel = Arc<dyn ClientViewModel>;
