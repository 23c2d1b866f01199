//! # client-launch-web - Browser Rendering
//!
//! Leptos components rendering the client launch screen from the
//! presentation model in `client-launch-core`, plus the browser-side
//! collaborators the screen needs: clipboard access, console logging and a
//! signal-backed view-model.
//!
//! ## Public API
//!
//! - [`ClientView`] - Header plus the stage-switched open/install content
//! - [`SignalClientViewModel`] - Reactive view-model built from a descriptor
//! - [`provide_view_config()`] - Make a [`ClientViewConfig`] available to the views
//! - [`logging::init()`] - Console logger and panic hook
//!
//! [`ClientViewConfig`]: client_launch_core::ClientViewConfig

pub mod clipboard;
pub mod components;
pub mod context;
pub mod logging;
pub mod view_model;

pub use components::{BackAffordance, ClientView, CopyButton, InstallClientView, OpenClientView};
pub use context::{provide_view_config, use_view_config};
pub use view_model::SignalClientViewModel;
