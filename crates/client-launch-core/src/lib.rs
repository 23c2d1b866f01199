//! # client-launch-core - Client Screen Model
//!
//! Foundation crate for the client launch screen. Defines the view-model
//! contract the screen observes and turns it into a presentation model that
//! any UI layer can render.
//!
//! This crate has no UI framework dependency; every rendering decision is
//! testable natively.
//!
//! ## Public API
//!
//! ### View-Model (`view_model`, `types`)
//! - [`ClientViewModel`] - Observed properties and callbacks of a client screen
//! - [`Stage`] - Open an installed client, or install it
//! - [`InstallAction`], [`ActionKind`] - Install links and their channels
//!
//! ### Presentation (`present`, `format`)
//! - [`present_header()`], [`present_stage()`] - What the screen shows
//! - [`format_platforms()`] - `"A, B & C"` platform lists
//!
//! ### Intents (`message`)
//! - [`Message`], [`update()`] - User intents routed to view-model callbacks
//!
//! ### Copy Feedback (`copy_feedback`)
//! - [`CopyFeedback`] - Transient "copied" confirmation with stale-timer protection
//!
//! ### Loading (`config`, `descriptor`, `error`)
//! - [`ClientViewConfig`] - Asset root and confirmation window
//! - [`ClientDescriptor`] - JSON client description
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod config;
pub mod copy_feedback;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod message;
pub mod present;
pub mod types;
pub mod view_model;

/// Prelude for common imports
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use config::{load_config, ClientViewConfig, DEFAULT_ASSET_ROOT, DEFAULT_COPY_CONFIRMATION_MS};
pub use copy_feedback::{CopyFeedback, CopyLabel, RevertTicket};
pub use descriptor::{ActionDescriptor, ClientDescriptor};
pub use error::{Error, Result, ResultExt};
pub use format::format_platforms;
pub use message::{update, Message};
pub use present::{
    back_hidden, present_header, present_stage, ActionClasses, ActionContent, ActionView,
    BackPrompt, DeepLinkFallback, DeepLinkView, Header, InstallView, Instructions, OpenView,
    StageView, CHANGE_LABEL, CONTINUE_LABEL, LINK_REL, OPEN_HERE_LABEL,
};
pub use types::{ActionKind, ActivationHook, InstallAction, InstallViewModel, Stage};
pub use view_model::{ClientViewModel, SharedViewModel};
