//! Transient confirmation state of a copy button
//!
//! A successful copy flips the label to [`CopyLabel::Copied`] and hands out a
//! [`RevertTicket`]. The owner schedules a timer for [`RevertTicket::delay`]
//! and passes the ticket back to [`CopyFeedback::expire`]. Only the newest
//! ticket can revert the label, and nothing changes once the button has been
//! released.

use std::time::Duration;

use crate::config::DEFAULT_COPY_CONFIRMATION_MS;

/// Visible state of a copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Copy,
    Copied,
}

impl CopyLabel {
    /// CSS class carrying the icon
    pub fn class(self) -> &'static str {
        match self {
            CopyLabel::Copy => "copy",
            CopyLabel::Copied => "tick",
        }
    }

    /// Accessible label
    pub fn title(self) -> &'static str {
        match self {
            CopyLabel::Copy => "Copy",
            CopyLabel::Copied => "Copied",
        }
    }
}

/// Permission to revert one specific confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket {
    generation: u64,
    delay: Duration,
}

impl RevertTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    window: Duration,
    label: CopyLabel,
    generation: u64,
    released: bool,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COPY_CONFIRMATION_MS))
    }
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            label: CopyLabel::Copy,
            generation: 0,
            released: false,
        }
    }

    pub fn label(&self) -> CopyLabel {
        self.label
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Record the outcome of a copy attempt.
    ///
    /// Returns the ticket to schedule when the label switched to confirmed.
    /// Failed copies leave the label untouched.
    pub fn record_copy(&mut self, copied: bool) -> Option<RevertTicket> {
        if !copied || self.released {
            return None;
        }

        self.generation += 1;
        self.label = CopyLabel::Copied;

        Some(RevertTicket {
            generation: self.generation,
            delay: self.window,
        })
    }

    /// Revert the confirmation if `ticket` is still the newest one.
    pub fn expire(&mut self, ticket: RevertTicket) -> bool {
        if self.released || ticket.generation != self.generation || self.label != CopyLabel::Copied
        {
            return false;
        }

        self.label = CopyLabel::Copy;
        true
    }

    /// The owning button was torn down; pending tickets become inert
    pub fn release(&mut self) {
        self.released = true;
    }
}
