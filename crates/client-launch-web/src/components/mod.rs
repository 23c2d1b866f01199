mod back_affordance;
mod client_view;
mod copy_button;
mod install_client_view;
mod open_client_view;

pub use back_affordance::BackAffordance;
pub use client_view::ClientView;
pub use copy_button::CopyButton;
pub use install_client_view::InstallClientView;
pub use open_client_view::OpenClientView;
