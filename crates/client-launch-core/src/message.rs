//! User intents dispatched back to the view-model

use tracing::debug;

use crate::types::InstallAction;
use crate::view_model::ClientViewModel;

/// Everything a client view can ask of its view-model
#[derive(Debug, Clone)]
pub enum Message {
    /// "Continue" or "open it here" was followed
    DeepLinkActivated,
    /// "Change" was pressed
    Back,
    /// An install link was followed
    InstallActionActivated(InstallAction),
}

/// Route a message to its callback. Fire-and-forget.
pub fn update(vm: &dyn ClientViewModel, message: Message) {
    debug!("Dispatching {:?}", message);

    match message {
        Message::DeepLinkActivated => vm.deep_link_activated(),
        Message::Back => vm.back(),
        Message::InstallActionActivated(action) => action.activated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::config::ClientViewConfig;
    use crate::present::{back_hidden, present_stage, StageView};
    use crate::types::{ActionKind, InstallViewModel, Stage};
    use crate::view_model::MockClientViewModel;

    #[test]
    fn test_deep_link_activated_once() {
        let mut vm = MockClientViewModel::new();
        vm.expect_deep_link_activated().times(1).return_const(());
        vm.expect_back().never();

        update(&vm, Message::DeepLinkActivated);
    }

    #[test]
    fn test_back_calls_back() {
        let mut vm = MockClientViewModel::new();
        vm.expect_back().times(1).return_const(());
        vm.expect_deep_link_activated().never();

        update(&vm, Message::Back);
    }

    #[test]
    fn test_install_action_runs_its_own_hook() {
        let mut vm = MockClientViewModel::new();
        vm.expect_deep_link_activated().never();
        vm.expect_back().never();

        let count = Arc::new(AtomicUsize::new(0));
        let hook_count = count.clone();
        let action = InstallAction::new(ActionKind::FDroid, "https://f-droid.org", "F-Droid")
            .on_activated(move || {
                hook_count.fetch_add(1, Ordering::SeqCst);
            });

        update(&vm, Message::InstallActionActivated(action));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_open_stage_continue_dispatches_deep_link_once() {
        let mut vm = MockClientViewModel::new();
        vm.expect_name().return_const("Fractal".to_string());
        vm.expect_deep_link()
            .return_const("https://matrix.to/#/#fractal:gnome.org".to_string());
        vm.expect_deep_link_activated().times(1).return_const(());

        let StageView::Open(open) = present_stage(&vm, &Stage::Open, &ClientViewConfig::default())
        else {
            panic!("expected open view");
        };
        assert_eq!(open.continue_link.href, vm.deep_link());

        update(&vm, Message::DeepLinkActivated);
    }

    #[test]
    fn test_toggling_show_back_keeps_change_binding() {
        let show_back = Arc::new(AtomicBool::new(true));
        let backs = Arc::new(AtomicUsize::new(0));

        let mut vm = MockClientViewModel::new();
        let flag = show_back.clone();
        vm.expect_show_back()
            .returning(move || flag.load(Ordering::SeqCst));
        let counter = backs.clone();
        vm.expect_back().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!back_hidden(&vm));
        update(&vm, Message::Back);

        show_back.store(false, Ordering::SeqCst);
        assert!(back_hidden(&vm));

        show_back.store(true, Ordering::SeqCst);
        assert!(!back_hidden(&vm));
        update(&vm, Message::Back);

        assert_eq!(backs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_install_stage_actions_dispatch_in_display_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let actions = ["play-store", "flathub", "website"]
            .into_iter()
            .map(|kind| {
                let order = order.clone();
                InstallAction::new(kind, format!("https://example.org/{kind}"), kind)
                    .on_activated(move || order.lock().unwrap().push(kind))
            })
            .collect();

        let mut vm = MockClientViewModel::new();
        vm.expect_name().return_const("Nheko".to_string());
        vm.expect_install().return_const(Some(InstallViewModel {
            actions,
            ..Default::default()
        }));

        let StageView::Install(install) =
            present_stage(&vm, &Stage::Install, &ClientViewConfig::default())
        else {
            panic!("expected install view");
        };

        for view in install.actions {
            update(&vm, Message::InstallActionActivated(view.action));
        }

        assert_eq!(*order.lock().unwrap(), ["play-store", "flathub", "website"]);
    }
}
