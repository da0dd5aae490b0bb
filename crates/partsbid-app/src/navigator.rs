// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    AppCommand, AppEvent, AppState, NavigateOptions, Overlay, QuoteId, SupplierId, ViewRequest,
};

/// The controller surface handed to views in place of per-view callbacks.
pub trait Navigator {
    fn navigate(&mut self, target: impl Into<ViewRequest>, options: NavigateOptions)
    -> Vec<AppEvent>;
    fn back(&mut self) -> Vec<AppEvent>;
    fn open_overlay(&mut self, overlay: Overlay) -> Vec<AppEvent>;
    fn close_overlay(&mut self, overlay: Overlay) -> Vec<AppEvent>;
    fn sign_in_success(&mut self) -> Vec<AppEvent>;
    fn sign_out(&mut self) -> Vec<AppEvent>;
    fn start_chat(&mut self, quote_id: QuoteId, supplier_id: SupplierId) -> Vec<AppEvent>;
}

impl Navigator for AppState {
    fn navigate(
        &mut self,
        target: impl Into<ViewRequest>,
        options: NavigateOptions,
    ) -> Vec<AppEvent> {
        self.dispatch(AppCommand::Navigate {
            target: target.into(),
            options,
        })
    }

    fn back(&mut self) -> Vec<AppEvent> {
        self.dispatch(AppCommand::Back)
    }

    fn open_overlay(&mut self, overlay: Overlay) -> Vec<AppEvent> {
        self.dispatch(AppCommand::OpenOverlay(overlay))
    }

    fn close_overlay(&mut self, overlay: Overlay) -> Vec<AppEvent> {
        self.dispatch(AppCommand::CloseOverlay(overlay))
    }

    fn sign_in_success(&mut self) -> Vec<AppEvent> {
        self.dispatch(AppCommand::SignInSuccess)
    }

    fn sign_out(&mut self) -> Vec<AppEvent> {
        self.dispatch(AppCommand::SignOut)
    }

    fn start_chat(&mut self, quote_id: QuoteId, supplier_id: SupplierId) -> Vec<AppEvent> {
        self.dispatch(AppCommand::StartChat {
            quote_id,
            supplier_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Navigator;
    use crate::{AppState, NavigateOptions, Overlay, QuoteId, SupplierId, VehicleInfo, ViewId};

    fn drive<N: Navigator>(navigator: &mut N) {
        navigator.navigate(
            "request-flow",
            NavigateOptions::vehicle(VehicleInfo::new("Ford", "Focus", "2020")),
        );
        navigator.navigate(ViewId::Quotes, NavigateOptions::default());
        navigator.start_chat(QuoteId::new("Q1"), SupplierId::new("S1"));
        navigator.open_overlay(Overlay::SignUp);
        navigator.close_overlay(Overlay::SignUp);
        navigator.open_overlay(Overlay::SignIn);
    }

    #[test]
    fn navigator_drives_the_controller() {
        let mut state = AppState::default();
        drive(&mut state);

        assert_eq!(
            state.history.entries(),
            &[
                ViewId::Home,
                ViewId::VehicleConfirmation,
                ViewId::Quotes,
                ViewId::Chat,
            ]
        );
        assert!(state.overlays.is_open(Overlay::SignIn));
        assert!(!state.overlays.is_open(Overlay::SignUp));

        state.back();
        assert_eq!(state.current_view(), ViewId::Quotes);

        state.sign_in_success();
        state.sign_out();
        assert_eq!(state.history.entries(), &[ViewId::Home]);
    }
}
