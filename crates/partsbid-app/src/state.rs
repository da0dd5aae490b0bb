// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use tracing::{debug, warn};

use crate::{
    BackOutcome, ConfirmedOrder, HistoryStack, MountedView, NavigateOptions, Overlay,
    OverlayState, PayloadBus, PayloadSlot, QuoteId, QuoteNotificationBatch, SupplierId,
    VehicleInfo, ViewId, ViewRequest, select_view,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub payload: PayloadBus,
    pub history: HistoryStack,
    pub overlays: OverlayState,
    pub is_authenticated: bool,
    pub confirmed_order: Option<ConfirmedOrder>,
    pub status_line: Option<String>,
    /// Bumped on every mount so late backend results can be discarded.
    pub mount_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate {
        target: ViewRequest,
        options: NavigateOptions,
    },
    Back,
    OpenOverlay(Overlay),
    CloseOverlay(Overlay),
    SignInSuccess,
    SignOut,
    StartChat {
        quote_id: QuoteId,
        supplier_id: SupplierId,
    },
    IdentifyVehicle(VehicleInfo),
    ReceiveQuoteNotifications(QuoteNotificationBatch),
    DismissNotifications,
    ViewQuotesFromNotification,
    CheckoutConfirmed(ConfirmedOrder),
    TrackConfirmedOrder,
    RequestAccountMenu,
    RequestTrackOrder,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ViewChanged(ViewId),
    HistoryPushed(ViewId),
    HistoryPopped(ViewId),
    HistoryReset,
    PayloadUpdated(PayloadSlot),
    PayloadCleared(PayloadSlot),
    ScrollReset,
    OverlayOpened(Overlay),
    OverlayClosed(Overlay),
    SessionChanged(bool),
    OrderConfirmed(String),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn current_view(&self) -> ViewId {
        self.history.current()
    }

    pub fn mounted_view(&self) -> MountedView {
        select_view(
            self.current_view(),
            &self.payload,
            self.is_authenticated,
            self.history.current_request(),
        )
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::Navigate { target, options } => self.navigate_to(target, options),
            AppCommand::Back => self.go_back(),
            AppCommand::OpenOverlay(overlay) => self.open(overlay).into_iter().collect(),
            AppCommand::CloseOverlay(overlay) => self.close(overlay).into_iter().collect(),
            AppCommand::SignInSuccess => {
                self.is_authenticated = true;
                debug!("session authenticated");
                vec![AppEvent::SessionChanged(true)]
            }
            AppCommand::SignOut => self.sign_out_and_reset(),
            AppCommand::StartChat {
                quote_id,
                supplier_id,
            } => {
                self.payload.select_chat(quote_id, supplier_id);
                let mut events = vec![
                    AppEvent::PayloadUpdated(PayloadSlot::SelectedQuote),
                    AppEvent::PayloadUpdated(PayloadSlot::SelectedSupplier),
                ];
                events.extend(self.mount(ViewId::Chat));
                events
            }
            AppCommand::IdentifyVehicle(vehicle) => {
                debug!(vehicle = %vehicle.display_name(), "vehicle identified");
                self.payload.set_vehicle(vehicle);
                vec![AppEvent::PayloadUpdated(PayloadSlot::Vehicle)]
            }
            AppCommand::ReceiveQuoteNotifications(batch) => {
                debug!(
                    product = %batch.product_name,
                    quotes = batch.quotes.len(),
                    "quote notifications received"
                );
                self.payload.quote_notifications = Some(batch);
                let mut events = vec![AppEvent::PayloadUpdated(PayloadSlot::QuoteNotifications)];
                events.extend(self.open(Overlay::Notification));
                events
            }
            AppCommand::DismissNotifications => {
                let mut events = self.clear_notifications();
                events.extend(self.close(Overlay::Notification));
                events
            }
            AppCommand::ViewQuotesFromNotification => {
                let mut events = self.clear_notifications();
                events.extend(self.close(Overlay::Notification));
                events.extend(
                    self.navigate_to(ViewRequest::View(ViewId::Quotes), NavigateOptions::default()),
                );
                events
            }
            AppCommand::CheckoutConfirmed(order) => {
                debug!(order = %order.order_number, "checkout confirmed");
                let order_number = order.order_number.clone();
                self.confirmed_order = Some(order);
                let mut events = vec![AppEvent::OrderConfirmed(order_number)];
                events.extend(self.open(Overlay::OrderConfirmation));
                events
            }
            AppCommand::TrackConfirmedOrder => {
                let mut events: Vec<AppEvent> =
                    self.close(Overlay::OrderConfirmation).into_iter().collect();
                events.extend(self.open(Overlay::TrackOrder));
                events
            }
            AppCommand::RequestAccountMenu => {
                let overlay = self.gated(Overlay::Profile);
                self.open(overlay).into_iter().collect()
            }
            AppCommand::RequestTrackOrder => {
                let overlay = self.gated(Overlay::TrackOrder);
                self.open(overlay).into_iter().collect()
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn navigate_to(&mut self, target: ViewRequest, mut options: NavigateOptions) -> Vec<AppEvent> {
        let mut events = Vec::new();
        let mut unmatched = None;
        let view = match target {
            ViewRequest::View(view) => view,
            ViewRequest::RequestFlow => {
                if let Some(vehicle) = options.vehicle.take() {
                    self.payload.set_vehicle(vehicle);
                    events.push(AppEvent::PayloadUpdated(PayloadSlot::Vehicle));
                }
                debug!("redirecting request-flow to vehicle-confirmation");
                ViewId::VehicleConfirmation
            }
            ViewRequest::Unknown(requested) => {
                warn!(requested = %requested, "unknown view requested; mounting not-found");
                unmatched = Some(requested);
                ViewId::NotFound
            }
        };

        for slot in self.payload.merge(options) {
            let event = if slot == PayloadSlot::SelectedCategory
                && self.payload.selected_category.is_none()
            {
                AppEvent::PayloadCleared(slot)
            } else {
                AppEvent::PayloadUpdated(slot)
            };
            events.push(event);
        }
        match unmatched {
            Some(requested) => {
                self.history.push_unmatched(requested);
                events.extend(self.mounted(view));
            }
            None => events.extend(self.mount(view)),
        }
        events
    }

    fn mount(&mut self, view: ViewId) -> Vec<AppEvent> {
        self.history.push(view);
        self.mounted(view)
    }

    fn mounted(&mut self, view: ViewId) -> Vec<AppEvent> {
        self.mount_token = self.mount_token.wrapping_add(1);
        debug!(
            view = view.as_str(),
            depth = self.history.len(),
            "navigated"
        );
        vec![
            AppEvent::HistoryPushed(view),
            AppEvent::ViewChanged(view),
            AppEvent::ScrollReset,
        ]
    }

    fn go_back(&mut self) -> Vec<AppEvent> {
        let history_event = match self.history.back() {
            BackOutcome::Popped { revealed } => AppEvent::HistoryPopped(revealed),
            BackOutcome::ResetToHome => AppEvent::HistoryReset,
        };
        self.mount_token = self.mount_token.wrapping_add(1);
        let view = self.current_view();
        debug!(view = view.as_str(), depth = self.history.len(), "back");
        vec![
            history_event,
            AppEvent::ViewChanged(view),
            AppEvent::ScrollReset,
        ]
    }

    fn sign_out_and_reset(&mut self) -> Vec<AppEvent> {
        self.is_authenticated = false;
        self.history.reset_home();
        self.mount_token = self.mount_token.wrapping_add(1);
        debug!("signed out; history reset");
        vec![
            AppEvent::SessionChanged(false),
            AppEvent::HistoryReset,
            AppEvent::ViewChanged(ViewId::Home),
            AppEvent::ScrollReset,
        ]
    }

    fn open(&mut self, overlay: Overlay) -> Option<AppEvent> {
        if !self.overlays.open(overlay) {
            return None;
        }
        debug!(overlay = overlay.as_str(), "overlay opened");
        Some(AppEvent::OverlayOpened(overlay))
    }

    fn close(&mut self, overlay: Overlay) -> Option<AppEvent> {
        if !self.overlays.close(overlay) {
            return None;
        }
        debug!(overlay = overlay.as_str(), "overlay closed");
        Some(AppEvent::OverlayClosed(overlay))
    }

    fn clear_notifications(&mut self) -> Vec<AppEvent> {
        match self.payload.take_notifications() {
            Some(_) => vec![AppEvent::PayloadCleared(PayloadSlot::QuoteNotifications)],
            None => Vec::new(),
        }
    }

    // Presentation-only: the backend enforces real authorization.
    fn gated(&self, overlay: Overlay) -> Overlay {
        if self.is_authenticated {
            overlay
        } else {
            Overlay::SignUp
        }
    }
}
