// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    NavigateOptions, PartSelection, QuoteId, QuoteNotificationBatch, SupplierId, VehicleInfo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSlot {
    Vehicle,
    SelectedSupplier,
    SelectedQuote,
    SelectedPart,
    SelectedCategory,
    QuoteNotifications,
}

/// Most recent cross-view values. Slots are last-write-wins and are never
/// cleared implicitly, except `selected_category` on navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadBus {
    pub vehicle: Option<VehicleInfo>,
    pub selected_supplier_id: Option<SupplierId>,
    pub selected_quote_id: Option<QuoteId>,
    pub selected_part: Option<PartSelection>,
    pub selected_category: Option<String>,
    pub quote_notifications: Option<QuoteNotificationBatch>,
}

impl PayloadBus {
    /// Applies a navigation payload and returns the slots that were written.
    /// An omitted category clears the slot; every other omitted field leaves
    /// its slot untouched.
    pub fn merge(&mut self, options: NavigateOptions) -> Vec<PayloadSlot> {
        let NavigateOptions {
            supplier_id,
            vehicle,
            part,
            category,
            notifications,
        } = options;

        let mut written = Vec::new();
        if let Some(supplier_id) = supplier_id {
            self.selected_supplier_id = Some(supplier_id);
            written.push(PayloadSlot::SelectedSupplier);
        }
        if let Some(vehicle) = vehicle {
            self.vehicle = Some(vehicle);
            written.push(PayloadSlot::Vehicle);
        }
        if let Some(part) = part {
            self.selected_part = Some(part);
            written.push(PayloadSlot::SelectedPart);
        }
        if category.is_some() || self.selected_category.is_some() {
            written.push(PayloadSlot::SelectedCategory);
        }
        self.selected_category = category;
        if let Some(batch) = notifications {
            self.quote_notifications = Some(batch);
            written.push(PayloadSlot::QuoteNotifications);
        }
        written
    }

    pub fn set_vehicle(&mut self, vehicle: VehicleInfo) {
        self.vehicle = Some(vehicle);
    }

    pub fn select_chat(&mut self, quote_id: QuoteId, supplier_id: SupplierId) {
        self.selected_quote_id = Some(quote_id);
        self.selected_supplier_id = Some(supplier_id);
    }

    pub fn take_notifications(&mut self) -> Option<QuoteNotificationBatch> {
        self.quote_notifications.take()
    }
}
