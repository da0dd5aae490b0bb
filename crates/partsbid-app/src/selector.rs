// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{
    PartSelection, PayloadBus, QuoteId, QuoteNotificationBatch, SupplierId, VehicleInfo, ViewId,
};

/// The single top-level view to mount, carrying only the payload slots that
/// view consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountedView {
    Home {
        vehicle: Option<VehicleInfo>,
    },
    VehicleConfirmation {
        vehicle: Option<VehicleInfo>,
    },
    PartsSelection {
        vehicle: Option<VehicleInfo>,
    },
    Quotes {
        vehicle: Option<VehicleInfo>,
        selected_quote: Option<QuoteId>,
    },
    Chat {
        quote_id: Option<QuoteId>,
        supplier_id: Option<SupplierId>,
    },
    SupplierProfile {
        supplier_id: Option<SupplierId>,
    },
    SupplierOnboarding,
    SupplierDashboard,
    AdminDashboard,
    Auth {
        authenticated: bool,
    },
    HowItWorks,
    SuppliersDirectory,
    Products {
        category: Option<String>,
    },
    SupplierList {
        part: Option<PartSelection>,
        category: Option<String>,
    },
    Notifications {
        batch: Option<QuoteNotificationBatch>,
    },
    History {
        authenticated: bool,
    },
    About,
    Contact,
    NotFound {
        requested: String,
    },
}

impl MountedView {
    pub fn view_id(&self) -> ViewId {
        match self {
            Self::Home { .. } => ViewId::Home,
            Self::VehicleConfirmation { .. } => ViewId::VehicleConfirmation,
            Self::PartsSelection { .. } => ViewId::PartsSelection,
            Self::Quotes { .. } => ViewId::Quotes,
            Self::Chat { .. } => ViewId::Chat,
            Self::SupplierProfile { .. } => ViewId::SupplierProfile,
            Self::SupplierOnboarding => ViewId::SupplierOnboarding,
            Self::SupplierDashboard => ViewId::SupplierDashboard,
            Self::AdminDashboard => ViewId::AdminDashboard,
            Self::Auth { .. } => ViewId::Auth,
            Self::HowItWorks => ViewId::HowItWorks,
            Self::SuppliersDirectory => ViewId::SuppliersDirectory,
            Self::Products { .. } => ViewId::Products,
            Self::SupplierList { .. } => ViewId::SupplierList,
            Self::Notifications { .. } => ViewId::Notifications,
            Self::History { .. } => ViewId::History,
            Self::About => ViewId::About,
            Self::Contact => ViewId::Contact,
            Self::NotFound { .. } => ViewId::NotFound,
        }
    }
}

pub fn select_view(
    current: ViewId,
    payload: &PayloadBus,
    authenticated: bool,
    unmatched_request: Option<&str>,
) -> MountedView {
    match current {
        ViewId::Home => MountedView::Home {
            vehicle: payload.vehicle.clone(),
        },
        ViewId::VehicleConfirmation => MountedView::VehicleConfirmation {
            vehicle: payload.vehicle.clone(),
        },
        ViewId::PartsSelection => MountedView::PartsSelection {
            vehicle: payload.vehicle.clone(),
        },
        ViewId::Quotes => MountedView::Quotes {
            vehicle: payload.vehicle.clone(),
            selected_quote: payload.selected_quote_id.clone(),
        },
        ViewId::Chat => MountedView::Chat {
            quote_id: payload.selected_quote_id.clone(),
            supplier_id: payload.selected_supplier_id.clone(),
        },
        ViewId::SupplierProfile => MountedView::SupplierProfile {
            supplier_id: payload.selected_supplier_id.clone(),
        },
        ViewId::SupplierOnboarding => MountedView::SupplierOnboarding,
        ViewId::SupplierDashboard => MountedView::SupplierDashboard,
        ViewId::AdminDashboard => MountedView::AdminDashboard,
        ViewId::Auth => MountedView::Auth { authenticated },
        ViewId::HowItWorks => MountedView::HowItWorks,
        ViewId::SuppliersDirectory => MountedView::SuppliersDirectory,
        ViewId::Products => MountedView::Products {
            category: payload.selected_category.clone(),
        },
        ViewId::SupplierList => MountedView::SupplierList {
            part: payload.selected_part.clone(),
            category: payload.selected_category.clone(),
        },
        ViewId::Notifications => MountedView::Notifications {
            batch: payload.quote_notifications.clone(),
        },
        ViewId::History => MountedView::History { authenticated },
        ViewId::About => MountedView::About,
        ViewId::Contact => MountedView::Contact,
        ViewId::NotFound => MountedView::NotFound {
            requested: unmatched_request.unwrap_or_default().to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{MountedView, select_view};
    use crate::{PayloadBus, QuoteId, SupplierId, ViewId};

    #[test]
    fn every_view_mounts_its_own_variant() {
        let payload = PayloadBus::default();
        for view in ViewId::ROUTABLE {
            assert_eq!(select_view(view, &payload, false, None).view_id(), view);
        }
        assert_eq!(
            select_view(ViewId::NotFound, &payload, false, Some("x")).view_id(),
            ViewId::NotFound
        );
    }

    #[test]
    fn chat_receives_quote_and_supplier() {
        let payload = PayloadBus {
            selected_quote_id: Some(QuoteId::new("Q1")),
            selected_supplier_id: Some(SupplierId::new("S1")),
            ..PayloadBus::default()
        };
        assert_eq!(
            select_view(ViewId::Chat, &payload, true, None),
            MountedView::Chat {
                quote_id: Some(QuoteId::new("Q1")),
                supplier_id: Some(SupplierId::new("S1")),
            }
        );
    }

    #[test]
    fn products_receives_category() {
        let payload = PayloadBus {
            selected_category: Some("Brakes".to_owned()),
            ..PayloadBus::default()
        };
        assert_eq!(
            select_view(ViewId::Products, &payload, false, None),
            MountedView::Products {
                category: Some("Brakes".to_owned())
            }
        );
    }

    #[test]
    fn not_found_carries_requested_identifier() {
        let mounted = select_view(
            ViewId::NotFound,
            &PayloadBus::default(),
            false,
            Some("checkout-v0"),
        );
        assert_eq!(
            mounted,
            MountedView::NotFound {
                requested: "checkout-v0".to_owned()
            }
        );
    }
}
