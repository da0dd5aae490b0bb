// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ids::*;

/// Identifier the pre-redesign request flow used; it now lands on vehicle
/// confirmation.
pub const LEGACY_REQUEST_FLOW: &str = "request-flow";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    VehicleConfirmation,
    PartsSelection,
    Quotes,
    Chat,
    SupplierProfile,
    SupplierOnboarding,
    SupplierDashboard,
    AdminDashboard,
    Auth,
    HowItWorks,
    SuppliersDirectory,
    Products,
    SupplierList,
    Notifications,
    History,
    About,
    Contact,
    NotFound,
}

impl ViewId {
    /// Views reachable by name. `NotFound` is only ever produced by coercion.
    pub const ROUTABLE: [Self; 18] = [
        Self::Home,
        Self::VehicleConfirmation,
        Self::PartsSelection,
        Self::Quotes,
        Self::Chat,
        Self::SupplierProfile,
        Self::SupplierOnboarding,
        Self::SupplierDashboard,
        Self::AdminDashboard,
        Self::Auth,
        Self::HowItWorks,
        Self::SuppliersDirectory,
        Self::Products,
        Self::SupplierList,
        Self::Notifications,
        Self::History,
        Self::About,
        Self::Contact,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::VehicleConfirmation => "vehicle-confirmation",
            Self::PartsSelection => "parts-selection",
            Self::Quotes => "quotes",
            Self::Chat => "chat",
            Self::SupplierProfile => "supplier-profile",
            Self::SupplierOnboarding => "supplier-onboarding",
            Self::SupplierDashboard => "supplier-dashboard",
            Self::AdminDashboard => "admin-dashboard",
            Self::Auth => "auth",
            Self::HowItWorks => "how-it-works",
            Self::SuppliersDirectory => "suppliers",
            Self::Products => "products",
            Self::SupplierList => "supplier-list",
            Self::Notifications => "notifications",
            Self::History => "history",
            Self::About => "about",
            Self::Contact => "contact",
            Self::NotFound => "not-found",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ROUTABLE
            .into_iter()
            .find(|view| view.as_str() == value)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::VehicleConfirmation => "confirm vehicle",
            Self::PartsSelection => "parts",
            Self::Quotes => "quotes",
            Self::Chat => "chat",
            Self::SupplierProfile => "supplier",
            Self::SupplierOnboarding => "join as supplier",
            Self::SupplierDashboard => "supplier dashboard",
            Self::AdminDashboard => "admin",
            Self::Auth => "account",
            Self::HowItWorks => "how it works",
            Self::SuppliersDirectory => "suppliers",
            Self::Products => "products",
            Self::SupplierList => "supplier list",
            Self::Notifications => "notifications",
            Self::History => "orders",
            Self::About => "about",
            Self::Contact => "contact",
            Self::NotFound => "not found",
        }
    }
}

/// A navigation target as requested by a view, before redirects and
/// fallback are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    View(ViewId),
    RequestFlow,
    Unknown(String),
}

impl ViewRequest {
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed == LEGACY_REQUEST_FLOW {
            return Self::RequestFlow;
        }
        match ViewId::parse(trimmed) {
            Some(view) => Self::View(view),
            None => Self::Unknown(trimmed.to_owned()),
        }
    }
}

impl From<ViewId> for ViewRequest {
    fn from(view: ViewId) -> Self {
        Self::View(view)
    }
}

impl From<&str> for ViewRequest {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    SignUp,
    SignIn,
    Profile,
    Notification,
    OrderConfirmation,
    TrackOrder,
}

impl Overlay {
    pub const ALL: [Self; 6] = [
        Self::SignUp,
        Self::SignIn,
        Self::Profile,
        Self::Notification,
        Self::OrderConfirmation,
        Self::TrackOrder,
    ];

    pub const fn index(self) -> usize {
        match self {
            Self::SignUp => 0,
            Self::SignIn => 1,
            Self::Profile => 2,
            Self::Notification => 3,
            Self::OrderConfirmation => 4,
            Self::TrackOrder => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignUp => "sign-up",
            Self::SignIn => "sign-in",
            Self::Profile => "profile",
            Self::Notification => "notification",
            Self::OrderConfirmation => "order-confirmation",
            Self::TrackOrder => "track-order",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SignUp => "create account",
            Self::SignIn => "sign in",
            Self::Profile => "account",
            Self::Notification => "new quotes",
            Self::OrderConfirmation => "order confirmed",
            Self::TrackOrder => "track order",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
}

impl VehicleInfo {
    pub fn new(make: &str, model: &str, year: &str) -> Self {
        Self {
            make: make.to_owned(),
            model: model.to_owned(),
            year: year.to_owned(),
            registration: None,
        }
    }

    pub fn with_registration(mut self, registration: &str) -> Self {
        self.registration = Some(normalize_registration(registration));
        self
    }

    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Uppercases a plate and drops interior whitespace so lookups match
/// regardless of how the buyer typed it.
pub fn normalize_registration(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

pub const PART_CATEGORIES: [&str; 8] = [
    "Brakes",
    "Filters",
    "Suspension",
    "Electrical",
    "Engine",
    "Lighting",
    "Exhaust",
    "Cooling",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartSelection {
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub city: String,
    /// Average review score times ten, so 46 reads as 4.6.
    pub rating_tenths: u8,
    pub categories: Vec<String>,
}

impl Supplier {
    pub fn rating_label(&self) -> String {
        format!("{}.{}", self.rating_tenths / 10, self.rating_tenths % 10)
    }

    pub fn serves(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|served| served.eq_ignore_ascii_case(category))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOffer {
    pub id: QuoteId,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub price_cents: i64,
    pub eta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteNotificationBatch {
    pub product_name: String,
    pub product_image: String,
    pub quotes: Vec<QuoteOffer>,
}

impl QuoteNotificationBatch {
    pub fn cheapest(&self) -> Option<&QuoteOffer> {
        self.quotes.iter().min_by_key(|quote| quote.price_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedOrder {
    pub order_number: String,
    pub supplier_name: String,
    pub part_name: String,
    pub price_cents: i64,
    pub eta: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub const fn can_cancel(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub const fn can_review(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub part_name: String,
    pub supplier_name: String,
    pub price_cents: i64,
    pub status: OrderStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub placed_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub page: u32,
    pub total_pages: u32,
}

impl OrderPage {
    pub fn empty() -> Self {
        Self {
            orders: Vec::new(),
            page: 1,
            total_pages: 1,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Optional payload carried alongside a navigation request. Each supplied
/// field overwrites its Payload Bus slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub supplier_id: Option<SupplierId>,
    pub vehicle: Option<VehicleInfo>,
    pub part: Option<PartSelection>,
    pub category: Option<String>,
    pub notifications: Option<QuoteNotificationBatch>,
}

impl NavigateOptions {
    pub fn supplier(supplier_id: impl Into<SupplierId>) -> Self {
        Self {
            supplier_id: Some(supplier_id.into()),
            ..Self::default()
        }
    }

    pub fn vehicle(vehicle: VehicleInfo) -> Self {
        Self {
            vehicle: Some(vehicle),
            ..Self::default()
        }
    }

    pub fn part(part: PartSelection) -> Self {
        Self {
            part: Some(part),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn notifications(batch: QuoteNotificationBatch) -> Self {
        Self {
            notifications: Some(batch),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        OrderPage, OrderStatus, Overlay, QuoteNotificationBatch, QuoteOffer,
        Supplier, VehicleInfo, ViewId, ViewRequest, normalize_registration,
    };
    use crate::{QuoteId, SupplierId};

    #[test]
    fn view_ids_round_trip_through_their_names() {
        for view in ViewId::ROUTABLE {
            assert_eq!(ViewId::parse(view.as_str()), Some(view), "{view:?}");
        }
        assert_eq!(ViewId::parse("not-found"), None);
    }

    #[test]
    fn view_request_maps_legacy_and_unknown_identifiers() {
        assert_eq!(ViewRequest::parse("request-flow"), ViewRequest::RequestFlow);
        assert_eq!(
            ViewRequest::parse(" quotes "),
            ViewRequest::View(ViewId::Quotes)
        );
        assert_eq!(
            ViewRequest::parse("checkout-v0"),
            ViewRequest::Unknown("checkout-v0".to_owned())
        );
    }

    #[test]
    fn overlay_indices_are_dense_and_unique() {
        for (position, overlay) in Overlay::ALL.into_iter().enumerate() {
            assert_eq!(overlay.index(), position);
        }
    }

    #[test]
    fn registration_is_normalized() {
        assert_eq!(normalize_registration(" ab12 cde "), "AB12CDE");
        let vehicle = VehicleInfo::new("Ford", "Focus", "2020").with_registration("ab12 cde");
        assert_eq!(vehicle.registration.as_deref(), Some("AB12CDE"));
        assert_eq!(vehicle.display_name(), "2020 Ford Focus");
    }

    #[test]
    fn order_status_gates_cancel_and_review() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(!OrderStatus::Shipped.can_cancel());
        assert!(OrderStatus::Delivered.can_review());
        assert!(!OrderStatus::Cancelled.can_review());
        assert_eq!(OrderStatus::parse("shipped"), Some(OrderStatus::Shipped));
    }

    #[test]
    fn cheapest_quote_is_lowest_price() {
        let batch = QuoteNotificationBatch {
            product_name: "Brake pads".to_owned(),
            product_image: String::new(),
            quotes: vec![
                QuoteOffer {
                    id: QuoteId::new("Q1"),
                    supplier_id: SupplierId::new("S1"),
                    supplier_name: "Northside Motors".to_owned(),
                    price_cents: 4_500,
                    eta: "2 days".to_owned(),
                },
                QuoteOffer {
                    id: QuoteId::new("Q2"),
                    supplier_id: SupplierId::new("S2"),
                    supplier_name: "Axle & Co".to_owned(),
                    price_cents: 3_900,
                    eta: "4 days".to_owned(),
                },
            ],
        };
        assert_eq!(
            batch.cheapest().map(|quote| quote.id.as_str()),
            Some("Q2")
        );
    }

    #[test]
    fn supplier_rating_and_category_match() {
        let supplier = Supplier {
            id: SupplierId::new("S1"),
            name: "Northside Motors".to_owned(),
            city: "Leeds".to_owned(),
            rating_tenths: 46,
            categories: vec!["Brakes".to_owned(), "Filters".to_owned()],
        };
        assert_eq!(supplier.rating_label(), "4.6");
        assert!(supplier.serves("brakes"));
        assert!(!supplier.serves("Exhaust"));
    }

    #[test]
    fn order_page_paging_flags() {
        let mut page = OrderPage::empty();
        assert!(!page.has_next());
        assert!(!page.has_prev());
        page.total_pages = 3;
        page.page = 2;
        assert!(page.has_next());
        assert!(page.has_prev());
    }
}
