// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use partsbid_app::{
    ConfirmedOrder, Order, OrderId, OrderPage, OrderStatus, PART_CATEGORIES, PartSelection,
    QuoteId, QuoteNotificationBatch, QuoteOffer, Supplier, SupplierId, VehicleInfo,
};
use time::{Date, Duration, Month, OffsetDateTime, Time};

const VEHICLES: [(&str, &str); 14] = [
    ("Ford", "Focus"),
    ("Ford", "Fiesta"),
    ("Vauxhall", "Corsa"),
    ("Vauxhall", "Astra"),
    ("Volkswagen", "Golf"),
    ("Volkswagen", "Polo"),
    ("Toyota", "Yaris"),
    ("Toyota", "Corolla"),
    ("Honda", "Civic"),
    ("Nissan", "Qashqai"),
    ("BMW", "3 Series"),
    ("Audi", "A3"),
    ("Kia", "Sportage"),
    ("Peugeot", "208"),
];

const SUPPLIER_PREFIXES: [&str; 12] = [
    "Northside",
    "Central",
    "Reliable",
    "Summit",
    "Eagle",
    "Heritage",
    "Apex",
    "Redline",
    "Ironbridge",
    "Crossroads",
    "Harbour",
    "Millgate",
];
const SUPPLIER_SUFFIXES: [&str; 6] = [
    "Motors",
    "Auto Parts",
    "Spares",
    "Motor Factors",
    "Garage Supply",
    "Parts Co",
];

const CITIES: [&str; 12] = [
    "Leeds",
    "Manchester",
    "Bristol",
    "Glasgow",
    "Cardiff",
    "Sheffield",
    "Leicester",
    "Norwich",
    "Derby",
    "Exeter",
    "York",
    "Reading",
];

const ETAS: [&str; 5] = ["same day", "next day", "2 days", "3-5 days", "1 week"];

const ORDER_STATUSES: [OrderStatus; 5] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

const REFERENCE_YEAR: i32 = 2026;

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator for the marketplace mock datasets. The same seed always
/// yields the same sequence.
#[derive(Debug, Clone)]
pub struct MarketFaker {
    rng: DeterministicRng,
    next_serial: u64,
}

impl MarketFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_serial: 1000,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn vehicle(&mut self) -> VehicleInfo {
        let (make, model) = VEHICLES[self.rng.int_n(VEHICLES.len())];
        let year = self.int_range_i64(2008, 2025);
        let area = [self.letter(), self.letter()].iter().collect::<String>();
        let age = self.int_range_i64(10, 74);
        let serial = [self.letter(), self.letter(), self.letter()]
            .iter()
            .collect::<String>();
        let plate = format!("{area}{age:02}{serial}");
        VehicleInfo::new(make, model, &year.to_string()).with_registration(&plate)
    }

    pub fn vehicle_for_registration(&mut self, registration: &str) -> VehicleInfo {
        let mut vehicle = self.vehicle();
        vehicle.registration = Some(partsbid_app::normalize_registration(registration));
        vehicle
    }

    pub fn catalog(&mut self, category: &str) -> Vec<PartSelection> {
        part_names(category)
            .iter()
            .map(|name| PartSelection {
                name: (*name).to_owned(),
                category: category.to_owned(),
                price_cents: self.int_range_i64(899, 24_999),
                image: image_name(name),
            })
            .collect()
    }

    pub fn part(&mut self, category: &str) -> PartSelection {
        let names = part_names(category);
        let name = if names.is_empty() {
            format!("{category} component")
        } else {
            names[self.rng.int_n(names.len())].to_owned()
        };
        PartSelection {
            image: image_name(&name),
            name,
            category: category.to_owned(),
            price_cents: self.int_range_i64(899, 24_999),
        }
    }

    pub fn supplier(&mut self) -> Supplier {
        let serial = self.serial();
        let first = self.rng.int_n(PART_CATEGORIES.len());
        let second =
            (first + 1 + self.rng.int_n(PART_CATEGORIES.len() - 1)) % PART_CATEGORIES.len();
        Supplier {
            id: SupplierId::new(format!("S{serial}")),
            name: format!(
                "{} {}",
                self.pick(&SUPPLIER_PREFIXES),
                self.pick(&SUPPLIER_SUFFIXES)
            ),
            city: self.pick(&CITIES).to_owned(),
            rating_tenths: self.int_range_i64(30, 50) as u8,
            categories: vec![
                PART_CATEGORIES[first].to_owned(),
                PART_CATEGORIES[second].to_owned(),
            ],
        }
    }

    pub fn suppliers(&mut self, count: usize) -> Vec<Supplier> {
        (0..count).map(|_| self.supplier()).collect()
    }

    pub fn quote_batch(&mut self, part: &PartSelection, count: usize) -> QuoteNotificationBatch {
        let quotes = (0..count)
            .map(|_| {
                let supplier = self.supplier();
                let variance = self.int_range_i64(-25, 25);
                QuoteOffer {
                    id: QuoteId::new(format!("Q{}", self.serial())),
                    supplier_id: supplier.id,
                    supplier_name: supplier.name,
                    price_cents: (part.price_cents + part.price_cents * variance / 100).max(100),
                    eta: self.pick(&ETAS).to_owned(),
                }
            })
            .collect();
        QuoteNotificationBatch {
            product_name: part.name.clone(),
            product_image: part.image.clone(),
            quotes,
        }
    }

    pub fn confirmed_order(&mut self, offer: &QuoteOffer, part_name: &str) -> ConfirmedOrder {
        ConfirmedOrder {
            order_number: format!("ORD-{}", self.serial()),
            supplier_name: offer.supplier_name.clone(),
            part_name: part_name.to_owned(),
            price_cents: offer.price_cents,
            eta: offer.eta.clone(),
        }
    }

    pub fn order(&mut self) -> Order {
        let category = self.pick(&PART_CATEGORIES).to_owned();
        let part = self.part(&category);
        let serial = self.serial();
        let days_ago = self.int_range_i64(0, 120);
        Order {
            id: OrderId::new(format!("o-{serial}")),
            order_number: format!("ORD-{serial}"),
            part_name: part.name,
            supplier_name: format!(
                "{} {}",
                self.pick(&SUPPLIER_PREFIXES),
                self.pick(&SUPPLIER_SUFFIXES)
            ),
            price_cents: part.price_cents,
            status: ORDER_STATUSES[self.rng.int_n(ORDER_STATUSES.len())],
            placed_at: reference_now() - Duration::days(days_ago),
        }
    }

    /// Builds one page of a fixed-size order history. Pages are 1-based and
    /// clamp to the last page.
    pub fn order_page(&mut self, page: u32, page_size: u32, total_orders: u32) -> OrderPage {
        let page_size = page_size.max(1);
        let total_pages = total_orders.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);
        let start = (page - 1) * page_size;
        let count = total_orders.saturating_sub(start).min(page_size);
        OrderPage {
            orders: (0..count).map(|_| self.order()).collect(),
            page,
            total_pages,
        }
    }

    fn serial(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }

    fn letter(&mut self) -> char {
        char::from(b'A' + self.rng.int_n(26) as u8)
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i64(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }
}

pub fn categories() -> &'static [&'static str] {
    &PART_CATEGORIES
}

pub fn fixture_datetime() -> &'static str {
    "2026-02-19T12:34:56Z"
}

fn reference_now() -> OffsetDateTime {
    let date =
        Date::from_calendar_date(REFERENCE_YEAR, Month::March, 1).expect("valid calendar date");
    date.with_time(Time::MIDNIGHT).assume_utc()
}

fn image_name(part_name: &str) -> String {
    format!(
        "{}.png",
        part_name
            .to_ascii_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    )
}

fn part_names(category: &str) -> &'static [&'static str] {
    match category {
        "Brakes" => &["Front brake pads", "Rear brake discs", "Brake caliper"],
        "Filters" => &["Oil filter", "Air filter", "Cabin pollen filter"],
        "Suspension" => &["Front shock absorber", "Coil spring", "Anti-roll bar link"],
        "Electrical" => &["Alternator", "Starter motor", "Battery 070"],
        "Engine" => &["Timing belt kit", "Water pump", "Spark plug set"],
        "Lighting" => &["Headlight unit", "Rear light cluster", "H7 bulb pair"],
        "Exhaust" => &["Catalytic converter", "Rear silencer", "Exhaust gasket"],
        "Cooling" => &["Radiator", "Thermostat", "Expansion tank"],
        _ => &[],
    }
}
