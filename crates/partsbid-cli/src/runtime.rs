// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow, bail};
use partsbid_app::{
    CancellationInput, ConfirmedOrder, Order, OrderId, OrderPage, OrderStatus, PartSelection,
    QuoteId, QuoteNotificationBatch, QuoteOffer, QuoteRequestInput, ReviewInput, Supplier,
    VehicleInfo, validate_registration,
};
use partsbid_testkit::MarketFaker;
use partsbid_tui::{AppRuntime, InternalEvent};
use std::collections::BTreeSet;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::debug;

pub struct ApiRuntime {
    client: partsbid_api::Client,
    page_size: u32,
}

impl ApiRuntime {
    pub fn new(client: partsbid_api::Client, page_size: u32) -> Self {
        Self { client, page_size }
    }
}

impl AppRuntime for ApiRuntime {
    fn lookup_vehicle(&mut self, registration: &str) -> Result<VehicleInfo> {
        self.client.lookup_vehicle(registration)
    }

    fn load_catalog(&mut self, category: &str) -> Result<Vec<PartSelection>> {
        self.client.list_parts(category)
    }

    fn load_suppliers(&mut self) -> Result<Vec<Supplier>> {
        self.client.list_suppliers()
    }

    fn request_quotes(&mut self, request: &QuoteRequestInput) -> Result<QuoteNotificationBatch> {
        self.client.request_quotes(request)
    }

    fn accept_quote(&mut self, quote_id: &QuoteId) -> Result<ConfirmedOrder> {
        self.client.accept_quote(quote_id)
    }

    fn load_orders(&mut self, page: u32) -> Result<OrderPage> {
        self.client.list_orders(page, self.page_size)
    }

    fn cancel_order(&mut self, order_id: &OrderId, input: &CancellationInput) -> Result<()> {
        self.client.cancel_order(order_id, input)
    }

    fn submit_review(&mut self, order_id: &OrderId, review: &ReviewInput) -> Result<()> {
        self.client.submit_review(order_id, review)
    }

    // Runs off the UI thread; the shell drops the result if the view was
    // remounted in the meantime.
    fn spawn_load_orders(&mut self, token: u64, page: u32, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        let page_size = self.page_size;
        thread::Builder::new()
            .name("partsbid-orders".to_owned())
            .spawn(move || {
                let result = client
                    .list_orders(page, page_size)
                    .map_err(|error| format!("{error:#}"));
                if tx
                    .send(InternalEvent::OrdersLoaded {
                        token,
                        page,
                        result,
                    })
                    .is_err()
                {
                    debug!(token, page, "order page finished after shutdown");
                }
            })
            .map_err(|error| anyhow!("spawn order loader: {error}"))?;
        Ok(())
    }
}

const DEMO_ORDER_COUNT: usize = 23;

/// Serves a seeded in-memory marketplace so the shell runs without a
/// backend. Accepted quotes, cancellations and reviews mutate the order list.
pub struct DemoRuntime {
    faker: MarketFaker,
    page_size: u32,
    suppliers: Vec<Supplier>,
    orders: Vec<Order>,
    offers: Vec<(QuoteOffer, String)>,
    reviewed: BTreeSet<OrderId>,
}

impl DemoRuntime {
    pub fn new(seed: u64, page_size: u32) -> Self {
        let mut faker = MarketFaker::new(seed);
        let suppliers = faker.suppliers(12);
        let mut orders = (0..DEMO_ORDER_COUNT)
            .map(|_| faker.order())
            .collect::<Vec<_>>();
        orders.sort_by(|left, right| right.placed_at.cmp(&left.placed_at));
        Self {
            faker,
            page_size: page_size.max(1),
            suppliers,
            orders,
            offers: Vec::new(),
            reviewed: BTreeSet::new(),
        }
    }

    fn order_mut(&mut self, order_id: &OrderId) -> Result<&mut Order> {
        self.orders
            .iter_mut()
            .find(|order| &order.id == order_id)
            .ok_or_else(|| anyhow!("order {order_id} not found"))
    }
}

impl AppRuntime for DemoRuntime {
    fn lookup_vehicle(&mut self, registration: &str) -> Result<VehicleInfo> {
        let plate = validate_registration(registration)?;
        Ok(self.faker.vehicle_for_registration(&plate))
    }

    fn load_catalog(&mut self, category: &str) -> Result<Vec<PartSelection>> {
        Ok(self.faker.catalog(category))
    }

    fn load_suppliers(&mut self) -> Result<Vec<Supplier>> {
        Ok(self.suppliers.clone())
    }

    fn request_quotes(&mut self, request: &QuoteRequestInput) -> Result<QuoteNotificationBatch> {
        request.validate()?;
        let count = 3 + self.faker.int_n(3);
        let batch = self.faker.quote_batch(&request.part, count);
        self.offers = batch
            .quotes
            .iter()
            .map(|offer| (offer.clone(), request.part.name.clone()))
            .collect();
        debug!(part = %request.part.name, quotes = count, "demo quotes issued");
        Ok(batch)
    }

    fn accept_quote(&mut self, quote_id: &QuoteId) -> Result<ConfirmedOrder> {
        let Some((offer, part_name)) = self
            .offers
            .iter()
            .find(|(offer, _)| &offer.id == quote_id)
            .cloned()
        else {
            bail!("quote {quote_id} is no longer available; request quotes again");
        };
        let confirmed = self.faker.confirmed_order(&offer, &part_name);
        let mut order = self.faker.order();
        order.id = OrderId::new(confirmed.order_number.to_lowercase());
        order.order_number = confirmed.order_number.clone();
        order.part_name = confirmed.part_name.clone();
        order.supplier_name = confirmed.supplier_name.clone();
        order.price_cents = confirmed.price_cents;
        order.status = OrderStatus::Confirmed;
        if let Some(latest) = self.orders.first() {
            order.placed_at = order.placed_at.max(latest.placed_at);
        }
        self.orders.insert(0, order);
        self.offers.clear();
        Ok(confirmed)
    }

    fn load_orders(&mut self, page: u32) -> Result<OrderPage> {
        if page == 0 {
            bail!("order pages start at 1");
        }
        let page_size = self.page_size as usize;
        let total_pages = self.orders.len().div_ceil(page_size).max(1);
        let page = (page as usize).min(total_pages);
        let orders = self
            .orders
            .iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect();
        Ok(OrderPage {
            orders,
            page: u32::try_from(page)?,
            total_pages: u32::try_from(total_pages)?,
        })
    }

    fn cancel_order(&mut self, order_id: &OrderId, input: &CancellationInput) -> Result<()> {
        input.validate()?;
        let order = self.order_mut(order_id)?;
        if !order.status.can_cancel() {
            bail!(
                "order {} is {} and can no longer be cancelled",
                order.order_number,
                order.status.as_str()
            );
        }
        order.status = OrderStatus::Cancelled;
        debug!(order = %order_id, reason = %input.reason, "demo order cancelled");
        Ok(())
    }

    fn submit_review(&mut self, order_id: &OrderId, review: &ReviewInput) -> Result<()> {
        review.validate()?;
        let order = self.order_mut(order_id)?;
        if !order.status.can_review() {
            bail!(
                "order {} is {}; only delivered orders can be reviewed",
                order.order_number,
                order.status.as_str()
            );
        }
        if !self.reviewed.insert(order_id.clone()) {
            bail!("order {order_id} already has a review");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiRuntime, DemoRuntime};
    use anyhow::Result;
    use partsbid_app::{
        CancellationInput, OrderStatus, PartSelection, QuoteRequestInput, ReviewInput, VehicleInfo,
    };
    use partsbid_tui::{AppRuntime, InternalEvent};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tiny_http::{Header, Response, Server};

    fn brake_request() -> QuoteRequestInput {
        QuoteRequestInput {
            vehicle: VehicleInfo::new("Ford", "Focus", "2020"),
            part: PartSelection {
                name: "Front brake pads".to_owned(),
                category: "Brakes".to_owned(),
                price_cents: 4_500,
                image: "front-brake-pads.png".to_owned(),
            },
        }
    }

    #[test]
    fn demo_runtime_pages_a_fixed_history() -> Result<()> {
        let mut runtime = DemoRuntime::new(7, 10);
        let first = runtime.load_orders(1)?;
        assert_eq!(first.orders.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());

        let last = runtime.load_orders(9)?;
        assert_eq!(last.page, 3);
        assert_eq!(last.orders.len(), 3);
        assert!(!last.has_next());

        assert_eq!(runtime.load_orders(1)?, first);
        assert!(runtime.load_orders(0).is_err());
        Ok(())
    }

    #[test]
    fn demo_runtime_is_deterministic_per_seed() -> Result<()> {
        let mut left = DemoRuntime::new(42, 5);
        let mut right = DemoRuntime::new(42, 5);
        assert_eq!(left.load_orders(2)?, right.load_orders(2)?);
        assert_eq!(left.load_suppliers()?, right.load_suppliers()?);
        assert_eq!(
            left.lookup_vehicle("ab12cde")?,
            right.lookup_vehicle("AB12 CDE")?
        );
        Ok(())
    }

    #[test]
    fn accepted_quote_becomes_newest_order() -> Result<()> {
        let mut runtime = DemoRuntime::new(3, 10);
        let batch = runtime.request_quotes(&brake_request())?;
        assert!((3..=5).contains(&batch.quotes.len()));
        assert_eq!(batch.product_name, "Front brake pads");

        let offer = batch.quotes[1].clone();
        let confirmed = runtime.accept_quote(&offer.id)?;
        assert_eq!(confirmed.supplier_name, offer.supplier_name);
        assert_eq!(confirmed.price_cents, offer.price_cents);

        let newest = runtime.load_orders(1)?.orders[0].clone();
        assert_eq!(newest.order_number, confirmed.order_number);
        assert_eq!(newest.status, OrderStatus::Confirmed);

        let error = runtime
            .accept_quote(&offer.id)
            .expect_err("offers are single use");
        assert!(error.to_string().contains("no longer available"));
        Ok(())
    }

    #[test]
    fn cancel_and_review_follow_order_status() -> Result<()> {
        let mut runtime = DemoRuntime::new(11, 50);
        let orders = runtime.load_orders(1)?.orders;
        let reason = CancellationInput {
            reason: "ordered the wrong size".to_owned(),
        };
        let review = ReviewInput {
            rating: 4,
            comment: "well packed".to_owned(),
        };

        let cancellable = orders.iter().find(|order| order.status.can_cancel());
        if let Some(order) = cancellable {
            runtime.cancel_order(&order.id, &reason)?;
            let error = runtime
                .cancel_order(&order.id, &reason)
                .expect_err("cancelled orders stay cancelled");
            assert!(error.to_string().contains("can no longer be cancelled"));
        }

        let delivered = orders.iter().find(|order| order.status.can_review());
        if let Some(order) = delivered {
            runtime.submit_review(&order.id, &review)?;
            let error = runtime
                .submit_review(&order.id, &review)
                .expect_err("one review per order");
            assert!(error.to_string().contains("already has a review"));
        }

        let shipped = orders
            .iter()
            .find(|order| order.status == OrderStatus::Shipped);
        if let Some(order) = shipped {
            assert!(runtime.cancel_order(&order.id, &reason).is_err());
            assert!(runtime.submit_review(&order.id, &review).is_err());
        }
        Ok(())
    }

    #[test]
    fn api_runtime_loads_orders_off_thread() -> Result<()> {
        let server = Server::http("127.0.0.1:0")
            .map_err(|error| anyhow::anyhow!("start mock server: {error}"))?;
        let addr = format!("http://{}/api", server.server_addr());
        let handle = thread::spawn(move || {
            let request = server.recv().expect("request expected");
            assert_eq!(request.url(), "/api/orders?page=2&page_size=15");
            request
                .respond(
                    Response::from_string(r#"{"orders":[],"page":2,"total_pages":2}"#)
                        .with_header(
                            Header::from_bytes("Content-Type", "application/json")
                                .expect("valid content type header"),
                        ),
                )
                .expect("response should succeed");
        });

        let client = partsbid_api::Client::new(&addr, Duration::from_secs(1))?;
        let mut runtime = ApiRuntime::new(client, 15);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_load_orders(9, 2, tx)?;

        match rx.recv_timeout(Duration::from_secs(5))? {
            InternalEvent::OrdersLoaded {
                token,
                page,
                result,
            } => {
                assert_eq!((token, page), (9, 2));
                let loaded = result.map_err(anyhow::Error::msg)?;
                assert!(loaded.orders.is_empty());
                assert!(loaded.has_prev());
            }
            other => panic!("unexpected event {other:?}"),
        }

        handle.join().expect("server thread should join");
        Ok(())
    }

    #[test]
    fn api_runtime_reports_unreachable_backend() -> Result<()> {
        let client = partsbid_api::Client::new("http://127.0.0.1:1/api", Duration::from_millis(50))?;
        let mut runtime = ApiRuntime::new(client, 20);
        let (tx, rx) = mpsc::channel();
        runtime.spawn_load_orders(1, 1, tx)?;
        match rx.recv_timeout(Duration::from_secs(5))? {
            InternalEvent::OrdersLoaded { result, .. } => {
                let error = result.expect_err("unreachable backend should fail");
                assert!(error.contains("cannot reach"));
            }
            other => panic!("unexpected event {other:?}"),
        }
        Ok(())
    }
}
