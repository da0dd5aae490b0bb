// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use partsbid_app::{
    CancellationInput, ConfirmedOrder, OrderId, OrderPage, PartSelection, QuoteId,
    QuoteNotificationBatch, QuoteRequestInput, ReviewInput, Supplier, VehicleInfo,
    validate_registration,
};
use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Blocking client for the marketplace backend. Ids are passed through
/// untouched apart from path-segment encoding.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let parsed = Url::parse(trimmed)
            .with_context(|| format!("api.base_url {trimmed:?} is not a valid URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "api.base_url {trimmed:?} uses scheme {:?}; use http or https",
                parsed.scheme()
            );
        }
        if parsed.cannot_be_a_base() {
            bail!("api.base_url {trimmed:?} cannot carry a path");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url: parsed,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn list_orders(&self, page: u32, page_size: u32) -> Result<OrderPage> {
        if page == 0 {
            bail!("order pages start at 1");
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            bail!("page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}");
        }
        let mut url = self.endpoint(&["orders"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("page_size", &page_size.to_string());
        self.send_json(self.http.get(url), "order list")
    }

    pub fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        let url = self.endpoint(&["suppliers"])?;
        let parsed: SuppliersResponse = self.send_json(self.http.get(url), "supplier list")?;
        Ok(parsed.suppliers)
    }

    pub fn list_parts(&self, category: &str) -> Result<Vec<PartSelection>> {
        let category = category.trim();
        if category.is_empty() {
            bail!("part category is required to list parts");
        }
        let mut url = self.endpoint(&["parts"])?;
        url.query_pairs_mut().append_pair("category", category);
        let parsed: PartsResponse = self.send_json(self.http.get(url), "part list")?;
        Ok(parsed.parts)
    }

    pub fn lookup_vehicle(&self, registration: &str) -> Result<VehicleInfo> {
        let plate = validate_registration(registration)?;
        let url = self.endpoint(&["vehicles", &plate])?;
        let mut vehicle: VehicleInfo = self.send_json(self.http.get(url), "vehicle lookup")?;
        if vehicle.registration.is_none() {
            vehicle.registration = Some(plate);
        }
        Ok(vehicle)
    }

    pub fn request_quotes(&self, request: &QuoteRequestInput) -> Result<QuoteNotificationBatch> {
        request.validate()?;
        let url = self.endpoint(&["quote-requests"])?;
        self.send_json(self.http.post(url).json(request), "quote request")
    }

    pub fn accept_quote(&self, quote_id: &QuoteId) -> Result<ConfirmedOrder> {
        if quote_id.is_blank() {
            bail!("quote id is required to accept a quote");
        }
        let url = self.endpoint(&["quotes", quote_id.as_str(), "accept"])?;
        self.send_json(self.http.post(url), "quote acceptance")
    }

    pub fn cancel_order(&self, order_id: &OrderId, input: &CancellationInput) -> Result<()> {
        if order_id.is_blank() {
            bail!("order id is required to cancel an order");
        }
        input.validate()?;
        let url = self.endpoint(&["orders", order_id.as_str(), "cancel"])?;
        self.send_empty(self.http.post(url).json(input), "order cancellation")
    }

    pub fn submit_review(&self, order_id: &OrderId, review: &ReviewInput) -> Result<()> {
        if order_id.is_blank() {
            bail!("order id is required to review an order");
        }
        review.validate()?;
        let url = self.endpoint(&["orders", order_id.as_str(), "review"])?;
        self.send_empty(self.http.post(url).json(review), "review")
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("api.base_url {} cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = self.execute(request, what)?;
        response.json().with_context(|| format!("decode {what} response"))
    }

    fn send_empty(&self, request: RequestBuilder, what: &str) -> Result<()> {
        self.execute(request, what).map(|_| ())
    }

    fn execute(&self, request: RequestBuilder, what: &str) -> Result<reqwest::blocking::Response> {
        debug!(request = what, base_url = self.base_url(), "api request");
        let response = request
            .send()
            .map_err(|error| connection_error(self.base_url(), error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(request = what, status = status.as_u16(), "api request failed");
            return Err(clean_error_response(status, &body));
        }
        Ok(response)
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check [api].base_url or run with --demo ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<NestedErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error.message);
    }

    if let Ok(parsed) = serde_json::from_str::<FlatErrorEnvelope>(body)
        && let Some(message) = parsed.message
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    if !body.is_empty() && body.len() < 100 && !body.contains('{') {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct SuppliersResponse {
    suppliers: Vec<Supplier>,
}

#[derive(Debug, Deserialize)]
struct PartsResponse {
    parts: Vec<PartSelection>,
}

#[derive(Debug, Deserialize)]
struct NestedErrorEnvelope {
    error: Option<NestedErrorBody>,
}

#[derive(Debug, Deserialize)]
struct NestedErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct FlatErrorEnvelope {
    message: Option<String>,
}
