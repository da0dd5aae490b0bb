// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use partsbid_app::{
    AppCommand, AppEvent, AppState, CancellationInput, ConfirmedOrder, MAX_REVIEW_RATING,
    MIN_REVIEW_RATING, MountedView, NavigateOptions, Navigator, Order, OrderId, OrderPage,
    Overlay, PART_CATEGORIES, PartSelection, QuoteId, QuoteNotificationBatch, QuoteOffer,
    QuoteRequestInput, ReviewInput, Supplier, SupplierId, VehicleInfo, ViewId, ViewRequest,
    parse_manual_vehicle,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::debug;

const HALF_PAGE_ROWS: u16 = 10;
const LIST_WINDOW: usize = 12;
const BREADCRUMB_DEPTH: usize = 5;
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const NAV_HINTS: &str = "H home | P parts | S suppliers | O orders | N quotes | g go to | a account | t track | ? help | ctrl+q quit";

pub trait AppRuntime {
    fn lookup_vehicle(&mut self, registration: &str) -> Result<VehicleInfo>;
    fn load_catalog(&mut self, category: &str) -> Result<Vec<PartSelection>>;
    fn load_suppliers(&mut self) -> Result<Vec<Supplier>>;
    fn request_quotes(&mut self, request: &QuoteRequestInput) -> Result<QuoteNotificationBatch>;
    fn accept_quote(&mut self, quote_id: &QuoteId) -> Result<ConfirmedOrder>;
    fn load_orders(&mut self, page: u32) -> Result<OrderPage>;
    fn cancel_order(&mut self, order_id: &OrderId, input: &CancellationInput) -> Result<()>;
    fn submit_review(&mut self, order_id: &OrderId, review: &ReviewInput) -> Result<()>;
    /// Reports one order page on `tx`, tagged with the mount token that was
    /// current when the load started.
    fn spawn_load_orders(&mut self, token: u64, page: u32, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self
            .load_orders(page)
            .map_err(|error| format!("{error:#}"));
        tx.send(InternalEvent::OrdersLoaded {
            token,
            page,
            result,
        })
        .map_err(|_| anyhow!("order event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus {
        token: u64,
    },
    OrdersLoaded {
        token: u64,
        page: u32,
        result: Result<OrderPage, String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    Registration,
    ManualVehicle,
    GoTo,
    ChatMessage,
    CancelReason,
    Review,
}

impl PromptKind {
    const fn title(self) -> &'static str {
        match self {
            Self::Registration => "registration plate",
            Self::ManualVehicle => "make, model, year[, registration]",
            Self::GoTo => "go to view",
            Self::ChatMessage => "message",
            Self::CancelReason => "cancellation reason",
            Self::Review => "review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PromptState {
    kind: PromptKind,
    buffer: String,
    order_id: Option<OrderId>,
    rating: u8,
}

impl PromptState {
    fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
            order_id: None,
            rating: MAX_REVIEW_RATING,
        }
    }

    fn for_order(kind: PromptKind, order_id: OrderId) -> Self {
        Self {
            order_id: Some(order_id),
            ..Self::new(kind)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct OrdersUiState {
    page: u32,
    loaded: Option<OrderPage>,
    pending: Option<(u64, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ChatUiState {
    quote_id: Option<QuoteId>,
    messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    cursor: usize,
    scroll: u16,
    prompt: Option<PromptState>,
    help_visible: bool,
    status_token: u64,
    catalog: Vec<PartSelection>,
    suppliers: Vec<Supplier>,
    active_quotes: Option<QuoteNotificationBatch>,
    chat: ChatUiState,
    orders: OrdersUiState,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    let initial = state.current_view();
    mount_view(state, runtime, &mut view_data, &internal_tx, initial);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::OrdersLoaded {
                token,
                page,
                result,
            } => handle_orders_loaded(state, view_data, tx, token, page, result),
        }
    }
}

fn handle_orders_loaded(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    token: u64,
    page: u32,
    result: Result<OrderPage, String>,
) {
    if token != state.mount_token || view_data.orders.pending != Some((token, page)) {
        debug!(
            token,
            page,
            current = state.mount_token,
            "dropping stale order page"
        );
        return;
    }
    view_data.orders.pending = None;
    match result {
        Ok(loaded) => {
            view_data.orders.page = loaded.page;
            view_data.cursor = view_data
                .cursor
                .min(loaded.orders.len().saturating_sub(1));
            view_data.orders.loaded = Some(loaded);
        }
        Err(error) => {
            emit_status(
                state,
                view_data,
                tx,
                format!("order history failed: {error}"),
            );
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn apply_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    events: Vec<AppEvent>,
) {
    for event in events {
        match event {
            AppEvent::ViewChanged(view) => mount_view(state, runtime, view_data, tx, view),
            AppEvent::ScrollReset => {
                view_data.cursor = 0;
                view_data.scroll = 0;
            }
            AppEvent::SessionChanged(true) => {
                emit_status(state, view_data, tx, "signed in");
                if state.current_view() == ViewId::History {
                    load_orders(state, runtime, view_data, tx, 1);
                }
            }
            AppEvent::SessionChanged(false) => {
                view_data.orders = OrdersUiState::default();
                emit_status(state, view_data, tx, "signed out");
            }
            _ => {}
        }
    }
}

fn dispatch<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    command: AppCommand,
) {
    let events = state.dispatch(command);
    apply_events(state, runtime, view_data, tx, events);
}

fn navigate<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    target: impl Into<ViewRequest>,
    options: NavigateOptions,
) {
    let events = state.navigate(target, options);
    apply_events(state, runtime, view_data, tx, events);
}

fn mount_view<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    view: ViewId,
) {
    view_data.prompt = None;
    match view {
        ViewId::Products => {
            view_data.catalog.clear();
            if let Some(category) = state.payload.selected_category.clone() {
                match runtime.load_catalog(&category) {
                    Ok(parts) => view_data.catalog = parts,
                    Err(error) => emit_status(
                        state,
                        view_data,
                        tx,
                        format!("catalog load failed: {error:#}"),
                    ),
                }
            }
        }
        ViewId::SupplierList | ViewId::SuppliersDirectory | ViewId::SupplierProfile => {
            ensure_suppliers(state, runtime, view_data, tx);
        }
        ViewId::History => {
            view_data.orders = OrdersUiState::default();
            if state.is_authenticated {
                load_orders(state, runtime, view_data, tx, 1);
            }
        }
        ViewId::Chat => {
            if view_data.chat.quote_id != state.payload.selected_quote_id {
                view_data.chat = ChatUiState {
                    quote_id: state.payload.selected_quote_id.clone(),
                    messages: Vec::new(),
                };
            }
        }
        _ => {}
    }
}

fn ensure_suppliers<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    if !view_data.suppliers.is_empty() {
        return;
    }
    match runtime.load_suppliers() {
        Ok(suppliers) => view_data.suppliers = suppliers,
        Err(error) => emit_status(
            state,
            view_data,
            tx,
            format!("supplier load failed: {error:#}"),
        ),
    }
}

fn load_orders<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    page: u32,
) {
    let token = state.mount_token;
    view_data.orders.page = page;
    view_data.orders.pending = Some((token, page));
    if let Err(error) = runtime.spawn_load_orders(token, page, tx.clone()) {
        view_data.orders.pending = None;
        emit_status(
            state,
            view_data,
            tx,
            format!("order history failed: {error:#}"),
        );
    }
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.prompt.is_some() {
        handle_prompt_key(state, runtime, view_data, internal_tx, key);
        return false;
    }

    if let Some(overlay) = state.overlays.topmost() {
        handle_overlay_key(state, runtime, view_data, internal_tx, overlay, key);
        return false;
    }

    if !handle_global_key(state, runtime, view_data, internal_tx, key) {
        handle_view_key(state, runtime, view_data, internal_tx, key);
    }
    false
}

fn handle_global_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('?'), _) => view_data.help_visible = true,
        (KeyCode::Esc | KeyCode::Backspace, _) => {
            let events = state.back();
            apply_events(state, runtime, view_data, tx, events);
        }
        (KeyCode::Char('d'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.scroll = view_data.scroll.saturating_add(HALF_PAGE_ROWS);
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            view_data.scroll = view_data.scroll.saturating_sub(HALF_PAGE_ROWS);
        }
        (KeyCode::PageDown, _) => {
            view_data.scroll = view_data.scroll.saturating_add(HALF_PAGE_ROWS);
        }
        (KeyCode::PageUp, _) => {
            view_data.scroll = view_data.scroll.saturating_sub(HALF_PAGE_ROWS);
        }
        (KeyCode::Char('j') | KeyCode::Down, _) => move_cursor(state, view_data, 1),
        (KeyCode::Char('k') | KeyCode::Up, _) => move_cursor(state, view_data, -1),
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            view_data.prompt = Some(PromptState::new(PromptKind::GoTo));
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            dispatch(state, runtime, view_data, tx, AppCommand::RequestAccountMenu);
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            dispatch(state, runtime, view_data, tx, AppCommand::RequestTrackOrder);
        }
        (KeyCode::Char(ch), _) => {
            let Some(view) = shortcut_view(ch) else {
                return false;
            };
            navigate(state, runtime, view_data, tx, view, NavigateOptions::default());
        }
        _ => return false,
    }
    true
}

fn shortcut_view(ch: char) -> Option<ViewId> {
    let view = match ch {
        'H' => ViewId::Home,
        'P' => ViewId::PartsSelection,
        'S' => ViewId::SuppliersDirectory,
        'O' => ViewId::History,
        'N' => ViewId::Notifications,
        'W' => ViewId::HowItWorks,
        'J' => ViewId::SupplierOnboarding,
        'D' => ViewId::SupplierDashboard,
        'M' => ViewId::AdminDashboard,
        'U' => ViewId::Auth,
        'A' => ViewId::About,
        'C' => ViewId::Contact,
        _ => return None,
    };
    Some(view)
}

fn move_cursor(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let len = list_len(&state.mounted_view(), view_data);
    if len == 0 {
        view_data.cursor = 0;
        return;
    }
    let max = len.saturating_sub(1);
    view_data.cursor = view_data.cursor.saturating_add_signed(delta).min(max);
    view_data.scroll =
        u16::try_from(view_data.cursor.saturating_sub(LIST_WINDOW)).unwrap_or(u16::MAX);
}

fn list_len(mounted: &MountedView, view_data: &ViewData) -> usize {
    match mounted {
        MountedView::PartsSelection { .. } | MountedView::Products { category: None } => {
            PART_CATEGORIES.len()
        }
        MountedView::Products { category: Some(_) } => view_data.catalog.len(),
        MountedView::SupplierList { part, category } => {
            suppliers_for(view_data, part.as_ref(), category.as_deref()).len()
        }
        MountedView::SuppliersDirectory => view_data.suppliers.len(),
        MountedView::Quotes { .. } => view_data
            .active_quotes
            .as_ref()
            .map_or(0, |batch| batch.quotes.len()),
        MountedView::Notifications { batch } => {
            batch.as_ref().map_or(0, |batch| batch.quotes.len())
        }
        MountedView::History {
            authenticated: true,
        } => view_data
            .orders
            .loaded
            .as_ref()
            .map_or(0, |page| page.orders.len()),
        _ => 0,
    }
}

fn suppliers_for<'a>(
    view_data: &'a ViewData,
    part: Option<&PartSelection>,
    category: Option<&str>,
) -> Vec<&'a Supplier> {
    let wanted = category.or(part.map(|part| part.category.as_str()));
    view_data
        .suppliers
        .iter()
        .filter(|supplier| wanted.is_none_or(|category| supplier.serves(category)))
        .collect()
}

fn selected_quote(view_data: &ViewData) -> Option<&QuoteOffer> {
    view_data
        .active_quotes
        .as_ref()
        .and_then(|batch| batch.quotes.get(view_data.cursor))
}

fn selected_order(view_data: &ViewData) -> Option<&Order> {
    view_data
        .orders
        .loaded
        .as_ref()
        .and_then(|page| page.orders.get(view_data.cursor))
}

fn handle_view_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (state.mounted_view(), key.code) {
        (
            MountedView::Home { .. } | MountedView::VehicleConfirmation { .. },
            KeyCode::Char('r'),
        )
        | (
            MountedView::Home { vehicle: None } | MountedView::VehicleConfirmation { vehicle: None },
            KeyCode::Enter,
        ) => {
            view_data.prompt = Some(PromptState::new(PromptKind::Registration));
        }
        (
            MountedView::Home { .. } | MountedView::VehicleConfirmation { .. },
            KeyCode::Char('m'),
        ) => {
            view_data.prompt = Some(PromptState::new(PromptKind::ManualVehicle));
        }
        (
            MountedView::Home { vehicle: Some(_) }
            | MountedView::VehicleConfirmation { vehicle: Some(_) },
            KeyCode::Enter,
        ) => {
            navigate(
                state,
                runtime,
                view_data,
                tx,
                ViewId::PartsSelection,
                NavigateOptions::default(),
            );
        }
        (
            MountedView::PartsSelection { .. } | MountedView::Products { category: None },
            KeyCode::Enter,
        ) => {
            if let Some(category) = PART_CATEGORIES.get(view_data.cursor) {
                navigate(
                    state,
                    runtime,
                    view_data,
                    tx,
                    ViewId::Products,
                    NavigateOptions::category(*category),
                );
            }
        }
        (
            MountedView::Products {
                category: Some(category),
            },
            KeyCode::Enter,
        ) => {
            let Some(part) = view_data.catalog.get(view_data.cursor).cloned() else {
                return;
            };
            let options = NavigateOptions {
                part: Some(part),
                category: Some(category),
                ..NavigateOptions::default()
            };
            navigate(state, runtime, view_data, tx, ViewId::SupplierList, options);
        }
        (MountedView::SupplierList { part, category }, KeyCode::Enter) => {
            let supplier_id = suppliers_for(view_data, part.as_ref(), category.as_deref())
                .get(view_data.cursor)
                .map(|supplier| supplier.id.clone());
            open_supplier_profile(state, runtime, view_data, tx, supplier_id);
        }
        (MountedView::SupplierList { part: Some(part), .. }, KeyCode::Char('q')) => {
            request_quotes(state, runtime, view_data, tx, part);
        }
        (MountedView::SupplierList { part: None, .. }, KeyCode::Char('q')) => {
            emit_status(
                state,
                view_data,
                tx,
                "pick a part before requesting quotes -- press P",
            );
        }
        (MountedView::SuppliersDirectory, KeyCode::Enter) => {
            let supplier_id = view_data
                .suppliers
                .get(view_data.cursor)
                .map(|supplier| supplier.id.clone());
            open_supplier_profile(state, runtime, view_data, tx, supplier_id);
        }
        (MountedView::Notifications { batch: Some(_) }, KeyCode::Enter) => {
            view_quotes_from_notification(state, runtime, view_data, tx);
        }
        (MountedView::Quotes { .. }, KeyCode::Char('c')) => {
            let Some(offer) = selected_quote(view_data).cloned() else {
                return;
            };
            let events = state.start_chat(offer.id, offer.supplier_id);
            apply_events(state, runtime, view_data, tx, events);
        }
        (MountedView::Quotes { .. }, KeyCode::Enter | KeyCode::Char('b')) => {
            checkout(state, runtime, view_data, tx);
        }
        (
            MountedView::Chat {
                quote_id: Some(_), ..
            },
            KeyCode::Char('i') | KeyCode::Enter,
        ) => {
            view_data.prompt = Some(PromptState::new(PromptKind::ChatMessage));
        }
        (
            MountedView::History {
                authenticated: false,
            }
            | MountedView::Auth {
                authenticated: false,
            },
            KeyCode::Enter | KeyCode::Char('l'),
        ) => {
            let events = state.open_overlay(Overlay::SignIn);
            apply_events(state, runtime, view_data, tx, events);
        }
        (
            MountedView::Auth {
                authenticated: false,
            },
            KeyCode::Char('u'),
        ) => {
            let events = state.open_overlay(Overlay::SignUp);
            apply_events(state, runtime, view_data, tx, events);
        }
        (
            MountedView::Auth {
                authenticated: true,
            },
            KeyCode::Char('o'),
        ) => {
            let events = state.sign_out();
            apply_events(state, runtime, view_data, tx, events);
        }
        (
            MountedView::History {
                authenticated: true,
            },
            code,
        ) => handle_history_key(state, runtime, view_data, tx, code),
        _ => {}
    }
}

fn handle_history_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    code: KeyCode,
) {
    let paging = view_data
        .orders
        .loaded
        .as_ref()
        .map(|page| (page.page, page.has_prev(), page.has_next()));
    match code {
        KeyCode::Char(']') => {
            if let Some((page, _, true)) = paging {
                load_orders(state, runtime, view_data, tx, page + 1);
            }
        }
        KeyCode::Char('[') => {
            if let Some((page, true, _)) = paging {
                load_orders(state, runtime, view_data, tx, page - 1);
            }
        }
        KeyCode::Char('r') => {
            let page = view_data.orders.page.max(1);
            load_orders(state, runtime, view_data, tx, page);
        }
        KeyCode::Char('x') => {
            let Some(order) = selected_order(view_data) else {
                return;
            };
            if order.status.can_cancel() {
                view_data.prompt = Some(PromptState::for_order(
                    PromptKind::CancelReason,
                    order.id.clone(),
                ));
            } else {
                let message = format!(
                    "order {} is {}; only pending or confirmed orders can be cancelled",
                    order.order_number,
                    order.status.as_str()
                );
                emit_status(state, view_data, tx, message);
            }
        }
        KeyCode::Char('v') => {
            let Some(order) = selected_order(view_data) else {
                return;
            };
            if order.status.can_review() {
                view_data.prompt = Some(PromptState::for_order(PromptKind::Review, order.id.clone()));
            } else {
                let message = format!(
                    "order {} is {}; review it once it is delivered",
                    order.order_number,
                    order.status.as_str()
                );
                emit_status(state, view_data, tx, message);
            }
        }
        _ => {}
    }
}

fn open_supplier_profile<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    supplier_id: Option<SupplierId>,
) {
    if let Some(supplier_id) = supplier_id {
        navigate(
            state,
            runtime,
            view_data,
            tx,
            ViewId::SupplierProfile,
            NavigateOptions::supplier(supplier_id),
        );
    }
}

fn request_quotes<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    part: PartSelection,
) {
    let Some(vehicle) = state.payload.vehicle.clone() else {
        emit_status(
            state,
            view_data,
            tx,
            "identify your vehicle first -- press H then r",
        );
        return;
    };
    match runtime.request_quotes(&QuoteRequestInput { vehicle, part }) {
        Ok(batch) => dispatch(
            state,
            runtime,
            view_data,
            tx,
            AppCommand::ReceiveQuoteNotifications(batch),
        ),
        Err(error) => emit_status(
            state,
            view_data,
            tx,
            format!("quote request failed: {error:#}"),
        ),
    }
}

fn view_quotes_from_notification<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    if state.payload.quote_notifications.is_some() {
        view_data.active_quotes = state.payload.quote_notifications.clone();
    }
    dispatch(
        state,
        runtime,
        view_data,
        tx,
        AppCommand::ViewQuotesFromNotification,
    );
}

fn checkout<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    let Some(offer) = selected_quote(view_data).cloned() else {
        emit_status(state, view_data, tx, "no quote selected");
        return;
    };
    match runtime.accept_quote(&offer.id) {
        Ok(order) => dispatch(
            state,
            runtime,
            view_data,
            tx,
            AppCommand::CheckoutConfirmed(order),
        ),
        Err(error) => emit_status(
            state,
            view_data,
            tx,
            format!("checkout failed: {error:#}"),
        ),
    }
}

fn identify_vehicle<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    vehicle: VehicleInfo,
) {
    if state.current_view() == ViewId::VehicleConfirmation {
        dispatch(
            state,
            runtime,
            view_data,
            tx,
            AppCommand::IdentifyVehicle(vehicle),
        );
    } else {
        navigate(
            state,
            runtime,
            view_data,
            tx,
            ViewRequest::RequestFlow,
            NavigateOptions::vehicle(vehicle),
        );
    }
}

fn handle_overlay_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    overlay: Overlay,
    key: KeyEvent,
) {
    let events = match (overlay, key.code) {
        (Overlay::Notification, KeyCode::Enter) => {
            view_quotes_from_notification(state, runtime, view_data, tx);
            return;
        }
        (Overlay::Notification, KeyCode::Esc) => {
            state.dispatch(AppCommand::DismissNotifications)
        }
        (Overlay::SignUp | Overlay::SignIn, KeyCode::Enter) => {
            let mut events = state.close_overlay(overlay);
            events.extend(state.sign_in_success());
            events
        }
        (Overlay::SignUp, KeyCode::Char('l')) => {
            let mut events = state.close_overlay(Overlay::SignUp);
            events.extend(state.open_overlay(Overlay::SignIn));
            events
        }
        (Overlay::Profile, KeyCode::Enter) => {
            let mut events = state.close_overlay(Overlay::Profile);
            events.extend(state.navigate(ViewId::History, NavigateOptions::default()));
            events
        }
        (Overlay::Profile, KeyCode::Char('o')) => {
            let mut events = state.close_overlay(Overlay::Profile);
            events.extend(state.sign_out());
            events
        }
        (Overlay::OrderConfirmation, KeyCode::Enter | KeyCode::Char('t')) => {
            state.dispatch(AppCommand::TrackConfirmedOrder)
        }
        (Overlay::TrackOrder, KeyCode::Enter) | (_, KeyCode::Esc) => state.close_overlay(overlay),
        _ => return,
    };
    apply_events(state, runtime, view_data, tx, events);
}

fn handle_prompt_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(prompt) = view_data.prompt.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => view_data.prompt = None,
        KeyCode::Backspace => {
            prompt.buffer.pop();
        }
        KeyCode::Up if prompt.kind == PromptKind::Review => {
            prompt.rating = prompt.rating.saturating_add(1).min(MAX_REVIEW_RATING);
        }
        KeyCode::Down if prompt.kind == PromptKind::Review => {
            prompt.rating = prompt.rating.saturating_sub(1).max(MIN_REVIEW_RATING);
        }
        KeyCode::Enter => {
            if let Some(prompt) = view_data.prompt.take() {
                submit_prompt(state, runtime, view_data, tx, prompt);
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            prompt.buffer.push(ch);
        }
        _ => {}
    }
}

fn submit_prompt<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    prompt: PromptState,
) {
    match prompt.kind {
        PromptKind::Registration => match runtime.lookup_vehicle(&prompt.buffer) {
            Ok(vehicle) => identify_vehicle(state, runtime, view_data, tx, vehicle),
            Err(error) => emit_status(
                state,
                view_data,
                tx,
                format!("vehicle lookup failed: {error:#}"),
            ),
        },
        PromptKind::ManualVehicle => match parse_manual_vehicle(&prompt.buffer) {
            Ok(vehicle) => identify_vehicle(state, runtime, view_data, tx, vehicle),
            Err(error) => {
                emit_status(state, view_data, tx, format!("{error:#}"));
                view_data.prompt = Some(prompt);
            }
        },
        PromptKind::GoTo => {
            let target = prompt.buffer.trim();
            if !target.is_empty() {
                navigate(state, runtime, view_data, tx, target, NavigateOptions::default());
            }
        }
        PromptKind::ChatMessage => {
            let message = prompt.buffer.trim();
            if !message.is_empty() {
                view_data.chat.messages.push(format!("you: {message}"));
            }
        }
        PromptKind::CancelReason => {
            let Some(order_id) = prompt.order_id.clone() else {
                return;
            };
            let input = CancellationInput {
                reason: prompt.buffer.trim().to_owned(),
            };
            if let Err(error) = input.validate() {
                emit_status(state, view_data, tx, format!("{error:#}"));
                view_data.prompt = Some(prompt);
                return;
            }
            match runtime.cancel_order(&order_id, &input) {
                Ok(()) => {
                    emit_status(state, view_data, tx, format!("order {order_id} cancelled"));
                    let page = view_data.orders.page.max(1);
                    load_orders(state, runtime, view_data, tx, page);
                }
                Err(error) => emit_status(
                    state,
                    view_data,
                    tx,
                    format!("cancel failed: {error:#}"),
                ),
            }
        }
        PromptKind::Review => {
            let Some(order_id) = prompt.order_id.clone() else {
                return;
            };
            let review = ReviewInput {
                rating: prompt.rating,
                comment: prompt.buffer.trim().to_owned(),
            };
            if let Err(error) = review.validate() {
                emit_status(state, view_data, tx, format!("{error:#}"));
                view_data.prompt = Some(prompt);
                return;
            }
            match runtime.submit_review(&order_id, &review) {
                Ok(()) => emit_status(
                    state,
                    view_data,
                    tx,
                    format!("review submitted for order {order_id}"),
                ),
                Err(error) => emit_status(
                    state,
                    view_data,
                    tx,
                    format!("review failed: {error:#}"),
                ),
            }
        }
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(render_breadcrumb_text(state)).block(
        Block::default()
            .title(header_title(state))
            .borders(Borders::ALL),
    );
    frame.render_widget(header, layout[0]);

    let mounted = state.mounted_view();
    let body = Paragraph::new(render_view_text(&mounted, view_data))
        .wrap(Wrap { trim: false })
        .scroll((view_data.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(mounted.view_id().label()),
        );
    frame.render_widget(body, layout[1]);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    for overlay in state.overlays.open_overlays() {
        let area = centered_rect(60, 45, frame.area());
        frame.render_widget(Clear, area);
        let popup = Paragraph::new(render_overlay_text(overlay, state))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(overlay.title())
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(popup, area);
    }

    if let Some(prompt) = &view_data.prompt {
        let area = centered_rect(60, 25, frame.area());
        frame.render_widget(Clear, area);
        let popup = Paragraph::new(render_prompt_text(prompt))
            .block(Block::default().title(prompt.kind.title()).borders(Borders::ALL));
        frame.render_widget(popup, area);
    }

    if view_data.help_visible {
        let area = centered_rect(80, 72, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn header_title(state: &AppState) -> String {
    let session = if state.is_authenticated {
        "signed in"
    } else {
        "guest"
    };
    match &state.payload.vehicle {
        Some(vehicle) => format!("partsbid | {session} | {}", vehicle.display_name()),
        None => format!("partsbid | {session}"),
    }
}

fn render_breadcrumb_text(state: &AppState) -> String {
    let entries = state.history.entries();
    let skip = entries.len().saturating_sub(BREADCRUMB_DEPTH);
    let trail = entries[skip..]
        .iter()
        .map(|view| view.label())
        .collect::<Vec<_>>()
        .join(" > ");
    if skip > 0 {
        format!("... > {trail}")
    } else {
        trail
    }
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    if let Some(prompt) = &view_data.prompt {
        return match prompt.kind {
            PromptKind::Review => "up/down rating | enter submit | esc cancel".to_owned(),
            _ => "enter submit | esc cancel".to_owned(),
        };
    }
    if state.overlays.any_open() {
        return String::new();
    }
    match view_hints(state.current_view()) {
        "" => NAV_HINTS.to_owned(),
        hints => format!("{hints} | {NAV_HINTS}"),
    }
}

fn view_hints(view: ViewId) -> &'static str {
    match view {
        ViewId::Home | ViewId::VehicleConfirmation => "r plate | m manual | enter continue",
        ViewId::PartsSelection | ViewId::Products => "j/k move | enter pick",
        ViewId::SupplierList => "j/k move | enter profile | q request quotes",
        ViewId::SuppliersDirectory => "j/k move | enter profile",
        ViewId::Quotes => "j/k move | enter/b checkout | c chat",
        ViewId::Chat => "i write",
        ViewId::Notifications => "enter view quotes",
        ViewId::History => "[/] page | x cancel | v review | r reload",
        ViewId::Auth => "l sign in | u sign up | o sign out",
        _ => "",
    }
}

fn cursor_line(selected: bool, text: String) -> String {
    let marker = if selected { ">" } else { " " };
    format!("{marker} {text}")
}

fn vehicle_label(vehicle: Option<&VehicleInfo>) -> String {
    match vehicle {
        Some(vehicle) => match &vehicle.registration {
            Some(plate) => format!("{} ({plate})", vehicle.display_name()),
            None => vehicle.display_name(),
        },
        None => "no vehicle yet".to_owned(),
    }
}

fn category_lines(cursor: usize) -> Vec<String> {
    PART_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| cursor_line(index == cursor, (*category).to_owned()))
        .collect()
}

fn quote_lines(quotes: &[QuoteOffer], cursor: usize, marked: Option<&QuoteId>) -> Vec<String> {
    quotes
        .iter()
        .enumerate()
        .map(|(index, offer)| {
            let chat = if marked == Some(&offer.id) {
                "  [chat]"
            } else {
                ""
            };
            cursor_line(
                index == cursor,
                format!(
                    "{:<24} {:>10}  {}{chat}",
                    offer.supplier_name,
                    format_price(offer.price_cents),
                    offer.eta
                ),
            )
        })
        .collect()
}

fn render_view_text(mounted: &MountedView, view_data: &ViewData) -> String {
    let lines: Vec<String> = match mounted {
        MountedView::Home { vehicle } => vec![
            "find parts for your vehicle and let suppliers bid for the order".to_owned(),
            String::new(),
            format!("vehicle: {}", vehicle_label(vehicle.as_ref())),
            String::new(),
            "r look up a plate | m enter the vehicle by hand | enter continue".to_owned(),
        ],
        MountedView::VehicleConfirmation {
            vehicle: Some(vehicle),
        } => vec![
            "is this your vehicle?".to_owned(),
            String::new(),
            format!("  make:         {}", vehicle.make),
            format!("  model:        {}", vehicle.model),
            format!("  year:         {}", vehicle.year),
            format!(
                "  registration: {}",
                vehicle.registration.as_deref().unwrap_or("-")
            ),
            String::new(),
            "enter confirm and pick parts | r look up again | m enter by hand".to_owned(),
        ],
        MountedView::VehicleConfirmation { vehicle: None } => vec![
            "no vehicle identified yet".to_owned(),
            String::new(),
            "r look up a plate | m enter the vehicle by hand".to_owned(),
        ],
        MountedView::PartsSelection { vehicle } => {
            let mut lines = vec![
                format!("parts for {}", vehicle_label(vehicle.as_ref())),
                String::new(),
            ];
            lines.extend(category_lines(view_data.cursor));
            lines
        }
        MountedView::Products { category: None } => {
            let mut lines = vec!["pick a category".to_owned(), String::new()];
            lines.extend(category_lines(view_data.cursor));
            lines
        }
        MountedView::Products {
            category: Some(category),
        } => {
            let mut lines = vec![category.clone(), String::new()];
            if view_data.catalog.is_empty() {
                lines.push(format!("no parts listed in {category}"));
            }
            lines.extend(view_data.catalog.iter().enumerate().map(|(index, part)| {
                cursor_line(
                    index == view_data.cursor,
                    format!("{:<28} {:>10}", part.name, format_price(part.price_cents)),
                )
            }));
            lines
        }
        MountedView::SupplierList { part, category } => {
            let mut lines = vec![
                match part {
                    Some(part) => format!(
                        "suppliers for {} (guide price {})",
                        part.name,
                        format_price(part.price_cents)
                    ),
                    None => "no part selected".to_owned(),
                },
                String::new(),
            ];
            let suppliers = suppliers_for(view_data, part.as_ref(), category.as_deref());
            if suppliers.is_empty() {
                lines.push("no suppliers serve this category yet".to_owned());
            }
            lines.extend(suppliers.iter().enumerate().map(|(index, supplier)| {
                cursor_line(index == view_data.cursor, supplier_line(supplier))
            }));
            lines.push(String::new());
            lines.push("q request quotes from these suppliers".to_owned());
            lines
        }
        MountedView::SuppliersDirectory => {
            let mut lines = vec!["registered suppliers".to_owned(), String::new()];
            lines.extend(
                view_data
                    .suppliers
                    .iter()
                    .enumerate()
                    .map(|(index, supplier)| {
                        cursor_line(index == view_data.cursor, supplier_line(supplier))
                    }),
            );
            lines
        }
        MountedView::SupplierProfile { supplier_id } => {
            supplier_profile_lines(view_data, supplier_id.as_ref())
        }
        MountedView::Quotes {
            vehicle,
            selected_quote: chatting,
        } => match &view_data.active_quotes {
            Some(batch) => {
                let mut lines = vec![
                    format!(
                        "quotes for {} on {}",
                        batch.product_name,
                        vehicle_label(vehicle.as_ref())
                    ),
                    String::new(),
                ];
                lines.extend(quote_lines(
                    &batch.quotes,
                    view_data.cursor,
                    chatting.as_ref(),
                ));
                lines
            }
            None => vec!["no quotes yet; request quotes from a supplier list".to_owned()],
        },
        MountedView::Chat {
            quote_id,
            supplier_id,
        } => {
            let mut lines = vec![
                match (quote_id, supplier_id) {
                    (Some(quote), Some(supplier)) => {
                        format!("chat about quote {quote} with supplier {supplier}")
                    }
                    _ => "no quote selected for chat".to_owned(),
                },
                String::new(),
            ];
            if view_data.chat.messages.is_empty() {
                lines.push("no messages yet; press i to write".to_owned());
            }
            lines.extend(view_data.chat.messages.iter().cloned());
            lines
        }
        MountedView::Notifications { batch: Some(batch) } => {
            let mut lines = vec![
                format!(
                    "{} quotes received for {}",
                    batch.quotes.len(),
                    batch.product_name
                ),
                String::new(),
            ];
            lines.extend(quote_lines(&batch.quotes, view_data.cursor, None));
            lines
        }
        MountedView::Notifications { batch: None } => {
            vec!["no new quote notifications".to_owned()]
        }
        MountedView::History {
            authenticated: false,
        } => vec![
            "sign in to see your orders".to_owned(),
            String::new(),
            "enter sign in".to_owned(),
        ],
        MountedView::History {
            authenticated: true,
        } => order_history_lines(view_data),
        MountedView::Auth {
            authenticated: false,
        } => vec![
            "you are browsing as a guest".to_owned(),
            String::new(),
            "l sign in | u create an account".to_owned(),
        ],
        MountedView::Auth {
            authenticated: true,
        } => vec![
            "you are signed in".to_owned(),
            String::new(),
            "o sign out".to_owned(),
        ],
        MountedView::SupplierOnboarding => vec![
            "sell parts on partsbid".to_owned(),
            String::new(),
            "suppliers receive quote requests that match the categories they stock".to_owned(),
            "and bid with a price and delivery estimate.".to_owned(),
        ],
        MountedView::SupplierDashboard => vec![
            "supplier dashboard".to_owned(),
            String::new(),
            "incoming quote requests and accepted orders appear here.".to_owned(),
        ],
        MountedView::AdminDashboard => vec![
            "platform administration".to_owned(),
            String::new(),
            "supplier approvals and dispute reviews appear here.".to_owned(),
        ],
        MountedView::HowItWorks => vec![
            "1. identify your vehicle by plate or by hand".to_owned(),
            "2. pick the part you need".to_owned(),
            "3. suppliers who stock it send quotes".to_owned(),
            "4. compare, chat and check out the best offer".to_owned(),
            "5. track the order and review the supplier".to_owned(),
        ],
        MountedView::About => vec![
            "partsbid connects buyers with independent parts suppliers.".to_owned(),
        ],
        MountedView::Contact => vec![
            "questions about an order? press O to open your order history".to_owned(),
            "and use the supplier chat on the quote.".to_owned(),
        ],
        MountedView::NotFound { requested } => vec![
            format!("no view named {requested:?}"),
            String::new(),
            "press H to go home or esc to go back".to_owned(),
        ],
    };
    lines.join("\n")
}

fn supplier_line(supplier: &Supplier) -> String {
    format!(
        "{:<24} {:<12} {}",
        supplier.name,
        supplier.city,
        supplier.rating_label()
    )
}

fn supplier_profile_lines(view_data: &ViewData, supplier_id: Option<&SupplierId>) -> Vec<String> {
    let Some(supplier_id) = supplier_id else {
        return vec!["no supplier selected".to_owned()];
    };
    let Some(supplier) = view_data
        .suppliers
        .iter()
        .find(|supplier| &supplier.id == supplier_id)
    else {
        return vec![format!("supplier {supplier_id} not found")];
    };
    vec![
        supplier.name.clone(),
        String::new(),
        format!("  city:       {}", supplier.city),
        format!("  rating:     {} / 5", supplier.rating_label()),
        format!("  categories: {}", supplier.categories.join(", ")),
    ]
}

fn order_history_lines(view_data: &ViewData) -> Vec<String> {
    let Some(page) = &view_data.orders.loaded else {
        return vec!["loading orders...".to_owned()];
    };
    if page.orders.is_empty() {
        return vec!["no orders yet".to_owned()];
    }
    let mut lines = vec![
        format!("page {} of {}", page.page, page.total_pages),
        String::new(),
    ];
    lines.extend(page.orders.iter().enumerate().map(|(index, order)| {
        cursor_line(
            index == view_data.cursor,
            format!(
                "{:<10} {}  {:<10} {:<24} {:>10}  {}",
                order.order_number,
                format_order_date(order.placed_at),
                order.status.as_str(),
                order.part_name,
                format_price(order.price_cents),
                order.supplier_name
            ),
        )
    }));
    lines
}

fn render_overlay_text(overlay: Overlay, state: &AppState) -> String {
    match overlay {
        Overlay::SignUp => {
            "create an account to track orders and review suppliers\n\n\
enter create account | l sign in instead | esc close"
                .to_owned()
        }
        Overlay::SignIn => "welcome back\n\nenter sign in | esc close".to_owned(),
        Overlay::Profile => "signed in\n\nenter order history | o sign out | esc close".to_owned(),
        Overlay::Notification => match &state.payload.quote_notifications {
            Some(batch) => {
                let mut lines = vec![format!(
                    "{} suppliers quoted for {}",
                    batch.quotes.len(),
                    batch.product_name
                )];
                if let Some(cheapest) = batch.cheapest() {
                    lines.push(format!(
                        "best price {} from {} ({})",
                        format_price(cheapest.price_cents),
                        cheapest.supplier_name,
                        cheapest.eta
                    ));
                }
                lines.push(String::new());
                lines.push("enter view quotes | esc dismiss".to_owned());
                lines.join("\n")
            }
            None => "no new quotes\n\nesc dismiss".to_owned(),
        },
        Overlay::OrderConfirmation => match &state.confirmed_order {
            Some(order) => format!(
                "order {} placed\n\n{} from {}\n{} | arrives in {}\n\nenter track order | esc close",
                order.order_number,
                order.part_name,
                order.supplier_name,
                format_price(order.price_cents),
                order.eta
            ),
            None => "no order placed\n\nesc close".to_owned(),
        },
        Overlay::TrackOrder => match &state.confirmed_order {
            Some(order) => format!(
                "order {}\n\nstatus: confirmed by {}\nexpected delivery: {}\n\nesc close",
                order.order_number, order.supplier_name, order.eta
            ),
            None => "no recent order to track; press O for order history\n\nesc close".to_owned(),
        },
    }
}

fn render_prompt_text(prompt: &PromptState) -> String {
    match prompt.kind {
        PromptKind::Review => format!(
            "rating: {}{} ({}/{MAX_REVIEW_RATING})\n\n> {}_",
            "*".repeat(usize::from(prompt.rating)),
            ".".repeat(usize::from(MAX_REVIEW_RATING.saturating_sub(prompt.rating))),
            prompt.rating,
            prompt.buffer
        ),
        _ => format!("> {}_", prompt.buffer),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | esc/backspace back | ? help | g go to view by name\n\
views: H home | P parts | S suppliers | O orders | N quotes | W how it works\n\
views: J join as supplier | D supplier dashboard | M admin | U account | A about | C contact\n\
session: a account menu | t track order\n\
lists: j/k or up/down move | enter pick | ctrl+d/ctrl+u or pgdn/pgup scroll\n\
vehicle: r look up plate | m enter make, model, year\n\
supplier list: q request quotes | quotes: b checkout | c chat\n\
orders: [/] page | x cancel | v review | r reload\n\
prompts: enter submit | esc cancel | review: up/down rating"
}

fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}£{}.{:02}", cents / 100, cents % 100)
}

fn format_order_date(value: OffsetDateTime) -> String {
    value
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "-".to_owned())
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
