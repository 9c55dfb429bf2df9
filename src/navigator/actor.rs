//! # Navigator Actor
//!
//! The single foreground event loop. It owns every piece of mutable navigation state (history,
//! the overlay controller, the fault boundary and the two rendered slots) and processes
//! commands strictly one at a time.
//!
//! ## Lookups
//!
//! Store lookups are the only suspension point. A command that needs one does **not** block
//! the loop: the lookup is spawned as a task tagged with a generation number, and its result
//! comes back on an internal channel. Nothing is committed (no history change, no new view)
//! until the result arrives.
//!
//! ```text
//!  command ──► plan ──► lookup needed? ──no──► commit ──► reply
//!                           │
//!                          yes
//!                           ▼
//!                 spawn task (generation N) ··· completion N ──► commit ──► reply
//! ```
//!
//! ## Ordering rules
//!
//! - **Last wins.** A new transition supersedes the pending one: its task is aborted and its
//!   caller receives [`NavigationError::Superseded`]. A completion whose generation is no
//!   longer pending is discarded and never commits.
//! - **Hard arrivals first.** While a hard arrival (load, reload) is pending, soft commands are
//!   queued and replayed in order once it commits.
//! - Snapshots are always answered immediately and report the pending address.

use crate::config::NavigatorConfig;
use crate::model::SessionReader;
use crate::navigation::{
    plan_lookup, AddressSpace, ArrivalMode, EntryKind, FallbackHandler, FaultBoundary,
    GestureOutcome, HistoryBackend, HistoryEntry, HistorySynchronizer, ListenerRegistry,
    ListingState, ListingView, Lookup, MainView, ModalView, NavigationError, NavigationIntent,
    OverlayController, OverlayView, PresentationState, Resolution, Route, RuntimeFault, Scope,
    Traversal, ViewResolver,
};
use crate::navigator::message::{Command, NavigatorRequest, Response};
use crate::navigator::snapshot::NavigatorSnapshot;
use record_store::{ListingFilter, Record, RecordSource, ResourceId, StoreError};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const OVERLAY_HEADING: &str = "Quick View";

/// Dependencies injected when the navigator starts.
pub struct NavigatorContext<T: Record> {
    pub source: Arc<dyn RecordSource<T>>,
    pub session: SessionReader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryOp {
    Load,
    Reload,
    PushPage,
    PushIntercepted,
    ReplaceIntercepted,
    Traverse(isize),
    Keep,
}

/// What a plan renders. Listing carries the filter to fetch, or `None` to reuse the mounted
/// records.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Render {
    Home,
    Listing(Option<ListingFilter>),
    Overlay(ResourceId),
    Full(ResourceId),
    Unknown,
}

/// A render and the history change that goes with it, committed together.
#[derive(Debug, Clone)]
struct Plan {
    address: String,
    arrival: ArrivalMode,
    render: Render,
    presentation: PresentationState,
    /// Listing state for listing renders, the background for overlays.
    listing: Option<ListingState>,
    op: HistoryOp,
    /// Refresh the listing without touching the modal slot.
    keep_modal: bool,
}

fn plan(
    resolution: Resolution,
    arrival: ArrivalMode,
    op: HistoryOp,
    listing: ListingState,
    mounted: Option<&ListingFilter>,
) -> Plan {
    let render = match (&resolution.route, &resolution.presentation) {
        (Route::Home, _) => Render::Home,
        (Route::Listing, _) => match plan_lookup(&resolution.route, &listing.filter, mounted) {
            Some(Lookup::List(filter)) => Render::Listing(Some(filter)),
            _ => Render::Listing(None),
        },
        (Route::Item(_), PresentationState::Overlay { id, .. }) => Render::Overlay(id.clone()),
        (Route::Item(id), _) => Render::Full(id.clone()),
        (Route::Unknown, _) => Render::Unknown,
    };
    let listing = match (&render, &resolution.presentation) {
        (_, PresentationState::Overlay { background, .. }) => Some(background.clone()),
        (Render::Listing(_), _) => Some(listing),
        _ => None,
    };
    Plan {
        address: resolution.address,
        arrival,
        render,
        presentation: resolution.presentation,
        listing,
        op,
        keep_modal: false,
    }
}

/// A render together with what the store answered for it.
enum Content<T> {
    Home,
    Unknown,
    /// `None` keeps the records already mounted.
    Listing(Option<Result<Vec<T>, StoreError>>),
    Overlay(ResourceId, Result<Option<T>, StoreError>),
    Full(ResourceId, Result<Option<T>, StoreError>),
}

impl<T: Record> Content<T> {
    async fn fetch(render: Render, source: Arc<dyn RecordSource<T>>) -> Self {
        match render {
            Render::Home => Content::Home,
            Render::Unknown => Content::Unknown,
            Render::Listing(None) => Content::Listing(None),
            Render::Listing(Some(filter)) => Content::Listing(Some(source.list(filter).await)),
            Render::Overlay(id) => {
                let record = source.get(id.clone()).await;
                Content::Overlay(id, record)
            }
            Render::Full(id) => {
                let record = source.get(id.clone()).await;
                Content::Full(id, record)
            }
        }
    }

    /// Content for renders that need no lookup.
    fn immediate(render: &Render) -> Option<Self> {
        match render {
            Render::Home => Some(Content::Home),
            Render::Unknown => Some(Content::Unknown),
            Render::Listing(None) => Some(Content::Listing(None)),
            _ => None,
        }
    }
}

struct LookupDone<T> {
    generation: u64,
    content: Content<T>,
}

struct Pending<T: Record> {
    generation: u64,
    plan: Plan,
    respond_to: Response<T>,
    task: JoinHandle<()>,
}

struct Committed<T> {
    main: MainView<T>,
    modal: ModalView<T>,
    presentation: PresentationState,
    exited: bool,
    fallback: Option<NavigationError>,
}

pub struct NavigatorActor<T: Record> {
    receiver: mpsc::Receiver<NavigatorRequest<T>>,
    completions: mpsc::UnboundedReceiver<LookupDone<T>>,
    completion_sender: mpsc::UnboundedSender<LookupDone<T>>,
    config: NavigatorConfig,
    resolver: ViewResolver,
    history: HistorySynchronizer,
    overlay: OverlayController,
    listeners: ListenerRegistry,
    fallback: FallbackHandler,
    boundary: FaultBoundary<Plan>,
    state: Committed<T>,
    generation: u64,
    pending: Option<Pending<T>>,
    deferred: VecDeque<NavigatorRequest<T>>,
}

impl<T: Record> NavigatorActor<T> {
    pub(crate) fn new(
        receiver: mpsc::Receiver<NavigatorRequest<T>>,
        config: NavigatorConfig,
        history: Box<dyn HistoryBackend>,
    ) -> Self {
        let addresses = AddressSpace::new(config.listing_segment.clone());
        let listeners = ListenerRegistry::new();
        let (completion_sender, completions) = mpsc::unbounded_channel();
        Self {
            receiver,
            completions,
            completion_sender,
            resolver: ViewResolver::new(addresses.clone()),
            history: HistorySynchronizer::new(history, addresses, config.desync_policy()),
            overlay: OverlayController::new(listeners.clone(), config.dismiss_key.clone()),
            listeners,
            fallback: FallbackHandler::new(&config),
            boundary: FaultBoundary::new(),
            state: Committed {
                main: MainView::Blank,
                modal: ModalView::Empty,
                presentation: PresentationState::None,
                exited: false,
                fallback: None,
            },
            generation: 0,
            pending: None,
            deferred: VecDeque::new(),
            config,
        }
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: NavigatorContext<T>) {
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(
            record_type,
            segment = %self.config.listing_segment,
            environment = %self.config.environment,
            "Navigator started"
        );

        loop {
            tokio::select! {
                request = self.receiver.recv() => match request {
                    Some(request) => self.handle(request, &context),
                    None => break,
                },
                Some(done) = self.completions.recv() => self.complete(done, &context),
            }
            self.replay_deferred(&context);
        }

        if let Some(pending) = self.pending.take() {
            pending.task.abort();
        }
        info!(record_type, "Navigator shutdown");
    }

    // =========================================================================
    // Command dispatch
    // =========================================================================

    fn handle(&mut self, request: NavigatorRequest<T>, ctx: &NavigatorContext<T>) {
        let NavigatorRequest {
            command,
            respond_to,
        } = request;

        if matches!(command, Command::Snapshot) {
            self.reply(respond_to, ctx);
            return;
        }
        if self.hard_pending() && !command.is_hard() {
            debug!(?command, "Deferred until hard arrival commits");
            self.deferred.push_back(NavigatorRequest {
                command,
                respond_to,
            });
            return;
        }

        debug!(?command, "Command");
        match command {
            Command::Load(address) => self.load(address, respond_to, ctx),
            Command::Reload => self.reload(respond_to, ctx),
            Command::Navigate(address) => self.navigate(address, respond_to, ctx),
            Command::OpenRecord(id) => {
                let address = self.resolver.addresses().item_address(&id);
                self.navigate(address, respond_to, ctx)
            }
            Command::Gesture(gesture) => match self.overlay.dispatch(&gesture) {
                GestureOutcome::Dismiss => self.dismiss(respond_to, ctx),
                GestureOutcome::Ignored => {
                    debug!(?gesture, "Gesture ignored");
                    self.reply(respond_to, ctx)
                }
            },
            Command::Dismiss => self.dismiss(respond_to, ctx),
            Command::Back => self.back(respond_to, ctx),
            Command::Forward => self.forward(respond_to, ctx),
            Command::ScrollListing(offset) => self.scroll(offset, respond_to, ctx),
            Command::FilterListing(filter) => self.filter(filter, respond_to, ctx),
            Command::Retry => self.retry(respond_to, ctx),
            Command::Escape => self.escape(respond_to, ctx),
            Command::Snapshot => self.reply(respond_to, ctx),
        }
    }

    fn replay_deferred(&mut self, ctx: &NavigatorContext<T>) {
        while !self.hard_pending() {
            let Some(request) = self.deferred.pop_front() else {
                break;
            };
            debug!(command = ?request.command, "Replaying deferred command");
            self.handle(request, ctx);
        }
    }

    fn hard_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.plan.arrival == ArrivalMode::Hard)
    }

    fn mounted_listing(&self) -> Option<&ListingState> {
        self.state.main.listing().map(|view| &view.state)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn load(&mut self, address: String, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        let resolution = self
            .resolver
            .resolve_intent(&NavigationIntent::hard(address), None);
        let plan = plan(
            resolution,
            ArrivalMode::Hard,
            HistoryOp::Load,
            ListingState::default(),
            None,
        );
        self.begin(plan, respond_to, ctx);
    }

    fn reload(&mut self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        let Some(entry) = self.history.current().cloned() else {
            self.reply(respond_to, ctx);
            return;
        };
        let resolution = self
            .resolver
            .resolve_intent(&NavigationIntent::hard(entry.address), None);
        let plan = plan(
            resolution,
            ArrivalMode::Hard,
            HistoryOp::Reload,
            entry.listing.unwrap_or_default(),
            None,
        );
        self.begin(plan, respond_to, ctx);
    }

    fn navigate(&mut self, address: String, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        let address = self.resolver.addresses().normalize(&address);
        if !self.state.exited && self.history.current_address() == Some(address.as_str()) {
            debug!(%address, "Already showing");
            self.supersede();
            self.reply(respond_to, ctx);
            return;
        }
        self.navigate_to(address, respond_to, ctx);
    }

    fn navigate_to(&mut self, address: String, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        let mounted = self.mounted_listing().cloned();
        let resolution = self
            .resolver
            .resolve_intent(&NavigationIntent::soft(address), mounted.as_ref());
        let op = match resolution.presentation {
            PresentationState::Overlay { .. }
                if self.history.current_kind() == Some(EntryKind::Intercepted) =>
            {
                HistoryOp::ReplaceIntercepted
            }
            PresentationState::Overlay { .. } => HistoryOp::PushIntercepted,
            _ => HistoryOp::PushPage,
        };
        let plan = plan(
            resolution,
            ArrivalMode::Soft,
            op,
            mounted.clone().unwrap_or_default(),
            mounted.as_ref().map(|state| &state.filter),
        );
        self.begin(plan, respond_to, ctx);
    }

    fn dismiss(&mut self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        self.supersede();
        match self.overlay.close(&mut self.history) {
            Ok(Some(entry)) => {
                self.after_close(&entry);
                self.reply(respond_to, ctx);
            }
            Ok(None) => self.reply(respond_to, ctx),
            Err(error) => {
                warn!(%error, "Close failed");
                let _ = respond_to.send(Err(error));
            }
        }
    }

    fn after_close(&mut self, entry: &HistoryEntry) {
        self.state.modal = ModalView::Empty;
        self.state.presentation = PresentationState::None;
        self.state.fallback = None;
        self.boundary.clear();
        if let Some(state) = self.mounted_listing().cloned() {
            self.history.update_listing(state);
        }
        info!(address = %entry.address, "Overlay closed");
    }

    fn back(&mut self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        if self.state.exited {
            self.reply(respond_to, ctx);
            return;
        }

        // Browser back from an overlay is a close.
        if self.overlay.is_open() && self.history.current_kind() == Some(EntryKind::Intercepted) {
            self.supersede();
            self.overlay.unmount();
            if let Traversal::Moved(entry) = self.history.back() {
                self.after_close(&entry);
            }
            self.reply(respond_to, ctx);
            return;
        }

        match self.history.peek(-1).cloned() {
            Some(entry) => {
                let plan = self.traversal_plan(entry, -1);
                self.begin(plan, respond_to, ctx);
            }
            None if self.history.is_empty() => self.reply(respond_to, ctx),
            None => {
                self.supersede();
                self.history.back();
                self.overlay.unmount();
                self.state.exited = true;
                info!("Left the application");
                self.reply(respond_to, ctx);
            }
        }
    }

    fn forward(&mut self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        if self.state.exited {
            self.history.forward();
            self.state.exited = false;
            info!("Returned to the application");
            self.reply(respond_to, ctx);
            return;
        }
        match self.history.peek(1).cloned() {
            Some(entry) => {
                let plan = self.traversal_plan(entry, 1);
                self.begin(plan, respond_to, ctx);
            }
            None => self.reply(respond_to, ctx),
        }
    }

    fn traversal_plan(&self, entry: HistoryEntry, delta: isize) -> Plan {
        let mounted = self.mounted_listing();
        let resolution = self.resolver.resolve_entry(&entry, mounted);
        plan(
            resolution,
            ArrivalMode::Soft,
            HistoryOp::Traverse(delta),
            entry.listing.unwrap_or_default(),
            mounted.map(|state| &state.filter),
        )
    }

    fn scroll(&mut self, offset: u32, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        match self.state.main.listing_mut() {
            Some(view) => {
                view.state.scroll = offset;
                let state = view.state.clone();
                if let PresentationState::Overlay { background, .. } = &mut self.state.presentation
                {
                    *background = state.clone();
                }
                self.history.update_listing(state);
            }
            None => debug!(offset, "No listing to scroll"),
        }
        self.reply(respond_to, ctx);
    }

    fn filter(&mut self, filter: ListingFilter, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        let unchanged = self.mounted_listing().map(|state| state.filter == filter);
        let address = self.history.current_address().map(str::to_string);
        let (Some(false), Some(address)) = (unchanged, address) else {
            self.reply(respond_to, ctx);
            return;
        };
        let plan = Plan {
            address,
            arrival: ArrivalMode::Soft,
            render: Render::Listing(Some(filter.clone())),
            presentation: self.state.presentation.clone(),
            listing: Some(ListingState::filtered(filter)),
            op: HistoryOp::Keep,
            keep_modal: true,
        };
        self.begin(plan, respond_to, ctx);
    }

    fn retry(&mut self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        match self.boundary.retry() {
            Some(mut plan) => {
                info!(address = %plan.address, "Retrying render");
                // History already reflects the faulted render.
                plan.op = HistoryOp::Keep;
                self.begin(plan, respond_to, ctx);
            }
            None => self.reply(respond_to, ctx),
        }
    }

    fn escape(&mut self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        match self.boundary.escape() {
            Some(address) => {
                info!(%address, "Escaping fault");
                self.navigate_to(address, respond_to, ctx);
            }
            None => self.reply(respond_to, ctx),
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Start a transition, superseding whatever is pending.
    fn begin(&mut self, plan: Plan, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        self.supersede();

        if let Some(content) = Content::immediate(&plan.render) {
            let result = self.commit(plan, content, ctx);
            let _ = respond_to.send(result);
            return;
        }

        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&ctx.source);
        let completions = self.completion_sender.clone();
        let render = plan.render.clone();
        info!(generation, address = %plan.address, arrival = %plan.arrival, ?render, "Lookup started");

        let task = tokio::spawn(async move {
            let content = Content::fetch(render, source).await;
            let _ = completions.send(LookupDone {
                generation,
                content,
            });
        });

        self.pending = Some(Pending {
            generation,
            plan,
            respond_to,
            task,
        });
    }

    fn supersede(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            info!(generation = pending.generation, address = %pending.plan.address, "Superseded");
            let _ = pending
                .respond_to
                .send(Err(NavigationError::Superseded(pending.plan.address)));
        }
    }

    fn complete(&mut self, done: LookupDone<T>, ctx: &NavigatorContext<T>) {
        let current = self.pending.as_ref().map(|pending| pending.generation);
        if current != Some(done.generation) {
            warn!(generation = done.generation, ?current, "Discarding stale lookup");
            return;
        }
        if let Some(pending) = self.pending.take() {
            let result = self.commit(pending.plan, done.content, ctx);
            let _ = pending.respond_to.send(result);
        }
    }

    // =========================================================================
    // Commit
    // =========================================================================

    fn commit(
        &mut self,
        plan: Plan,
        content: Content<T>,
        ctx: &NavigatorContext<T>,
    ) -> Result<NavigatorSnapshot<T>, NavigationError> {
        self.boundary.clear();
        self.state.fallback = None;
        self.state.exited = false;
        self.apply_history(&plan);

        match content {
            Content::Home => self.show_main(MainView::Home, PresentationState::None),
            Content::Unknown => {
                let view = self.fallback.not_found(&Scope::Global);
                self.show_main(MainView::NotFound(view), PresentationState::None);
            }
            Content::Listing(None) => {
                let records = self
                    .state
                    .main
                    .listing()
                    .map(|view| view.records.clone())
                    .unwrap_or_default();
                self.show_listing(&plan, records);
            }
            Content::Listing(Some(Ok(records))) => self.show_listing(&plan, records),
            Content::Overlay(id, Ok(Some(record))) => {
                self.overlay.open(id);
                self.state.modal = ModalView::Overlay(OverlayView {
                    heading: OVERLAY_HEADING.to_string(),
                    record,
                    full_page: plan.address.clone(),
                });
                self.state.presentation = plan.presentation.clone();
            }
            Content::Overlay(id, Ok(None)) => {
                // The fallback keeps an overlay frame so it can be dismissed like one.
                self.overlay.open(id.clone());
                let scope = self.fallback.section();
                self.state.modal = ModalView::NotFound(self.fallback.not_found(&scope));
                self.state.presentation = PresentationState::None;
                self.state.fallback = Some(NavigationError::RecordNotFound { id, scope });
            }
            Content::Full(id, Ok(Some(record))) => {
                self.show_main(MainView::Detail(record), PresentationState::Full(id))
            }
            Content::Full(id, Ok(None)) => {
                let scope = self.fallback.section();
                let view = self.fallback.not_found(&scope);
                self.show_main(MainView::NotFound(view), PresentationState::None);
                self.state.fallback = Some(NavigationError::RecordNotFound { id, scope });
            }
            Content::Listing(Some(Err(error)))
            | Content::Overlay(_, Err(error))
            | Content::Full(_, Err(error)) => self.show_fault(plan.clone(), &error),
        }

        info!(
            address = %plan.address,
            presentation = ?self.state.presentation,
            fallback = self.state.fallback.is_some(),
            "Committed"
        );
        Ok(self.snapshot(ctx))
    }

    fn apply_history(&mut self, plan: &Plan) {
        match (plan.op, &plan.render) {
            (HistoryOp::Load, _) => self.history.load(&plan.address, plan.listing.clone()),
            (HistoryOp::Reload, _) => self
                .history
                .replace_current(&plan.address, plan.listing.clone()),
            (HistoryOp::PushPage, _) => self.history.push_page(&plan.address, plan.listing.clone()),
            (HistoryOp::PushIntercepted, Render::Overlay(id)) => self
                .history
                .push_intercepted(id, plan.listing.clone().unwrap_or_default()),
            (HistoryOp::ReplaceIntercepted, Render::Overlay(id)) => self
                .history
                .replace_intercepted(id, plan.listing.clone().unwrap_or_default()),
            (HistoryOp::PushIntercepted | HistoryOp::ReplaceIntercepted, _) => {
                self.history.push_page(&plan.address, plan.listing.clone())
            }
            (HistoryOp::Traverse(delta), _) => {
                self.history.go(delta);
            }
            (HistoryOp::Keep, _) => {}
        }
    }

    fn show_main(&mut self, view: MainView<T>, presentation: PresentationState) {
        self.overlay.unmount();
        self.state.modal = ModalView::Empty;
        self.state.main = view;
        self.state.presentation = presentation;
    }

    fn show_listing(&mut self, plan: &Plan, records: Vec<T>) {
        let state = plan.listing.clone().unwrap_or_default();
        if plan.keep_modal {
            if let PresentationState::Overlay { background, .. } = &mut self.state.presentation {
                *background = state.clone();
            }
        } else {
            self.overlay.unmount();
            self.state.modal = ModalView::Empty;
            self.state.presentation = PresentationState::None;
        }
        self.history.update_listing(state.clone());
        self.state.main = MainView::Listing(ListingView { state, records });
    }

    fn show_fault(&mut self, plan: Plan, error: &StoreError) {
        let scope = self.fallback.section();
        let fault = RuntimeFault::new(error.to_string());
        // A failed listing cannot be the way out of itself.
        let escape = match plan.render {
            Render::Listing(_) => self.fallback.escape_address(&Scope::Global),
            _ => self.fallback.escape_address(&scope),
        };
        warn!(address = %plan.address, %error, digest = %fault.digest, "Render faulted");

        let view = self.fallback.fault(&scope, &fault, escape.clone());
        match &plan.render {
            Render::Overlay(id) => {
                self.overlay.open(id.clone());
                self.state.modal = ModalView::Fault(view);
                self.state.presentation = PresentationState::None;
            }
            _ => self.show_main(MainView::Fault(view), PresentationState::None),
        }
        self.state.fallback = Some(NavigationError::RuntimeFault {
            scope: scope.clone(),
            fault,
        });
        self.boundary.trip(scope, plan, escape);
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    fn reply(&self, respond_to: Response<T>, ctx: &NavigatorContext<T>) {
        let _ = respond_to.send(Ok(self.snapshot(ctx)));
    }

    fn snapshot(&self, ctx: &NavigatorContext<T>) -> NavigatorSnapshot<T> {
        NavigatorSnapshot {
            address: self.history.current_address().map(str::to_string),
            presentation: self.state.presentation.clone(),
            main: self.state.main.clone(),
            modal: self.state.modal.clone(),
            title: self.title(),
            pending: self
                .pending
                .as_ref()
                .map(|pending| pending.plan.address.clone()),
            history_position: self.history.position(),
            history_len: self.history.len(),
            listeners: self.listeners.active_count(),
            user: ctx.session.current(),
            exited: self.state.exited,
            fallback: self.state.fallback.clone(),
        }
    }

    /// Document title. The modal slot wins over the main slot.
    fn title(&self) -> String {
        let app = &self.config.app_title;
        match &self.state.modal {
            ModalView::Overlay(view) => return format!("{} | {}", view.record.title(), app),
            ModalView::NotFound(view) => return view.heading.clone(),
            ModalView::Fault(view) => return format!("{} | {}", view.heading, app),
            ModalView::Empty => {}
        }
        match &self.state.main {
            MainView::Blank | MainView::Home => app.clone(),
            MainView::Listing(_) => format!("{} | {}", self.config.listing_title, app),
            MainView::Detail(record) => format!("{} | {}", record.title(), app),
            MainView::NotFound(view) => view.heading.clone(),
            MainView::Fault(view) => format!("{} | {}", view.heading, app),
        }
    }
}
