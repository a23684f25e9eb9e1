//! Property listing store.
//!
//! Holds the immutable fixture list plus the active filter and search state,
//! and publishes filtered snapshots through a [`watch`] channel. Every state
//! change bumps a request token and schedules a recomputation that waits out
//! the debounce interval and the simulated latency. Only the task holding the
//! latest token may publish.

pub mod types;

pub use types::{FilteredView, StoreTiming};

use crate::filters::{self, FilterPatch, PropertyFilters};
use crate::models::Property;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

struct QueryState {
    filters: PropertyFilters,
    search_term: String,
    token: u64,
    pending: Option<JoinHandle<()>>,
}

struct Inner {
    properties: Vec<Property>,
    timing: StoreTiming,
    query: Mutex<QueryState>,
    published: watch::Sender<FilteredView>,
}

impl Inner {
    async fn recompute(self: Arc<Self>, token: u64) {
        tokio::time::sleep(self.timing.debounce).await;
        if self.query.lock().await.token != token {
            debug!("Recompute {} superseded during debounce", token);
            return;
        }

        tokio::time::sleep(self.timing.latency).await;

        // Hold the lock through publish so no newer request can slip in between
        let state = self.query.lock().await;
        if state.token != token {
            debug!("Recompute {} superseded during latency", token);
            return;
        }

        let result = filters::apply(&self.properties, &state.filters, &state.search_term);
        let count = result.len();
        self.published.send_modify(|view| {
            view.properties = result;
            view.filters = state.filters.clone();
            view.search_term = state.search_term.clone();
            view.loading = false;
            view.revision += 1;
            view.token = token;
        });

        info!(
            "Published {} of {} properties (request {})",
            count,
            self.properties.len(),
            token
        );
    }
}

/// Shared handle to the listing state; clones refer to the same store
#[derive(Clone)]
pub struct PropertyStore {
    inner: Arc<Inner>,
}

impl PropertyStore {
    pub fn new(properties: Vec<Property>, timing: StoreTiming) -> Self {
        let (published, _) = watch::channel(FilteredView::unfiltered(&properties));
        Self {
            inner: Arc::new(Inner {
                properties,
                timing,
                query: Mutex::new(QueryState {
                    filters: PropertyFilters::default(),
                    search_term: String::new(),
                    token: 0,
                    pending: None,
                }),
                published,
            }),
        }
    }

    /// Full, unfiltered fixture list
    pub fn properties(&self) -> &[Property] {
        &self.inner.properties
    }

    pub fn get_property_by_id(&self, id: &str) -> Option<&Property> {
        self.inner.properties.iter().find(|p| p.id == id)
    }

    pub async fn filters(&self) -> PropertyFilters {
        self.inner.query.lock().await.filters.clone()
    }

    pub async fn search_term(&self) -> String {
        self.inner.query.lock().await.search_term.clone()
    }

    /// Latest published snapshot
    pub fn view(&self) -> FilteredView {
        self.inner.published.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.published.borrow().loading
    }

    pub fn subscribe(&self) -> watch::Receiver<FilteredView> {
        self.inner.published.subscribe()
    }

    /// Wait until the latest request has published, then return its snapshot
    pub async fn settled(&self) -> FilteredView {
        let mut rx = self.subscribe();
        let view = match rx.wait_for(|view| !view.loading).await {
            Ok(view) => view.clone(),
            Err(_) => self.view(),
        };
        view
    }

    pub async fn update_filters(&self, patch: FilterPatch) {
        let mut state = self.inner.query.lock().await;
        state.filters.merge(patch);
        debug!("Filters updated: {:?}", state.filters);
        self.schedule(&mut state);
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.inner.query.lock().await;
        state.search_term = term.into();
        debug!("Search term set to '{}'", state.search_term);
        self.schedule(&mut state);
    }

    /// Default filters and an empty search term
    pub async fn reset_filters(&self) {
        let mut state = self.inner.query.lock().await;
        state.filters = PropertyFilters::default();
        state.search_term.clear();
        debug!("Filters reset");
        self.schedule(&mut state);
    }

    fn schedule(&self, state: &mut QueryState) {
        state.token += 1;
        let token = state.token;

        if let Some(pending) = state.pending.take() {
            pending.abort();
        }

        self.inner.published.send_modify(|view| view.loading = true);

        let inner = Arc::clone(&self.inner);
        state.pending = Some(tokio::spawn(inner.recompute(token)));
    }
}
