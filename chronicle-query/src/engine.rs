//! The query engine: one synchronous pass from raw query to batch.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use chronicle_core::errors::{ChronicleResult, QueryError};
use chronicle_core::models::{ResultBatch, ResultItem};
use chronicle_core::traits::HistoryStore;
use chronicle_core::{QueryConfig, QueryState, SourceMode};
use chronicle_storage::StoreEngine;

use crate::{classify, format, rank, yearspec};

/// One invocation's input: the raw query plus the state echoed back
/// from the previous invocation's chosen action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub state: QueryState,
    pub show_events: bool,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            state: QueryState::default(),
            show_events: true,
        }
    }
}

/// Query pipeline over any [`HistoryStore`].
pub struct QueryEngine<'a> {
    store: &'a dyn HistoryStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a dyn HistoryStore) -> Self {
        Self { store }
    }

    /// Open the configured store and run one request against it. A
    /// store that cannot be opened degrades to a single diagnostic
    /// item instead of an error the host cannot render.
    pub fn run_with_config(config: &QueryConfig, request: &QueryRequest) -> ResultBatch {
        match StoreEngine::open(&config.db_path) {
            Ok(store) => {
                let request = QueryRequest {
                    show_events: config.show_events,
                    ..request.clone()
                };
                QueryEngine::new(&store).run(&request)
            }
            Err(err) => {
                error!(path = %config.db_path.display(), error = %err, "store unavailable");
                ResultBatch::single(format::diagnostic(
                    "⚠️ Error, missing dataset",
                    "Re-install the dataset or check the configured path",
                ))
            }
        }
    }

    /// Run one request. Pipeline failures degrade to a single
    /// diagnostic item; the batch is always renderable.
    pub fn run(&self, request: &QueryRequest) -> ResultBatch {
        match self.try_run(request) {
            Ok(batch) => batch,
            Err(err) => {
                error!(error = %err, "query failed");
                ResultBatch::single(format::diagnostic(
                    "⚠️ Something went wrong",
                    "Check the logs and try again",
                ))
            }
        }
    }

    fn try_run(&self, request: &QueryRequest) -> ChronicleResult<ResultBatch> {
        if request.state.source == SourceMode::Lineage {
            return self.lineage(&request.state);
        }
        // An empty query with a restored_query in flight re-runs the
        // query the user backed out of.
        let raw = if request.query.trim().is_empty() {
            request.state.restored_query.clone().unwrap_or_default()
        } else {
            request.query.clone()
        };
        let classification = classify::classify(&raw);
        if classification.is_empty() {
            return Ok(ResultBatch::default());
        }
        let mut items = match &classification.year_anchor {
            Some(anchor) => {
                self.by_year(anchor, &classification.text_terms, &raw, request.show_events)?
            }
            None => self.by_name(&classification.text_terms, &raw, request.show_events)?,
        };
        if items.is_empty() {
            info!(query = %raw, "no matches");
            return Ok(ResultBatch::single(format::no_results(&raw)));
        }
        format::apply_global_counters(&mut items);
        Ok(ResultBatch { items })
    }

    fn by_name(
        &self,
        terms: &[String],
        original_query: &str,
        show_events: bool,
    ) -> ChronicleResult<Vec<ResultItem>> {
        let hits = self.store.search_rulers(terms)?;
        debug!(terms = ?terms, hits = hits.len(), "ruler search");
        let groups = rank::group_by_ruler(hits);
        let mut items: Vec<ResultItem> = groups
            .iter()
            .map(|group| format::ruler_item(group, original_query))
            .collect();
        if show_events {
            for hit in self.store.search_events(terms)? {
                items.push(format::event_item(&hit, original_query));
            }
        }
        Ok(items)
    }

    fn by_year(
        &self,
        anchor: &str,
        terms: &[String],
        original_query: &str,
        show_events: bool,
    ) -> ChronicleResult<Vec<ResultItem>> {
        let spec = yearspec::resolve(anchor);
        debug!(anchor = %anchor, spec = ?spec, "year lookup");
        let mut items = Vec::new();
        for hit in self.store.periods_by_year(&spec, terms)? {
            items.push(format::year_period_item(&hit, anchor, &spec, original_query));
        }
        if show_events {
            for hit in self.store.events_by_year(&spec, terms)? {
                items.push(format::year_event_item(&hit, anchor, &spec, original_query));
            }
        }
        Ok(items)
    }

    /// Render the holder sequence of the focal title, starting three
    /// entries before the focal ruler and running to the end. Lineage
    /// items carry their own position counters, so the batch-wide
    /// counter prefix does not apply here.
    fn lineage(&self, state: &QueryState) -> ChronicleResult<ResultBatch> {
        let ruler_id = state
            .ruler_id
            .ok_or(QueryError::IncompleteLineageState { field: "ruler_id" })?;
        let title = state
            .title
            .as_deref()
            .ok_or(QueryError::IncompleteLineageState { field: "title" })?;
        let original_query = state.restored_query.as_deref().unwrap_or_default();
        let position = match state.position {
            Some(position) => Some(position),
            None => self.store.position_for(ruler_id, title)?,
        };
        let sequence = self.store.title_sequence(title)?;
        if sequence.is_empty() {
            warn!(title = %title, "lineage requested for a title with no holders");
            return Ok(ResultBatch::single(format::no_results(original_query)));
        }
        let focal_idx = sequence
            .iter()
            .position(|hit| {
                hit.ruler.ruler_id == ruler_id && Some(hit.period.position) == position
            })
            .unwrap_or_else(|| {
                warn!(ruler_id, title = %title, "lineage focus not in sequence, starting from the top");
                0
            });
        let items = sequence[focal_idx.saturating_sub(3)..]
            .iter()
            .map(|hit| format::lineage_item(hit, ruler_id, original_query))
            .collect();
        Ok(ResultBatch { items })
    }
}
