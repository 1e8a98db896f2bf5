//! Directory list view state.
//!
//! # Responsibility
//! - Trigger a full collection fetch on load and on manual refresh.
//! - Keep facets in step with the loaded collection.
//! - Combine filter selections with the collection into the rendered subset.
//!
//! # Invariants
//! - A failed load never leaves entities from an earlier load visible.
//! - Facets are recomputed on every state change of the collection.
//! - Filter selections survive a refresh.

use crate::error::LookbookError;
use crate::model::entity::EntityKind;
use crate::repo::entity_repo::EntityRepository;
use crate::search::facets::{derive_facets, Facets};
use crate::search::filter::FilterState;
use crate::view::card::{CardView, EntityCard};
use log::{info, warn};

/// User-visible failure produced from a `LookbookError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFailure {
    pub message: String,
    pub status: Option<u16>,
    pub configuration: bool,
}

impl ViewFailure {
    pub fn from_error(kind: EntityKind, err: &LookbookError) -> Self {
        let message = if err.is_configuration() {
            err.user_message()
        } else {
            format!("Failed to load {}. {}", kind.plural(), err.user_message())
        };
        Self {
            message,
            status: err.status(),
            configuration: err.is_configuration(),
        }
    }
}

/// Loading lifecycle of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<E> {
    Loading,
    Failed(ViewFailure),
    Loaded(Vec<E>),
}

/// List view over one repository.
pub struct DirectoryView<R: EntityRepository> {
    repo: R,
    state: ViewState<R::Entity>,
    facets: Facets,
    filters: FilterState,
}

impl<R: EntityRepository> DirectoryView<R> {
    /// Creates a view in the `Loading` state. Call `load` to fetch.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: ViewState::Loading,
            facets: Facets::default(),
            filters: FilterState::new(),
        }
    }

    /// Fetches the collection, replacing whatever was loaded before.
    ///
    /// Also serves as the manual refresh action.
    pub fn load(&mut self) -> &ViewState<R::Entity> {
        let kind = self.repo.kind();
        self.state = ViewState::Loading;
        self.facets = Facets::default();

        match self.repo.fetch_all() {
            Ok(entities) => {
                self.facets = derive_facets(&entities);
                info!(
                    "event=view_loaded module=service status=ok kind={} count={} tags={} dates={}",
                    kind,
                    entities.len(),
                    self.facets.all_tags.len(),
                    self.facets.available_dates.len()
                );
                self.state = ViewState::Loaded(entities);
            }
            Err(err) => {
                warn!(
                    "event=view_loaded module=service status=error kind={} configuration={} http_status={}",
                    kind,
                    err.is_configuration(),
                    err.status().map_or_else(|| "none".to_string(), |s| s.to_string())
                );
                self.state = ViewState::Failed(ViewFailure::from_error(kind, &err));
            }
        }
        &self.state
    }

    pub fn refresh(&mut self) -> &ViewState<R::Entity> {
        self.load()
    }

    pub fn state(&self) -> &ViewState<R::Entity> {
        &self.state
    }

    pub fn kind(&self) -> EntityKind {
        self.repo.kind()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn failure(&self) -> Option<&ViewFailure> {
        match &self.state {
            ViewState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Loaded entities; empty while loading or after a failure.
    pub fn entities(&self) -> &[R::Entity] {
        match &self.state {
            ViewState::Loaded(entities) => entities,
            _ => &[],
        }
    }

    /// True only when a load succeeded and returned no rows.
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ViewState::Loaded(entities) if entities.is_empty())
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Entities passing the current filters, in collection order.
    pub fn visible(&self) -> Vec<&R::Entity> {
        self.filters.apply(self.entities())
    }
}

impl<R> DirectoryView<R>
where
    R: EntityRepository,
    R::Entity: CardView,
{
    /// Cards for the visible entities.
    pub fn cards(&self) -> Vec<EntityCard> {
        self.visible().into_iter().map(CardView::card).collect()
    }
}
