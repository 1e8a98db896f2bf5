//! Entity repository contract and Airtable-backed implementation.

use crate::config::{CredentialTriple, LookbookConfig};
use crate::error::LookbookResult;
use crate::model::entity::{Company, DirectoryEntry, EntityKind, Founder, Mentor};
use crate::model::record::RawRecord;
use crate::normalize::{normalize_company, normalize_founder, normalize_mentor};
use crate::remote::airtable::{AirtableClient, SortDirection, TableQuery};
use crate::remote::transport::HttpTransport;
use crate::search::slug_index::SlugIndex;
use log::info;
use std::sync::Arc;

/// Formula restricting founders to rows opted into the lookbook.
pub const FOUNDER_INCLUDE_FORMULA: &str = "lookbookInclude='TRUE'";

/// Read contract for one entity kind.
pub trait EntityRepository: Send + Sync {
    type Entity: DirectoryEntry + Clone + Send;

    fn kind(&self) -> EntityKind;

    /// Fetches and normalizes the whole collection in one call.
    fn fetch_all(&self) -> LookbookResult<Vec<Self::Entity>>;

    /// Finds the first entity whose slug equals `slug`.
    ///
    /// Built as "fetch everything, index by slug, look up" so a real index can
    /// replace the scan without changing callers. `Ok(None)` means not found.
    fn fetch_by_slug(&self, slug: &str) -> LookbookResult<Option<Self::Entity>> {
        let index = SlugIndex::build(self.fetch_all()?);
        Ok(index.into_entry(slug))
    }
}

/// Airtable table repository producing `E` through a normalizer.
pub struct AirtableRepository<E> {
    kind: EntityKind,
    api_url: String,
    credentials: CredentialTriple,
    query: TableQuery,
    normalize: fn(&RawRecord) -> E,
    transport: Arc<dyn HttpTransport>,
}

pub type MentorRepository = AirtableRepository<Mentor>;
pub type FounderRepository = AirtableRepository<Founder>;
pub type CompanyRepository = AirtableRepository<Company>;

impl<E> AirtableRepository<E> {
    pub fn new(
        kind: EntityKind,
        config: &LookbookConfig,
        query: TableQuery,
        normalize: fn(&RawRecord) -> E,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            kind,
            api_url: config.airtable_api_url.clone(),
            credentials: config.credentials(kind).clone(),
            query,
            normalize,
            transport,
        }
    }

    /// Replaces the default server-side query.
    pub fn with_query(mut self, query: TableQuery) -> Self {
        self.query = query;
        self
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    /// Returns a client for this table after validating credentials.
    pub fn client(&self) -> LookbookResult<AirtableClient> {
        let credentials = self.credentials.require(self.kind)?;
        Ok(AirtableClient::new(
            self.api_url.as_str(),
            credentials.clone(),
            Arc::clone(&self.transport),
        ))
    }
}

impl MentorRepository {
    /// Mentors: unfiltered table listing.
    pub fn mentors(config: &LookbookConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(
            EntityKind::Mentor,
            config,
            TableQuery::new(),
            normalize_mentor,
            transport,
        )
    }
}

impl FounderRepository {
    /// Founders: lookbook-included rows only, cache busted.
    pub fn founders(config: &LookbookConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(
            EntityKind::Founder,
            config,
            TableQuery::new()
                .filter(FOUNDER_INCLUDE_FORMULA)
                .cache_busted(),
            normalize_founder,
            transport,
        )
    }
}

impl CompanyRepository {
    /// Companies: sorted by display name ascending.
    pub fn companies(config: &LookbookConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(
            EntityKind::Company,
            config,
            TableQuery::new().sort_by("company", SortDirection::Asc),
            normalize_company,
            transport,
        )
    }
}

impl<E> EntityRepository for AirtableRepository<E>
where
    E: DirectoryEntry + Clone + Send,
{
    type Entity = E;

    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn fetch_all(&self) -> LookbookResult<Vec<E>> {
        let client = self.client()?;
        let records = client.list_records(&self.query, self.kind.plural())?;
        let entities: Vec<E> = records.iter().map(self.normalize).collect();
        info!(
            "event=collection_fetched module=repo status=ok kind={} count={}",
            self.kind,
            entities.len()
        );
        Ok(entities)
    }
}
