//! Core data access and view-synchronization logic for the lookbook
//! directory of mentors, founders and companies.
//! This crate is the single source of truth for normalization and filtering.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod remote;
pub mod repo;
pub mod search;
pub mod service;
pub mod view;

pub use config::{ConfigError, CredentialTriple, ExaConfig, LookbookConfig, SettingsStore};
pub use error::{LookbookError, LookbookResult};
pub use logging::{default_log_level, init_logging, init_logging_from_env, logging_status};
pub use model::entity::{Company, DirectoryEntry, EntityKind, Founder, LookbookTag, Mentor};
pub use model::record::RawRecord;
pub use normalize::{normalize_company, normalize_founder, normalize_mentor, slugify};
pub use remote::airtable::{AirtableClient, SortDirection, TableQuery};
pub use remote::error::{ErrorDetails, RemoteError, TransportError};
pub use remote::exa::ExaClient;
pub use remote::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use repo::entity_repo::{
    AirtableRepository, CompanyRepository, EntityRepository, FounderRepository, MentorRepository,
};
pub use search::facets::{derive_facets, Facets};
pub use search::filter::FilterState;
pub use search::slug_index::SlugIndex;
pub use service::company_service::{CompanyDetail, CompanyDetailService};
pub use service::description_service::DescriptionService;
pub use service::directory_service::{DirectoryView, ViewFailure, ViewState};
pub use service::feedback_service::{AirtableFeedback, FeedbackKind, FeedbackToggle};
pub use view::card::{CardView, EntityCard};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
