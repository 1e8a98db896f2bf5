//! Tabular store (Airtable) REST client.
//!
//! # Responsibility
//! - List a table with an optional filter formula, sort and cache busting.
//! - Read and patch single records by id.
//! - Turn every failure into a `RemoteError` with or without status.
//!
//! # Invariants
//! - One list call is one GET; pagination is not followed.
//! - The bearer token never appears in logs or error messages.

use crate::config::CredentialTriple;
use crate::model::record::{RawRecord, RecordPage};
use crate::remote::error::RemoteError;
use crate::remote::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Sort direction for `sort[i][direction]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Server-side options for one list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    /// Formula passed as `filterByFormula`.
    pub filter_by_formula: Option<String>,
    pub sort: Vec<SortSpec>,
    /// Appends `_=<epoch millis>` so intermediaries cannot serve a stale copy.
    pub cache_bust: bool,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, formula: impl Into<String>) -> Self {
        self.filter_by_formula = Some(formula.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn cache_busted(mut self) -> Self {
        self.cache_bust = true;
        self
    }
}

/// Client bound to one base/table with one token.
#[derive(Clone)]
pub struct AirtableClient {
    api_url: String,
    credentials: CredentialTriple,
    transport: Arc<dyn HttpTransport>,
}

impl AirtableClient {
    /// Creates a client. Credentials are expected to be validated already.
    pub fn new(
        api_url: impl Into<String>,
        credentials: CredentialTriple,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            credentials,
            transport,
        }
    }

    pub fn table(&self) -> &str {
        &self.credentials.table
    }

    /// Lists every record matched by `query` in one request.
    ///
    /// `label` names the collection in error messages (e.g. `founders`).
    pub fn list_records(
        &self,
        query: &TableQuery,
        label: &str,
    ) -> Result<Vec<RawRecord>, RemoteError> {
        let url = self.list_url(query)?;
        debug!(
            "event=airtable_list module=remote status=start table={} filtered={} sorted={}",
            self.credentials.table,
            query.filter_by_formula.is_some(),
            !query.sort.is_empty()
        );

        let request = HttpRequest::get(url, self.credentials.token.as_str());
        let response = self.send(&request, &format!("Failed to fetch {label}"))?;
        let page: RecordPage = decode(&response, &format!("Failed to fetch {label}"))?;
        debug!(
            "event=airtable_list module=remote status=ok table={} record_count={}",
            self.credentials.table,
            page.records.len()
        );
        Ok(page.records)
    }

    /// Reads one record by id.
    pub fn get_record(&self, record_id: &str) -> Result<RawRecord, RemoteError> {
        let url = self.record_url(record_id)?;
        let request = HttpRequest::get(url, self.credentials.token.as_str());
        let response = self.send(&request, "Failed to fetch record")?;
        decode(&response, "Failed to fetch record")
    }

    /// Patches only the given fields of one record and returns the result.
    pub fn update_fields(
        &self,
        record_id: &str,
        fields: Map<String, Value>,
    ) -> Result<RawRecord, RemoteError> {
        let url = self.record_url(record_id)?;
        let request = HttpRequest::with_body(
            HttpMethod::Patch,
            url,
            self.credentials.token.as_str(),
            json!({ "fields": fields }),
        );
        let response = self.send(&request, "Failed to update record")?;
        decode(&response, "Failed to update record")
    }

    fn table_url(&self) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.api_url).map_err(|err| {
            RemoteError::unavailable(format!("invalid Airtable API URL `{}`: {err}", self.api_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                RemoteError::unavailable(format!(
                    "Airtable API URL `{}` cannot carry a path",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .push(&self.credentials.base_id)
            .push(&self.credentials.table);
        Ok(url)
    }

    fn list_url(&self, query: &TableQuery) -> Result<String, RemoteError> {
        let mut url = self.table_url()?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(formula) = &query.filter_by_formula {
                pairs.append_pair("filterByFormula", formula);
            }
            for (index, sort) in query.sort.iter().enumerate() {
                pairs.append_pair(&format!("sort[{index}][field]"), &sort.field);
                pairs.append_pair(&format!("sort[{index}][direction]"), sort.direction.as_str());
            }
            if query.cache_bust {
                pairs.append_pair("_", &chrono::Utc::now().timestamp_millis().to_string());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url.to_string())
    }

    fn record_url(&self, record_id: &str) -> Result<String, RemoteError> {
        let mut url = self.table_url()?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::unavailable("Airtable API URL cannot carry a path"))?
            .push(record_id);
        Ok(url.to_string())
    }

    fn send(&self, request: &HttpRequest, failure: &str) -> Result<HttpResponse, RemoteError> {
        let response = self.transport.send(request).map_err(|err| {
            warn!(
                "event=airtable_request module=remote status=error method={} table={} kind=network",
                request.method.as_str(),
                self.credentials.table
            );
            RemoteError::unavailable(format!("{failure}: Network error or invalid response ({err})"))
        })?;

        if !response.is_success() {
            warn!(
                "event=airtable_request module=remote status=error method={} table={} http_status={}",
                request.method.as_str(),
                self.credentials.table,
                response.status
            );
            return Err(RemoteError::with_status(
                format!("{failure}: {} {}", response.status, response.status_text)
                    .trim_end()
                    .to_string(),
                response.status,
                &response.body,
            ));
        }
        Ok(response)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse, failure: &str) -> Result<T, RemoteError> {
    serde_json::from_str(&response.body).map_err(|err| {
        RemoteError::unavailable(format!("{failure}: Network error or invalid response ({err})"))
    })
}
