//! Per-company thumbs feedback on a single record.
//!
//! # Responsibility
//! - Flip one boolean `"<company> thumbs <up|neutral>"` field on a record.
//!
//! # Invariants
//! - The toggle is read-then-write over two requests and is not atomic:
//!   concurrent toggles can overwrite each other. `FeedbackToggle` is the
//!   single seam where an atomic implementation can be dropped in.
//! - Only the one feedback field is written.

use crate::config::LookbookConfig;
use crate::error::LookbookResult;
use crate::model::entity::EntityKind;
use crate::remote::airtable::AirtableClient;
use crate::remote::transport::HttpTransport;
use log::info;
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    ThumbsUp,
    ThumbsNeutral,
}

impl FeedbackKind {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::ThumbsUp => "up",
            Self::ThumbsNeutral => "neutral",
        }
    }

    /// Field holding this company's vote of this kind.
    pub fn field_name(self, company: &str) -> String {
        format!("{company} thumbs {}", self.suffix())
    }
}

/// Flips one feedback flag and returns its new value.
pub trait FeedbackToggle {
    fn toggle(&self, record_id: &str, company: &str, kind: FeedbackKind) -> LookbookResult<bool>;
}

/// Read-modify-write toggle against the tabular store.
pub struct AirtableFeedback {
    client: AirtableClient,
}

impl AirtableFeedback {
    pub fn new(client: AirtableClient) -> Self {
        Self { client }
    }

    /// Binds to the table of `kind`, validating its credentials first.
    pub fn for_kind(
        config: &LookbookConfig,
        kind: EntityKind,
        transport: Arc<dyn HttpTransport>,
    ) -> LookbookResult<Self> {
        let credentials = config.credentials(kind).require(kind)?;
        Ok(Self::new(AirtableClient::new(
            config.airtable_api_url.as_str(),
            credentials.clone(),
            transport,
        )))
    }
}

impl FeedbackToggle for AirtableFeedback {
    fn toggle(&self, record_id: &str, company: &str, kind: FeedbackKind) -> LookbookResult<bool> {
        let field = kind.field_name(company);
        let record = self.client.get_record(record_id)?;
        let current = matches!(record.field(&field), Some(Value::Bool(true)));
        let next = !current;

        let mut fields = Map::new();
        fields.insert(field, Value::Bool(next));
        self.client.update_fields(record_id, fields)?;

        info!(
            "event=feedback_toggled module=service status=ok table={} kind={} value={}",
            self.client.table(),
            kind.suffix(),
            next
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::FeedbackKind;

    #[test]
    fn field_name_combines_company_and_kind() {
        assert_eq!(
            FeedbackKind::ThumbsUp.field_name("Acme Ventures"),
            "Acme Ventures thumbs up"
        );
        assert_eq!(
            FeedbackKind::ThumbsNeutral.field_name("Acme"),
            "Acme thumbs neutral"
        );
    }
}
