//! Raw record normalization.
//!
//! # Responsibility
//! - Map one `RawRecord` into exactly one `Mentor`, `Founder` or `Company`.
//! - Own the per-kind source field names and defaults.
//!
//! # Invariants
//! - Normalization is total: absent, null or mistyped fields fall back to
//!   defaults and never produce an error.
//! - `lookbook_tag` is restricted to `Investor`/`Operator`; other values are
//!   dropped silently.

pub mod slug;

use crate::model::entity::{Company, Founder, LookbookTag, Mentor};
use crate::model::record::RawRecord;
use serde_json::Value;

pub use slug::slugify;

/// Default image for records without an attachment.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
/// Default link for records without a LinkedIn URL.
pub const PLACEHOLDER_LINK: &str = "#";
/// Default display name for people.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Normalizes one mentor row.
pub fn normalize_mentor(record: &RawRecord) -> Mentor {
    let raw_name = text(record, "Name");
    Mentor {
        id: record.id.clone(),
        slug: slugify(raw_name.as_deref().unwrap_or("mentor")),
        name: raw_name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        headshot: attachment_url(record, "Headshot")
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        linkedin_url: text_or(record, "LinkedIn", PLACEHOLDER_LINK),
        role: text_or(record, "Role", ""),
        company: text_or(record, "Company", ""),
        bio: text_or(record, "Bio", ""),
        email: text_or(record, "Email", ""),
        expertise: string_list(record, "Expertise"),
        industries: string_list(record, "Industries"),
        date: text(record, "Date"),
        lookbook_tag: lookbook_tags(record),
    }
}

/// Normalizes one founder row.
pub fn normalize_founder(record: &RawRecord) -> Founder {
    let raw_name = text(record, "Name");
    Founder {
        id: record.id.clone(),
        slug: slugify(raw_name.as_deref().unwrap_or("founder")),
        name: raw_name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        headshot: attachment_url(record, "Headshot")
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        linkedin_url: text_or(record, "LinkedIn", PLACEHOLDER_LINK),
        role: text_or(record, "Title", ""),
        company: text_or(record, "Company Name", ""),
        bio: text_or(record, "Bio", ""),
        email: text_or(record, "Email", ""),
        expertise: string_list(record, "Expertise"),
        industries: string_list(record, "Industries of Interest"),
        date: text(record, "Date"),
        lookbook_label: text_or(record, "lookbookLabel", ""),
        lookbook_tag: lookbook_tags(record),
        phone_number: text_or(record, "Cell Phone Number", ""),
        company_stage: text_or(record, "Company Stage", ""),
        company_description: text_or(record, "Company Description", ""),
        funding_round: text_or(record, "Funding Round", ""),
        team_size: text_or(record, "Team Size", ""),
        location: text_or(record, "Location", ""),
    }
}

/// Normalizes one company row.
pub fn normalize_company(record: &RawRecord) -> Company {
    let name = text_or(record, "company", "");
    Company {
        id: record.id.clone(),
        slug: slugify(&name),
        company: name,
        url: text_or(record, "URL", ""),
        company_linkedin: text_or(record, "companyLinkedIn", ""),
        logo: attachment_url(record, "logo").unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        one_liner: text_or(record, "oneLiner", ""),
        founders: text_or(record, "founders", ""),
        introductions_needed: text_or(record, "introductionsNeeded", ""),
        specific_support: text_or(record, "specificSupport", ""),
    }
}

/// Reads a field as non-empty text.
///
/// Strings pass through, numbers are formatted, and arrays of strings (lookup
/// fields) are joined with `", "`. Anything else is treated as absent.
pub fn text(record: &RawRecord, name: &str) -> Option<String> {
    let value = match record.field(name)? {
        Value::String(value) => value.clone(),
        Value::Number(value) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn text_or(record: &RawRecord, name: &str, default: &str) -> String {
    text(record, name).unwrap_or_else(|| default.to_string())
}

/// Reads the first attachment URL from an attachment-array field.
pub fn attachment_url(record: &RawRecord, name: &str) -> Option<String> {
    record
        .field(name)?
        .as_array()?
        .first()?
        .get("url")?
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

/// Reads a multi-select style field as an ordered list of strings.
///
/// Non-string elements are skipped; a bare string becomes a one-item list.
pub fn string_list(record: &RawRecord, name: &str) -> Vec<String> {
    match record.field(name) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(value)) if !value.is_empty() => vec![value.clone()],
        _ => Vec::new(),
    }
}

fn lookbook_tags(record: &RawRecord) -> Vec<LookbookTag> {
    let mut tags = Vec::new();
    for tag in string_list(record, "lookbookTag")
        .iter()
        .filter_map(|value| LookbookTag::parse(value))
    {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
