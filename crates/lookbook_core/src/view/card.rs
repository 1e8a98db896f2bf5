//! Reusable entity cards.

use crate::model::entity::{Company, Founder, LookbookTag, Mentor};
use crate::normalize::PLACEHOLDER_IMAGE;

/// Longest subtitle shown before truncation with `...`.
pub const MAX_SUBTITLE_CHARS: usize = 80;
/// Number of tags previewed on a card before the `+N more` counter.
pub const TAG_PREVIEW_LIMIT: usize = 3;

/// Stand-in portraits for founders without a headshot on detail pages.
pub const FALLBACK_PORTRAITS: [&str; 4] = [
    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&fit=crop",
    "https://images.unsplash.com/photo-1582562124811-c09040d0a901?w=800&fit=crop",
    "https://images.unsplash.com/photo-1472396961693-142e6e269027?w=800&fit=crop",
    "https://images.unsplash.com/photo-1535268647677-300dbf3d78d1?w=800&fit=crop",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCard {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
    /// First `TAG_PREVIEW_LIMIT` tags.
    pub tags: Vec<String>,
    /// Tags not shown in `tags`.
    pub extra_tag_count: usize,
    pub badges: Vec<String>,
}

impl EntityCard {
    /// Plain-text rendering used by the command line.
    pub fn render_text(&self) -> String {
        let mut lines = vec![self.title.clone()];
        if !self.subtitle.is_empty() {
            lines.push(format!("  {}", self.subtitle));
        }
        if !self.badges.is_empty() {
            lines.push(format!("  [{}]", self.badges.join("] [")));
        }
        if !self.tags.is_empty() {
            let mut tags = format!("  tags: {}", self.tags.join(", "));
            if self.extra_tag_count > 0 {
                tags.push_str(&format!(" +{} more", self.extra_tag_count));
            }
            lines.push(tags);
        }
        lines.push(format!("  {}", self.link));
        lines.join("\n")
    }
}

/// Anything that can be rendered as a card.
pub trait CardView {
    fn card(&self) -> EntityCard;
}

impl CardView for Mentor {
    fn card(&self) -> EntityCard {
        let (tags, extra_tag_count) = tag_preview(&self.expertise);
        EntityCard {
            title: self.name.clone(),
            subtitle: role_at_company(&self.role, &self.company),
            image: self.headshot.clone(),
            link: format!("/mentors/{}", self.slug),
            tags,
            extra_tag_count,
            badges: lookbook_badges(&self.lookbook_tag),
        }
    }
}

impl CardView for Founder {
    fn card(&self) -> EntityCard {
        let (tags, extra_tag_count) = tag_preview(&self.expertise);
        let mut badges = lookbook_badges(&self.lookbook_tag);
        badges.extend(
            [
                &self.company_stage,
                &self.team_size,
                &self.funding_round,
                &self.location,
            ]
            .into_iter()
            .filter(|value| !value.is_empty())
            .cloned(),
        );
        EntityCard {
            title: self.name.clone(),
            subtitle: role_at_company(&self.role, &self.company),
            image: self.headshot.clone(),
            link: format!("/founders/{}", self.slug),
            tags,
            extra_tag_count,
            badges,
        }
    }
}

impl CardView for Company {
    fn card(&self) -> EntityCard {
        EntityCard {
            title: self.company.clone(),
            subtitle: truncate_chars(&self.one_liner, MAX_SUBTITLE_CHARS),
            image: self.logo.clone(),
            link: format!("/companies/{}", self.slug),
            tags: Vec::new(),
            extra_tag_count: 0,
            badges: self.founder_names(),
        }
    }
}

/// `"<role> at <company>"`, or whichever side is present, truncated.
pub fn role_at_company(role: &str, company: &str) -> String {
    let combined = match (role.is_empty(), company.is_empty()) {
        (false, false) => format!("{role} at {company}"),
        (false, true) => role.to_string(),
        (true, false) => company.to_string(),
        (true, true) => String::new(),
    };
    truncate_chars(&combined, MAX_SUBTITLE_CHARS)
}

/// Detail-page portrait: the headshot, or a stable stand-in chosen from the
/// sum of the name's UTF-16 code units.
pub fn founder_portrait(founder: &Founder) -> String {
    if !founder.headshot.is_empty() && founder.headshot != PLACEHOLDER_IMAGE {
        return founder.headshot.clone();
    }
    let name_sum: u64 = founder.name.encode_utf16().map(u64::from).sum();
    let index = (name_sum % FALLBACK_PORTRAITS.len() as u64) as usize;
    FALLBACK_PORTRAITS[index].to_string()
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

fn tag_preview(tags: &[String]) -> (Vec<String>, usize) {
    let shown = tags.iter().take(TAG_PREVIEW_LIMIT).cloned().collect();
    (shown, tags.len().saturating_sub(TAG_PREVIEW_LIMIT))
}

fn lookbook_badges(tags: &[LookbookTag]) -> Vec<String> {
    tags.iter().map(|tag| tag.as_str().to_string()).collect()
}
