//! Mentor description generation through the text helper.

use crate::error::LookbookResult;
use crate::model::entity::Mentor;
use crate::remote::exa::ExaClient;
use log::info;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that creates concise, professional \
descriptions of mentors based on their background. Focus on their expertise, experience, and \
value they can bring to startups.";

/// Builds the user prompt listing the mentor's structured attributes.
///
/// Empty attributes are rendered as `N/A`.
pub fn mentor_prompt(mentor: &Mentor) -> String {
    let or_na = |value: &str| {
        if value.trim().is_empty() {
            "N/A".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "Create a concise, professional description for this mentor:\n\
         Name: {}\n\
         Role: {}\n\
         Company: {}\n\
         Bio: {}\n\
         Expertise: {}\n\
         Industries: {}\n\n\
         The description should highlight their background, expertise, and the value they can \
         bring to startups.\n\
         Keep it under 150 words and focus on their professional strengths.",
        mentor.name,
        or_na(&mentor.role),
        or_na(&mentor.company),
        or_na(&mentor.bio),
        or_na(&mentor.expertise.join(", ")),
        or_na(&mentor.industries.join(", ")),
    )
}

pub struct DescriptionService {
    client: ExaClient,
}

impl DescriptionService {
    pub fn new(client: ExaClient) -> Self {
        Self { client }
    }

    pub fn describe_mentor(&self, mentor: &Mentor) -> LookbookResult<String> {
        let description = self.client.complete(SYSTEM_PROMPT, &mentor_prompt(mentor))?;
        info!(
            "event=description_generated module=service status=ok chars={}",
            description.chars().count()
        );
        Ok(description)
    }
}
