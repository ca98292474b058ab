//! Content aggregate root.
//!
//! # Responsibility
//! - Own the owner profile, the "now" line and every ordered content list.
//! - Name the top-level sections of the exported JSON document.
//!
//! # Invariants
//! - The aggregate has exactly the sections listed in [`CONTENT_SECTIONS`].
//! - The model carries no behaviour beyond lookups; views never mutate it.

use serde::{Deserialize, Serialize};

use super::entries::{BlogPost, DocPage, Experiment, Idea, UpdateItem};
use super::socials::SocialLinks;
use super::visible;

pub const SECTION_OWNER: &str = "owner";
pub const SECTION_NOW: &str = "now";
pub const SECTION_UPDATES: &str = "updates";
pub const SECTION_BLOG: &str = "blog";
pub const SECTION_IDEAS: &str = "ideas";
pub const SECTION_EXPERIMENTS: &str = "experiments";
pub const SECTION_DOCS: &str = "docs";

/// Top-level keys of the content document, in export order.
pub const CONTENT_SECTIONS: [&str; 7] = [
    SECTION_OWNER,
    SECTION_NOW,
    SECTION_UPDATES,
    SECTION_BLOG,
    SECTION_IDEAS,
    SECTION_EXPERIMENTS,
    SECTION_DOCS,
];

/// Site owner identity and contact points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    pub name: String,
    /// Short brand label shown in the header and ticker.
    pub domain: String,
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(default)]
    pub socials: SocialLinks,
}

impl OwnerProfile {
    pub fn visible_email(&self) -> Option<&str> {
        visible(self.email.as_deref())
    }

    pub fn visible_handle(&self) -> Option<&str> {
        visible(self.instagram_handle.as_deref())
    }

    /// Profile URL derived from the social handle.
    pub fn handle_url(&self) -> Option<String> {
        self.visible_handle()
            .map(|handle| format!("https://instagram.com/{handle}"))
    }

    pub fn mailto(&self) -> Option<String> {
        self.visible_email().map(|email| format!("mailto:{email}"))
    }
}

/// Single in-memory aggregate driving every view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentModel {
    pub owner: OwnerProfile,
    /// Free-text "what I'm doing now" line.
    pub now: String,
    pub updates: Vec<UpdateItem>,
    pub blog: Vec<BlogPost>,
    pub ideas: Vec<Idea>,
    pub experiments: Vec<Experiment>,
    pub docs: Vec<DocPage>,
}

impl ContentModel {
    pub fn find_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog.iter().find(|post| post.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentModel, CONTENT_SECTIONS};

    #[test]
    fn serialized_model_has_exactly_the_content_sections_in_order() {
        let model = ContentModel::builtin();
        let value = serde_json::to_value(&model).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .expect("model serializes as an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, CONTENT_SECTIONS.to_vec());
    }

    #[test]
    fn owner_links_are_hidden_when_empty() {
        let mut owner = ContentModel::builtin().owner;
        owner.email = Some(String::new());
        owner.instagram_handle = None;
        assert_eq!(owner.mailto(), None);
        assert_eq!(owner.handle_url(), None);

        owner.email = Some("me@example.com".to_string());
        assert_eq!(owner.mailto().as_deref(), Some("mailto:me@example.com"));
    }
}
