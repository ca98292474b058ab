//! Feed, blog, idea, experiment and doc entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the "Latest Updates" feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub date: NaiveDate,
    /// Free-form short tag such as `experiment` or `blog`.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Blog post with a stable selection key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Stable across sessions; used as the Blog view selection key.
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub content: String,
    /// When set (and non-empty) the canonical read location is external.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

/// Styling category derived from the free-form idea status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaStatus {
    New,
    Prototyping,
    Done,
    /// Any status string outside the recognised set.
    Other,
}

impl IdeaStatus {
    /// Classifies a raw status string. Unknown values never fail.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "new" => Self::New,
            "prototyping" => Self::Prototyping,
            "done" => Self::Done,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    /// Open-ended; see [`IdeaStatus::classify`].
    pub status: String,
    pub note: String,
}

impl Idea {
    pub fn status_kind(&self) -> IdeaStatus {
        IdeaStatus::classify(self.status.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    pub title: String,
    pub date: NaiveDate,
    pub hypothesis: String,
    pub method: String,
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One heading/paragraph pair inside a doc page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    #[serde(rename = "h")]
    pub heading: String,
    #[serde(rename = "p")]
    pub paragraph: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocPage {
    pub title: String,
    pub sections: Vec<DocSection>,
}
