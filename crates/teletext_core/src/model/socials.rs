//! Ordered social-network link mapping.
//!
//! # Invariants
//! - Insertion order is preserved and is the display order.
//! - Network names are unique; re-inserting a name replaces its URL in place.
//! - A `None` or empty URL means the link is hidden, never an error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::visible;

/// Social links keyed by network name, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(IndexMap<String, Option<String>>);

impl SocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the URL for `network`.
    pub fn insert(&mut self, network: impl Into<String>, url: Option<String>) {
        self.0.insert(network.into(), url);
    }

    /// Raw stored URL for `network`, including empty strings.
    pub fn get(&self, network: &str) -> Option<&str> {
        self.0.get(network).and_then(|url| url.as_deref())
    }

    /// Links that should be rendered: non-empty URLs in stored order.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(network, url)| {
            visible(url.as_deref()).map(|url| (network.as_str(), url))
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Option<String>)> for SocialLinks {
    fn from_iter<T: IntoIterator<Item = (N, Option<String>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(network, url)| (network.into(), url))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SocialLinks;

    #[test]
    fn insert_replaces_in_place_and_keeps_order() {
        let mut links = SocialLinks::new();
        links.insert("instagram", Some("https://instagram.com/a".to_string()));
        links.insert("github", None);
        links.insert("instagram", Some("https://instagram.com/b".to_string()));

        let shown: Vec<(&str, &str)> = links.visible().collect();
        assert_eq!(shown, vec![("instagram", "https://instagram.com/b")]);
        assert_eq!(links.len(), 2);
        assert_eq!(
            serde_json::to_string(&links).unwrap(),
            r#"{"instagram":"https://instagram.com/b","github":null}"#
        );
    }

    #[test]
    fn visible_skips_empty_and_null_urls() {
        let links: SocialLinks = serde_json::from_value(serde_json::json!({
            "instagram": "",
            "github": null,
            "website": "https://x"
        }))
        .unwrap();

        let shown: Vec<(&str, &str)> = links.visible().collect();
        assert_eq!(shown, vec![("website", "https://x")]);
        assert_eq!(links.len(), 3);
        assert_eq!(links.get("instagram"), Some(""));
    }

    #[test]
    fn serializes_back_in_stored_order() {
        let links: SocialLinks = [
            ("x", Some("https://x.com/".to_string())),
            ("website", Some(String::new())),
        ]
        .into_iter()
        .collect();

        let text = serde_json::to_string(&links).unwrap();
        assert_eq!(text, r#"{"x":"https://x.com/","website":""}"#);
    }

    #[test]
    fn rejects_non_string_urls() {
        let err = serde_json::from_value::<SocialLinks>(serde_json::json!({ "x": 42 }))
            .expect_err("numbers are not URLs");
        assert!(err.to_string().contains("invalid type"));
    }
}
