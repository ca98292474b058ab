//! Scrolling status ticker.
//!
//! # Responsibility
//! - Derive the ticker text from the owner, "now" and update sections.
//! - Cache the derived text per content revision.
//!
//! # Invariants
//! - The ticker is never edited independently; it is recomputed whenever the
//!   content revision changes.

use crate::model::content::{OwnerProfile, SECTION_NOW, SECTION_OWNER, SECTION_UPDATES};
use crate::model::entries::UpdateItem;
use crate::service::content_store::{ContentError, ContentStore};
use crate::view::format::format_date;

/// Separator between ticker segments.
pub const SEGMENT_SEPARATOR: &str = "  •  ";
/// Separator between repetitions of the ticker text in the scrolling loop.
pub const LOOP_SEPARATOR: &str = " • ";
const LOOP_REPEATS: usize = 3;

/// Builds the ticker text from its source sections.
pub fn derive_ticker(owner: &OwnerProfile, now: &str, updates: &[UpdateItem]) -> String {
    let mut segments = Vec::with_capacity(updates.len() + 3);
    segments.push(format!("{} // {}", owner.domain, owner.tagline));
    segments.push(format!("Now: {now}"));
    for update in updates {
        segments.push(format!(
            "{} {} — {}",
            update.kind.to_uppercase(),
            format_date(update.date),
            update.text
        ));
    }
    let hint = match owner.visible_handle() {
        Some(handle) => format!("Press 100-199 to navigate • Follow @{handle}"),
        None => "Press 100-199 to navigate".to_string(),
    };
    segments.push(hint);
    segments.join(SEGMENT_SEPARATOR)
}

/// Text repeated for a seamless scrolling loop.
pub fn ticker_loop(text: &str) -> String {
    vec![text; LOOP_REPEATS].join(LOOP_SEPARATOR)
}

/// `width` characters of the loop starting at `offset`, wrapping around.
pub fn ticker_window(loop_text: &str, offset: usize, width: usize) -> String {
    let chars: Vec<char> = loop_text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    (0..width)
        .map(|i| chars[(offset + i) % chars.len()])
        .collect()
}

/// Ticker text memoized by content revision.
#[derive(Debug, Clone, Default)]
pub struct TickerCache {
    revision: Option<u64>,
    text: String,
}

impl TickerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ticker for the store's current revision.
    pub fn get(&mut self, store: &ContentStore) -> Result<&str, ContentError> {
        if self.revision != Some(store.revision()) {
            let owner: OwnerProfile = store.section(SECTION_OWNER)?;
            let now: String = store.section(SECTION_NOW)?;
            let updates: Vec<UpdateItem> = store.section(SECTION_UPDATES)?;
            self.text = derive_ticker(&owner, now.as_str(), &updates);
            self.revision = Some(store.revision());
        }
        Ok(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_ticker, ticker_loop, ticker_window, TickerCache};
    use crate::model::content::ContentModel;
    use crate::service::content_store::ContentStore;
    use crate::service::transfer::import_json;

    #[test]
    fn ticker_lists_identity_now_updates_and_hint() {
        let model = ContentModel::builtin();
        let text = derive_ticker(&model.owner, &model.now, &model.updates);
        assert!(text.starts_with("GunnerEmre // Build • Test • Learn  •  Now: Shipping"));
        assert!(text.contains("EXPERIMENT Aug 24, 2025 — Cold outreach"));
        assert!(text.contains("BLOG Aug 22, 2025 — Why retro UX converts"));
        assert!(text.ends_with("Press 100-199 to navigate • Follow @mrgunner.ai"));
    }

    #[test]
    fn hint_omits_follow_when_handle_is_empty() {
        let mut model = ContentModel::builtin();
        model.owner.instagram_handle = Some(String::new());
        let text = derive_ticker(&model.owner, &model.now, &[]);
        assert!(text.ends_with("Press 100-199 to navigate"));
    }

    #[test]
    fn window_wraps_around_the_loop() {
        let looped = ticker_loop("ab");
        assert_eq!(looped, "ab • ab • ab");
        assert_eq!(ticker_window("abc", 2, 4), "cabc");
        assert_eq!(ticker_window("", 2, 4), "");
    }

    #[test]
    fn cache_recomputes_after_content_changes() {
        let mut store = ContentStore::builtin().unwrap();
        let mut cache = TickerCache::new();
        assert!(cache.get(&store).unwrap().contains("Now: Shipping"));

        import_json(&mut store, r#"{"now": "On holiday."}"#).unwrap();
        assert!(cache.get(&store).unwrap().contains("Now: On holiday."));
    }
}
