//! Page 101: post list plus detail panel.
//!
//! # Invariants
//! - The selected post id is local to the mounted Blog page; changing it never
//!   touches the router.
//! - A fresh mount selects the first post, or nothing when there are no posts.
//! - A selected id that no longer exists renders the placeholder.

use crate::model::content::ContentModel;
use crate::model::entries::BlogPost;
use crate::model::visible;

use super::format::format_date;
use super::frame::{Line, Panel, Span, Tone};
use super::home::tag_line;

pub const SELECT_A_POST: &str = "Select a post.";
pub const READ_EXTERNAL_LABEL: &str = "Read external";
const SELECTED_MARKER: &str = "▶ ";

/// Local selection state of the Blog page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogSelection {
    selected: Option<String>,
}

impl BlogSelection {
    /// Selection of a freshly mounted Blog page.
    pub fn mount(model: &ContentModel) -> Self {
        Self::first_of(&model.blog)
    }

    pub fn first_of(posts: &[BlogPost]) -> Self {
        Self {
            selected: posts.first().map(|post| post.id.clone()),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    /// Moves the selection `delta` posts through the list, clamped at the ends.
    ///
    /// An unknown or empty selection moves to the first post.
    pub fn step(&mut self, posts: &[BlogPost], delta: isize) {
        let Some(last) = posts.len().checked_sub(1) else {
            return;
        };
        let position = self
            .selected
            .as_deref()
            .and_then(|id| posts.iter().position(|post| post.id == id));
        let target = match position {
            Some(index) => index.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.selected = Some(posts[target].id.clone());
    }
}

pub fn render(model: &ContentModel, selection: &BlogSelection) -> Vec<Panel> {
    vec![post_list(model, selection), post_detail(model, selection)]
}

fn post_list(model: &ContentModel, selection: &BlogSelection) -> Panel {
    let mut panel = Panel::new(Tone::Yellow);
    for post in &model.blog {
        let marker = if selection.selected() == Some(post.id.as_str()) {
            SELECTED_MARKER
        } else {
            ""
        };
        panel.gap();
        panel.push(
            Line::of(Span::bold(format!("{marker}{}", post.title)))
                .with(Span::dim(format!("  {}", format_date(post.date)))),
        );
        panel.push(Line::of(Span::plain(post.summary.as_str())).clamped(2));
        if !post.tags.is_empty() {
            panel.push(tag_line(&post.tags));
        }
    }
    panel
}

fn post_detail(model: &ContentModel, selection: &BlogSelection) -> Panel {
    let Some(post) = selection.selected().and_then(|id| model.find_post(id)) else {
        let mut placeholder = Panel::new(Tone::Yellow);
        placeholder.push(Line::of(Span::plain(SELECT_A_POST)));
        return placeholder;
    };

    let mut panel = Panel::titled(post.title.as_str(), Tone::Yellow);
    // Body keeps its own line breaks.
    for paragraph in post.content.split('\n') {
        panel.push(Line::of(Span::plain(paragraph)));
    }
    if let Some(url) = visible(post.external_url.as_deref()) {
        panel.push(Line::new());
        panel.push(Line::of(Span::external(READ_EXTERNAL_LABEL, url)));
    }
    panel
}

#[cfg(test)]
mod tests {
    use super::{render, BlogSelection, SELECT_A_POST};
    use crate::model::content::ContentModel;

    #[test]
    fn mount_selects_first_post_or_nothing() {
        let mut model = ContentModel::builtin();
        assert_eq!(
            BlogSelection::mount(&model).selected(),
            Some("welcome-teletext")
        );
        model.blog.clear();
        assert_eq!(BlogSelection::mount(&model).selected(), None);
    }

    #[test]
    fn empty_blog_renders_placeholder() {
        let mut model = ContentModel::builtin();
        model.blog.clear();
        let panels = render(&model, &BlogSelection::mount(&model));
        assert!(panels[0].lines.is_empty());
        assert_eq!(panels[1].lines[0].text(), SELECT_A_POST);
    }

    #[test]
    fn stale_selection_renders_placeholder() {
        let model = ContentModel::builtin();
        let mut selection = BlogSelection::mount(&model);
        selection.select("gone");
        let panels = render(&model, &selection);
        assert_eq!(panels[1].title, None);
        assert_eq!(panels[1].lines[0].text(), SELECT_A_POST);
    }

    #[test]
    fn step_clamps_at_both_ends() {
        let model = ContentModel::builtin();
        let mut selection = BlogSelection::default();
        selection.step(&model.blog, 1);
        assert_eq!(selection.selected(), Some("welcome-teletext"));
        selection.step(&model.blog, 5);
        assert_eq!(selection.selected(), Some("ai-outreach"));
        selection.step(&model.blog, -9);
        assert_eq!(selection.selected(), Some("welcome-teletext"));
    }
}
