//! Page 104: documentation pages.

use crate::model::content::ContentModel;

use super::frame::{Line, Panel, Span, Tone};

pub fn render(model: &ContentModel) -> Vec<Panel> {
    model
        .docs
        .iter()
        .map(|doc| {
            let mut panel = Panel::titled(doc.title.as_str(), Tone::Blue);
            for section in &doc.sections {
                panel.gap();
                panel.push(Line::of(Span::dim(section.heading.to_uppercase())));
                panel.push(Line::of(Span::plain(section.paragraph.as_str())));
            }
            panel
        })
        .collect()
}
