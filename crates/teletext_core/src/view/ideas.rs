//! Page 102: idea cards with status labels.

use crate::model::content::ContentModel;
use crate::model::entries::IdeaStatus;

use super::frame::{Line, Panel, Span, Tone};

/// Label colour for an idea status. Unrecognised statuses use the default.
pub fn status_tone(status: IdeaStatus) -> Tone {
    match status {
        IdeaStatus::Done => Tone::Green,
        IdeaStatus::Prototyping => Tone::Yellow,
        IdeaStatus::New | IdeaStatus::Other => Tone::Cyan,
    }
}

pub fn render(model: &ContentModel) -> Vec<Panel> {
    model
        .ideas
        .iter()
        .map(|idea| {
            let mut panel = Panel::new(Tone::Cyan);
            panel.push(
                Line::of(Span::bold(idea.title.as_str()))
                    .with(Span::plain("  "))
                    .with(Span::tag(idea.status.as_str()).tone(status_tone(idea.status_kind()))),
            );
            panel.push(Line::of(Span::plain(idea.note.as_str())));
            panel
        })
        .collect()
}
