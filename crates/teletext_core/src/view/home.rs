//! Page 100: landing overview.

use crate::model::content::ContentModel;
use crate::model::visible;

use super::format::format_date;
use super::frame::{Emphasis, Line, Panel, Span, Tone};

/// Blog cards shown on the landing page.
pub const HOME_BLOG_LIMIT: usize = 4;
/// Experiments listed on the landing page.
pub const HOME_EXPERIMENT_LIMIT: usize = 3;

const FALLBACK_HREF: &str = "#";

pub fn render(model: &ContentModel) -> Vec<Panel> {
    vec![
        latest_updates(model),
        from_the_blog(model),
        now(model),
        experiments(model),
        docs(model),
    ]
}

fn latest_updates(model: &ContentModel) -> Panel {
    let mut panel = Panel::titled("Latest Updates", Tone::Green);
    for update in &model.updates {
        let href = visible(update.url.as_deref()).unwrap_or(FALLBACK_HREF);
        panel.push(
            Line::of(Span::dim(format_date(update.date)))
                .with(Span::plain(" "))
                .with(Span::tag(update.kind.as_str()))
                .with(Span::plain(" "))
                .with(Span::link(update.text.as_str(), href)),
        );
    }
    panel
}

fn from_the_blog(model: &ContentModel) -> Panel {
    let mut panel = Panel::titled("From the Blog", Tone::Yellow);
    for post in model.blog.iter().take(HOME_BLOG_LIMIT) {
        let href = match visible(post.external_url.as_deref()) {
            Some(url) => url.to_string(),
            None => format!("#post-{}", post.id),
        };
        panel.gap();
        panel.push(Line::of(Span::dim(format_date(post.date))));
        panel.push(Line::of(
            Span::link(post.title.as_str(), href).emphasis(Emphasis::Bold),
        ));
        panel.push(Line::of(Span::plain(post.summary.as_str())).clamped(2));
        if !post.tags.is_empty() {
            panel.push(tag_line(&post.tags));
        }
    }
    panel
}

fn now(model: &ContentModel) -> Panel {
    let mut panel = Panel::titled("Now", Tone::Cyan);
    panel.push(Line::of(Span::plain(model.now.as_str())));
    panel
}

fn experiments(model: &ContentModel) -> Panel {
    let mut panel = Panel::titled("Experiments", Tone::Magenta);
    for experiment in model.experiments.iter().take(HOME_EXPERIMENT_LIMIT) {
        let href = visible(experiment.link.as_deref()).unwrap_or(FALLBACK_HREF);
        panel.push(
            Line::of(Span::dim(format!("{} ", format_date(experiment.date))))
                .with(Span::link(experiment.title.as_str(), href).emphasis(Emphasis::Bold)),
        );
    }
    panel
}

fn docs(model: &ContentModel) -> Panel {
    let mut panel = Panel::titled("Docs", Tone::Blue);
    for doc in &model.docs {
        panel.push(Line::of(Span::plain(format!("→ {}", doc.title))));
    }
    panel
}

/// Row of boxed tag labels.
pub(crate) fn tag_line(tags: &[String]) -> Line {
    let mut line = Line::new();
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            line = line.with(Span::plain(" "));
        }
        line = line.with(Span::tag(tag.as_str()));
    }
    line
}
