//! Page 103: experiment log.

use crate::model::content::ContentModel;
use crate::model::visible;

use super::format::format_date;
use super::frame::{Line, Panel, Span, Tone};

pub const DETAILS_LABEL: &str = "Details";

pub fn render(model: &ContentModel) -> Vec<Panel> {
    model
        .experiments
        .iter()
        .map(|experiment| {
            let mut panel = Panel::new(Tone::Magenta);
            panel.push(Line::of(Span::bold(experiment.title.as_str())));
            panel.push(Line::of(Span::dim(format_date(experiment.date))));
            for (label, body) in [
                ("Hypothesis", Span::plain(experiment.hypothesis.as_str())),
                ("Method", Span::plain(experiment.method.as_str())),
                ("Result", Span::bold(experiment.result.as_str())),
            ] {
                panel.push(Line::of(Span::dim(label.to_uppercase())));
                panel.push(Line::of(body));
            }
            if let Some(link) = visible(experiment.link.as_deref()) {
                panel.push(Line::of(Span::external(DETAILS_LABEL, link)));
            }
            panel
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{render, DETAILS_LABEL};
    use crate::model::content::ContentModel;

    #[test]
    fn details_link_only_when_present() {
        let mut model = ContentModel::builtin();
        model.experiments[1].link = None;
        let panels = render(&model);
        assert_eq!(panels.len(), 2);
        assert!(panels[0]
            .lines
            .iter()
            .any(|line| line.text() == DETAILS_LABEL));
        assert_eq!(panels[1].links().count(), 0);
    }
}
