//! Page 199: contact points and social links.

use crate::model::content::ContentModel;
use crate::model::visible;

use super::frame::{Line, Panel, Span, Tone};

pub const CONTACT_HINT: &str = "Press 199 to jump here via keyboard.";
const WEBSITE_NETWORK: &str = "website";

pub fn render(model: &ContentModel) -> Vec<Panel> {
    vec![get_in_touch(model), socials(model)]
}

fn get_in_touch(model: &ContentModel) -> Panel {
    let owner = &model.owner;
    let mut panel = Panel::titled("Get in touch", Tone::Red);
    if let (Some(email), Some(mailto)) = (owner.visible_email(), owner.mailto()) {
        panel.push(Line::of(Span::link(email, mailto)));
    }
    if let (Some(handle), Some(url)) = (owner.visible_handle(), owner.handle_url()) {
        panel.push(Line::of(Span::external(format!("@{handle}"), url)));
    }
    if let Some(website) = visible(owner.socials.get(WEBSITE_NETWORK)) {
        panel.push(Line::of(Span::external(website, website)));
    }
    panel
}

fn socials(model: &ContentModel) -> Panel {
    let mut panel = Panel::titled("Socials", Tone::White);
    let mut links = Line::new();
    for (index, (network, url)) in model.owner.socials.visible().enumerate() {
        if index > 0 {
            links = links.with(Span::plain("  "));
        }
        links = links.with(Span::external(network, url));
    }
    if !links.is_empty() {
        panel.push(links);
    }
    panel.push(Line::of(Span::dim(CONTACT_HINT)));
    panel
}
