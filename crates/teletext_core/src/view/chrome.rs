//! Screen chrome shared by every page: header, tile bar, toolbar, footer.

use crate::model::content::OwnerProfile;
use crate::router::{Page, PAGES};

use super::frame::{Line, NavTile, Panel, Span, Tone};

pub const TOOLBAR_EXPORT_LABEL: &str = "Export JSON";
pub const TOOLBAR_IMPORT_LABEL: &str = "Import JSON";
pub const KEYBOARD_HINT: &str = "Keyboard: type 100/101/102/103/104/199";

/// Palette colour of a page's tile and panels.
pub fn page_tone(page: Page) -> Tone {
    match page {
        Page::Home => Tone::Green,
        Page::Blog => Tone::Yellow,
        Page::Ideas => Tone::Cyan,
        Page::Experiments => Tone::Magenta,
        Page::Docs => Tone::Blue,
        Page::Contact => Tone::Red,
    }
}

/// Two-row header: status bar and owner identity.
pub fn header(owner: &OwnerProfile, page: Page, clock: &str) -> Panel {
    let mut panel = Panel::new(Tone::Green);
    panel.push(
        Line::of(Span::bold(owner.domain.to_uppercase()))
            .with(Span::dim("  TELETEXT"))
            .with(Span::dim(format!("  PAGE {}", page.code())))
            .with(Span::dim(format!("  {clock}"))),
    );

    let mut identity = Line::of(Span::bold(owner.name.to_uppercase()).tone(Tone::Cyan))
        .with(Span::dim(format!(" — {}", owner.tagline)).tone(Tone::Cyan));
    if let (Some(handle), Some(url)) = (owner.visible_handle(), owner.handle_url()) {
        identity = identity
            .with(Span::plain("  "))
            .with(Span::external(format!("@{handle}"), url).tone(Tone::Cyan));
    }
    if let (Some(email), Some(mailto)) = (owner.visible_email(), owner.mailto()) {
        identity = identity
            .with(Span::plain("  "))
            .with(Span::link(email, mailto).tone(Tone::Cyan));
    }
    panel.push(identity);
    panel
}

/// One tile per routable page, in code order.
pub fn nav_tiles(current: Page, focused: Option<Page>) -> Vec<NavTile> {
    PAGES
        .into_iter()
        .map(|page| NavTile {
            page,
            tone: page_tone(page),
            active: page == current,
            focused: focused == Some(page),
        })
        .collect()
}

pub fn toolbar() -> Line {
    Line::of(Span::tag(TOOLBAR_EXPORT_LABEL))
        .with(Span::plain(" "))
        .with(Span::tag(TOOLBAR_IMPORT_LABEL))
        .with(Span::plain("  "))
        .with(Span::dim(KEYBOARD_HINT))
}

pub fn footer(owner: &OwnerProfile, year: i32) -> Line {
    Line::of(Span::dim(format!(
        "© {year} {}. Built in a Teletext style. All rights reserved.",
        owner.domain
    )))
}

#[cfg(test)]
mod tests {
    use super::{header, nav_tiles};
    use crate::model::content::ContentModel;
    use crate::router::Page;
    use crate::view::frame::LinkTarget;

    #[test]
    fn header_hides_missing_contact_points() {
        let mut owner = ContentModel::builtin().owner;
        let full = header(&owner, Page::Home, "Sun 09:00:00");
        assert_eq!(full.links().count(), 2);

        owner.email = None;
        owner.instagram_handle = Some(String::new());
        let bare = header(&owner, Page::Home, "Sun 09:00:00");
        assert_eq!(bare.links().count(), 0);
        assert!(bare.lines[0].text().contains("PAGE 100"));
    }

    #[test]
    fn handle_link_opens_in_new_context() {
        let owner = ContentModel::builtin().owner;
        let panel = header(&owner, Page::Blog, "x");
        let handle = panel.links().next().expect("handle link");
        assert_eq!(handle.href, "https://instagram.com/mrgunner.ai");
        assert_eq!(handle.target, LinkTarget::NewContext);
    }

    #[test]
    fn exactly_one_tile_is_active() {
        let tiles = nav_tiles(Page::Docs, Some(Page::Blog));
        assert_eq!(tiles.len(), 6);
        let active: Vec<Page> = tiles.iter().filter(|t| t.active).map(|t| t.page).collect();
        assert_eq!(active, vec![Page::Docs]);
        assert!(tiles.iter().any(|t| t.focused && t.page == Page::Blog));
    }
}
