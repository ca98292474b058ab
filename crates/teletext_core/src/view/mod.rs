//! Page renderers.
//!
//! # Responsibility
//! - Map the content model (plus Blog selection) to a visual tree per page.
//! - Assemble the full screen: header, tile bar, toolbar, page body, footer
//!   and ticker.
//!
//! # Invariants
//! - Renderers are pure: they never mutate content or router state.
//! - Absent and empty optional fields render nothing, never an error.

pub mod blog;
pub mod chrome;
pub mod contact;
pub mod docs;
pub mod experiments;
pub mod format;
pub mod frame;
pub mod home;
pub mod ideas;
pub mod plain;

use chrono::{Datelike, NaiveDateTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::clock::format_clock;
use crate::model::content::ContentModel;
use crate::router::Page;
use crate::service::content_store::ContentError;

use self::blog::BlogSelection;
use self::frame::{Line, NavTile, Panel};

pub type RenderResult<T> = Result<T, RenderError>;

/// Page rendering failure caused by content that does not decode.
#[derive(Debug)]
pub enum RenderError {
    Content { page: Page, source: ContentError },
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content { page, source } => {
                write!(f, "page {} cannot be rendered: {source}", page.code())
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Content { source, .. } => Some(source),
        }
    }
}

/// Body of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: Page,
    pub panels: Vec<Panel>,
}

/// Everything a host paints for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub header: Panel,
    pub tiles: Vec<NavTile>,
    pub toolbar: Line,
    pub body: PageView,
    pub footer: Line,
    /// Scrolling loop text; hosts show a window of it at `ticker_offset`.
    pub ticker: String,
    pub ticker_offset: usize,
    /// Body rows scrolled past; hosts that show the whole page ignore it.
    pub scroll: usize,
}

/// Inputs for [`render_screen`].
#[derive(Debug, Clone, Copy)]
pub struct ScreenInput<'a> {
    pub model: &'a ContentModel,
    pub page: Page,
    /// Blog selection of the mounted Blog page; a fresh mount is assumed when `None`.
    pub blog: Option<&'a BlogSelection>,
    pub focused_tile: Option<Page>,
    pub now: NaiveDateTime,
    pub ticker: &'a str,
    pub ticker_offset: usize,
    pub scroll: usize,
}

/// Renders the body of `page`.
pub fn render_page(page: Page, model: &ContentModel, blog: Option<&BlogSelection>) -> PageView {
    let panels = match page {
        Page::Home => home::render(model),
        Page::Blog => match blog {
            Some(selection) => blog::render(model, selection),
            None => blog::render(model, &BlogSelection::mount(model)),
        },
        Page::Ideas => ideas::render(model),
        Page::Experiments => experiments::render(model),
        Page::Docs => docs::render(model),
        Page::Contact => contact::render(model),
    };
    PageView { page, panels }
}

/// Renders the whole screen for one frame.
pub fn render_screen(input: &ScreenInput<'_>) -> Screen {
    let owner = &input.model.owner;
    Screen {
        header: chrome::header(owner, input.page, format_clock(input.now).as_str()),
        tiles: chrome::nav_tiles(input.page, input.focused_tile),
        toolbar: chrome::toolbar(),
        body: render_page(input.page, input.model, input.blog),
        footer: chrome::footer(owner, input.now.year()),
        ticker: input.ticker.to_string(),
        ticker_offset: input.ticker_offset,
        scroll: input.scroll,
    }
}

#[cfg(test)]
mod tests {
    use super::{render_page, render_screen, ScreenInput};
    use crate::model::content::ContentModel;
    use crate::router::{Page, PAGES};
    use chrono::NaiveDate;

    #[test]
    fn every_page_renders_builtin_content() {
        let model = ContentModel::builtin();
        for page in PAGES {
            let view = render_page(page, &model, None);
            assert_eq!(view.page, page);
            assert!(!view.panels.is_empty(), "page {page} rendered nothing");
        }
    }

    #[test]
    fn rendering_does_not_mutate_the_model() {
        let model = ContentModel::builtin();
        let before = model.clone();
        for page in PAGES {
            let _ = render_page(page, &model, None);
        }
        assert_eq!(model, before);
    }

    #[test]
    fn footer_uses_the_clock_year() {
        let model = ContentModel::builtin();
        let now = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let screen = render_screen(&ScreenInput {
            model: &model,
            page: Page::Home,
            blog: None,
            focused_tile: None,
            now,
            ticker: "t",
            ticker_offset: 0,
            scroll: 0,
        });
        assert!(screen.footer.text().starts_with("© 2026 GunnerEmre."));
        assert!(screen.header.lines[0].text().contains("Fri 00:00:00"));
    }
}
