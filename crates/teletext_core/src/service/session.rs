//! One interactive viewer session.
//!
//! # Responsibility
//! - Own the content store, the page router and the key listener registry.
//! - Keep page-local state (Blog selection, tile focus, body scroll) in
//!   step with the current page.
//! - Produce one [`Screen`] per frame for the host to paint.
//!
//! # Invariants
//! - The page-digit listener is mounted at most once per session.
//! - Blog selection exists only while the Blog page is current; entering the
//!   Blog page always starts from a fresh selection.
//! - Changing page clears tile focus and scrolls the body back to the top.
//! - Content mutations go through [`ContentStore`]; a failed import leaves
//!   every page rendering exactly as before.

use chrono::NaiveDateTime;
use log::{error, info};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use uuid::Uuid;

use crate::config::ViewerConfig;
use crate::input::digit_buffer::mount_page_digits;
use crate::input::key::Key;
use crate::input::listeners::{KeyListeners, ListenerGuard};
use crate::model::content::SECTION_BLOG;
use crate::model::entries::BlogPost;
use crate::router::{Page, PageRouter, PAGES};
use crate::service::content_store::{ContentError, ContentStore};
use crate::service::transfer::{self, ImportOutcome, TransferError, TransferResult};
use crate::ticker::{ticker_loop, TickerCache};
use crate::view::blog::BlogSelection;
use crate::view::{
    render_page, render_screen, PageView, RenderError, RenderResult, Screen, ScreenInput,
};

/// Rows moved by PageUp/PageDown.
pub const SCROLL_PAGE_ROWS: usize = 10;

/// Failures while opening a session.
#[derive(Debug)]
pub enum SessionError {
    Content(ContentError),
    Transfer(TransferError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Content(err) => write!(f, "{err}"),
            Self::Transfer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Content(err) => Some(err),
            Self::Transfer(err) => Some(err),
        }
    }
}

impl From<ContentError> for SessionError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

impl From<TransferError> for SessionError {
    fn from(value: TransferError) -> Self {
        Self::Transfer(value)
    }
}

pub struct PortfolioSession {
    id: Uuid,
    store: ContentStore,
    router: Rc<RefCell<PageRouter>>,
    listeners: KeyListeners,
    page_digits: Option<ListenerGuard>,
    blog: Option<BlogSelection>,
    focused_tile: Option<Page>,
    ticker: TickerCache,
    ticker_offset: usize,
    scroll: usize,
    /// Revision whose render failure was already logged.
    failed_revision: Cell<Option<u64>>,
}

impl PortfolioSession {
    /// Starts a session on `start` with the page-digit listener mounted.
    pub fn new(store: ContentStore, start: Page) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            store,
            router: Rc::new(RefCell::new(PageRouter::starting_at(start))),
            listeners: KeyListeners::new(),
            page_digits: None,
            blog: None,
            focused_tile: None,
            ticker: TickerCache::new(),
            ticker_offset: 0,
            scroll: 0,
            failed_revision: Cell::new(None),
        };
        session.mount();
        session.sync_blog_mount();
        info!(
            "event=session_start module=session status=ok session_id={} page={} revision={}",
            session.id,
            start.code(),
            session.store.revision()
        );
        session
    }

    /// Session over the built-in content, starting at Home.
    pub fn with_builtin_content() -> Result<Self, ContentError> {
        Ok(Self::new(ContentStore::builtin()?, Page::Home))
    }

    /// Session described by `config`: built-in content, optionally merged
    /// with the configured content file.
    pub fn open(config: &ViewerConfig) -> Result<Self, SessionError> {
        let mut store = ContentStore::builtin()?;
        if let Some(path) = &config.content_path {
            transfer::import_file(&mut store, path)?;
        }
        Ok(Self::new(store, config.start_page))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_page(&self) -> Page {
        self.router.borrow().current()
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Selected post id while the Blog page is current.
    pub fn selected_post(&self) -> Option<&str> {
        self.blog.as_ref().and_then(BlogSelection::selected)
    }

    pub fn focused_tile(&self) -> Option<Page> {
        self.focused_tile
    }

    pub fn ticker_offset(&self) -> usize {
        self.ticker_offset
    }

    /// Body rows scrolled past on the current page.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scrolls the body by `delta` rows, stopping at the top.
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    /// Caps the scroll at `max` rows, as measured by the host.
    pub fn limit_scroll(&mut self, max: usize) {
        self.scroll = self.scroll.min(max);
    }

    /// Number of mounted key listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.page_digits.is_some()
    }

    /// Mounts the page-digit listener unless it already is.
    pub fn mount(&mut self) {
        if self.page_digits.is_some() {
            return;
        }
        let router = Rc::clone(&self.router);
        self.page_digits = Some(mount_page_digits(&self.listeners, move |code| {
            router.borrow_mut().navigate(code.as_str());
        }));
    }

    /// Unmounts the page-digit listener; pending digits are discarded.
    pub fn unmount(&mut self) {
        self.page_digits = None;
    }

    /// Direct navigation, as done by activating a tile.
    pub fn navigate(&mut self, code: &str) -> bool {
        let before = self.current_page();
        let switched = self.router.borrow_mut().navigate(code);
        self.sync_page(before);
        switched
    }

    /// Delivers one key burst.
    ///
    /// Every mounted listener sees the whole burst first; arrow keys and
    /// Enter then drive tile focus and Blog selection, PageUp/PageDown and
    /// `k`/`j` scroll the body.
    pub fn handle_keys(&mut self, keys: &[Key]) {
        let before = self.current_page();
        self.listeners.dispatch(keys);
        self.sync_page(before);
        for key in keys {
            match key {
                Key::Left => self.move_focus(-1),
                Key::Right => self.move_focus(1),
                Key::Enter => {
                    if let Some(page) = self.focused_tile {
                        self.navigate(page.code());
                    }
                }
                Key::Up => self.step_post(-1),
                Key::Down => self.step_post(1),
                Key::PageUp => self.scroll_by(-(SCROLL_PAGE_ROWS as isize)),
                Key::PageDown => self.scroll_by(SCROLL_PAGE_ROWS as isize),
                Key::Char('k') => self.scroll_by(-1),
                Key::Char('j') => self.scroll_by(1),
                _ => {}
            }
        }
    }

    /// Selects post `id` on the Blog page.
    ///
    /// Returns `false` when the Blog page is not current or no post has `id`.
    pub fn select_post(&mut self, id: &str) -> bool {
        if self.blog.is_none() || !self.blog_posts().iter().any(|post| post.id == id) {
            return false;
        }
        if let Some(selection) = self.blog.as_mut() {
            selection.select(id);
        }
        true
    }

    pub fn export_json(&self) -> TransferResult<String> {
        transfer::export_json(&self.store)
    }

    pub fn export_to_dir(&self, dir: &Path) -> TransferResult<PathBuf> {
        transfer::export_to_dir(&self.store, dir)
    }

    pub fn import_json(&mut self, text: &str) -> TransferResult<ImportOutcome> {
        transfer::import_json(&mut self.store, text)
    }

    pub fn import_file(&mut self, path: &Path) -> TransferResult<ImportOutcome> {
        transfer::import_file(&mut self.store, path)
    }

    /// Scrolls the ticker `step` characters.
    pub fn advance_ticker(&mut self, step: usize) {
        self.ticker_offset = self.ticker_offset.wrapping_add(step);
    }

    /// Body of the current page, without chrome.
    pub fn render_page(&self) -> RenderResult<PageView> {
        let page = self.current_page();
        let model = self
            .store
            .model()
            .map_err(|source| self.render_failed(page, source))?;
        Ok(render_page(page, &model, self.blog.as_ref()))
    }

    /// Full screen for the frame shown at `now`.
    pub fn render(&mut self, now: NaiveDateTime) -> RenderResult<Screen> {
        let page = self.current_page();
        let model = self
            .store
            .model()
            .map_err(|source| self.render_failed(page, source))?;
        let ticker = match self.ticker.get(&self.store) {
            Ok(text) => ticker_loop(text),
            Err(source) => return Err(self.render_failed(page, source)),
        };
        Ok(render_screen(&ScreenInput {
            model: &model,
            page,
            blog: self.blog.as_ref(),
            focused_tile: self.focused_tile,
            now,
            ticker: ticker.as_str(),
            ticker_offset: self.ticker_offset,
            scroll: self.scroll,
        }))
    }

    /// Logs a render failure once per content revision.
    fn render_failed(&self, page: Page, source: ContentError) -> RenderError {
        let revision = self.store.revision();
        if self.failed_revision.replace(Some(revision)) != Some(revision) {
            error!(
                "event=render_failed module=session status=error page={} section={} revision={} error_code=malformed_content",
                page.code(),
                source.section(),
                revision
            );
        }
        RenderError::Content { page, source }
    }

    fn move_focus(&mut self, delta: isize) {
        let from = self.focused_tile.unwrap_or_else(|| self.current_page());
        let index = PAGES.iter().position(|page| *page == from).unwrap_or(0);
        let len = PAGES.len() as isize;
        let target = (index as isize + delta).rem_euclid(len) as usize;
        self.focused_tile = Some(PAGES[target]);
    }

    fn step_post(&mut self, delta: isize) {
        if self.blog.is_none() {
            return;
        }
        let posts = self.blog_posts();
        if let Some(selection) = self.blog.as_mut() {
            selection.step(&posts, delta);
        }
    }

    /// Blog posts as currently stored; an unreadable section has no posts.
    fn blog_posts(&self) -> Vec<BlogPost> {
        self.store.section(SECTION_BLOG).unwrap_or_default()
    }

    /// Resets page-local state when the current page is no longer `before`.
    fn sync_page(&mut self, before: Page) {
        if self.current_page() != before {
            self.focused_tile = None;
            self.scroll = 0;
        }
        self.sync_blog_mount();
    }

    fn sync_blog_mount(&mut self) {
        let on_blog = self.current_page() == Page::Blog;
        match (on_blog, self.blog.is_some()) {
            (true, false) => self.blog = Some(BlogSelection::first_of(&self.blog_posts())),
            (false, true) => self.blog = None,
            _ => {}
        }
    }
}

impl Drop for PortfolioSession {
    fn drop(&mut self) {
        info!(
            "event=session_end module=session status=ok session_id={} page={}",
            self.id,
            self.current_page().code()
        );
    }
}
