//! Page-number routing.
//!
//! # Responsibility
//! - Define the fixed page-code table (`100`..`104`, `199`).
//! - Hold the current page and apply `navigate` requests.
//!
//! # Invariants
//! - The code table is fixed at build time and never derived from content.
//! - Unmapped codes are dropped silently; `navigate` never errors.
//! - No history is kept; the current page is transient session state.

use log::debug;
use std::fmt::{Display, Formatter};

/// Number of digits in a page code.
pub const PAGE_CODE_LEN: usize = 3;

/// Every routable page in tile order.
pub const PAGES: [Page; 6] = [
    Page::Home,
    Page::Blog,
    Page::Ideas,
    Page::Experiments,
    Page::Docs,
    Page::Contact,
];

/// Named view selected by a page code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    Blog,
    Ideas,
    Experiments,
    Docs,
    Contact,
}

impl Page {
    pub fn code(self) -> &'static str {
        match self {
            Self::Home => "100",
            Self::Blog => "101",
            Self::Ideas => "102",
            Self::Experiments => "103",
            Self::Docs => "104",
            Self::Contact => "199",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Blog => "Blog",
            Self::Ideas => "Ideas",
            Self::Experiments => "Experiments",
            Self::Docs => "Docs",
            Self::Contact => "Contact",
        }
    }

    /// Looks up the page mapped to `code`, if any.
    pub fn from_code(code: &str) -> Option<Self> {
        PAGES.into_iter().find(|page| page.code() == code)
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.label())
    }
}

/// Three-digit code as typed by the user. May or may not map to a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageCode(String);

impl PageCode {
    /// Builds a code from exactly three ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        let valid = digits.len() == PAGE_CODE_LEN && digits.bytes().all(|b| b.is_ascii_digit());
        valid.then(|| Self(digits.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn page(&self) -> Option<Page> {
        Page::from_code(self.as_str())
    }
}

impl Display for PageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current-page state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRouter {
    current: Page,
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::starting_at(Page::Home)
    }
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(page: Page) -> Self {
        Self { current: page }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switches to the page mapped by `code`.
    ///
    /// Returns `false` (and leaves the current page unchanged) when `code` has
    /// no mapping.
    pub fn navigate(&mut self, code: &str) -> bool {
        let Some(page) = Page::from_code(code) else {
            debug!(
                "event=page_code_dropped module=router status=ignored code={}",
                code
            );
            return false;
        };
        debug!(
            "event=page_navigate module=router status=ok from={} to={}",
            self.current.code(),
            page.code()
        );
        self.current = page;
        true
    }
}
