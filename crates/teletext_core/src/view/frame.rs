//! Host-independent visual tree produced by the page renderers.
//!
//! Renderers build panels of lines of styled spans. Hosts decide how a tone or
//! emphasis looks; the plain-text renderer in [`super::plain`] is one host.

use crate::router::Page;

/// Teletext palette colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Yellow,
    Cyan,
    Magenta,
    Blue,
    Red,
    White,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Emphasis {
    #[default]
    Normal,
    Bold,
    Dim,
    /// Small boxed upper-case label.
    Tag,
}

/// Where an activated link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    SameContext,
    NewContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
    /// Overrides the panel tone when set.
    pub tone: Option<Tone>,
    pub link: Option<Link>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Normal,
            tone: None,
            link: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::plain(text).emphasis(Emphasis::Bold)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::plain(text).emphasis(Emphasis::Dim)
    }

    pub fn tag(text: impl Into<String>) -> Self {
        Self::plain(text).emphasis(Emphasis::Tag)
    }

    /// Link opening in the current context.
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::plain(text).linked(href, LinkTarget::SameContext)
    }

    /// Link opening in a new browsing context.
    pub fn external(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::plain(text).linked(href, LinkTarget::NewContext)
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    fn linked(mut self, href: impl Into<String>, target: LinkTarget) -> Self {
        self.link = Some(Link {
            href: href.into(),
            target,
        });
        self
    }
}

/// One logical row. Wraps when wider than the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
    /// Maximum wrapped rows before the host truncates with an ellipsis.
    pub clamp: Option<usize>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(span: Span) -> Self {
        Self {
            spans: vec![span],
            clamp: None,
        }
    }

    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn clamped(mut self, rows: usize) -> Self {
        self.clamp = Some(rows);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Unstyled text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Every link carried by this line.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.spans.iter().filter_map(|span| span.link.as_ref())
    }
}

/// Titled block of lines in one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: Option<String>,
    pub tone: Tone,
    pub lines: Vec<Line>,
}

impl Panel {
    pub fn new(tone: Tone) -> Self {
        Self {
            title: None,
            tone,
            lines: Vec::new(),
        }
    }

    pub fn titled(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new(tone)
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Pushes an empty spacer line unless the panel is empty.
    pub fn gap(&mut self) {
        if !self.lines.is_empty() {
            self.lines.push(Line::new());
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.lines.iter().flat_map(Line::links)
    }
}

/// One navigation tile of the tile bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTile {
    pub page: Page,
    pub tone: Tone,
    /// Tile of the page currently shown.
    pub active: bool,
    /// Tile holding pointer/keyboard focus in the tile bar.
    pub focused: bool,
}
