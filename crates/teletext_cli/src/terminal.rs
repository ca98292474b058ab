//! Crossterm host: lays a [`Screen`] out as styled rows and paints them.
//!
//! # Invariants
//! - Layout is pure; only [`paint`] and [`TerminalGuard`] touch the terminal.
//! - The ticker always occupies the last row, the overlay the row above it.
//! - Header, tiles and toolbar stay put; only the page body and footer scroll.

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{debug, warn};
use std::io::{self, Write};
use teletext_core::ticker::ticker_window;
use teletext_core::view::format::{fit, wrap};
use teletext_core::view::frame::{Emphasis, Line, Span, Tone};
use teletext_core::view::plain::{line_rows, span_text, tile_text};
use teletext_core::{RenderError, Screen};

use crate::app::Modal;

const RESERVED_ROWS: usize = 2;
const IMPORT_PROMPT: &str = "Import JSON file: ";
const ALERT_SUFFIX: &str = "  (press any key)";
const UNAVAILABLE_HINT: &str = "Press i to import corrected JSON, q to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Normal,
    Bold,
    Dim,
    Reverse,
    Underline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
    pub style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, tone: Tone, style: Style) -> Self {
        Self {
            text: text.into(),
            tone,
            style,
        }
    }
}

pub type Row = Vec<Segment>;

/// Raw mode plus alternate screen for the lifetime of the guard.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        debug!("event=terminal_enter module=cli status=ok");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen) {
            warn!("event=terminal_leave module=cli status=error error={}", err);
        }
        let _ = terminal::disable_raw_mode();
    }
}

/// Current terminal size as `(width, height)` in cells.
pub fn size() -> io::Result<(usize, usize)> {
    let (width, height) = terminal::size()?;
    Ok((usize::from(width), usize::from(height)))
}

/// Lays out one frame into exactly `height` rows when `height` allows it.
pub fn layout(
    frame: Result<&Screen, &RenderError>,
    modal: Option<&Modal>,
    status: Option<&str>,
    width: usize,
    height: usize,
) -> Vec<Row> {
    let body_rows = height.saturating_sub(RESERVED_ROWS);
    let mut rows = match frame {
        Ok(screen) => {
            let (mut fixed, scrolled) = screen_rows(screen, width);
            let visible = body_rows.saturating_sub(fixed.len());
            let skip = screen.scroll.min(scrolled.len().saturating_sub(visible));
            fixed.extend(scrolled.into_iter().skip(skip));
            fixed
        }
        Err(err) => error_rows(err, width),
    };
    rows.truncate(body_rows);
    rows.resize(body_rows, Row::new());

    if height >= RESERVED_ROWS {
        rows.push(overlay_row(modal, status, width));
        let ticker = match frame {
            Ok(screen) => vec![Segment::new(
                ticker_window(screen.ticker.as_str(), screen.ticker_offset, width),
                Tone::Yellow,
                Style::Normal,
            )],
            Err(_) => Row::new(),
        };
        rows.push(ticker);
    }
    rows
}

/// Largest useful scroll for `screen` in a `width` x `height` terminal.
pub fn scroll_limit(screen: &Screen, width: usize, height: usize) -> usize {
    let (fixed, scrolled) = screen_rows(screen, width);
    let visible = height
        .saturating_sub(RESERVED_ROWS)
        .saturating_sub(fixed.len());
    scrolled.len().saturating_sub(visible)
}

/// Chrome rows that stay on screen, then the rows that scroll.
fn screen_rows(screen: &Screen, width: usize) -> (Vec<Row>, Vec<Row>) {
    let mut fixed = Vec::new();
    for line in &screen.header.lines {
        fixed.extend(line_layout(line, screen.header.tone, width));
    }
    fixed.extend(tile_rows(screen, width));
    fixed.extend(line_layout(&screen.toolbar, Tone::White, width));
    fixed.push(Row::new());

    let mut rows = Vec::new();
    for (index, panel) in screen.body.panels.iter().enumerate() {
        if index > 0 {
            rows.push(Row::new());
        }
        if let Some(title) = &panel.title {
            rows.push(vec![Segment::new(
                fit(format!("■ {}", title.to_uppercase()).as_str(), width),
                panel.tone,
                Style::Bold,
            )]);
        }
        for line in &panel.lines {
            rows.extend(line_layout(line, panel.tone, width));
        }
    }

    rows.push(Row::new());
    rows.extend(line_layout(&screen.footer, Tone::White, width));
    (fixed, rows)
}

fn tile_rows(screen: &Screen, width: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row = Row::new();
    let mut used = 0;
    for tile in &screen.tiles {
        let text = tile_text(tile);
        let len = text.chars().count();
        if !row.is_empty() && used + 1 + len > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        if !row.is_empty() {
            row.push(Segment::new(" ", Tone::White, Style::Normal));
            used += 1;
        }
        let style = if tile.active {
            Style::Reverse
        } else if tile.focused {
            Style::Underline
        } else {
            Style::Bold
        };
        row.push(Segment::new(text, tile.tone, style));
        used += len;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Styled spans on one row when they fit, else wrapped rows in the line tone.
fn line_layout(line: &Line, tone: Tone, width: usize) -> Vec<Row> {
    let texts: Vec<String> = line.spans.iter().map(span_text).collect();
    let len: usize = texts.iter().map(|text| text.chars().count()).sum();
    if line.clamp.is_none() && len <= width {
        let row = line
            .spans
            .iter()
            .zip(texts)
            .map(|(span, text)| {
                Segment::new(text, span.tone.unwrap_or(tone), span_style(span))
            })
            .collect();
        return vec![row];
    }

    let tone = line.spans.first().and_then(|span| span.tone).unwrap_or(tone);
    line_rows(line, width)
        .into_iter()
        .map(|text| vec![Segment::new(text, tone, Style::Normal)])
        .collect()
}

fn span_style(span: &Span) -> Style {
    match span.emphasis {
        Emphasis::Bold => Style::Bold,
        Emphasis::Dim => Style::Dim,
        Emphasis::Tag => Style::Reverse,
        Emphasis::Normal if span.link.is_some() => Style::Underline,
        Emphasis::Normal => Style::Normal,
    }
}

fn error_rows(err: &RenderError, width: usize) -> Vec<Row> {
    let mut rows = vec![vec![Segment::new("PAGE UNAVAILABLE", Tone::Red, Style::Reverse)]];
    rows.push(Row::new());
    for text in wrap(err.to_string().as_str(), width) {
        rows.push(vec![Segment::new(text, Tone::Red, Style::Normal)]);
    }
    rows.push(Row::new());
    rows.push(vec![Segment::new(UNAVAILABLE_HINT, Tone::White, Style::Dim)]);
    rows
}

fn overlay_row(modal: Option<&Modal>, status: Option<&str>, width: usize) -> Row {
    let (text, tone, style) = match (modal, status) {
        (Some(Modal::ImportPrompt { path }), _) => {
            (format!("{IMPORT_PROMPT}{path}_"), Tone::Yellow, Style::Reverse)
        }
        (Some(Modal::Alert { message }), _) => {
            (format!("{message}{ALERT_SUFFIX}"), Tone::Red, Style::Reverse)
        }
        (None, Some(status)) => (status.to_string(), Tone::Green, Style::Dim),
        (None, None) => return Row::new(),
    };
    vec![Segment::new(fit(text.as_str(), width), tone, style)]
}

fn color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Green,
        Tone::Yellow => Color::Yellow,
        Tone::Cyan => Color::Cyan,
        Tone::Magenta => Color::Magenta,
        Tone::Blue => Color::Blue,
        Tone::Red => Color::Red,
        Tone::White => Color::White,
    }
}

fn attribute(style: Style) -> Option<Attribute> {
    match style {
        Style::Normal => None,
        Style::Bold => Some(Attribute::Bold),
        Style::Dim => Some(Attribute::Dim),
        Style::Reverse => Some(Attribute::Reverse),
        Style::Underline => Some(Attribute::Underlined),
    }
}

/// Paints `rows` from the top-left corner, clearing what they do not cover.
pub fn paint<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    for (y, row) in rows.iter().enumerate() {
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;
        for segment in row {
            queue!(out, SetForegroundColor(color(segment.tone)))?;
            if let Some(attr) = attribute(segment.style) {
                queue!(out, SetAttribute(attr))?;
            }
            queue!(
                out,
                Print(segment.text.as_str()),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
    }
    queue!(out, Clear(ClearType::FromCursorDown))?;
    out.flush()
}
