//! Plain-text host for the visual tree.
//!
//! Used by one-shot output and by tests to compare rendered pages. Tones are
//! dropped; tags render as `[LABEL]`; links append their target as `<href>`
//! unless the visible text already is the target.

use super::format::{clamp_rows, fit, wrap};
use super::frame::{Emphasis, Line, NavTile, Panel, Span};
use super::{PageView, Screen};
use crate::ticker::ticker_window;

const PANEL_TITLE_PREFIX: &str = "■ ";

/// Text of one span without styling.
pub fn span_text(span: &Span) -> String {
    let mut text = match span.emphasis {
        Emphasis::Tag => format!("[{}]", span.text.to_uppercase()),
        Emphasis::Normal | Emphasis::Bold | Emphasis::Dim => span.text.clone(),
    };
    if let Some(link) = &span.link {
        if link.href != span.text {
            text.push_str(format!(" <{}>", link.href).as_str());
        }
    }
    text
}

pub fn line_text(line: &Line) -> String {
    line.spans.iter().map(span_text).collect()
}

/// Wrapped rows of one line, honouring its clamp.
pub fn line_rows(line: &Line, width: usize) -> Vec<String> {
    let text = line_text(line);
    match line.clamp {
        Some(rows) => clamp_rows(text.as_str(), width, rows),
        None => wrap(text.as_str(), width),
    }
}

pub fn tile_text(tile: &NavTile) -> String {
    let marker = if tile.active {
        '*'
    } else if tile.focused {
        '>'
    } else {
        ' '
    };
    format!("[{marker}{} {}]", tile.page.code(), tile.page.label().to_uppercase())
}

fn push_panel(out: &mut Vec<String>, panel: &Panel, width: usize) {
    if let Some(title) = &panel.title {
        out.push(fit(
            format!("{PANEL_TITLE_PREFIX}{}", title.to_uppercase()).as_str(),
            width,
        ));
    }
    for line in &panel.lines {
        out.extend(line_rows(line, width));
    }
}

fn push_panels(out: &mut Vec<String>, panels: &[Panel], width: usize) {
    for (index, panel) in panels.iter().enumerate() {
        if index > 0 {
            out.push(String::new());
        }
        push_panel(out, panel, width);
    }
}

/// Renders one page body.
pub fn render_page_plain(view: &PageView, width: usize) -> String {
    let mut out = Vec::new();
    push_panels(&mut out, &view.panels, width);
    finish(out)
}

/// Renders the whole screen.
pub fn render_screen_plain(screen: &Screen, width: usize) -> String {
    let mut out = Vec::new();
    for line in &screen.header.lines {
        out.push(fit(line_text(line).as_str(), width).trim_end().to_string());
    }
    let tiles: Vec<String> = screen.tiles.iter().map(tile_text).collect();
    out.extend(wrap(tiles.join(" ").as_str(), width));
    out.extend(line_rows(&screen.toolbar, width));
    out.push(String::new());
    push_panels(&mut out, &screen.body.panels, width);
    out.push(String::new());
    out.extend(line_rows(&screen.footer, width));
    out.push(ticker_window(
        screen.ticker.as_str(),
        screen.ticker_offset,
        width,
    ));
    finish(out)
}

fn finish(rows: Vec<String>) -> String {
    let mut text = rows
        .into_iter()
        .map(|row| row.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}
