//! Text formatting helpers shared by the views and hosts.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const ELLIPSIS: char = '…';

/// Short human-readable date, e.g. `Aug 24, 2025`.
///
/// Calendar dates carry no timezone; nothing is normalized.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Greedy word wrap on character counts.
///
/// Words longer than `width` are split hard. Always returns at least one row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0usize;

    for word in WHITESPACE_RE.split(text).filter(|word| !word.is_empty()) {
        let mut chars: Vec<char> = word.chars().collect();
        loop {
            let needed = if row_len == 0 {
                chars.len()
            } else {
                chars.len() + 1
            };
            if row_len + needed <= width {
                if row_len > 0 {
                    row.push(' ');
                }
                row.extend(chars.iter());
                row_len += needed;
                break;
            }
            if row_len > 0 {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
                continue;
            }
            let rest = chars.split_off(width);
            rows.push(chars.iter().collect());
            chars = rest;
        }
    }

    if row_len > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Wraps `text` and keeps at most `max_rows`, marking truncation with `…`.
pub fn clamp_rows(text: &str, width: usize, max_rows: usize) -> Vec<String> {
    let mut rows = wrap(text, width);
    if max_rows == 0 || rows.len() <= max_rows {
        return rows;
    }
    rows.truncate(max_rows);
    if let Some(last) = rows.last_mut() {
        let limit = width.max(1).saturating_sub(1);
        let kept: String = last.chars().take(limit).collect();
        *last = format!("{}{ELLIPSIS}", kept.trim_end());
    }
    rows
}

/// Pads or truncates `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::{clamp_rows, fit, format_date, wrap};
    use chrono::NaiveDate;

    #[test]
    fn date_uses_month_abbreviation_two_digit_day_and_year() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        assert_eq!(format_date(date), "Aug 04, 2025");
    }

    #[test]
    fn wrap_breaks_on_words_and_splits_long_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn clamp_marks_truncation() {
        let rows = clamp_rows("aaa bbb ccc ddd", 7, 1);
        assert_eq!(rows, vec!["aaa bb…"]);
        assert_eq!(clamp_rows("short", 10, 2), vec!["short"]);
    }

    #[test]
    fn fit_pads_and_truncates_by_chars() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("₺1K/₺3K", 3), "₺1K");
    }
}
