//! Terminal event polling and key translation.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use teletext_core::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEvent {
    Key(Key),
    /// Ctrl+C.
    Interrupt,
    Resize,
}

/// Maps a raw terminal event; releases, repeats and unmapped keys yield `None`.
pub fn translate(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(_, _) => Some(TermEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TermEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            .then_some(TermEvent::Interrupt);
    }
    let mapped = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(TermEvent::Key(mapped))
}

/// Waits up to `timeout` for the next mapped event.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TermEvent>> {
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Some(mapped) = translate(event::read()?) {
            return Ok(Some(mapped));
        }
        wait = Duration::ZERO;
    }
    Ok(None)
}

/// Next already-queued mapped event, without blocking.
pub fn poll_event_immediate() -> io::Result<Option<TermEvent>> {
    poll_event_timeout(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::{translate, TermEvent};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use teletext_core::Key;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn presses_map_to_keys() {
        let press = |code| key(code, KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(
            translate(press(KeyCode::Char('7'))),
            Some(TermEvent::Key(Key::Char('7')))
        );
        assert_eq!(translate(press(KeyCode::Left)), Some(TermEvent::Key(Key::Left)));
        assert_eq!(
            translate(press(KeyCode::PageDown)),
            Some(TermEvent::Key(Key::PageDown))
        );
        assert_eq!(translate(press(KeyCode::F(5))), None);
    }

    #[test]
    fn releases_are_dropped() {
        let release = key(KeyCode::Char('1'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate(release), None);
    }

    #[test]
    fn control_c_interrupts() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(translate(ctrl_c), Some(TermEvent::Interrupt));
        let ctrl_x = key(KeyCode::Char('x'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(translate(ctrl_x), None);
        assert_eq!(translate(Event::Resize(80, 24)), Some(TermEvent::Resize));
    }
}
