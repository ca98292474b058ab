//! Interactive viewer state on top of a core session.
//!
//! # Responsibility
//! - Route terminal events to the import prompt, the alert, or the session.
//! - Run the export/import toolbar actions and keep a one-line status.
//!
//! # Invariants
//! - While a modal is open its keys never reach the page listeners.
//! - Keys between two modal transitions reach the session as one burst.

use chrono::NaiveDateTime;
use log::info;
use std::path::{Path, PathBuf};
use teletext_core::{
    ImportOutcome, Key, PortfolioSession, RenderResult, Screen, TransferError, ViewerConfig,
};

use crate::event::TermEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// File path being typed for an import.
    ImportPrompt { path: String },
    /// Blocking message; any key dismisses it.
    Alert { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: PortfolioSession,
    modal: Option<Modal>,
    status: Option<String>,
    export_dir: PathBuf,
    ticker_step: usize,
}

impl App {
    pub fn new(session: PortfolioSession, config: &ViewerConfig) -> Self {
        Self {
            session,
            modal: None,
            status: None,
            export_dir: config.export_dir.clone(),
            ticker_step: config.ticker_step,
        }
    }

    pub fn session(&self) -> &PortfolioSession {
        &self.session
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn render(&mut self, now: NaiveDateTime) -> RenderResult<Screen> {
        self.session.render(now)
    }

    /// Keeps the body scroll within what the terminal can show.
    pub fn limit_scroll(&mut self, max: usize) {
        self.session.limit_scroll(max);
    }

    /// Clock tick: scrolls the ticker.
    pub fn tick(&mut self) {
        self.session.advance_ticker(self.ticker_step);
    }

    /// Handles every event drained in one poll round.
    pub fn handle_events<I>(&mut self, events: I) -> Flow
    where
        I: IntoIterator<Item = TermEvent>,
    {
        let mut burst = Vec::new();
        for event in events {
            let key = match event {
                TermEvent::Interrupt => {
                    self.flush(&mut burst);
                    return Flow::Quit;
                }
                TermEvent::Resize => continue,
                TermEvent::Key(key) => key,
            };

            if self.modal.is_some() {
                self.flush(&mut burst);
                self.handle_modal_key(key);
                continue;
            }

            match key {
                Key::Char('q') | Key::Escape => {
                    self.flush(&mut burst);
                    return Flow::Quit;
                }
                Key::Char('e') => {
                    self.flush(&mut burst);
                    self.export();
                }
                Key::Char('i') => {
                    self.flush(&mut burst);
                    self.modal = Some(Modal::ImportPrompt {
                        path: String::new(),
                    });
                }
                other => burst.push(other),
            }
        }
        self.flush(&mut burst);
        Flow::Continue
    }

    fn flush(&mut self, burst: &mut Vec<Key>) {
        if !burst.is_empty() {
            self.session.handle_keys(burst);
            burst.clear();
        }
    }

    fn handle_modal_key(&mut self, key: Key) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        let Modal::ImportPrompt { mut path } = modal else {
            // Alert: any key dismisses.
            return;
        };
        match key {
            Key::Escape => {}
            Key::Enter => {
                let trimmed = path.trim();
                if !trimmed.is_empty() {
                    self.import(Path::new(trimmed));
                }
            }
            Key::Backspace => {
                path.pop();
                self.modal = Some(Modal::ImportPrompt { path });
            }
            Key::Char(c) => {
                path.push(c);
                self.modal = Some(Modal::ImportPrompt { path });
            }
            _ => self.modal = Some(Modal::ImportPrompt { path }),
        }
    }

    fn export(&mut self) {
        match self.session.export_to_dir(&self.export_dir) {
            Ok(path) => self.status = Some(format!("Exported {}", path.display())),
            Err(err) => self.alert(&err),
        }
    }

    fn import(&mut self, path: &Path) {
        match self.session.import_file(path) {
            Ok(ImportOutcome::Merged(report)) => {
                self.status = Some(format!(
                    "Imported {} section(s) from {}",
                    report.merged_keys(),
                    path.display()
                ));
            }
            Ok(ImportOutcome::NotAnObject { kind }) => {
                self.status = Some(format!("Nothing imported: top-level JSON {kind}"));
            }
            Err(err) => self.alert(&err),
        }
    }

    fn alert(&mut self, err: &TransferError) {
        info!(
            "event=alert_shown module=cli status=error kind={}",
            match err {
                TransferError::Io { .. } => "io",
                TransferError::InvalidJson(_) => "invalid_json",
                TransferError::Encode(_) => "encode",
            }
        );
        self.modal = Some(Modal::Alert {
            message: err.to_string(),
        });
    }
}
