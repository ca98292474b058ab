//! Terminal teletext viewer.
//!
//! # Responsibility
//! - Parse flags into a validated viewer configuration.
//! - Start file logging when a log directory is given.
//! - Run the interactive screen, or print one page with `--once`.

mod app;
mod args;
mod event;
mod terminal;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::io;
use std::time::Instant;
use teletext_core::{init_logging, render_screen_plain, PortfolioSession, ViewerConfig};

use crate::app::{App, Flow};
use crate::args::{CliArgs, Command};
use crate::event::{poll_event_immediate, poll_event_timeout};
use crate::terminal::TerminalGuard;

fn main() -> Result<()> {
    let cli = match args::parse(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", args::USAGE);
            return Ok(());
        }
        Command::Run(cli) => cli,
    };
    let config = cli.viewer_config()?;

    if let Some(dir) = &config.log_dir {
        init_logging(config.log_level.as_str(), dir).context("failed to start logging")?;
    }

    let session = PortfolioSession::open(&config).context("failed to load content")?;
    if cli.once {
        return print_once(session, &cli);
    }
    run(App::new(session, &config), &config)
}

fn print_once(mut session: PortfolioSession, cli: &CliArgs) -> Result<()> {
    let screen = session.render(Local::now().naive_local())?;
    print!("{}", render_screen_plain(&screen, cli.width));
    Ok(())
}

fn run(mut app: App, config: &ViewerConfig) -> Result<()> {
    let _guard = TerminalGuard::enter().context("failed to prepare the terminal")?;
    info!(
        "event=viewer_loop module=cli status=started session_id={}",
        app.session().id()
    );

    let mut stdout = io::stdout();
    let mut last_tick = Instant::now();
    loop {
        let (width, height) = terminal::size()?;
        let frame = app.render(Local::now().naive_local());
        if let Ok(screen) = &frame {
            app.limit_scroll(terminal::scroll_limit(screen, width, height));
        }
        let rows = terminal::layout(frame.as_ref(), app.modal(), app.status(), width, height);
        terminal::paint(&mut stdout, &rows)?;

        // First event waits for the next tick; everything already queued
        // behind it joins the same burst.
        let timeout = config.clock_refresh.saturating_sub(last_tick.elapsed());
        let mut events = Vec::new();
        if let Some(first) = poll_event_timeout(timeout)? {
            events.push(first);
            while let Some(next) = poll_event_immediate()? {
                events.push(next);
            }
        }
        if app.handle_events(events) == Flow::Quit {
            break;
        }

        if last_tick.elapsed() >= config.clock_refresh {
            app.tick();
            last_tick = Instant::now();
        }
    }

    info!(
        "event=viewer_loop module=cli status=stopped session_id={}",
        app.session().id()
    );
    Ok(())
}
