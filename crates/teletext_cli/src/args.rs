//! Command-line flags.

use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;
use teletext_core::ViewerConfig;

pub const DEFAULT_ONCE_WIDTH: usize = 80;
const MIN_WIDTH: usize = 20;

pub const USAGE: &str = "\
Usage: teletext [options]

Options:
  --page <code>        Start page code (100, 101, 102, 103, 104, 199)
  --content <file>     JSON file merged over the built-in content
  --export-dir <dir>   Directory receiving exported content files
  --log-level <level>  trace | debug | info | warn | error
  --log-dir <dir>      Absolute directory for rolling log files
  --once               Print the start page as plain text and exit
  --width <columns>    Text width for --once (default 80)
  -h, --help           Show this help

Keys: type a page code, arrows + Enter for tiles, Up/Down in the blog,
PageUp/PageDown or k/j to scroll, e export, i import, q or Esc quit.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub page: Option<String>,
    pub content: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub once: bool,
    pub width: usize,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            page: None,
            content: None,
            export_dir: None,
            log_level: None,
            log_dir: None,
            once: false,
            width: DEFAULT_ONCE_WIDTH,
        }
    }
}

impl CliArgs {
    /// Applies the flags over the default configuration and validates it.
    pub fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = ViewerConfig::default();
        if let Some(code) = &self.page {
            config = config.with_start_code(code)?;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.log_dir = self.log_dir.clone();
        config.content_path = self.content.clone();
        if let Some(dir) = &self.export_dir {
            config.export_dir = dir.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Parses arguments without the program name.
pub fn parse<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = || -> Result<String> {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| anyhow!("missing value for {flag}"))
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--page" => parsed.page = Some(value()?),
            "--content" => parsed.content = Some(PathBuf::from(value()?)),
            "--export-dir" => parsed.export_dir = Some(PathBuf::from(value()?)),
            "--log-level" => parsed.log_level = Some(value()?),
            "--log-dir" => parsed.log_dir = Some(PathBuf::from(value()?)),
            "--once" => parsed.once = true,
            "--width" => {
                let raw = value()?;
                let width: usize = raw
                    .parse()
                    .map_err(|_| anyhow!("invalid width `{raw}`"))?;
                if width < MIN_WIDTH {
                    bail!("width must be at least {MIN_WIDTH} columns");
                }
                parsed.width = width;
            }
            other => bail!("unknown argument `{other}`"),
        }
    }

    Ok(Command::Run(parsed))
}

#[cfg(test)]
mod tests {
    use super::{parse, CliArgs, Command};
    use std::path::PathBuf;
    use teletext_core::Page;

    fn run(args: &[&str]) -> CliArgs {
        match parse(args.iter().map(|arg| arg.to_string())).unwrap() {
            Command::Run(parsed) => parsed,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_arguments_use_defaults() {
        let parsed = run(&[]);
        assert_eq!(parsed, CliArgs::default());
        assert_eq!(parsed.viewer_config().unwrap().start_page, Page::Home);
    }

    #[test]
    fn flags_accept_separate_and_inline_values() {
        let parsed = run(&["--page", "104", "--content=site.json", "--once", "--width=60"]);
        assert_eq!(parsed.page.as_deref(), Some("104"));
        assert_eq!(parsed.content, Some(PathBuf::from("site.json")));
        assert!(parsed.once);
        assert_eq!(parsed.width, 60);

        let config = parsed.viewer_config().unwrap();
        assert_eq!(config.start_page, Page::Docs);
        assert_eq!(config.content_path, Some(PathBuf::from("site.json")));
    }

    #[test]
    fn help_wins() {
        let parsed = parse(["--once", "--help"].iter().map(|arg| arg.to_string())).unwrap();
        assert_eq!(parsed, Command::Help);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        let parse_err = |args: &[&str]| {
            parse(args.iter().map(|arg| arg.to_string()))
                .unwrap_err()
                .to_string()
        };
        assert!(parse_err(&["--page"]).contains("missing value for --page"));
        assert!(parse_err(&["--width", "wide"]).contains("invalid width"));
        assert!(parse_err(&["--width", "5"]).contains("at least"));
        assert!(parse_err(&["--colour"]).contains("unknown argument"));
    }

    #[test]
    fn unknown_start_page_fails_config() {
        let err = run(&["--page", "150"]).viewer_config().unwrap_err();
        assert!(err.to_string().contains("150"));
    }
}
