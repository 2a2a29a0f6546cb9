// Purpose: Everything the user sees from us, as opposed to the manager's own output.

use std::io::{self, IsTerminal, Stdout, Write};

use anyhow::Result;
use owo_colors::OwoColorize;

pub const DEFAULT_TITLE: &str = "Installing Python dependencies";
pub const SUCCESS_MESSAGE: &str = "All packages installed successfully!";
pub const FAILURE_MESSAGE: &str = "Installation failed! Check the output above for errors.";

const RULE_WIDTH: usize = 40;

pub trait Presenter {
    fn banner(&mut self, title: &str) -> Result<()>;
    fn success(&mut self, message: &str) -> Result<()>;
    fn failure(&mut self, code: i32, message: &str) -> Result<()>;
}

pub struct ConsolePresenter<W: Write> {
    out: W,
    color: bool,
    set_title: bool,
}

impl ConsolePresenter<Stdout> {
    /// Presenter for the real terminal. Colour and the window title need a tty.
    pub fn stdout(color: bool) -> Self {
        let out = io::stdout();
        let color = color && out.is_terminal();
        Self {
            out,
            color,
            set_title: color,
        }
    }
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            set_title: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn banner(&mut self, title: &str) -> Result<()> {
        if self.set_title {
            write!(self.out, "\x1b]0;{}\x07", title)?;
        }
        let rule = "=".repeat(RULE_WIDTH);
        if self.color {
            writeln!(self.out, "{}", rule.green())?;
            writeln!(self.out, "  {}", title.green().bold())?;
            writeln!(self.out, "{}", rule.green())?;
        } else {
            writeln!(self.out, "{}\n  {}\n{}", rule, title, rule)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        writeln!(self.out)?;
        if self.color {
            writeln!(self.out, "{}", message.green().bold())?;
        } else {
            writeln!(self.out, "{}", message)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn failure(&mut self, code: i32, message: &str) -> Result<()> {
        writeln!(self.out)?;
        let line = format!("{} (exit code {})", message, code);
        if self.color {
            writeln!(self.out, "{}", line.red().bold())?;
        } else {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

// Used with --quiet: the manager's own output still comes through.
#[derive(Debug, Default)]
pub struct SilentPresenter {}

impl Presenter for SilentPresenter {
    fn banner(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }

    fn success(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn failure(&mut self, _code: i32, _message: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(color: bool, f: impl FnOnce(&mut ConsolePresenter<Vec<u8>>)) -> String {
        let mut presenter = ConsolePresenter::new(Vec::new(), color);
        f(&mut presenter);
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_banner() {
        let out = render(false, |p| p.banner(DEFAULT_TITLE).unwrap());
        assert!(out.contains("  Installing Python dependencies\n"));
        assert!(out.starts_with(&"=".repeat(RULE_WIDTH)));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_plain_success_and_failure() {
        let out = render(false, |p| p.success(SUCCESS_MESSAGE).unwrap());
        assert_eq!(out, "\nAll packages installed successfully!\n");

        let out = render(false, |p| p.failure(2, FAILURE_MESSAGE).unwrap());
        assert_eq!(
            out,
            "\nInstallation failed! Check the output above for errors. (exit code 2)\n"
        );
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let out = render(true, |p| p.failure(1, FAILURE_MESSAGE).unwrap());
        assert!(out.contains('\x1b'));
        assert!(out.contains(FAILURE_MESSAGE));
    }

    #[test]
    fn test_terminal_banner_sets_window_title() {
        let mut presenter = ConsolePresenter {
            out: Vec::new(),
            color: true,
            set_title: true,
        };
        presenter.banner("Bot setup").unwrap();
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.starts_with("\x1b]0;Bot setup\x07"));
        assert!(out.contains("Bot setup"));
    }

    #[test]
    fn test_in_memory_writer_never_sets_title() {
        let out = render(true, |p| p.banner("Title").unwrap());
        assert!(!out.contains("\x1b]0;"));
    }
}
