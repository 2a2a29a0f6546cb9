mod depinstall;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser};
use log::{debug, error, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use depinstall::config::{ConfigFile, Settings};
use depinstall::installer::Installer;
use depinstall::presentation::{ConsolePresenter, Presenter, SilentPresenter};
use depinstall::runner::SubprocessRunner;

#[derive(Debug, Args)]
struct GlobalOpts {
    // Debug logging on stderr
    #[arg(long, short)]
    verbose: bool,

    #[arg(long, help = "Disable colored output.")]
    no_color: bool,
}

#[derive(Parser)]
#[command(name = "depinstall")]
#[command(about = "Install the bot's Python dependencies with a single package-manager call.", long_about = None)]
#[command(version)]
pub struct App {
    #[clap(flatten)]
    args: GlobalOpts,

    #[arg(
        long,
        short,
        help = "Package manager to invoke. Defaults to `pip` on the PATH."
    )]
    manager: Option<String>,

    #[arg(long, short, help = "JSON file with manager/packages/title overrides.")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the install command without running it.")]
    dry_run: bool,

    #[arg(long, short, help = "Only show the package manager's own output.")]
    quiet: bool,

    #[arg(help = "Packages to install instead of the built-in list.")]
    packages: Vec<String>,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // Only fails when a logger is already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn run(app: App) -> Result<u8> {
    let file = app.config.as_deref().map(ConfigFile::load).transpose()?;
    let settings = Settings::resolve(file, app.manager, app.packages)?;
    debug!("Resolved settings: {:?}", settings);

    let color = !app.args.no_color;
    let presenter: Box<dyn Presenter> = if app.quiet {
        Box::new(SilentPresenter::default())
    } else {
        Box::new(ConsolePresenter::stdout(color))
    };

    let mut installer = Installer::new(
        &settings.manager,
        &settings.packages,
        Box::new(SubprocessRunner::default()),
        presenter,
    )
    .title(settings.title);

    if app.dry_run {
        println!("{}", installer.plan());
        return Ok(0);
    }

    let state = installer.run()?;
    debug!("Install finished in state {:?}", installer.state());
    if let Err(e) = state.into_result() {
        warn!("{}", e);
    }
    Ok(status_byte(state.exit_code()))
}

// Process exit statuses are a byte; anything that doesn't fit is a plain failure.
fn status_byte(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(byte) => byte,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let app = App::parse();
    init_logger(app.args.verbose);

    match run(app) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_byte() {
        assert_eq!(status_byte(0), 0);
        assert_eq!(status_byte(1), 1);
        assert_eq!(status_byte(137), 137);
        assert_eq!(status_byte(255), 255);
        assert_eq!(status_byte(256), 1);
        assert_eq!(status_byte(-1), 1);
    }

    #[test]
    fn test_parse_defaults() {
        let app = App::try_parse_from(["depinstall"]).unwrap();
        assert!(app.packages.is_empty());
        assert!(app.manager.is_none());
        assert!(!app.dry_run);
        assert!(!app.args.verbose);
    }

    #[test]
    fn test_parse_package_override() {
        let app = App::try_parse_from(["depinstall", "-m", "pip3", "requests", "psutil"]).unwrap();
        assert_eq!(app.manager.as_deref(), Some("pip3"));
        assert_eq!(app.packages, vec!["requests", "psutil"]);
    }
}
