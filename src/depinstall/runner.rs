// Purpose: Spawning the package manager as a child process.

use anyhow::{Context, Result};
use log::debug;
use subprocess::{ExitStatus, Popen, PopenConfig};

// ProcessRunner abstracts over how the install command is executed.
pub trait ProcessRunner {
    /// Runs `program` with `args` to completion and returns its exit code.
    fn run(&self, program: &str, args: &[String]) -> Result<i32>;
}

// Runs the command for real, with stdin/stdout/stderr inherited from us.
#[derive(Debug, Default)]
pub struct SubprocessRunner {}

impl ProcessRunner for SubprocessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32> {
        let mut argv: Vec<&str> = vec![program];
        argv.extend(args.iter().map(|s| s.as_str()));

        let mut p = Popen::create(&argv, PopenConfig::default())
            .with_context(|| format!("failed to start package manager `{}`", program))?;
        let status = p
            .wait()
            .with_context(|| format!("failed to wait for `{}`", program))?;
        debug!("Package manager finished with {:?}", status);
        Ok(exit_code(status))
    }
}

// Collapses a child status into the integer we report and exit with.
pub fn exit_code(status: ExitStatus) -> i32 {
    match status {
        ExitStatus::Exited(code) => i32::try_from(code).unwrap_or(1),
        ExitStatus::Signaled(signal) => 128 + i32::from(signal),
        ExitStatus::Other(_) | ExitStatus::Undetermined => 1,
    }
}
