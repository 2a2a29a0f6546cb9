// Purpose: One install attempt: banner, single manager invocation, verdict.

use std::time::Instant;

use anyhow::Result;
use log::{debug, info, warn};

use super::command::InstallCommand;
use super::error::InstallError;
use super::packages::PackageList;
use super::presentation::{Presenter, DEFAULT_TITLE, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use super::runner::ProcessRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Pending,
    Succeeded,
    Failed(i32),
}

impl InstallState {
    fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            InstallState::Succeeded
        } else {
            InstallState::Failed(code)
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            InstallState::Succeeded => 0,
            InstallState::Failed(code) => *code,
            InstallState::Pending => 1,
        }
    }

    pub fn into_result(self) -> Result<(), InstallError> {
        match self {
            InstallState::Succeeded => Ok(()),
            other => Err(InstallError::InstallFailed {
                code: other.exit_code(),
            }),
        }
    }
}

pub struct Installer<'a> {
    command: InstallCommand,
    title: String,
    runner: Box<dyn ProcessRunner + 'a>,
    presenter: Box<dyn Presenter + 'a>,
    state: InstallState,
}

impl<'a> Installer<'a> {
    pub fn new(
        manager: &str,
        packages: &PackageList,
        runner: Box<dyn ProcessRunner + 'a>,
        presenter: Box<dyn Presenter + 'a>,
    ) -> Self {
        Self {
            command: InstallCommand::new(manager, packages),
            title: DEFAULT_TITLE.to_string(),
            runner,
            presenter,
            state: InstallState::Pending,
        }
    }

    pub fn title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    /// The command `run` would execute.
    pub fn plan(&self) -> &InstallCommand {
        &self.command
    }

    pub fn state(&self) -> InstallState {
        self.state
    }

    /// Performs exactly one invocation. Only the exit code decides the outcome;
    /// presenter write errors are logged and otherwise ignored.
    pub fn run(&mut self) -> Result<InstallState> {
        self.state = InstallState::Pending;
        if let Err(e) = self.presenter.banner(&self.title) {
            warn!("Could not print banner: {:#}", e);
        }

        info!("Running: {}", self.command);
        let start = Instant::now();
        let code = self.runner.run(&self.command.program, &self.command.args)?;
        debug!("Package manager returned {} after {:?}", code, start.elapsed());

        self.state = InstallState::from_exit_code(code);
        let shown = if code == 0 {
            self.presenter.success(SUCCESS_MESSAGE)
        } else {
            self.presenter.failure(code, FAILURE_MESSAGE)
        };
        if let Err(e) = shown {
            warn!("Could not print install result: {:#}", e);
        }
        Ok(self.state)
    }
}
