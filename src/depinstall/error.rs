use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("package manager exited with status {code}")]
    InstallFailed { code: i32 },

    #[error("invalid package name {name:?}: {reason}")]
    InvalidPackage { name: String, reason: &'static str },

    #[error("no packages to install")]
    EmptyPackageList,
}
