// Purpose: The ordered list of packages handed to the package manager.

use super::error::InstallError;

// Packages the screenshot bot imports. Kept identical on every platform.
pub const DEFAULT_PACKAGES: [&str; 6] = [
    "requests",
    "pyautogui",
    "psutil",
    "Pillow",
    "pygetwindow",
    "pywin32",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList {
    names: Vec<String>,
}

impl Default for PackageList {
    fn default() -> Self {
        Self {
            names: DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PackageList {
    /// Builds a list from user supplied names, preserving their order.
    pub fn new(names: Vec<String>) -> Result<Self, InstallError> {
        let list = Self { names };
        list.validate()?;
        Ok(list)
    }

    pub fn validate(&self) -> Result<(), InstallError> {
        if self.names.is_empty() {
            return Err(InstallError::EmptyPackageList);
        }
        for name in &self.names {
            check_name(name)?;
        }
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

fn check_name(name: &str) -> Result<(), InstallError> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else if name.starts_with('-') {
        "must not start with '-'"
    } else {
        return Ok(());
    };
    Err(InstallError::InvalidPackage {
        name: name.to_string(),
        reason,
    })
}
