use std::fmt;

use super::packages::PackageList;

pub const DEFAULT_MANAGER: &str = "pip";
pub const INSTALL_VERB: [&str; 2] = ["install", "--upgrade"];

// A single package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallCommand {
    pub fn new(manager: &str, packages: &PackageList) -> Self {
        let mut args: Vec<String> = INSTALL_VERB.iter().map(|s| s.to_string()).collect();
        args.extend(packages.names().iter().cloned());
        Self {
            program: manager.to_string(),
            args,
        }
    }

    /// Program followed by its arguments, as handed to the OS.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.argv().iter().map(|a| quote(a)).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

// Quote only what a shell would otherwise split or expand.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:+@,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_line() {
        let cmd = InstallCommand::new(DEFAULT_MANAGER, &PackageList::default());
        assert_eq!(
            cmd.to_string(),
            "pip install --upgrade requests pyautogui psutil Pillow pygetwindow pywin32"
        );
    }

    #[test]
    fn test_args_end_with_packages_in_order() {
        let packages = PackageList::default();
        let cmd = InstallCommand::new("pip3", &packages);
        assert_eq!(cmd.program, "pip3");
        assert_eq!(&cmd.args[..2], &["install", "--upgrade"]);
        assert_eq!(&cmd.args[2..], packages.names());
    }

    #[test]
    fn test_argv_starts_with_program() {
        let packages = PackageList::new(vec!["requests".to_string()]).unwrap();
        let cmd = InstallCommand::new("/opt/py/bin/pip", &packages);
        assert_eq!(
            cmd.argv(),
            vec!["/opt/py/bin/pip", "install", "--upgrade", "requests"]
        );
    }

    #[test]
    fn test_display_quotes_specifiers() {
        let packages = PackageList::new(vec!["requests>=2.31".to_string()]).unwrap();
        let cmd = InstallCommand::new("pip", &packages);
        assert_eq!(cmd.to_string(), "pip install --upgrade 'requests>=2.31'");
    }
}
