//! Command helper methods for Test.

use super::Test;
use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a localvault command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - Colors and inherited localvault variables disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("localvault").expect("failed to find localvault binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("LOCALVAULT_LOG");
        cmd.env_remove("LOCALVAULT_VAULT");
        cmd.env_remove("LOCALVAULT_IDENTITY");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `localvault init` command.
    pub fn init_cmd(&self, name: &str) -> Output {
        self.cmd()
            .args(["init", "--name", name])
            .output()
            .expect("failed to run localvault init")
    }

    /// Shortcut for `localvault set` command.
    pub fn set(&self, name: &str, val: &str) -> Output {
        self.cmd()
            .args(["set", name, val])
            .output()
            .expect("failed to run localvault set")
    }

    /// Run `localvault list`.
    pub fn list(&self) -> Assert {
        self.cmd().arg("list").assert()
    }

    /// Run `localvault list --reveal`.
    pub fn reveal(&self) -> Assert {
        self.cmd().args(["list", "--reveal"]).assert()
    }

    /// Run `localvault decrypt-to-local` with extra arguments.
    pub fn decrypt(&self, args: &[&str]) -> Assert {
        self.cmd().arg("decrypt-to-local").args(args).assert()
    }
}
