//! The argument sequence handed to the oomoxify script.

use std::path::Path;
use std::process::Command;

/// Shell used to run the script, matching how oomoxify.sh is written.
const SHELL: &str = "bash";

/// Flag telling the script it is driven by a front-end.
pub const FLAG_GUI: &str = "--gui";
/// Flag introducing the Spotify install directory.
pub const FLAG_SPOTIFY_APPS_PATH: &str = "--spotify-apps-path";
/// Flag requesting heuristic font weight normalization.
pub const FLAG_FONT_WEIGHT: &str = "--font-weight";
/// Flag introducing a custom font family name.
pub const FLAG_FONT: &str = "--font";

/// One export invocation: the ordered token list for a single run of the
/// oomoxify script.
///
/// An invocation is computed at the moment of export and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportInvocation {
    tokens: Vec<String>,
}

impl ExportInvocation {
    /// Start an invocation with the fixed prefix: shell, script path, theme
    /// artifact path, `--gui`, and the Spotify apps path pair.
    pub fn new(script_path: &Path, theme_path: &Path, spotify_path: &str) -> Self {
        Self {
            tokens: vec![
                SHELL.to_string(),
                script_path.display().to_string(),
                theme_path.display().to_string(),
                FLAG_GUI.to_string(),
                FLAG_SPOTIFY_APPS_PATH.to_string(),
                spotify_path.to_string(),
            ],
        }
    }

    /// Append a bare flag token.
    pub fn flag(mut self, flag: &str) -> Self {
        self.tokens.push(flag.to_string());
        self
    }

    /// Append a flag token followed by its value token.
    pub fn flag_value(mut self, flag: &str, value: &str) -> Self {
        self.tokens.push(flag.to_string());
        self.tokens.push(value.to_string());
        self
    }

    /// The full ordered token list, program included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The program to spawn.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// The arguments following the program.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Build a `Command` ready to hand to the process runner.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args());
        command
    }
}

impl std::fmt::Display for ExportInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base() -> ExportInvocation {
        ExportInvocation::new(
            &PathBuf::from("/opt/oomoxify/oomoxify.sh"),
            &PathBuf::from("/tmp/theme123"),
            "/usr/share/spotify/Apps",
        )
    }

    #[test]
    fn test_fixed_prefix_order() {
        let invocation = base();
        assert_eq!(
            invocation.tokens(),
            &[
                "bash",
                "/opt/oomoxify/oomoxify.sh",
                "/tmp/theme123",
                "--gui",
                "--spotify-apps-path",
                "/usr/share/spotify/Apps",
            ]
        );
    }

    #[test]
    fn test_flag_value_keeps_order() {
        let invocation = base().flag_value(FLAG_FONT, "Fira Sans");
        let tokens = invocation.tokens();
        let font_pos = tokens.iter().position(|t| t == FLAG_FONT).unwrap();
        assert_eq!(tokens[font_pos + 1], "Fira Sans");
        assert_eq!(font_pos + 2, tokens.len());
    }

    #[test]
    fn test_program_and_args_split() {
        let invocation = base();
        assert_eq!(invocation.program(), "bash");
        assert_eq!(invocation.args()[0], "/opt/oomoxify/oomoxify.sh");
    }

    #[test]
    fn test_display_joins_tokens() {
        let rendered = base().flag(FLAG_FONT_WEIGHT).to_string();
        assert!(rendered.starts_with("bash /opt/oomoxify/oomoxify.sh"));
        assert!(rendered.ends_with("--font-weight"));
    }
}
