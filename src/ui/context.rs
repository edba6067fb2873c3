use crossterm::style::Color;

use waypoint::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    use is_terminal::IsTerminal;

    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    let (width, height) = size.unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        supports_color,
        supports_unicode,
        is_ci,
        width,
        height,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}

/// Resolved output settings for one command invocation.
///
/// Color and unicode are decided once at startup from the CLI flag, the
/// config file, and the detected terminal, so command code never looks at
/// the environment again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            verbose,
            caps,
            color,
            unicode,
        }
    }

    pub fn icon(&self, icon: theme::Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        theme::paint(text, color, self.color)
    }

    pub fn bold(&self, text: &str) -> String {
        theme::bold(text, self.color)
    }

    pub fn dim(&self, text: &str) -> String {
        theme::paint(text, theme::colors::DIM, self.color)
    }

    pub fn success(&self, text: &str) -> String {
        theme::paint(text, theme::colors::SUCCESS, self.color)
    }

    pub fn warning(&self, text: &str) -> String {
        theme::paint(text, theme::colors::WARNING, self.color)
    }

    pub fn error(&self, text: &str) -> String {
        theme::paint(text, theme::colors::ERROR, self.color)
    }

    pub fn info(&self, text: &str) -> String {
        theme::paint(text, theme::colors::INFO, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool, size: Option<(u16, u16)>) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty, size)
    }

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn test_detect_respects_no_color() {
        let c = caps(
            &[("NO_COLOR", "1"), ("TERM", "xterm-256color")],
            true,
            Some((120, 40)),
        );
        assert!(!c.supports_color);
    }

    #[test]
    fn test_detect_ci_environment() {
        let c = caps(&[("CI", "true"), ("TERM", "xterm-256color")], true, None);
        assert!(c.is_ci);
    }

    #[test]
    fn test_detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true, None);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn test_detect_defaults_size_when_unknown() {
        let c = caps(&[], false, None);
        assert_eq!((c.width, c.height), (80, 24));
    }

    #[test]
    fn test_ci_defaults_to_no_color_when_auto() {
        let config = Config::default();
        let ui = UiContext::from_caps(0, None, &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn test_ci_allows_explicit_color_always_flag() {
        let config = Config::default();
        let ui = UiContext::from_caps(0, Some(ColorWhen::Always), &config, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn test_cli_flag_overrides_config_color() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;

        let ui = UiContext::from_caps(0, Some(ColorWhen::Never), &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn test_config_unicode_off_disables_unicode() {
        let mut config = Config::default();
        config.output.unicode = false;

        let ui = UiContext::from_caps(0, None, &config, ci_caps());
        assert!(!ui.unicode);
    }
}
