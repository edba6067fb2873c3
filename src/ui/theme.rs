use crossterm::style::{Color, Stylize};
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the waypoint terminal surfaces.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const DONE: &str = "●";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Net worth movement.
    pub const UP: &str = "▲";
    pub const DOWN: &str = "▼";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const DONE: &str = "[x]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";

    pub const UP: &str = "+";
    pub const DOWN: &str = "-";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Done,
    Pending,
    Arrow,
    Up,
    Down,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Done) => icons::DONE,
            (true, Icon::Pending) => icons::PENDING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Up) => icons::UP,
            (true, Icon::Down) => icons::DOWN,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Done) => icons_ascii::DONE,
            (false, Icon::Pending) => icons_ascii::PENDING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Up) => icons_ascii::UP,
            (false, Icon::Down) => icons_ascii::DOWN,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Done | Icon::Up => colors::SUCCESS,
            Icon::Error | Icon::Down => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Pending | Icon::Arrow => colors::DIM,
        };
        format!("{}", s.with(color))
    }
}

/// Paint `text` with `color` when color output is enabled, otherwise pass it
/// through untouched.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}", text.with(color))
}

pub fn bold(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}", text.bold())
}

// === WaypointTheme ===

/// Dialoguer theme for the wizard and menu prompts.
///
/// Wraps `ColorfulTheme` and only overrides the multi-select item formatting
/// (the emergency fund scenario picker) to use `●`/`○`, or `[x]`/`[ ]` in
/// ASCII fallback mode. Everything else keeps the wrapped theme's behavior,
/// including cursor visibility handling.
pub struct WaypointTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl WaypointTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn selected_icon(&self) -> &'static str {
        if self.unicode {
            icons::SELECTED
        } else {
            icons_ascii::SELECTED
        }
    }

    pub fn unselected_icon(&self) -> &'static str {
        if self.unicode {
            icons::UNSELECTED
        } else {
            icons_ascii::UNSELECTED
        }
    }
}

impl Theme for WaypointTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.inner.format_confirm_prompt(f, prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.inner
            .format_confirm_prompt_selection(f, prompt, selection)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.inner.format_input_prompt(f, prompt, default)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        self.inner.format_select_prompt_item(f, text, active)
    }

    fn format_multi_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_multi_select_prompt(f, prompt)
    }

    // This is the only method we customize for ●/○ icons
    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let icon = if checked {
            self.selected_icon()
        } else {
            self.unselected_icon()
        };

        if active {
            write!(f, "> {} {}", icon, text)
        } else {
            write!(f, "  {} {}", icon, text)
        }
    }

    fn format_sort_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_sort_prompt(f, prompt)
    }

    fn format_sort_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        picked: bool,
        active: bool,
    ) -> fmt::Result {
        self.inner.format_sort_prompt_item(f, text, picked, active)
    }
}
