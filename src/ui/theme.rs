use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "parchment", "gruvbox", "nord"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub accent_secondary: Color,
    pub bg_dark: Color,
    pub bg_panel: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,

    // ── Checkboxes ───────────────────────────────────────────
    pub check_on: Color,
    pub check_off: Color,
    pub water: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default dark theme.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            accent: Color::Rgb(99, 179, 237),
            accent_secondary: Color::Rgb(129, 230, 217),
            bg_dark: Color::Rgb(22, 22, 30),
            bg_panel: Color::Rgb(30, 30, 42),
            text_primary: Color::Rgb(220, 220, 235),
            text_dim: Color::Rgb(120, 120, 145),
            text_muted: Color::Rgb(80, 80, 100),
            success: Color::Rgb(72, 199, 142),
            warning: Color::Rgb(255, 193, 69),
            check_on: Color::Rgb(72, 199, 142),
            check_off: Color::Rgb(80, 80, 100),
            water: Color::Rgb(99, 179, 237),
            border: Color::Rgb(55, 55, 75),
        }
    }

    /// Warm paper notebook.
    pub fn parchment() -> Self {
        Self {
            name: "parchment".to_string(),
            accent: Color::Rgb(120, 72, 32),            // ink brown
            accent_secondary: Color::Rgb(86, 110, 52),  // leaf
            bg_dark: Color::Rgb(48, 38, 28),
            bg_panel: Color::Rgb(238, 225, 196),        // paper
            text_primary: Color::Rgb(52, 40, 30),
            text_dim: Color::Rgb(110, 92, 70),
            text_muted: Color::Rgb(160, 142, 116),
            success: Color::Rgb(86, 110, 52),
            warning: Color::Rgb(176, 112, 20),
            check_on: Color::Rgb(60, 45, 35),           // pencil mark
            check_off: Color::Rgb(160, 142, 116),
            water: Color::Rgb(52, 90, 130),
            border: Color::Rgb(140, 110, 80),
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            accent: Color::Rgb(215, 153, 33),            // yellow
            accent_secondary: Color::Rgb(142, 192, 124), // green
            bg_dark: Color::Rgb(40, 40, 40),             // bg0
            bg_panel: Color::Rgb(50, 48, 47),            // bg0_s
            text_primary: Color::Rgb(235, 219, 178),     // fg
            text_dim: Color::Rgb(168, 153, 132),         // fg4
            text_muted: Color::Rgb(102, 92, 84),         // bg4
            success: Color::Rgb(142, 192, 124),
            warning: Color::Rgb(250, 189, 47),
            check_on: Color::Rgb(184, 187, 38),
            check_off: Color::Rgb(102, 92, 84),
            water: Color::Rgb(131, 165, 152),
            border: Color::Rgb(80, 73, 69),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent: Color::Rgb(136, 192, 208),           // nord8 frost
            accent_secondary: Color::Rgb(143, 188, 187), // nord7
            bg_dark: Color::Rgb(46, 52, 64),             // nord0
            bg_panel: Color::Rgb(59, 66, 82),            // nord1
            text_primary: Color::Rgb(236, 239, 244),     // nord6
            text_dim: Color::Rgb(216, 222, 233),         // nord4
            text_muted: Color::Rgb(76, 86, 106),         // nord3
            success: Color::Rgb(163, 190, 140),          // nord14
            warning: Color::Rgb(235, 203, 139),          // nord13
            check_on: Color::Rgb(163, 190, 140),
            check_off: Color::Rgb(76, 86, 106),
            water: Color::Rgb(94, 129, 172),             // nord10
            border: Color::Rgb(67, 76, 94),              // nord2
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "parchment" => Some(Self::parchment()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme. Custom themes cycle back to the first.
    pub fn next_builtin(&self) -> Self {
        let idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = BUILTIN_THEME_NAMES[idx % BUILTIN_THEME_NAMES.len()];
        Self::by_name(next).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file, falling back to default for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    /// Resolve a configured name: built-in first, then a custom theme file.
    pub fn resolve(name: &str) -> Self {
        Self::by_name(name)
            .or_else(|| Self::from_toml_file(&crate::constants::custom_theme_path(name)))
            .unwrap_or_default()
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn check_style(&self, checked: bool) -> Style {
        if checked {
            Style::default()
                .fg(self.check_on)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.check_off)
        }
    }

    /// Color for a time progress percentage: further along is greener.
    pub fn progress_color(&self, percent: f64) -> Color {
        if percent >= 100.0 {
            self.success
        } else if percent >= 60.0 {
            self.accent_secondary
        } else if percent >= 20.0 {
            self.warning
        } else {
            self.text_dim
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Whole-card style while the fade-out runs.
    pub fn fading_style(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional; missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    accent_secondary: Option<String>,
    bg_dark: Option<String>,
    bg_panel: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    success: Option<String>,
    warning: Option<String>,
    check_on: Option<String>,
    check_off: Option<String>,
    water: Option<String>,
    border: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        Theme {
            name: name.to_string(),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            accent_secondary: parse_color(&self.accent_secondary).unwrap_or(base.accent_secondary),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            bg_panel: parse_color(&self.bg_panel).unwrap_or(base.bg_panel),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            success: parse_color(&self.success).unwrap_or(base.success),
            warning: parse_color(&self.warning).unwrap_or(base.warning),
            check_on: parse_color(&self.check_on).unwrap_or(base.check_on),
            check_off: parse_color(&self.check_off).unwrap_or(base.check_off),
            water: parse_color(&self.water).unwrap_or(base.water),
            border: parse_color(&self.border).unwrap_or(base.border),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_color ───────────────────────────────────────────────

    #[test]
    fn parse_color_with_and_without_hash() {
        assert_eq!(
            parse_color(&Some("#FF8800".to_string())),
            Some(Color::Rgb(255, 136, 0))
        );
        assert_eq!(
            parse_color(&Some("ff8800".to_string())),
            Some(Color::Rgb(255, 136, 0))
        );
    }

    #[test]
    fn parse_color_rejects_bad_input() {
        assert_eq!(parse_color(&None), None);
        assert_eq!(parse_color(&Some("#FFF".to_string())), None);
        assert_eq!(parse_color(&Some("#GGHHII".to_string())), None);
    }

    // ── by_name / next_builtin ────────────────────────────────────

    #[test]
    fn by_name_all_builtins() {
        for &name in BUILTIN_THEME_NAMES {
            let theme = Theme::by_name(name);
            assert!(theme.is_some(), "Theme '{}' should exist", name);
            assert_eq!(theme.unwrap().name, name);
        }
        assert!(Theme::by_name("PARCHMENT").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn next_builtin_wraps_around() {
        let mut theme = Theme::default_dark();
        for _ in 0..BUILTIN_THEME_NAMES.len() {
            theme = theme.next_builtin();
        }
        assert_eq!(theme.name, "default");
    }

    #[test]
    fn next_builtin_from_custom_starts_over() {
        let custom = ThemeFile::default().into_theme("mine");
        assert_eq!(custom.next_builtin().name, "default");
    }

    // ── custom theme files ────────────────────────────────────────

    #[test]
    fn from_toml_file_overrides_some_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meadow.toml");
        std::fs::write(&path, "accent = \"#112233\"\n").unwrap();

        let theme = Theme::from_toml_file(&path).unwrap();
        assert_eq!(theme.name, "meadow");
        assert_eq!(theme.accent, Color::Rgb(17, 34, 51));
        assert_eq!(theme.border, Theme::default_dark().border);
    }

    #[test]
    fn from_toml_file_ignores_unused_color_roles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.toml");
        std::fs::write(&path, "danger = \"#ff0000\"\ninfo = \"#0000ff\"\nwater = \"#0000aa\"\n")
            .unwrap();

        let theme = Theme::from_toml_file(&path).unwrap();
        assert_eq!(theme.water, Color::Rgb(0, 0, 170));
        assert_eq!(theme.accent, Theme::default_dark().accent);
    }

    #[test]
    fn resolve_unknown_falls_back_to_default() {
        assert_eq!(Theme::resolve("does-not-exist-anywhere").name, "default");
        assert_eq!(Theme::resolve("nord").name, "nord");
    }

    // ── progress_color ────────────────────────────────────────────

    #[test]
    fn progress_color_steps() {
        let t = Theme::default_dark();
        assert_eq!(t.progress_color(0.0), t.text_dim);
        assert_eq!(t.progress_color(20.0), t.warning);
        assert_eq!(t.progress_color(60.0), t.accent_secondary);
        assert_eq!(t.progress_color(100.0), t.success);
    }
}
