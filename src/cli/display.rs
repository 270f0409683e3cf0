// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the certsearch CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. Respects `NO_COLOR` and falls back to
//! plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `CERTSEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use certsearch::{mark, Level, MatchType, ResourceKind};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("CERTSEARCH_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            // "Dark" means dark mode; absence or error means light mode
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

/// Colors by what they mark, one set per theme.
#[derive(Debug, PartialEq, Eq)]
struct Palette {
    /// Section labels, prompt, focus marker
    accent: Rgb,
    /// Box borders and secondary text
    muted: Rgb,
    /// Domain names and course links
    link: Rgb,
    /// Exact hits and top scores
    strong: Rgb,
    /// Partial hits, entry level, practice exams
    good: Rgb,
    /// Intermediate level, videos, matched text
    warm: Rgb,
    /// Advanced level
    hot: Rgb,
    /// Semantic hits and books
    related: Rgb,
}

const ONEDARK: Palette = Palette {
    accent: (86, 182, 194),   // #56b6c2
    muted: (92, 99, 112),     // #5c6370
    link: (97, 175, 239),     // #61afef
    strong: (166, 226, 46),
    good: (152, 195, 121),    // #98c379
    warm: (229, 192, 123),    // #e5c07b
    hot: (224, 108, 117),     // #e06c75
    related: (198, 120, 221), // #c678dd
};

const ONE_LIGHT: Palette = Palette {
    accent: (1, 132, 188),    // #0184bc
    muted: (160, 161, 167),   // #a0a1a7
    link: (64, 120, 242),     // #4078f2
    strong: (68, 140, 39),
    good: (80, 161, 79),      // #50a14f
    warm: (193, 132, 1),      // #c18401
    hot: (228, 86, 73),       // #e45649
    related: (166, 38, 164),  // #a626a4
};

fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &ONEDARK,
        Theme::Light => &ONE_LIGHT,
    }
}

/// True color escape sequence
fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub fn accent() -> String {
    rgb(palette().accent)
}

pub fn muted() -> String {
    rgb(palette().muted)
}

pub fn link() -> String {
    rgb(palette().link)
}

fn strong() -> String {
    rgb(palette().strong)
}

pub fn good() -> String {
    rgb(palette().good)
}

fn warm() -> String {
    rgb(palette().warm)
}

fn hot() -> String {
    rgb(palette().hot)
}

fn related() -> String {
    rgb(palette().related)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Greedy word wrap on plain text.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = muted();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        RESET,
        content,
        " ".repeat(pad),
        border,
        RESET
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = muted();
    let colored_label = themed(accent, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let border = muted();
    let colored_label = themed(accent, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}├{}{}{}{}┤{}",
        border,
        RESET,
        label_part,
        border,
        "─".repeat(remaining),
        RESET
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = muted();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), RESET);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded match type badge, fixed width
pub fn match_type_badge(match_type: MatchType) -> String {
    let label = format!("{:<8}", match_type.as_str());
    if !use_colors() {
        return label;
    }
    let color = match match_type {
        MatchType::Exact => strong(),
        MatchType::Partial => good(),
        MatchType::Semantic => related(),
        MatchType::Fuzzy => muted(),
    };
    format!("{}{}{}", color, label, RESET)
}

/// Color-coded level label
pub fn level_label(level: Level) -> String {
    if !use_colors() {
        return level.as_str().to_string();
    }
    let color = match level {
        Level::Entry => good(),
        Level::Intermediate => warm(),
        Level::Advanced => hot(),
    };
    format!("{}{}{}", color, level.as_str(), RESET)
}

/// Color-coded resource kind badge
pub fn resource_badge(kind: ResourceKind) -> String {
    if !use_colors() {
        return format!("[{}]", kind.as_str());
    }
    let color = match kind {
        ResourceKind::Course => link(),
        ResourceKind::Book => related(),
        ResourceKind::Practice => good(),
        ResourceKind::Documentation => accent(),
        ResourceKind::Video => warm(),
    };
    format!("{}[{}]{}", color, kind.as_str(), RESET)
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:>5.1}", score);
    }
    let color = if score >= 100.0 {
        strong()
    } else if score >= 50.0 {
        good()
    } else if score >= 20.0 {
        warm()
    } else {
        muted()
    };
    format!("{}{:>5.1}{}", color, score, RESET)
}

/// Text with every match of `query` in bold yellow
pub fn highlight_matches(text: &str, query: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let open = format!("{}{}", BOLD, warm());
    mark(text, query, &open, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
