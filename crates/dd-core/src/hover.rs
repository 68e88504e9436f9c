//! Hover card state and styling
//!
//! The card is shown while the pointer is over its anchor. All visual
//! changes (entrance transition, link hover) are selected from state
//! rather than applied to the DOM directly.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PLACEHOLDER_ICON: &str = "/assets/placeholder.svg";
pub const SEARCH_BASE: &str = "https://www.google.com/search";

/// Accent color for a card's border, pointer and shadow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    /// Parse `#rgb` or `#rrggbb`
    pub fn parse(value: &str) -> CoreResult<Self> {
        let invalid = || CoreError::Color(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let double = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Self {
                    r: double(0)?,
                    g: double(1)?,
                    b: double(2)?,
                })
            }
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(invalid()),
        }
    }

    /// `rgba(...)` with the given opacity, clamped to 0..=1
    pub fn tint(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        // indigo-500
        Self {
            r: 0x63,
            g: 0x66,
            b: 0xf1,
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// What a hover card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverCardContent {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub color: String,
}

impl HoverCardContent {
    pub fn icon_src(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .unwrap_or(PLACEHOLDER_ICON)
    }

    /// Parsed accent, falling back to the default on bad input
    pub fn accent(&self) -> AccentColor {
        AccentColor::parse(&self.color).unwrap_or_else(|err| {
            tracing::warn!(card = %self.name, error = %err, "using default hover card accent");
            AccentColor::default()
        })
    }

    pub fn search_url(&self) -> String {
        search_url(&self.name)
    }

    pub fn card_style(&self) -> String {
        let accent = self.accent();
        format!(
            "border-color: {}; box-shadow: 0 10px 25px -5px {}",
            accent.tint(0.45),
            accent.tint(0.35)
        )
    }

    /// Outer layer of the pointer triangle
    pub fn pointer_style(&self) -> String {
        format!("border-top-color: {}", self.accent().tint(0.45))
    }
}

/// Outbound search link for a card name
///
/// The name is percent-encoded with spaces as `%20`. Form encoding leaves
/// a bare `+` only where the input had a space, since a literal `+` is
/// already escaped to `%2B`.
pub fn search_url(name: &str) -> String {
    let query = url::form_urlencoded::byte_serialize(name.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{}?q={}", SEARCH_BASE, query)
}

/// Per-anchor visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverCardState {
    visible: bool,
    link_hovered: bool,
}

impl HoverCardState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_link_hovered(&self) -> bool {
        self.link_hovered
    }

    pub fn pointer_enter(&mut self) {
        self.visible = true;
    }

    pub fn pointer_leave(&mut self) {
        self.visible = false;
        self.link_hovered = false;
    }

    pub fn link_enter(&mut self) {
        if self.visible {
            self.link_hovered = true;
        }
    }

    pub fn link_leave(&mut self) {
        self.link_hovered = false;
    }

    /// Entrance transition classes: fade, lift and scale in, reversed on exit
    pub fn transition_class(&self) -> &'static str {
        if self.visible {
            "opacity-100 translate-y-0 scale-100"
        } else {
            "opacity-0 translate-y-2 scale-95 pointer-events-none"
        }
    }

    pub fn link_class(&self) -> &'static str {
        if self.link_hovered {
            "opacity-80"
        } else {
            "opacity-100"
        }
    }
}
