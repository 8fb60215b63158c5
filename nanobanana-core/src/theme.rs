//! Built-in cosmetic themes
//!
//! Themes are per-list and purely presentational. The set is fixed;
//! list state stores only the theme id and resolves it leniently so
//! that an id from a newer or older build never breaks loading.

/// What a theme paints behind the task list.
///
/// Image paths are bundled asset names; terminal frontends that cannot
/// show them fall back to the accent color alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Image(&'static str),
    Gradient(&'static str, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Accent color as `#rrggbb`
    pub color: &'static str,
    pub background: Background,
    pub animated: bool,
}

pub const THEMES: &[Theme] = &[
    Theme {
        id: "default",
        name: "Banana",
        color: "#ffe135",
        background: Background::Image("background.png"),
        animated: false,
    },
    Theme {
        id: "ocean",
        name: "Ocean",
        color: "#00bfff",
        background: Background::Gradient("#2b5876", "#4e4376"),
        animated: true,
    },
    Theme {
        id: "forest",
        name: "Forest",
        color: "#2ecc71",
        background: Background::Gradient("#134e5e", "#71b280"),
        animated: true,
    },
    Theme {
        id: "sunset",
        name: "Sunset",
        color: "#ff7e5f",
        background: Background::Gradient("#ff7e5f", "#feb47b"),
        animated: true,
    },
    Theme {
        id: "night",
        name: "Night",
        color: "#a8c0ff",
        background: Background::Gradient("#000428", "#004e92"),
        animated: true,
    },
    Theme {
        id: "aurora",
        name: "Aurora",
        color: "#00ffcc",
        background: Background::Gradient("#00c6ff", "#0072ff"),
        animated: true,
    },
    Theme {
        id: "candy",
        name: "Candy",
        color: "#ff69b4",
        background: Background::Gradient("#ff9a9e", "#fecfef"),
        animated: true,
    },
    Theme {
        id: "nature",
        name: "Nature",
        color: "#a8e6cf",
        background: Background::Image("cena-da-natureza-com-rio-e-floresta.png"),
        animated: false,
    },
    Theme {
        id: "galaxy",
        name: "Galaxy",
        color: "#dcedc1",
        background: Background::Image("m31.png"),
        animated: false,
    },
    Theme {
        id: "dust",
        name: "Cosmic",
        color: "#ffd3b6",
        background: Background::Image("pia26533.png"),
        animated: false,
    },
    Theme {
        id: "nebula",
        name: "Nebula",
        color: "#ffaaa5",
        background: Background::Image("stsci-01hs1nz60mj0qymsphbdyvtnqz.png"),
        animated: false,
    },
    Theme {
        id: "webb",
        name: "Webb",
        color: "#ff8b94",
        background: Background::Image("web-first-images-release.png"),
        animated: false,
    },
];

/// Resolve a theme id, falling back to the first theme for unknown ids
pub fn theme_or_default(id: &str) -> &'static Theme {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}

/// Parse a `#rrggbb` accent color. Returns `None` for malformed values.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unknown_theme_falls_back_to_first() {
        assert_eq!(theme_or_default("nope").id, "default");
        assert_eq!(theme_or_default("ocean").name, "Ocean");
    }

    #[test]
    fn test_theme_ids_are_unique() {
        let ids: HashSet<&str> = THEMES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), THEMES.len());
    }

    #[test]
    fn test_every_accent_color_parses() {
        for theme in THEMES {
            assert!(parse_hex(theme.color).is_some(), "theme {}", theme.id);
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ffe135"), Some((255, 225, 53)));
        assert_eq!(parse_hex("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex("ffe135"), None);
        assert_eq!(parse_hex("#ffe13"), None);
        assert_eq!(parse_hex("#gge135"), None);
    }
}
