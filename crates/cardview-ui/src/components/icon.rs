//! Inline SVG Icons
//!
//! Outline icons on a 24x24 grid, stroked with the current text color.

use dioxus::prelude::*;

/// Icons used on the business card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Mail,
    Phone,
    MapPin,
    Globe,
    Linkedin,
    Github,
    Download,
}

impl IconKind {
    /// Human-readable name, used for accessible labels
    pub fn label(&self) -> &'static str {
        match self {
            IconKind::Mail => "Email",
            IconKind::Phone => "Phone",
            IconKind::MapPin => "Location",
            IconKind::Globe => "Website",
            IconKind::Linkedin => "LinkedIn",
            IconKind::Github => "GitHub",
            IconKind::Download => "Download",
        }
    }

    /// SVG path data, drawn in order
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 \
                 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 \
                 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            IconKind::Globe => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
            ],
            IconKind::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 \
                 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 \
                 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            IconKind::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "M7 10l5 5 5-5",
                "M12 15V3",
            ],
        }
    }
}

/// Inline SVG icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { kind: IconKind::Mail }
///     Icon { kind: IconKind::Download, size: 16 }
/// }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    kind: IconKind,
    /// Rendered width and height in pixels
    #[props(default = 20)]
    size: u32,
) -> Element {
    rsx! {
        svg {
            class: "icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in kind.paths().iter() {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconKind; 7] = [
        IconKind::Mail,
        IconKind::Phone,
        IconKind::MapPin,
        IconKind::Globe,
        IconKind::Linkedin,
        IconKind::Github,
        IconKind::Download,
    ];

    #[test]
    fn every_icon_has_paths() {
        for kind in ALL {
            assert!(!kind.paths().is_empty(), "{:?} has no paths", kind);
            for d in kind.paths() {
                assert!(d.starts_with('M') || d.starts_with('m'), "{:?}: {}", kind, d);
            }
        }
    }

    #[test]
    fn social_labels() {
        assert_eq!(IconKind::Linkedin.label(), "LinkedIn");
        assert_eq!(IconKind::Github.label(), "GitHub");
    }
}
