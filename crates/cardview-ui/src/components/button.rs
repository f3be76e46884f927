//! Button Components
//!
//! Button styles used on the card:
//! - Primary: Filled slate action button
//! - Outline: Bordered, transparent background (icon links)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action button - filled, light text
    #[default]
    Primary,
    /// Bordered button on transparent background
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Join a base class with optional extra classes
fn with_extra_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Classes for an icon link: variant, shape, then extras
fn icon_link_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    with_extra_class(&format!("{} icon-link", variant.class()), extra)
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| save_contact(),
///         Icon { kind: IconKind::Download }
///         "Save Contact"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = with_extra_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Square icon button that opens an external link
#[derive(Clone, PartialEq, Props)]
pub struct IconLinkProps {
    /// Visual style variant
    #[props(default = ButtonVariant::Outline)]
    pub variant: ButtonVariant,
    /// The icon content
    pub children: Element,
    /// Link target
    pub href: String,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconLink(props: IconLinkProps) -> Element {
    let full_class = icon_link_class(props.variant, props.class.as_deref());

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            "aria-label": "{props.aria_label}",
            {props.children}
        }
    }
}
