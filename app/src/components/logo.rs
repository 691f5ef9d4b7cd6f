//! This module defines the `logo` component, the inline H-BRS brand mark.
//!
//! The mark is a rounded square painted with `currentColor`, so it follows the
//! surrounding text color, and a centered label that is always drawn in the
//! brand accent. Callers customise it through [`PresentationAttributes`], which
//! are merged onto the root `<svg>` by [`merge_attributes`].

use leptos::{html::span, logging, prelude::*};

use crate::{
    brand::{ACCENT_COLOR, MARK},
    types::PresentationAttributes,
};

/// Internal coordinate space. Fixed so the artwork scales uniformly.
pub const VIEW_BOX: &str = "0 0 100 100";
/// Rendered width and height unless the caller overrides them.
pub const DEFAULT_SIZE: &str = "32";
pub const CORNER_RADIUS: u32 = 12;
pub const FONT_SIZE: u32 = 40;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const DEFAULTS: [(&str, &str); 3] = [
    ("width", DEFAULT_SIZE),
    ("height", DEFAULT_SIZE),
    ("fill", "currentColor"),
];

const PROTECTED: [(&str, &str); 2] = [("viewBox", VIEW_BOX), ("xmlns", SVG_NAMESPACE)];

/// How a shape of the logo is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Inherits the ambient foreground color.
    CurrentColor,
    Fixed(&'static str),
}

impl Paint {
    /// Value of the `fill` attribute for this paint.
    #[must_use]
    pub const fn as_attribute(self) -> &'static str {
        match self {
            Self::CurrentColor => "currentColor",
            Self::Fixed(color) => color,
        }
    }

    /// The color actually drawn when the ambient foreground is `current_color`.
    #[must_use]
    pub fn resolve(self, current_color: &str) -> &str {
        match self {
            Self::CurrentColor => current_color,
            Self::Fixed(color) => color,
        }
    }
}

/// Merges attribute layers onto one element.
///
/// Precedence, lowest to highest: `defaults`, `caller`, `protected`. Names
/// compare ASCII case-insensitively throughout, as HTML parsers fold `Width`
/// onto `width` and `viewbox` onto `viewBox`; a replaced entry keeps the
/// spelling it had first. A caller entry naming a protected attribute is
/// dropped, as is one whose name is malformed or an event handler (`on*`).
#[must_use]
pub fn merge_attributes(
    defaults: &[(&str, &str)],
    caller: &PresentationAttributes,
    protected: &[(&str, &str)],
) -> PresentationAttributes {
    let mut merged: PresentationAttributes = defaults.iter().copied().collect();

    for (name, value) in caller.iter() {
        if protected
            .iter()
            .any(|(protected_name, _)| protected_name.eq_ignore_ascii_case(name))
        {
            logging::warn!("Ignoring protected logo attribute `{name}`");
            continue;
        }
        if !is_attribute_name(name) {
            logging::warn!("Ignoring malformed logo attribute name {name:?}");
            continue;
        }
        merged.set_ignore_ascii_case(name, value);
    }

    for &(name, value) in protected {
        merged.set_ignore_ascii_case(name, value);
    }
    merged
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
        && name.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Structural model of one rendering of the logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    attributes: PresentationAttributes,
    background: Paint,
    label: Paint,
}

impl Logo {
    #[must_use]
    pub fn new(caller: &PresentationAttributes) -> Self {
        Self {
            attributes: merge_attributes(&DEFAULTS, caller, &PROTECTED),
            background: Paint::CurrentColor,
            label: Paint::Fixed(ACCENT_COLOR),
        }
    }

    /// Attributes of the root `<svg>` after merging.
    #[must_use]
    pub const fn attributes(&self) -> &PresentationAttributes {
        &self.attributes
    }

    #[must_use]
    pub fn background_color<'a>(&self, current_color: &'a str) -> &'a str {
        self.background.resolve(current_color)
    }

    #[must_use]
    pub fn label_color<'a>(&self, current_color: &'a str) -> &'a str {
        self.label.resolve(current_color)
    }

    /// Serializes the logo as standalone SVG markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut markup = String::from("<svg");
        for (name, value) in self.attributes.iter() {
            markup.push_str(&format!(r#" {name}="{}""#, escape(value)));
        }
        markup.push_str(&format!(
            r#"><rect width="100" height="100" rx="{CORNER_RADIUS}" fill="{}"/>"#,
            self.background.as_attribute()
        ));
        markup.push_str(&format!(
            r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-size="{FONT_SIZE}" font-weight="bold" fill="{}">{}</text></svg>"#,
            self.label.as_attribute(),
            escape(MARK)
        ));
        markup
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self::new(&PresentationAttributes::new())
    }
}

/// Renders the logo inline.
///
/// The `<svg>` is mounted inside a `display: contents` span, which adds no
/// layout box of its own. `attributes` land on the `<svg>`; see
/// [`merge_attributes`] for what a caller can and cannot override.
pub fn component(attributes: PresentationAttributes) -> impl IntoView {
    span()
        .class("contents")
        .inner_html(Logo::new(&attributes).to_markup())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let logo = Logo::default();
        let attributes = logo.attributes();

        assert_eq!(attributes.get("width"), Some("32"));
        assert_eq!(attributes.get("height"), Some("32"));
        assert_eq!(attributes.get("viewBox"), Some(VIEW_BOX));
        assert_eq!(attributes.get("fill"), Some("currentColor"));
    }

    #[test]
    fn test_caller_overrides_size_but_not_view_box() {
        let caller = PresentationAttributes::new()
            .with("width", "64")
            .with("viewBox", "0 0 10 10")
            .with("VIEWBOX", "0 0 20 20");
        let logo = Logo::new(&caller);

        assert_eq!(logo.attributes().get("width"), Some("64"));
        assert_eq!(logo.attributes().get("height"), Some("32"));
        assert_eq!(logo.attributes().get("viewBox"), Some(VIEW_BOX));
        assert_eq!(logo.attributes().get("VIEWBOX"), None);
        assert_eq!(logo.to_markup().matches("viewBox").count(), 1);
    }

    #[test]
    fn test_merge_precedence() {
        let caller = PresentationAttributes::new()
            .with("b", "caller")
            .with("c", "caller")
            .with("extra", "caller");
        let merged = merge_attributes(&[("a", "default"), ("b", "default")], &caller, &[("c", "pinned")]);

        assert_eq!(
            merged.iter().collect::<Vec<_>>(),
            vec![
                ("a", "default"),
                ("b", "caller"),
                ("extra", "caller"),
                ("c", "pinned"),
            ]
        );
    }

    #[test]
    fn test_malformed_names_are_dropped() {
        let caller = PresentationAttributes::new()
            .with("onload=\"x\"", "1")
            .with("", "1")
            .with("data-id", "logo");
        let logo = Logo::new(&caller);

        assert_eq!(logo.attributes().len(), 6);
        assert_eq!(logo.attributes().get("data-id"), Some("logo"));
    }

    #[test]
    fn test_default_keys_override_ignoring_case() {
        let caller = PresentationAttributes::new()
            .with("Width", "64")
            .with("HEIGHT", "48")
            .with("Fill", "red");
        let logo = Logo::new(&caller);
        let attributes = logo.attributes();

        assert_eq!(attributes.len(), 5);
        assert_eq!(attributes.get("width"), Some("64"));
        assert_eq!(attributes.get("height"), Some("48"));
        assert_eq!(attributes.get("fill"), Some("red"));
        assert_eq!(attributes.get("Width"), None);

        let markup = logo.to_markup();
        let root = &markup[..markup.find('>').unwrap()];
        assert_eq!(root.to_ascii_lowercase().matches(" width=").count(), 1);
        assert_eq!(root.to_ascii_lowercase().matches(" height=").count(), 1);
    }

    #[test]
    fn test_event_handler_names_are_dropped() {
        let caller = PresentationAttributes::new()
            .with("onclick", "alert(1)")
            .with("OnLoad", "alert(2)")
            .with("opacity", "0.5");
        let logo = Logo::new(&caller);

        assert_eq!(logo.attributes().get("onclick"), None);
        assert_eq!(logo.attributes().get("OnLoad"), None);
        assert_eq!(logo.attributes().get("opacity"), Some("0.5"));
        assert!(!logo.to_markup().to_ascii_lowercase().contains("alert"));
    }

    #[test]
    fn test_single_rect_and_label() {
        let markup = Logo::default().to_markup();

        assert_eq!(markup.matches("<rect").count(), 1);
        assert_eq!(markup.matches("<text").count(), 1);
        assert!(markup.contains(r#"rx="12""#));
        assert!(markup.contains(">H-BRS</text>"));
    }

    #[test]
    fn test_label_keeps_accent() {
        let caller = PresentationAttributes::new()
            .with("fill", "red")
            .with("color", "#000000");
        let logo = Logo::new(&caller);
        let markup = logo.to_markup();

        assert!(markup.contains(r##"font-weight="bold" fill="#FFDA63""##));
        assert_eq!(logo.label_color("#000000"), ACCENT_COLOR);
        assert_eq!(logo.label_color("white"), ACCENT_COLOR);
    }

    #[test]
    fn test_background_follows_current_color() {
        let logo = Logo::default();

        assert!(logo.to_markup().contains(r#"rx="12" fill="currentColor""#));
        assert_eq!(logo.background_color("#1e1e1e"), "#1e1e1e");
        assert_eq!(logo.background_color("white"), "white");
        assert_ne!(logo.background_color("white"), logo.background_color("black"));
    }

    #[test]
    fn test_values_are_escaped() {
        let caller = PresentationAttributes::new().with("aria-label", r#"a "quoted" <label> & more"#);
        let markup = Logo::new(&caller).to_markup();

        assert!(markup.contains(r#"aria-label="a &quot;quoted&quot; &lt;label&gt; &amp; more""#));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let caller = PresentationAttributes::new().with("class", "size-8");
        assert_eq!(Logo::new(&caller).to_markup(), Logo::new(&caller).to_markup());
    }

    #[test]
    fn test_paint_attribute_values() {
        assert_eq!(Paint::CurrentColor.as_attribute(), "currentColor");
        assert_eq!(Paint::Fixed(ACCENT_COLOR).as_attribute(), "#FFDA63");
    }
}
