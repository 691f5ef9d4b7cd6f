//! The icon symbols the site uses, forwarded from the Lucide set in `icondata`.
//!
//! [`ALL`] is the only place that names upstream symbols. Swapping the icon
//! library means editing that table and the constants next to it.

use icondata::Icon;
use leptos::{prelude::*, svg::svg};

pub const INFO: Icon = icondata::LuInfo;
pub const BRAIN_CIRCUIT: Icon = icondata::LuBrainCircuit;
pub const LAYOUT_GRID: Icon = icondata::LuLayoutGrid;
pub const PALETTE: Icon = icondata::LuPalette;
pub const LANGUAGES: Icon = icondata::LuLanguages;
pub const SHIELD_CHECK: Icon = icondata::LuShieldCheck;
pub const GITHUB: Icon = icondata::LuGithub;
pub const HEART: Icon = icondata::LuHeart;

/// Local name to upstream symbol.
pub const ALL: [(&str, Icon); 8] = [
    ("Info", INFO),
    ("BrainCircuit", BRAIN_CIRCUIT),
    ("LayoutGrid", LAYOUT_GRID),
    ("Palette", PALETTE),
    ("Languages", LANGUAGES),
    ("ShieldCheck", SHIELD_CHECK),
    ("Github", GITHUB),
    ("Heart", HEART),
];

#[must_use]
pub fn lookup(name: &str) -> Option<Icon> {
    ALL.iter()
        .find(|(local, _)| *local == name)
        .map(|(_, icon)| *icon)
}

/// Renders `icon` as inline SVG with the symbol's own presentation.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", icon.view_box)
        .attr("fill", icon.fill)
        .attr("stroke", icon.stroke)
        .attr("stroke-width", icon.stroke_width)
        .attr("stroke-linecap", icon.stroke_linecap)
        .attr("stroke-linejoin", icon.stroke_linejoin)
        .attr("aria-hidden", "true")
        .class(class)
        .inner_html(icon.data)
}
