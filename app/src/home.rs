//! This module defines the `home` component, the landing page.
//!
//! It shows the brand mark at hero size and a grid of feature cards, each
//! headed by one of the re-exported icons.

use leptos::{
    html::{div, h1, h2, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    brand::{ACCENT_HOVER_CLASS, MARK},
    components::{icons, logo},
    types::{Feature, PresentationAttributes},
};

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: icons::INFO,
        title: "About the project",
        summary: "What the project is, who runs it and how to get in touch.",
    },
    Feature {
        icon: icons::BRAIN_CIRCUIT,
        title: "AI research",
        summary: "Student and faculty work on machine learning and intelligent systems.",
    },
    Feature {
        icon: icons::LAYOUT_GRID,
        title: "Modules",
        summary: "Course modules grouped by semester and focus area.",
    },
    Feature {
        icon: icons::PALETTE,
        title: "Design",
        summary: "The mark follows the surrounding text color on light and dark pages.",
    },
    Feature {
        icon: icons::LANGUAGES,
        title: "Languages",
        summary: "Content is written for an international audience.",
    },
    Feature {
        icon: icons::SHIELD_CHECK,
        title: "Privacy",
        summary: "No tracking and no third-party scripts.",
    },
];

fn feature_card(feature: Feature) -> impl IntoView {
    div()
        .class(format!(
            "flex flex-col gap-2 p-4 rounded-lg transition-all duration-500 bg-card {ACCENT_HOVER_CLASS}"
        ))
        .child((
            div().class("flex flex-row gap-2 items-center").child((
                icons::icon(feature.icon, "size-5"),
                h2().class("text-base font-semibold").child(feature.title),
            )),
            p().class("text-sm text-gray-300").child(feature.summary),
        ))
}

/// Renders the landing page.
pub fn component() -> impl IntoView {
    div().class("flex flex-col gap-10").child((
        Title(TitleProps::builder().text(MARK).build()),
        section().class("flex flex-col gap-4 items-center text-center text-[#2a3a8c]").child((
            logo::component(
                PresentationAttributes::new()
                    .with("width", "96")
                    .with("height", "96")
                    .with("role", "img")
                    .with("aria-label", MARK),
            ),
            h1().class("text-3xl font-bold text-white").child("Hochschule Bonn-Rhein-Sieg"),
            p().class("text-gray-400").child("Projects, modules and research in one place."),
        )),
        section()
            .class("grid grid-cols-1 gap-4 sm:grid-cols-2 md:grid-cols-3")
            .child(FEATURES.into_iter().map(feature_card).collect_view()),
    ))
}
