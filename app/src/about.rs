use leptos::{
    html::{a, div, h1, li, p, ul},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{brand::ACCENT_HOVER_CLASS, components::icons};

const UNIVERSITY_URL: &str = "https://www.h-brs.de";

/// Renders the about page.
pub fn component() -> impl IntoView {
    div().class("flex flex-col gap-6").child((
        Title(TitleProps::builder().text("About \u{2013} H-BRS").build()),
        div().class("flex flex-row gap-2 items-center").child((
            icons::icon(icons::INFO, "size-6"),
            h1().class("text-2xl font-bold").child("About"),
        )),
        p().class("text-gray-300").child(
            "This site collects projects and course material from the Hochschule Bonn-Rhein-Sieg.",
        ),
        ul().class("flex flex-col gap-2 text-gray-300").child((
            li().class("flex flex-row gap-2 items-center").child((
                icons::icon(icons::LANGUAGES, "size-4"),
                "Pages are written in English.",
            )),
            li().class("flex flex-row gap-2 items-center").child((
                icons::icon(icons::SHIELD_CHECK, "size-4"),
                "The site sets no cookies and loads no third-party scripts.",
            )),
        )),
        a().href(UNIVERSITY_URL)
            .rel("noopener noreferrer")
            .target("_blank")
            .class(format!("underline transition-all duration-500 {ACCENT_HOVER_CLASS}"))
            .child("h-brs.de"),
    ))
}
