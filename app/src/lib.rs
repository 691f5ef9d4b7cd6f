// Core application modules and components
use crate::components::{error_template, header, icons};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, head, html, link, meta, span},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod about;
pub mod brand;
pub mod components;
mod home;
pub mod types;

pub use components::logo::Logo;

/// Path the server answers with the logo as a standalone SVG document.
pub const FAVICON_PATH: &str = "/favicon.svg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            link().rel("icon").attr("type", "image/svg+xml").href(FAVICON_PATH),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/hbrs.css")
                    .build(),
            ),
            Title(TitleProps::builder().text(brand::MARK).build()),
        )),
        body().class("bg-[#1e1e1e]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto text-white font-poppins">
                {header::component}
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto mt-20 max-w-4xl md:px-0">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(outside_errors)
                    }>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=StaticSegment("about") view=about::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center md:py-4 bg-[#1e1e1e]/80 backdrop-blur-md")
        .child(
            div().class("flex flex-row gap-1 justify-center items-center text-gray-400").child((
                "Made with",
                span()
                    .attr("style", format!("color: {}", brand::ACCENT_COLOR))
                    .attr("aria-label", "love")
                    .child(icons::icon(icons::HEART, "size-4")),
                "at",
                a()
                    .href("https://www.h-brs.de")
                    .class(format!("hover:underline {}", brand::ACCENT_HOVER_CLASS))
                    .child(brand::MARK),
                format!("\u{a9} {}", Utc::now().year()),
                span().class("ml-2").child(
                    a().href("https://github.com")
                        .rel("noopener noreferrer")
                        .target("_blank")
                        .aria_label("GitHub")
                        .child(icons::icon(icons::GITHUB, "size-4")),
                ),
            )),
        )
}
