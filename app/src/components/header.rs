use crate::{
    brand::{ACCENT_HOVER_CLASS, MARK},
    components::{icons, logo},
    types::PresentationAttributes,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed top bar: the brand mark, page links and the source link.
pub fn component() -> impl IntoView {
    let mark = logo::component(
        PresentationAttributes::new()
            .with("role", "img")
            .with("aria-label", MARK)
            .with("class", "text-[#2a3a8c]"),
    );
    let link_class = format!("text-lg font-bold transition-all duration-500 sm:text-2xl {ACCENT_HOVER_CLASS}");

    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-4 px-4 md:px-6 bg-[#1e1e1e]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-5xl">
                <div class="flex flex-row justify-between items-center text-white">
                    <div class="flex flex-row gap-4 items-center">
                        <A href="/">{mark}</A>
                        <div class=link_class.clone()>
                            <A href="/">"home"</A>
                        </div>
                        <div class=link_class>
                            <A href="/about">"about"</A>
                        </div>
                    </div>
                    <a
                        href="https://github.com"
                        rel="noopener noreferrer"
                        target="_blank"
                        aria-label="GitHub"
                        class=format!("transition-all duration-500 size-6 {ACCENT_HOVER_CLASS}")
                    >
                        {icons::icon(icons::GITHUB, "size-6")}
                    </a>
                </div>
            </div>
        </header>
    }
}
