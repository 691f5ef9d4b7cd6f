//! Browser entry point: hydrates the server-rendered H-BRS pages.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs browser logging and the panic hook, then hydrates `<body>` with
/// `app::component`.
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::debug!("hydrating {}", app::brand::MARK);

    leptos::mount::hydrate_body(app::component);
}
