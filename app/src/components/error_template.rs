//! This module defines the `error_template` component, the page shown when a
//! route cannot be served.
//!
//! It includes the `AppError` enum for application-level errors and, on the
//! server, sets the HTTP status code that matches the first error.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

use crate::components::icons;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s stored in `errors`.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page for `errors`.
///
/// Errors that are not `AppError`s are not shown.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 h-full antialiased").child((
        h1().class("mb-6 text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-xl tracking-widest text-center text-gray-400 uppercase")
                    .child(format!("{}| {error}", error.status_code()))
            })
            .collect_view(),
        div()
            .class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-[#68b5fc]")
            .child(A(AProps::builder()
                .href("/")
                .children(ToChildren::to_children(|| {
                    div().class("flex gap-1 items-center").child((
                        icons::icon(icons::INFO, "size-4"),
                        "Go back home",
                    ))
                }))
                .build())),
    ))
}
