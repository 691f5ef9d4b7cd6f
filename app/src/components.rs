//! Reusable UI pieces: the brand logo, the icon surface, the header and the
//! error page.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod logo;
