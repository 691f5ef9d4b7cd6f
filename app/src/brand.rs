//! Brand constants shared by the logo and the page chrome.

/// The H-BRS accent. Used for the logo label and for highlighted UI text.
pub const ACCENT_COLOR: &str = "#FFDA63";

/// Text of the logo mark.
pub const MARK: &str = "H-BRS";

/// Tailwind hover class tinting text with [`ACCENT_COLOR`].
pub const ACCENT_HOVER_CLASS: &str = "hover:text-[#FFDA63]";
