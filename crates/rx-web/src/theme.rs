//! Fixed design constants shared by the shell and the pages.

/// Text shown by the placeholder page.
pub const PROTOTYPE_MESSAGE: &str = "This is a prototype of RxOS";

/// Product name displayed in the top bar.
pub const PRODUCT_NAME: &str = "RxOS";

/// Height of the persistent top bar, in CSS pixels.
pub const CHROME_HEIGHT_PX: u32 = 64;

pub const CONTAINER_PADDING_PX: u32 = 16;

pub const HEADING_COLOR: &str = "#1976d2";
pub const HEADING_FONT_WEIGHT: u16 = 700;
/// Heading-level size (h4 scale).
pub const HEADING_FONT_SIZE: &str = "2.125rem";

/// CSS expression for the container's minimum height: the viewport minus the top bar.
pub fn container_min_height_css() -> String {
    format!("calc(100vh - {}px)", CHROME_HEIGHT_PX)
}

/// Minimum container height for a concrete viewport height.
/// Saturates at 0 when the viewport is shorter than the top bar.
pub fn container_min_height_px(viewport_height_px: u32) -> u32 {
    viewport_height_px.saturating_sub(CHROME_HEIGHT_PX)
}

/// Inline style of the page's outer container.
pub fn container_style() -> String {
    format!(
        "box-sizing: border-box; display: flex; align-items: center; justify-content: center; min-height: {}; padding: {}px;",
        container_min_height_css(),
        CONTAINER_PADDING_PX
    )
}

/// Inline style of the page heading.
pub fn heading_style() -> String {
    format!(
        "margin: 0; color: {}; font-weight: {}; font-size: {};",
        HEADING_COLOR, HEADING_FONT_WEIGHT, HEADING_FONT_SIZE
    )
}

/// Inline style of the top bar.
pub fn top_bar_style() -> String {
    format!("height: {}px;", CHROME_HEIGHT_PX)
}
