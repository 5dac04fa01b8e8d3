// DOM anchors and selectors the front-end binds to.

// Page sections in scroll order. The thread generator scales strand detail
// with how many there are.
pub const SECTION_IDS: [&str; 5] = ["hero", "about", "services", "testimonials", "contact"];

pub const CONTAINER_ID: &str = "thread-container"; // fixed, full-viewport host of the SVG
pub const PAGE_ROOT_ID: &str = "page-root"; // receives the scroll-tinted backdrop

// Accessibility panel
pub const PANEL_ROOT_SELECTOR: &str = "[data-accessibility-controls]";
pub const PANEL_BUTTON_ID: &str = "accessibility-button";
pub const PANEL_MENU_ID: &str = "accessibility-menu";
pub const PANEL_CLOSE_ID: &str = "accessibility-close";
pub const TOGGLE_ANIMATIONS_ID: &str = "toggle-animations";
pub const SPEED_INPUT_ID: &str = "animation-speed";
pub const SPEED_LABEL_ID: &str = "animation-speed-label";
pub const INTENSITY_INPUT_ID: &str = "animation-intensity";
pub const INTENSITY_LABEL_ID: &str = "animation-intensity-label";
pub const COMPLEXITY_SELECT_ID: &str = "animation-complexity";
pub const REDUCED_MOTION_NOTE_ID: &str = "reduced-motion-note";

// Scroll-in helper for individual content blocks
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const IN_VIEW_THRESHOLD: f64 = 0.1;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
