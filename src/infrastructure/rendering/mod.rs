//! Drawing-surface adapters: reactive signals for the browser, plain records for
//! headless use, and standalone SVG export.

pub mod headless;
pub mod signal_surface;
pub mod svg_markup;

pub use headless::HeadlessSurface;
pub use signal_surface::SignalSurface;
pub use svg_markup::render_svg;
