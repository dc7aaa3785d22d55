// Deterministic layout engine: safe-zone geometry, intent validation,
// pixel translation, and the text fitter. Everything except the handlers is
// a pure, synchronous transformation over immutable inputs.

pub mod canvas;
pub mod fitter;
pub mod handlers;
pub mod intent;
pub mod metrics;
pub mod ranker;
pub mod translator;
pub mod validator;
pub mod zones;

// Re-export the public API consumed by other modules (advisor, routes, state).
pub use canvas::{default_canvas_config, CanvasConfig, Rect};
pub use intent::{Alignment, LayoutIntent, PixelLayout};
pub use zones::{compute_safe_zones, select_zone, SafeZone, ZoneId};
