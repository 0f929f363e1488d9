//! WebView integration for the edgewise layout engine.
//!
//! Projects [`edgewise_core::LayoutState`] snapshots into a hosted web
//! content surface:
//! - CSS custom properties on the document root
//!   (`--safe-area-inset-*`, `--keyboard-height`, ...)
//! - a `safeAreaChanged` DOM event carrying the same fields
//!
//! [`LayoutBridge`] is the entry point: the host's UI loop feeds it
//! platform geometry events and page-load notifications, polls it with
//! the current instant, and invokes the command surface
//! (`safe_area_insets`, `keyboard_info`, `enable`, `disable`,
//! `show_keyboard`, `hide_keyboard`) on demand.
//!
//! Enable the `wry` feature for a [`ContentSurface`] implementation on
//! `wry::WebView`.

pub mod bridge;
pub mod commands;
pub mod events;
pub mod projection;
pub mod surface;

pub use bridge::LayoutBridge;
pub use commands::{KeyboardInfo, SafeAreaInsets};
pub use events::PageLoadState;
pub use projection::{projection_script, Projector};
pub use surface::{ContentSurface, SurfaceError};
