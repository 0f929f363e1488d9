//! Content-surface lifecycle events the bridge consumes.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources). Forward this
    /// to [`LayoutBridge::navigation_finished`](crate::LayoutBridge::navigation_finished)
    /// to arm the recovery re-projections.
    Finished,
}

#[cfg(feature = "wry")]
impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}
