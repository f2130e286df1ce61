//! Navigation menu state.

use crate::site::pages::Route;

/// Scroll offset (viewport percent) past which the scroll-to-top
/// affordance appears.
pub const SCROLL_TOP_THRESHOLD: f32 = 30.0;

/// Navigation menu: the ordered routes, the active one, and the mobile
/// open/closed flag. Navigating always closes the menu and resets scroll,
/// matching the site's route-change behavior.
#[derive(Clone, Debug)]
pub struct NavMenu {
    active: Route,
    open: bool,
    scroll: f32,
}

impl NavMenu {
    pub fn new() -> Self {
        Self {
            active: Route::Home,
            open: false,
            scroll: 0.0,
        }
    }

    #[inline]
    pub fn active(&self) -> Route {
        self.active
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Navigate to a route: closes the menu and scrolls back to top.
    pub fn navigate(&mut self, route: Route) {
        if route != self.active {
            log::debug!("navigate {} -> {}", self.active.path(), route.path());
        }
        self.active = route;
        self.open = false;
        self.scroll = 0.0;
    }

    /// Record the current scroll offset, viewport percent.
    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll = offset.max(0.0);
    }

    /// Whether the scroll-to-top affordance should show.
    pub fn scroll_top_visible(&self) -> bool {
        self.scroll > SCROLL_TOP_THRESHOLD
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
