//! Scroll progress arithmetic

/// Snapshot of the document scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Distance the viewport can travel before reaching the bottom.
    #[must_use]
    pub fn scrollable_distance(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Percentage of the scrollable distance already traversed.
    ///
    /// A page with no overflow is fully read and reports 100. Overscroll is
    /// passed through unclamped.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let distance = self.scrollable_distance();
        if distance > 0.0 {
            self.scroll_top / distance * 100.0
        } else {
            100.0
        }
    }

    /// CSS `width` value for the indicator element.
    #[must_use]
    pub fn width_style(&self) -> String {
        format!("{}%", self.percent())
    }
}
