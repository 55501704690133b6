// --- File: crates/bookcal_calendar/src/surface.rs ---
//! Rendering-surface capability for the week strip.
//!
//! The controller never measures anything itself. A host implements
//! [`StripSurface`] over whatever actually draws the day cells; the scroll math
//! in this module is pure and works on plain [`Bounds`].

use serde::Serialize;

/// Horizontal extent of an element, in the same coordinate space as the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            right: left + width,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Width of the part of `self` inside `viewport`; negative when disjoint.
    pub fn visible_width_in(&self, viewport: &Bounds) -> f64 {
        self.right.min(viewport.right) - self.left.max(viewport.left)
    }
}

/// What the week strip needs from the thing that renders it.
pub trait StripSurface {
    /// Current horizontal scroll offset of the container.
    fn scroll_left(&self) -> f64;

    /// Visible width of the container.
    fn viewport_width(&self) -> f64;

    /// Total scrollable content width.
    fn scroll_width(&self) -> f64;

    /// Container bounds.
    fn viewport_bounds(&self) -> Bounds;

    /// Bounds of every rendered day cell, in render order.
    fn item_bounds(&self) -> Vec<Bounds>;

    /// Offset of a cell from the start of the content, if it is rendered.
    fn item_offset(&self, index: usize) -> Option<f64>;

    /// Jump to `left` without animation. Used for clamping.
    fn set_scroll_left(&mut self, left: f64);

    /// Programmatic scroll that may animate.
    fn scroll_to(&mut self, left: f64);
}

/// Index of the left-most item more than `threshold` (fraction of its own
/// width) inside the viewport.
pub fn first_visible_index(items: &[Bounds], viewport: &Bounds, threshold: f64) -> Option<usize> {
    items
        .iter()
        .position(|item| item.visible_width_in(viewport) > item.width() * threshold)
}

/// The in-range scroll offset, or `None` when `scroll_left` is already valid.
pub fn clamp_scroll_left(scroll_left: f64, viewport_width: f64, scroll_width: f64) -> Option<f64> {
    if scroll_left < 0.0 {
        return Some(0.0);
    }
    if scroll_left + viewport_width > scroll_width {
        return Some((scroll_width - viewport_width).max(0.0));
    }
    None
}

pub mod mock {
    use super::*;

    /// A strip of equally wide cells in a fixed-width viewport at x = 0.
    /// Scrolls land instantly and are recorded for assertions.
    #[derive(Debug, Clone, PartialEq)]
    pub struct FixedCellSurface {
        item_count: usize,
        cell_width: f64,
        viewport_width: f64,
        scroll_left: f64,
        /// Offsets passed to `scroll_to`
        pub programmatic_scrolls: Vec<f64>,
        /// Offsets passed to `set_scroll_left`
        pub clamps: Vec<f64>,
    }

    impl FixedCellSurface {
        pub fn new(item_count: usize, cell_width: f64, viewport_width: f64) -> Self {
            Self {
                item_count,
                cell_width,
                viewport_width,
                scroll_left: 0.0,
                programmatic_scrolls: Vec::new(),
                clamps: Vec::new(),
            }
        }

        /// Simulates the user dragging the strip; nothing is recorded.
        pub fn user_scroll_to(&mut self, left: f64) {
            self.scroll_left = left;
        }

        pub fn set_item_count(&mut self, item_count: usize) {
            self.item_count = item_count;
        }

        pub fn cell_width(&self) -> f64 {
            self.cell_width
        }
    }

    impl StripSurface for FixedCellSurface {
        fn scroll_left(&self) -> f64 {
            self.scroll_left
        }

        fn viewport_width(&self) -> f64 {
            self.viewport_width
        }

        fn scroll_width(&self) -> f64 {
            self.item_count as f64 * self.cell_width
        }

        fn viewport_bounds(&self) -> Bounds {
            Bounds::new(0.0, self.viewport_width)
        }

        fn item_bounds(&self) -> Vec<Bounds> {
            (0..self.item_count)
                .map(|i| Bounds::new(i as f64 * self.cell_width - self.scroll_left, self.cell_width))
                .collect()
        }

        fn item_offset(&self, index: usize) -> Option<f64> {
            (index < self.item_count).then(|| index as f64 * self.cell_width)
        }

        fn set_scroll_left(&mut self, left: f64) {
            self.scroll_left = left;
            self.clamps.push(left);
        }

        fn scroll_to(&mut self, left: f64) {
            self.scroll_left = left;
            self.programmatic_scrolls.push(left);
        }
    }
}
