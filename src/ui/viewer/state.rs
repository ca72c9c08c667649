// SPDX-License-Identifier: MPL-2.0
//! Selection state of the lightbox: current index, loading flag and swipe
//! gesture tracking.

/// Minimum horizontal travel, in logical pixels, for a touch drag to count as
/// a swipe. The comparison is strict.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward drag.
    Next,
    /// Rightward drag.
    Previous,
}

/// Tracks which image of the open gallery is displayed.
///
/// The index always stays below the current image count; after a deletion
/// [`ImageViewerState::on_image_removed`] shifts or clamps it.
#[derive(Debug, Clone, Default)]
pub struct ImageViewerState {
    open: bool,
    index: usize,
    image_count: usize,
    loading: bool,
    showing_placeholder: bool,
    touch_start: Option<f32>,
    touch_end: Option<f32>,
}

impl ImageViewerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the viewer on the first image of a gallery with `image_count` images.
    pub fn open(&mut self, image_count: usize) {
        self.open = true;
        self.index = 0;
        self.image_count = image_count;
        self.loading = image_count > 0;
        self.showing_placeholder = false;
        self.clear_touch();
    }

    /// Closes the viewer and resets the selection to the first image.
    pub fn close(&mut self) {
        self.open = false;
        self.index = 0;
        self.loading = false;
        self.showing_placeholder = false;
        self.clear_touch();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the content behind the viewer must ignore scrolling.
    #[must_use]
    pub fn background_scroll_suspended(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_showing_placeholder(&self) -> bool {
        self.showing_placeholder
    }

    /// Navigation and swipes are only meaningful with more than one image.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.image_count > 1
    }

    /// Advances to the next image, wrapping from last to first.
    ///
    /// Returns `true` if the displayed image changed.
    pub fn next(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.show((self.index + 1) % self.image_count);
        true
    }

    /// Steps back to the previous image, wrapping from first to last.
    ///
    /// Returns `true` if the displayed image changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.show((self.index + self.image_count - 1) % self.image_count);
        true
    }

    /// Jumps to the thumbnail at `index`.
    ///
    /// Out-of-range indices and the already selected index are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.image_count || index == self.index {
            return false;
        }
        self.show(index);
        true
    }

    /// Waits for the current image again, e.g. after it was dropped from
    /// the image cache.
    pub fn reload(&mut self) {
        if self.open && self.image_count > 0 {
            self.loading = true;
            self.showing_placeholder = false;
        }
    }

    pub fn on_image_loaded(&mut self) {
        self.loading = false;
        self.showing_placeholder = false;
    }

    /// Clears the loading flag and switches to the placeholder graphic.
    pub fn on_image_load_failed(&mut self) {
        self.loading = false;
        self.showing_placeholder = true;
    }

    pub fn record_touch_start(&mut self, x: f32) {
        self.touch_start = Some(x);
        self.touch_end = None;
    }

    pub fn record_touch_move(&mut self, x: f32) {
        if self.touch_start.is_some() {
            self.touch_end = Some(x);
        }
    }

    /// Ends the current gesture, navigating if it qualified as a swipe.
    pub fn resolve_touch_end(&mut self) -> Option<SwipeDirection> {
        let start = self.touch_start.take();
        let end = self.touch_end.take();
        if !self.can_navigate() {
            return None;
        }

        let delta = start? - end?;
        if delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }

        if delta > 0.0 {
            self.next();
            Some(SwipeDirection::Next)
        } else {
            self.previous();
            Some(SwipeDirection::Previous)
        }
    }

    /// Abandons the current gesture without navigating.
    pub fn clear_touch(&mut self) {
        self.touch_start = None;
        self.touch_end = None;
    }

    /// Adjusts the selection after the image at `removed` was deleted,
    /// leaving `new_count` images.
    ///
    /// Returns `true` if a different image is now displayed.
    pub fn on_image_removed(&mut self, removed: usize, new_count: usize) -> bool {
        self.image_count = new_count;
        self.clear_touch();

        if new_count == 0 {
            self.index = 0;
            self.loading = false;
            return false;
        }

        if removed < self.index {
            self.index -= 1;
            false
        } else if removed == self.index {
            self.show(self.index.min(new_count - 1));
            true
        } else {
            false
        }
    }

    fn show(&mut self, index: usize) {
        self.index = index;
        self.loading = true;
        self.showing_placeholder = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(count: usize) -> ImageViewerState {
        let mut state = ImageViewerState::new();
        state.open(count);
        state
    }

    #[test]
    fn open_starts_loading_first_image() {
        let state = opened(3);
        assert!(state.is_open());
        assert!(state.background_scroll_suspended());
        assert_eq!(state.index(), 0);
        assert!(state.is_loading());
    }

    #[test]
    fn close_resets_index() {
        let mut state = opened(3);
        state.next();
        state.close();
        assert!(!state.is_open());
        assert!(!state.background_scroll_suspended());
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn next_wraps_to_first() {
        let mut state = opened(3);
        state.select_index(2);
        assert!(state.next());
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut state = opened(4);
        assert!(state.previous());
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn navigation_sets_loading_until_settled() {
        let mut state = opened(2);
        state.on_image_loaded();
        assert!(!state.is_loading());

        state.next();
        assert!(state.is_loading());
        state.on_image_loaded();
        assert!(!state.is_loading());
    }

    #[test]
    fn load_failure_shows_placeholder_until_next_navigation() {
        let mut state = opened(2);
        state.on_image_load_failed();
        assert!(!state.is_loading());
        assert!(state.is_showing_placeholder());

        state.next();
        assert!(!state.is_showing_placeholder());
    }

    #[test]
    fn single_image_disables_navigation() {
        let mut state = opened(1);
        assert!(!state.next());
        assert!(!state.previous());
        assert_eq!(state.index(), 0);

        state.record_touch_start(200.0);
        state.record_touch_move(10.0);
        assert_eq!(state.resolve_touch_end(), None);
    }

    #[test]
    fn select_index_ignores_out_of_range_and_current() {
        let mut state = opened(3);
        assert!(!state.select_index(3));
        assert!(!state.select_index(0));
        assert!(state.select_index(1));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn swipe_left_beyond_threshold_goes_next() {
        let mut state = opened(3);
        state.record_touch_start(200.0);
        state.record_touch_move(149.0);
        assert_eq!(state.resolve_touch_end(), Some(SwipeDirection::Next));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn swipe_right_beyond_threshold_goes_previous() {
        let mut state = opened(3);
        state.record_touch_start(100.0);
        state.record_touch_move(151.0);
        assert_eq!(state.resolve_touch_end(), Some(SwipeDirection::Previous));
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn swipe_at_threshold_is_ignored() {
        let mut state = opened(3);
        state.record_touch_start(100.0);
        state.record_touch_move(50.0);
        assert_eq!(state.resolve_touch_end(), None);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut state = opened(3);
        state.record_touch_start(100.0);
        assert_eq!(state.resolve_touch_end(), None);
    }

    #[test]
    fn gesture_is_cleared_after_resolution() {
        let mut state = opened(3);
        state.record_touch_start(200.0);
        state.record_touch_move(100.0);
        state.resolve_touch_end();

        // A stale end coordinate must not leak into the next gesture.
        state.record_touch_start(100.0);
        assert_eq!(state.resolve_touch_end(), None);
    }

    #[test]
    fn removing_earlier_image_shifts_index() {
        let mut state = opened(3);
        state.select_index(1);
        state.on_image_loaded();

        assert!(!state.on_image_removed(0, 2));
        assert_eq!(state.index(), 0);
        assert!(!state.is_loading());
    }

    #[test]
    fn removing_current_last_image_clamps_index() {
        let mut state = opened(3);
        state.select_index(2);

        assert!(state.on_image_removed(2, 2));
        assert_eq!(state.index(), 1);
        assert!(state.is_loading());
    }

    #[test]
    fn removing_current_middle_image_keeps_position() {
        let mut state = opened(3);
        state.select_index(1);

        assert!(state.on_image_removed(1, 2));
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn removing_later_image_keeps_selection() {
        let mut state = opened(3);
        assert!(!state.on_image_removed(2, 2));
        assert_eq!(state.index(), 0);
        assert_eq!(state.image_count(), 2);
    }
}
