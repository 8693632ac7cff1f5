//! Presentation-sink contract between the core logic and the DOM layer.

/// Minimal surface the UI exposes to the scene logic. Per-anchor methods are
/// keyed by anchor id; the two global flags drive body-level affordances.
///
/// `set_translation` is called every frame; everything else only on actual
/// state changes (the callers diff), so implementations may mutate the DOM
/// unconditionally.
pub trait PresentationSink {
    fn set_translation(&mut self, id: &str, x: f32, y: f32);
    fn set_visible(&mut self, id: &str, visible: bool);
    fn set_detail_open(&mut self, id: &str, open: bool);
    fn set_moving(&mut self, moving: bool);
    fn set_details_mode(&mut self, on: bool);
}
