//! Open/zoom state machine of the image viewer.
//!
//! The viewer is `Closed` until the thumbnail is activated, then toggles
//! between `OpenUnzoomed` and `OpenZoomed` on double-taps. Swipes, background
//! clicks, Escape and the close button all return it to `Closed`, which
//! always discards the zoom and the transform.

use std::rc::Rc;

use kurbo::{Point, Rect, Size, Vec2};

use thiserror::Error;

use crate::config::{ConfigError, ViewerConfig};
use crate::gesture::{SwipeTracker, TapKind, TapTracker};
use crate::hook::{EscapeSignal, KeyHook, KeyHookGuard, NoopKeyHook};
use crate::props::{ImageProps, PropsError};
use crate::transform::ZoomTransform;
use crate::Instant;

/// Errors building a viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Props(#[from] PropsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Viewer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerPhase {
    /// Only the thumbnail is shown.
    #[default]
    Closed,
    /// Overlay shown at fit-to-screen scale.
    OpenUnzoomed,
    /// Overlay shown with pan/zoom enabled.
    OpenZoomed,
}

impl ViewerPhase {
    /// Whether the overlay is displayed.
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Whether pan/zoom interaction is enabled.
    pub fn is_zoomed(self) -> bool {
        matches!(self, Self::OpenZoomed)
    }
}

/// What a tap landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapTarget {
    /// The inline thumbnail.
    Thumbnail,
    /// The enlarged image; `focus` is relative to the overlay center.
    Image { focus: Point },
}

/// Input delivered to the viewer, in the order the host receives it.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    Tap { at: Instant, target: TapTarget },
    TouchStart { y: f64 },
    TouchEnd { y: f64 },
    BackgroundClick,
    Escape,
    CloseButton,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Pan(Vec2),
}

/// Why the overlay closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Swipe,
    Background,
    Escape,
    CloseButton,
    Unmount,
}

/// Observable effect of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Opened,
    ZoomEnabled,
    ZoomDisabled,
    Closed(CloseReason),
    TransformChanged,
}

/// The image viewer widget state.
pub struct ImageViewer {
    props: ImageProps,
    config: ViewerConfig,
    phase: ViewerPhase,
    taps: TapTracker,
    swipe: SwipeTracker,
    transform: ZoomTransform,
    hook: Rc<dyn KeyHook>,
    escape: EscapeSignal,
    /// Present exactly while the overlay is open.
    key_guard: Option<KeyHookGuard>,
}

impl ImageViewer {
    /// Create a closed viewer that listens for Escape through `hook` while open.
    pub fn new(
        props: ImageProps,
        config: ViewerConfig,
        hook: Rc<dyn KeyHook>,
    ) -> Result<Self, ViewerError> {
        props.validate()?;
        config.validate()?;
        Ok(Self {
            taps: TapTracker::new(config.double_tap_window()),
            swipe: SwipeTracker::new(config.swipe_dismiss_px),
            transform: ZoomTransform::with_max_scale(config.max_zoom),
            props,
            config,
            phase: ViewerPhase::Closed,
            hook,
            escape: EscapeSignal::new(),
            key_guard: None,
        })
    }

    /// Create a closed viewer whose host forwards Escape itself.
    pub fn without_hook(props: ImageProps, config: ViewerConfig) -> Result<Self, ViewerError> {
        Self::new(props, config, Rc::new(NoopKeyHook))
    }

    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn is_zoomed(&self) -> bool {
        self.phase.is_zoomed()
    }

    pub fn props(&self) -> &ImageProps {
        &self.props
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn transform(&self) -> &ZoomTransform {
        &self.transform
    }

    /// Instant of the most recent tap.
    pub fn last_interaction(&self) -> Option<Instant> {
        self.taps.last_tap()
    }

    /// Vertical coordinate of the touch in progress.
    pub fn touch_start_y(&self) -> Option<f64> {
        self.swipe.start_y()
    }

    /// Whether a key listener is currently attached.
    pub fn has_key_listener(&self) -> bool {
        self.key_guard.is_some()
    }

    /// Screen rect of the enlarged image for a viewport.
    pub fn image_rect(&self, viewport: Size) -> Rect {
        self.transform
            .image_rect(self.props.size(), viewport, self.config.overlay_padding as f64)
    }

    /// Keep the panned image within the viewport.
    pub fn clamp_to_viewport(&mut self, viewport: Size) {
        self.transform
            .clamp_pan(self.props.size(), viewport, self.config.overlay_padding as f64);
    }

    /// Apply an event.
    pub fn handle(&mut self, event: ViewerEvent) -> Transition {
        use ViewerPhase::*;

        let transition = match (self.phase, event) {
            (Closed, ViewerEvent::Tap { at, target: TapTarget::Thumbnail }) => {
                self.taps.record(at);
                self.open()
            }
            // Nothing but the thumbnail reacts while closed
            (Closed, _) => Transition::Unchanged,

            // A thumbnail tap while open belongs to the same open action
            (_, ViewerEvent::Tap { at, target: TapTarget::Thumbnail }) => {
                self.taps.record(at);
                Transition::Unchanged
            }
            (_, ViewerEvent::Tap { at, target: TapTarget::Image { focus } }) => {
                match self.taps.register(at) {
                    TapKind::Double => self.toggle_zoom(focus),
                    TapKind::Single => Transition::Unchanged,
                }
            }

            (_, ViewerEvent::TouchStart { y }) => {
                self.swipe.begin(y);
                Transition::Unchanged
            }
            (_, ViewerEvent::TouchEnd { y }) => match self.swipe.finish(y) {
                Some(displacement) if self.swipe.is_dismiss(displacement) => {
                    self.close(CloseReason::Swipe)
                }
                _ => Transition::Unchanged,
            },

            (_, ViewerEvent::BackgroundClick) => self.close(CloseReason::Background),
            (_, ViewerEvent::Escape) => self.close(CloseReason::Escape),
            (_, ViewerEvent::CloseButton) => self.close(CloseReason::CloseButton),

            (OpenZoomed, ViewerEvent::ZoomIn) => {
                let step = self.config.zoom_step;
                self.adjust_transform(|t| t.zoom_at(Point::ORIGIN, step))
            }
            (OpenZoomed, ViewerEvent::ZoomOut) => {
                let step = self.config.zoom_step;
                self.adjust_transform(|t| t.zoom_at(Point::ORIGIN, 1.0 / step))
            }
            (OpenZoomed, ViewerEvent::ZoomReset) => self.adjust_transform(ZoomTransform::reset),
            (OpenZoomed, ViewerEvent::Pan(delta)) => self.adjust_transform(|t| t.pan(delta)),

            // Magnification controls need pan/zoom enabled
            (
                OpenUnzoomed,
                ViewerEvent::ZoomIn | ViewerEvent::ZoomOut | ViewerEvent::ZoomReset | ViewerEvent::Pan(_),
            ) => Transition::Unchanged,
        };

        if transition != Transition::Unchanged && transition != Transition::TransformChanged {
            log::debug!("Viewer {:?} -> {:?}", transition, self.phase);
        }
        transition
    }

    /// Apply an Escape press delivered to the key hook, if any.
    pub fn poll_key_hook(&mut self) -> Transition {
        if self.escape.take() {
            self.handle(ViewerEvent::Escape)
        } else {
            Transition::Unchanged
        }
    }

    /// Close the overlay, resetting zoom and transform and detaching the
    /// key listener. No-op when already closed.
    pub fn close(&mut self, reason: CloseReason) -> Transition {
        if !self.phase.is_open() {
            return Transition::Unchanged;
        }

        self.phase = ViewerPhase::Closed;
        self.transform.reset();
        self.swipe.cancel();
        self.taps.reset();
        self.key_guard = None;
        self.escape.take();

        log::info!("Image viewer closed ({:?})", reason);
        Transition::Closed(reason)
    }

    fn open(&mut self) -> Transition {
        self.phase = ViewerPhase::OpenUnzoomed;
        self.transform.reset();
        self.swipe.cancel();
        self.escape.take();
        self.key_guard = Some(self.hook.install(self.escape.clone()));

        log::debug!("Image viewer opened: {}", self.props.src);
        Transition::Opened
    }

    fn toggle_zoom(&mut self, focus: Point) -> Transition {
        match self.phase {
            ViewerPhase::OpenUnzoomed => {
                self.phase = ViewerPhase::OpenZoomed;
                self.transform.zoom_to(focus, self.config.double_tap_zoom);
                Transition::ZoomEnabled
            }
            ViewerPhase::OpenZoomed => {
                self.phase = ViewerPhase::OpenUnzoomed;
                self.transform.reset();
                Transition::ZoomDisabled
            }
            ViewerPhase::Closed => Transition::Unchanged,
        }
    }

    fn adjust_transform(&mut self, f: impl FnOnce(&mut ZoomTransform)) -> Transition {
        let before = self.transform.clone();
        f(&mut self.transform);
        if self.transform == before {
            Transition::Unchanged
        } else {
            Transition::TransformChanged
        }
    }
}

impl Drop for ImageViewer {
    fn drop(&mut self) {
        self.close(CloseReason::Unmount);
    }
}

impl std::fmt::Debug for ImageViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageViewer")
            .field("src", &self.props.src)
            .field("phase", &self.phase)
            .field("transform", &self.transform)
            .field("key_listener", &self.key_guard.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::{KeyHookRegistry, ESCAPE_KEY};
    use std::time::Duration;

    fn viewer() -> (ImageViewer, KeyHookRegistry) {
        let registry = KeyHookRegistry::new();
        let viewer = ImageViewer::new(
            ImageProps::new("attractive.png", "Attractive png", 2514, 1406),
            ViewerConfig::default(),
            Rc::new(registry.clone()),
        )
        .unwrap();
        (viewer, registry)
    }

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    fn thumb(at: Instant) -> ViewerEvent {
        ViewerEvent::Tap { at, target: TapTarget::Thumbnail }
    }

    fn image(at: Instant) -> ViewerEvent {
        ViewerEvent::Tap {
            at,
            target: TapTarget::Image { focus: Point::ORIGIN },
        }
    }

    fn swipe(viewer: &mut ImageViewer, dy: f64) -> Transition {
        viewer.handle(ViewerEvent::TouchStart { y: 400.0 });
        viewer.handle(ViewerEvent::TouchEnd { y: 400.0 + dy })
    }

    #[test]
    fn test_starts_closed() {
        let (viewer, registry) = viewer();
        assert_eq!(viewer.phase(), ViewerPhase::Closed);
        assert!(!viewer.is_open());
        assert!(!viewer.is_zoomed());
        assert!(viewer.last_interaction().is_none());
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_invalid_props_rejected() {
        let result = ImageViewer::without_hook(
            ImageProps::new("", "alt", 10, 10),
            ViewerConfig::default(),
        );
        assert!(matches!(result, Err(ViewerError::Props(PropsError::EmptySource))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let props = ImageProps::new("attractive.png", "Attractive png", 2514, 1406);

        let zero_window = ViewerConfig {
            double_tap_window_ms: 0,
            ..ViewerConfig::default()
        };
        let result = ImageViewer::without_hook(props.clone(), zero_window);
        assert!(matches!(result, Err(ViewerError::Config(ConfigError::Invalid(_)))));

        let nan_step = ViewerConfig {
            zoom_step: f64::NAN,
            ..ViewerConfig::default()
        };
        let result = ImageViewer::without_hook(props, nan_step);
        assert!(matches!(result, Err(ViewerError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_thumbnail_tap_opens() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        assert_eq!(viewer.handle(thumb(t0)), Transition::Opened);
        assert_eq!(viewer.phase(), ViewerPhase::OpenUnzoomed);
        assert!(viewer.transform().is_identity());
        assert_eq!(viewer.last_interaction(), Some(t0));
    }

    #[test]
    fn test_rapid_double_tap_while_closed_opens_once() {
        let (mut viewer, registry) = viewer();
        let t0 = Instant::now();
        assert_eq!(viewer.handle(thumb(t0)), Transition::Opened);
        assert_eq!(viewer.handle(thumb(ms(t0, 100))), Transition::Unchanged);
        assert_eq!(viewer.phase(), ViewerPhase::OpenUnzoomed);
        assert_eq!(registry.listener_count(), 1);
    }

    #[test]
    fn test_double_tap_toggles_zoom() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));

        // Slow tap on the image is not a double-tap
        assert_eq!(viewer.handle(image(ms(t0, 1000))), Transition::Unchanged);
        assert_eq!(viewer.handle(image(ms(t0, 1250))), Transition::ZoomEnabled);
        assert!(viewer.is_zoomed());
        assert!((viewer.transform().scale - 2.0).abs() < 1e-10);

        assert_eq!(viewer.handle(image(ms(t0, 1400))), Transition::ZoomDisabled);
        assert!(!viewer.is_zoomed());
        assert!(viewer.transform().is_identity());
    }

    #[test]
    fn test_tap_at_threshold_does_not_zoom() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));
        assert_eq!(viewer.handle(image(ms(t0, 300))), Transition::Unchanged);
        assert_eq!(viewer.phase(), ViewerPhase::OpenUnzoomed);
    }

    #[test]
    fn test_double_tap_zooms_toward_focus() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));
        viewer.handle(ViewerEvent::Tap {
            at: ms(t0, 100),
            target: TapTarget::Image { focus: Point::new(100.0, 50.0) },
        });
        assert!(viewer.is_zoomed());
        let offset = viewer.transform().offset;
        assert!((offset.x + 100.0).abs() < 1e-10);
        assert!((offset.y + 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_swipe_threshold_boundary() {
        let (mut viewer, _) = viewer();
        viewer.handle(thumb(Instant::now()));

        assert_eq!(swipe(&mut viewer, 49.0), Transition::Unchanged);
        assert!(viewer.is_open());
        assert_eq!(swipe(&mut viewer, -50.0), Transition::Unchanged);
        assert!(viewer.is_open());

        assert_eq!(swipe(&mut viewer, 51.0), Transition::Closed(CloseReason::Swipe));
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_upward_swipe_closes() {
        let (mut viewer, _) = viewer();
        viewer.handle(thumb(Instant::now()));
        assert_eq!(swipe(&mut viewer, -51.0), Transition::Closed(CloseReason::Swipe));
    }

    #[test]
    fn test_touch_end_without_start() {
        let (mut viewer, _) = viewer();
        viewer.handle(thumb(Instant::now()));
        assert_eq!(
            viewer.handle(ViewerEvent::TouchEnd { y: 900.0 }),
            Transition::Unchanged
        );
        assert!(viewer.is_open());
    }

    #[test]
    fn test_touch_start_ignored_while_closed() {
        let (mut viewer, _) = viewer();
        viewer.handle(ViewerEvent::TouchStart { y: 0.0 });
        assert!(viewer.touch_start_y().is_none());
    }

    #[test]
    fn test_every_close_trigger_resets_zoom() {
        let triggers = [
            (ViewerEvent::BackgroundClick, CloseReason::Background),
            (ViewerEvent::Escape, CloseReason::Escape),
            (ViewerEvent::CloseButton, CloseReason::CloseButton),
        ];

        for (event, reason) in triggers {
            let (mut viewer, registry) = viewer();
            let t0 = Instant::now();
            viewer.handle(thumb(t0));
            viewer.handle(image(ms(t0, 100)));
            viewer.handle(ViewerEvent::ZoomIn);
            assert!(viewer.is_zoomed());

            assert_eq!(viewer.handle(event), Transition::Closed(reason));
            assert_eq!(viewer.phase(), ViewerPhase::Closed);
            assert!(!viewer.is_zoomed());
            assert!(viewer.transform().is_identity());
            assert_eq!(registry.listener_count(), 0);
        }
    }

    #[test]
    fn test_swipe_closes_while_zoomed() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));
        viewer.handle(image(ms(t0, 100)));
        assert!(viewer.is_zoomed());

        assert_eq!(swipe(&mut viewer, 120.0), Transition::Closed(CloseReason::Swipe));
        assert!(!viewer.is_zoomed());
    }

    #[test]
    fn test_escape_while_closed_has_no_effect() {
        let (mut viewer, registry) = viewer();
        assert_eq!(viewer.handle(ViewerEvent::Escape), Transition::Unchanged);
        assert!(!registry.dispatch_key(ESCAPE_KEY));
        assert_eq!(viewer.poll_key_hook(), Transition::Unchanged);
        assert_eq!(viewer.phase(), ViewerPhase::Closed);
        assert!(viewer.last_interaction().is_none());
    }

    #[test]
    fn test_key_hook_scoped_to_open_overlay() {
        let (mut viewer, registry) = viewer();
        let t0 = Instant::now();

        viewer.handle(thumb(t0));
        assert!(viewer.has_key_listener());
        assert_eq!(registry.listener_count(), 1);

        assert!(registry.dispatch_key(ESCAPE_KEY));
        assert_eq!(viewer.poll_key_hook(), Transition::Closed(CloseReason::Escape));
        assert!(!viewer.has_key_listener());
        assert_eq!(registry.listener_count(), 0);

        // Reopening installs a fresh listener
        viewer.handle(thumb(ms(t0, 2000)));
        assert_eq!(registry.listener_count(), 1);
    }

    #[test]
    fn test_drop_releases_key_hook() {
        let (mut viewer, registry) = viewer();
        viewer.handle(thumb(Instant::now()));
        assert_eq!(registry.listener_count(), 1);

        drop(viewer);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_unmount_close() {
        let (mut viewer, registry) = viewer();
        viewer.handle(thumb(Instant::now()));
        assert_eq!(
            viewer.close(CloseReason::Unmount),
            Transition::Closed(CloseReason::Unmount)
        );
        assert_eq!(viewer.close(CloseReason::Unmount), Transition::Unchanged);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_zoom_controls_only_while_zoomed() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));

        assert_eq!(viewer.handle(ViewerEvent::ZoomIn), Transition::Unchanged);
        assert_eq!(viewer.handle(ViewerEvent::Pan(Vec2::new(5.0, 5.0))), Transition::Unchanged);
        assert!(viewer.transform().is_identity());

        viewer.handle(image(ms(t0, 100)));
        assert_eq!(viewer.handle(ViewerEvent::ZoomIn), Transition::TransformChanged);
        assert!((viewer.transform().scale - 2.5).abs() < 1e-10);
        assert_eq!(viewer.handle(ViewerEvent::ZoomOut), Transition::TransformChanged);
        assert!((viewer.transform().scale - 2.0).abs() < 1e-10);
        assert_eq!(viewer.phase(), ViewerPhase::OpenZoomed);

        assert_eq!(viewer.handle(ViewerEvent::ZoomReset), Transition::TransformChanged);
        assert!(viewer.transform().is_identity());
        assert_eq!(viewer.phase(), ViewerPhase::OpenZoomed);
        assert_eq!(viewer.handle(ViewerEvent::ZoomReset), Transition::Unchanged);
    }

    #[test]
    fn test_zoom_in_stops_at_max() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));
        viewer.handle(image(ms(t0, 100)));

        for _ in 0..10 {
            viewer.handle(ViewerEvent::ZoomIn);
        }
        assert!((viewer.transform().scale - viewer.config().max_zoom).abs() < 1e-10);
        assert_eq!(viewer.handle(ViewerEvent::ZoomIn), Transition::Unchanged);
    }

    #[test]
    fn test_pan_while_zoomed_and_clamp() {
        let (mut viewer, _) = viewer();
        let t0 = Instant::now();
        viewer.handle(thumb(t0));
        viewer.handle(image(ms(t0, 100)));

        assert_eq!(
            viewer.handle(ViewerEvent::Pan(Vec2::new(10_000.0, 0.0))),
            Transition::TransformChanged
        );
        let viewport = Size::new(1280.0, 800.0);
        viewer.clamp_to_viewport(viewport);
        let rect = viewer.image_rect(viewport);
        // Left edge of the image cannot move past the viewport's left edge
        assert!(rect.x0 <= 1e-9);
    }

    #[test]
    fn test_documented_scenario() {
        let (mut viewer, registry) = viewer();
        let t0 = Instant::now();

        assert_eq!(viewer.handle(thumb(t0)), Transition::Opened);
        assert_eq!(viewer.phase(), ViewerPhase::OpenUnzoomed);

        assert_eq!(viewer.handle(image(ms(t0, 200))), Transition::ZoomEnabled);
        assert_eq!(viewer.phase(), ViewerPhase::OpenZoomed);

        assert_eq!(viewer.handle(image(ms(t0, 400))), Transition::ZoomDisabled);
        assert_eq!(viewer.phase(), ViewerPhase::OpenUnzoomed);

        assert_eq!(swipe(&mut viewer, 80.0), Transition::Closed(CloseReason::Swipe));
        assert!(!viewer.is_open());
        assert!(!viewer.is_zoomed());
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_open_iff_last_trigger_was_open() {
        let (mut viewer, registry) = viewer();
        let t0 = Instant::now();
        let mut expected_open = false;
        let mut touch_start: Option<f64> = None;
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut clock = 0;

        for _ in 0..2000 {
            // xorshift
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            clock += seed % 400;
            let at = ms(t0, clock);

            let event = match seed % 9 {
                0 | 1 => thumb(at),
                2 | 3 => image(at),
                4 => ViewerEvent::BackgroundClick,
                5 => ViewerEvent::Escape,
                6 => ViewerEvent::CloseButton,
                7 => ViewerEvent::TouchStart { y: (seed % 200) as f64 },
                _ => ViewerEvent::TouchEnd { y: (seed % 200) as f64 },
            };

            // Expected state follows from the event alone
            match &event {
                ViewerEvent::Tap { target: TapTarget::Thumbnail, .. } => {
                    if !expected_open {
                        expected_open = true;
                        touch_start = None;
                    }
                }
                ViewerEvent::BackgroundClick | ViewerEvent::Escape | ViewerEvent::CloseButton => {
                    expected_open = false;
                    touch_start = None;
                }
                ViewerEvent::TouchStart { y } if expected_open => touch_start = Some(*y),
                ViewerEvent::TouchEnd { y } if expected_open => {
                    if let Some(start) = touch_start.take() {
                        if (y - start).abs() > 50.0 {
                            expected_open = false;
                        }
                    }
                }
                _ => {}
            }

            viewer.handle(event);
            assert_eq!(viewer.is_open(), expected_open);
            assert!(!viewer.is_zoomed() || viewer.is_open());
            assert_eq!(viewer.has_key_listener(), viewer.is_open());
            assert_eq!(registry.listener_count(), usize::from(viewer.is_open()));
        }
    }
}
