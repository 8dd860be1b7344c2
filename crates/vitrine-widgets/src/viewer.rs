//! egui front end for [`ImageViewer`].
//!
//! Draws the thumbnail inline and, while the viewer is open, a full-screen
//! overlay on the foreground layer. Pointer and touch input are translated
//! into [`ViewerEvent`]s; all state lives in the core viewer.

use std::hash::Hash;

use egui::{
    pos2, vec2, Align, Color32, CornerRadius, CursorIcon, Event, Id, Layout, Order, Pos2, Rect, Response,
    Sense, TouchDeviceId, TouchId, TouchPhase, Ui, UiBuilder,
};
use vitrine_core::{ImageViewer, Instant, TapTarget, Transition, ViewerEvent};

use crate::buttons::ControlButton;
use crate::frames::control_bar_frame;

/// Gap between the close button and the screen corner.
const CLOSE_MARGIN: f32 = 16.0;
/// Width reserved for the zoom control bar.
const CONTROL_BAR_WIDTH: f32 = 132.0;

/// Output of one frame of [`ZoomableImage`].
pub struct ViewerResponse {
    /// Response of the inline thumbnail.
    pub thumbnail: Response,
    /// State changes caused this frame, in order.
    pub transitions: Vec<Transition>,
}

impl ViewerResponse {
    /// Whether the viewer opened this frame.
    pub fn opened(&self) -> bool {
        self.transitions.contains(&Transition::Opened)
    }

    /// Whether the viewer closed this frame.
    pub fn closed(&self) -> bool {
        self.transitions
            .iter()
            .any(|t| matches!(t, Transition::Closed(_)))
    }
}

/// Click-to-enlarge image with double-tap zoom and swipe-to-dismiss.
pub struct ZoomableImage<'a> {
    viewer: &'a mut ImageViewer,
    id: Id,
}

impl<'a> ZoomableImage<'a> {
    /// Create the widget for a viewer.
    pub fn new(viewer: &'a mut ImageViewer) -> Self {
        Self {
            viewer,
            id: Id::new("vitrine_zoomable_image"),
        }
    }

    /// Distinguish several viewers on one page.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    /// Show the thumbnail and, when open, the overlay.
    pub fn show(self, ui: &mut Ui) -> ViewerResponse {
        let viewer = self.viewer;
        let mut transitions = Vec::new();

        let ctx = ui.ctx().clone();
        let opened_key = self.id.with("opened_from");
        let touch_key = self.id.with("touch");

        record(&mut transitions, viewer.poll_key_hook());

        let uri = viewer.props().uri();
        let alt = viewer.props().alt.clone();
        let thumb = viewer.props().thumbnail_size(ui.available_width() as f64);

        let thumbnail = ui
            .add(
                egui::Image::from_uri(uri.clone())
                    .fit_to_exact_size(vec2(thumb.width as f32, thumb.height as f32))
                    .alt_text(alt)
                    .sense(Sense::click()),
            )
            .on_hover_cursor(CursorIcon::ZoomIn);

        if thumbnail.clicked() {
            let at = Instant::now();
            let transition = viewer.handle(ViewerEvent::Tap {
                at,
                target: TapTarget::Thumbnail,
            });
            if transition == Transition::Opened {
                let opened = ThumbnailOpen {
                    rect: thumbnail.rect,
                    at,
                };
                ctx.data_mut(|d| d.insert_temp(opened_key, opened));
            }
            record(&mut transitions, transition);
        }

        // The rest of a double-click that opened the overlay lands on it
        let window = viewer.config().double_tap_window();
        let absorb = ctx
            .data(|d| d.get_temp::<ThumbnailOpen>(opened_key))
            .filter(|opened| opened.at.elapsed() < window)
            .map(|opened| opened.rect);

        let open = viewer.is_open();
        let fade =
            ctx.animate_bool_with_time(self.id.with("fade"), open, viewer.config().animation_secs());
        if fade > 0.0 {
            let events = show_overlay(&ctx, self.id, viewer, &uri, fade, open, absorb);
            for event in events {
                record(&mut transitions, viewer.handle(event));
            }
        }

        if viewer.is_open() {
            let screen = ctx.input(|i| i.content_rect());
            viewer.clamp_to_viewport(kurbo::Size::new(
                screen.width() as f64,
                screen.height() as f64,
            ));
        } else {
            ctx.data_mut(|d| {
                d.remove::<ThumbnailOpen>(opened_key);
                d.remove::<TouchFilter>(touch_key);
            });
        }

        ViewerResponse {
            thumbnail,
            transitions,
        }
    }
}

/// Where and when a thumbnail click opened the overlay.
#[derive(Debug, Clone, Copy)]
struct ThumbnailOpen {
    rect: Rect,
    at: Instant,
}

/// Follows the first finger down on the overlay and ignores the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TouchFilter {
    active: Option<(TouchDeviceId, TouchId)>,
}

impl TouchFilter {
    fn accept(&mut self, event: &Event) -> Option<ViewerEvent> {
        let Event::Touch {
            device_id,
            id,
            phase,
            pos,
            ..
        } = event
        else {
            return None;
        };
        let touch = (*device_id, *id);

        match phase {
            TouchPhase::Start if self.active.is_none() => {
                self.active = Some(touch);
                Some(ViewerEvent::TouchStart { y: pos.y as f64 })
            }
            TouchPhase::End if self.active == Some(touch) => {
                self.active = None;
                Some(ViewerEvent::TouchEnd { y: pos.y as f64 })
            }
            TouchPhase::Cancel if self.active == Some(touch) => {
                self.active = None;
                None
            }
            _ => None,
        }
    }
}

fn record(transitions: &mut Vec<Transition>, transition: Transition) {
    if transition != Transition::Unchanged {
        transitions.push(transition);
    }
}

/// Draw the overlay and collect the input it received.
///
/// Clicks inside `absorb` count as thumbnail taps.
fn show_overlay(
    ctx: &egui::Context,
    id: Id,
    viewer: &ImageViewer,
    uri: &str,
    fade: f32,
    interactive: bool,
    absorb: Option<Rect>,
) -> Vec<ViewerEvent> {
    let screen = ctx.input(|i| i.content_rect());
    let absorbed = |pointer: Pos2| absorb.is_some_and(|rect| rect.contains(pointer));
    let mut events = Vec::new();

    egui::Area::new(id.with("overlay"))
        .fixed_pos(Pos2::ZERO)
        .order(Order::Foreground)
        .interactable(interactive)
        .show(ctx, |ui| {
            ui.set_opacity(fade);

            // Backdrop (click closes)
            let backdrop = ui.allocate_rect(screen, Sense::click());
            let alpha = (viewer.config().backdrop_opacity.clamp(0.0, 1.0) * 255.0) as u8;
            ui.painter()
                .rect_filled(screen, CornerRadius::ZERO, Color32::from_black_alpha(alpha));

            let image_rect = to_screen(
                viewer.image_rect(kurbo::Size::new(
                    screen.width() as f64,
                    screen.height() as f64,
                )),
                screen.min,
            );
            let image = ui.interact(image_rect, id.with("image"), Sense::click_and_drag());
            egui::Image::from_uri(uri.to_owned()).paint_at(ui, image_rect);

            let image = if viewer.is_zoomed() {
                image.on_hover_cursor(CursorIcon::Grab)
            } else {
                image
            };

            if image.clicked() {
                if let Some(pointer) = image.interact_pointer_pos() {
                    let target = if absorbed(pointer) {
                        TapTarget::Thumbnail
                    } else {
                        let focus = pointer - screen.center();
                        TapTarget::Image {
                            focus: kurbo::Point::new(focus.x as f64, focus.y as f64),
                        }
                    };
                    events.push(ViewerEvent::Tap {
                        at: Instant::now(),
                        target,
                    });
                }
            } else if image.dragged() && viewer.is_zoomed() {
                let delta = image.drag_delta();
                events.push(ViewerEvent::Pan(kurbo::Vec2::new(
                    delta.x as f64,
                    delta.y as f64,
                )));
            }

            if backdrop.clicked() {
                match backdrop.interact_pointer_pos() {
                    Some(pointer) if absorbed(pointer) => events.push(ViewerEvent::Tap {
                        at: Instant::now(),
                        target: TapTarget::Thumbnail,
                    }),
                    _ => events.push(ViewerEvent::BackgroundClick),
                }
            }

            let touch_key = id.with("touch");
            let mut touches = ctx
                .data(|d| d.get_temp::<TouchFilter>(touch_key))
                .unwrap_or_default();
            ui.input(|i| events.extend(i.events.iter().filter_map(|e| touches.accept(e))));
            ctx.data_mut(|d| d.insert_temp(touch_key, touches));

            let close_size = vec2(crate::sizing::LARGE, crate::sizing::LARGE);
            let close_rect = Rect::from_min_size(
                pos2(
                    screen.right() - CLOSE_MARGIN - close_size.x,
                    screen.top() + CLOSE_MARGIN,
                ),
                close_size,
            );
            let close = ui
                .scope_builder(UiBuilder::new().max_rect(close_rect), |ui| {
                    ControlButton::new("×", "Close").show(ui)
                })
                .inner;
            if close {
                events.push(ViewerEvent::CloseButton);
            }

            if viewer.is_zoomed() {
                let bar_rect = Rect::from_center_size(
                    pos2(screen.center().x, screen.bottom() - 40.0),
                    vec2(CONTROL_BAR_WIDTH, crate::sizing::LARGE + 8.0),
                );
                ui.scope_builder(
                    UiBuilder::new()
                        .max_rect(bar_rect)
                        .layout(Layout::left_to_right(Align::Center)),
                    |ui| {
                        control_bar_frame().show(ui, |ui| {
                            if ControlButton::new("-", "Zoom out").compact().show(ui) {
                                events.push(ViewerEvent::ZoomOut);
                            }
                            if ControlButton::new("1:1", "Fit to screen").compact().show(ui) {
                                events.push(ViewerEvent::ZoomReset);
                            }
                            if ControlButton::new("+", "Zoom in").compact().show(ui) {
                                events.push(ViewerEvent::ZoomIn);
                            }
                        });
                    },
                );
            }
        });

    events
}

fn to_screen(rect: kurbo::Rect, origin: Pos2) -> Rect {
    Rect::from_min_max(
        pos2(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        pos2(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}
