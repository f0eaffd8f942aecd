//! Two-thumb range slider.
//!
//! Holds a `(low, high)` selection inside `minimum..=maximum`, draws the
//! track with the selected span filled, tick marks, and ring thumbs. Thumb
//! centers sit at [`tick_offset`](crate::overlay::tick_offset) along the track
//! so labels placed from [`TrackMetrics`] line up with them.

use floem::kurbo::{Circle, Line, Point, Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::level::Orientation;
use crate::metrics::{SliderMetrics, TrackMetrics};

/// Where tick marks are drawn relative to the track.
///
/// On a vertical slider `Above` is the left side and `Below` the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickPosition {
    #[default]
    NoTicks,
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Thumb {
    Low,
    High,
}

/// Clamp a selection into `minimum..=maximum` and order it.
pub(crate) fn normalize_selection(minimum: i32, maximum: i32, (a, b): (i32, i32)) -> (i32, i32) {
    let (lo, hi) = if maximum < minimum {
        (maximum, minimum)
    } else {
        (minimum, maximum)
    };
    let a = a.clamp(lo, hi);
    let b = b.clamp(lo, hi);
    (a.min(b), a.max(b))
}

/// Snap `value` to the nearest multiple of `step` counted from `minimum`.
pub(crate) fn snap_to_step(minimum: i32, maximum: i32, value: i32, step: i32) -> i32 {
    if step <= 1 {
        return value;
    }
    let rel = (value as i64 - minimum as i64) as f64 / step as f64;
    let snapped = minimum as i64 + rel.round() as i64 * step as i64;
    snapped.clamp(minimum as i64, maximum.max(minimum) as i64) as i32
}

/// Pick the thumb a press at `value` should grab.
///
/// The nearer thumb wins. When both sit at the same spot the press direction
/// decides, so a collapsed selection can still be widened either way.
fn pick_thumb((low, high): (i32, i32), value: i32) -> Thumb {
    let to_low = value.abs_diff(low);
    let to_high = value.abs_diff(high);
    if to_low < to_high {
        Thumb::Low
    } else if to_high < to_low {
        Thumb::High
    } else if value < low {
        Thumb::Low
    } else {
        Thumb::High
    }
}

/// Normalize the selection held by `selection`, writing it back if it changed.
pub(crate) fn sync_selection(
    selection: RwSignal<(i32, i32)>,
    minimum: i32,
    maximum: i32,
) -> (i32, i32) {
    let current = selection.get_untracked();
    let normalized = normalize_selection(minimum, maximum, current);
    if normalized != current {
        selection.set(normalized);
    }
    normalized
}

/// Metrics of a range slider laid out at `size`.
pub fn track_metrics(
    minimum: i32,
    maximum: i32,
    orientation: Orientation,
    size: floem::taffy::prelude::Size<f32>,
) -> TrackMetrics {
    let track_length = match orientation {
        Orientation::Horizontal => size.width,
        Orientation::Vertical => size.height,
    };
    TrackMetrics::new(minimum, maximum, orientation, track_length as f64)
}

struct SelectionUpdate(i32, i32);

pub struct RangeSlider {
    id: ViewId,
    held: Option<Thumb>,
    minimum: i32,
    maximum: i32,
    orientation: Orientation,
    tick_position: TickPosition,
    tick_interval: i32,
    single_step: i32,
    low: i32,
    high: i32,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn((i32, i32))>>,
}

/// Creates a range slider over `minimum..=maximum`.
///
/// - `selection`: the `(low, high)` pair, kept ordered and in range.
pub fn range_slider(
    selection: RwSignal<(i32, i32)>,
    minimum: i32,
    maximum: i32,
    orientation: Orientation,
) -> RangeSlider {
    let id = ViewId::new();
    let (low, high) = sync_selection(selection, minimum, maximum);

    create_effect(move |_| {
        let (low, high) = selection.get();
        id.update_state(SelectionUpdate(low, high));
    });

    RangeSlider {
        id,
        held: None,
        minimum,
        maximum,
        orientation,
        tick_position: TickPosition::NoTicks,
        tick_interval: 0,
        single_step: 1,
        low,
        high,
        size: Default::default(),
        on_change: Some(Box::new(move |range| {
            selection.set(range);
        })),
    }
    .style(move |s| {
        let s = s.cursor(floem::style::CursorStyle::Pointer);
        match orientation {
            Orientation::Horizontal => s
                .width_full()
                .min_width(constants::MIN_TRACK_LENGTH)
                .height(constants::SLIDER_THICKNESS),
            Orientation::Vertical => s
                .height_full()
                .min_height(constants::MIN_TRACK_LENGTH)
                .width(constants::SLIDER_THICKNESS),
        }
    })
}

impl RangeSlider {
    pub fn tick_position(mut self, position: TickPosition) -> Self {
        self.tick_position = position;
        self
    }

    /// Distance between tick marks in slider units. 0 disables them.
    pub fn tick_interval(mut self, interval: i32) -> Self {
        self.tick_interval = interval.max(0);
        self
    }

    /// Granularity of pointer-driven changes.
    pub fn single_step(mut self, step: i32) -> Self {
        self.single_step = step.max(1);
        self
    }

    pub fn metrics(&self) -> TrackMetrics {
        track_metrics(self.minimum, self.maximum, self.orientation, self.size)
    }

    fn along_axis(&self, pos: Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => pos.x,
            Orientation::Vertical => pos.y,
        }
    }

    fn value_at(&self, pos: Point) -> i32 {
        let metrics = self.metrics();
        let along = self.along_axis(pos) - metrics.handle_length() / 2.0;
        let value = metrics.value_from_position(along);
        snap_to_step(self.minimum, self.maximum, value, self.single_step)
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let value = self.value_at(pos);
        match self.held {
            Some(Thumb::Low) => self.low = value.min(self.high),
            Some(Thumb::High) => self.high = value.max(self.low),
            None => {}
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb((self.low, self.high));
        }
    }

    /// Cross-axis center of the track; ticks placed above push it down.
    fn track_center_across(&self) -> f64 {
        match self.tick_position {
            TickPosition::Above => {
                constants::TICK_LENGTH + constants::TICK_GAP + constants::THUMB_RADIUS
            }
            _ => constants::THUMB_RADIUS,
        }
    }

    /// Center of a thumb sitting at `value`.
    fn thumb_center(&self, metrics: &TrackMetrics, value: i32) -> Point {
        let along = crate::overlay::tick_offset(metrics, value);
        let across = self.track_center_across();
        match self.orientation {
            Orientation::Horizontal => Point::new(along, across),
            Orientation::Vertical => Point::new(across, along),
        }
    }

    fn paint_ticks(&self, cx: &mut PaintCx, metrics: &TrackMetrics) {
        if self.tick_position == TickPosition::NoTicks
            || self.tick_interval <= 0
            || self.maximum < self.minimum
            || (self.maximum as i64 - self.minimum as i64) / self.tick_interval as i64
                >= constants::MAX_TICKS as i64
        {
            return;
        }
        let (start, end) = match self.tick_position {
            TickPosition::Below => {
                let start = 2.0 * constants::THUMB_RADIUS + constants::TICK_GAP;
                (start, start + constants::TICK_LENGTH)
            }
            _ => (0.0, constants::TICK_LENGTH),
        };
        let stroke = Stroke::new(1.0);
        let mut value = self.minimum;
        while value <= self.maximum {
            let along = crate::overlay::tick_offset(metrics, value);
            let line = match self.orientation {
                Orientation::Horizontal => Line::new((along, start), (along, end)),
                Orientation::Vertical => Line::new((start, along), (end, along)),
            };
            cx.stroke(&line, constants::TICK_COLOR, &stroke);
            value = match value.checked_add(self.tick_interval) {
                Some(v) => v,
                None => break,
            };
        }
    }

    fn paint_thumb(cx: &mut PaintCx, center: Point) {
        let radius = constants::THUMB_RADIUS;
        cx.fill(&Circle::new(center, radius), Color::WHITE, 0.0);
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 3.0),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
    }
}

impl View for RangeSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SelectionUpdate>() {
            let (low, high) =
                normalize_selection(self.minimum, self.maximum, (update.0, update.1));
            self.low = low;
            self.high = high;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                let value = self.value_at(e.pos);
                self.held = Some(pick_thumb((self.low, self.high), value));
                self.update_from_pointer(e.pos);
                self.notify();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held.is_some() {
                    self.update_from_pointer(e.pos);
                    self.notify();
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = None;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = None;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let metrics = self.metrics();
        let across = self.track_center_across();
        let half_track = constants::TRACK_THICKNESS / 2.0;

        // Track runs between the two extreme thumb centers
        let first = self.thumb_center(&metrics, self.minimum);
        let last = self.thumb_center(&metrics, self.maximum);
        let track = match self.orientation {
            Orientation::Horizontal => {
                Rect::new(first.x, across - half_track, last.x, across + half_track)
            }
            Orientation::Vertical => Rect::new(
                across - half_track,
                first.y.min(last.y),
                across + half_track,
                first.y.max(last.y),
            ),
        };
        cx.fill(
            &track.to_rounded_rect(half_track),
            constants::TRACK_COLOR,
            0.0,
        );

        let low = self.thumb_center(&metrics, self.low);
        let high = self.thumb_center(&metrics, self.high);
        let selected = match self.orientation {
            Orientation::Horizontal => {
                Rect::new(low.x, across - half_track, high.x, across + half_track)
            }
            Orientation::Vertical => Rect::new(
                across - half_track,
                low.y.min(high.y),
                across + half_track,
                low.y.max(high.y),
            ),
        };
        cx.fill(
            &selected.to_rounded_rect(half_track),
            constants::SELECTION_COLOR,
            0.0,
        );

        self.paint_ticks(cx, &metrics);

        // Held thumb on top
        if self.held == Some(Thumb::Low) {
            Self::paint_thumb(cx, high);
            Self::paint_thumb(cx, low);
        } else {
            Self::paint_thumb(cx, low);
            Self::paint_thumb(cx, high);
        }
    }
}
