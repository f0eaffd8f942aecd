//! Range slider with a row (or column) of tick labels.
//!
//! Wraps a [`RangeSlider`](crate::RangeSlider) as its only child and pads it with [`Margins`]
//! large enough for the label text. Labels are measured once at construction.
//! Each layout pass places them against the child's track and, if any would
//! clip, grows the margins so the next pass fits them.

use std::borrow::Cow;

use floem::kurbo::{Point, Rect, Size};
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use floem::text::{Attrs, AttrsList, TextLayout};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx},
    IntoView, View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::error::SliderError;
use crate::level::{Level, Orientation};
use crate::margins::Margins;
use crate::metrics::TrackMetrics;
use crate::options::SliderOptions;
use crate::overlay;
use crate::range_slider::{range_slider, track_metrics, TickPosition};

/// Lays out label text with the slider's label font.
fn label_layout(text: &str) -> TextLayout {
    let attrs = Attrs::new()
        .font_size(constants::LABEL_FONT)
        .color(constants::LABEL_COLOR);
    let mut layout = TextLayout::new();
    layout.set_text(text, AttrsList::new(attrs));
    layout
}

pub struct LabeledSlider {
    id: ViewId,
    slider_id: ViewId,
    minimum: i32,
    maximum: i32,
    orientation: Orientation,
    levels: Vec<Level>,
    labels: Vec<TextLayout>,
    label_sizes: Vec<Size>,
    label_origins: Vec<Point>,
    margins: RwSignal<Margins>,
}

/// Creates a range slider labeled at every tick of `options`.
///
/// - `selection`: the `(low, high)` range picked by the user.
///
/// Fails if the options don't describe a valid tick set; nothing is built in
/// that case.
pub fn labeled_slider(
    options: SliderOptions,
    selection: RwSignal<(i32, i32)>,
) -> Result<LabeledSlider, SliderError> {
    let levels = options.levels()?;
    let orientation = options.orientation();

    let tick_position = match orientation {
        Orientation::Horizontal => TickPosition::Below,
        Orientation::Vertical => TickPosition::Above,
    };
    let slider = range_slider(selection, options.minimum(), options.maximum(), orientation)
        .tick_position(tick_position)
        .tick_interval(options.interval())
        .single_step(1);
    let slider_id = slider.id();

    let id = ViewId::new();
    id.set_children(vec![slider.into_any()]);

    let labels: Vec<TextLayout> = levels.iter().map(|l| label_layout(l.text())).collect();
    let label_sizes = labels.iter().map(|l| l.size()).collect();

    tracing::trace!(
        minimum = options.minimum(),
        maximum = options.maximum(),
        ticks = levels.len(),
        %orientation,
        "built labeled slider"
    );

    let margins = RwSignal::new(Margins::default());
    Ok(LabeledSlider {
        id,
        slider_id,
        minimum: options.minimum(),
        maximum: options.maximum(),
        orientation,
        levels,
        labels,
        label_sizes,
        label_origins: Vec::new(),
        margins,
    }
    .style(move |s| {
        let m = margins.get();
        let s = s
            .padding_left(m.left)
            .padding_top(m.top)
            .padding_right(m.right)
            .padding_bottom(m.bottom);
        match orientation {
            Orientation::Horizontal => s.flex_col(),
            Orientation::Vertical => s.flex_row(),
        }
    }))
}

impl LabeledSlider {
    /// Ticks in declaration order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Margins currently reserved around the track.
    pub fn margins(&self) -> Margins {
        self.margins.get_untracked()
    }

    fn metrics(&self) -> TrackMetrics {
        let size = self
            .slider_id
            .get_layout()
            .map(|l| l.size)
            .unwrap_or_default();
        track_metrics(self.minimum, self.maximum, self.orientation, size)
    }
}

impl View for LabeledSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        "LabeledSlider".into()
    }

    fn compute_layout(&mut self, cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let rect = cx.compute_view_layout(self.slider_id);

        let layout = self.id.get_layout().unwrap_or_default();
        let size = Size::new(layout.size.width as f64, layout.size.height as f64);
        let metrics = self.metrics();
        let applied = self.margins.get_untracked();

        self.label_origins =
            overlay::label_origins(&self.levels, &self.label_sizes, &metrics, applied, size);

        let required = overlay::required_margins(&self.levels, &self.label_sizes, &metrics, applied);
        let mut grown = applied;
        if grown.grow_to(required) {
            tracing::debug!(?applied, ?grown, "growing label margins");
            self.margins.set(grown);
        }

        rect
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        cx.paint_children(self.id);
        for (layout, origin) in self.labels.iter().zip(&self.label_origins) {
            cx.draw_text(layout, *origin);
        }
    }
}
