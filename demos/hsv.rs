//! Standalone demo: three HSV range sliders and an Apply button.
//!
//! Apply logs the picked ranges and copies them to the clipboard.
//! Set `RUST_LOG=floem_labeled_slider=debug` to watch margins settle.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_labeled_slider::config::PanelConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

fn panel(config: PanelConfig) -> impl IntoView {
    let channels: Vec<(String, RwSignal<(i32, i32)>, _)> = config
        .channels
        .into_iter()
        .map(|c| {
            let selection = RwSignal::new((c.slider.minimum, c.slider.maximum));
            (c.name, selection, c.slider)
        })
        .collect();
    let picked: Vec<(String, RwSignal<(i32, i32)>)> = channels
        .iter()
        .map(|(name, selection, _)| (name.clone(), *selection))
        .collect();

    let rows = v_stack_from_iter(channels.into_iter().map(|(name, selection, slider)| {
        let slider = match slider.build(selection) {
            Ok(slider) => slider.into_any(),
            Err(err) => {
                tracing::error!(channel = %name, %err, "skipping slider");
                label(move || format!("invalid slider: {err}")).into_any()
            }
        };
        h_stack((
            label(move || name.clone()).style(|s| s.width(16.0).font_size(13.0)),
            slider,
        ))
        .style(|s| s.items_center().gap(8.0))
    }))
    .style(|s| s.gap(8.0));

    let apply = label(|| "Apply")
        .style(|s| {
            s.padding_horiz(16.0)
                .padding_vert(4.0)
                .border(1.0)
                .border_radius(4.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::WHITE)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            let summary = picked
                .iter()
                .map(|(name, sel)| {
                    let (low, high) = sel.get_untracked();
                    format!("{name}: {low}-{high}")
                })
                .collect::<Vec<_>>()
                .join(", ");
            tracing::info!(%summary, "applied ranges");
            copy_to_clipboard(&summary);
        });

    v_stack((rows, apply.style(|s| s.align_self(Some(floem::taffy::AlignItems::Center)))))
        .style(|s| {
            s.gap(8.0)
                .padding(8.0)
                .size_full()
                .background(Color::rgb8(242, 242, 242))
        })
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    floem::Application::new()
        .window(
            move |_| {
                panel(PanelConfig::hsv()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((440.0, 260.0))
                    .title("HSV sliders"),
            ),
        )
        .run();
}
