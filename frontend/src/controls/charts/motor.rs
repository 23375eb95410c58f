use models::{display, ViewState};
use plotters::prelude::*;
use sycamore::prelude::*;

use super::{plot_color, prepare_backend, AXIS, GRID};
use crate::helpers::log_error;

#[component]
pub fn MotorActivityChart(cx: Scope) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);
    let bar = create_selector(cx, || {
        let state = state.get();
        display::prediction_bar(state.sample.as_ref(), state.predicted)
    });
    let canvas_node = create_node_ref(cx);

    let view = view! { cx,
        canvas(ref=canvas_node, width="800", height="300", class="chart")
    };

    create_effect(cx, move || {
        let bar = *bar.get();
        let Some(canvas) = canvas_node.try_get::<DomNode>() else {
            return;
        };

        if let Err(err) = render_bar(&canvas, bar) {
            log_error(&format!("Motor chart: {err:#}"));
        }
    });

    view
}

fn render_bar(canvas: &DomNode, bar: display::PredictionBar) -> anyhow::Result<()> {
    let root = prepare_backend(canvas)?.into_drawing_area();
    root.fill(&TRANSPARENT)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&GRID.mix(0.05))
        .bold_line_style(&GRID.mix(0.1))
        .axis_style(&AXIS)
        .label_style(("sans-serif", 12).into_font().color(&AXIS))
        .x_desc("Motor Status")
        .x_label_formatter(&|_| String::new())
        .y_labels(2)
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()?;

    let fill = plot_color(bar.color);
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.25, 0.0), (0.75, bar.value)],
        fill.filled(),
    )))?;

    Ok(())
}
