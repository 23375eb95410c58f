use models::{display::Rgb, History, ViewState};
use plotters::prelude::*;
use sycamore::prelude::*;

use super::{plot_color, prepare_backend, AXIS, GRID, LEGEND_TEXT};
use crate::helpers::log_error;

#[component]
pub fn TemperatureChart(cx: Scope) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);
    let history = create_selector(cx, || state.get().history.clone());
    let canvas_node = create_node_ref(cx);

    let view = view! { cx,
        canvas(ref=canvas_node, width="800", height="300", class="chart")
    };

    create_effect(cx, move || {
        let history = history.get();
        let Some(canvas) = canvas_node.try_get::<DomNode>() else {
            return;
        };

        if let Err(err) = render_history(&canvas, &history) {
            log_error(&format!("Temperature chart: {err:#}"));
        }
    });

    view
}

fn render_history(canvas: &DomNode, history: &History) -> anyhow::Result<()> {
    let root = prepare_backend(canvas)?.into_drawing_area();
    root.fill(&TRANSPARENT)?;

    let times: Vec<&str> = history.iter().map(|p| p.time.as_str()).collect();
    let (temp_min, temp_max) = history.temperature_bounds().unwrap_or((0.0, 0.0));
    let x_max = times.len().saturating_sub(1).max(1) as f64;

    let label_at = |x: &f64| {
        let index = x.round();
        if (x - index).abs() > f64::EPSILON || index < 0.0 {
            return String::new();
        }
        times.get(index as usize).map(|t| t.to_string()).unwrap_or_default()
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, (temp_min - 1.0)..(temp_max + 1.0))?;

    chart
        .configure_mesh()
        .light_line_style(&GRID.mix(0.05))
        .bold_line_style(&GRID.mix(0.1))
        .axis_style(&AXIS)
        .label_style(("sans-serif", 12).into_font().color(&AXIS))
        .x_labels(times.len().clamp(2, 10))
        .x_label_formatter(&label_at)
        .y_labels(5)
        .y_label_formatter(&|y| format!("{y:.1}"))
        .draw()?;

    if history.is_empty() {
        return Ok(());
    }

    let line = plot_color(Rgb::MEASUREMENT);
    chart
        .draw_series(LineSeries::new(
            history.iter().enumerate().map(|(i, p)| (i as f64, p.temperature)),
            &line,
        ))?
        .label("Temperature (°C)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));

    chart
        .configure_series_labels()
        .label_font(("sans-serif", 12).into_font().color(&LEGEND_TEXT))
        .border_style(&AXIS)
        .draw()?;

    Ok(())
}
