use anyhow::{anyhow, bail};
use models::display::Rgb;
use plotters::style::RGBColor;
use plotters_canvas::CanvasBackend;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub use self::motor::MotorActivityChart;
pub use self::temperature::TemperatureChart;

mod motor;
mod temperature;

const AXIS: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);
const GRID: RGBColor = RGBColor(0xff, 0xff, 0xff);
const LEGEND_TEXT: RGBColor = RGBColor(0xe4, 0xe4, 0xe4);

fn plot_color(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Clears the canvas behind `node` and hands back a plotters backend for it.
fn prepare_backend(node: &DomNode) -> anyhow::Result<CanvasBackend> {
    let Ok(canvas) = node.inner_element().dyn_into::<HtmlCanvasElement>() else {
        bail!("Couldn't convert canvas to HtmlCanvasElement");
    };

    let Some(ctx) = canvas.get_context("2d").map_err(|e| anyhow!("JsError: {e:?}"))? else {
        bail!("No 2D context available");
    };
    let Some(ctx) = ctx.dyn_ref::<CanvasRenderingContext2d>() else {
        bail!("2D context is the wrong type");
    };
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    CanvasBackend::with_canvas_object(canvas).ok_or_else(|| anyhow!("Couldn't create canvas backend"))
}
