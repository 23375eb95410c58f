use models::{display, ViewState};
use sycamore::prelude::*;

use crate::controls::{MotorDetail, SensorCard};

#[component]
pub fn LivePage(cx: Scope<'_>) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);

    let temperature = create_selector(cx, || display::temperature_card(state.get().sample.as_ref()));
    let humidity = create_selector(cx, || display::humidity_card(state.get().sample.as_ref()));
    let soil = create_selector(cx, || display::soil_moisture_card(state.get().sample.as_ref()));
    let motor = create_selector(cx, || display::motor_card(state.get().sample.as_ref()));

    view! { cx,
        div(class = "sensor-grid") {
            SensorCard(card = temperature)
            SensorCard(card = humidity)
            SensorCard(card = soil)
            SensorCard(card = motor)
        }

        MotorDetail()
    }
}
