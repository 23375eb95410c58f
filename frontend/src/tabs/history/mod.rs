use sycamore::prelude::*;

use crate::controls::{MotorActivityChart, TemperatureChart};

#[component]
pub fn HistoryPage(cx: Scope<'_>) -> View<DomNode> {
    view! { cx,
        div(class = "chart-panel") {
            h3 { "Temperature Trends" }
            TemperatureChart()
        }

        div(class = "chart-panel") {
            h3 { "Motor Activity" }
            MotorActivityChart()
        }
    }
}
