use models::{display, ViewState};
use sycamore::prelude::*;

#[component]
pub fn MotorDetail(cx: Scope) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);

    let panel = create_selector(cx, || {
        let state = state.get();
        display::motor_panel(state.sample.as_ref(), state.predicted)
    });
    let indicator_style = create_selector(cx, || {
        format!("background-color: {};", panel.get().indicator)
    });

    view! { cx,
        div(class="motor-control") {
            h2 { "Motor Control" }
            div(class="motor-card") {
                div(class="motor-card-title") {
                    span(class="motor-indicator", style=indicator_style.get())
                    "Irrigation Motor"
                }
                div(class="motor-card-stats") {
                    div(class="motor-stat") {
                        div(class="motor-stat-label") { "State" }
                        div(class="motor-stat-value") { (panel.get().raw_code.clone()) }
                    }
                    div(class="motor-stat") {
                        div(class="motor-stat-label") { "Status" }
                        div(class="motor-stat-value") { (panel.get().activity) }
                    }
                    div(class="motor-stat") {
                        div(class="motor-stat-label") { "Predicted State" }
                        div(class="motor-stat-value") { (panel.get().predicted.clone()) }
                    }
                }
            }
        }
    }
}
