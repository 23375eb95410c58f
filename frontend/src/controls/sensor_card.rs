use models::display::CardContent;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct SensorCardParams<'a> {
    pub card: &'a ReadSignal<CardContent>,
}

#[component]
pub fn SensorCard<'a>(cx: Scope<'a>, params: SensorCardParams<'a>) -> View<DomNode> {
    let card = params.card;

    let value_style = create_selector(cx, move || format!("color: {};", card.get().color));

    view! { cx,
        div(class="sensor-card") {
            div(class="sensor-card-header") {
                span(class="sensor-card-title") { (card.get().title) }
                div(class="sensor-card-icon") { (card.get().icon) }
            }
            div(class="sensor-card-value", style=value_style.get()) {
                (card.get().value.clone())
            }
            div(class="sensor-card-unit") { (card.get().unit) }
        }
    }
}
