use models::{DisplayMode, ViewState};
use sycamore::prelude::*;
use web_sys::Event;

mod history;
mod live;

fn tab_class(active: DisplayMode, tab: DisplayMode) -> &'static str {
    if active == tab {
        "tab-button highlighted"
    } else {
        "tab-button"
    }
}

#[component]
pub fn ModeTabs(cx: Scope) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);
    let mode = create_selector(cx, || state.get().mode);

    let live_class = create_selector(cx, || tab_class(*mode.get(), DisplayMode::Live));
    let history_class = create_selector(cx, || tab_class(*mode.get(), DisplayMode::History));

    let live_click = move |_e: Event| {
        state.modify().select_mode(DisplayMode::Live)
    };
    let history_click = move |_e: Event| {
        state.modify().select_mode(DisplayMode::History)
    };

    view! { cx,
        nav(class = "tab-bar") {
            button(class = live_class.get(), on:click = live_click) {
                (DisplayMode::Live.label())
            }
            button(class = history_class.get(), on:click = history_click) {
                (DisplayMode::History.label())
            }
        }

        div(class = "active-tab") {
            (match *mode.get() {
                DisplayMode::Live => view! { cx, live::LivePage() },
                DisplayMode::History => view! { cx, history::HistoryPage() },
            })
        }
    }
}
