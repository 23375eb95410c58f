use models::ViewState;
use sycamore::prelude::*;

#[component]
pub fn Header(cx: Scope) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);

    let clock = create_selector(cx, || state.get().clock_text());
    let link = create_selector(cx, || state.get().link);

    view! { cx,
        header(class="dashboard-header") {
            h1 { "💧 Irrigation Dashboard" }
            div(class="last-updated") {
                "Last updated: " (clock.get())
            }
            div(class=link.get().css_class()) {
                (link.get().to_string())
            }
        }
    }
}

#[component]
pub fn StatusPanel(cx: Scope) -> View<DomNode> {
    let state = use_context::<Signal<ViewState>>(cx);
    let status = create_selector(cx, || state.get().status.clone());

    view! { cx,
        div(class="status-panel") {
            pre { (status.get()) }
        }
    }
}

#[derive(Prop)]
pub struct ConfigErrorParams {
    pub message: String,
}

/// Shown instead of the dashboard when the build was configured wrong.
#[component]
pub fn ConfigError(cx: Scope, params: ConfigErrorParams) -> View<DomNode> {
    let message = params.message;

    view! { cx,
        div(class="main-body") {
            header(class="dashboard-header") {
                h1 { "💧 Irrigation Dashboard" }
            }
            div(class="status-panel config-error") {
                h2 { "Configuration error" }
                pre { (message.clone()) }
            }
        }
    }
}
