#![allow(non_snake_case)]

use std::cell::RefCell;

use models::{sequence::RequestSequencer, DashboardConfig, History, ViewState};
use sycamore::prelude::*;

use crate::helpers::{log, log_error, now, start_poller, start_ticker};

mod api;
mod config;
mod controls;
mod tabs;

mod helpers;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let config = config::load();
    if let Err(err) = &config {
        log_error(&format!("Dashboard disabled, configuration error: {err:#}"));
    }

    sycamore::render(move |cx| match config {
        Ok(config) => view! { cx,
            App(config = config)
        },
        Err(err) => view! { cx,
            controls::ConfigError(message = format!("{err:#}"))
        },
    })
}

#[derive(Prop)]
struct AppParams {
    config: DashboardConfig,
}

#[component]
fn App(cx: Scope, params: AppParams) -> View<DomNode> {
    let config = create_ref(cx, params.config);

    let state = create_signal(cx, ViewState::new(now(), History::default()));
    provide_context_ref(cx, state);

    let telemetry_seq = create_ref(cx, RefCell::new(RequestSequencer::default()));
    let prediction_seq = create_ref(cx, RefCell::new(RequestSequencer::default()));

    start_poller(cx, "telemetry", config.poll_interval, move || {
        refresh_telemetry(config, state, telemetry_seq)
    });
    start_poller(cx, "prediction", config.poll_interval, move || {
        refresh_prediction(config, state, prediction_seq)
    });
    start_ticker(cx, config.clock_interval, move || state.modify().tick_clock(now()));

    log(&format!("Polling {} every {:?}", config.telemetry_url(), config.poll_interval));

    view! { cx,
        div(class="main-body") {
            controls::Header()
            controls::StatusPanel()
            tabs::ModeTabs()
        }
    }
}

async fn refresh_telemetry(
    config: &DashboardConfig,
    state: &Signal<ViewState>,
    seq: &RefCell<RequestSequencer>,
) {
    let ticket = seq.borrow_mut().issue();
    let result = api::get_dashboard_data(&config.telemetry_url()).await;

    if !seq.borrow_mut().accept(ticket) {
        log(&format!("Dropped stale telemetry response #{}", ticket.number()));
        return;
    }

    match result {
        Ok(payload) => state.modify().apply_telemetry(&payload, now()),
        Err(err) => {
            let path = config.telemetry_path();
            log_error(&format!("F (telemetry) ({path}): {err:#}"));
            state.modify().apply_telemetry_failure(&path, format!("{err:#}"));
        }
    }
}

async fn refresh_prediction(
    config: &DashboardConfig,
    state: &Signal<ViewState>,
    seq: &RefCell<RequestSequencer>,
) {
    let ticket = seq.borrow_mut().issue();
    let result = api::get_dashboard_data(&config.telemetry_url()).await;

    if !seq.borrow_mut().accept(ticket) {
        log(&format!("Dropped stale prediction response #{}", ticket.number()));
        return;
    }

    match result {
        Ok(payload) => state.modify().apply_prediction(&payload),
        // Prediction failures never reach the page
        Err(err) => log_error(&format!("Error fetching prediction: {err:#}")),
    }
}
