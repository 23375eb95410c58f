use std::{future::Future, time::Duration};

use futures_util::{select, stream::FuturesUnordered, StreamExt};
use gloo_timers::future::{sleep, IntervalStream};
use sycamore::{futures::spawn_local_scoped, prelude::*};

pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Local wall-clock time, as shown in the header and the history chart
pub fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Runs `refresh` right away and then once per `period`, without waiting for
/// the previous run to finish. Every run in flight belongs to the scope and is
/// dropped with it, along with the interval timer.
pub fn start_poller<'a, F, Fut>(cx: Scope<'a>, name: &'static str, period: Duration, refresh: F)
where
    F: Fn() -> Fut + 'a,
    Fut: Future<Output = ()> + 'a,
{
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);

    spawn_local_scoped(cx, async move {
        let mut ticks = IntervalStream::new(millis).fuse();
        let mut in_flight = FuturesUnordered::new();
        in_flight.push(refresh());

        loop {
            select! {
                tick = ticks.next() => match tick {
                    Some(()) => in_flight.push(refresh()),
                    None => break,
                },
                () = in_flight.select_next_some() => {}
            }
        }
    });

    on_cleanup(cx, move || log(&format!("Stopped {name} poller")));
}

/// Calls `tick` once per `period` until the scope is disposed.
pub fn start_ticker<'a, F>(cx: Scope<'a>, period: Duration, tick: F)
where
    F: Fn() + 'a,
{
    spawn_local_scoped(cx, async move {
        loop {
            sleep(period).await;
            tick();
        }
    });
}
