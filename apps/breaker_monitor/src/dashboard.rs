//! The live circuit-breaker board.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use chirper_client::{
    Snapshot, StreamSource, format_latency, use_event_stream, use_monitor_target,
};
use chirper_types::{BreakerState, CircuitBreakerStatus};

use crate::layout::{ContentLayout, Section};

/// Dashboard page: target form plus the live board.
///
/// Changing the target rebuilds the board, which drops the old stream
/// connection and opens one against the new service.
#[component]
pub fn BreakersPage() -> impl IntoView {
    let target = use_monitor_target();

    view! {
        {move || {
            let host_port = target.get();
            view! {
                <ContentLayout subtitle=format!("Circuit Breakers for {host_port}")>
                    <Section>
                        <div class="small-12 columns">
                            <HostPortForm/>
                            <BreakerBoard host_port=host_port.clone()/>
                        </div>
                    </Section>
                </ContentLayout>
            }
        }}
    }
}

/// Form for pointing the dashboard at a service.
#[component]
fn HostPortForm() -> impl IntoView {
    let target = use_monitor_target();
    let (input, set_input) = signal(target.get());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Whitespace-only input is ignored and leaves the target unchanged.
        target.set(&input.get());
    };

    view! {
        <form class="service-host-port-form" on:submit=submit>
            <input
                type="text"
                placeholder="host:port (e.g. localhost:27462 or localhost:21360)"
                prop:value=move || input.get()
                on:input=move |ev| set_input.set(event_target_value(&ev))
            />
            <input type="submit" value="Go"/>
        </form>
    }
}

/// Live board over the status stream; each frame replaces the whole board.
#[component]
fn BreakerBoard(host_port: String) -> impl IntoView {
    let feed = use_event_stream(
        StreamSource::circuit_breakers(&host_port),
        Snapshot::new(),
        |board: &Snapshot<CircuitBreakerStatus>, frame: Vec<CircuitBreakerStatus>| {
            board.replace(frame)
        },
    );

    view! {
        <div class="circuit-breaker-stream">
            <hr/>
            <For
                each=move || feed.state.get().entries().to_vec()
                key=|breaker: &CircuitBreakerStatus| breaker.id.clone()
                children=|breaker: CircuitBreakerStatus| view! { <BreakerCard breaker=breaker/> }
            />
        </div>
    }
}

/// One breaker's summary and latency distribution.
#[component]
fn BreakerCard(breaker: CircuitBreakerStatus) -> impl IntoView {
    let latency = breaker.latency_micros.clone();

    view! {
        <div class="circuit-breaker">
            <p>
                <b>{breaker.id.clone()}</b>
            </p>
            <table class="invisible-table">
                <tbody>
                    <tr>
                        <td>
                            <table>
                                <tbody>
                                    <tr>
                                        <td>"State"</td>
                                        <td>
                                            <BreakerStateBadge state=breaker.state/>
                                        </td>
                                    </tr>
                                    <tr>
                                        <td>"Throughput"</td>
                                        <td>
                                            {format!("{:.0} msg/s", breaker.throughput_one_minute)}
                                        </td>
                                    </tr>
                                    <tr>
                                        <td>"Failed throughput"</td>
                                        <td>
                                            {format!(
                                                "{} msg/s",
                                                breaker.failed_throughput_one_minute,
                                            )}
                                        </td>
                                    </tr>
                                    <tr>
                                        <td>"Latency mean"</td>
                                        <td>{format_latency(latency.mean)}</td>
                                    </tr>
                                    <tr>
                                        <td>"Total success count"</td>
                                        <td>{breaker.total_success_count}</td>
                                    </tr>
                                    <tr>
                                        <td>"Total failure count"</td>
                                        <td>{breaker.total_failure_count}</td>
                                    </tr>
                                    <tr>
                                        <td>"Timestamp"</td>
                                        <td>{format!("{:.3}", breaker.timestamp)}</td>
                                    </tr>
                                </tbody>
                            </table>
                        </td>
                        <td>
                            <table>
                                <tbody>
                                    <tr>
                                        <td>"Latency distribution"</td>
                                        <td></td>
                                    </tr>
                                    <tr>
                                        <td>"min"</td>
                                        <td>{format_latency(latency.min as f64)}</td>
                                    </tr>
                                    <tr>
                                        <td>"median"</td>
                                        <td>{format_latency(latency.median)}</td>
                                    </tr>
                                    <tr>
                                        <td>"98th percentile"</td>
                                        <td>{format_latency(latency.percentile98th)}</td>
                                    </tr>
                                    <tr>
                                        <td>"99th percentile"</td>
                                        <td>{format_latency(latency.percentile99th)}</td>
                                    </tr>
                                    <tr>
                                        <td>"99.9th percentile"</td>
                                        <td>{format_latency(latency.percentile999th)}</td>
                                    </tr>
                                    <tr>
                                        <td>"max"</td>
                                        <td>{format_latency(latency.max as f64)}</td>
                                    </tr>
                                </tbody>
                            </table>
                        </td>
                    </tr>
                </tbody>
            </table>
            <hr/>
        </div>
    }
}

/// Breaker state text; anything but `closed` gets error styling.
#[component]
fn BreakerStateBadge(state: BreakerState) -> impl IntoView {
    let label = state.to_string();
    if state.is_closed() {
        view! { <span>{label}</span> }.into_any()
    } else {
        view! { <span class="error">{label}</span> }.into_any()
    }
}
