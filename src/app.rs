use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

use crate::{
    application::FrameThrottle,
    domain::{
        chart::{AxisLabel, ChartScene},
        logging::LogComponent,
        series::Preset,
    },
    infrastructure::rendering::SignalSurface,
    presentation::{
        ChartsHandle,
        container_observer::{ContainerObserver, measure},
        pointer_events::PointerListeners,
    },
    view_state::Grip,
};

const STYLES: &str = r#"
.perf-charts {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    color: #e6f7ff;
}

.preset-bar {
    display: flex;
    gap: 6px;
    margin-bottom: 16px;
}

.preset-btn {
    background: rgba(255, 255, 255, 0.08);
    color: #a0c4d4;
    border: 1px solid rgba(255, 255, 255, 0.15);
    border-radius: 6px;
    padding: 4px 12px;
    cursor: pointer;
    font-size: 12px;
}

.preset-btn.active {
    background: #00d2ff;
    color: #06202a;
    border-color: #00d2ff;
}

.chart-card {
    background: rgba(0, 0, 0, 0.35);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    padding: 12px 16px;
    margin-bottom: 16px;
    user-select: none;
}

.chart-title {
    font-size: 13px;
    font-weight: 600;
    margin-bottom: 8px;
}

.chart-detail {
    position: relative;
    height: 160px;
}

.chart-axis {
    position: relative;
    height: 18px;
    font-size: 11px;
    color: #7f9aa6;
}

.axis-label {
    position: absolute;
    top: 2px;
    white-space: nowrap;
}

.axis-label small {
    margin-left: 2px;
    font-size: 9px;
}

.chart-track {
    position: relative;
    height: 48px;
    margin-top: 6px;
    background: rgba(255, 255, 255, 0.03);
    border-radius: 4px;
    touch-action: none;
}

.chart-svg {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    display: block;
}

.chart-marker {
    fill: white;
    transition: r 0.15s;
}

.chart-marker:hover {
    r: var(--hover-r);
}

.chart-window {
    position: absolute;
    top: 0;
    bottom: 0;
    background: rgba(0, 210, 255, 0.12);
    border: 1px solid rgba(0, 210, 255, 0.6);
    border-radius: 3px;
    cursor: grab;
    touch-action: none;
}

.window-handle {
    position: absolute;
    top: 0;
    bottom: 0;
    width: 10px;
    cursor: ew-resize;
}

.window-handle.left { left: -5px; }
.window-handle.right { right: -5px; }
"#;

/// Root component: preset controls plus one card per configured chart.
#[component]
pub fn App(charts: ChartsHandle) -> impl IntoView {
    let listeners = attach_pointer_tracking(charts.clone());
    on_cleanup(move || listeners.detach());

    let current = charts.current_preset();
    let titles = charts.chart_titles();

    view! {
        <style>{STYLES}</style>
        <div class="perf-charts">
            <div class="preset-bar">
                {Preset::iter()
                    .map(|preset| {
                        let charts = charts.clone();
                        view! {
                            <button
                                class="preset-btn"
                                class:active=move || current.get() == preset
                                on:click=move |_| charts.select_preset(preset)
                            >
                                {preset.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {titles
                .into_iter()
                .map(|title| view! { <ChartCard charts=charts.clone() title=title /> })
                .collect_view()}
        </div>
    }
}

/// Window-level pointer listeners shared by all cards. Moves are coalesced to one
/// per animation frame; release flushes the last pending move first.
fn attach_pointer_tracking(charts: ChartsHandle) -> PointerListeners {
    let throttle = Rc::new(FrameThrottle::new());
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    let on_move = {
        let charts = charts.clone();
        let throttle = throttle.clone();
        let frame = frame.clone();
        move |pointer_x: f64| {
            if !throttle.push(pointer_x) {
                return;
            }
            let charts = charts.clone();
            let throttle = throttle.clone();
            let next = request_animation_frame(move |_| {
                if let Some(x) = throttle.take() {
                    charts.with(|o| o.pointer_move(x));
                }
            });
            *frame.borrow_mut() = Some(next);
        }
    };

    let on_release = move || {
        if let Some(x) = throttle.take() {
            charts.with(|o| o.pointer_move(x));
        }
        frame.borrow_mut().take();
        charts.with(|o| o.pointer_up());
    };

    PointerListeners::attach(on_move, on_release)
}

fn element_of(node: NodeRef<html::Div>) -> Option<web_sys::Element> {
    node.get_untracked().map(|div| {
        let div: &web_sys::HtmlDivElement = &div;
        div.clone().unchecked_into()
    })
}

/// One chart card: detail plot, its time axis, and the overview track with the
/// selection window.
#[component]
fn ChartCard(charts: ChartsHandle, title: String) -> impl IntoView {
    let surface = SignalSurface::new();
    let index = store_value(None::<usize>);
    let observer = store_value(None::<ContainerObserver>);
    let detail_ref = create_node_ref::<html::Div>();
    let track_ref = create_node_ref::<html::Div>();

    // Registration waits one frame so the card's elements are in the document.
    let mount_frame = {
        let charts = charts.clone();
        request_animation_frame(move |_| {
            let elements = element_of(track_ref).zip(element_of(detail_ref));
            let ready = elements.is_some().then_some(surface);
            let registered = charts.with(|o| o.register_chart(ready));
            let (Some(Some(chart_index)), Some((track, detail))) = (registered, elements) else {
                return;
            };
            index.set_value(Some(chart_index));
            charts.with(|o| o.on_container_resized(chart_index, measure(&track, &detail)));

            let on_resize = {
                let charts = charts.clone();
                let (track, detail) = (track.clone(), detail.clone());
                move || {
                    charts.with(|o| o.on_container_resized(chart_index, measure(&track, &detail)));
                }
            };
            match ContainerObserver::observe(&[&track, &detail], on_resize) {
                Ok(obs) => observer.set_value(Some(obs)),
                Err(err) => crate::log_error!(
                    LogComponent::Presentation("ChartCard"),
                    "ResizeObserver unavailable: {:?}",
                    err
                ),
            }
        })
    };
    on_cleanup(move || {
        drop(mount_frame);
        if let Some(Some(obs)) = observer.try_update_value(|o| o.take()) {
            obs.disconnect();
        }
    });

    let grab = move |grip: Grip| {
        let charts = charts.clone();
        move |event: PointerEvent| {
            if grip != Grip::Body {
                event.stop_propagation();
            }
            event.prevent_default();
            if let Some(chart_index) = index.get_value() {
                charts.with(|o| o.pointer_down(chart_index, grip, event.client_x() as f64));
            }
        }
    };

    view! {
        <div class="chart-card">
            <div class="chart-title">{title}</div>
            <div class="chart-detail" node_ref=detail_ref>
                {move || surface.detail.get().map(|scene| view! { <CurveSvg scene=scene /> })}
            </div>
            <div class="chart-axis">
                {move || surface.axis.with(|labels| labels.iter().map(axis_label).collect_view())}
            </div>
            <div class="chart-track" node_ref=track_ref>
                {move || surface.overview.get().map(|scene| view! { <CurveSvg scene=scene /> })}
                <div
                    class="chart-window"
                    style:left=move || format!("{}%", surface.window.get().0)
                    style:width=move || format!("{}%", surface.window.get().1)
                    on:pointerdown=grab(Grip::Body)
                >
                    <div class="window-handle left" on:pointerdown=grab(Grip::LeftHandle)></div>
                    <div class="window-handle right" on:pointerdown=grab(Grip::RightHandle)></div>
                </div>
            </div>
        </div>
    }
}

fn axis_label(axis: &AxisLabel) -> impl IntoView {
    let (main, suffix) = axis.label.split_suffix();
    let (main, suffix) = (main.to_string(), suffix.to_string());
    view! {
        <span
            class="axis-label"
            style:left=format!("{}%", axis.pct)
            style:transform=axis.anchor.translate_x()
        >
            {main}
            <small>{suffix}</small>
        </span>
    }
}

#[component]
fn CurveSvg(scene: ChartScene) -> impl IntoView {
    let ChartScene { geometry, style, gradient_id } = scene;
    let view_box = format!("0 0 {} {}", geometry.size.width, geometry.size.height);
    let fill = format!("url(#{})", gradient_id);
    let hover = format!("--hover-r: {}px", style.marker_hover_radius);
    let markers = geometry
        .markers
        .iter()
        .map(|m| {
            view! {
                <circle
                    class="chart-marker"
                    cx=m.x
                    cy=m.y
                    r=style.marker_radius
                    style=hover.clone()
                ></circle>
            }
        })
        .collect_view();

    view! {
        <svg class="chart-svg" viewBox=view_box preserveAspectRatio="none">
            <defs>
                <linearGradient id=gradient_id x1="0%" y1="0%" x2="0%" y2="100%">
                    <stop offset="0%" stop-color=style.color stop-opacity=style.top_opacity></stop>
                    <stop offset="100%" stop-color=style.color stop-opacity="0"></stop>
                </linearGradient>
            </defs>
            <path d=geometry.fill_d fill=fill stroke="none"></path>
            <path
                d=geometry.stroke_d
                fill="none"
                stroke=style.color
                stroke-width=style.stroke_width
                stroke-linecap="round"
                stroke-linejoin="round"
            ></path>
            {markers}
        </svg>
    }
}
