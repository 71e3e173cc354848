//! Bar Chart Component
//!
//! Renders a `ChartSeries` with ECharts via wasm-bindgen JS interop. Vertical
//! charts put categories on the x axis; horizontal ones list them top-down.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serpdash_core::ChartSeries;
use serpdash_core::format::format_count;
use wasm_bindgen::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// ECharts JS Interop
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::Element) -> JsValue;

    #[wasm_bindgen(js_namespace = echarts, js_name = getInstanceByDom)]
    fn echarts_get_instance(dom: &web_sys::Element) -> JsValue;
}

fn init_chart(element_id: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let element = document.get_element_by_id(element_id)?;

    let existing = echarts_get_instance(&element);
    if !existing.is_null() && !existing.is_undefined() {
        return Some(existing);
    }

    Some(echarts_init(&element))
}

fn call_method(chart: &JsValue, name: &str, arg: Option<&JsValue>) {
    let method = js_sys::Reflect::get(chart, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    if let Some(func) = method {
        let _ = match arg {
            Some(arg) => func.call1(chart, arg),
            None => func.call0(chart),
        };
    }
}

fn dispose_chart(element_id: &str) {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(element_id)
    {
        let instance = echarts_get_instance(&element);
        if !instance.is_null() && !instance.is_undefined() {
            call_method(&instance, "dispose", None);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chart Option
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BarOption<'a> {
    animation: bool,
    title: Title<'a>,
    tooltip: Tooltip,
    grid: Grid,
    x_axis: Axis<'a>,
    y_axis: Axis<'a>,
    series: [Series<'a>; 1],
}

#[derive(Serialize)]
struct Title<'a> {
    text: &'a str,
    left: &'static str,
}

#[derive(Serialize)]
struct Tooltip {
    trigger: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Grid {
    left: &'static str,
    right: &'static str,
    bottom: &'static str,
    contain_label: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Axis<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    axis_label: AxisLabel,
}

#[derive(Serialize)]
struct AxisLabel {
    rotate: i32,
    interval: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Series<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    bar_max_width: u32,
    data: Vec<Datum<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Datum<'a> {
    name: &'a str,
    value: u64,
    item_style: ItemStyle,
    label: DatumLabel,
}

#[derive(Serialize)]
struct ItemStyle {
    color: &'static str,
}

#[derive(Serialize)]
struct DatumLabel {
    show: bool,
    position: &'static str,
    formatter: String,
}

fn build_option<'a>(series: &'a ChartSeries, horizontal: bool) -> BarOption<'a> {
    let labels: Vec<&str> = series.bars.iter().map(|b| b.label.as_str()).collect();
    let data = series
        .bars
        .iter()
        .map(|bar| Datum {
            name: &bar.name,
            value: bar.value,
            item_style: ItemStyle { color: bar.color },
            label: DatumLabel {
                show: true,
                position: if horizontal { "right" } else { "top" },
                formatter: format_count(bar.value),
            },
        })
        .collect();

    let category_axis = Axis {
        kind: "category",
        data: Some(labels),
        inverse: horizontal.then_some(true),
        name: None,
        axis_label: AxisLabel {
            rotate: if horizontal { 0 } else { 35 },
            interval: 0,
        },
    };
    let value_axis = Axis {
        kind: "value",
        data: None,
        inverse: None,
        name: Some(series.metric.value_label()),
        axis_label: AxisLabel {
            rotate: 0,
            interval: 0,
        },
    };
    let (x_axis, y_axis) = if horizontal {
        (value_axis, category_axis)
    } else {
        (category_axis, value_axis)
    };

    BarOption {
        animation: false,
        title: Title {
            text: series.metric.title(),
            left: "center",
        },
        tooltip: Tooltip { trigger: "item" },
        grid: Grid {
            left: "3%",
            right: "8%",
            bottom: "3%",
            contain_label: true,
        },
        x_axis,
        y_axis,
        series: [Series {
            kind: "bar",
            bar_max_width: 48,
            data,
        }],
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

fn render_chart(id: &str, series: &ChartSeries, horizontal: bool) {
    let option = match serde_wasm_bindgen::to_value(&build_option(series, horizontal)) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(chart = id, error = %e, "Failed to build chart option");
            return;
        }
    };
    if let Some(chart) = init_chart(id) {
        call_method(&chart, "setOption", Some(&option));
        call_method(&chart, "resize", None);
    }
}

#[component]
pub fn BarChart(id: &'static str, series: ChartSeries, horizontal: bool) -> Element {
    use_drop(move || dispose_chart(id));

    // Draw after the container is mounted and laid out
    use_effect(use_reactive!(|series, horizontal| {
        spawn(async move {
            TimeoutFuture::new(50).await;
            render_chart(id, &series, horizontal);
        });
    }));

    rsx! {
        div { class: "chart-card",
            div { id: "{id}", class: "chart-container" }
        }
    }
}
