use compute::CategorySlice;
use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js(value: &serde_json::Value) -> Option<JsValue> {
    let raw = serde_json::to_string(value).ok()?;
    match js_sys::JSON::parse(&raw) {
        Ok(js) => Some(js),
        Err(e) => {
            log::error!("Failed to convert chart options: {:?}", e);
            None
        }
    }
}

fn pie_trace(slices: &[CategorySlice]) -> serde_json::Value {
    let labels: Vec<&str> = slices.iter().map(|s| s.category.as_str()).collect();
    let values: Vec<f64> = slices.iter().map(|s| s.total.to_f64().unwrap_or(0.0)).collect();
    let colors: Vec<&str> = slices.iter().map(|s| s.color).collect();

    serde_json::json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "marker": {"colors": colors},
        "sort": false,
        "direction": "clockwise",
        "textinfo": "percent",
        "hovertemplate": "%{label}: $%{value:.2f}<extra></extra>"
    }])
}

#[derive(Properties, PartialEq)]
pub struct SpendingChartProps {
    pub slices: Vec<CategorySlice>,
}

/// Spending by category as a pie, one slice per breakdown entry.
#[function_component(SpendingChart)]
pub fn spending_chart(props: &SpendingChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.slices.clone()), move |(chart_ref, slices)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            log::trace!("Plotting {} category slices", slices.len());

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "showlegend": true,
                "legend": {"orientation": "v", "x": 1.02, "xanchor": "left", "y": 0.5, "yanchor": "middle"}
            });
            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            if let (Some(data), Some(layout), Some(config)) =
                (to_js(&pie_trace(slices)), to_js(&layout), to_js(&config))
            {
                newPlot(&div_id, data, layout, config);
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-spending" class="chart-container" style="height: 300px;"></div>
    }
}
