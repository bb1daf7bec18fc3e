//! Metric dropdown shared by the map and rankings pages.

use dioxus::prelude::*;
use states_data::Metric;

#[derive(Props, Clone, PartialEq)]
pub struct MetricSelectorProps {
    pub value: Metric,
    pub on_change: EventHandler<Metric>,
    #[props(default = "Color by: ".to_string())]
    pub label: String,
}

/// Dropdown over the selectable metrics.
#[component]
pub fn MetricSelector(props: MetricSelectorProps) -> Element {
    let on_change = props.on_change;
    let on_select = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => on_change.call(metric),
        Err(e) => log::warn!("[States] {}", e),
    };

    rsx! {
        label {
            class: "metric-selector",
            style: "font-weight: bold;",
            "{props.label}"
            select {
                onchange: on_select,
                for metric in Metric::SELECTABLE {
                    option {
                        key: "{metric.key()}",
                        value: metric.key(),
                        selected: metric == props.value,
                        "{metric.label()}"
                    }
                }
            }
        }
    }
}
