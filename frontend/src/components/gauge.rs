use shared::gauge::{GaugeGeometry, GRADIENT_STOPS};
use yew::prelude::*;

const GRADIENT_ID: &str = "gauge-gradient";

#[derive(Properties, PartialEq)]
pub struct ConfidenceGaugeProps {
    pub percent: u8,
}

/// Circular confidence ring. The arc grows clockwise from 12 o'clock and
/// animates through a CSS transition on `stroke-dashoffset`.
#[function_component(ConfidenceGauge)]
pub fn confidence_gauge(props: &ConfidenceGaugeProps) -> Html {
    let g = GaugeGeometry::for_percent(props.percent);
    let radius = g.radius.to_string();
    let stroke_width = g.stroke.to_string();

    html! {
        <svg
            width={g.size.to_string()}
            height={g.size.to_string()}
            class="progress-ring"
            viewBox={g.view_box()}
        >
            <defs>
                <linearGradient id={GRADIENT_ID} x1="0" x2="1">
                    { for GRADIENT_STOPS.iter().map(|(offset, color)| html! {
                        <stop offset={*offset} stop-color={*color} />
                    }) }
                </linearGradient>
            </defs>
            <g transform={g.translate()}>
                <circle
                    r={radius.clone()}
                    cx="0"
                    cy="0"
                    stroke="rgba(255,255,255,0.12)"
                    stroke-width={stroke_width.clone()}
                    fill="none"
                />
                // a zero-length dash would still paint a round cap
                if g.percent > 0 {
                    <circle
                        class="progress-ring-arc"
                        r={radius}
                        cx="0"
                        cy="0"
                        stroke={format!("url(#{})", GRADIENT_ID)}
                        stroke-width={stroke_width}
                        fill="none"
                        stroke-linecap="round"
                        stroke-dasharray={g.circumference.to_string()}
                        stroke-dashoffset={g.dash_offset.to_string()}
                        transform={GaugeGeometry::ROTATION}
                        style="transition: stroke-dashoffset 0.6s ease-out;"
                    />
                }
            </g>
        </svg>
    }
}
