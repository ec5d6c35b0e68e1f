use super::super::Model;
use super::gauge::ConfidenceGauge;
use shared::gauge::percent_from_confidence;
use shared::{Candidate, LesionDetails, PredictionResult};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let result = model.session.result();
    let percent = result.map(|r| percent_from_confidence(r.confidence));

    html! {
        <section class={classes!("panel", "result-panel", model.session.status().to_string())}>
            <h2>{"Detection Results"}</h2>

            <div class="result-content">
                <div class="result-left">
                    {
                        if let Some(url) = model.session.preview() {
                            html! {
                                <div class="result-image-wrap">
                                    <img src={url.to_string()} alt="uploaded" class="result-image" />
                                </div>
                            }
                        } else {
                            html! { <div class="placeholder">{"No image uploaded"}</div> }
                        }
                    }
                </div>

                <div class="result-right">
                    <div class="card">
                        <div class="card-row">
                            <div>
                                <div class="label">{"Primary Detection"}</div>
                                <div class="value">{ result.map_or("—", |r| r.label.as_str()) }</div>
                            </div>

                            <div class="confidence-wrap">
                                <ConfidenceGauge percent={percent.unwrap_or(0)} />
                                <div class="confidence-text">
                                    { percent.map_or_else(|| "N/A".to_string(), |p| format!("{}%", p)) }
                                </div>
                            </div>
                        </div>

                        <div class="card-row small">
                            <div>
                                <div class="label">{"Additional Objects"}</div>
                                <div class="value">{ render_extras(result) }</div>
                            </div>

                            <div>
                                <div class="label">{"Timestamp"}</div>
                                <div class="value">{ model.completed_at.as_deref().unwrap_or("—") }</div>
                            </div>
                        </div>

                        { result.map(render_candidates).unwrap_or_default() }
                        { result.map(render_details).unwrap_or_default() }

                        <div class="explain">
                            <strong>{"Tip:"}</strong>
                            {" If results look wrong, try a closer crop of the lesion with good lighting."}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_extras(result: Option<&PredictionResult>) -> String {
    match result {
        Some(r) if !r.extras.is_empty() => r.extras.join(", "),
        _ => "None".to_string(),
    }
}

fn render_candidates(result: &PredictionResult) -> Html {
    if result.candidates.is_empty() {
        return html! {};
    }

    html! {
        <div class="card-row small candidates">
            <div>
                <div class="label">{"Top Predictions"}</div>
                <ul class="candidate-list">
                    { for result.candidates.iter().map(render_candidate) }
                </ul>
            </div>
        </div>
    }
}

fn render_candidate(candidate: &Candidate) -> Html {
    html! {
        <li class="candidate">
            <span class="candidate-class">{ &candidate.class }</span>
            <span class="candidate-value">{ format!("{}%", candidate.percent()) }</span>
        </li>
    }
}

fn render_details(result: &PredictionResult) -> Html {
    let Some(details) = &result.details else {
        return html! {};
    };
    let risk = result.risk();

    html! {
        <div class="details">
            <div class="card-row small">
                <div>
                    <div class="label">{"Condition"}</div>
                    <div class="value">{ details.full_name.as_deref().unwrap_or(&result.label) }</div>
                </div>
                <div>
                    <div class="label">{"Risk Level"}</div>
                    <span class={classes!("risk-tag", format!("risk-{}", risk))}>
                        { details.risk_level.as_deref().unwrap_or(risk.label()) }
                    </span>
                </div>
            </div>
            { render_symptoms(details) }
            if let Some(recommendation) = &details.recommendation {
                <div class="recommendation">
                    <strong>{"Recommendation:"}</strong>{" "}{ recommendation }
                </div>
            }
            if let Some(warning) = &details.warning {
                <div class="warning">{ warning }</div>
            }
        </div>
    }
}

fn render_symptoms(details: &LesionDetails) -> Html {
    if details.symptoms.is_empty() {
        return html! {};
    }

    html! {
        <div class="symptoms">
            <div class="label">{"Common Symptoms"}</div>
            <ul>
                { for details.symptoms.iter().map(|s| html! { <li>{ s }</li> }) }
            </ul>
        </div>
    }
}
