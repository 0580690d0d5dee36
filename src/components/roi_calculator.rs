use yew::prelude::*;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};

use crate::roi::{self, defaults, CalculationInput, Segment};

fn value_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(RoiCalculator)]
pub fn roi_calculator() -> Html {
    let segment = use_state(|| Segment::Rental);
    let fleet = use_state(String::new);
    let vehicle_value = use_state(String::new);
    let staff_rate = use_state(String::new);
    let monthly_revenue = use_state(String::new);
    let theft_rate = use_state(String::new);
    let staff_metric = use_state(|| Segment::Rental.profile().staff_default.to_string());
    let bonus_metric = use_state(|| Segment::Rental.profile().bonus_default.to_string());
    let show_assumptions = use_state(|| false);

    let profile = segment.profile();

    let on_segment_change = {
        let segment = segment.clone();
        let staff_metric = staff_metric.clone();
        let bonus_metric = bonus_metric.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let next = Segment::from_tag(&select.value());
            let next_profile = next.profile();
            // Switching segments resets both segment inputs to the new
            // profile's defaults, discarding whatever was typed before.
            staff_metric.set(next_profile.staff_default.to_string());
            bonus_metric.set(next_profile.bonus_default.to_string());
            segment.set(next);
        })
    };

    let toggle_assumptions = {
        let show_assumptions = show_assumptions.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_assumptions.set(!*show_assumptions);
        })
    };

    // A fresh snapshot on every render; empty or invalid fields fall back
    // to their defaults, explicit zeros stay zero.
    let input = CalculationInput {
        fleet: roi::resolve(&fleet, defaults::FLEET),
        vehicle_value: roi::resolve(&vehicle_value, defaults::VEHICLE_VALUE),
        staff_rate: roi::resolve(&staff_rate, defaults::STAFF_RATE),
        monthly_revenue: roi::resolve(&monthly_revenue, defaults::MONTHLY_REVENUE),
        theft_rate: roi::resolve(&theft_rate, defaults::THEFT_RATE),
        staff_metric: roi::resolve(&staff_metric, profile.staff_default),
        bonus_metric: roi::resolve(&bonus_metric, profile.bonus_default),
    };
    let result = roi::calculate(*segment, &input);

    html! {
        <div class="roi-calculator">
            <div class="roi-controls">
                <div class="input-group segment-select">
                    <label for="business-type">{"Your business"}</label>
                    <select id="business-type" onchange={on_segment_change}>
                        <option value="rental" selected={*segment == Segment::Rental}>{"Rental fleet"}</option>
                        <option value="gig" selected={*segment == Segment::Gig}>{"Gig & rideshare fleet"}</option>
                        <option value="corporate" selected={*segment == Segment::Corporate}>{"Corporate fleet"}</option>
                    </select>
                </div>

                <div class="input-grid">
                    <div class="input-group">
                        <label for="fleet-size">{"Vehicles in fleet"}</label>
                        <input
                            id="fleet-size"
                            type="number"
                            placeholder="50"
                            value={(*fleet).clone()}
                            oninput={value_setter(&fleet)}
                        />
                    </div>
                    <div class="input-group">
                        <label for="vehicle-value">{"Average vehicle value ($)"}</label>
                        <input
                            id="vehicle-value"
                            type="number"
                            placeholder="25000"
                            value={(*vehicle_value).clone()}
                            oninput={value_setter(&vehicle_value)}
                        />
                    </div>
                    <div class="input-group">
                        <label for="staff-rate">{"Staff hourly rate ($)"}</label>
                        <input
                            id="staff-rate"
                            type="number"
                            placeholder="20"
                            value={(*staff_rate).clone()}
                            oninput={value_setter(&staff_rate)}
                        />
                    </div>
                    {
                        // Corporate fleets don't bill revenue per vehicle, so
                        // the field disappears for that segment.
                        if profile.uses_revenue {
                            html! {
                                <div class="input-group">
                                    <label for="monthly-revenue">{"Monthly revenue per vehicle ($)"}</label>
                                    <input
                                        id="monthly-revenue"
                                        type="number"
                                        placeholder="1200"
                                        value={(*monthly_revenue).clone()}
                                        oninput={value_setter(&monthly_revenue)}
                                    />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <button class="assumptions-toggle" onclick={toggle_assumptions}>
                    { if *show_assumptions { "Hide assumptions −" } else { "Adjust assumptions +" } }
                </button>

                {
                    if *show_assumptions {
                        html! {
                            <div class="assumptions">
                                <div class="input-group">
                                    <label for="theft-rate">{"Annual theft / loss rate (%)"}</label>
                                    <input
                                        id="theft-rate"
                                        type="number"
                                        step="0.1"
                                        placeholder="1"
                                        value={(*theft_rate).clone()}
                                        oninput={value_setter(&theft_rate)}
                                    />
                                    <span class="input-hint">{"Industry average is around 1% of vehicles per year"}</span>
                                </div>
                                <div class="input-group">
                                    <label for="staff-metric">{profile.staff_label}</label>
                                    <input
                                        id="staff-metric"
                                        type="number"
                                        step="0.5"
                                        value={(*staff_metric).clone()}
                                        oninput={value_setter(&staff_metric)}
                                    />
                                    <span class="input-hint">{profile.staff_hint}</span>
                                </div>
                                <div class="input-group">
                                    <label for="bonus-metric">{profile.bonus_label}</label>
                                    <input
                                        id="bonus-metric"
                                        type="number"
                                        step="0.5"
                                        value={(*bonus_metric).clone()}
                                        oninput={value_setter(&bonus_metric)}
                                    />
                                    <span class="input-hint">{profile.bonus_hint}</span>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="roi-results">
                <h3>{"Your estimated annual savings"}</h3>
                <div class="result-row">
                    <span class="result-label">{"Asset Protection"}</span>
                    <span class="result-value">{roi::format_money(result.asset_savings)}</span>
                </div>
                <div class="result-row">
                    <span class="result-label">{profile.staff_result_label}</span>
                    <span class="result-value">{roi::format_money(result.staff_savings)}</span>
                </div>
                <div class="result-row">
                    <span class="result-label">{profile.bonus_result_label}</span>
                    <span class="result-value">{roi::format_money(result.bonus_savings)}</span>
                </div>
                <div class="result-row total">
                    <span class="result-label">{"Total Annual Benefit"}</span>
                    <span class="result-value">{roi::format_money(result.total)}</span>
                </div>
                <p class="results-note">
                    {"Estimates update as you type. Blank fields use typical values for your business type."}
                </p>
            </div>
        </div>
    }
}
