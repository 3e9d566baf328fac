use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_order_tracker;
use crate::models::order_stage::OrderStage;

#[derive(Properties, PartialEq)]
pub struct LiveOrderTrackerProps {
    #[prop_or(CONFIG.tracker.tick_interval_ms)]
    pub tick_interval_ms: u32,
}

#[function_component(LiveOrderTracker)]
pub fn live_order_tracker(props: &LiveOrderTrackerProps) -> Html {
    let state = use_order_tracker(props.tick_interval_ms);
    let progress = format!("width: {:.0}%", state.progress_percentage());

    html! {
        <div class="card order-tracker">
            <div class="card-header">
                <h2 class="card-title">{"Track Your Order"}</h2>
            </div>
            <div class="card-content">
                <div class="map-placeholder">
                    <span class="map-pin">{"📍"}</span>
                    <p class="map-unavailable">{"Live map view is currently unavailable"}</p>
                    <div class="eta">
                        <p class="eta-label">{"Estimated Delivery"}</p>
                        <p class="eta-value">{&CONFIG.tracker.eta_label}</p>
                    </div>
                </div>

                <div class="stepper">
                    <div class="stepper-labels">
                        { for OrderStage::ALL.iter().map(|stage| html! {
                            <p key={stage.label()} class={state.step_status(*stage).to_class()}>{stage.label()}</p>
                        })}
                    </div>
                    <div class="stepper-track">
                        <div
                            class="progress"
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-valuenow={format!("{:.0}", state.progress_percentage())}
                        >
                            <div class="progress-indicator" style={progress}></div>
                        </div>
                        <div class="stepper-icons">
                            { for OrderStage::ALL.iter().map(|stage| html! {
                                <div key={stage.index()} class={classes!("step-icon", state.step_status(*stage).to_class())}>
                                    {stage.icon()}
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
