use yew::prelude::*;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent, SubmitEvent};
use gloo_timers::callback::Timeout;
use log::info;

const CLOSE_AFTER_SUBMIT_MS: u32 = 2_500;

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    // Shown as the title so the modal reflects what the visitor clicked.
    pub context: String,
    pub on_close: Callback<()>,
}

#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let fleet_size = use_state(String::new);
    let submitted = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicking the dark overlay closes the modal, clicking inside does not.
    let overlay_click = close.clone();
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let fleet_size = fleet_size.clone();
        let submitted = submitted.clone();
        let on_close = props.on_close.clone();
        let context = props.context.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!(
                "lead captured ({}): {} <{}>, fleet size {}",
                context, *name, *email, *fleet_size
            );
            submitted.set(true);
            let on_close = on_close.clone();
            Timeout::new(CLOSE_AFTER_SUBMIT_MS, move || on_close.emit(())).forget();
        })
    };

    let setter = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    html! {
        <div class="modal-overlay" onclick={overlay_click}>
            <div class="modal" onclick={keep_open}>
                <button class="modal-close" onclick={close}>{"×"}</button>
                <h3>{&props.context}</h3>
                {
                    if *submitted {
                        html! {
                            <div class="modal-thanks">
                                <p>{"Thanks! We'll be in touch within one business day."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="lead-form" onsubmit={on_submit}>
                                <div class="input-group">
                                    <label for="lead-name">{"Name"}</label>
                                    <input
                                        id="lead-name"
                                        type="text"
                                        required={true}
                                        value={(*name).clone()}
                                        oninput={setter(&name)}
                                    />
                                </div>
                                <div class="input-group">
                                    <label for="lead-email">{"Work email"}</label>
                                    <input
                                        id="lead-email"
                                        type="email"
                                        required={true}
                                        value={(*email).clone()}
                                        oninput={setter(&email)}
                                    />
                                </div>
                                <div class="input-group">
                                    <label for="lead-fleet">{"Fleet size"}</label>
                                    <input
                                        id="lead-fleet"
                                        type="number"
                                        placeholder="50"
                                        value={(*fleet_size).clone()}
                                        oninput={setter(&fleet_size)}
                                    />
                                </div>
                                <button type="submit" class="lead-submit">{"Send"}</button>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}
