use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: String,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    // One question open at a time; clicking it again closes it.
    let open_item = use_state(|| None::<usize>);
    let show_all = use_state(|| false);

    let on_toggle = {
        let open_item = open_item.clone();
        Callback::from(move |index: usize| {
            if *open_item == Some(index) {
                open_item.set(None);
            } else {
                open_item.set(Some(index));
            }
        })
    };

    let toggle_more = {
        let show_all = show_all.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_all.set(!*show_all);
        })
    };

    let item = |index: usize| (*open_item == Some(index), on_toggle.clone());

    let (open0, toggle0) = item(0);
    let (open1, toggle1) = item(1);
    let (open2, toggle2) = item(2);
    let (open3, toggle3) = item(3);
    let (open4, toggle4) = item(4);
    let (open5, toggle5) = item(5);
    let (open6, toggle6) = item(6);

    html! {
        <div class="faq-list">
            <FaqItem index={0} question="How long does installation take?" open={open0} on_toggle={toggle0}>
                <p>{"Around ten minutes per vehicle. The tracker plugs into the OBD-II port or wires to the battery, and it shows up in your dashboard as soon as it gets a GPS fix. Most fleets install during a normal service stop."}</p>
            </FaqItem>
            <FaqItem index={1} question="What happens if a tracker is unplugged?" open={open1} on_toggle={toggle1}>
                <p>{"You get an alert the moment the device loses power, with its last known position. Hard-wired units also carry a backup battery that keeps reporting for up to 48 hours."}</p>
            </FaqItem>
            <FaqItem index={2} question="Will this drain my vehicles' batteries?" open={open2} on_toggle={toggle2}>
                <p>{"No. The tracker draws less than a parked car's alarm system and drops into deep sleep when the vehicle sits unused. Vehicles parked for months stay startable."}</p>
            </FaqItem>
            <FaqItem index={3} question="Do my savings estimates include the subscription cost?" open={open3} on_toggle={toggle3}>
                <p>{"The calculator above shows gross savings from recovered vehicles, staff time and revenue. Pricing depends on fleet size, so request a demo and we'll put the two numbers side by side for your fleet."}</p>
            </FaqItem>
            {
                if *show_all {
                    html! {
                        <>
                            <FaqItem index={4} question="What about driver privacy?" open={open4} on_toggle={toggle4}>
                                <p>{"You control tracking schedules per vehicle. Many corporate fleets enable business-hours-only tracking, and drivers can see exactly what is recorded about their vehicle."}</p>
                            </FaqItem>
                            <FaqItem index={5} question="Can I get a discount on my fleet insurance?" open={open5} on_toggle={toggle5}>
                                <p>{"Most insurers offer reduced premiums for fleets with active GPS tracking and recovery support. We provide the certificate of installation your insurer will ask for."}</p>
                            </FaqItem>
                            <FaqItem index={6} question="Is there a minimum contract?" open={open6} on_toggle={toggle6}>
                                <p>{"Plans are monthly and scale with the number of active vehicles. Pause tracking on vehicles you sell or park for the season and you stop paying for them."}</p>
                            </FaqItem>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <button class="faq-toggle-btn" onclick={toggle_more}>
                { if *show_all { "Show Fewer Questions" } else { "Show More Questions" } }
            </button>
        </div>
    }
}
