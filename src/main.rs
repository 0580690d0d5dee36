use yew::prelude::*;
use log::{info, warn, Level};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

mod roi;
mod components {
    pub mod faq;
    pub mod lead_modal;
    pub mod roi_calculator;
}
mod pages {
    pub mod landing;
}

use components::lead_modal::LeadModal;
use pages::landing::Landing;

// Smooth-scrolls to an anchor; a missing target is logged and skipped so
// one broken link never breaks the rest of the page.
pub fn scroll_to_section(id: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("scroll target '{}' not found", id),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_request_demo: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let request_demo = {
        let on_request_demo = props.on_request_demo.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_request_demo.emit("Request Demo".to_string());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={nav_link("top")}>
                    {"fleetsight"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={nav_link("features")}>
                        {"Features"}
                    </a>
                    <a href="#roi-calculator" class="nav-link" onclick={nav_link("roi-calculator")}>
                        {"ROI Calculator"}
                    </a>
                    <a href="#faq" class="nav-link" onclick={nav_link("faq")}>
                        {"FAQ"}
                    </a>
                    <button class="nav-cta" onclick={request_demo}>
                        {"Request Demo"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let modal_context = use_state(|| None::<String>);

    let open_modal = {
        let modal_context = modal_context.clone();
        Callback::from(move |context: String| {
            modal_context.set(Some(context));
        })
    };

    let close_modal = {
        let modal_context = modal_context.clone();
        Callback::from(move |_| {
            modal_context.set(None);
        })
    };

    html! {
        <>
            <Nav on_request_demo={open_modal.clone()} />
            <Landing on_request_demo={open_modal} />
            {
                if let Some(context) = (*modal_context).clone() {
                    html! { <LeadModal context={context} on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
