use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::faq::FaqSection;
use crate::components::roi_calculator::RoiCalculator;
use crate::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_request_demo: Callback<String>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_demo = {
        let on_request_demo = props.on_request_demo.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_request_demo.emit("Request Demo".to_string());
        })
    };

    let open_trial = {
        let on_request_demo = props.on_request_demo.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_request_demo.emit("Start Free Trial".to_string());
        })
    };

    let see_savings = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("roi-calculator");
    });

    html! {
        <div class="landing-page" id="top">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Know where every vehicle is. Always."}</h1>
                    <p class="hero-subtitle">
                        {"GPS tracking built for rental, gig and corporate fleets. Stop theft before the vehicle leaves town, cut hours of paperwork and put idle vehicles back to work."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_demo.clone()}>{"Request Demo"}</button>
                        <a href="#roi-calculator" class="hero-secondary" onclick={see_savings}>
                            {"See what you'd save ↓"}
                        </a>
                    </div>
                </div>
            </header>

            <section class="features-section" id="features">
                <div class="feature-block">
                    <div class="feature-content">
                        <h2>{"Recover stolen vehicles in hours, not weeks"}</h2>
                        <p>{"Live positions every 30 seconds, geofence alerts the moment a vehicle leaves its zone, and a recovery team that works directly with police."}</p>
                        <ul class="feature-list">
                            <li>{"Instant SMS alerts on after-hours movement"}</li>
                            <li>{"Tamper and unplug notifications with last known position"}</li>
                            <li>{"Most tracked vehicles are recovered the same day"}</li>
                        </ul>
                    </div>
                </div>

                <div class="feature-block reverse">
                    <div class="feature-content">
                        <h2>{"Paperwork that fills itself in"}</h2>
                        <p>{"Odometer readings, trip logs and handover checks flow straight into your dashboard, so your staff spend their time with customers instead of clipboards."}</p>
                        <ul class="feature-list">
                            <li>{"Automatic mileage and trip reports per vehicle"}</li>
                            <li>{"Faster key handovers for rental counters"}</li>
                            <li>{"Verified trip data settles driver disputes in minutes"}</li>
                        </ul>
                    </div>
                </div>

                <div class="feature-block">
                    <div class="feature-content">
                        <h2>{"Put idle vehicles back to work"}</h2>
                        <p>{"Utilization reports show which vehicles earn and which sit. Fleets routinely find they can grow revenue without buying a single new vehicle."}</p>
                        <ul class="feature-list">
                            <li>{"Per-vehicle utilization and revenue views"}</li>
                            <li>{"Spot under-used vehicles before renewal season"}</li>
                            <li>{"Right-size corporate fleets with real usage data"}</li>
                        </ul>
                    </div>
                </div>
            </section>

            <section class="roi-section" id="roi-calculator">
                <div class="section-header">
                    <h2>{"What could fleetsight save you?"}</h2>
                    <p>{"Pick your business type and adjust the numbers. Results update as you type."}</p>
                </div>
                <RoiCalculator />
            </section>

            <section class="faq-section" id="faq">
                <div class="section-header">
                    <h2>{"Frequently Asked Questions"}</h2>
                </div>
                <FaqSection />
            </section>

            <section class="closing-cta">
                <h2>{"Ready to see your fleet on one map?"}</h2>
                <p>{"Free 30-day pilot on up to five vehicles. No installation fees."}</p>
                <button class="hero-cta" onclick={open_trial}>{"Start Free Trial"}</button>
            </section>

            <footer class="footer">
                <span class="footer-logo">{"fleetsight"}</span>
                <span class="footer-note">{"GPS tracking for fleets that can't afford to lose a vehicle."}</span>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0c1c33;
                    color: #ffffff;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    background: rgba(12, 28, 51, 0.95);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    z-index: 10;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                    letter-spacing: 0.02em;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #b9c6d8;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-cta {
                    background: #1E90FF;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.6rem 1.2rem;
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .nav-cta:hover {
                    background: #4ba5ff;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }

                .hero {
                    padding: 10rem 2rem 6rem;
                    text-align: center;
                    background: linear-gradient(180deg, #0c1c33 0%, #102542 100%);
                }

                .hero-content {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    color: #b9c6d8;
                    font-size: 1.15rem;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }

                .hero-cta {
                    background: #1E90FF;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 1rem 2rem;
                    font-size: 1.05rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero-cta:hover {
                    background: #4ba5ff;
                }

                .hero-secondary {
                    color: #7EB2FF;
                    text-decoration: none;
                    font-size: 1rem;
                }

                .hero-secondary:hover {
                    text-decoration: underline;
                }

                .features-section {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .feature-block {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 3rem;
                    margin-bottom: 2.5rem;
                    transition: border-color 0.3s ease;
                }

                .feature-block:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .feature-content h2 {
                    font-size: 1.8rem;
                    margin-bottom: 1rem;
                }

                .feature-content p {
                    color: #b9c6d8;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .feature-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .feature-list li {
                    color: #b9c6d8;
                    padding: 0.4rem 0 0.4rem 1.5rem;
                    position: relative;
                }

                .feature-list li::before {
                    content: '✓';
                    color: #1E90FF;
                    position: absolute;
                    left: 0;
                }

                .section-header {
                    text-align: center;
                    max-width: 700px;
                    margin: 0 auto 3rem;
                }

                .section-header h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.75rem;
                }

                .section-header p {
                    color: #b9c6d8;
                }

                .roi-section {
                    padding: 4rem 2rem;
                    background: rgba(255, 255, 255, 0.02);
                }

                .roi-calculator {
                    max-width: 1000px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2.5rem;
                    align-items: start;
                }

                .roi-controls {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 2rem;
                }

                .input-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                    margin-top: 1.25rem;
                }

                .input-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .input-group label {
                    color: #7EB2FF;
                    font-size: 0.9rem;
                }

                .input-group input,
                .input-group select {
                    padding: 0.7rem;
                    background: rgba(12, 28, 51, 0.6);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    color: #fff;
                    border-radius: 6px;
                    font-size: 1rem;
                }

                .input-group input:focus,
                .input-group select:focus {
                    outline: none;
                    border-color: rgba(30, 144, 255, 0.8);
                }

                .input-hint {
                    color: #7a8aa0;
                    font-size: 0.8rem;
                    line-height: 1.4;
                }

                .assumptions-toggle {
                    margin-top: 1.5rem;
                    background: none;
                    border: none;
                    color: #7EB2FF;
                    font-size: 0.95rem;
                    cursor: pointer;
                    padding: 0;
                }

                .assumptions-toggle:hover {
                    text-decoration: underline;
                }

                .assumptions {
                    margin-top: 1.25rem;
                    padding-top: 1.25rem;
                    border-top: 1px solid rgba(30, 144, 255, 0.15);
                    display: grid;
                    gap: 1.25rem;
                }

                .roi-results {
                    background: rgba(30, 144, 255, 0.08);
                    border: 1px solid rgba(30, 144, 255, 0.25);
                    border-radius: 12px;
                    padding: 2rem;
                    position: sticky;
                    top: 90px;
                }

                .roi-results h3 {
                    margin: 0 0 1.5rem;
                    font-size: 1.2rem;
                }

                .result-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: baseline;
                    padding: 0.6rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .result-row.total {
                    border-bottom: none;
                    margin-top: 0.5rem;
                    padding-top: 1rem;
                    border-top: 2px solid rgba(30, 144, 255, 0.4);
                }

                .result-label {
                    color: #b9c6d8;
                    font-size: 0.95rem;
                }

                .result-row.total .result-label {
                    color: #fff;
                    font-weight: 600;
                }

                .result-value {
                    font-size: 1.15rem;
                    font-weight: 600;
                }

                .result-row.total .result-value {
                    font-size: 1.6rem;
                    color: #7EB2FF;
                }

                .results-note {
                    margin: 1.25rem 0 0;
                    color: #7a8aa0;
                    font-size: 0.8rem;
                    line-height: 1.5;
                }

                .faq-section {
                    padding: 4rem 2rem;
                }

                .faq-list {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .faq-item {
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 8px;
                    margin-bottom: 0.75rem;
                    background: rgba(255, 255, 255, 0.02);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    text-align: left;
                    padding: 1.1rem 1.25rem;
                    cursor: pointer;
                }

                .toggle-icon {
                    color: #7EB2FF;
                    font-size: 1.2rem;
                }

                .faq-answer {
                    display: none;
                    padding: 0 1.25rem 1.1rem;
                    color: #b9c6d8;
                    line-height: 1.6;
                }

                .faq-item.open .faq-answer {
                    display: block;
                }

                .faq-toggle-btn {
                    display: block;
                    margin: 1.5rem auto 0;
                    background: none;
                    border: 1px solid rgba(30, 144, 255, 0.4);
                    color: #7EB2FF;
                    border-radius: 6px;
                    padding: 0.7rem 1.5rem;
                    font-size: 0.95rem;
                    cursor: pointer;
                }

                .faq-toggle-btn:hover {
                    border-color: rgba(30, 144, 255, 0.8);
                }

                .closing-cta {
                    text-align: center;
                    padding: 5rem 2rem;
                    background: rgba(30, 144, 255, 0.06);
                }

                .closing-cta h2 {
                    font-size: 2rem;
                    margin-bottom: 0.75rem;
                }

                .closing-cta p {
                    color: #b9c6d8;
                    margin-bottom: 2rem;
                }

                .footer {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 3rem 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                }

                .footer-logo {
                    font-weight: 700;
                }

                .footer-note {
                    color: #7a8aa0;
                    font-size: 0.85rem;
                }

                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 20;
                }

                .modal {
                    position: relative;
                    background: #102542;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 12px;
                    padding: 2.5rem;
                    width: min(420px, calc(100vw - 2rem));
                }

                .modal h3 {
                    margin: 0 0 1.5rem;
                    font-size: 1.4rem;
                }

                .modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #b9c6d8;
                    font-size: 1.6rem;
                    cursor: pointer;
                }

                .modal-close:hover {
                    color: #fff;
                }

                .lead-form {
                    display: grid;
                    gap: 1.25rem;
                }

                .lead-submit {
                    background: #1E90FF;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.9rem;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .lead-submit:hover {
                    background: #4ba5ff;
                }

                .modal-thanks p {
                    color: #b9c6d8;
                    line-height: 1.6;
                }

                @media (max-width: 860px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 60px;
                        left: 0;
                        width: 100%;
                        background-color: #0c1c33;
                        padding: 2rem;
                    }

                    .hero h1 {
                        font-size: 2.2rem;
                    }

                    .roi-calculator {
                        grid-template-columns: 1fr;
                    }

                    .roi-results {
                        position: static;
                    }

                    .input-grid {
                        grid-template-columns: 1fr;
                    }

                    .feature-block {
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
