use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod form;
mod request;
mod submit;
mod validation;
mod view;
mod components {
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod page_body;
    pub mod request_section;
    pub mod section;
    pub mod top_bar;
}
mod pages;

use components::{footer::Footer, top_bar::TopBar};
use pages::{airport::Airport, home::Home};
use submit::SubmissionHandler;
use view::View;

const APP_STYLES: &str = r#"
    body {
        margin: 0;
        background: #09090b;
        color: #fafafa;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    a { color: inherit; }
    .top-bar {
        position: sticky;
        top: 0;
        z-index: 50;
        border-bottom: 1px solid rgba(24, 24, 27, 0.7);
        background: rgba(9, 9, 11, 0.7);
        backdrop-filter: blur(10px);
    }
    .top-bar-content {
        display: flex;
        justify-content: space-between;
        align-items: center;
        max-width: 72rem;
        margin: 0 auto;
        padding: 0.75rem 1rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: none;
        border: none;
        color: inherit;
        cursor: pointer;
        text-align: left;
    }
    .brand-mark {
        width: 2.25rem;
        height: 2.25rem;
        border: 1px solid #27272a;
        border-radius: 1rem;
    }
    .brand-name { font-size: 0.875rem; font-weight: 600; letter-spacing: 0.25em; }
    .brand-tagline { font-size: 11px; color: #a1a1aa; }
    .nav-right { display: flex; align-items: center; gap: 0.5rem; }
    .nav-pill, .nav-toggle {
        border: 1px solid transparent;
        border-radius: 1rem;
        padding: 0.5rem 1rem;
        background: none;
        color: #d4d4d8;
        font-size: 0.875rem;
        cursor: pointer;
        transition: background 0.2s;
    }
    .nav-pill:hover { background: rgba(24, 24, 27, 0.6); color: #fafafa; }
    .nav-pill.active { background: #18181b; border-color: #27272a; color: #fafafa; }
    .nav-toggle { border-color: #27272a; }
    .nav-compact { display: none; }
    .kicker { font-size: 0.75rem; letter-spacing: 0.35em; color: #71717a; }
    .cta {
        display: inline-flex;
        border-radius: 1rem;
        padding: 0.75rem 1.25rem;
        font-size: 0.875rem;
        font-weight: 600;
        text-decoration: none;
    }
    .cta-solid, .nav-call { background: #fafafa; color: #09090b; }
    .cta-solid:hover, .nav-call:hover { background: #e4e4e7; }
    .cta-outline { border: 1px solid #27272a; background: #09090b; color: #fafafa; }
    .cta-outline:hover { background: #18181b; }
    .cta-small { padding: 0.5rem 1rem; }
    .nav-call {
        margin-left: 0.5rem;
        border-radius: 1rem;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 600;
        text-decoration: none;
    }
    .view-swap { animation: viewSwap 0.25s ease-out; }
    @keyframes viewSwap {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .site-footer { border-top: 1px solid rgba(24, 24, 27, 0.7); }
    .site-footer-content {
        display: flex;
        justify-content: space-between;
        align-items: center;
        max-width: 72rem;
        margin: 0 auto;
        padding: 2.5rem 1rem;
    }
    @media (max-width: 768px) {
        .nav-right { display: none; }
        .nav-compact { display: block; }
        .site-footer-content { flex-direction: column; align-items: flex-start; gap: 0.75rem; }
    }
"#;

#[function_component]
fn App() -> Html {
    use_title(config::DOCUMENT_TITLE.to_string());
    let active = use_state(View::default);
    let handler = use_state(SubmissionHandler::from_config);

    let on_select = {
        let active = active.clone();
        Callback::from(move |view: View| {
            if let Some(view) = active.select(view) {
                info!("Switching to {} view", view.key());
                active.set(view);
            }
        })
    };

    let content = match *active {
        View::Home => html! { <Home handler={(*handler).clone()} /> },
        View::Airport => html! { <Airport handler={(*handler).clone()} /> },
    };

    html! {
        <div class="app">
            <style>{APP_STYLES}</style>
            <TopBar active={*active} {on_select} />
            // Keyed so a view change remounts the whole region, footer included.
            <div key={active.key()} class="view-swap">
                {content}
                <Footer />
            </div>
        </div>
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
