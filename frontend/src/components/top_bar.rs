use crate::config;
use crate::view::View;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavPillProps {
    pub label: &'static str,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(NavPill)]
pub fn nav_pill(props: &NavPillProps) -> Html {
    html! {
        <button
            class={classes!("nav-pill", props.active.then(|| "active"))}
            onclick={props.onclick.clone()}
        >
            {props.label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    pub active: View,
    pub on_select: Callback<View>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let TopBarProps { active, on_select } = props;

    let select = |view: View| {
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(view);
        })
    };

    html! {
        <nav class="top-bar">
            <div class="top-bar-content">
                <button class="brand" onclick={select(View::Home)} aria-label="Go to home">
                    <div class="brand-mark"></div>
                    <div class="brand-text">
                        <div class="brand-name">{"NOIRE"}</div>
                        <div class="brand-tagline">{"Private Chauffeur"}</div>
                    </div>
                </button>

                <div class="nav-right">
                    {
                        for View::ALL.into_iter().map(|view| html! {
                            <NavPill
                                label={view.nav_label()}
                                active={*active == view}
                                onclick={select(view)}
                            />
                        })
                    }
                    <a href={format!("tel:{}", config::CONTACT_PHONE_DIAL)} class="nav-call">
                        {"Call Private Chauffeur"}
                    </a>
                </div>

                <div class="nav-compact">
                    <button class="nav-toggle" onclick={select(active.toggled())}>
                        {active.toggled().nav_label()}
                    </button>
                </div>
            </div>
        </nav>
    }
}
