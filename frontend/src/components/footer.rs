use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-content">
                <div class="kicker">{"NOIRE"}</div>
                <div class="fine-print">
                    {format!("© {} NOIRE Private Chauffeur. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}
