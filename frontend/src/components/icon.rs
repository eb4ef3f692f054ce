use crate::content::Icon;
use yew::prelude::*;

impl Icon {
    fn class(self) -> &'static str {
        match self {
            Icon::Shield => "shield-icon",
            Icon::Lock => "lock-icon",
            Icon::Plane => "plane-icon",
            Icon::Clock => "clock-icon",
            Icon::Car => "car-icon",
            Icon::Sparkles => "sparkles-icon",
            Icon::ChevronDown => "chevron-icon",
            Icon::Phone => "phone-icon",
            Icon::Mail => "mail-icon",
            Icon::MapPin => "pin-icon",
            Icon::Check => "check-icon",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub large: bool,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <i
            class={classes!("icon", props.icon.class(), props.large.then(|| "icon-lg"))}
            aria-hidden="true"
        ></i>
    }
}

pub const ICON_STYLES: &str = r#"
    .icon { display: inline-block; width: 1rem; height: 1rem; font-style: normal; line-height: 1rem; text-align: center; }
    .icon-lg { width: 1.25rem; height: 1.25rem; line-height: 1.25rem; font-size: 1.1rem; }
    .shield-icon::before { content: "⛨"; }
    .lock-icon::before { content: "🔒︎"; }
    .plane-icon::before { content: "✈"; }
    .clock-icon::before { content: "◷"; }
    .car-icon::before { content: "⛟"; }
    .sparkles-icon::before { content: "✦"; }
    .chevron-icon::before { content: "⌄"; }
    .phone-icon::before { content: "☏"; }
    .mail-icon::before { content: "✉"; }
    .pin-icon::before { content: "⌖"; }
    .check-icon::before { content: "✓"; }
"#;
