use crate::components::icon::IconGlyph;
use crate::content::{self, Cta, CtaStyle, HeroContent, Icon};
use yew::prelude::*;

pub fn cta_class(cta: &Cta) -> &'static str {
    match cta.style {
        CtaStyle::Solid => "cta cta-solid",
        CtaStyle::Outline => "cta cta-outline",
    }
}

#[derive(Properties, PartialEq)]
struct MiniStatProps {
    icon: Icon,
    label: &'static str,
}

#[function_component(MiniStat)]
fn mini_stat(props: &MiniStatProps) -> Html {
    html! {
        <div class="mini-stat">
            <IconGlyph icon={props.icon} />
            <span>{props.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FleetRowProps {
    name: &'static str,
    note: &'static str,
}

#[function_component(FleetRow)]
fn fleet_row(props: &FleetRowProps) -> Html {
    html! {
        <div class="fleet-row">
            <div>
                <div class="fleet-row-name">{props.name}</div>
                <div class="fleet-row-note">{props.note}</div>
            </div>
            <a href={content::REQUEST_ANCHOR}>{"Request"}</a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = &props.hero;

    html! {
        <div class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                    }
                    .hero::before {
                        content: '';
                        position: absolute;
                        top: -6rem;
                        left: 50%;
                        width: 24rem;
                        height: 24rem;
                        transform: translateX(-50%);
                        border-radius: 50%;
                        background: rgba(39, 39, 42, 0.2);
                        filter: blur(64px);
                        pointer-events: none;
                    }
                    .hero-inner {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 5rem 1rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid #27272a;
                        border-radius: 999px;
                        padding: 0.5rem 1rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.05em;
                        color: #d4d4d8;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                        align-items: center;
                        margin-top: 1.5rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 600;
                        line-height: 1.15;
                        margin: 0;
                    }
                    .hero-subtitle {
                        margin-top: 1rem;
                        font-size: 1.125rem;
                        color: #d4d4d8;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .hero-note {
                        font-size: 0.75rem;
                        color: #a1a1aa;
                    }
                    .mini-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.75rem;
                        margin-top: 2.5rem;
                    }
                    .mini-stat {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid #18181b;
                        border-radius: 1rem;
                        padding: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #d4d4d8;
                    }
                    .fleet-panel {
                        border: 1px solid #18181b;
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                        background: linear-gradient(to bottom, #09090b, rgba(24, 24, 27, 0.4));
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .fleet-panel-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .fleet-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 0.75rem;
                        border: 1px solid #18181b;
                        border-radius: 1rem;
                        padding: 0.75rem 1rem;
                    }
                    .fleet-row-name { font-size: 0.875rem; font-weight: 600; }
                    .fleet-row-note { font-size: 0.75rem; color: #a1a1aa; }
                    .fleet-row a { font-size: 0.75rem; font-weight: 600; color: #e4e4e7; }
                    .fleet-panel-footer {
                        margin-top: 1.5rem;
                        border: 1px solid #27272a;
                        border-radius: 1rem;
                        padding: 1rem;
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }
                    @media (max-width: 768px) {
                        .hero-grid { grid-template-columns: 1fr; }
                        .hero h1 { font-size: 2.25rem; }
                    }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-badge">
                    <IconGlyph icon={Icon::Shield} />
                    <span>{hero.badge}</span>
                </div>

                <div class="hero-grid">
                    <div>
                        <h1>{hero.title[0]}<br/>{hero.title[1]}</h1>
                        <p class="hero-subtitle">{hero.subtitle[0]}<br/>{hero.subtitle[1]}</p>

                        <div class="hero-actions">
                            <a href={hero.primary.href} class={cta_class(&hero.primary)}>
                                {hero.primary.label}
                            </a>
                            if let Some(secondary) = hero.secondary {
                                <a href={secondary.href} class={cta_class(&secondary)}>
                                    {secondary.label}
                                </a>
                            }
                            <div class="hero-note">{content::HERO_NOTE}</div>
                        </div>

                        <div class="mini-stats">
                            { for content::MINI_STATS.iter().map(|(icon, label)| html! {
                                <MiniStat icon={*icon} label={*label} />
                            }) }
                        </div>
                    </div>

                    <div class="fleet-panel">
                        <div class="fleet-panel-header">
                            <div>
                                <div class="kicker">{"FLEET"}</div>
                                <div class="fleet-panel-title">{"Escalade • Suburban • EQS"}</div>
                            </div>
                            <IconGlyph icon={Icon::ChevronDown} large={true} />
                        </div>
                        { for content::HERO_FLEET.iter().map(|(name, note)| html! {
                            <FleetRow name={*name} note={*note} />
                        }) }
                        <div class="fleet-panel-footer">
                            <div>
                                <IconGlyph icon={Icon::Plane} />
                                <strong>{content::HERO_SERVICES}</strong>
                            </div>
                            <div>{crate::config::SERVICE_AREA}</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
