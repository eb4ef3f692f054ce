use crate::components::hero::cta_class;
use crate::components::icon::IconGlyph;
use crate::content::{self, Card, FleetCard, Icon, Panel, PriceList, PriceRow, Section, SectionBody};
use yew::prelude::*;

fn card(card: &Card) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <div class="card-icon"><IconGlyph icon={card.icon} large={true} /></div>
                <div class="card-title">{card.title}</div>
            </div>
            <div class="card-desc">{card.desc}</div>
        </div>
    }
}

fn fleet_card(fleet: &FleetCard) -> Html {
    html! {
        <div class="card">
            <div class="fleet-card-header">
                <div>
                    <div class="card-title">{fleet.name}</div>
                    <div class="card-desc">{fleet.desc}</div>
                </div>
                <div class="tag">{fleet.tag}</div>
            </div>
            <a href={content::REQUEST_ANCHOR} class="cta cta-outline cta-small">
                {"Request This Vehicle"}
            </a>
        </div>
    }
}

fn bullet(text: &'static str) -> Html {
    html! {
        <li class="bullet">
            <span class="bullet-mark"><IconGlyph icon={Icon::Check} /></span>
            <span>{text}</span>
        </li>
    }
}

fn price_row(row: &PriceRow) -> Html {
    html! {
        <div class="price-row">
            <div class="price-label">{row.label}</div>
            <div class="price-value">{row.value}</div>
        </div>
    }
}

fn price_list(prices: &PriceList, wide: bool) -> Html {
    html! {
        <>
            <div class={classes!("price-rows", wide.then(|| "price-rows-wide"))}>
                { for prices.rows.iter().map(price_row) }
            </div>
            <div class="fine-print">{prices.note}</div>
        </>
    }
}

fn panel(panel: &Panel) -> Html {
    html! {
        <div class="card">
            <div class="panel-heading">
                if let Some(icon) = panel.icon {
                    <IconGlyph icon={icon} large={true} />
                }
                {panel.heading}
            </div>
            if let Some(blurb) = panel.blurb {
                <div class="card-desc">{blurb}</div>
            }
            if !panel.bullets.is_empty() {
                <ul class="bullets">
                    { for panel.bullets.iter().copied().map(bullet) }
                </ul>
            }
            if let Some(prices) = &panel.prices {
                { price_list(prices, false) }
            }
            if let Some(cta) = panel.cta {
                <a href={cta.href} class={cta_class(&cta)}>{cta.label}</a>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    pub section: Section,
}

#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    let section = &props.section;

    let body = match &section.body {
        SectionBody::Cards(cards) => html! {
            <div class="grid-3">{ for cards.iter().map(card) }</div>
        },
        SectionBody::Fleet(fleet) => html! {
            <div class="grid-3">{ for fleet.iter().map(fleet_card) }</div>
        },
        SectionBody::Panels(panels) => html! {
            <div class="grid-2">{ for panels.iter().map(panel) }</div>
        },
        SectionBody::Pricing(prices) => html! {
            <div class="card">{ price_list(prices, true) }</div>
        },
    };

    html! {
        <section id={section.id} class="page-section">
            <div class="kicker">{section.kicker}</div>
            <h2>{section.title}</h2>
            <div class="section-body">{body}</div>
        </section>
    }
}

pub const SECTION_STYLES: &str = r#"
    .page-section {
        max-width: 72rem;
        margin: 0 auto;
        padding: 3.5rem 1rem;
    }
    .page-section h2 {
        margin: 0.5rem 0 0;
        font-size: 1.875rem;
        font-weight: 600;
    }
    .section-body { margin-top: 2rem; }
    .grid-3, .grid-2 { display: grid; gap: 1rem; }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .card {
        border: 1px solid #18181b;
        border-radius: 1.5rem;
        padding: 1.5rem;
        background: rgba(9, 9, 11, 0.4);
    }
    .card-header { display: flex; align-items: center; gap: 0.75rem; }
    .card-icon {
        border: 1px solid #27272a;
        border-radius: 1rem;
        padding: 0.5rem;
    }
    .card-title { font-weight: 600; }
    .card-desc { margin-top: 0.75rem; font-size: 0.875rem; color: #d4d4d8; }
    .fleet-card-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
    .fleet-card-header .card-desc { margin-top: 0.25rem; }
    .tag {
        border: 1px solid #27272a;
        border-radius: 999px;
        padding: 0.25rem 0.75rem;
        font-size: 0.75rem;
        color: #d4d4d8;
        white-space: nowrap;
    }
    .panel-heading { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; font-weight: 600; }
    .bullets { list-style: none; margin: 1rem 0 0; padding: 0; }
    .bullet { display: flex; gap: 0.75rem; margin-top: 0.75rem; font-size: 0.875rem; color: #d4d4d8; }
    .bullet-mark {
        border: 1px solid #27272a;
        border-radius: 999px;
        padding: 0.125rem;
        font-size: 0.65rem;
    }
    .price-rows { display: grid; gap: 0.75rem; margin-top: 1rem; }
    .price-rows-wide { grid-template-columns: repeat(3, 1fr); margin-top: 0; }
    .price-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        border: 1px solid #18181b;
        border-radius: 1rem;
        padding: 0.75rem 1rem;
        font-size: 0.875rem;
    }
    .price-label { font-weight: 600; }
    .price-value { color: #e4e4e7; }
    .fine-print { margin-top: 1rem; font-size: 0.75rem; color: #a1a1aa; }
    .card .cta { margin-top: 1.5rem; }
    @media (max-width: 768px) {
        .grid-3, .grid-2, .price-rows-wide { grid-template-columns: 1fr; }
    }
"#;
