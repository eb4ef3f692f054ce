//! Copy for both views, kept as plain data so the components stay generic.

use crate::view::View;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Lock,
    Plane,
    Clock,
    Car,
    Sparkles,
    ChevronDown,
    Phone,
    Mail,
    MapPin,
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaStyle {
    Solid,
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cta {
    pub label: &'static str,
    pub href: &'static str,
    pub style: CtaStyle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub badge: &'static str,
    pub title: [&'static str; 2],
    pub subtitle: [&'static str; 2],
    pub primary: Cta,
    pub secondary: Option<Cta>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetCard {
    pub name: &'static str,
    pub tag: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRow {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceList {
    pub rows: Vec<PriceRow>,
    pub note: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub icon: Option<Icon>,
    pub heading: &'static str,
    pub blurb: Option<&'static str>,
    pub bullets: Vec<&'static str>,
    pub prices: Option<PriceList>,
    pub cta: Option<Cta>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody {
    Cards(Vec<Card>),
    Fleet(Vec<FleetCard>),
    Panels(Vec<Panel>),
    Pricing(PriceList),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: Option<&'static str>,
    pub kicker: &'static str,
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub hero: HeroContent,
    pub sections: Vec<Section>,
    pub request_heading: &'static str,
}

pub const REQUEST_ANCHOR: &str = "#request";

pub const MINI_STATS: [(Icon, &str); 3] = [
    (Icon::Lock, "NDA-ready"),
    (Icon::Sparkles, "White-glove"),
    (Icon::Car, "Unbranded"),
];

/// Rows of the fleet panel beside every hero.
pub const HERO_FLEET: [(&str, &str); 3] = [
    ("Cadillac Escalade", "Celebrity & high-profile clients"),
    ("Chevrolet Suburban", "Executive & airport elite"),
    ("Mercedes EQS", "Silent electric luxury"),
];

pub const HERO_SERVICES: &str = "Airport • Hourly • Monthly";
pub const HERO_NOTE: &str = "All requests are personally reviewed.";

fn request_cta(label: &'static str, style: CtaStyle) -> Cta {
    Cta { label, href: REQUEST_ANCHOR, style }
}

fn airport_prices() -> PriceList {
    PriceList {
        rows: vec![
            PriceRow { label: "Mercedes EQS", value: "$240–$280" },
            PriceRow { label: "Chevrolet Suburban", value: "$300–$360" },
            PriceRow { label: "Cadillac Escalade", value: "$360–$420" },
        ],
        note: "Ultra-luxury service. Fixed pricing. No negotiations.",
    }
}

fn home() -> PageContent {
    PageContent {
        hero: HeroContent {
            badge: "PRIVATE CHAUFFEUR • BY REQUEST ONLY",
            title: ["Private Chauffeur.", "Ultra Luxury. Absolute Discretion."],
            subtitle: [
                "A private chauffeur service for executives, celebrities, and private clients.",
                "Escalade • Suburban • Mercedes EQS — Los Angeles • Beverly Hills • LAX.",
            ],
            primary: request_cta("Request Private Chauffeur", CtaStyle::Solid),
            secondary: Some(Cta { label: "LAX Service", href: "#airport", style: CtaStyle::Outline }),
        },
        sections: vec![
            Section {
                id: None,
                kicker: "WHY",
                title: "NOIRE Standards",
                body: SectionBody::Cards(vec![
                    Card {
                        icon: Icon::Lock,
                        title: "Absolute Discretion",
                        desc: "Unbranded vehicles and NDA-ready service for high-profile clients.",
                    },
                    Card {
                        icon: Icon::Shield,
                        title: "One Client • One Chauffeur",
                        desc: "Dedicated, consistent experience — calm, professional, and private.",
                    },
                    Card {
                        icon: Icon::Sparkles,
                        title: "White-Glove Service",
                        desc: "Terminal coordination, luggage assistance, and uncompromising standards.",
                    },
                ]),
            },
            Section {
                id: None,
                kicker: "FLEET",
                title: "Escalade • Suburban • EQS",
                body: SectionBody::Fleet(vec![
                    FleetCard { name: "Cadillac Escalade", tag: "Celebrity", desc: "For high-profile clients and premium events." },
                    FleetCard { name: "Chevrolet Suburban", tag: "Executive", desc: "Corporate transport and airport elite." },
                    FleetCard { name: "Mercedes EQS", tag: "Silent", desc: "Silent electric luxury with a quiet presence." },
                ]),
            },
            Section {
                id: Some("airport"),
                kicker: "AIRPORT",
                title: "LAX Private Chauffeur",
                body: SectionBody::Panels(vec![
                    Panel {
                        icon: Some(Icon::Plane),
                        heading: "Terminal Coordination",
                        blurb: None,
                        bullets: vec![
                            "Flight tracking included",
                            "Discreet pickup (signage only if requested)",
                            "Meet & greet upon request",
                            "Professional uniformed chauffeurs",
                        ],
                        prices: None,
                        cta: Some(request_cta("Request LAX Chauffeur", CtaStyle::Solid)),
                    },
                    Panel {
                        icon: Some(Icon::Clock),
                        heading: "Fixed Ultra-Luxury Pricing",
                        blurb: None,
                        bullets: vec![],
                        prices: Some(airport_prices()),
                        cta: None,
                    },
                ]),
            },
            Section {
                id: None,
                kicker: "MONTHLY",
                title: "Monthly Private Chauffeur",
                body: SectionBody::Panels(vec![
                    Panel {
                        icon: None,
                        heading: "Designed for executives & private clients",
                        blurb: Some("Dedicated chauffeur, fixed availability, priority scheduling, and consistent service."),
                        bullets: vec![
                            "Assigned chauffeur",
                            "Fixed schedule & availability",
                            "Priority booking",
                            "NDA included",
                        ],
                        prices: None,
                        cta: Some(request_cta("Request Monthly Availability", CtaStyle::Outline)),
                    },
                    Panel {
                        icon: None,
                        heading: "Monthly pricing",
                        blurb: None,
                        bullets: vec![],
                        prices: Some(PriceList {
                            rows: vec![
                                PriceRow { label: "Suburban", value: "$8,500–$9,500" },
                                PriceRow { label: "Escalade", value: "$10,500–$12,000" },
                            ],
                            note: "We limit monthly availability.",
                        }),
                        cta: None,
                    },
                ]),
            },
        ],
        request_heading: "Request Private Chauffeur",
    }
}

fn airport() -> PageContent {
    PageContent {
        hero: HeroContent {
            badge: "LAX • PRIVATE AIRPORT CHAUFFEUR",
            title: ["Private Chauffeur at LAX.", "Ultra Luxury. Absolute Discretion."],
            subtitle: [
                "We do not provide “rides”. We provide private chauffeurs.",
                "Escalade • Suburban • Mercedes EQS — Los Angeles • Beverly Hills.",
            ],
            primary: request_cta("Request LAX Chauffeur", CtaStyle::Solid),
            secondary: Some(Cta { label: "View Fleet", href: "#fleet", style: CtaStyle::Outline }),
        },
        sections: vec![
            Section {
                id: None,
                kicker: "LAX",
                title: "The NOIRE Airport Standard",
                body: SectionBody::Cards(vec![
                    Card {
                        icon: Icon::Plane,
                        title: "Terminal Coordination",
                        desc: "Flight tracking, discreet terminal coordination, and smooth curbside pickup.",
                    },
                    Card {
                        icon: Icon::Lock,
                        title: "Discreet by Default",
                        desc: "Unbranded vehicles. Signage only if requested. NDA-ready.",
                    },
                    Card {
                        icon: Icon::Sparkles,
                        title: "White-Glove Assistance",
                        desc: "Professional chauffeurs, luggage assistance, and a calm, private arrival.",
                    },
                ]),
            },
            Section {
                id: Some("fleet"),
                kicker: "FLEET",
                title: "Choose Your Vehicle",
                body: SectionBody::Fleet(vec![
                    FleetCard { name: "Cadillac Escalade", tag: "Celebrity", desc: "Premium SUV for high-profile arrivals." },
                    FleetCard { name: "Chevrolet Suburban", tag: "Executive", desc: "Corporate, family, and airport elite." },
                    FleetCard { name: "Mercedes EQS", tag: "Silent", desc: "Executive electric luxury." },
                ]),
            },
            Section {
                id: None,
                kicker: "PRICING",
                title: "Fixed Ultra-Luxury Pricing",
                body: SectionBody::Pricing(airport_prices()),
            },
        ],
        request_heading: "Request Private LAX Chauffeur",
    }
}

pub fn page(view: View) -> PageContent {
    match view {
        View::Home => home(),
        View::Airport => airport(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctas(content: &PageContent) -> Vec<Cta> {
        let mut ctas = vec![content.hero.primary];
        ctas.extend(content.hero.secondary);
        for section in &content.sections {
            if let SectionBody::Panels(panels) = &section.body {
                ctas.extend(panels.iter().filter_map(|panel| panel.cta));
            }
        }
        ctas
    }

    #[test]
    fn home_hero_introduces_the_private_chauffeur() {
        let content = page(View::default());
        assert!(content.hero.title.concat().contains("Private Chauffeur"));
    }

    #[test]
    fn airport_hero_mentions_lax() {
        let content = page(View::Airport);
        assert!(content.hero.title.concat().contains("LAX"));
        assert_eq!(content.request_heading, "Request Private LAX Chauffeur");
    }

    #[test]
    fn switching_away_and_back_gives_the_same_page() {
        let first = page(View::Home);
        let mut view = View::Home;
        view = view.toggled();
        let _ = page(view);
        view = view.toggled();
        assert_eq!(page(view), first);
    }

    #[test]
    fn in_page_links_land_on_a_section_of_the_same_view() {
        for view in View::ALL {
            let content = page(view);
            let ids: Vec<&str> = content.sections.iter().filter_map(|s| s.id).collect();
            for cta in ctas(&content) {
                let target = cta.href.trim_start_matches('#');
                assert!(
                    cta.href == REQUEST_ANCHOR || ids.contains(&target),
                    "{:?}: {} points nowhere",
                    view,
                    cta.href
                );
            }
        }
    }

    #[test]
    fn both_views_quote_the_same_airport_prices() {
        let home = page(View::Home);
        let airport = page(View::Airport);
        let home_prices = home.sections.iter().find_map(|s| match &s.body {
            SectionBody::Panels(panels) => panels.iter().find_map(|p| p.prices.clone()),
            _ => None,
        });
        let airport_prices = airport.sections.iter().find_map(|s| match &s.body {
            SectionBody::Pricing(prices) => Some(prices.clone()),
            _ => None,
        });
        assert_eq!(home_prices, airport_prices);
    }
}
