use crate::components::hero::Hero;
use crate::components::icon::ICON_STYLES;
use crate::components::request_section::RequestSection;
use crate::components::section::{PageSection, SECTION_STYLES};
use crate::content::PageContent;
use crate::submit::SubmissionHandler;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageBodyProps {
    pub content: PageContent,
    pub handler: SubmissionHandler,
}

/// Hero, content sections and the request form of one view.
#[function_component(PageBody)]
pub fn page_body(props: &PageBodyProps) -> Html {
    let content = &props.content;

    html! {
        <div class="page-body">
            <style>{ICON_STYLES}{SECTION_STYLES}</style>
            <Hero hero={content.hero.clone()} />
            { for content.sections.iter().map(|section| html! {
                <PageSection section={section.clone()} />
            }) }
            <RequestSection heading={content.request_heading} handler={props.handler.clone()} />
        </div>
    }
}
