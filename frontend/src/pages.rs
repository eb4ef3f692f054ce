pub mod home {
    use yew::prelude::*;
    use crate::components::page_body::PageBody;
    use crate::content;
    use crate::submit::SubmissionHandler;
    use crate::view::View;

    #[derive(Properties, PartialEq)]
    pub struct HomeProps {
        pub handler: SubmissionHandler,
    }

    #[function_component]
    pub fn Home(props: &HomeProps) -> Html {
        html! {
            <PageBody content={content::page(View::Home)} handler={props.handler.clone()} />
        }
    }
}

pub mod airport {
    use yew::prelude::*;
    use crate::components::page_body::PageBody;
    use crate::content;
    use crate::submit::SubmissionHandler;
    use crate::view::View;

    #[derive(Properties, PartialEq)]
    pub struct AirportProps {
        pub handler: SubmissionHandler,
    }

    /// Landing page for travellers flying into or out of LAX.
    #[function_component]
    pub fn Airport(props: &AirportProps) -> Html {
        html! {
            <PageBody content={content::page(View::Airport)} handler={props.handler.clone()} />
        }
    }
}
