use crate::components::icon::IconGlyph;
use crate::config;
use crate::content::Icon;
use crate::form::{FormAction, FormState, FormStatus};
use crate::request::{RequestField, ServiceType, Vehicle};
use crate::submit::SubmissionHandler;
use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const CONFIRMATION: &str =
    "Thank you. Your private request has been received. Our concierge will contact you shortly.";

#[derive(Properties, PartialEq)]
struct FieldProps {
    field: RequestField,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    on_input: Callback<(RequestField, String)>,
    #[prop_or("text")]
    input_type: &'static str,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    html! {
        <label class={classes!("field", props.error.is_some().then(|| "field-invalid"))}>
            <span class="field-label">{props.field.label()}</span>
            <input
                type={props.input_type}
                name={props.field.wire_name()}
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct SelectProps {
    field: RequestField,
    options: Vec<&'static str>,
    value: String,
    error: Option<String>,
    on_input: Callback<(RequestField, String)>,
}

#[function_component(Select)]
fn select(props: &SelectProps) -> Html {
    let onchange = {
        let on_input = props.on_input.clone();
        let field = props.field;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit((field, select.value()));
        })
    };

    html! {
        <label class={classes!("field", props.error.is_some().then(|| "field-invalid"))}>
            <span class="field-label">{props.field.label()}</span>
            <select name={props.field.wire_name()} {onchange}>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={*option == props.value}>{*option}</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct TextAreaProps {
    field: RequestField,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    on_input: Callback<(RequestField, String)>,
}

#[function_component(TextArea)]
fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit((field, area.value()));
        })
    };

    html! {
        <label class={classes!("field", props.error.is_some().then(|| "field-invalid"))}>
            <span class="field-label">{props.field.label()}</span>
            <textarea
                rows="4"
                name={props.field.wire_name()}
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="field-error">{error}</span>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct RequestSectionProps {
    pub heading: &'static str,
    pub handler: SubmissionHandler,
}

#[function_component(RequestSection)]
pub fn request_section(props: &RequestSectionProps) -> Html {
    let form = use_reducer(FormState::default);
    // Guards against a second submit landing before the re-render disables the form.
    let in_flight = use_mut_ref(|| false);

    let on_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |(field, value): (RequestField, String)| {
            dispatcher.dispatch(FormAction::Input(field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let handler = props.handler.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() {
                return;
            }

            let record = match form.prepare() {
                None => return,
                Some(Err(errors)) => {
                    warn!("Request blocked: {} field(s) need attention", errors.len());
                    form.dispatch(FormAction::Invalid(errors));
                    return;
                }
                Some(Ok(record)) => record,
            };

            info!(
                "Submitting private request (service: {}, vehicle: {})",
                record.service_type.label(),
                record.vehicle.label()
            );
            form.dispatch(FormAction::Begin);
            *in_flight.borrow_mut() = true;

            let dispatcher = form.dispatcher();
            let in_flight = in_flight.clone();
            let submission = handler.submit(record);
            spawn_local(async move {
                let result = submission.await;
                *in_flight.borrow_mut() = false;
                dispatcher.dispatch(FormAction::Finish(result));
            });
        })
    };

    let on_reset = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::Reset))
    };

    let error_text = |field: RequestField| form.error(field).map(|error| error.to_string());
    let submitting = form.is_submitting();

    let status = match &form.status {
        FormStatus::Failed(error) => html! {
            <div class={classes!("form-alert", error.is_retryable().then(|| "retry"))}>
                {error.user_message()}
            </div>
        },
        _ => html! {},
    };

    let form_body = if form.status == FormStatus::Submitted {
        html! {
            <div class="request-form confirmation">
                <div class="confirmation-mark"><IconGlyph icon={Icon::Check} large={true} /></div>
                <p>{CONFIRMATION}</p>
                <button type="button" class="cta cta-outline" onclick={on_reset}>
                    {"Send another request"}
                </button>
            </div>
        }
    } else {
        html! {
            <form class="request-form" {onsubmit} novalidate={true}>
                <fieldset disabled={submitting}>
                    <Field
                        field={RequestField::Name}
                        placeholder="Full name"
                        value={form.value(RequestField::Name).to_string()}
                        error={error_text(RequestField::Name)}
                        on_input={on_input.clone()}
                    />
                    <div class="field-pair">
                        <Field
                            field={RequestField::Phone}
                            placeholder="(###) ###-####"
                            input_type="tel"
                            value={form.value(RequestField::Phone).to_string()}
                            error={error_text(RequestField::Phone)}
                            on_input={on_input.clone()}
                        />
                        <Field
                            field={RequestField::Email}
                            placeholder="you@email.com"
                            input_type="email"
                            value={form.value(RequestField::Email).to_string()}
                            error={error_text(RequestField::Email)}
                            on_input={on_input.clone()}
                        />
                    </div>
                    <div class="field-pair">
                        <Select
                            field={RequestField::Service}
                            options={ServiceType::ALL.iter().map(|s| s.label()).collect::<Vec<_>>()}
                            value={form.value(RequestField::Service).to_string()}
                            error={error_text(RequestField::Service)}
                            on_input={on_input.clone()}
                        />
                        <Select
                            field={RequestField::Vehicle}
                            options={Vehicle::ALL.iter().map(|v| v.label()).collect::<Vec<_>>()}
                            value={form.value(RequestField::Vehicle).to_string()}
                            error={error_text(RequestField::Vehicle)}
                            on_input={on_input.clone()}
                        />
                    </div>
                    <div class="field-pair">
                        <Field
                            field={RequestField::Date}
                            placeholder="MM/DD/YYYY"
                            value={form.value(RequestField::Date).to_string()}
                            error={error_text(RequestField::Date)}
                            on_input={on_input.clone()}
                        />
                        <Field
                            field={RequestField::Time}
                            placeholder="HH:MM"
                            value={form.value(RequestField::Time).to_string()}
                            error={error_text(RequestField::Time)}
                            on_input={on_input.clone()}
                        />
                    </div>
                    <Field
                        field={RequestField::FlightNumber}
                        placeholder="e.g., AA123"
                        value={form.value(RequestField::FlightNumber).to_string()}
                        error={error_text(RequestField::FlightNumber)}
                        on_input={on_input.clone()}
                    />
                    <TextArea
                        field={RequestField::Notes}
                        placeholder="Pickup details, number of passengers, luggage, special requests…"
                        value={form.value(RequestField::Notes).to_string()}
                        error={error_text(RequestField::Notes)}
                        on_input={on_input}
                    />

                    {status}

                    <button type="submit" class="cta cta-solid submit" disabled={submitting}>
                        { if submitting { "Sending…" } else { "Submit Private Request" } }
                    </button>
                    <div class="fine-print">{"Your request will be personally confirmed."}</div>
                </fieldset>
            </form>
        }
    };

    html! {
        <section id="request" class="page-section request-section">
            <style>
                {r#"
                    .request-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                        align-items: start;
                    }
                    .request-intro p { margin-top: 0.75rem; font-size: 0.875rem; color: #d4d4d8; }
                    .contact-lines { margin-top: 2rem; font-size: 0.875rem; color: #d4d4d8; }
                    .contact-lines div { display: flex; align-items: center; gap: 0.75rem; margin-top: 1rem; }
                    .contact-lines a { color: inherit; text-decoration: none; }
                    .trust-panel { margin-top: 2rem; }
                    .request-form {
                        border: 1px solid #18181b;
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                        background: rgba(9, 9, 11, 0.4);
                    }
                    .request-form fieldset {
                        display: grid;
                        gap: 1rem;
                        border: none;
                        margin: 0;
                        padding: 0;
                    }
                    .field { display: grid; gap: 0.5rem; }
                    .field-label { font-size: 0.75rem; font-weight: 600; color: #e4e4e7; }
                    .field input, .field select, .field textarea {
                        border: 1px solid #27272a;
                        border-radius: 1rem;
                        background: #09090b;
                        color: #fafafa;
                        padding: 0.75rem 1rem;
                        font-size: 0.875rem;
                    }
                    .field input, .field select { height: 2.75rem; padding-top: 0; padding-bottom: 0; }
                    .field input::placeholder, .field textarea::placeholder { color: #52525b; }
                    .field input:focus, .field select:focus, .field textarea:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #52525b;
                    }
                    .field-invalid input, .field-invalid select, .field-invalid textarea { border-color: #b91c1c; }
                    .field-error { font-size: 0.75rem; color: #f87171; }
                    .field-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .form-alert {
                        border: 1px solid #7f1d1d;
                        border-radius: 1rem;
                        padding: 0.75rem 1rem;
                        font-size: 0.875rem;
                        color: #fecaca;
                    }
                    .submit { margin-top: 0.5rem; border: none; cursor: pointer; }
                    .submit:disabled { opacity: 0.6; cursor: wait; }
                    .confirmation { text-align: center; }
                    .confirmation p { color: #d4d4d8; }
                    @media (max-width: 768px) {
                        .request-grid, .field-pair { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="request-grid">
                <div class="request-intro">
                    <div class="kicker">{"REQUEST"}</div>
                    <h2>{props.heading}</h2>
                    <p>
                        {"Discreet service for executives, celebrities, and private clients. All requests are personally reviewed and confirmed."}
                    </p>

                    <div class="contact-lines">
                        <div>
                            <IconGlyph icon={Icon::MapPin} />
                            {config::SERVICE_AREA}
                        </div>
                        <div>
                            <IconGlyph icon={Icon::Phone} />
                            <a href={format!("tel:{}", config::CONTACT_PHONE_DIAL)}>{config::CONTACT_PHONE_DISPLAY}</a>
                        </div>
                        <div>
                            <IconGlyph icon={Icon::Mail} />
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </div>
                    </div>

                    <div class="card trust-panel">
                        <div class="card-title">{"NDA-ready • Unbranded • White-glove"}</div>
                        <div class="fine-print">{"We limit monthly availability."}</div>
                    </div>
                </div>

                {form_body}
            </div>
        </section>
    }
}
