
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Where request records are relayed. Set `NOIRE_REQUEST_PATH` at build time
/// (e.g. `/api/requests`) to enable it; without it submissions are only
/// acknowledged in the page.
pub fn request_endpoint() -> Option<String> {
    option_env!("NOIRE_REQUEST_PATH")
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}{}", get_backend_url(), path))
}

pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

pub const CONTACT_PHONE_DISPLAY: &str = "(310) 422-4708";
pub const CONTACT_PHONE_DIAL: &str = "13104224708";
pub const CONTACT_EMAIL: &str = "concierge@noirevip.com";
pub const SERVICE_AREA: &str = "Los Angeles • Beverly Hills • LAX";

pub const DOCUMENT_TITLE: &str = "NOIRE — Private Chauffeur";
