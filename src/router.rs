use crate::errors::{ResultResp, ServerError};
use crate::form::{FormOptions, SearchForm, SubmitError, ValidationErrors};
use crate::handoff::{looks_like_token, HANDOFF_COOKIE, HANDOFF_PARAM};
use crate::responses::{
    html_response, html_response_with_status, see_other, see_other_with_cookie, text_response,
};
use crate::state::AppState;
use crate::templates::components::SearchFormVm;
use crate::templates::pages::{home_page, results_page};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, error, info};

const MAX_FORM_BYTES: u64 = 64 * 1024;

const SEARCH_UNAVAILABLE: &str =
    "We couldn't reach the neighborhood search service. Your answers are still here; please try again.";

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(&req, state),
        ("POST", "/search") => search(&mut req, state),
        ("GET", "/results") => results(&req, state),
        ("POST", "/results/clear") => clear_results(&mut req, state),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn home(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let form_open = params.get("search").map(String::as_str) == Some("open");

    if !form_open {
        return html_response(home_page(&state.city, None));
    }

    let form = SearchForm::new(state.city.as_str());
    let options = FormOptions::load(state.backend());
    let errors = ValidationErrors::default();
    let vm = SearchFormVm {
        form: &form,
        options: &options,
        errors: &errors,
        notice: None,
    };

    html_response(home_page(&state.city, Some(&vm)))
}

fn search(req: &mut Request, state: &AppState) -> ResultResp {
    ensure_form_content_type(req)?;
    let body = read_body(req)?;
    let form = SearchForm::from_form_body(state.city.as_str(), &body);
    let previous = cookie_value(req, HANDOFF_COOKIE);

    match form.submit(state.backend()) {
        Ok(handoff) => {
            // A new search replaces whatever this browser saw last.
            if let Some(previous) = previous.filter(|id| looks_like_token(id)) {
                state.handoffs.remove(&previous);
            }

            let found = handoff.results.neighborhoods.len();
            let id = state.handoffs.put(handoff);
            info!(handoff = %id, found, stored = state.handoffs.len(), "search completed");

            see_other_with_cookie(
                &format!("/results?{HANDOFF_PARAM}={id}"),
                &format!("{HANDOFF_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"),
            )
        }
        Err(SubmitError::Invalid(errors)) => {
            debug!(%errors, count = errors.len(), "search form rejected");
            render_form(state, &form, &errors, None, 422)
        }
        Err(SubmitError::Backend(err)) => {
            error!(error = %err, "search request failed");
            let errors = ValidationErrors::default();
            render_form(state, &form, &errors, Some(SEARCH_UNAVAILABLE), 502)
        }
    }
}

/// Re-render the landing page with the modal open and the user's input kept.
fn render_form(
    state: &AppState,
    form: &SearchForm,
    errors: &ValidationErrors,
    notice: Option<&str>,
    status: u16,
) -> ResultResp {
    let options = FormOptions::load(state.backend());
    let vm = SearchFormVm {
        form,
        options: &options,
        errors,
        notice,
    };

    html_response_with_status(status, home_page(&state.city, Some(&vm)))
}

fn results(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let id = params
        .get(HANDOFF_PARAM)
        .cloned()
        .or_else(|| cookie_value(req, HANDOFF_COOKIE))
        .filter(|id| looks_like_token(id));

    let Some(id) = id else {
        debug!("no handoff in request, back to landing");
        return see_other("/");
    };

    match state.handoffs.get(&id) {
        Some(handoff) => html_response(results_page(&handoff, &id)),
        None => {
            debug!(handoff = %id, "handoff missing or expired, back to landing");
            see_other("/")
        }
    }
}

fn clear_results(req: &mut Request, state: &AppState) -> ResultResp {
    let body = read_body(req)?;
    let from_form = url::form_urlencoded::parse(&body)
        .find(|(key, _)| key == HANDOFF_PARAM)
        .map(|(_, value)| value.into_owned());

    for id in [from_form, cookie_value(req, HANDOFF_COOKIE)]
        .into_iter()
        .flatten()
        .filter(|id| looks_like_token(id))
    {
        if state.handoffs.remove(&id) {
            debug!(handoff = %id, "handoff cleared");
        }
    }

    see_other_with_cookie(
        "/?search=open#search-form",
        &format!("{HANDOFF_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
    )
}

fn ensure_form_content_type(req: &Request) -> Result<(), ServerError> {
    let raw = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let is_form = raw
        .parse::<mime::Mime>()
        .map(|m| m.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str())
        .unwrap_or(false);

    if is_form {
        Ok(())
    } else {
        Err(ServerError::UnsupportedMedia(format!(
            "expected {}, got {raw:?}",
            mime::APPLICATION_WWW_FORM_URLENCODED
        )))
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(body)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
