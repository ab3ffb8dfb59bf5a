use crate::domain::SearchCriteria;
use crate::handoff::Handoff;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{
    app_state, body_string, get, get_with_cookie, location, post_form, sample_result, set_cookie,
    FakeBackend,
};
use std::sync::Arc;

fn criteria() -> SearchCriteria {
    SearchCriteria {
        budget: 1500.0,
        city: "Montreal".to_string(),
        max_commute_time: Some(20.0),
        destination_neighborhood: Some("Plateau".to_string()),
        amenities: vec![],
        rent_types: vec![],
        preferred_neighborhoods: vec![],
    }
}

fn stored(state: &AppState, count: usize) -> String {
    state
        .handoffs
        .put(Handoff::new(sample_result(count), criteria()))
}

#[test]
fn results_render_podium_then_list() {
    let state = app_state(Arc::new(FakeBackend::new()));
    let id = stored(&state, 5);

    let resp = handle(get(&format!("/results?handoff={id}")), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Your Perfect Montreal Neighborhoods"));
    assert!(body.contains("Found 5 neighborhoods matching your criteria"));

    let first = body.find(r#"class="podium-card first""#).unwrap();
    let second = body.find(r#"class="podium-card second""#).unwrap();
    let third = body.find(r#"class="podium-card third""#).unwrap();
    let others = body.find("Other Great Options").unwrap();
    assert!(first < second && second < third && third < others);

    assert!(body.contains(r#"data-rank="4""#));
    assert!(body.contains(r#"data-rank="5""#));
    assert!(body.contains("Mile End"));
    assert!(body.contains("18 min commute"));
    assert!(body.contains("20 min to Plateau"));
}

#[test]
fn short_result_skips_the_list() {
    let state = app_state(Arc::new(FakeBackend::new()));
    let id = stored(&state, 2);

    let body = body_string(handle(get(&format!("/results?handoff={id}")), &state).unwrap());
    assert!(body.contains(r#"class="podium-card second""#));
    assert!(!body.contains(r#"class="podium-card third""#));
    assert!(!body.contains("Other Great Options"));
}

#[test]
fn empty_result_shows_the_empty_state() {
    let state = app_state(Arc::new(FakeBackend::new()));
    let id = stored(&state, 0);

    let resp = handle(get(&format!("/results?handoff={id}")), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("No neighborhoods found"));
    assert!(!body.contains("podium-card"));
    assert!(body.contains(r#"action="/results/clear""#));
}

#[test]
fn cookie_is_enough_to_find_results() {
    let state = app_state(Arc::new(FakeBackend::new()));
    let id = stored(&state, 3);

    let resp = handle(get_with_cookie("/results", &format!("theme=dark; handoff={id}")), &state)
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn results_without_handoff_go_back_to_landing() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let resp = handle(get("/results"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");

    let resp = handle(get("/results?handoff=not-a-real-id-at-all"), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
}

#[test]
fn clearing_drops_the_handoff_and_reopens_the_form() {
    let state = app_state(Arc::new(FakeBackend::new()));
    let id = stored(&state, 4);

    let resp = handle(post_form("/results/clear", &format!("handoff={id}")), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/?search=open#search-form");
    assert!(set_cookie(&resp).contains("Max-Age=0"));
    assert!(state.handoffs.get(&id).is_none());

    let resp = handle(get(&format!("/results?handoff={id}")), &state).unwrap();
    assert_eq!(resp.status(), 303);
}

#[test]
fn zero_commute_is_not_shown() {
    let state = app_state(Arc::new(FakeBackend::new()));
    let mut result = sample_result(5);
    for hood in &mut result.neighborhoods {
        hood.commute_time = Some(0);
    }
    let id = state.handoffs.put(Handoff::new(result, criteria()));

    let body = body_string(handle(get(&format!("/results?handoff={id}")), &state).unwrap());
    assert!(body.contains(r#"class="podium-card first""#));
    assert!(!body.contains("commute-time"));
    assert!(!body.contains("commute-info"));
    assert!(!body.contains("min commute"));
}
