use crate::domain::{AmenityType, RentType, SearchCriteria};
use crate::router::handle;
use crate::tests::utils::{
    app_state, body_string, location, post_form, set_cookie, FakeBackend,
};
use astra::{Body, Request};
use http::Method;
use std::sync::Arc;

const MONTREAL_FORM: &str = "budget=1500&max_commute_time=&destination_neighborhood=\
&amenities=park&amenities=transit&rent_types=studio";

#[test]
fn valid_search_hands_off_to_results() {
    let backend = Arc::new(FakeBackend::new());
    let state = app_state(backend.clone());

    let resp = handle(post_form("/search", MONTREAL_FORM), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let target = location(&resp).to_string();
    let id = target
        .strip_prefix("/results?handoff=")
        .expect("redirect carries the handoff id")
        .to_string();
    assert!(set_cookie(&resp).starts_with(&format!("handoff={id};")));

    let stored = state.handoffs.get(&id).expect("handoff stored");
    assert_eq!(stored.results.neighborhoods.len(), 5);
    assert_eq!(stored.criteria.city, "Montreal");

    let sent = backend.recorded_searches();
    assert_eq!(
        sent,
        vec![SearchCriteria {
            budget: 1500.0,
            city: "Montreal".to_string(),
            max_commute_time: None,
            destination_neighborhood: None,
            amenities: vec![AmenityType::Park, AmenityType::Transit],
            rent_types: vec![RentType::Studio],
            preferred_neighborhoods: vec![],
        }]
    );
}

#[test]
fn commute_pair_is_sent_together() {
    let backend = Arc::new(FakeBackend::new());
    let state = app_state(backend.clone());

    let form = "budget=2000&max_commute_time=30&destination_neighborhood=Plateau\
&preferred_neighborhoods=Verdun";
    let resp = handle(post_form("/search", form), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let sent = backend.recorded_searches();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].max_commute_time, Some(30.0));
    assert_eq!(sent[0].destination_neighborhood.as_deref(), Some("Plateau"));
    assert_eq!(sent[0].preferred_neighborhoods, vec!["Verdun".to_string()]);
}

#[test]
fn missing_budget_is_rejected_without_calling_backend() {
    let backend = Arc::new(FakeBackend::new());
    let state = app_state(backend.clone());

    let resp = handle(post_form("/search", "budget=&amenities=gym"), &state).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains(r#"id="budget-error""#));
    // The user's choices survive the round trip.
    assert!(body.contains(r#"value="gym" checked"#));
    assert!(backend.recorded_searches().is_empty());
}

#[test]
fn destination_without_commute_is_rejected() {
    let backend = Arc::new(FakeBackend::new());
    let state = app_state(backend.clone());

    let form = "budget=1500&max_commute_time=&destination_neighborhood=Plateau";
    let resp = handle(post_form("/search", form), &state).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains(r#"id="max_commute_time-error""#));
    assert!(!body.contains(r#"id="budget-error""#));
    assert!(body.contains(r#"<option value="Plateau" selected>Plateau</option>"#));
    assert!(backend.recorded_searches().is_empty());
}

#[test]
fn commute_without_destination_is_rejected() {
    let backend = Arc::new(FakeBackend::new());
    let state = app_state(backend.clone());

    let resp = handle(post_form("/search", "budget=1500&max_commute_time=25"), &state).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains(r#"id="destination_neighborhood-error""#));
    assert!(backend.recorded_searches().is_empty());
}

#[test]
fn backend_failure_keeps_the_form_and_shows_a_banner() {
    let backend = Arc::new(FakeBackend::new().with_search_status(503));
    let state = app_state(backend.clone());

    let resp = handle(post_form("/search", MONTREAL_FORM), &state).unwrap();
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("reach the neighborhood search service"));
    assert!(body.contains(r#"value="1500""#));
    assert!(body.contains(r#"value="transit" checked"#));
    assert_eq!(backend.recorded_searches().len(), 1);
    assert_eq!(state.handoffs.len(), 0);
}

#[test]
fn new_search_replaces_previous_handoff() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let first = handle(post_form("/search", MONTREAL_FORM), &state).unwrap();
    let first_id = location(&first)
        .trim_start_matches("/results?handoff=")
        .to_string();

    let mut again = post_form("/search", MONTREAL_FORM);
    again.headers_mut().insert(
        "Cookie",
        format!("handoff={first_id}").parse().unwrap(),
    );
    let second = handle(again, &state).unwrap();
    assert_eq!(second.status(), 303);

    assert!(state.handoffs.get(&first_id).is_none());
    assert_eq!(state.handoffs.len(), 1);
}

#[test]
fn non_form_bodies_are_refused() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let req: Request = http::Request::builder()
        .method(Method::POST)
        .uri("/search")
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"budget":1500}"#.as_bytes().to_vec()))
        .unwrap();

    let err = handle(req, &state).err().unwrap();
    assert_eq!(err.status(), 415);
}
