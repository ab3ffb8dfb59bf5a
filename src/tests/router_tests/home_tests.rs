use crate::router::handle;
use crate::tests::utils::{app_state, body_string, get, post_form, FakeBackend};
use std::sync::Arc;

#[test]
fn landing_page_renders_without_the_form() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Montreal Vibe"));
    assert!(body.contains("START EXPLORING"));
    assert!(body.contains("Plateau"), "hotspots are always drawn");
    assert!(!body.contains(r#"id="search-form""#));
}

#[test]
fn open_form_lists_backend_options() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let resp = handle(get("/?search=open"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"id="search-form""#));
    assert!(body.contains(r#"<option value="Verdun">Verdun</option>"#));
    assert!(body.contains(r#"name="preferred_neighborhoods" value="Mile End""#));
    assert!(body.contains(r#"name="amenities" value="library""#));
    assert!(body.contains(r#"name="rent_types" value="Three Bed""#));
}

#[test]
fn open_form_survives_neighborhood_outage() {
    let backend = FakeBackend::new().with_neighborhood_status(500);
    let state = app_state(Arc::new(backend));

    let resp = handle(get("/?search=open"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("No neighborhoods available right now."));
    assert!(body.contains("Select destination"));
    assert!(!body.contains(r#"name="preferred_neighborhoods""#));
    // The fixed lists are still offered.
    assert!(body.contains(r#"name="amenities" value="park""#));
}

#[test]
fn health_check_is_plain_ok() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let resp = handle(get("/health"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn unknown_routes_are_not_found() {
    let state = app_state(Arc::new(FakeBackend::new()));

    let err = handle(get("/admin"), &state).err().unwrap();
    assert_eq!(err.status(), 404);

    let err = handle(post_form("/", "budget=1"), &state).err().unwrap();
    assert_eq!(err.status(), 404);
}
