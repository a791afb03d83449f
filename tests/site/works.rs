//! Work CRUD, filtering, and search through the dispatch layer.

use quill::microsvc::Session;
use serde_json::json;

use crate::support::{as_user, publish, register, service, titles};

#[test]
fn edit_and_delete_are_author_only() {
    let service = service();
    register(&service, "alice");
    let dawn = publish(&service, "alice", "Dawn", "poetry");

    let err = as_user(
        &service,
        "bob",
        "work.update",
        json!({ "work_id": dawn, "title": "Mine now" }),
    )
    .unwrap_err();
    assert_eq!(err.status_code(), 401);

    let out = as_user(
        &service,
        "alice",
        "work.update",
        json!({ "work_id": dawn, "title": "Daybreak" }),
    )
    .unwrap();
    assert_eq!(out["message"], "Work Successfully Updated");
    assert_eq!(out["work"]["title"], "Daybreak");
    assert_eq!(out["work"]["genre"], "poetry");

    let form = as_user(&service, "alice", "work.get", json!({ "work_id": dawn })).unwrap();
    assert_eq!(form["work"]["title"], "Daybreak");
    assert_eq!(form["genres"], json!(["fiction", "poetry"]));

    let err = as_user(&service, "bob", "work.delete", json!({ "work_id": dawn })).unwrap_err();
    assert_eq!(err.status_code(), 401);

    let out = as_user(&service, "alice", "work.delete", json!({ "work_id": dawn })).unwrap();
    assert_eq!(out["message"], "Work Successfully Deleted");

    let err = as_user(&service, "alice", "work.get", json!({ "work_id": dawn })).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn filter_by_genre() {
    let service = service();
    publish(&service, "alice", "Dawn", "poetry");
    publish(&service, "bob", "The Heist", "fiction");

    let view = service
        .dispatch("works.filter", json!({ "genre_name": "fiction" }), Session::new())
        .unwrap();
    assert_eq!(titles(&view), vec!["The Heist"]);
    assert_eq!(view["search_keys"], json!(["author", "genre", "title", "writing"]));

    let err = service
        .dispatch("works.filter", json!({}), Session::new())
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn search_by_field() {
    let service = service();
    publish(&service, "anna", "One", "poetry");
    publish(&service, "susanne", "Two", "poetry");
    publish(&service, "bob", "Three", "poetry");

    let view = service
        .dispatch(
            "works.search",
            json!({ "key": "author", "query": "ANN" }),
            Session::new(),
        )
        .unwrap();
    assert_eq!(titles(&view), vec!["Two", "One"]);

    let err = service
        .dispatch(
            "works.search",
            json!({ "key": "password_hash", "query": "x" }),
            Session::new(),
        )
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[test]
fn profile_lists_own_works() {
    let service = service();
    publish(&service, "alice", "Dawn", "poetry");
    publish(&service, "bob", "The Heist", "fiction");

    let out = as_user(&service, "alice", "works.profile", json!({})).unwrap();
    assert_eq!(out["username"], "alice");
    assert_eq!(titles(&out["view"]), vec!["Dawn"]);

    let err = service
        .dispatch("works.profile", json!({}), Session::new())
        .unwrap_err();
    assert_eq!(err.status_code(), 401);
}
