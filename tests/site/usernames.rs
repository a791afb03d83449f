//! Session usernames in any case resolve to the one lowercase account.

use serde_json::json;

use crate::support::{as_user, publish, register, service, titles};

#[test]
fn mixed_case_session_acts_as_the_lowercase_account() {
    let service = service();
    register(&service, "Alice");
    let dawn = publish(&service, "Alice", "Dawn", "poetry");

    let form = as_user(&service, "alice", "work.get", json!({ "work_id": dawn })).unwrap();
    assert_eq!(form["work"]["author"], "alice");

    let out = as_user(&service, "ALICE", "works.profile", json!({})).unwrap();
    assert_eq!(out["username"], "alice");
    assert_eq!(titles(&out["view"]), vec!["Dawn"]);

    let out = as_user(
        &service,
        "alice",
        "work.update",
        json!({ "work_id": dawn, "title": "Daybreak" }),
    )
    .unwrap();
    assert_eq!(out["work"]["title"], "Daybreak");

    let search = as_user(
        &service,
        " Alice ",
        "works.search",
        json!({ "key": "author", "query": "ALICE" }),
    )
    .unwrap();
    assert_eq!(titles(&search), vec!["Daybreak"]);
}

#[test]
fn favourite_is_one_per_account_whatever_the_case() {
    let service = service();
    let dawn = publish(&service, "alice", "Dawn", "poetry");

    let first = as_user(&service, "Bob", "work.favourite", json!({ "work_id": dawn })).unwrap();
    let again = as_user(&service, "bob", "work.favourite", json!({ "work_id": dawn })).unwrap();
    assert_eq!(first["created"], true);
    assert_eq!(again["created"], false);

    let view = as_user(&service, "BOB", "works.favourites", json!({})).unwrap();
    assert_eq!(titles(&view), vec!["Dawn"]);
    assert_eq!(view["works"][0]["favourited"], true);

    let out = as_user(&service, "bob", "work.unfavourite", json!({ "work_id": dawn })).unwrap();
    assert_eq!(out["removed"], true);
    let view = as_user(&service, "Bob", "works.favourites", json!({})).unwrap();
    assert!(titles(&view).is_empty());
}
