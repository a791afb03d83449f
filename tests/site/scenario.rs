//! The alice/bob publish-and-favourite walkthrough.

use quill::microsvc::Session;
use serde_json::json;

use crate::support::{as_user, publish, register, service, titles};

#[test]
fn publish_favourite_and_unfavourite() {
    let service = service();

    let alice = register(&service, "Alice");
    assert_eq!(alice, "alice");
    let dawn = publish(&service, &alice, "Dawn", "poetry");

    let bob = register(&service, "bob");

    let first = as_user(&service, &bob, "work.favourite", json!({ "work_id": dawn })).unwrap();
    assert_eq!(first, json!({ "created": true, "message": "Added to favourites" }));

    let second = as_user(&service, &bob, "work.favourite", json!({ "work_id": dawn })).unwrap();
    assert_eq!(second, json!({ "created": false, "message": "Already in favourites" }));

    let favs = as_user(&service, &bob, "works.favourites", json!({})).unwrap();
    assert_eq!(titles(&favs), vec!["Dawn"]);
    assert_eq!(favs["works"][0]["favourited"], true);
    assert_eq!(favs["works"][0]["lines"], json!(["first    line", "second line"]));

    let removed = as_user(&service, &bob, "work.unfavourite", json!({ "work_id": dawn })).unwrap();
    assert_eq!(removed["removed"], true);

    let favs = as_user(&service, &bob, "works.favourites", json!({})).unwrap();
    assert!(titles(&favs).is_empty());
}

#[test]
fn login_after_register() {
    let service = service();
    register(&service, "carol");

    let out = service
        .dispatch(
            "user.login",
            json!({ "username": "CAROL", "password": "pw" }),
            Session::new(),
        )
        .unwrap();
    assert_eq!(out["username"], "carol");

    let err = service
        .dispatch(
            "user.login",
            json!({ "username": "carol", "password": "wrong" }),
            Session::new(),
        )
        .unwrap_err();
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.user_message(), "Incorrect Username and/or Password");
}

#[test]
fn logout_never_fails() {
    let service = service();
    let out = service
        .dispatch("user.logout", json!({}), Session::new())
        .unwrap();
    assert_eq!(out["message"], "You have been logged out");
}
