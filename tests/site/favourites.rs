//! Favourite toggling through the dispatch layer.

use std::sync::Arc;
use std::thread;

use quill::documents::Favourite;
use quill::microsvc::Session;
use quill::model::ModelsExt;
use serde_json::json;

use crate::support::{as_user, publish, service, titles};

#[test]
fn double_click_from_many_threads_stores_one_favourite() {
    let service = Arc::new(service());
    let work = publish(&service, "alice", "Dawn", "poetry");

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = Arc::clone(&service);
            let work = work.clone();
            thread::spawn(move || {
                let out =
                    as_user(&service, "bob", "work.favourite", json!({ "work_id": work })).unwrap();
                out["created"].as_bool().unwrap()
            })
        })
        .collect();

    let created = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|c| *c)
        .count();
    assert_eq!(created, 1);

    let stored = service
        .repo()
        .store()
        .models::<Favourite>()
        .all()
        .unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn listing_flags_only_the_viewers_favourites() {
    let service = service();
    let dawn = publish(&service, "alice", "Dawn", "poetry");
    publish(&service, "alice", "Dusk", "poetry");
    as_user(&service, "bob", "work.favourite", json!({ "work_id": dawn })).unwrap();

    let bob_view = as_user(&service, "bob", "works.home", json!({})).unwrap();
    let flags: Vec<_> = bob_view["works"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| (w["title"].as_str().unwrap(), w["favourited"].as_bool().unwrap()))
        .collect();
    assert_eq!(flags, vec![("Dusk", false), ("Dawn", true)]);

    let anon = service
        .dispatch("works.home", json!({}), Session::new())
        .unwrap();
    assert_eq!(titles(&anon), vec!["Dusk", "Dawn"]);
    assert!(anon["works"]
        .as_array()
        .unwrap()
        .iter()
        .all(|w| w["favourited"] == false));
}

#[test]
fn deleted_work_vanishes_from_favourites() {
    let service = service();
    let dawn = publish(&service, "alice", "Dawn", "poetry");
    as_user(&service, "bob", "work.favourite", json!({ "work_id": dawn })).unwrap();
    as_user(&service, "alice", "work.delete", json!({ "work_id": dawn })).unwrap();

    let favs = as_user(&service, "bob", "works.favourites", json!({})).unwrap();
    assert!(titles(&favs).is_empty());
}

#[test]
fn favourite_errors_are_distinct() {
    let service = service();

    let malformed = as_user(&service, "bob", "work.favourite", json!({ "work_id": "nope" }))
        .unwrap_err();
    assert_eq!(malformed.status_code(), 400);

    let missing = as_user(
        &service,
        "bob",
        "work.favourite",
        json!({ "work_id": "000000000000000000000099" }),
    )
    .unwrap_err();
    assert_eq!(missing.status_code(), 404);
    assert_eq!(missing.user_message(), "Work not found!");

    let anonymous = service
        .dispatch(
            "work.favourite",
            json!({ "work_id": "000000000000000000000099" }),
            Session::new(),
        )
        .unwrap_err();
    assert_eq!(anonymous.status_code(), 401);

    let no_field = as_user(&service, "bob", "work.favourite", json!({})).unwrap_err();
    assert_eq!(no_field.status_code(), 400);
}
