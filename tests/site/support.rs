//! Shared setup: a seeded in-memory site behind the full command set.

use quill::catalog;
use quill::handlers;
use quill::microsvc::{HandlerError, Service, Session};
use quill::model::InMemoryModelStore;
use quill::Site;
use serde_json::{json, Value};

pub type SiteService = Service<Site<InMemoryModelStore>>;

pub fn service() -> SiteService {
    let site = Site::in_memory();
    catalog::seed(
        site.store(),
        &["poetry".to_string(), "fiction".to_string()],
        &[
            "author".to_string(),
            "title".to_string(),
            "genre".to_string(),
            "writing".to_string(),
        ],
    )
    .unwrap();
    handlers::service(site)
}

pub fn as_user(
    service: &SiteService,
    user: &str,
    command: &str,
    input: Value,
) -> Result<Value, HandlerError> {
    service.dispatch(command, input, Session::for_user(user))
}

pub fn register(service: &SiteService, username: &str) -> String {
    let out = service
        .dispatch(
            "user.register",
            json!({ "username": username, "password": "pw" }),
            Session::new(),
        )
        .unwrap();
    out["username"].as_str().unwrap().to_string()
}

/// Publish a work and return its id.
pub fn publish(service: &SiteService, author: &str, title: &str, genre: &str) -> String {
    let out = as_user(
        service,
        author,
        "work.create",
        json!({ "title": title, "genre_name": genre, "writing": "first\tline\nsecond line" }),
    )
    .unwrap();
    out["work"]["id"].as_str().unwrap().to_string()
}

pub fn titles(view: &Value) -> Vec<String> {
    view["works"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["title"].as_str().unwrap().to_string())
        .collect()
}
