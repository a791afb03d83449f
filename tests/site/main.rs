//! Site integration tests — exercise the registered commands end to end.

mod support;
mod scenario;
mod favourites;
mod works;
mod usernames;

#[cfg(feature = "http")]
mod http;
