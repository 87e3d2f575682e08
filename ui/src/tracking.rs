//! Visitor analytics beacon.

use dioxus::prelude::*;

use crate::use_api;

/// Report a page view once, when the view mounts. Tracking must never get in
/// the visitor's way, so failures disappear inside [`api::content::track_visit`].
pub fn use_visit_tracker(page: &'static str) {
    let client = use_api();
    use_resource(move || {
        let client = client.clone();
        async move {
            api::content::track_visit(&client, page).await;
        }
    });
}
