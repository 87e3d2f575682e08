//! Persisted login sessions and one-shot UI flags.

use api::models::{Credentials, CustomerSession};

use crate::backend::{Scope, Store};

const ADMIN_KEY: &str = "quotedesk.admin";
const CUSTOMER_KEY: &str = "quotedesk.customer";
const CAMPAIGN_SEEN_KEY: &str = "quotedesk.campaign_seen";

pub fn load_admin(store: &Store) -> Option<Credentials> {
    store.get_json(Scope::Local, ADMIN_KEY)
}

pub fn save_admin(store: &Store, credentials: &Credentials) {
    store.put_json(Scope::Local, ADMIN_KEY, credentials);
}

pub fn clear_admin(store: &Store) {
    store.remove(Scope::Local, ADMIN_KEY);
}

pub fn load_customer(store: &Store) -> Option<CustomerSession> {
    store.get_json(Scope::Local, CUSTOMER_KEY)
}

pub fn save_customer(store: &Store, session: &CustomerSession) {
    store.put_json(Scope::Local, CUSTOMER_KEY, session);
}

pub fn clear_customer(store: &Store) {
    store.remove(Scope::Local, CUSTOMER_KEY);
}

/// The campaign popup shows at most once per tab session.
pub fn campaign_seen(store: &Store) -> bool {
    store.get(Scope::Session, CAMPAIGN_SEEN_KEY).is_some()
}

pub fn mark_campaign_seen(store: &Store) {
    store.put(Scope::Session, CAMPAIGN_SEEN_KEY, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_session_round_trip() {
        let store = Store::in_memory();
        assert!(load_admin(&store).is_none());

        let creds = Credentials {
            username: "ops".into(),
            password: "hunter2".into(),
        };
        save_admin(&store, &creds);
        assert_eq!(load_admin(&store), Some(creds));

        clear_admin(&store);
        assert!(load_admin(&store).is_none());
    }

    #[test]
    fn test_campaign_seen_flag() {
        let store = Store::in_memory();
        assert!(!campaign_seen(&store));
        mark_campaign_seen(&store);
        assert!(campaign_seen(&store));
    }
}
