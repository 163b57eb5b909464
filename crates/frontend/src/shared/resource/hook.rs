use contracts::domain::common::Resource;
use leptos::prelude::*;
use std::sync::Arc;

use super::client::ResourceClient;
use super::store;
use crate::shared::api_utils::resource_url;
use crate::shared::http::{ApiClient, GlooTransport, HttpTransport};
use crate::shared::toast::{use_toasts, Notifier, ToastService};
use crate::system::auth::session;

/// In-memory list of one collection plus the calls that keep it in sync.
///
/// Server operations never touch `items`; after a successful call the page
/// applies the result with the matching local mutator (`add`,
/// `update_in_list`, `remove_from_list`). Only `list` replaces the whole
/// list, and only on success.
pub struct ResourceHook<R: Resource, T = GlooTransport, N = ToastService> {
    pub items: RwSignal<Vec<R>>,
    pub loading: RwSignal<bool>,
    client: Arc<ResourceClient<R, T, N>>,
}

impl<R: Resource, T, N> Clone for ResourceHook<R, T, N> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            loading: self.loading,
            client: Arc::clone(&self.client),
        }
    }
}

impl<R, T, N> ResourceHook<R, T, N>
where
    R: Resource,
    T: HttpTransport,
    N: Notifier,
{
    pub fn new(client: ResourceClient<R, T, N>) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            client: Arc::new(client),
        }
    }

    /// Reload the whole list; on failure the current list stays as it is
    pub async fn list(&self) {
        self.loading.set(true);
        if let Some(items) = self.client.fetch_all().await {
            self.items.set(items);
        }
        self.loading.set(false);
    }

    pub async fn get_one(&self, key: &str) -> Option<R> {
        self.client.fetch_one(key).await
    }

    pub async fn create(&self, data: &R) -> Option<R> {
        self.client.create(data).await
    }

    pub async fn update(&self, key: &str, data: &R) -> Option<R> {
        self.client.update(key, data).await
    }

    pub async fn remove(&self, key: &str) -> bool {
        self.client.delete(key).await
    }

    pub fn add(&self, item: R) {
        self.items.update(|list| store::add(list, item));
    }

    pub fn update_in_list(&self, key: &str, item: R) {
        self.items.update(|list| store::update_in_list(list, key, item));
    }

    pub fn remove_from_list(&self, key: &str) {
        self.items.update(|list| store::remove_from_list(list, key));
    }
}

/// Browser hook for `R`: gloo transport, stored token, toasts from context
pub fn use_resource<R: Resource>() -> ResourceHook<R> {
    let client = ResourceClient::new(
        ApiClient::new(GlooTransport, session::get_token),
        use_toasts(),
        resource_url(R::KIND),
    );
    ResourceHook::new(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::MockTransport;
    use crate::shared::toast::testing::RecordingNotifier;
    use contracts::domain::a001_vendor::aggregate::Vendor;
    use contracts::domain::a006_sale::aggregate::Sale;
    use contracts::domain::a011_customer::aggregate::Customer;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn token() -> Option<String> {
        Some("t".to_string())
    }

    fn hook<R: Resource>(
        transport: &Rc<MockTransport>,
        notifier: &RecordingNotifier,
        endpoint: &str,
    ) -> ResourceHook<R, Rc<MockTransport>, RecordingNotifier> {
        ResourceHook::new(ResourceClient::new(
            ApiClient::new(transport.clone(), token),
            notifier.clone(),
            endpoint,
        ))
    }

    fn names(hook: &ResourceHook<Vendor, Rc<MockTransport>, RecordingNotifier>) -> Vec<String> {
        hook.items
            .get_untracked()
            .into_iter()
            .map(|v| v.name)
            .collect()
    }

    #[test]
    fn create_then_add_shows_vendor_exactly_once() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let vendors = hook::<Vendor>(&transport, &notifier, "http://h/api/vendors");

        transport.respond(200, json!([{"name": "Globex"}]));
        block_on(vendors.list());

        transport.respond(201, json!({"vendor": {"name": "Acme Co", "phone": "555-0100"}}));
        let draft: Vendor = serde_json::from_value(json!({"name": "Acme Co"})).unwrap();
        let created = block_on(vendors.create(&draft)).unwrap();
        vendors.add(created.clone());
        // a second add of the same entity must not duplicate it
        vendors.add(created);

        assert_eq!(names(&vendors), vec!["Globex", "Acme Co"]);
        // one GET, one POST: no refetch after create
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn update_then_splice_keeps_single_entry() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let vendors = hook::<Vendor>(&transport, &notifier, "http://h/api/vendors");

        transport.respond(200, json!([{"name": "Acme Co", "phone": "1"}, {"name": "Globex"}]));
        block_on(vendors.list());

        transport.respond(200, json!({"vendor": {"name": "Acme Co", "phone": "2"}}));
        let edited: Vendor = serde_json::from_value(json!({"name": "Acme Co", "phone": "2"})).unwrap();
        let updated = block_on(vendors.update("Acme Co", &edited)).unwrap();
        vendors.update_in_list("Acme Co", updated);

        let items = vendors.items.get_untracked();
        assert_eq!(items.len(), 2);
        let acme: Vec<_> = items.iter().filter(|v| v.name == "Acme Co").collect();
        assert_eq!(acme.len(), 1);
        assert_eq!(acme[0].phone, "2");
    }

    #[test]
    fn remove_then_filter_drops_entity() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let sales = hook::<Sale>(&transport, &notifier, "http://h/api/sales");

        transport.respond(200, json!({"sales": [
            {"bill_id": "B-1", "inventory": "Main"},
            {"bill_id": "B-2", "inventory": "Main"}
        ]}));
        block_on(sales.list());

        transport.respond(200, json!({}));
        assert!(block_on(sales.remove("B-1")));
        sales.remove_from_list("B-1");

        let keys: Vec<String> = sales.items.get_untracked().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["B-2"]);
    }

    #[test]
    fn failed_calls_leave_list_untouched_and_toast_once_each() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let vendors = hook::<Vendor>(&transport, &notifier, "http://h/api/vendors");

        transport.respond(200, json!([{"name": "Acme Co"}]));
        block_on(vendors.list());
        let before = vendors.items.get_untracked();

        transport.fail("Failed to send request: offline");
        block_on(vendors.list());
        assert_eq!(vendors.items.get_untracked(), before);
        assert_eq!(notifier.errors().len(), 1);

        transport.respond(500, json!({"message": "boom"}));
        let draft: Vendor = serde_json::from_value(json!({"name": "Globex"})).unwrap();
        assert!(block_on(vendors.create(&draft)).is_none());
        assert_eq!(vendors.items.get_untracked(), before);
        assert_eq!(notifier.errors().len(), 2);

        transport.respond(404, json!({}));
        assert!(!block_on(vendors.remove("Acme Co")));
        assert_eq!(vendors.items.get_untracked(), before);
        assert_eq!(notifier.errors().len(), 3);
        assert_eq!(notifier.events().len(), 3);
        assert!(!vendors.loading.get_untracked());
    }

    #[test]
    fn failed_update_and_get_one_leave_list_untouched() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let vendors = hook::<Vendor>(&transport, &notifier, "http://h/api/vendors");

        transport.respond(200, json!([{"name": "Acme Co", "phone": "1"}]));
        block_on(vendors.list());
        let before = vendors.items.get_untracked();

        transport.respond(422, json!({"message": "Phone is invalid"}));
        let edited: Vendor = serde_json::from_value(json!({"name": "Acme Co", "phone": "x"})).unwrap();
        assert!(block_on(vendors.update("Acme Co", &edited)).is_none());
        assert_eq!(vendors.items.get_untracked(), before);
        assert_eq!(notifier.errors(), vec!["Phone is invalid".to_string()]);

        transport.respond_empty(404);
        assert!(block_on(vendors.get_one("Globex")).is_none());
        assert_eq!(vendors.items.get_untracked(), before);
        assert_eq!(notifier.errors().len(), 2);
        assert_eq!(notifier.events().len(), 2);
    }

    #[test]
    fn customers_are_tracked_by_server_id() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let customers = hook::<Customer>(&transport, &notifier, "http://h/api/customers");
        let jane_id = "5f0c6a52-8f0e-4a52-9a43-2f5d2b8e3c11";
        let john_id = "0b7f3c1e-2a9d-4e55-8c1a-6d2e9f4b7a30";

        let draft = |name: &str| -> Customer {
            serde_json::from_value(json!({"name": name, "phone": "555"})).unwrap()
        };

        transport.respond(201, json!({"customer": {"id": jane_id, "name": "Jane"}}));
        transport.respond(201, json!({"customer": {"id": john_id, "name": "John"}}));
        for name in ["Jane", "John"] {
            let created = block_on(customers.create(&draft(name))).unwrap();
            customers.add(created);
        }
        let keys: Vec<String> = customers.items.get_untracked().iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec![jane_id, john_id]);

        // edit keeps the id, so an empty 200 echoes a keyed entity back
        let mut edited = customers.items.get_untracked()[0].clone();
        edited.phone = "556".into();
        transport.respond_empty(200);
        let updated = block_on(customers.update(jane_id, &edited)).unwrap();
        customers.update_in_list(jane_id, updated);

        transport.respond(200, json!({}));
        assert!(block_on(customers.remove(john_id)));
        customers.remove_from_list(john_id);

        let items = customers.items.get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].phone, "556");

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls[2], format!("http://h/api/customers/{}", jane_id));
        assert_eq!(urls[3], format!("http://h/api/customers/{}", john_id));
    }

    #[test]
    fn keyless_create_does_not_replace_an_existing_customer() {
        let owner = Owner::new();
        owner.set();
        let transport = Rc::new(MockTransport::new());
        let notifier = RecordingNotifier::default();
        let customers = hook::<Customer>(&transport, &notifier, "http://h/api/customers");

        transport.respond(200, json!([{"id": "5f0c6a52-8f0e-4a52-9a43-2f5d2b8e3c11", "name": "Jane"}]));
        block_on(customers.list());
        let before = customers.items.get_untracked();

        transport.respond_empty(201);
        let draft: Customer = serde_json::from_value(json!({"name": "John"})).unwrap();
        assert!(block_on(customers.create(&draft)).is_none());

        assert_eq!(customers.items.get_untracked(), before);
        assert_eq!(notifier.errors().len(), 1);
        assert_eq!(notifier.events().len(), 1);
    }
}
