//! In-memory record store.
//!
//! Holds the four record collections served by the site: contacts,
//! shipments, blog posts, and job applications. Nothing is persisted; the
//! store lives as long as the process and is re-seeded on startup.
//!
//! # Concurrency
//!
//! Each collection sits behind its own `tokio::sync::RwLock`. Every operation
//! takes exactly one lock for its whole duration, so creates, lookups, and
//! status updates are atomic with respect to each other.
//!
//! # Keys
//!
//! | Collection | Keyed by |
//! |---|---|
//! | contacts | generated id |
//! | shipments | tracking number (last write wins) |
//! | blog posts | insertion order; looked up by slug |
//! | job applications | generated id |

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use gls_core::{ContactId, JobApplicationId, ShipmentStatus};
use tokio::sync::RwLock;

use crate::models::{
    BlogPost, Contact, JobApplication, NewBlogPost, NewContact, NewJobApplication, NewShipment,
    Shipment,
};
use crate::seed;

/// Number of records in each collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCounts {
    pub contacts: usize,
    pub shipments: usize,
    pub blog_posts: usize,
    pub job_applications: usize,
}

/// In-memory store for all site records.
#[derive(Debug, Default)]
pub struct RecordStore {
    contacts: RwLock<HashMap<ContactId, Contact>>,
    shipments: RwLock<HashMap<String, Shipment>>,
    blog_posts: RwLock<Vec<BlogPost>>,
    job_applications: RwLock<HashMap<JobApplicationId, JobApplication>>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the sample shipments and blog posts
    /// used by the tracking and blog pages.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();

        let shipments = store.shipments.get_mut();
        for new in seed::sample_shipments() {
            let shipment = Shipment::create(new, Utc::now());
            shipments.insert(shipment.tracking_number.clone(), shipment);
        }
        let shipment_count = shipments.len();

        let posts = store.blog_posts.get_mut();
        for new in seed::sample_blog_posts() {
            posts.push(BlogPost::create(new, Utc::now()));
        }
        let post_count = posts.len();

        tracing::info!(
            shipments = shipment_count,
            blog_posts = post_count,
            "Record store seeded with sample data"
        );
        store
    }

    // =========================================================================
    // Contacts
    // =========================================================================

    /// Store a contact form submission.
    pub async fn create_contact(&self, new: NewContact) -> Contact {
        let contact = Contact::create(new, Utc::now());
        self.contacts
            .write()
            .await
            .insert(contact.id, contact.clone());
        contact
    }

    /// All contact submissions, in no particular order.
    pub async fn contacts(&self) -> Vec<Contact> {
        self.contacts.read().await.values().cloned().collect()
    }

    // =========================================================================
    // Shipments
    // =========================================================================

    /// Store a shipment under its tracking number.
    ///
    /// A shipment already stored under the same tracking number is replaced.
    pub async fn create_shipment(&self, new: NewShipment) -> Shipment {
        let shipment = Shipment::create(new, Utc::now());
        let replaced = self
            .shipments
            .write()
            .await
            .insert(shipment.tracking_number.clone(), shipment.clone());

        if let Some(previous) = replaced {
            tracing::warn!(
                tracking_number = %shipment.tracking_number,
                previous_id = %previous.id,
                "Shipment replaced an existing record with the same tracking number"
            );
        }
        shipment
    }

    /// All shipments, in no particular order.
    pub async fn shipments(&self) -> Vec<Shipment> {
        self.shipments.read().await.values().cloned().collect()
    }

    /// Look up a shipment by its tracking number (exact match).
    pub async fn shipment_by_tracking_number(&self, tracking_number: &str) -> Option<Shipment> {
        self.shipments.read().await.get(tracking_number).cloned()
    }

    /// Update a shipment's status.
    ///
    /// Overwrites the status (any label, not just the known five), replaces
    /// the current location only when a non-empty `current_location` is
    /// given, and refreshes `last_update`.
    /// Returns `None` without touching the store when the tracking number is
    /// unknown.
    pub async fn update_shipment_status(
        &self,
        tracking_number: &str,
        status: ShipmentStatus,
        current_location: Option<String>,
    ) -> Option<Shipment> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments.get_mut(tracking_number)?;
        shipment.apply_status(status, current_location, Utc::now());
        tracing::info!(
            tracking_number = %tracking_number,
            status = %shipment.status,
            "Shipment status updated"
        );
        Some(shipment.clone())
    }

    // =========================================================================
    // Blog posts
    // =========================================================================

    /// Publish a blog post now.
    pub async fn create_blog_post(&self, new: NewBlogPost) -> BlogPost {
        self.create_blog_post_at(new, Utc::now()).await
    }

    /// Publish a blog post with an explicit publication time (back-dated
    /// imports, scheduled posts).
    pub async fn create_blog_post_at(
        &self,
        new: NewBlogPost,
        published_at: DateTime<Utc>,
    ) -> BlogPost {
        let post = BlogPost::create(new, published_at);
        self.blog_posts.write().await.push(post.clone());
        post
    }

    /// All blog posts, newest `published_at` first.
    ///
    /// Posts with equal timestamps are ordered most recently inserted first.
    pub async fn blog_posts(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self
            .blog_posts
            .read()
            .await
            .iter()
            .rev()
            .cloned()
            .collect();
        // Stable sort keeps the reversed insertion order among ties.
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    /// Look up a blog post by slug.
    ///
    /// Slugs are not checked for uniqueness; the earliest inserted match wins.
    pub async fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.blog_posts
            .read()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
    }

    // =========================================================================
    // Job applications
    // =========================================================================

    /// Store a job application.
    pub async fn create_job_application(&self, new: NewJobApplication) -> JobApplication {
        let application = JobApplication::create(new, Utc::now());
        self.job_applications
            .write()
            .await
            .insert(application.id, application.clone());
        application
    }

    /// All job applications, in no particular order.
    pub async fn job_applications(&self) -> Vec<JobApplication> {
        self.job_applications
            .read()
            .await
            .values()
            .cloned()
            .collect()
    }

    /// Record counts for each collection.
    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            contacts: self.contacts.read().await.len(),
            shipments: self.shipments.read().await.len(),
            blog_posts: self.blog_posts.read().await.len(),
            job_applications: self.job_applications.read().await.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, TimeZone};
    use gls_core::Email;

    use super::*;

    fn new_shipment(tracking_number: &str) -> NewShipment {
        NewShipment {
            tracking_number: tracking_number.to_string(),
            status: ShipmentStatus::Processing,
            origin: "A".to_string(),
            destination: "B".to_string(),
            estimated_delivery: None,
            current_location: None,
        }
    }

    fn new_post(slug: &str) -> NewBlogPost {
        NewBlogPost {
            title: format!("Post {slug}"),
            slug: slug.to_string(),
            excerpt: "Excerpt".to_string(),
            content: "Content".to_string(),
            category: "News".to_string(),
        }
    }

    fn new_contact(name: &str) -> NewContact {
        NewContact {
            name: name.to_string(),
            email: Email::parse("visitor@example.com").unwrap(),
            phone: Some(String::new()),
            company: None,
            service: Some("Air Cargo".to_string()),
            message: "Please call me back.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let store = RecordStore::new();
        let mut ids = HashSet::new();
        for i in 0..50 {
            let contact = store.create_contact(new_contact(&format!("Visitor {i}"))).await;
            assert!(!contact.id.to_string().is_empty());
            assert!(ids.insert(contact.id));
        }
        assert_eq!(store.contacts().await.len(), 50);
    }

    #[tokio::test]
    async fn test_create_contact_normalizes_optionals() {
        let store = RecordStore::new();
        let contact = store.create_contact(new_contact("Jane")).await;
        assert_eq!(contact.phone, None);
        assert_eq!(contact.company, None);
        assert_eq!(contact.service.as_deref(), Some("Air Cargo"));
    }

    #[tokio::test]
    async fn test_shipment_lookup_after_create() {
        let store = RecordStore::new();
        store.create_shipment(new_shipment("GLS123")).await;

        let found = store.shipment_by_tracking_number("GLS123").await.unwrap();
        assert_eq!(found.tracking_number, "GLS123");
    }

    #[tokio::test]
    async fn test_unknown_tracking_number_is_absent() {
        let store = RecordStore::seeded();
        assert!(store.shipment_by_tracking_number("GLS000000000").await.is_none());
        // Lookup is exact: no case folding.
        assert!(store.shipment_by_tracking_number("gls001234567").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_tracking_number_overwrites() {
        let store = RecordStore::new();
        let first = store.create_shipment(new_shipment("GLS1")).await;
        let mut second_input = new_shipment("GLS1");
        second_input.status = ShipmentStatus::Shipped;
        let second = store.create_shipment(second_input).await;

        assert_ne!(first.id, second.id);
        let shipments = store.shipments().await;
        assert_eq!(shipments.len(), 1);
        assert_eq!(shipments[0].id, second.id);
        assert_eq!(shipments[0].status, ShipmentStatus::Shipped);
    }

    #[tokio::test]
    async fn test_update_status_on_seeded_shipment() {
        let store = RecordStore::seeded();
        let before = store
            .shipment_by_tracking_number("GLS001234567")
            .await
            .unwrap();

        let updated = store
            .update_shipment_status("GLS001234567", ShipmentStatus::Delivered, None)
            .await
            .unwrap();

        assert_eq!(updated.status, ShipmentStatus::Delivered);
        assert_eq!(updated.current_location, before.current_location);
        assert!(updated.last_update >= before.last_update);
        assert_eq!(
            store.shipment_by_tracking_number("GLS001234567").await,
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_status_unknown_leaves_store_unchanged() {
        let store = RecordStore::seeded();
        let mut before = store.shipments().await;

        let result = store
            .update_shipment_status("GLS-NOPE", ShipmentStatus::Delivered, Some("Nowhere".into()))
            .await;
        assert!(result.is_none());

        let mut after = store.shipments().await;
        before.sort_by(|a, b| a.tracking_number.cmp(&b.tracking_number));
        after.sort_by(|a, b| a.tracking_number.cmp(&b.tracking_number));
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_tracking_scenario() {
        let store = RecordStore::new();
        store.create_shipment(new_shipment("GLS999")).await;

        let created = store.shipment_by_tracking_number("GLS999").await.unwrap();
        assert_eq!(created.status, ShipmentStatus::Processing);
        assert_eq!(created.current_location, None);

        store
            .update_shipment_status("GLS999", ShipmentStatus::Shipped, Some("Port X".into()))
            .await
            .unwrap();

        let shipped = store.shipment_by_tracking_number("GLS999").await.unwrap();
        assert_eq!(shipped.status, ShipmentStatus::Shipped);
        assert_eq!(shipped.current_location.as_deref(), Some("Port X"));
        assert_eq!(shipped.id, created.id);
    }

    #[tokio::test]
    async fn test_unlisted_status_is_stored_and_updated() {
        let store = RecordStore::new();
        let mut input = new_shipment("GLS500");
        input.status = ShipmentStatus::from_label("Awaiting Pickup");
        let created = store.create_shipment(input).await;
        assert_eq!(created.status.label(), "Awaiting Pickup");

        let updated = store
            .update_shipment_status(
                "GLS500",
                ShipmentStatus::from_label("Out for Delivery"),
                Some("Local Depot".into()),
            )
            .await
            .unwrap();
        assert_eq!(
            updated.status,
            ShipmentStatus::Other("Out for Delivery".to_string())
        );

        let found = store.shipment_by_tracking_number("GLS500").await.unwrap();
        assert_eq!(found.status.label(), "Out for Delivery");
        assert_eq!(found.current_location.as_deref(), Some("Local Depot"));
    }

    #[tokio::test]
    async fn test_optional_text_is_stored_verbatim() {
        let store = RecordStore::new();
        let mut input = new_shipment("GLS600");
        input.current_location = Some("  Port X  ".to_string());
        input.estimated_delivery = Some(String::new());
        let created = store.create_shipment(input).await;
        assert_eq!(created.current_location.as_deref(), Some("  Port X  "));
        assert_eq!(created.estimated_delivery, None);

        // An empty location leaves the old one; whitespace is a real value.
        let kept = store
            .update_shipment_status("GLS600", ShipmentStatus::Shipped, Some(String::new()))
            .await
            .unwrap();
        assert_eq!(kept.current_location.as_deref(), Some("  Port X  "));

        let replaced = store
            .update_shipment_status("GLS600", ShipmentStatus::Shipped, Some("  ".into()))
            .await
            .unwrap();
        assert_eq!(replaced.current_location.as_deref(), Some("  "));
    }

    #[tokio::test]
    async fn test_blog_posts_newest_first() {
        let store = RecordStore::new();
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

        store
            .create_blog_post_at(new_post("middle"), base + Duration::days(1))
            .await;
        store
            .create_blog_post_at(new_post("newest"), base + Duration::days(2))
            .await;
        store.create_blog_post_at(new_post("oldest"), base).await;

        let slugs: Vec<String> = store
            .blog_posts()
            .await
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_blog_posts_tie_breaks_on_insertion() {
        let store = RecordStore::new();
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        store.create_blog_post_at(new_post("first"), at).await;
        store.create_blog_post_at(new_post("second"), at).await;

        let posts = store.blog_posts().await;
        assert_eq!(posts[0].slug, "second");
        assert_eq!(posts[1].slug, "first");
    }

    #[tokio::test]
    async fn test_blog_post_by_slug() {
        let store = RecordStore::seeded();
        let post = store
            .blog_post_by_slug("future-ecommerce-logistics-trends")
            .await
            .unwrap();
        assert_eq!(post.category, "E-commerce");
        assert!(store.blog_post_by_slug("no-such-post").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_returns_first_inserted() {
        let store = RecordStore::new();
        let first = store.create_blog_post(new_post("dup")).await;
        store.create_blog_post(new_post("dup")).await;

        let found = store.blog_post_by_slug("dup").await.unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(store.blog_posts().await.len(), 2);
    }

    #[tokio::test]
    async fn test_job_applications() {
        let store = RecordStore::new();
        let application = store
            .create_job_application(NewJobApplication {
                position: "Customs Broker".to_string(),
                name: "Alex".to_string(),
                email: Email::parse("alex@example.com").unwrap(),
                phone: None,
                resume: Some("https://example.com/alex.pdf".to_string()),
                cover_letter: Some("   ".to_string()),
            })
            .await;

        assert_eq!(application.cover_letter, None);
        assert_eq!(store.job_applications().await, vec![application]);
    }

    #[tokio::test]
    async fn test_seeded_counts() {
        let counts = RecordStore::seeded().counts().await;
        assert_eq!(
            counts,
            StoreCounts {
                contacts: 0,
                shipments: 3,
                blog_posts: 3,
                job_applications: 0,
            }
        );
        assert_eq!(RecordStore::new().counts().await.shipments, 0);
    }
}
