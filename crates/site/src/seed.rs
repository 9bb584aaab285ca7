//! Sample records loaded into the store on startup.
//!
//! The tracking page advertises `GLS001234567` as an example number, and the
//! blog index needs something to list before any post is published.

use gls_core::ShipmentStatus;

use crate::models::{NewBlogPost, NewShipment};

/// Sample shipments for the tracking demo.
#[must_use]
pub fn sample_shipments() -> Vec<NewShipment> {
    vec![
        NewShipment {
            tracking_number: "GLS001234567".to_string(),
            status: ShipmentStatus::InTransit,
            origin: "Shanghai, China".to_string(),
            destination: "Los Angeles, USA".to_string(),
            estimated_delivery: Some("2025-09-15".to_string()),
            current_location: Some("Hong Kong".to_string()),
        },
        NewShipment {
            tracking_number: "GLS007890123".to_string(),
            status: ShipmentStatus::Delivered,
            origin: "Hamburg, Germany".to_string(),
            destination: "New York, USA".to_string(),
            estimated_delivery: Some("2025-09-08".to_string()),
            current_location: Some("New York Port".to_string()),
        },
        NewShipment {
            tracking_number: "GLS004567890".to_string(),
            status: ShipmentStatus::CustomsClearance,
            origin: "Tokyo, Japan".to_string(),
            destination: "Seattle, USA".to_string(),
            estimated_delivery: Some("2025-09-18".to_string()),
            current_location: Some("Seattle Customs".to_string()),
        },
    ]
}

/// Sample blog posts, oldest first.
#[must_use]
pub fn sample_blog_posts() -> Vec<NewBlogPost> {
    vec![
        NewBlogPost {
            title: "Understanding International Shipping Regulations in 2025".to_string(),
            slug: "international-shipping-regulations-2025".to_string(),
            excerpt: "Stay compliant with the latest international shipping regulations and avoid costly delays.".to_string(),
            content: "International shipping regulations continue to evolve in 2025...".to_string(),
            category: "Regulations".to_string(),
        },
        NewBlogPost {
            title: "How Supply Chain Optimization Can Reduce Shipping Costs".to_string(),
            slug: "supply-chain-optimization-reduce-costs".to_string(),
            excerpt: "Learn proven strategies to optimize your supply chain and cut shipping expenses.".to_string(),
            content: "Supply chain optimization is crucial for businesses looking to reduce costs...".to_string(),
            category: "Supply Chain".to_string(),
        },
        NewBlogPost {
            title: "The Future of E-commerce Logistics: Trends to Watch".to_string(),
            slug: "future-ecommerce-logistics-trends".to_string(),
            excerpt: "Discover the emerging trends shaping the future of e-commerce logistics.".to_string(),
            content: "E-commerce logistics is rapidly evolving with new technologies...".to_string(),
            category: "E-commerce".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_keys_are_unique() {
        let tracking: HashSet<String> = sample_shipments()
            .into_iter()
            .map(|s| s.tracking_number)
            .collect();
        assert_eq!(tracking.len(), 3);

        let slugs: HashSet<String> = sample_blog_posts().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), 3);
    }
}
