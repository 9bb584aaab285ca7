//! Blog posts.

use chrono::{DateTime, Utc};
use gls_core::BlogPostId;
use serde::{Deserialize, Serialize};

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    /// URL segment used by `/api/blog/{slug}`.
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
}

/// Fields supplied when creating a [`BlogPost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
}

impl BlogPost {
    pub(crate) fn create(new: NewBlogPost, published_at: DateTime<Utc>) -> Self {
        Self {
            id: BlogPostId::generate(),
            title: new.title,
            slug: new.slug,
            excerpt: new.excerpt,
            content: new.content,
            category: new.category,
            published_at,
        }
    }
}
