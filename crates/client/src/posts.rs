//! Blog post operations.
//!
//! Posts are addressed by slug. Updates are full replaces (`PUT`); publish
//! state is toggled through a dedicated action. List reads are public;
//! everything else requires a session.

use atelier_core::Slug;

use crate::models::{Paginated, Post, PostDraft, PostSummary};
use crate::outcome::Outcome;
use crate::transport::Transport;

/// Filters for the post list endpoint.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Case-insensitive match against title and content.
    pub search: Option<String>,
    /// Filter by author email.
    pub author: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
}

impl PostQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(author) = &self.author {
            params.push(("author", author.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params
    }
}

/// Client for post CRUD and publish actions.
pub struct PostsClient<'a> {
    transport: &'a Transport,
}

impl<'a> PostsClient<'a> {
    pub(crate) const fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List posts, optionally filtered, in the backend's pagination
    /// envelope. Unauthenticated callers only see published posts.
    pub async fn list(&self, query: &PostQuery) -> Outcome<Paginated<PostSummary>> {
        self.transport
            .run(
                self.transport.get("/posts/").query(&query.params()),
                "Could not load posts",
            )
            .await
    }

    /// Fetch a single post by slug.
    pub async fn get(&self, slug: &Slug) -> Outcome<Post> {
        self.transport
            .run(
                self.transport.get(&format!("/posts/{slug}/")),
                "Post not found",
            )
            .await
    }

    /// Create a post. The backend may adjust the suggested slug to keep
    /// slugs unique.
    pub async fn create(&self, draft: &PostDraft) -> Outcome<Post> {
        self.transport
            .run(
                self.transport.post_json("/posts/", draft),
                "Could not create post",
            )
            .await
    }

    /// Replace a post's content (full update).
    pub async fn update(&self, slug: &Slug, draft: &PostDraft) -> Outcome<Post> {
        self.transport
            .run(
                self.transport.put_json(&format!("/posts/{slug}/"), draft),
                "Could not update post",
            )
            .await
    }

    /// Delete a post.
    pub async fn delete(&self, slug: &Slug) -> Outcome<()> {
        self.transport
            .run_message(
                self.transport.delete(&format!("/posts/{slug}/")),
                "Could not delete post",
            )
            .await
    }

    /// List the logged-in user's own posts, unwrapped from the pagination
    /// envelope into a flat collection.
    pub async fn my_posts(&self) -> Outcome<Vec<PostSummary>> {
        let outcome: Outcome<Paginated<PostSummary>> = self
            .transport
            .run(
                self.transport.get("/posts/my_posts/"),
                "Could not load your posts",
            )
            .await;
        outcome.map(|page| page.results)
    }

    /// Toggle a post's publish state, returning the updated post.
    ///
    /// Toggling twice returns the post to its original state.
    pub async fn toggle_publish(&self, slug: &Slug) -> Outcome<Post> {
        self.transport
            .run_field(
                self.transport.post(&format!("/posts/{slug}/toggle_publish/")),
                "post",
                "Could not change publish state",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_empty_by_default() {
        assert!(PostQuery::default().params().is_empty());
    }

    #[test]
    fn test_query_params_full() {
        let query = PostQuery {
            search: Some("rust".to_owned()),
            author: Some("ana@atelier.studio".to_owned()),
            page: Some(2),
        };
        assert_eq!(
            query.params(),
            vec![
                ("search", "rust".to_owned()),
                ("author", "ana@atelier.studio".to_owned()),
                ("page", "2".to_owned()),
            ]
        );
    }
}
