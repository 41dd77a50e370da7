//! Blog post commands.
//!
//! # Usage
//!
//! ```bash
//! atelier posts list --search rust --page 2
//! atelier posts get my-first-post
//! atelier posts create -t "Title" -c "Body" --publish
//! atelier posts toggle-publish my-first-post
//! ```

use atelier_client::{CmsClient, PostDraft, PostQuery};
use atelier_core::Slug;

use super::{CommandError, into_result, print_json, require_session};

/// List posts, optionally filtered.
pub async fn list(
    client: &CmsClient,
    search: Option<String>,
    author: Option<String>,
    page: Option<u32>,
) -> Result<(), CommandError> {
    let query = PostQuery {
        search,
        author,
        page,
    };
    let posts = into_result(client.posts().list(&query).await)?;
    println!("{} post(s)", posts.count);
    for post in &posts.results {
        let state = if post.is_published { "published" } else { "draft" };
        println!(
            "  {}  [{}]  {} ({})",
            post.slug,
            state,
            post.title,
            post.author.email
        );
    }
    Ok(())
}

/// Show a single post.
pub async fn get(client: &CmsClient, slug: &Slug) -> Result<(), CommandError> {
    let post = into_result(client.posts().get(slug).await)?;
    print_json(&post)
}

/// Create a post from title and content.
pub async fn create(
    client: &CmsClient,
    title: String,
    content: String,
    publish: bool,
) -> Result<(), CommandError> {
    require_session(client)?;
    let draft = PostDraft {
        is_published: publish,
        ..PostDraft::new(title, content)
    };
    let post = into_result(client.posts().create(&draft).await)?;
    println!("Created {} ({})", post.slug, post.title);
    Ok(())
}

/// Replace a post's title and content.
pub async fn update(
    client: &CmsClient,
    slug: &Slug,
    title: String,
    content: String,
    publish: bool,
) -> Result<(), CommandError> {
    require_session(client)?;
    let draft = PostDraft {
        title,
        slug: None,
        content,
        is_published: publish,
    };
    let post = into_result(client.posts().update(slug, &draft).await)?;
    println!("Updated {}", post.slug);
    Ok(())
}

/// Delete a post.
pub async fn delete(client: &CmsClient, slug: &Slug) -> Result<(), CommandError> {
    require_session(client)?;
    into_result(client.posts().delete(slug).await)?;
    println!("Deleted {slug}");
    Ok(())
}

/// List the logged-in user's own posts.
pub async fn mine(client: &CmsClient) -> Result<(), CommandError> {
    require_session(client)?;
    let posts = into_result(client.posts().my_posts().await)?;
    for post in &posts {
        let state = if post.is_published { "published" } else { "draft" };
        println!("  {}  [{}]  {}", post.slug, state, post.title);
    }
    Ok(())
}

/// Flip a post's publish state.
pub async fn toggle_publish(client: &CmsClient, slug: &Slug) -> Result<(), CommandError> {
    require_session(client)?;
    let post = into_result(client.posts().toggle_publish(slug).await)?;
    let state = if post.is_published { "published" } else { "unpublished" };
    println!("{} is now {state}", post.slug);
    Ok(())
}
