use blog_client::{BlogClientResult, Post, PostService, Slug};
use chrono::DateTime;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M %:z";

/// Страница поста. Создаётся роутером при первом переходе на `/posts/:slug`.
#[derive(Debug)]
pub(crate) struct PostDetailView {
    date_format: &'static str,
}

impl PostDetailView {
    pub(crate) fn load() -> Self {
        debug!("post-detail view loaded");
        Self {
            date_format: DATE_FORMAT,
        }
    }

    pub(crate) async fn render(&self, posts: &PostService, slug: &Slug) -> BlogClientResult<String> {
        let post = posts.get_post_by_slug(slug).await?;
        Ok(self.render_post(&post))
    }

    pub(crate) fn render_post(&self, post: &Post) -> String {
        let mut lines = vec![
            post.title.clone(),
            format!("slug: {}", post.slug),
            format!("author: {}", post.author.username),
            format!("status: {}", post.status),
        ];
        if let Some(excerpt) = &post.excerpt {
            lines.push(format!("excerpt: {excerpt}"));
        }
        lines.push(format!("published_at: {}", self.display_instant(&post.published_at)));
        lines.push(format!("created_at: {}", self.display_instant(&post.created_at)));
        lines.push(format!("updated_at: {}", self.display_instant(&post.updated_at)));

        format!("{}\n\n{}", lines.join("\n"), post.content)
    }

    /// RFC 3339 форматируется, всё остальное выводится как прислал бэкенд.
    fn display_instant(&self, raw: &str) -> String {
        DateTime::parse_from_rfc3339(raw)
            .map(|instant| instant.format(self.date_format).to_string())
            .unwrap_or_else(|_| raw.to_string())
    }
}
