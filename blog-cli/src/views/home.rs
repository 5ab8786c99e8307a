use blog_client::{BlogClientResult, Post, PostService};

use crate::router::{POST_DETAIL, Router};

/// Главная страница: список постов со ссылками на страницы постов.
#[derive(Debug, Default)]
pub(crate) struct HomeView;

impl HomeView {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn render(
        &self,
        posts: &PostService,
        router: &Router,
    ) -> BlogClientResult<String> {
        let posts = posts.list_posts().await?;
        Ok(render_post_list(&posts, router))
    }
}

pub(crate) fn render_post_list(posts: &[Post], router: &Router) -> String {
    if posts.is_empty() {
        return "Постов пока нет".to_string();
    }

    let mut lines = vec![format!("Постов: {}", posts.len())];
    for post in posts {
        let href = router
            .href(POST_DETAIL, &[("slug", post.slug.as_str())])
            .unwrap_or_default();
        lines.push(format!("- {} [{}] {href}", post.title, post.status));
        if let Some(excerpt) = &post.excerpt {
            lines.push(format!("  {excerpt}"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Resolved;
    use crate::test_support::{MockBackend, post_service};
    use blog_client::BlogClientError;

    fn post(slug: &str, excerpt: Option<&str>) -> Post {
        let mut value = serde_json::json!({
            "id": format!("id-{slug}"),
            "slug": slug,
            "title": format!("Title {slug}"),
            "author": {"id": "a1", "username": "alice"},
            "content": "...",
            "status": "published",
            "published_at": "2024-01-01T00:00:00Z",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        });
        if let Some(excerpt) = excerpt {
            value["excerpt"] = serde_json::Value::String(excerpt.to_string());
        }
        serde_json::from_value(value).expect("post fixture must decode")
    }

    #[test]
    fn empty_list_has_placeholder() {
        let router = Router::new("/");
        assert_eq!(render_post_list(&[], &router), "Постов пока нет");
    }

    #[test]
    fn posts_keep_backend_order_and_link_to_detail() {
        let router = Router::new("/");
        let posts = vec![post("second", None), post("first", Some("Кратко"))];

        let page = render_post_list(&posts, &router);
        assert_eq!(
            page,
            "Постов: 2\n\
             - Title second [published] /posts/second\n\
             - Title first [published] /posts/first\n  Кратко"
        );
    }

    #[test]
    fn links_respect_router_base() {
        let router = Router::new("/blog/");
        let page = render_post_list(&[post("hello-world", None)], &router);
        assert!(page.contains("/blog/posts/hello-world"));
    }

    #[tokio::test]
    async fn render_fetches_collection_once() {
        let backend = MockBackend::spawn().await;
        let service = post_service(&backend.base_url);
        let router = Router::new("/");

        let Some(Resolved::Home(view)) = router.navigate("/") else {
            panic!("home route must match");
        };
        assert!(backend.requests().is_empty());

        let page = view.render(&service, &router).await.expect("render must succeed");
        assert_eq!(page, "Постов: 1\n- Hello [published] /posts/hello-world");
        assert_eq!(backend.requests(), vec!["/posts".to_string()]);
    }

    #[tokio::test]
    async fn render_passes_server_error_through() {
        let backend = MockBackend::spawn_failing().await;
        let service = post_service(&backend.base_url);
        let router = Router::new("/");

        let err = HomeView::new()
            .render(&service, &router)
            .await
            .expect_err("render must fail");

        assert!(matches!(err, BlogClientError::Http(_)));
        assert_eq!(err.status().map(|status| status.as_u16()), Some(500));
        assert_eq!(backend.requests(), vec!["/posts".to_string()]);
    }
}
