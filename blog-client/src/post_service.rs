use crate::api_client::ApiClient;
use crate::error::BlogClientResult;
use crate::models::{Post, Slug};

const POSTS_PATH: &str = "/posts";

#[derive(Debug, Clone)]
/// Слой доступа к постам: переводит запросы в HTTP-вызовы `ApiClient`.
///
/// Каждый вызов делает ровно один запрос. Результаты не кешируются,
/// ошибки транспорта возвращаются как есть.
pub struct PostService {
    api: ApiClient,
}

impl PostService {
    /// Создаёт сервис поверх готового HTTP-транспорта.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Возвращает список постов в том порядке, в котором его отдал бэкенд.
    pub async fn list_posts(&self) -> BlogClientResult<Vec<Post>> {
        self.api.get_json(POSTS_PATH).await
    }

    /// Получает пост по slug.
    pub async fn get_post_by_slug(&self, slug: &Slug) -> BlogClientResult<Post> {
        self.api.get_json(&post_path(slug)).await
    }
}

fn post_path(slug: &Slug) -> String {
    format!("{POSTS_PATH}/{slug}")
}
