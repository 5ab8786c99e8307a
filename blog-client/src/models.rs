use serde::{Deserialize, Serialize};

use crate::error::{BlogClientError, BlogClientResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Автор поста в том виде, в котором его отдаёт бэкенд.
pub struct Author {
    /// Идентификатор автора.
    pub id: String,
    /// Отображаемое имя.
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Статус публикации поста.
pub enum PostStatus {
    /// Черновик.
    Draft,
    /// Опубликован.
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => f.write_str("draft"),
            Self::Published => f.write_str("published"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: String,
    /// Автор (встроенное значение, не ссылка).
    pub author: Author,
    /// Заголовок поста.
    pub title: String,
    /// Уникальный URL-идентификатор, по которому открывается страница поста.
    pub slug: String,
    /// Полное содержимое поста.
    pub content: String,
    /// Краткое описание. `None`, если бэкенд его не прислал.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Статус публикации.
    pub status: PostStatus,
    /// Момент публикации в том виде, в котором его прислал бэкенд.
    pub published_at: String,
    /// Момент создания поста.
    pub created_at: String,
    /// Момент последнего обновления поста.
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Непустой slug поста.
///
/// Значение передаётся в путь запроса как есть, без обрезки пробелов и
/// без дополнительного кодирования.
pub struct Slug(String);

impl Slug {
    /// Создаёт slug, отклоняя пустую строку.
    pub fn new(value: impl Into<String>) -> BlogClientResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(BlogClientError::InvalidSlug);
        }
        Ok(Self(value))
    }

    /// Возвращает slug как строку.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = BlogClientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Slug {
    type Error = BlogClientError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
