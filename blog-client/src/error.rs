use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
///
/// Сбои транспорта не классифицируются: сетевая ошибка, статус не 2xx и
/// некорректное тело ответа приходят вызывающему коду как `Http` без изменений.
pub enum BlogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Пустой slug.
    #[error("slug must not be empty")]
    InvalidSlug,

    /// Некорректный базовый URL API.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    /// HTTP-статус ответа, если транспорт его зафиксировал.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            _ => None,
        }
    }
}
