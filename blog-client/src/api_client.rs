use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};

const USER_AGENT: &str = concat!("blog-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
/// Настройки HTTP-транспорта.
pub struct ApiConfig {
    /// Базовый URL API, например `http://127.0.0.1:8080` или `https://blog.example/api`.
    pub base_url: String,
    /// Таймаут установки соединения.
    pub connect_timeout: Duration,
    /// Общий таймаут запроса.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Настройки с таймаутами по умолчанию (5 s на соединение, 15 s на запрос).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-транспорт поверх `reqwest`, через который ходит слой доступа к постам.
///
/// Базовый URL и таймауты живут здесь; вызывающий код передаёт только путь.
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Создаёт клиент, проверяя базовый URL.
    pub fn new(config: ApiConfig) -> BlogClientResult<Self> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|err| BlogClientError::InvalidBaseUrl(format!("{}: {err}", config.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BlogClientError::InvalidBaseUrl(format!(
                "{}: unsupported scheme",
                config.base_url
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(BlogClientError::InvalidBaseUrl(format!(
                "{}: query and fragment are not allowed",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    /// Базовый URL, с которым создан клиент.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Выполняет один GET-запрос и декодирует JSON-тело ответа.
    ///
    /// Статус не 2xx превращается в ошибку самого `reqwest`, повторов нет.
    pub(crate) async fn get_json<T>(&self, path: &str) -> BlogClientResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "sending GET request");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.json::<T>().await?;
        Ok(body)
    }
}
