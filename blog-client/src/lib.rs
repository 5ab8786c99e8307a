//! Клиентская библиотека блога: модель поста и доступ к REST API постов.
//!
//! - [`ApiClient`]: HTTP-транспорт (`reqwest`) с базовым URL и таймаутами;
//! - [`PostService`]: две операции над постами: список и пост по slug.
//!
//! Ошибки транспорта не переводятся в собственные варианты и приходят
//! вызывающему коду как [`BlogClientError::Http`].
#![warn(missing_docs)]

mod api_client;
mod error;
mod models;
mod post_service;

pub use api_client::{ApiClient, ApiConfig};
pub use error::{BlogClientError, BlogClientResult};
pub use models::{Author, Post, PostStatus, Slug};
pub use post_service::PostService;
