//! Таблица маршрутов клиента блога.
//!
//! Два именованных маршрута: `home` (`/`) и `post-detail` (`/posts/:slug`).
//! Страница поста создаётся при первом переходе на неё и дальше
//! переиспользуется. Маршрутизация не ходит в сеть: данные грузят страницы
//! при отрисовке. Для неизвестных путей обработчика нет.

mod deferred;
mod pattern;

use tracing::debug;

use crate::views::{HomeView, PostDetailView};
use deferred::Deferred;
use pattern::RoutePattern;

pub(crate) const HOME: &str = "home";
pub(crate) const POST_DETAIL: &str = "post-detail";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Loading {
    Eager,
    Deferred,
}

impl std::fmt::Display for Loading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eager => f.write_str("eager"),
            Self::Deferred => f.write_str("deferred"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Component {
    Home,
    PostDetail,
}

#[derive(Debug)]
struct RouteRecord {
    name: &'static str,
    pattern: RoutePattern,
    component: Component,
}

/// Описание маршрута для вывода таблицы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteInfo {
    pub(crate) name: &'static str,
    pub(crate) path: &'static str,
    pub(crate) loading: Loading,
}

/// Результат перехода: страница и параметры маршрута.
#[derive(Debug)]
pub(crate) enum Resolved<'a> {
    Home(&'a HomeView),
    PostDetail {
        view: &'a PostDetailView,
        slug: String,
    },
}

impl Resolved<'_> {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Home(_) => HOME,
            Self::PostDetail { .. } => POST_DETAIL,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Router {
    base: String,
    records: Vec<RouteRecord>,
    home: HomeView,
    post_detail: Deferred<PostDetailView>,
}

impl Router {
    /// Создаёт роутер с базовым путём истории (`/` или, например, `/blog/`).
    pub(crate) fn new(base: &str) -> Self {
        Self::with_post_detail_loader(base, PostDetailView::load)
    }

    fn with_post_detail_loader(base: &str, loader: fn() -> PostDetailView) -> Self {
        let records = vec![
            RouteRecord {
                name: HOME,
                pattern: RoutePattern::parse("/"),
                component: Component::Home,
            },
            RouteRecord {
                name: POST_DETAIL,
                pattern: RoutePattern::parse("/posts/:slug"),
                component: Component::PostDetail,
            },
        ];

        Self {
            base: normalize_base(base),
            records,
            home: HomeView::new(),
            post_detail: Deferred::new(loader),
        }
    }

    /// Находит страницу для адреса. `None` для путей вне базового пути и
    /// для путей без маршрута.
    pub(crate) fn navigate(&self, location: &str) -> Option<Resolved<'_>> {
        let path = self.strip_base(strip_query_and_fragment(location))?;

        let (record, params) = self
            .records
            .iter()
            .find_map(|record| record.pattern.matches(path).map(|params| (record, params)))?;
        debug!(route = record.name, %location, "route matched");

        let resolved = match record.component {
            Component::Home => Resolved::Home(&self.home),
            Component::PostDetail => {
                let slug = params.get("slug")?.to_string();
                if !self.post_detail.is_loaded() {
                    debug!(route = record.name, "loading deferred view");
                }
                Resolved::PostDetail {
                    view: self.post_detail.get(),
                    slug,
                }
            }
        };
        Some(resolved)
    }

    /// Строит адрес именованного маршрута с учётом базового пути.
    pub(crate) fn href(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let record = self.records.iter().find(|record| record.name == name)?;
        let path = record.pattern.build(params)?;
        Some(format!("{}{path}", self.base))
    }

    pub(crate) fn routes(&self) -> impl Iterator<Item = RouteInfo> + '_ {
        self.records.iter().map(|record| RouteInfo {
            name: record.name,
            path: record.pattern.as_str(),
            loading: match record.component {
                Component::Home => Loading::Eager,
                Component::PostDetail => Loading::Deferred,
            },
        })
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }

        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            return Some("/");
        }
        rest.starts_with('/').then_some(rest)
    }
}

/// `/` и пустая строка дают пустой префикс, `blog/` превращается в `/blog`.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{trimmed}")
}

fn strip_query_and_fragment(location: &str) -> &str {
    location
        .find(['?', '#'])
        .map_or(location, |idx| &location[..idx])
}
