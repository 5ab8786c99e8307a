#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
}

/// Шаблон пути вида `/posts/:slug`.
#[derive(Debug, Clone)]
pub(crate) struct RoutePattern {
    raw: &'static str,
    segments: Vec<Segment>,
}

/// Параметры, извлечённые из пути. Значения сохраняются как есть.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RouteParams(Vec<(&'static str, String)>);

impl RouteParams {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl RoutePattern {
    pub(crate) fn parse(raw: &'static str) -> Self {
        let segments = split_path(raw)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Static(segment),
            })
            .collect();

        Self { raw, segments }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.raw
    }

    /// Сопоставляет путь без query и fragment. Параметр занимает ровно один
    /// непустой сегмент; допускается один завершающий `/`.
    pub(crate) fn matches(&self, path: &str) -> Option<RouteParams> {
        if !path.starts_with('/') {
            return None;
        }

        let mut params = RouteParams::default();
        let mut parts = split_path(path);

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(expected) if part == *expected => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => params.0.push((*name, part.to_string())),
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Собирает путь из параметров; `None`, если какого-то параметра нет
    /// или он пустой.
    pub(crate) fn build(&self, params: &[(&str, &str)]) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Static(value) => parts.push(*value),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())?;
                    parts.push(value);
                }
            }
        }

        Some(format!("/{}", parts.join("/")))
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    let empty = path.is_empty();
    path.split('/').filter(move |_| !empty)
}
