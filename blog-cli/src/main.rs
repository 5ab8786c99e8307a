use std::process;

use anyhow::{Context, Result};
use blog_client::{ApiClient, BlogClientError, PostService, Slug};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

mod logging;
mod router;
mod settings;
#[cfg(test)]
mod test_support;
mod views;

use logging::init_logging;
use router::{Resolved, Router};
use settings::Settings;
use views::{PostDetailView, render_post_list};

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "Клиент блога: страницы и посты")]
struct Cli {
    /// Адрес API (перекрывает BLOG_API_URL).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Открыть страницу по адресу, например `/` или `/posts/hello-world`.
    Open {
        location: String,
    },
    /// Таблица маршрутов.
    Routes,
    /// Список постов.
    List {
        /// Вывести ответ как JSON.
        #[arg(long)]
        json: bool,
    },
    /// Получение поста по slug.
    Get {
        #[arg(long)]
        slug: String,
        /// Вывести ответ как JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?.with_server(cli.server);
    init_logging(&settings.log_level)?;

    let router = Router::new(&settings.router_base);

    match cli.command {
        Command::Open { location } => {
            let Some(resolved) = router.navigate(&location) else {
                warn!(%location, "no route matches location");
                return Ok(());
            };
            debug!(route = resolved.name(), "rendering page");

            let service = post_service(&settings)?;
            let page = match resolved {
                Resolved::Home(view) => view.render(&service, &router).await,
                Resolved::PostDetail { view, slug } => {
                    let slug = Slug::new(slug).map_err(map_client_error)?;
                    view.render(&service, &slug).await
                }
            }
            .map_err(map_client_error)?;
            println!("{page}");
        }
        Command::Routes => {
            for route in router.routes() {
                println!("{:<12} {:<14} {}", route.name, route.path, route.loading);
            }
        }
        Command::List { json } => {
            let posts = post_service(&settings)?
                .list_posts()
                .await
                .map_err(map_client_error)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&posts).context("не удалось сериализовать посты")?
                );
            } else {
                println!("{}", render_post_list(&posts, &router));
            }
        }
        Command::Get { slug, json } => {
            let slug = Slug::new(slug).map_err(map_client_error)?;
            let post = post_service(&settings)?
                .get_post_by_slug(&slug)
                .await
                .map_err(map_client_error)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&post).context("не удалось сериализовать пост")?
                );
            } else {
                println!("{}", PostDetailView::load().render_post(&post));
            }
        }
    }

    Ok(())
}

fn post_service(settings: &Settings) -> Result<PostService> {
    let api = ApiClient::new(settings.api_config()).map_err(map_client_error)?;
    Ok(PostService::new(api))
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match &err {
        BlogClientError::Http(inner) => match inner.status() {
            Some(status) => format!("сервер ответил {status}"),
            None if inner.is_decode() => "некорректный ответ сервера".to_string(),
            None => "ошибка HTTP".to_string(),
        },
        BlogClientError::InvalidSlug => "slug не может быть пустым".to_string(),
        BlogClientError::InvalidBaseUrl(_) => "некорректный адрес сервера".to_string(),
    };
    anyhow::Error::new(err).context(message)
}
