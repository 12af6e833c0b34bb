use anyhow::Result;
use clap::Parser;
use crafted::{
    application::{
        ports::messaging::{MessageConsumer, MessagePublisher},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
    },
    infrastructure::{
        database,
        messaging::{LoggingPublisher, RedisMessageQueue},
        repositories::{SqliteArticleRepository, SqliteAuthorRepository},
        time::SystemClock,
    },
    presentation::cli::{self, Cli},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.clone() {
        config = config.with_database_url(url);
    }

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let article_repo = Arc::new(SqliteArticleRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> = article_repo.clone();
    let article_read_repo: Arc<dyn ArticleReadRepository> = article_repo;
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(SqliteAuthorRepository::new(pool.clone()));

    let queue = config
        .redis_url()
        .map(RedisMessageQueue::from_url)
        .transpose()?
        .map(Arc::new);
    let publisher: Arc<dyn MessagePublisher> = match &queue {
        Some(queue) => queue.clone(),
        None => {
            tracing::warn!("REDIS_URL not set, update notifications will only be logged");
            Arc::new(LoggingPublisher)
        }
    };
    let consumer = queue.map(|queue| queue as Arc<dyn MessageConsumer>);

    let services = ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        author_repo,
        publisher,
        Arc::new(SystemClock),
    );

    let result = cli::execute(cli.command, &services, consumer, &config).await;
    pool.close().await;
    result
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
