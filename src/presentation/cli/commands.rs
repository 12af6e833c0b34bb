// src/presentation/cli/commands.rs
use std::sync::Arc;

use anyhow::{Result, bail};
use serde::Serialize;
use tokio::signal;

use super::{AuthorCommand, Command};
use crate::{
    application::{
        articles::{SaveArticleCommand, UpdateArticleCommand},
        authors::RegisterAuthorCommand,
        ports::messaging::MessageConsumer,
        services::ApplicationServices,
    },
    config::AppConfig,
};

/// Runs one CLI command. `consumer` is present only when a broker is configured.
///
/// # Errors
///
/// Service and store failures, or a `ConfigError` when `consume` runs without
/// `REDIS_URL`.
pub async fn execute(
    command: Command,
    services: &ApplicationServices,
    consumer: Option<Arc<dyn MessageConsumer>>,
    config: &AppConfig,
) -> Result<()> {
    let articles = &services.articles;

    match command {
        Command::Migrate => {
            // migrations already ran during bootstrap
            tracing::info!("database schema is up to date");
        }
        Command::List => print_json(&articles.get_all_articles().await?)?,
        Command::Get { id } => print_json(&articles.fetch_article_by_id(id).await?)?,
        Command::Author {
            command: AuthorCommand::Create { username, email },
        } => {
            let author = services
                .authors
                .register_author(RegisterAuthorCommand { username, email })
                .await?;
            print_json(&author)?;
        }
        Command::Create {
            author_id,
            title,
            body,
        } => {
            let created = articles
                .save_article(SaveArticleCommand {
                    title,
                    body,
                    author_id,
                })
                .await?;
            print_json(&created)?;
        }
        Command::Update { id, title, body } => {
            let outcome = articles
                .update_article(UpdateArticleCommand { id, title, body })
                .await?;
            print_json(&outcome)?;
        }
        Command::Delete { id } => {
            articles.delete_by_id(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))?;
        }
        Command::Purge { yes } => {
            if !yes {
                bail!("refusing to soft-delete every article without --yes");
            }
            let affected = articles.delete_all_articles().await?;
            print_json(&serde_json::json!({ "soft_deleted": affected }))?;
        }
        Command::Consume => {
            let Some(consumer) = consumer else {
                config.require_redis_url()?;
                bail!("no message consumer available");
            };
            let worker = services.updated_at_consumer(consumer, config.queue_poll_timeout());
            let touched = worker.run(shutdown_signal()).await?;
            tracing::info!(touched, "consumer finished");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
