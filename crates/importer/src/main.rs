use std::sync::Arc;

use anyhow::{Context, Result};
use common::{config::AppConfig, logging};
use importer::service::{load_pull_requests, write_json_lines};
use importer::{Importer, ProjectSnapshot};
use tokio::io::AsyncWriteExt;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init_logging(&config.observability.log_level);

    let snapshot = ProjectSnapshot::load(&config.importer.project_path)
        .await
        .context("loading project snapshot")?;
    let records = load_pull_requests(&config.importer.pull_requests_path)
        .await
        .context("loading pull requests")?;
    info!(
        project = %snapshot.project.path,
        records = records.len(),
        "importer started"
    );

    let report = Importer::new(Arc::new(snapshot)).import_values(records);

    let mut rendered = Vec::new();
    write_json_lines(&mut rendered, &report.imported)?;
    match &config.importer.output_path {
        Some(path) => tokio::fs::write(path, &rendered)
            .await
            .with_context(|| format!("writing {}", path))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&rendered).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
