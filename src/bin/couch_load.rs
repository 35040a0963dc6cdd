//! # couch-load
//!
//! Walks a directory tree and loads every regular file into a database:
//! one document describing the file (name, content type, size,
//! timestamps), then the file's bytes as a standalone attachment on that
//! document.

use anyhow::Context;
use clap::Parser;
use couch_rs::{sniff, Node, NodeConfig};
use serde_json::{json, Map};
use std::path::PathBuf;
use std::time::UNIX_EPOCH;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "couch-load")]
#[command(about = "Load a directory tree into a database as documents with attachments")]
struct Cli {
    /// Directory to walk
    source: PathBuf,

    /// Database to create and load into
    #[arg(short, long, default_value = "test")]
    database: String,

    /// Server host
    #[arg(long, default_value = "localhost")]
    address: String,

    /// Server port
    #[arg(long, default_value = "5984")]
    port: u16,
}

fn unix_secs(time: std::io::Result<std::time::SystemTime>) -> Option<u64> {
    time.ok()?
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_secs())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let node = Node::with_config(NodeConfig {
        address: cli.address,
        port: cli.port,
        ..Default::default()
    });

    let db = node.create_database(&cli.database).await?;
    println!("loading {} into {}", cli.source.display(), db.url());

    for entry in WalkDir::new(&cli.source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        let metadata = entry.metadata()?;
        let content_type = sniff::content_type_for(path)
            .unwrap_or_else(|_| "application/octet-stream".to_string());
        let content_length = metadata.len();

        let mut data = Map::new();
        data.insert("name".to_string(), json!(path.display().to_string()));
        data.insert("content_type".to_string(), json!(content_type));
        data.insert("size".to_string(), json!(content_length));
        data.insert(
            "created_on".to_string(),
            json!(unix_secs(metadata.created())),
        );
        data.insert(
            "updated_on".to_string(),
            json!(unix_secs(metadata.modified())),
        );
        data.insert(
            "accessed_on".to_string(),
            json!(unix_secs(metadata.accessed())),
        );

        let mut doc = db.create_document(data).await?;

        let contents =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        doc.create_standalone_attachment(&file_name, &content_type, content_length, contents)
            .await?;

        println!("loaded {}", path.display());
    }

    Ok(())
}
