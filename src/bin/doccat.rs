use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use doc_catalog::catalog::{Catalog, CatalogConfig, CatalogState};
use doc_catalog::publish::{write_manifest, write_sitemap, SiteConfig};
use doc_catalog::query::FacetOrder;
use doc_catalog::source::{AssetSource, FsAssetSource, HttpAssetSource};

#[derive(Parser)]
#[command(name = "doccat", version, about = "Static document library tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate documents/manifest.json from the document folders
    Manifest {
        /// The `documents` directory
        dir: PathBuf,
    },
    /// Generate sitemap.xml from the manifest and metadata
    Sitemap {
        /// The `documents` directory
        dir: PathBuf,
        #[arg(long, default_value = "dist/sitemap.xml")]
        out: PathBuf,
        #[arg(long, env = "DOCCAT_BASE_URL", default_value = "http://localhost:8080")]
        base_url: String,
        #[arg(long, env = "DOCCAT_SITE_NAME", default_value = "Document Library")]
        site_name: String,
    },
    /// Load the catalog the way the site does and print a summary
    Inspect {
        /// Site root (the directory holding `documents/`) or an http(s) URL
        target: String,
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
        #[arg(long)]
        sort_facets: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Manifest { dir } => {
            let slugs = write_manifest(&dir).with_context(|| format!("generating manifest in {}", dir.display()))?;
            for slug in &slugs {
                println!("{slug}");
            }
        }
        Command::Sitemap {
            dir,
            out,
            base_url,
            site_name,
        } => {
            let site = SiteConfig::new(base_url, site_name);
            let count = write_sitemap(&dir, &site, &out).context("generating sitemap")?;
            println!("{count} URLs written to {}", out.display());
        }
        Command::Inspect {
            target,
            timeout_secs,
            sort_facets,
        } => {
            let config = CatalogConfig::v0().with_load_timeout(Duration::from_secs(timeout_secs));
            let order = if sort_facets {
                FacetOrder::Alphabetical
            } else {
                FacetOrder::FirstOccurrence
            };

            let state = if target.starts_with("http://") || target.starts_with("https://") {
                load(HttpAssetSource::new(&target)?, config).await
            } else {
                load(FsAssetSource::new(&target), config).await
            };

            if let Some(error) = state.error() {
                bail!("catalog failed to load: {error}");
            }
            print_summary(&state, order);
        }
    }

    Ok(())
}

async fn load<S: AssetSource>(source: S, config: CatalogConfig) -> CatalogState {
    Catalog::new(source, config).initialize().await
}

fn print_summary(state: &CatalogState, order: FacetOrder) {
    println!("{} documents", state.len());
    for doc in state.documents_by_date_desc() {
        let thumb = if doc.thumbnail_url.is_some() { " [thumbnail]" } else { "" };
        println!("  {}  {}  {}{thumb}", doc.metadata.date, doc.slug, doc.metadata.title);
    }
    println!("categories: {}", order.apply(state.all_categories()).join(", "));
    println!("tags: {}", order.apply(state.all_tags()).join(", "));

    let people: Vec<String> = state.sorted_people().iter().map(|p| p.full_name()).collect();
    if !people.is_empty() {
        println!("people: {}", people.join(", "));
    }
}
