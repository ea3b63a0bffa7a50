//! Codevault CLI
//!
//! Batch jobs over the shared catalog file:
//! - `generate`: build the synthetic project catalog and write it out
//! - `update-links`: rewrite every record's download link to the canonical one
//! - `search` / `categories`: browse a catalog the way the site front end does
//! - `audit`: check a catalog file against the category table

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use codevault_catalog::{
    audit, browse, store, update_links_file_with, CatalogConfig, CatalogError, CatalogGenerator,
    CategoryFilter, NormalizeStep, XorShift64,
};

mod logging;

#[derive(Parser)]
#[command(name = "codevault")]
#[command(author, version, about = "Codevault: synthetic project catalog tooling")]
struct Cli {
    /// Catalog file (defaults to the configured `data_path`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// JSON config overriding the built-in category/template tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase diagnostic log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the synthetic catalog and overwrite the catalog file.
    Generate {
        /// RNG seed for reproducible output (default: wall clock)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Rewrite every record's `link` to the canonical download link.
    ///
    /// Missing files and malformed JSON are reported, not treated as failures.
    UpdateLinks {
        /// Link to write (default: the configured link)
        #[arg(long)]
        link: Option<String>,
    },

    /// Search project names within a category.
    Search {
        /// Case-insensitive substring of the project name
        #[arg(default_value = "")]
        query: String,
        /// `All`, a category key, or a full category label
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
        /// Number of 24-item pages to show
        #[arg(long, default_value_t = 1)]
        pages: usize,
        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the distinct categories present in the catalog file.
    Categories,

    /// Check ids, tags, links and per-category counts against the config.
    Audit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    tracing::debug!(path = %config.data_path.display(), "resolved catalog file");

    match cli.command {
        Commands::Generate { seed } => cmd_generate(&config, seed),
        Commands::UpdateLinks { link } => {
            let link = link.unwrap_or_else(|| config.link.clone());
            cmd_update_links(&config.data_path, &link);
            Ok(())
        }
        Commands::Search {
            query,
            category,
            pages,
            json,
        } => cmd_search(&config.data_path, &query, &category, pages, json),
        Commands::Categories => cmd_categories(&config.data_path),
        Commands::Audit => cmd_audit(&config),
    }
}

fn rule() -> String {
    "=".repeat(60)
}

fn cmd_generate(config: &CatalogConfig, seed: Option<u64>) -> Result<()> {
    println!("{}", rule());
    println!("{}", "generating project catalog...".bold());
    println!("{}", rule());

    let mut rng = match seed {
        Some(seed) => XorShift64::new(seed),
        None => XorShift64::from_clock(),
    };
    let generator = CatalogGenerator::new(config)?;
    let records = generator.generate_with(&mut rng, |category| {
        println!("generating category {} ...", category.key.cyan());
    })?;
    let summary = generator.summary(&records);

    println!();
    println!("{}", rule());
    println!("{}", "catalog generated".green().bold());
    println!("total projects: {}", summary.total);
    println!("categories: {}", summary.category_count());
    println!();
    println!("per category:");
    for (key, count) in &summary.per_category {
        println!("  {key}: {count}");
    }
    println!("{}", rule());

    println!();
    println!("saving to {}", config.data_path.display());
    store::write_records(&config.data_path, &records)
        .with_context(|| format!("writing {}", config.data_path.display()))?;
    println!(
        "{} {}",
        "wrote".green().bold(),
        config.data_path.display().to_string().bold()
    );
    Ok(())
}

/// Every failure is reported on stdout; the command itself always succeeds.
fn cmd_update_links(path: &Path, link: &str) {
    let result = update_links_file_with(path, link, |step| match step {
        NormalizeStep::Reading(path) => println!("reading {}", path.display()),
        NormalizeStep::Processing(count) => println!("processing {count} record(s)..."),
        NormalizeStep::Saving(path) => println!("saving to {}", path.display()),
    });
    match result {
        Ok(report) => {
            println!();
            println!("{}", "=".repeat(50));
            println!("{}", "done".green().bold());
            println!("total records: {}", report.total);
            println!("updated records: {}", report.updated);
            println!("unchanged records: {}", report.unchanged());
            println!("new link: {link}");
            println!("{}", "=".repeat(50));
        }
        Err(CatalogError::NotFound { path }) => {
            println!("{} file not found: {}", "error:".red().bold(), path.display());
        }
        Err(CatalogError::Parse { source, .. }) => {
            println!("{} malformed JSON - {source}", "error:".red().bold());
        }
        Err(err) => {
            println!("{} {err}", "error:".red().bold());
        }
    }
}

fn cmd_search(
    path: &Path,
    query: &str,
    category: &CategoryFilter,
    pages: usize,
    json: bool,
) -> Result<()> {
    let records = store::read_records(path)?;
    let hits = browse::filter(&records, query, category);
    let visible = browse::page(&hits, pages);

    if json {
        println!("{}", store::to_catalog_json(visible)?);
        return Ok(());
    }

    let scope = match category {
        CategoryFilter::All => "all projects".to_string(),
        CategoryFilter::Named(name) => name.clone(),
    };
    println!("{} ({} match(es))", scope.bold(), hits.len());
    for record in visible {
        println!(
            "  {}  {}  {}",
            record.id.to_string().dimmed(),
            record.short_category.cyan(),
            record.name
        );
    }
    if visible.len() < hits.len() {
        println!(
            "showing {} of {} (use --pages {} for more)",
            visible.len(),
            hits.len(),
            pages.max(1) + 1
        );
    }
    Ok(())
}

fn cmd_categories(path: &Path) -> Result<()> {
    let records = store::read_records(path)?;
    for category in browse::categories(&records) {
        println!("{category}");
    }
    Ok(())
}

fn cmd_audit(config: &CatalogConfig) -> Result<()> {
    let records = store::read_records(&config.data_path)?;
    let report = audit(&records, config, &config.link);

    println!("records: {}", report.total);
    for (key, count) in &report.counts {
        println!("  {key}: {count}");
    }
    if report.is_clean() {
        println!("{} catalog is consistent", "ok".green().bold());
        return Ok(());
    }
    for violation in &report.violations {
        println!("{} {violation}", "violation:".red().bold());
    }
    Err(anyhow!(
        "{} violation(s) in {}",
        report.violations.len(),
        config.data_path.display()
    ))
}
