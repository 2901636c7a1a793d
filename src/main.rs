//! # nutriparse
//!
//! Command-line front end: reads a recipe text, parses it, optionally matches
//! it against a food catalog, and prints one JSON document to stdout.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use nutriparse::config::{ParserConfig, DEFAULT_MAX_HEURISTIC_LINE_LENGTH};
use nutriparse::{
    calculate_nutrition, match_ingredients, FoodCatalog, MatchedIngredient, NutritionTotals,
    ParseResult, RecipeParser,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_TITLE: &str = "Untitled Recipe";
const DEFAULT_SERVINGS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "nutriparse")]
#[command(about = "Parse recipe text into ingredients and instructions")]
#[command(version)]
struct Cli {
    /// Recipe text file ("-" or omitted reads stdin)
    recipe: Option<PathBuf>,

    /// Food catalog JSON file to match ingredients against
    #[arg(short, long, env = "NUTRIPARSE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Number of servings the recipe makes
    #[arg(short, long, env = "NUTRIPARSE_SERVINGS", default_value_t = DEFAULT_SERVINGS)]
    servings: u32,

    /// Recipe title (defaults to the file name)
    #[arg(short, long)]
    title: Option<String>,

    /// Lines this long or longer are never guessed to be ingredients
    #[arg(long, env = "NUTRIPARSE_MAX_LINE_LENGTH", default_value_t = DEFAULT_MAX_HEURISTIC_LINE_LENGTH)]
    max_line_length: usize,

    /// Log output format
    #[arg(long, env = "NUTRIPARSE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Serialize)]
struct NutritionReport {
    total: NutritionTotals,
    per_serving: NutritionTotals,
}

#[derive(Debug, Serialize)]
struct RecipeReport<'a> {
    title: String,
    servings: u32,
    parsed_data: ParseResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_ingredients: Option<Vec<MatchedIngredient<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nutrition: Option<NutritionReport>,
}

fn init_logging(format: LogFormat) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nutriparse=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn read_recipe(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe file {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read recipe from stdin")?;
            Ok(text)
        }
    }
}

fn default_title(path: Option<&Path>) -> String {
    path.filter(|path| *path != Path::new("-"))
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    info!("Starting nutriparse");

    let config = ParserConfig::default().with_max_heuristic_line_length(cli.max_line_length);
    let parser = RecipeParser::with_config(config);

    let text = read_recipe(cli.recipe.as_deref())?;
    let parsed = parser.parse(&text);
    info!(
        "Parsed {} ingredients from {} characters of recipe text",
        parsed.ingredients.len(),
        text.len()
    );

    let catalog = cli
        .catalog
        .as_deref()
        .map(|path| {
            FoodCatalog::from_json_file(path)
                .with_context(|| format!("Failed to load food catalog {}", path.display()))
        })
        .transpose()?;

    let matched = catalog
        .as_ref()
        .map(|catalog| match_ingredients(&parsed.ingredients, catalog));
    if let Some(matched) = &matched {
        info!(
            "Matched {} of {} ingredients against the catalog",
            matched.iter().filter(|m| m.is_resolved()).count(),
            matched.len()
        );
    }
    let nutrition = matched.as_deref().map(|matched| {
        let total = calculate_nutrition(matched);
        NutritionReport {
            total,
            per_serving: total.per_serving(cli.servings),
        }
    });

    let report = RecipeReport {
        title: cli
            .title
            .clone()
            .unwrap_or_else(|| default_title(cli.recipe.as_deref())),
        servings: cli.servings,
        parsed_data: parsed,
        matched_ingredients: matched,
        nutrition,
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}
