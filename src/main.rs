// SPDX-License-Identifier: PMPL-1.0-or-later

//! rest-localization: inspect culture catalogs and localize product data
//! from the command line.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use rest_localization::locale::{self, CultureScope};
use rest_localization::products::{self, Product};
use rest_localization::{
    ambient, CultureDescription, CultureProvider, CultureSource, LocalizationMapper,
    LocalizationResolver, LocalizationSettings,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default culture when the settings name none and the process locale is not offered.
const FALLBACK_CULTURE: &str = "en";

#[derive(Parser)]
#[command(name = "rest-localization")]
#[command(version)]
#[command(about = "Culture catalogs and localized property values")]
#[command(long_about = None)]
struct Cli {
    /// Localization settings file (YAML or JSON)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported cultures
    Cultures {
        /// Include native and English names
        #[arg(short, long)]
        describe: bool,
    },

    /// List locale database cultures matching a category filter
    System {
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        neutral: bool,

        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        specific: bool,

        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        installed: bool,

        #[arg(long, default_value_t = false, action = ArgAction::Set)]
        custom: bool,

        #[arg(long, default_value_t = false, action = ArgAction::Set)]
        replacement: bool,
    },

    /// Show products localized for a culture
    Products {
        /// Culture to localize for (default: current culture)
        #[arg(long)]
        culture: Option<String>,

        /// Product records (YAML or JSON) instead of the builtin samples
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Print the records with all their localizations
        #[arg(long)]
        raw: bool,
    },

    /// Resolve one property of every product
    Resolve {
        #[arg(long)]
        culture: String,

        /// Base property name, e.g. Name or Price
        #[arg(short, long)]
        property: String,

        /// Product records (YAML or JSON) instead of the builtin samples
        #[arg(short, long, value_name = "FILE")]
        data: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ResolvedValue {
    product: String,
    value: Option<rest_localization::Value>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = match cli.config.as_deref() {
        Some(path) => LocalizationSettings::load(path)?,
        None => LocalizationSettings::default(),
    };
    let database = settings.locale_database();
    if let Some(culture) =
        settings.default_from_process(&database, &ambient::process_culture(), FALLBACK_CULTURE)
    {
        ambient::set_thread_default_culture(Some(culture));
    }

    match cli.command {
        Commands::Cultures { describe } => {
            let context = settings
                .build_context(&database)
                .context("building culture catalog")?;
            if describe {
                print_descriptions(context.supported_culture_descriptions(), cli.json)?;
            } else if cli.json {
                println!("{}", serde_json::to_string_pretty(&context.supported_cultures())?);
            } else {
                let default = context.default_culture_name();
                for culture in context.supported_cultures() {
                    if &culture == default {
                        println!("{} {}", culture.to_string().bold(), "(default)".dimmed());
                    } else {
                        println!("{}", culture);
                    }
                }
            }
        }

        Commands::System {
            neutral,
            specific,
            installed,
            custom,
            replacement,
        } => {
            let scope = CultureScope::new(neutral, specific, installed, custom, replacement);
            let cultures = locale::system_cultures(&database, &scope)?;
            print_descriptions(&cultures, cli.json)?;
        }

        Commands::Products { culture, data, raw } => {
            let records = load_products(data.as_deref())?;
            if raw {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                } else {
                    for product in &records {
                        print_raw_product(product);
                    }
                }
                return Ok(());
            }

            let context = settings
                .build_context(&database)
                .context("building culture catalog")?;
            let request = context.request_culture(culture.as_deref())?;
            let mapper = LocalizationMapper::new(&request);
            let dtos = products::localize_all(&mapper, &records, None)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&dtos)?);
            } else {
                println!("{} {}", "Culture:".bold(), request.current_ui_culture());
                for dto in &dtos {
                    println!("  {:<24} {:>10.2}", dto.name, dto.price);
                }
            }
        }

        Commands::Resolve {
            culture,
            property,
            data,
        } => {
            let records = load_products(data.as_deref())?;
            let context = settings
                .build_context(&database)
                .context("building culture catalog")?;
            let request = context.request_culture(Some(&culture))?;
            let resolver = LocalizationResolver::new(&request);

            let mut resolved = Vec::with_capacity(records.len());
            for product in &records {
                let value = resolver
                    .resolve_value(product, &property, None)
                    .with_context(|| format!("resolving {} of {}", property, product.name))?;
                resolved.push(ResolvedValue {
                    product: product.name.clone(),
                    value,
                });
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                for entry in &resolved {
                    match &entry.value {
                        Some(value) => println!("{:<24} {}", entry.product, value.to_string().green()),
                        None => println!("{:<24} {}", entry.product, "(none)".dimmed()),
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_products(data: Option<&Path>) -> Result<Vec<Product>> {
    match data {
        Some(path) => products::load_products(path),
        None => Ok(products::sample_products()),
    }
}

fn print_descriptions(descriptions: &[CultureDescription], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(descriptions)?);
        return Ok(());
    }
    for description in descriptions {
        let identifier = if description.identifier.is_invariant() {
            "(invariant)".to_string()
        } else {
            description.identifier.to_string()
        };
        println!(
            "{:<10} {:<40} {}",
            identifier.bold(),
            description.english_name,
            description.native_name.cyan()
        );
    }
    Ok(())
}

fn print_raw_product(product: &Product) {
    println!("{} {:.2}", product.name.bold(), product.price);
    if let Some(names) = &product.name_localizations {
        for (culture, name) in names.iter() {
            println!("  name  {:<8} {}", culture, name.map_or("(base)", String::as_str));
        }
    }
    if let Some(prices) = &product.price_localizations {
        for (culture, price) in prices.iter() {
            match price {
                Some(price) => println!("  price {:<8} {:.2}", culture, price),
                None => println!("  price {:<8} (base)", culture),
            }
        }
    }
}
