//! Offline command-line access to the text and keyword core.
//!
//! # Usage
//!
//! ```bash
//! # Word frequency of a file
//! cargo run --bin adtools -- words --file article.txt --top 10
//!
//! # Entities from stdin
//! cat post.txt | cargo run --bin adtools -- entities --kind hashtags
//!
//! # Keyword expansion
//! cargo run --bin adtools -- keywords "running shoes" trail -m cheap -m best
//!
//! # Ad headlines
//! cargo run --bin adtools -- ad "Best {product} deal" Widgets --max-length 30 --variants
//! ```

use adtools_web::domain::ads::{AdVariant, generate_variants, render};
use adtools_web::domain::extract::{EntityKind, aggregate, extract_all};
use adtools_web::domain::keywords::{COMMON_MODIFIERS, generate_candidates};
use adtools_web::domain::text::{frequency, tokenize, word_statistics};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use std::io::Read;
use std::path::PathBuf;

/// Text mining and SEM helpers.
#[derive(Parser)]
#[command(name = "adtools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank words by frequency
    Words {
        #[command(flatten)]
        input: TextInput,

        /// Shortest word counted, in characters
        #[arg(long, default_value_t = 2)]
        min_length: usize,

        /// Number of words to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },

    /// Extract URLs, emails, hashtags, mentions and numbers
    Entities {
        #[command(flatten)]
        input: TextInput,

        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,
    },

    /// Combine seed keywords with modifiers
    Keywords {
        /// Seed keywords
        #[arg(required = true)]
        seeds: Vec<String>,

        /// Modifier (repeatable)
        #[arg(short, long = "modifier")]
        modifiers: Vec<String>,

        /// Also use the built-in commercial modifiers
        #[arg(long)]
        common: bool,

        /// Maximum number of keywords printed
        #[arg(long, default_value_t = 500)]
        limit: usize,
    },

    /// Render ad headlines from a {product} template
    Ad {
        /// Template containing {product}
        template: String,

        /// Product name
        product: String,

        #[arg(long, default_value_t = 30)]
        max_length: usize,

        /// Also render decorated and built-in templates
        #[arg(long)]
        variants: bool,
    },
}

/// Text source: `--file`, an inline argument, or stdin.
#[derive(Args)]
struct TextInput {
    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Inline text; stdin is read when neither this nor --file is given
    text: Option<String>,
}

impl TextInput {
    fn read(self) -> Result<String> {
        if let Some(path) = self.file {
            return std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        if let Some(text) = self.text {
            return Ok(text);
        }
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    All,
    Urls,
    Emails,
    Hashtags,
    Mentions,
    Numbers,
}

impl KindArg {
    fn entity_kind(self) -> Option<EntityKind> {
        match self {
            KindArg::All => None,
            KindArg::Urls => Some(EntityKind::Url),
            KindArg::Emails => Some(EntityKind::Email),
            KindArg::Hashtags => Some(EntityKind::Hashtag),
            KindArg::Mentions => Some(EntityKind::Mention),
            KindArg::Numbers => Some(EntityKind::Number),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Words {
            input,
            min_length,
            top,
        } => words(&input.read()?, min_length, top),
        Commands::Entities { input, kind } => entities(&input.read()?, kind),
        Commands::Keywords {
            seeds,
            mut modifiers,
            common,
            limit,
        } => {
            if common {
                modifiers.extend(COMMON_MODIFIERS.iter().map(|m| (*m).to_owned()));
            }
            keywords(&seeds, &modifiers, limit)
        }
        Commands::Ad {
            template,
            product,
            max_length,
            variants,
        } => ad(&template, &product, max_length, variants),
    }
}

fn words(text: &str, min_length: usize, top: usize) -> Result<()> {
    let tokens = tokenize(text, min_length);
    if tokens.is_empty() {
        anyhow::bail!("No words of at least {min_length} characters found");
    }

    let stats = word_statistics(&tokens, text);
    println!("{}", "Word frequency".bright_blue().bold());
    println!();
    println!(
        "  {:<30} {:>8} {:>8}",
        "Word".bright_white().bold(),
        "Count".bright_white().bold(),
        "%".bright_white().bold()
    );
    println!("  {}", "─".repeat(48).bright_black());

    for entry in frequency(&tokens, top) {
        println!(
            "  {:<30} {:>8} {:>8.2}",
            entry.word.cyan(),
            entry.count,
            entry.percentage
        );
    }

    println!();
    println!(
        "  Total: {}  Unique: {}  Avg length: {}",
        stats.total_words.to_string().bright_white().bold(),
        stats.unique_words.to_string().bright_white().bold(),
        stats.avg_word_length
    );
    Ok(())
}

fn entities(text: &str, kind: KindArg) -> Result<()> {
    match kind.entity_kind() {
        Some(kind) => {
            let found = aggregate(kind, &kind.extract(text));
            let title = format!("{} entities", kind.as_str());
            println!("{}", title.bright_blue().bold());
            if found.is_empty() {
                println!("{}", "  None found".yellow());
            }
            for entity in found {
                println!(
                    "  {:>4}  {}",
                    entity.count.to_string().bright_black(),
                    entity.value.cyan()
                );
            }
        }
        None => {
            let report = extract_all(text);
            println!("{}", "Entities".bright_blue().bold());
            if report.summary.is_empty() {
                println!("{}", "  None found".yellow());
            }
            for (label, values) in [
                ("urls", &report.urls),
                ("emails", &report.emails),
                ("hashtags", &report.hashtags),
                ("mentions", &report.mentions),
                ("numbers", &report.numbers),
            ] {
                if values.is_empty() {
                    continue;
                }
                println!();
                println!("  {} ({})", label.bright_white().bold(), values.len());
                for value in values {
                    println!("    {}", value.cyan());
                }
            }
        }
    }
    Ok(())
}

fn keywords(seeds: &[String], modifiers: &[String], limit: usize) -> Result<()> {
    let candidates = generate_candidates(seeds, modifiers);
    if candidates.is_empty() {
        anyhow::bail!("All seeds are blank");
    }

    for candidate in candidates.iter().take(limit) {
        println!("{}", candidate.keyword);
    }
    eprintln!(
        "{}",
        format!("{} keywords", candidates.len().min(limit)).bright_black()
    );
    Ok(())
}

fn ad(template: &str, product: &str, max_length: usize, variants: bool) -> Result<()> {
    let ads = if variants {
        generate_variants(template, product.trim(), max_length)?
    } else {
        vec![render(template, product.trim(), max_length)?]
    };

    for variant in &ads {
        print_ad(variant);
    }
    Ok(())
}

fn print_ad(ad: &AdVariant) {
    let marker = if ad.truncated {
        "truncated".yellow()
    } else {
        "ok".green()
    };
    println!(
        "  {:>3}  {}  {}",
        ad.length.to_string().bright_black(),
        ad.headline.cyan(),
        marker
    );
}
