//! Command implementations for the Tweety CLI.

use std::time::Instant;

use crate::categorizer::Categorizer;
use crate::category::CategoryId;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::KeywordConfiguration;
use crate::document::Document;
use crate::error::{Result, TweetyError};
use crate::highlight::HighlightConfig;
use crate::source::{DocumentSource, JsonlFileSource};
use crate::strategy::StrategyKind;

/// Execute a CLI command.
pub fn execute_command(args: TweetyArgs) -> Result<()> {
    match &args.command {
        Command::Categorize(categorize_args) => categorize(categorize_args, &args),
        Command::Categories => list_categories(&args),
        Command::Compare(compare_args) => compare_strategies(compare_args, &args),
    }
}

/// Build the keyword configuration from the config file and overrides.
pub fn load_configuration(input: &InputArgs) -> Result<KeywordConfiguration> {
    let mut config = match &input.config {
        Some(path) => {
            log::debug!("Loading keyword configuration from {}", path.display());
            KeywordConfiguration::from_file(path)?
        }
        None => KeywordConfiguration::new(),
    };

    for entry in &input.keywords {
        let (id, keywords) = parse_keyword_override(entry)?;
        config.set_keywords(id, keywords);
    }

    if let Some(query) = &input.query {
        config.query = query.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Parse an `ID=LIST` keyword override.
fn parse_keyword_override(entry: &str) -> Result<(CategoryId, String)> {
    let (id, keywords) = entry.split_once('=').ok_or_else(|| {
        TweetyError::config(format!("expected ID=LIST for --keywords, got '{entry}'"))
    })?;
    Ok((id.trim().parse()?, keywords.to_string()))
}

/// Fetch the documents of a run.
fn fetch_documents(input: &InputArgs, config: &KeywordConfiguration) -> Result<Vec<Document>> {
    let source = JsonlFileSource::new(&input.documents).max_results(input.limit);
    source.fetch(&config.query)
}

/// Categorize a document file.
fn categorize(args: &CategorizeArgs, cli_args: &TweetyArgs) -> Result<()> {
    let mut config = load_configuration(&args.input)?;
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }

    // Resolve the category filter before doing any work.
    let only = args
        .category
        .as_deref()
        .map(str::parse::<CategoryId>)
        .transpose()?;

    let documents = fetch_documents(&args.input, &config)?;
    let categorizer = Categorizer::with_highlight(HighlightConfig::new().tag(args.tag.as_str()))?;

    let start_time = Instant::now();
    let response = categorizer.run(&documents, &config)?;
    log::info!(
        "Categorization took {}µs ({})",
        start_time.elapsed().as_micros(),
        config.strategy
    );

    match only {
        Some(id) => output_result(
            "Category results",
            response.data.get(id)?,
            cli_args,
        ),
        None => output_result("Categorization complete", &response, cli_args),
    }
}

/// List the registry's categories.
fn list_categories(cli_args: &TweetyArgs) -> Result<()> {
    let categories: Vec<CategoryInfo> = CategoryId::ALL
        .into_iter()
        .map(|id| CategoryInfo {
            id: id.as_str().to_string(),
            name: id.display_name().to_string(),
            fallback: id.is_fallback(),
        })
        .collect();

    output_result("Categories", &categories, cli_args)
}

/// Run every strategy over the same batch and compare membership.
fn compare_strategies(args: &CompareArgs, cli_args: &TweetyArgs) -> Result<()> {
    let config = load_configuration(&args.input)?;
    let documents = fetch_documents(&args.input, &config)?;
    let categorizer = Categorizer::new()?;
    let iterations = args.iterations.max(1);

    let mut timings = Vec::new();
    let mut memberships = Vec::new();

    for kind in StrategyKind::ALL {
        let strategy = kind.build();
        let start_time = Instant::now();
        let mut response = categorizer.run_with_strategy(&documents, &config, strategy.as_ref())?;
        for _ in 1..iterations {
            response = categorizer.run_with_strategy(&documents, &config, strategy.as_ref())?;
        }
        let elapsed = start_time.elapsed();

        timings.push(StrategyTiming {
            strategy: kind.to_string(),
            categorized: response.categorized_count(),
            uncategorized: response.uncategorized_count(),
            average_duration_us: (elapsed.as_micros() / iterations as u128) as u64,
        });
        memberships.push(response.data.membership());
    }

    let identical = memberships.windows(2).all(|pair| pair[0] == pair[1]);
    if !identical {
        log::warn!("Search strategies disagree on category membership");
    }

    output_result(
        "Strategy comparison complete",
        &StrategyComparison {
            documents: documents.len(),
            iterations,
            strategies: timings,
            identical,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    fn input(documents: PathBuf) -> InputArgs {
        InputArgs {
            documents,
            config: None,
            keywords: Vec::new(),
            query: None,
            limit: 100,
        }
    }

    #[test]
    fn test_parse_keyword_override() {
        let (id, keywords) = parse_keyword_override("dinas_binamarga=jalan,rusak").unwrap();
        assert_eq!(id, CategoryId::DinasBinamarga);
        assert_eq!(keywords, "jalan,rusak");

        assert!(matches!(
            parse_keyword_override("dinas_binamarga"),
            Err(TweetyError::Config(_))
        ));
        assert!(matches!(
            parse_keyword_override("dinas_pariwisata=pantai"),
            Err(TweetyError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_overrides_apply_on_top_of_config_file() {
        let mut config_file = NamedTempFile::new().unwrap();
        write!(
            config_file,
            r#"{{"query": "kota", "keywords": {{"dinas_binamarga": "jalan", "dinas_sosial": "bansos"}}}}"#
        )
        .unwrap();
        config_file.flush().unwrap();

        let mut input = input(PathBuf::from("unused.jsonl"));
        input.config = Some(config_file.path().to_path_buf());
        input.keywords = vec!["dinas_binamarga=jembatan".to_string()];
        input.query = Some("surabaya".to_string());

        let config = load_configuration(&input).unwrap();
        assert_eq!(config.keywords_for(CategoryId::DinasBinamarga), Some("jembatan"));
        assert_eq!(config.keywords_for(CategoryId::DinasSosial), Some("bansos"));
        assert_eq!(config.query, "surabaya");
    }

    #[test]
    fn test_fallback_override_rejected() {
        let mut input = input(PathBuf::from("unused.jsonl"));
        input.keywords = vec!["no_category=apa".to_string()];
        assert!(matches!(
            load_configuration(&input),
            Err(TweetyError::Config(_))
        ));
    }

    #[test]
    fn test_fetch_documents_applies_query_and_limit() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Jalan rusak di kota").unwrap();
        writeln!(file, "Sekolah butuh renovasi").unwrap();
        writeln!(file, "Kota banjir lagi").unwrap();
        file.flush().unwrap();

        let mut input = input(file.path().to_path_buf());
        input.limit = 1;
        let config = KeywordConfiguration::new().with_query("kota");

        let documents = fetch_documents(&input, &config).unwrap();
        assert_eq!(documents, vec![Document::new("Jalan rusak di kota")]);
    }
}
