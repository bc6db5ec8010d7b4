//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, TweetyArgs};
use crate::error::Result;

/// One row of the category listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub fallback: bool,
}

/// Timing and outcome of one strategy in a comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrategyTiming {
    pub strategy: String,
    pub categorized: usize,
    pub uncategorized: usize,
    pub average_duration_us: u64,
}

/// Result structure for strategy comparison.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub documents: usize,
    pub iterations: usize,
    pub strategies: Vec<StrategyTiming>,
    /// Whether every strategy produced the same category membership.
    pub identical: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TweetyArgs) -> Result<()> {
    let rendered = format_result(message, result, args)?;
    print!("{rendered}");
    Ok(())
}

/// Render a result in the specified format.
pub fn format_result<T: Serialize>(message: &str, result: &T, args: &TweetyArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => format_human(message, result, args),
        OutputFormat::Json => format_json(result, args),
    }
}

/// Render as JSON.
fn format_json<T: Serialize>(result: &T, args: &TweetyArgs) -> Result<String> {
    let mut json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    json.push('\n');
    Ok(json)
}

/// Render in human-readable format.
fn format_human<T: Serialize>(message: &str, result: &T, args: &TweetyArgs) -> Result<String> {
    let mut out = String::new();
    if args.verbosity() > 1 {
        writeln!(out, "{message}").ok();
        writeln!(out).ok();
    }

    // Dispatch on the shape of the serialized value.
    let value = serde_json::to_value(result)?;
    match &value {
        Value::Object(obj) if obj.contains_key("count") && obj.contains_key("data") => {
            format_response_human(&value, &mut out)
        }
        Value::Object(obj) if obj.contains_key("strategies") => {
            format_comparison_human(&value, &mut out)
        }
        Value::Object(obj) if obj.contains_key("tweet") => format_category_human(&value, &mut out),
        Value::Array(items) if items.iter().all(|i| i.get("fallback").is_some()) => {
            format_category_list_human(items, &mut out)
        }
        _ => format_generic_human(&value, &mut out),
    }

    Ok(out)
}

/// Render a categorization response.
fn format_response_human(value: &Value, out: &mut String) {
    let count = value.get("count").and_then(Value::as_u64).unwrap_or(0);
    writeln!(out, "Categorization Results").ok();
    writeln!(out, "══════════════════════").ok();
    writeln!(out, "Documents processed: {count}").ok();

    if let Some(categories) = value
        .get("data")
        .and_then(|d| d.get("query"))
        .and_then(Value::as_array)
    {
        for category in categories {
            writeln!(out).ok();
            format_category_human(category, out);
        }
    }
}

/// Render one category with its results.
fn format_category_human(category: &Value, out: &mut String) {
    let id = category.get("id").and_then(Value::as_str).unwrap_or("unknown");
    let name = category.get("name").and_then(Value::as_str).unwrap_or(id);
    let num = category.get("num").and_then(Value::as_u64).unwrap_or(0);

    writeln!(out, "{name} ({id}): {num}").ok();
    writeln!(out, "{}", "─".repeat(name.chars().count() + id.len() + 3)).ok();

    if let Some(results) = category.get("tweet").and_then(Value::as_array) {
        for result in results {
            let text = result.get("result").and_then(Value::as_str).unwrap_or("");
            match result
                .get("tweet_content")
                .and_then(|d| d.get("id"))
                .and_then(Value::as_str)
            {
                Some(doc_id) => writeln!(out, "  [{doc_id}] {text}").ok(),
                None => writeln!(out, "  - {text}").ok(),
            };
        }
    }
}

/// Render the category listing.
fn format_category_list_human(items: &[Value], out: &mut String) {
    writeln!(out, "Categories (scan order):").ok();
    for item in items {
        let id = item.get("id").and_then(Value::as_str).unwrap_or("unknown");
        let name = item.get("name").and_then(Value::as_str).unwrap_or(id);
        let fallback = item.get("fallback").and_then(Value::as_bool).unwrap_or(false);
        if fallback {
            writeln!(out, "  {id:<18} {name} (fallback)").ok();
        } else {
            writeln!(out, "  {id:<18} {name}").ok();
        }
    }
}

/// Render a strategy comparison.
fn format_comparison_human(value: &Value, out: &mut String) {
    let documents = value.get("documents").and_then(Value::as_u64).unwrap_or(0);
    let iterations = value.get("iterations").and_then(Value::as_u64).unwrap_or(0);
    writeln!(out, "Strategy Comparison").ok();
    writeln!(out, "═══════════════════").ok();
    writeln!(out, "Documents: {documents}, iterations: {iterations}").ok();

    if let Some(strategies) = value.get("strategies").and_then(Value::as_array) {
        for timing in strategies {
            let name = timing.get("strategy").and_then(Value::as_str).unwrap_or("?");
            let categorized = timing.get("categorized").and_then(Value::as_u64).unwrap_or(0);
            let duration = timing
                .get("average_duration_us")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            writeln!(out, "  {name:<12} {categorized} categorized, {duration}µs/run").ok();
        }
    }

    let identical = value.get("identical").and_then(Value::as_bool).unwrap_or(false);
    if identical {
        writeln!(out, "Membership identical across strategies").ok();
    } else {
        writeln!(out, "Membership DIFFERS between strategies").ok();
    }
}

/// Generic key/value output.
fn format_generic_human(value: &Value, out: &mut String) {
    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                writeln!(out, "{key}: {val}").ok();
            }
        }
        other => {
            writeln!(out, "{other}").ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::categorizer::Categorizer;
    use crate::category::CategoryId;
    use crate::config::KeywordConfiguration;
    use crate::document::Document;

    fn args(format: &str) -> TweetyArgs {
        TweetyArgs::try_parse_from(["tweety", "--format", format, "categories"]).unwrap()
    }

    #[test]
    fn test_human_response() {
        let documents = vec![
            Document::with_id("1", "Jalan rusak di kota"),
            Document::new("Sekolah butuh renovasi"),
        ];
        let config =
            KeywordConfiguration::new().with_keywords(CategoryId::DinasBinamarga, "jalan");
        let response = Categorizer::new().unwrap().run(&documents, &config).unwrap();

        let text = format_result("done", &response, &args("human")).unwrap();
        assert!(text.contains("Documents processed: 2"));
        assert!(text.contains("Dinas Binamarga (dinas_binamarga): 1"));
        assert!(text.contains("  [1] <b>Jalan</b> rusak di kota"));
        assert!(text.contains("No Category (no_category): 1"));
        assert!(text.contains("  - Sekolah butuh renovasi"));
    }

    #[test]
    fn test_json_response() {
        let documents = vec![Document::new("Sekolah butuh renovasi")];
        let response = Categorizer::new()
            .unwrap()
            .run(&documents, &KeywordConfiguration::new())
            .unwrap();

        let text = format_result("done", &response, &args("json")).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["data"]["query"][5]["tweet"][0]["result"], "Sekolah butuh renovasi");
    }

    #[test]
    fn test_human_category_list() {
        let items = vec![
            CategoryInfo {
                id: "dinas_sosial".to_string(),
                name: "Dinas Sosial".to_string(),
                fallback: false,
            },
            CategoryInfo {
                id: "no_category".to_string(),
                name: "No Category".to_string(),
                fallback: true,
            },
        ];

        let text = format_result("", &items, &args("human")).unwrap();
        assert!(text.starts_with("Categories (scan order):"));
        assert!(text.contains("no_category"));
        assert!(text.contains("No Category (fallback)"));
    }

    #[test]
    fn test_human_comparison() {
        let comparison = StrategyComparison {
            documents: 3,
            iterations: 2,
            strategies: vec![StrategyTiming {
                strategy: "kmp".to_string(),
                categorized: 2,
                uncategorized: 1,
                average_duration_us: 10,
            }],
            identical: true,
        };

        let text = format_result("", &comparison, &args("human")).unwrap();
        assert!(text.contains("Documents: 3, iterations: 2"));
        assert!(text.contains("Membership identical across strategies"));
    }
}
