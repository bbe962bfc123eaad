//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::{settings::Style, Table, Tabled};
use trustguard::{AnalysisSource, AuthenticityResult, ComponentKind, Review, Trend, TrustScore};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {s}\n\
                 Valid formats: pretty, json, csv, yaml"
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Print any serializable value as JSON or YAML.
///
/// Returns `false` for formats the caller has to render itself.
pub fn print_structured<T: Serialize>(format: OutputFormat, value: &T) -> Result<bool> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Pretty | OutputFormat::Csv => return Ok(false),
    }
    Ok(true)
}

/// Colour a 0-100 score by how trustworthy it is.
pub fn score_colored(score: f64) -> ColoredString {
    let text = format!("{score:.0}");
    if score >= 80.0 {
        text.green().bold()
    } else if score >= 60.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn trend_colored(trend: Trend) -> ColoredString {
    match trend {
        Trend::Improving => "improving".green(),
        Trend::Stable => "stable".normal(),
        Trend::Declining => "declining".red(),
    }
}

#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
}

/// Render a trust score as a header line and component table.
pub fn print_trust_score(score: &TrustScore) {
    println!(
        "{} {}  {} {}",
        "Trust score:".bold(),
        score_colored(f64::from(score.overall)),
        "Trend:".bold(),
        trend_colored(score.trend)
    );
    println!(
        "{} {}",
        "Updated:".bold(),
        score.last_updated.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    );

    let rows: Vec<ComponentRow> = ComponentKind::ALL
        .iter()
        .map(|&kind| {
            let (value, weight) = score.components.score_and_weight(kind);
            ComponentRow {
                component: kind.to_string(),
                score: format!("{value:.0}"),
                weight: format!("{weight:.2}"),
                contribution: format!("{:.1}", value * weight),
            }
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

#[derive(Tabled)]
struct ReviewRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Rating")]
    rating: u8,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Fake")]
    fake: &'static str,
    #[tabled(rename = "Reasons")]
    reasons: String,
}

/// Render reviews as a table.
pub fn print_review_table(reviews: &[Review]) {
    if reviews.is_empty() {
        println!("{}", "No reviews.".dimmed());
        return;
    }

    let rows: Vec<ReviewRow> = reviews
        .iter()
        .map(|r| ReviewRow {
            id: r.id.clone(),
            user: r.user_name.clone(),
            rating: r.rating,
            score: format!("{:.0}", r.authenticity_score),
            fake: if r.is_fake { "yes" } else { "no" },
            reasons: r.fake_reasons.join("; "),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

#[derive(Serialize)]
struct ReviewRecord<'a> {
    id: &'a str,
    product_id: &'a str,
    user_name: &'a str,
    rating: u8,
    verified: bool,
    authenticity_score: f64,
    is_fake: bool,
    fake_reasons: String,
}

/// Write reviews as CSV to stdout.
pub fn write_review_csv(reviews: &[Review]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
    for r in reviews {
        writer.serialize(ReviewRecord {
            id: &r.id,
            product_id: &r.product_id,
            user_name: &r.user_name,
            rating: r.rating,
            verified: r.verified,
            authenticity_score: r.authenticity_score,
            is_fake: r.is_fake,
            fake_reasons: r.fake_reasons.join("; "),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct ResultRecord<'a> {
    score: f64,
    is_fake: bool,
    source: AnalysisSource,
    reasons: &'a str,
}

/// Write one authenticity result as a CSV header and row.
pub fn write_result_csv<W: std::io::Write>(out: W, result: &AuthenticityResult) -> Result<()> {
    let reasons = result.reasons.join("; ");
    let mut writer = csv::Writer::from_writer(out);
    writer.serialize(ResultRecord {
        score: result.score,
        is_fake: result.is_fake,
        source: result.source,
        reasons: &reasons,
    })?;
    writer.flush()?;
    Ok(())
}

/// Write a trust score's components as CSV to stdout.
pub fn write_trust_score_csv(score: &TrustScore) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
    writer.write_record(["component", "score", "weight"])?;
    for kind in ComponentKind::ALL {
        let (value, weight) = score.components.score_and_weight(kind);
        writer.write_record([kind.as_str().to_string(), value.to_string(), weight.to_string()])?;
    }
    writer.write_record(["overall".to_string(), score.overall.to_string(), "1".to_string()])?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
        assert_eq!("YML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn result_csv_quotes_awkward_reasons() {
        let result = AuthenticityResult {
            score: 42.0,
            is_fake: true,
            reasons: vec!["Said \"best\" twice".into(), "line\nbreak, comma".into()],
            source: AnalysisSource::Remote,
        };
        let mut buf = Vec::new();
        write_result_csv(&mut buf, &result).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["score", "is_fake", "source", "reasons"]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "true");
        assert_eq!(&rows[0][2], "remote");
        assert_eq!(&rows[0][3], "Said \"best\" twice; line\nbreak, comma");
    }

    #[test]
    fn display_matches_parse() {
        for format in [
            OutputFormat::Pretty,
            OutputFormat::Json,
            OutputFormat::Csv,
            OutputFormat::Yaml,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
