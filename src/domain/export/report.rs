//! HTML and Markdown reports built from named data sections.

use std::fmt::Write as _;

use askama::Template;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ExportError, cell_text, data_url, first_row_keys};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Markdown,
}

impl ReportFormat {
    fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Markdown => "md",
        }
    }

    fn mime(self) -> &'static str {
        match self {
            ReportFormat::Html => "text/html",
            ReportFormat::Markdown => "text/markdown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub name: String,
    #[serde(default)]
    pub data: Value,
    /// Accepted for compatibility with chart-aware clients; not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportExport {
    pub title: String,
    pub format: ReportFormat,
    pub filename: String,
    pub content: String,
    pub size: usize,
    pub sections_count: usize,
    pub download_url: String,
    pub generated_at: DateTime<Utc>,
}

/// Section data as the renderers see it.
enum SectionBody {
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Summary(Vec<(String, String)>),
    Text(String),
    Empty,
}

impl SectionBody {
    fn from_value(data: &Value) -> Self {
        match data {
            Value::Array(rows) => match first_row_keys(rows) {
                Some(headers) => {
                    let rows = rows
                        .iter()
                        .map(|row| {
                            headers
                                .iter()
                                .map(|h| row.get(h).map(cell_text).unwrap_or_default())
                                .collect()
                        })
                        .collect();
                    SectionBody::Table { headers, rows }
                }
                None if rows.is_empty() => SectionBody::Empty,
                None => {
                    let items: Vec<String> = rows.iter().map(cell_text).collect();
                    SectionBody::Text(items.join(", "))
                }
            },
            Value::Object(map) => SectionBody::Summary(
                map.iter().map(|(k, v)| (k.clone(), cell_text(v))).collect(),
            ),
            Value::Null => SectionBody::Empty,
            scalar => SectionBody::Text(cell_text(scalar)),
        }
    }
}

struct SummaryItem {
    key: String,
    value: String,
}

struct SectionView {
    name: String,
    description: String,
    table_headers: Vec<String>,
    table_rows: Vec<Vec<String>>,
    summary: Vec<SummaryItem>,
    text: String,
}

impl SectionView {
    fn new(section: &ReportSection) -> Self {
        let mut view = SectionView {
            name: section.name.clone(),
            description: section.description.clone().unwrap_or_default(),
            table_headers: Vec::new(),
            table_rows: Vec::new(),
            summary: Vec::new(),
            text: String::new(),
        };
        match SectionBody::from_value(&section.data) {
            SectionBody::Table { headers, rows } => {
                view.table_headers = headers;
                view.table_rows = rows;
            }
            SectionBody::Summary(pairs) => {
                view.summary = pairs
                    .into_iter()
                    .map(|(key, value)| SummaryItem { key, value })
                    .collect();
            }
            SectionBody::Text(text) => view.text = text,
            SectionBody::Empty => {}
        }
        view
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    title: &'a str,
    generated_at: String,
    year: i32,
    sections: Vec<SectionView>,
}

fn escape_markdown_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn render_markdown(title: &str, sections: &[ReportSection], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {title}\n");
    let _ = writeln!(out, "**Generated:** {}\n", now.format("%Y-%m-%d %H:%M:%S UTC"));

    for section in sections {
        let _ = writeln!(out, "## {}\n", section.name);
        if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(out, "{description}\n");
        }

        match SectionBody::from_value(&section.data) {
            SectionBody::Table { headers, rows } => {
                let header: Vec<String> = headers.iter().map(|h| escape_markdown_cell(h)).collect();
                let _ = writeln!(out, "| {} |", header.join(" | "));
                let _ = writeln!(out, "| {} |", vec!["---"; headers.len()].join(" | "));
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|c| escape_markdown_cell(c)).collect();
                    let _ = writeln!(out, "| {} |", cells.join(" | "));
                }
                out.push('\n');
            }
            SectionBody::Summary(pairs) => {
                for (key, value) in pairs {
                    let _ = writeln!(out, "- **{key}:** {value}");
                }
                out.push('\n');
            }
            SectionBody::Text(text) => {
                let _ = writeln!(out, "{text}\n");
            }
            SectionBody::Empty => {}
        }
    }

    let _ = write!(out, "---\n*Generated by adtools-web | {}*", now.year());
    out
}

fn render_html(
    title: &str,
    sections: &[ReportSection],
    now: DateTime<Utc>,
) -> Result<String, ExportError> {
    let page = ReportPage {
        title,
        generated_at: now.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        year: now.year(),
        sections: sections.iter().map(SectionView::new).collect(),
    };
    Ok(page.render()?)
}

/// Title reduced to ASCII alphanumerics and CJK ideographs, other
/// characters replaced by `_`.
fn filename_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || crate::domain::text::is_cjk_ideograph(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Renders a report.
///
/// Sections holding an array of objects become tables (columns from the
/// first row), object sections become key/value summaries. HTML output is
/// escaped by the template engine.
pub fn render_report(
    title: &str,
    sections: &[ReportSection],
    format: ReportFormat,
    now: DateTime<Utc>,
) -> Result<ReportExport, ExportError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ExportError::MissingTitle);
    }
    if sections.is_empty() {
        return Err(ExportError::NoSections);
    }

    let content = match format {
        ReportFormat::Html => render_html(title, sections, now)?,
        ReportFormat::Markdown => render_markdown(title, sections, now),
    };

    Ok(ReportExport {
        title: title.to_owned(),
        format,
        filename: format!(
            "{}_report_{}.{}",
            filename_stem(title),
            now.format("%Y-%m-%d"),
            format.extension()
        ),
        size: content.len(),
        sections_count: sections.len(),
        download_url: data_url(format.mime(), &content),
        content,
        generated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, 9, 30, 0).unwrap()
    }

    fn sections() -> Vec<ReportSection> {
        vec![
            ReportSection {
                name: "Top keywords".into(),
                data: json!([
                    {"keyword": "buy shoes", "clicks": 120},
                    {"keyword": "a|b", "clicks": 0}
                ]),
                chart_type: Some("bar".into()),
                description: Some("Last 30 days".into()),
            },
            ReportSection {
                name: "Totals".into(),
                data: json!({"impressions": 5400, "ctr": 0.031}),
                chart_type: None,
                description: None,
            },
        ]
    }

    #[test]
    fn test_markdown_report() {
        let report = render_report("Q2 Review", &sections(), ReportFormat::Markdown, now()).unwrap();

        assert_eq!(report.filename, "Q2_Review_report_2024-06-02.md");
        assert_eq!(report.sections_count, 2);
        assert!(report.content.starts_with("# Q2 Review\n"));
        assert!(report.content.contains("| keyword | clicks |\n| --- | --- |\n"));
        assert!(report.content.contains("| buy shoes | 120 |"));
        assert!(report.content.contains("| a\\|b | 0 |"));
        assert!(report.content.contains("- **impressions:** 5400"));
        assert!(report.content.contains("Last 30 days"));
        assert!(report.download_url.starts_with("data:text/markdown;"));
    }

    #[test]
    fn test_html_report_escapes_content() {
        let sections = vec![ReportSection {
            name: "<script>alert(1)</script>".into(),
            data: json!({"note": "<b>bold</b>"}),
            chart_type: None,
            description: None,
        }];
        let report = render_report("Weekly", &sections, ReportFormat::Html, now()).unwrap();

        assert!(report.content.contains("<title>Weekly</title>"));
        assert!(!report.content.contains("<script>alert(1)</script>"));
        assert!(report.content.contains("&lt;script&gt;"));
        assert!(!report.content.contains("<b>bold</b>"));
        assert_eq!(report.filename, "Weekly_report_2024-06-02.html");
    }

    #[test]
    fn test_html_report_renders_tables() {
        let report = render_report("T", &sections(), ReportFormat::Html, now()).unwrap();
        assert!(report.content.contains("<th>keyword</th>"));
        assert!(report.content.contains("<td>buy shoes</td>"));
    }

    #[test]
    fn test_report_requires_title_and_sections() {
        assert!(matches!(
            render_report("  ", &sections(), ReportFormat::Html, now()),
            Err(ExportError::MissingTitle)
        ));
        assert!(matches!(
            render_report("T", &[], ReportFormat::Html, now()),
            Err(ExportError::NoSections)
        ));
    }

    #[test]
    fn test_filename_stem_keeps_cjk() {
        assert_eq!(filename_stem("月报 2024/06"), "月报_2024_06");
    }
}
