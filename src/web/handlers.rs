//! Front-end page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// One form on the page, posting JSON to `endpoint`.
pub struct ToolForm {
    pub id: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    /// Pretty-printed example body pre-filled in the form.
    pub sample: &'static str,
}

/// A titled group of tool forms.
pub struct ToolGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tools: Vec<ToolForm>,
}

/// Template for the tool page.
///
/// Renders `templates/index.html`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
    pub groups: Vec<ToolGroup>,
}

fn tool_groups() -> Vec<ToolGroup> {
    vec![
        ToolGroup {
            id: "text",
            title: "Text analysis",
            description: "Word frequency, entity extraction, statistics and sentiment",
            tools: vec![
                ToolForm {
                    id: "word-frequency",
                    title: "Word frequency",
                    endpoint: "/api/text/word-frequency",
                    sample: r#"{"text": "Buy running shoes. Running shoes on sale!", "min_length": 2, "top_words": 20}"#,
                },
                ToolForm {
                    id: "extract",
                    title: "Extract entities",
                    endpoint: "/api/text/extract",
                    sample: r#"{"text": "Mail hi@example.com about #sale by @shop at https://example.com", "type": "all"}"#,
                },
                ToolForm {
                    id: "text-stats",
                    title: "Text statistics",
                    endpoint: "/api/text/stats",
                    sample: r#"{"text": "First sentence. Second one!\n\nNew paragraph?"}"#,
                },
                ToolForm {
                    id: "sentiment",
                    title: "Sentiment",
                    endpoint: "/api/text/sentiment",
                    sample: r#"{"text": "Great product, excellent support"}"#,
                },
            ],
        },
        ToolGroup {
            id: "sem",
            title: "SEM",
            description: "Keyword expansion and ad headline generation",
            tools: vec![
                ToolForm {
                    id: "keywords",
                    title: "Keyword generator",
                    endpoint: "/api/sem/keywords",
                    sample: r#"{"seeds": ["running shoes"], "modifiers": ["cheap"], "include_common_modifiers": true}"#,
                },
                ToolForm {
                    id: "ads",
                    title: "Ad variants",
                    endpoint: "/api/sem/ads",
                    sample: r#"{"product_name": "Widgets", "template": "Best {product} deal", "max_length": 30}"#,
                },
                ToolForm {
                    id: "ads-batch",
                    title: "Batch ads",
                    endpoint: "/api/sem/ads/batch",
                    sample: r#"{"products": ["Widgets", "Gadgets"], "template": "Shop {product} today", "max_length": 30}"#,
                },
            ],
        },
        ToolGroup {
            id: "url",
            title: "URL tools",
            description: "Parse, validate, clean and group URLs",
            tools: vec![
                ToolForm {
                    id: "url-parse",
                    title: "Parse",
                    endpoint: "/api/url/parse",
                    sample: r#"{"urls": ["https://www.example.com/a?x=1#top"]}"#,
                },
                ToolForm {
                    id: "url-validate",
                    title: "Validate",
                    endpoint: "/api/url/validate",
                    sample: r#"{"urls": ["https://example.com"], "type": "structure"}"#,
                },
                ToolForm {
                    id: "url-cleanup",
                    title: "Remove tracking",
                    endpoint: "/api/url/cleanup",
                    sample: r#"{"urls": ["https://example.com/?utm_source=x&id=7"]}"#,
                },
                ToolForm {
                    id: "domain-analysis",
                    title: "Domain analysis",
                    endpoint: "/api/url/domain-analysis",
                    sample: r#"{"urls": ["https://www.example.com/a", "https://blog.example.com/b"]}"#,
                },
            ],
        },
        ToolGroup {
            id: "seo",
            title: "SEO",
            description: "Page signals, search results, sitemaps and robots.txt",
            tools: vec![
                ToolForm {
                    id: "crawl",
                    title: "Page analysis",
                    endpoint: "/api/seo/crawl",
                    sample: r#"{"url": "https://example.com", "limit": 3}"#,
                },
                ToolForm {
                    id: "serp",
                    title: "Search results",
                    endpoint: "/api/seo/serp",
                    sample: r#"{"keyword": "running shoes", "count": 10}"#,
                },
                ToolForm {
                    id: "sitemap",
                    title: "Sitemap",
                    endpoint: "/api/seo/sitemap",
                    sample: r#"{"url": "https://example.com/sitemap.xml"}"#,
                },
                ToolForm {
                    id: "robots",
                    title: "robots.txt",
                    endpoint: "/api/seo/robots",
                    sample: r#"{"url": "https://example.com"}"#,
                },
            ],
        },
        ToolGroup {
            id: "social",
            title: "Social",
            description: "Fit a post to a platform's length and tagging norms",
            tools: vec![ToolForm {
                id: "social-optimizer",
                title: "Content optimizer",
                endpoint: "/api/social/content-optimizer",
                sample: r#"{"content": "Fresh trail shoes are in #running", "platform": "twitter", "target_audience": "runners"}"#,
            }],
        },
        ToolGroup {
            id: "export",
            title: "Export",
            description: "CSV, JSON and report downloads",
            tools: vec![
                ToolForm {
                    id: "export-csv",
                    title: "CSV",
                    endpoint: "/api/export/csv",
                    sample: r#"{"data": [{"keyword": "shoes", "volume": 1200}], "filename": "keywords"}"#,
                },
                ToolForm {
                    id: "export-json",
                    title: "JSON",
                    endpoint: "/api/export/json",
                    sample: r#"{"data": {"keywords": ["shoes"]}, "filename": "keywords", "pretty": true}"#,
                },
                ToolForm {
                    id: "export-report",
                    title: "Report",
                    endpoint: "/api/export/report",
                    sample: r#"{"title": "Keyword audit", "format": "html", "sections": [{"name": "Totals", "data": {"keywords": 42}}]}"#,
                },
            ],
        },
    ]
}

/// Renders the tool page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
        groups: tool_groups(),
    }
}

/// Browsers request a favicon on every page load; answer without a body.
///
/// # Endpoint
///
/// `GET /favicon.ico`
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
