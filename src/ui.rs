use crate::page::{Effects, Page};

pub struct IndexView<'a> {
    pub page: &'a Page,
    pub chart: Option<&'a str>,
    pub effects: &'a Effects,
    pub started_at: String,
}

pub fn render_index(view: &IndexView<'_>) -> String {
    let page = view.page;
    let button_attrs = if page.trigger.enabled { "" } else { " disabled" };
    let results_class = if page.results_visible {
        "results"
    } else {
        "results results-hidden"
    };
    let empty_style = if page.empty_state_visible {
        ""
    } else {
        " style=\"display: none\""
    };
    let details = page
        .badge
        .details
        .as_deref()
        .map(|details| format!("<p class=\"sentiment-details\">{}</p>", escape_html(details)))
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{BUTTON_ATTRS}}", button_attrs)
        .replace("{{BUTTON_LABEL}}", &escape_html(&page.trigger.label))
        .replace("{{EMPTY_STYLE}}", empty_style)
        .replace("{{RESULTS_CLASS}}", results_class)
        .replace("{{BADGE_CLASS}}", &escape_html(&page.badge.class_attr()))
        .replace("{{BADGE_ICON}}", &escape_html(&page.badge.icon))
        .replace("{{BADGE_LABEL}}", &escape_html(&page.badge.label))
        .replace("{{BADGE_DETAILS}}", &details)
        .replace("{{CHART}}", view.chart.unwrap_or_default())
        .replace("{{TOTAL}}", &page.total_analyses.to_string())
        .replace("{{STARTED}}", &view.started_at)
        .replace("{{ASPECT_TAGS}}", &render_tags(page))
        .replace("{{EFFECTS}}", &render_effects(view.effects))
        .replace("{{DRAFT}}", &escape_html(&page.draft))
}

fn render_tags(page: &Page) -> String {
    page.tags
        .iter()
        .map(|tag| {
            format!(
                "<div class=\"{}\"><div class=\"aspect-tag-name\">{}</div><div class=\"aspect-tag-sentiment\">{}</div></div>",
                escape_html(&tag.css_class()),
                escape_html(&tag.name),
                tag.sentiment,
            )
        })
        .collect()
}

fn render_effects(effects: &Effects) -> String {
    let mut script = String::new();
    if let Some(options) = effects.scroll {
        script.push_str(&format!(
            "document.getElementById('resultsContainer').scrollIntoView({{ behavior: '{}', block: '{}' }});",
            options.behavior, options.block,
        ));
    }
    if let Some(message) = &effects.alert {
        let literal = serde_json::to_string(message)
            .unwrap_or_else(|_| "\"\"".to_string())
            .replace("</", "<\\/");
        script.push_str(&format!("window.setTimeout(() => alert({literal}), 0);"));
    }
    if script.is_empty() {
        return script;
    }
    format!("<script>{script}</script>")
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            // Keeps user text from forming template placeholders.
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Review Lens</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap');

    :root {
      --bg: #0f172a;
      --card: #111c33;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --accent: #6366f1;
      --positive: #10b981;
      --negative: #ef4444;
      --neutral: #f59e0b;
      --radius: 18px;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top left, #1e1b4b, var(--bg) 55%);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 40px 18px;
    }

    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0 0 6px;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .layout {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: var(--radius);
      padding: 24px;
      border: 1px solid rgba(148, 163, 184, 0.12);
    }

    textarea {
      width: 100%;
      min-height: 180px;
      resize: vertical;
      border-radius: 12px;
      border: 1px solid rgba(148, 163, 184, 0.3);
      background: #0b1324;
      color: var(--ink);
      padding: 14px;
      font: inherit;
    }

    button {
      margin-top: 16px;
      width: 100%;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      color: white;
      background: var(--accent);
      cursor: pointer;
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    .session {
      margin-top: 18px;
      display: flex;
      justify-content: space-between;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .session strong {
      color: var(--ink);
      font-size: 1.2rem;
    }

    .empty-state {
      text-align: center;
      color: var(--muted);
      padding: 48px 12px;
    }

    .results-hidden {
      display: none;
    }

    .sentiment-display {
      display: flex;
      align-items: center;
      gap: 14px;
      padding: 16px 20px;
      border-radius: 14px;
      background: rgba(148, 163, 184, 0.1);
    }

    .sentiment-display.positive { background: rgba(16, 185, 129, 0.15); }
    .sentiment-display.negative { background: rgba(239, 68, 68, 0.15); }
    .sentiment-display.neutral { background: rgba(245, 158, 11, 0.15); }

    .sentiment-icon {
      font-size: 2.4rem;
    }

    .sentiment-text {
      font-size: 1.5rem;
      font-weight: 700;
    }

    .sentiment-details {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .aspects-grid {
      margin: 18px 0;
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(130px, 1fr));
      gap: 10px;
    }

    .aspect-tag {
      border-radius: 12px;
      padding: 10px 12px;
      border-left: 4px solid var(--muted);
      background: rgba(148, 163, 184, 0.08);
    }

    .aspect-tag.positive { border-color: var(--positive); }
    .aspect-tag.negative { border-color: var(--negative); }
    .aspect-tag.neutral { border-color: var(--neutral); }

    .aspect-tag-name {
      font-weight: 600;
      text-transform: capitalize;
    }

    .aspect-tag-sentiment {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .chart-container {
      max-width: 280px;
      margin: 0 auto;
    }

    .doughnut-empty {
      font-size: 3px;
      fill: var(--muted);
    }

    .chart-legend {
      list-style: none;
      padding: 0;
      margin: 12px 0 0;
      display: flex;
      justify-content: center;
      gap: 14px;
      font-size: 0.85rem;
    }

    .swatch {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Review Lens</h1>
      <p class="subtitle">Overall and per-aspect sentiment for product and service reviews.</p>
    </header>

    <section class="layout">
      <div class="card">
        <form id="analyze-form" method="post" action="/analyze">
          <textarea id="reviewInput" name="text" placeholder="Paste a review here...">{{DRAFT}}</textarea>
          <button id="analyzeBtn" type="submit"{{BUTTON_ATTRS}}><span class="btn-text">{{BUTTON_LABEL}}</span></button>
        </form>
        <div class="session">
          <span>Reviews analyzed this session <strong id="totalReviews">{{TOTAL}}</strong></span>
          <span>since {{STARTED}}</span>
        </div>
      </div>

      <div class="card">
        <div id="emptyState" class="empty-state"{{EMPTY_STYLE}}>
          <p>Results appear here after you analyze a review.</p>
        </div>
        <div id="resultsContainer" class="{{RESULTS_CLASS}}">
          <div id="sentimentBadge" class="{{BADGE_CLASS}}">
            <span class="sentiment-icon">{{BADGE_ICON}}</span>
            <div>
              <div id="sentimentText" class="sentiment-text">{{BADGE_LABEL}}</div>
              {{BADGE_DETAILS}}
            </div>
          </div>
          <div id="aspectsGrid" class="aspects-grid">{{ASPECT_TAGS}}</div>
          <div class="chart-container" id="aspectChart">{{CHART}}</div>
        </div>
      </div>
    </section>
  </main>

  <script>
    const form = document.getElementById('analyze-form');
    const button = document.getElementById('analyzeBtn');
    form.addEventListener('submit', (event) => {
      if (button.disabled) {
        event.preventDefault();
        return;
      }
      button.disabled = true;
      button.querySelector('.btn-text').textContent = 'Analyzing...';
    });
  </script>
  {{EFFECTS}}
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Notifier, TriggerControl};
    use crate::models::{AspectSentiment, AspectTag};
    use crate::render::{ResultsSurface, ScrollOptions};

    fn render(page: &Page, effects: &Effects, chart: Option<&str>) -> String {
        render_index(&IndexView {
            page,
            chart,
            effects,
            started_at: "09:00:00".into(),
        })
    }

    #[test]
    fn fresh_page_shows_empty_state() {
        let html = render(&Page::default(), &Effects::default(), None);
        assert!(html.contains(r#"class="results results-hidden""#));
        assert!(html.contains(r#"<strong id="totalReviews">0</strong>"#));
        assert!(html.contains(r#"<span class="btn-text">Analyze Sentiment</span>"#));
        assert!(!html.contains("scrollIntoView"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn rendered_page_shows_badge_tags_and_effects() {
        let mut page = Page::default();
        page.hide_empty_state();
        page.show_results();
        page.set_badge("Negative", "😞");
        page.set_badge_class("negative");
        page.push_aspect_tag(AspectTag {
            name: "battery".into(),
            sentiment: AspectSentiment::Negative,
        });
        page.scroll_into_view(ScrollOptions::SMOOTH_NEAREST);
        page.alert("it's </script> time");
        let effects = page.take_effects();

        let html = render(&page, &effects, Some("<svg class=\"doughnut\"></svg>"));
        assert!(html.contains(r#"id="resultsContainer" class="results""#));
        assert!(html.contains(r#"class="sentiment-display negative""#));
        assert!(html.contains(
            r#"<div class="aspect-tag negative"><div class="aspect-tag-name">battery</div>"#
        ));
        assert!(html.contains("<svg class=\"doughnut\"></svg>"));
        assert!(html.contains("behavior: 'smooth', block: 'nearest'"));
        assert!(html.contains(r#"alert("it's <\/script> time")"#));
    }

    #[test]
    fn busy_trigger_is_disabled_and_user_text_is_escaped() {
        let mut page = Page::default();
        page.set_enabled(false);
        page.set_label("Analyzing...");
        page.draft = "<b>{{CHART}}</b>".into();

        let html = render(&page, &Effects::default(), Some("<svg/>"));
        assert!(html.contains(r#"type="submit" disabled>"#));
        assert!(html.contains("Analyzing..."));
        assert!(html.contains("&lt;b&gt;&#123;&#123;CHART}}&lt;/b&gt;"));
    }
}
