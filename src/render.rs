use crate::aggregate::aggregate;
use crate::chart::{ChartAdapter, ChartBackend};
use crate::models::{AnalysisResult, AspectTag};

/// `scrollIntoView` options, as the browser spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub behavior: &'static str,
    pub block: &'static str,
}

impl ScrollOptions {
    /// Smooth scroll to the nearest edge, leaving ancestors alone.
    pub const SMOOTH_NEAREST: Self = Self {
        behavior: "smooth",
        block: "nearest",
    };
}

/// Document operations needed to present one analysis.
pub trait ResultsSurface {
    fn show_results(&mut self);
    fn hide_empty_state(&mut self);
    fn set_badge(&mut self, label: &str, icon: &str);
    /// Replaces whatever category class the badge carried before.
    fn set_badge_class(&mut self, class: &str);
    fn set_badge_details(&mut self, details: Option<String>);
    fn clear_aspect_tags(&mut self);
    fn push_aspect_tag(&mut self, tag: AspectTag);
    fn scroll_into_view(&mut self, options: ScrollOptions);
}

pub struct ResultRenderer<B: ChartBackend> {
    chart: ChartAdapter<B>,
}

impl<B: ChartBackend> ResultRenderer<B> {
    pub fn new(chart: ChartAdapter<B>) -> Self {
        Self { chart }
    }

    pub fn chart(&self) -> &ChartAdapter<B> {
        &self.chart
    }

    pub fn render<S: ResultsSurface>(&mut self, surface: &mut S, result: &AnalysisResult) {
        surface.hide_empty_state();
        surface.show_results();

        let sentiment = &result.sentiment;
        surface.set_badge(sentiment.as_str(), sentiment.icon());
        surface.set_badge_class(&sentiment.css_class());
        surface.set_badge_details(badge_details(result));

        surface.clear_aspect_tags();
        for (name, aspect) in &result.aspects {
            if !aspect.is_mentioned() {
                continue;
            }
            surface.push_aspect_tag(AspectTag {
                name: name.clone(),
                sentiment: *aspect,
            });
        }

        self.chart.render(&aggregate(&result.aspects));

        surface.scroll_into_view(ScrollOptions::SMOOTH_NEAREST);
    }
}

fn badge_details(result: &AnalysisResult) -> Option<String> {
    match (&result.model_sentiment, &result.heuristic_sentiment) {
        (None, None) => None,
        (Some(model), None) => Some(format!("model: {model}")),
        (None, Some(heuristic)) => Some(format!("heuristic: {heuristic}")),
        (Some(model), Some(heuristic)) => {
            Some(format!("model: {model} · heuristic: {heuristic}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::SvgDoughnut;
    use crate::models::{AspectSentiment, CategoryCounts, SentimentLabel};
    use crate::page::Page;
    use std::collections::BTreeMap;

    fn result(sentiment: &str, aspects: &[(&str, AspectSentiment)]) -> AnalysisResult {
        AnalysisResult {
            sentiment: SentimentLabel::from(sentiment.to_string()),
            aspects: aspects
                .iter()
                .map(|(name, s)| (name.to_string(), *s))
                .collect::<BTreeMap<_, _>>(),
            model_sentiment: None,
            heuristic_sentiment: None,
        }
    }

    fn renderer() -> ResultRenderer<SvgDoughnut> {
        ResultRenderer::new(ChartAdapter::new(SvgDoughnut::default()))
    }

    #[test]
    fn renders_badge_tags_and_chart() {
        let mut page = Page::default();
        let mut renderer = renderer();
        let analysis = result(
            "Positive",
            &[
                ("battery", AspectSentiment::Positive),
                ("screen", AspectSentiment::NotMentioned),
            ],
        );

        renderer.render(&mut page, &analysis);

        assert!(page.results_visible);
        assert!(!page.empty_state_visible);
        assert_eq!(page.badge.label, "Positive");
        assert_eq!(page.badge.icon, "😊");
        assert_eq!(page.badge.category, Some("positive".to_string()));
        assert_eq!(
            page.tags,
            vec![AspectTag {
                name: "battery".into(),
                sentiment: AspectSentiment::Positive
            }]
        );
        assert_eq!(page.scroll_request, Some(ScrollOptions::SMOOTH_NEAREST));
        let markup = renderer.chart().backend().markup().unwrap();
        assert!(markup.contains("Positive <strong>1</strong>"));
    }

    #[test]
    fn rendering_twice_does_not_accumulate() {
        let mut page = Page::default();
        let mut renderer = renderer();
        let analysis = result(
            "Negative",
            &[
                ("price", AspectSentiment::Negative),
                ("sound", AspectSentiment::Neutral),
            ],
        );

        renderer.render(&mut page, &analysis);
        let first_tags = page.tags.clone();
        let first_chart = renderer.chart().backend().markup().map(str::to_owned);
        renderer.render(&mut page, &analysis);

        assert!(page.results_visible);
        assert_eq!(page.badge.category, Some("negative".to_string()));
        assert_eq!(page.tags, first_tags);
        assert_eq!(page.tags.len(), 2);
        assert_eq!(renderer.chart().backend().markup().map(str::to_owned), first_chart);
    }

    #[test]
    fn new_result_replaces_badge_class_and_tags() {
        let mut page = Page::default();
        let mut renderer = renderer();
        renderer.render(
            &mut page,
            &result("Positive", &[("battery", AspectSentiment::Positive)]),
        );
        renderer.render(&mut page, &result("Neutral", &[]));

        assert_eq!(page.badge.category, Some("neutral".to_string()));
        assert_eq!(page.badge.icon, "😐");
        assert!(page.tags.is_empty());
        let markup = renderer.chart().backend().markup().unwrap();
        assert!(markup.contains("No aspects"));
    }

    #[test]
    fn unknown_label_uses_positive_glyph() {
        let mut page = Page::default();
        let mut renderer = renderer();
        renderer.render(&mut page, &result("Mixed", &[]));

        assert_eq!(page.badge.label, "Mixed");
        assert_eq!(page.badge.icon, "😊");
        assert_eq!(page.badge.category, Some("mixed".to_string()));
    }

    #[test]
    fn badge_details_include_backend_extras() {
        let mut analysis = result("Neutral", &[]);
        analysis.model_sentiment = Some("Positive".into());
        analysis.heuristic_sentiment = Some("Neutral".into());
        assert_eq!(
            badge_details(&analysis).as_deref(),
            Some("model: Positive · heuristic: Neutral")
        );
        assert_eq!(
            crate::aggregate::aggregate(&analysis.aspects),
            CategoryCounts::default()
        );
    }
}
