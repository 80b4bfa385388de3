use crate::controller::{Notifier, SessionDisplay, TriggerControl};
use crate::models::AspectTag;
use crate::render::{ResultsSurface, ScrollOptions};

pub const IDLE_LABEL: &str = "Analyze Sentiment";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub icon: String,
    pub category: Option<String>,
    pub details: Option<String>,
}

impl Badge {
    pub fn class_attr(&self) -> String {
        match &self.category {
            Some(category) => format!("sentiment-display {category}"),
            None => "sentiment-display".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub enabled: bool,
    pub label: String,
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            enabled: true,
            label: IDLE_LABEL.to_string(),
        }
    }
}

/// In-memory document backing the single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub results_visible: bool,
    pub empty_state_visible: bool,
    pub badge: Badge,
    pub tags: Vec<AspectTag>,
    pub trigger: Trigger,
    pub total_analyses: u64,
    pub draft: String,
    pub alert: Option<String>,
    pub scroll_request: Option<ScrollOptions>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            results_visible: false,
            empty_state_visible: true,
            badge: Badge::default(),
            tags: Vec::new(),
            trigger: Trigger::default(),
            total_analyses: 0,
            draft: String::new(),
            alert: None,
            scroll_request: None,
        }
    }
}

/// One-shot effects delivered with the next page load.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub alert: Option<String>,
    pub scroll: Option<ScrollOptions>,
}

impl Page {
    pub fn take_effects(&mut self) -> Effects {
        Effects {
            alert: self.alert.take(),
            scroll: self.scroll_request.take(),
        }
    }
}

impl ResultsSurface for Page {
    fn show_results(&mut self) {
        self.results_visible = true;
    }

    fn hide_empty_state(&mut self) {
        self.empty_state_visible = false;
    }

    fn set_badge(&mut self, label: &str, icon: &str) {
        self.badge.label = label.to_string();
        self.badge.icon = icon.to_string();
    }

    fn set_badge_class(&mut self, class: &str) {
        self.badge.category = Some(class.to_string());
    }

    fn set_badge_details(&mut self, details: Option<String>) {
        self.badge.details = details;
    }

    fn clear_aspect_tags(&mut self) {
        self.tags.clear();
    }

    fn push_aspect_tag(&mut self, tag: AspectTag) {
        self.tags.push(tag);
    }

    fn scroll_into_view(&mut self, options: ScrollOptions) {
        self.scroll_request = Some(options);
    }
}

impl TriggerControl for Page {
    fn set_enabled(&mut self, enabled: bool) {
        self.trigger.enabled = enabled;
    }

    fn label(&self) -> String {
        self.trigger.label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.trigger.label = label.to_string();
    }
}

impl Notifier for Page {
    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

impl SessionDisplay for Page {
    fn show_total(&mut self, total: u64) {
        self.total_analyses = total;
    }
}
