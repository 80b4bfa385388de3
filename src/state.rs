use crate::chart::{ChartAdapter, SvgDoughnut};
use crate::controller::{RequestController, Workspace};
use crate::page::Page;
use crate::predict::HttpPredictor;
use crate::render::ResultRenderer;
use crate::session::SessionCounter;
use std::sync::Arc;

pub type AppController = RequestController<HttpPredictor, Page, SvgDoughnut>;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<AppController>,
}

impl AppState {
    pub fn new(predictor: HttpPredictor) -> Self {
        let workspace = Workspace::new(
            Page::default(),
            ResultRenderer::new(ChartAdapter::new(SvgDoughnut::default())),
            SessionCounter::new(),
        );
        Self {
            controller: Arc::new(RequestController::new(predictor, workspace)),
        }
    }
}
