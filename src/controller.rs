use crate::aggregate::aggregate;
use crate::chart::ChartBackend;
use crate::models::{AnalysisResult, CategoryCounts, Prediction};
use crate::predict::{Predictor, TransportError};
use crate::render::{ResultRenderer, ResultsSurface};
use crate::session::SessionCounter;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

pub const BUSY_LABEL: &str = "Analyzing...";
pub const VALIDATION_MESSAGE: &str = "Please enter a review to analyze!";
pub const TRANSPORT_MESSAGE: &str = "An error occurred while analyzing the review.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Idle,
    Submitting,
}

impl UiPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
        }
    }
}

pub trait TriggerControl {
    fn set_enabled(&mut self, enabled: bool);
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
}

/// Blocking user-facing notification.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

pub trait SessionDisplay {
    fn show_total(&mut self, total: u64);
}

/// Everything the controller drives on the page.
pub trait View: ResultsSurface + TriggerControl + Notifier + SessionDisplay {}

impl<T: ResultsSurface + TriggerControl + Notifier + SessionDisplay> View for T {}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please enter a review to analyze!")]
    Validation,
    #[error("a review is already being analyzed")]
    Busy,
    #[error("{0}")]
    Service(String),
    #[error("An error occurred while analyzing the review.")]
    Transport(#[source] TransportError),
}

#[derive(Debug, Clone)]
pub struct Analyzed {
    pub result: AnalysisResult,
    pub counts: CategoryCounts,
    pub total_analyses: u64,
}

/// Page state guarded by the controller. One render cycle holds the lock
/// from start to finish.
pub struct Workspace<V, B: ChartBackend> {
    pub view: V,
    pub renderer: ResultRenderer<B>,
    pub counter: SessionCounter,
    phase: UiPhase,
    idle_label: Option<String>,
}

impl<V: View, B: ChartBackend> Workspace<V, B> {
    pub fn new(view: V, renderer: ResultRenderer<B>, counter: SessionCounter) -> Self {
        Self {
            view,
            renderer,
            counter,
            phase: UiPhase::Idle,
            idle_label: None,
        }
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    fn begin_submit(&mut self) {
        self.phase = UiPhase::Submitting;
        self.idle_label = Some(self.view.label());
        self.view.set_enabled(false);
        self.view.set_label(BUSY_LABEL);
    }

    fn finish_submit(&mut self) {
        if let Some(label) = self.idle_label.take() {
            self.view.set_label(&label);
        }
        self.view.set_enabled(true);
        self.phase = UiPhase::Idle;
    }
}

pub struct RequestController<P, V, B: ChartBackend> {
    predictor: P,
    workspace: Mutex<Workspace<V, B>>,
}

impl<P, V, B> RequestController<P, V, B>
where
    P: Predictor,
    V: View + Send + 'static,
    B: ChartBackend + Send + 'static,
    B::Instance: Send,
{
    pub fn new(predictor: P, workspace: Workspace<V, B>) -> Self {
        Self {
            predictor,
            workspace: Mutex::new(workspace),
        }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub async fn workspace(&self) -> MutexGuard<'_, Workspace<V, B>> {
        self.workspace.lock().await
    }

    /// Run one analysis for `raw`. The request, once issued, runs to
    /// completion on its own task even if the caller goes away, and the
    /// trigger is back to idle before this returns.
    pub async fn submit(self: &Arc<Self>, raw: &str) -> Result<Analyzed, SubmitError> {
        let text = raw.trim();
        if text.is_empty() {
            self.workspace.lock().await.view.alert(VALIDATION_MESSAGE);
            return Err(SubmitError::Validation);
        }

        {
            let mut workspace = self.workspace.lock().await;
            if workspace.phase == UiPhase::Submitting {
                debug!("submission ignored while another is in flight");
                return Err(SubmitError::Busy);
            }
            workspace.begin_submit();
        }

        info!(chars = text.chars().count(), "submitting review for analysis");
        let worker = {
            let controller = Arc::clone(self);
            let text = text.to_string();
            tokio::spawn(async move {
                let outcome = controller.predictor.predict(&text).await;
                controller.complete(outcome).await
            })
        };
        // The supervisor restores idle on a failed worker whether or not the
        // caller is still waiting.
        let supervisor = {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                match worker.await {
                    Ok(outcome) => outcome,
                    Err(err) => controller.abandon(err).await,
                }
            })
        };

        match supervisor.await {
            Ok(outcome) => outcome,
            Err(err) => self.abandon(err).await,
        }
    }

    async fn abandon(&self, err: JoinError) -> Result<Analyzed, SubmitError> {
        error!("prediction task failed: {err}");
        let mut workspace = self.workspace.lock().await;
        workspace.view.alert(TRANSPORT_MESSAGE);
        workspace.finish_submit();
        Err(SubmitError::Transport(TransportError::Aborted))
    }

    async fn complete(
        &self,
        outcome: Result<Prediction, TransportError>,
    ) -> Result<Analyzed, SubmitError> {
        let mut workspace = self.workspace.lock().await;
        let routed = match outcome {
            Ok(Prediction::Analysis(result)) => {
                let Workspace {
                    view,
                    renderer,
                    counter,
                    ..
                } = &mut *workspace;
                renderer.render(view, &result);
                let total = counter.increment();
                view.show_total(total);
                info!(
                    sentiment = %result.sentiment,
                    total_analyses = total,
                    "analysis rendered"
                );
                Ok(Analyzed {
                    counts: aggregate(&result.aspects),
                    result,
                    total_analyses: total,
                })
            }
            Ok(Prediction::ServiceError { error: message }) => {
                warn!("prediction service rejected review: {message}");
                workspace.view.alert(&message);
                Err(SubmitError::Service(message))
            }
            Err(err) => {
                error!("prediction transport failure: {err}");
                workspace.view.alert(TRANSPORT_MESSAGE);
                Err(SubmitError::Transport(err))
            }
        };
        workspace.finish_submit();
        routed
    }
}
