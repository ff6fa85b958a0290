//! Task runner: classify, generate and summarize, with the staged progress
//! reporting of a long-running agent job.

use crate::history::TaskHistory;
use crate::SessionError;
use ag_classifier::classify;
use ag_core::category::TaskCategory;
use ag_core::prefs::Preferences;
use ag_core::task::{TaskMode, TaskResult};
use ag_mock::{summarize, MockGenerator};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Progress points at which a status message is emitted.
pub const PROGRESS_STAGES: [u8; 4] = [0, 30, 60, 90];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub category: TaskCategory,
    pub progress: u8,
    pub message: &'static str,
}

pub type StatusCallback = Arc<dyn Fn(&StatusUpdate) + Send + Sync>;

pub struct TaskRunner<R = StdRng> {
    generator: MockGenerator<R>,
    prefs: Preferences,
    history: Option<TaskHistory>,
    on_status: Option<StatusCallback>,
}

impl TaskRunner<StdRng> {
    pub fn new(prefs: Preferences) -> Self {
        Self::with_generator(MockGenerator::new(), prefs)
    }
}

impl<R: Rng> TaskRunner<R> {
    pub fn with_generator(generator: MockGenerator<R>, prefs: Preferences) -> Self {
        Self {
            generator,
            prefs,
            history: None,
            on_status: None,
        }
    }

    /// Record every submitted result.
    pub fn with_history(mut self, history: TaskHistory) -> Self {
        self.history = Some(history);
        self
    }

    /// Forward status updates to `callback` in addition to the log.
    pub fn on_status(mut self, callback: impl Fn(&StatusUpdate) + Send + Sync + 'static) -> Self {
        self.on_status = Some(Arc::new(callback));
        self
    }

    pub fn history(&self) -> Option<&TaskHistory> {
        self.history.as_ref()
    }

    /// Run the pipeline immediately. Nothing is recorded.
    pub fn run(&mut self, text: &str, mode: TaskMode) -> TaskResult {
        let category = classify(text);
        self.execute(text, mode, category)
    }

    /// Report progress over the configured delay, then run the pipeline and
    /// record the result. Dropping the future early leaves history untouched.
    pub async fn submit(&mut self, text: &str, mode: TaskMode) -> Result<TaskResult, SessionError> {
        let category = classify(text);
        let stage_delay = Duration::from_millis(
            self.prefs.simulated_delay_ms / PROGRESS_STAGES.len() as u64,
        );

        for progress in PROGRESS_STAGES {
            let update = StatusUpdate {
                category,
                progress,
                message: category.status_message(progress),
            };
            tracing::info!(
                category = category.as_str(),
                progress,
                "{}",
                update.message
            );
            if let Some(callback) = &self.on_status {
                callback(&update);
            }
            if !stage_delay.is_zero() {
                tokio::time::sleep(stage_delay).await;
            }
        }

        let result = self.execute(text, mode, category);
        if let Some(history) = &self.history {
            history.record(&result)?;
        }
        Ok(result)
    }

    fn execute(&mut self, text: &str, mode: TaskMode, category: TaskCategory) -> TaskResult {
        let payload = self.generator.generate(category, text);
        let summary = summarize(text, mode, category, payload.as_ref());
        tracing::info!(category = category.as_str(), mode = mode.as_str(), "task completed");
        TaskResult::completed(text, mode, category, payload, summary)
    }
}
