//! Conversation controller.
//!
//! Owns one chat session: its state, its message log, and the collaborators
//! it calls. Every operation turns into a `ChatEvent`, runs through the pure
//! `transition` function, and the resulting effects are carried out here in
//! order.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

use crate::application::BusyIndicator;
use crate::domain::chat::{
    metric_line_effects, replies, transition, BotMood, ChatEvent, ChatMessage, ConversationStage,
    Effect, MessageBody, MessageLog, MetricRequest, Row, SessionState,
};
use crate::domain::foundation::ValidationError;
use crate::ports::{
    DatasetFile, MetricOutcome, MetricService, MetricServiceError, SessionObserver, UploadService,
};

/// Delay before bot replies, imitating the bot thinking.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_millis(500);

/// Errors that escape the dialogue.
///
/// User mistakes and collaborator failures become bot messages instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("Invalid stage transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

pub struct ConversationController {
    session: SessionState,
    log: MessageLog,
    upload_service: Arc<dyn UploadService>,
    metric_service: Arc<dyn MetricService>,
    observer: Arc<dyn SessionObserver>,
    busy: BusyIndicator,
    thinking_delay: Duration,
}

impl ConversationController {
    /// Creates a controller whose log starts with the greeting.
    pub fn new(
        upload_service: Arc<dyn UploadService>,
        metric_service: Arc<dyn MetricService>,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        let mut log = MessageLog::new();
        log.append(ChatMessage::bot(replies::GREETING));
        Self {
            session: SessionState::new(),
            log,
            upload_service,
            metric_service,
            observer,
            busy: BusyIndicator::new(),
            thinking_delay: DEFAULT_THINKING_DELAY,
        }
    }

    /// Sets the delay before bot replies. Zero disables it.
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Shares a busy indicator with other components.
    pub fn with_busy_indicator(mut self, busy: BusyIndicator) -> Self {
        self.busy = busy;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn stage(&self) -> ConversationStage {
        self.session.stage()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn busy(&self) -> &BusyIndicator {
        &self.busy
    }

    pub fn mood(&self) -> BotMood {
        BotMood::for_stage(self.session.stage(), self.busy.is_busy())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Handles one line typed by the user.
    pub async fn submit(&mut self, line: &str) -> Result<(), ConversationError> {
        self.dispatch(ChatEvent::TextSubmitted(line.to_string())).await
    }

    /// Handles a click on an upload option. Unknown labels are ignored.
    pub async fn choose_upload_method(&mut self, choice: &str) -> Result<(), ConversationError> {
        self.dispatch(ChatEvent::UploadMethodChosen(choice.to_string()))
            .await
    }

    /// Sends a file to the upload service and reports the result.
    ///
    /// Ignored unless the session is waiting for a file.
    pub async fn upload_file(&mut self, file: DatasetFile) -> Result<(), ConversationError> {
        if self.session.stage() != ConversationStage::AwaitingFile {
            tracing::debug!(stage = %self.session.stage(), "File ignored: not awaiting a file");
            return Ok(());
        }

        self.dispatch(ChatEvent::FileSelected {
            file_name: file.name.clone(),
        })
        .await?;

        let result = {
            let _busy = self.busy.begin();
            self.upload_service.upload(file).await
        };

        match result {
            Ok(dataset) => {
                self.complete_upload(dataset.columns, dataset.preview_rows)
                    .await
            }
            Err(err) => {
                tracing::warn!("Upload failed: {}", err);
                self.fail_upload(err.user_message()).await
            }
        }
    }

    /// Records a successful upload and offers plots and metrics.
    pub async fn complete_upload(
        &mut self,
        columns: Vec<String>,
        preview_rows: Vec<Row>,
    ) -> Result<(), ConversationError> {
        self.dispatch(ChatEvent::UploadSucceeded {
            columns,
            preview_rows,
        })
        .await
    }

    /// Reports a failed upload and returns to the upload choice.
    pub async fn fail_upload(&mut self, error_message: &str) -> Result<(), ConversationError> {
        self.dispatch(ChatEvent::UploadFailed {
            message: error_message.to_string(),
        })
        .await
    }

    /// Clears the session on behalf of a collaborator, as `exit` does but
    /// without a user line in the log.
    pub async fn reset(&mut self) -> Result<(), ConversationError> {
        self.dispatch(ChatEvent::ResetRequested).await
    }

    /// Runs the metric-request handler on `line` without touching the stage.
    pub async fn interpret_metric_line(&mut self, line: &str) -> Result<(), ConversationError> {
        let effects = metric_line_effects(line.trim(), self.session.available_columns());
        for effect in effects {
            self.apply(effect).await?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    async fn dispatch(&mut self, event: ChatEvent) -> Result<(), ConversationError> {
        let kind = event.kind();
        let current = self.session.stage();
        let next = transition(&self.session, event);

        if next.is_noop(current) {
            tracing::debug!(event = kind, stage = %current, "Event ignored");
            return Ok(());
        }

        for effect in next.effects {
            self.apply(effect).await?;
        }

        if self.session.stage() != next.next {
            self.enter_stage(next.next)?;
        }
        tracing::debug!(event = kind, from = %current, to = %next.next, "Event handled");
        Ok(())
    }

    async fn apply(&mut self, effect: Effect) -> Result<(), ConversationError> {
        match effect {
            Effect::Say(body) => self.log.append(ChatMessage::new(body)),
            Effect::Pause => {
                if !self.thinking_delay.is_zero() {
                    sleep(self.thinking_delay).await;
                }
            }
            Effect::SetUserName(name) => self.session.set_user_name(name),
            Effect::StoreColumns(columns) => self.session.store_columns(columns),
            Effect::ResetSession => {
                tracing::info!("Session reset");
                self.session.clear();
                self.observer.session_reset();
            }
            Effect::NotifyDatasetLoaded(columns) => self.observer.dataset_loaded(&columns),
            Effect::ClearLog => self.log.clear(),
            Effect::EnterStage(stage) => self.enter_stage(stage)?,
            Effect::EvaluateMetric(request) => self.evaluate_metric(request).await,
        }
        Ok(())
    }

    fn enter_stage(&mut self, target: ConversationStage) -> Result<(), ConversationError> {
        let from = self.session.stage();
        self.session.enter(target)?;
        if from != target {
            self.observer.stage_changed(from, target);
        }
        Ok(())
    }

    async fn evaluate_metric(&mut self, request: MetricRequest) {
        let outcome = {
            let _busy = self.busy.begin();
            self.metric_service.evaluate(&request).await
        };
        if let Err(err) = &outcome {
            tracing::warn!(metric = request.metric_name(), "Metric evaluation failed: {}", err);
        }
        for body in metric_replies(&request, outcome) {
            self.log.append(ChatMessage::new(body));
        }
    }
}

/// Bot messages reporting a metric service answer.
///
/// One message per result entry; a soft failure or a backend-described error
/// is shown verbatim; anything else gets the generic error.
pub fn metric_replies(
    request: &MetricRequest,
    outcome: Result<MetricOutcome, MetricServiceError>,
) -> Vec<MessageBody> {
    let bot = |text: String| MessageBody::Bot { text };
    match outcome {
        Ok(MetricOutcome::Computed(result)) if !result.is_empty() => result
            .iter()
            .map(|(column, value)| bot(replies::metric_value(request.metric, column, value)))
            .collect(),
        Ok(MetricOutcome::Declined { message }) if !message.is_empty() => vec![bot(message)],
        Err(err) => match err.backend_message() {
            Some(message) if !message.is_empty() => vec![bot(message.to_string())],
            _ => vec![bot(replies::UNEXPECTED_METRIC_ERROR.to_string())],
        },
        Ok(_) => vec![bot(replies::UNEXPECTED_METRIC_ERROR.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        MockMetricService, MockUploadService, RecordingObserver,
    };
    use crate::domain::chat::Metric;
    use crate::ports::{UploadError, UploadedDataset};
    use proptest::prelude::*;
    use serde_json::json;

    struct Harness {
        controller: ConversationController,
        metrics: MockMetricService,
        uploads: MockUploadService,
        observer: RecordingObserver,
    }

    fn harness_with(metrics: MockMetricService, uploads: MockUploadService) -> Harness {
        let observer = RecordingObserver::new();
        let controller = ConversationController::new(
            Arc::new(uploads.clone()),
            Arc::new(metrics.clone()),
            Arc::new(observer.clone()),
        )
        .with_thinking_delay(Duration::ZERO);
        Harness {
            controller,
            metrics,
            uploads,
            observer,
        }
    }

    fn harness() -> Harness {
        harness_with(MockMetricService::new(), MockUploadService::new())
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    async fn at_metric_selection(h: &mut Harness, columns: &[&str]) {
        h.controller.submit("Ada").await.unwrap();
        h.controller.choose_upload_method("Upload CSV").await.unwrap();
        h.controller
            .complete_upload(strings(columns), vec![])
            .await
            .unwrap();
        assert_eq!(h.controller.stage(), ConversationStage::MetricSelection);
    }

    fn last_bot_text(controller: &ConversationController) -> String {
        controller
            .messages()
            .bot_texts()
            .last()
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    mod greeting_and_name {
        use super::*;

        #[tokio::test]
        async fn log_starts_with_greeting() {
            let h = harness();
            assert_eq!(h.controller.messages().bot_texts(), vec![replies::GREETING]);
            assert_eq!(h.controller.mood(), BotMood::Hello);
        }

        #[tokio::test]
        async fn name_moves_to_upload_choice() {
            let mut h = harness();
            h.controller.submit("Ada").await.unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::UploadChoice);
            assert_eq!(h.controller.session().user_name(), "Ada");
            assert!(matches!(
                h.controller.messages().last().map(ChatMessage::body),
                Some(MessageBody::Options { .. })
            ));
        }

        #[tokio::test]
        async fn blank_input_changes_nothing() {
            let mut h = harness();
            h.controller.submit("   ").await.unwrap();
            h.controller.submit("").await.unwrap();

            assert_eq!(h.controller.messages().len(), 1);
            assert_eq!(h.controller.stage(), ConversationStage::NameInput);
        }

        #[tokio::test]
        async fn unexpected_text_is_not_understood() {
            let mut h = harness();
            h.controller.submit("Ada").await.unwrap();
            h.controller.submit("what now?").await.unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::UploadChoice);
            assert_eq!(last_bot_text(&h.controller), replies::NOT_UNDERSTOOD);
        }
    }

    mod upload {
        use super::*;

        #[tokio::test]
        async fn unknown_choice_is_ignored() {
            let mut h = harness();
            h.controller.submit("Ada").await.unwrap();
            let before = h.controller.messages().len();

            h.controller.choose_upload_method("Upload Excel").await.unwrap();

            assert_eq!(h.controller.messages().len(), before);
            assert_eq!(h.controller.stage(), ConversationStage::UploadChoice);
        }

        #[tokio::test]
        async fn successful_upload_stores_columns() {
            let dataset = UploadedDataset::new(
                strings(&["A", "B"]),
                vec![json!({"A": 1, "B": "x"}).as_object().cloned().unwrap()],
            );
            let mut h = harness_with(
                MockMetricService::new(),
                MockUploadService::new().with_dataset(dataset),
            );
            h.controller.submit("Ada").await.unwrap();
            h.controller.choose_upload_method("Upload CSV").await.unwrap();
            assert_eq!(h.controller.stage(), ConversationStage::AwaitingFile);

            h.controller
                .upload_file(DatasetFile::new("data.csv", "A,B\n1,x\n"))
                .await
                .unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::MetricSelection);
            assert_eq!(
                h.observer.visited_stages(),
                vec![
                    ConversationStage::UploadChoice,
                    ConversationStage::AwaitingFile,
                    ConversationStage::PostUpload,
                    ConversationStage::MetricSelection,
                ]
            );
            assert_eq!(h.controller.session().available_columns(), &strings(&["A", "B"])[..]);
            assert_eq!(h.uploads.uploaded_names(), vec!["data.csv".to_string()]);
            assert_eq!(h.observer.loaded_datasets(), vec![strings(&["A", "B"])]);
            assert!(h
                .controller
                .messages()
                .bot_texts()
                .contains(&replies::file_received("data.csv").as_str()));
            assert!(h
                .controller
                .messages()
                .iter()
                .any(|m| matches!(m.body(), MessageBody::Table { rows } if rows.len() == 1)));
            assert!(matches!(
                h.controller.messages().last().map(ChatMessage::body),
                Some(MessageBody::MetricList { .. })
            ));
            assert!(!h.controller.busy().is_busy());
        }

        #[tokio::test]
        async fn failed_upload_returns_to_choice() {
            let mut h = harness_with(
                MockMetricService::new(),
                MockUploadService::new()
                    .with_error(UploadError::rejected("Only CSV files are allowed for upload.")),
            );
            h.controller.submit("Ada").await.unwrap();
            h.controller.choose_upload_method("Upload CSV").await.unwrap();

            h.controller
                .upload_file(DatasetFile::new("data.txt", "hello"))
                .await
                .unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::UploadChoice);
            assert!(h.controller.session().available_columns().is_empty());
            assert_eq!(
                last_bot_text(&h.controller),
                replies::upload_failed("Only CSV files are allowed for upload.")
            );
        }

        #[tokio::test]
        async fn file_outside_awaiting_file_is_not_uploaded() {
            let mut h = harness();
            h.controller
                .upload_file(DatasetFile::new("data.csv", "A\n1\n"))
                .await
                .unwrap();
            assert!(h.uploads.uploaded_names().is_empty());
            assert_eq!(h.controller.messages().len(), 1);
        }
    }

    mod metrics {
        use super::*;

        #[tokio::test]
        async fn single_result_is_one_message() {
            let mut h = harness_with(
                MockMetricService::new().with_result(json!({"Age": 34.5})),
                MockUploadService::new(),
            );
            at_metric_selection(&mut h, &["Age", "Income"]).await;
            let before = h.controller.messages().len();

            h.controller.submit("mean of Age").await.unwrap();

            // user line, wait message, one result
            assert_eq!(h.controller.messages().len(), before + 3);
            let result = last_bot_text(&h.controller);
            assert!(result.contains("mean") && result.contains("34.5"));
            assert_eq!(
                h.metrics.get_calls(),
                vec![MetricRequest::for_column(Metric::Mean, "Age")]
            );
            assert_eq!(h.controller.stage(), ConversationStage::AwaitingMetricInput);
        }

        #[tokio::test]
        async fn unknown_column_skips_service() {
            let mut h = harness();
            at_metric_selection(&mut h, &["Age", "Income"]).await;

            h.controller.submit("mean of Height").await.unwrap();

            assert_eq!(h.metrics.call_count(), 0);
            assert_eq!(last_bot_text(&h.controller), replies::column_not_found("Height"));
            assert_eq!(h.controller.stage(), ConversationStage::AwaitingMetricInput);
        }

        #[tokio::test]
        async fn unrecognized_metric_skips_service() {
            let mut h = harness();
            at_metric_selection(&mut h, &["Age"]).await;

            h.controller.submit("banana").await.unwrap();

            assert_eq!(h.metrics.call_count(), 0);
            assert_eq!(last_bot_text(&h.controller), replies::INVALID_METRIC);
            assert_eq!(h.controller.stage(), ConversationStage::AwaitingMetricInput);
        }

        #[tokio::test]
        async fn every_result_column_gets_a_message() {
            let mut h = harness_with(
                MockMetricService::new().with_result(json!({"Age": 30, "Income": 1000})),
                MockUploadService::new(),
            );
            at_metric_selection(&mut h, &["Age", "Income"]).await;

            h.controller.submit("Sum").await.unwrap();

            let texts = h.controller.messages().bot_texts();
            let tail = &texts[texts.len() - 2..];
            assert_eq!(
                tail,
                &[
                    "The sum of your data is: Age: 30",
                    "The sum of your data is: Income: 1000"
                ]
            );
        }

        #[tokio::test]
        async fn declined_message_is_shown_verbatim() {
            let mut h = harness_with(
                MockMetricService::new()
                    .with_declined("I do not provide calculations for such metrics."),
                MockUploadService::new(),
            );
            at_metric_selection(&mut h, &["Age"]).await;

            h.controller.submit("kurtosis").await.unwrap();

            assert_eq!(
                last_bot_text(&h.controller),
                "I do not provide calculations for such metrics."
            );
        }

        #[tokio::test]
        async fn transport_failure_is_unexpected_error() {
            let mut h = harness_with(
                MockMetricService::new()
                    .with_error(MetricServiceError::Transport("connection refused".into())),
                MockUploadService::new(),
            );
            at_metric_selection(&mut h, &["Age"]).await;

            h.controller.submit("mean").await.unwrap();

            assert_eq!(last_bot_text(&h.controller), replies::UNEXPECTED_METRIC_ERROR);
            assert_eq!(h.controller.stage(), ConversationStage::AwaitingMetricInput);
            assert!(!h.controller.busy().is_busy());
        }

        #[tokio::test]
        async fn busy_while_metric_call_is_outstanding() {
            let mut h = harness_with(
                MockMetricService::new()
                    .with_result(json!({"Age": 1}))
                    .with_delay(Duration::from_millis(20)),
                MockUploadService::new(),
            );
            at_metric_selection(&mut h, &["Age"]).await;
            let mut updates = h.controller.busy().subscribe();
            let watcher = tokio::spawn(async move {
                let mut seen = Vec::new();
                while seen.len() < 2 && updates.changed().await.is_ok() {
                    seen.push(*updates.borrow());
                }
                seen
            });

            h.controller.submit("mean of Age").await.unwrap();

            assert_eq!(watcher.await.unwrap(), vec![true, false]);
            assert_eq!(h.controller.mood(), BotMood::Answering);
        }

        #[tokio::test]
        async fn interpret_metric_line_keeps_stage() {
            let mut h = harness_with(
                MockMetricService::new().with_result(json!({"Age": 3})),
                MockUploadService::new(),
            );
            at_metric_selection(&mut h, &["Age"]).await;

            h.controller.interpret_metric_line("median of Age").await.unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::MetricSelection);
            assert_eq!(last_bot_text(&h.controller), "The median of your data is: Age: 3");
        }
    }

    mod metric_replies_mapping {
        use super::*;

        fn request() -> MetricRequest {
            MetricRequest::all_columns(Metric::Mode)
        }

        #[test]
        fn empty_result_is_unexpected() {
            let replies_out = metric_replies(
                &request(),
                Ok(MetricOutcome::Computed(serde_json::Map::new())),
            );
            assert_eq!(
                replies_out,
                vec![MessageBody::Bot {
                    text: replies::UNEXPECTED_METRIC_ERROR.to_string()
                }]
            );
        }

        #[test]
        fn backend_rejection_text_is_shown() {
            let replies_out = metric_replies(
                &request(),
                Err(MetricServiceError::rejected(
                    "Cannot calculate 'mode' for non-numeric column 'Name'.",
                )),
            );
            assert_eq!(
                replies_out,
                vec![MessageBody::Bot {
                    text: "Cannot calculate 'mode' for non-numeric column 'Name'.".to_string()
                }]
            );
        }

        #[test]
        fn structured_values_are_pretty_printed() {
            let map = json!({"Name": {"top": "Ann", "freq": 2}})
                .as_object()
                .cloned()
                .unwrap();
            let replies_out = metric_replies(&request(), Ok(MetricOutcome::Computed(map)));
            assert_eq!(
                replies_out,
                vec![MessageBody::Bot {
                    text: "The mode of your data is: Name: {\n  \"top\": \"Ann\",\n  \"freq\": 2\n}"
                        .to_string()
                }]
            );
        }
    }

    mod exit {
        use super::*;

        #[tokio::test]
        async fn exit_after_upload_clears_everything() {
            let mut h = harness();
            at_metric_selection(&mut h, &["A", "B"]).await;

            h.controller.submit("EXIT").await.unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::NameInput);
            assert!(h.controller.session().available_columns().is_empty());
            assert!(h.controller.session().user_name().is_empty());
            assert_eq!(h.observer.reset_count(), 1);
            assert_eq!(
                h.controller.messages().bot_texts(),
                vec![replies::RESET_CONFIRMATION]
            );
            assert_eq!(h.controller.messages().len(), 1);
        }

        #[tokio::test]
        async fn reset_request_clears_session_without_user_line() {
            let mut h = harness();
            at_metric_selection(&mut h, &["A", "B"]).await;

            h.controller.reset().await.unwrap();

            assert!(h.controller.session().available_columns().is_empty());
            assert_eq!(h.controller.stage(), ConversationStage::NameInput);
            assert_eq!(h.observer.reset_count(), 1);
            assert_eq!(
                h.controller.messages().bot_texts(),
                vec![replies::RESET_CONFIRMATION]
            );
            assert!(!h.controller.messages().iter().any(ChatMessage::is_user));
        }

        #[tokio::test]
        async fn name_can_be_given_again_after_exit() {
            let mut h = harness();
            h.controller.submit("Ada").await.unwrap();
            h.controller.submit("exit").await.unwrap();
            h.controller.submit("Grace").await.unwrap();

            assert_eq!(h.controller.session().user_name(), "Grace");
            assert_eq!(h.controller.stage(), ConversationStage::UploadChoice);
        }

        #[tokio::test]
        async fn stale_upload_after_exit_is_ignored() {
            let mut h = harness();
            h.controller.submit("Ada").await.unwrap();
            h.controller.choose_upload_method("Upload CSV").await.unwrap();
            h.controller.submit("exit").await.unwrap();

            h.controller
                .complete_upload(strings(&["A"]), vec![])
                .await
                .unwrap();

            assert_eq!(h.controller.stage(), ConversationStage::NameInput);
            assert!(h.controller.session().available_columns().is_empty());
        }
    }

    async fn drive_to(h: &mut Harness, stage: ConversationStage) {
        use ConversationStage::*;
        if stage == NameInput {
            return;
        }
        h.controller.submit("Ada").await.unwrap();
        if stage == UploadChoice {
            return;
        }
        h.controller.choose_upload_method("Upload CSV").await.unwrap();
        if stage == AwaitingFile {
            return;
        }
        h.controller.complete_upload(strings(&["A"]), vec![]).await.unwrap();
        if stage == AwaitingMetricInput {
            h.controller.submit("banana").await.unwrap();
        }
    }

    fn reachable_stage() -> impl Strategy<Value = ConversationStage> {
        prop_oneof![
            Just(ConversationStage::NameInput),
            Just(ConversationStage::UploadChoice),
            Just(ConversationStage::AwaitingFile),
            Just(ConversationStage::MetricSelection),
            Just(ConversationStage::AwaitingMetricInput),
        ]
    }

    proptest! {
        #[test]
        fn exit_resets_from_any_stage(
            stage in reachable_stage(),
            left in "[ \t]{0,3}",
            right in "[ \t]{0,3}",
            mask in proptest::collection::vec(any::<bool>(), 4),
        ) {
            let word: String = "exit"
                .chars()
                .zip(mask.iter())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            let line = format!("{}{}{}", left, word, right);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let (stage_after, columns_empty, resets) = runtime.block_on(async {
                let mut h = harness();
                drive_to(&mut h, stage).await;
                h.controller.submit(&line).await.unwrap();
                (
                    h.controller.stage(),
                    h.controller.session().available_columns().is_empty(),
                    h.observer.reset_count(),
                )
            });

            prop_assert_eq!(stage_after, ConversationStage::NameInput);
            prop_assert!(columns_empty);
            prop_assert_eq!(resets, 1);
        }

        #[test]
        fn whitespace_never_changes_anything(
            stage in reachable_stage(),
            line in "[ \t\n]{0,6}",
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let (before, after) = runtime.block_on(async {
                let mut h = harness();
                drive_to(&mut h, stage).await;
                let before = (h.controller.stage(), h.controller.messages().len());
                h.controller.submit(&line).await.unwrap();
                (before, (h.controller.stage(), h.controller.messages().len()))
            });
            prop_assert_eq!(before, after);
        }
    }
}
