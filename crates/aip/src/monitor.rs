use aip_agreement::validate;
use aip_attestation::{card_hash, combined_commitment, context_hash, values_hash, issue_certificate, CertificateInputs, IntegrityChain};
use aip_card::summarize_card;
use aip_crypto::{sha256_hex, SigningKey};
use aip_drift::{self as drift, DEFAULT_DRIFT_THRESHOLD};
use aip_providers::ProviderRegistry;
use aip_schemas::{
    AlignmentCard, ConscienceValue, DriftState, IntegrityCertificate, IntegrityCheckpoint,
    IntegrityDriftAlert, IntegritySignal, WindowConfig, MIN_DRIFT_THRESHOLD,
};
use aip_verdict::{check_integrity, CheckpointContext, ExtractionInfo};
use aip_window::WindowManager;
use chrono::Utc;
use uuid::Uuid;

use crate::error::MonitorError;

/// Sentinel stored as `thinking_block_hash` for a synthetic clear
/// checkpoint issued when no thinking block could be extracted at all.
pub const NO_THINKING_HASH: &str = "none";

/// Everything a caller needs to send a single integrity check to an
/// analysis model: the assembled prompt, plus what [`Monitor::record`]
/// needs back to turn a parsed response into a checkpoint.
pub struct PreparedCheck {
    pub system_prompt: String,
    pub user_prompt: String,
    pub thinking_block_hash: String,
    pub thinking_tokens_original: u64,
    pub thinking_tokens_analyzed: u64,
    pub extraction_provider: String,
    pub extraction_model: String,
    pub extraction_confidence: f64,
    pub extraction_truncated: bool,
}

/// Outcome of [`Monitor::prepare_check`]: either a prompt to send to the
/// analysis model, or — when no thinking block exists at all — a synthetic
/// clear signal with no analysis call and no window mutation.
pub enum CheckOutcome {
    NeedsAnalysis(PreparedCheck),
    FastPathClear(IntegritySignal),
}

/// Ties together extraction, prompt assembly, verdict parsing, windowing,
/// and drift detection for one agent session. Holds no network client and
/// performs no I/O of its own; the caller supplies provider response bodies
/// and analysis model responses, and receives signals back.
pub struct Monitor {
    agent_id: String,
    card: AlignmentCard,
    conscience_values: Vec<ConscienceValue>,
    analysis_model: String,
    token_budget: Option<u64>,
    drift_threshold: u32,
    providers: ProviderRegistry,
    window: WindowManager,
    drift_state: DriftState,
}

impl Monitor {
    /// Builds a monitor for one agent, rejecting a card/conscience-value
    /// pair whose BOUNDARY/FEAR values conflict with the card's autonomy
    /// envelope.
    pub fn new(
        agent_id: impl Into<String>,
        card: AlignmentCard,
        conscience_values: Vec<ConscienceValue>,
        analysis_model: impl Into<String>,
        window_config: WindowConfig,
    ) -> Result<Self, MonitorError> {
        let report = validate(&card, &conscience_values);
        if !report.valid {
            return Err(MonitorError::AgreementConflict(report));
        }

        let window = WindowManager::new(window_config)?;

        Ok(Monitor {
            agent_id: agent_id.into(),
            card,
            conscience_values,
            analysis_model: analysis_model.into(),
            token_budget: None,
            drift_threshold: DEFAULT_DRIFT_THRESHOLD,
            providers: ProviderRegistry::with_defaults(),
            window,
            drift_state: DriftState::default(),
        })
    }

    pub fn with_token_budget(mut self, budget: u64) -> Self {
        self.token_budget = Some(budget);
        self
    }

    /// Clamps `threshold` to `MIN_DRIFT_THRESHOLD`: a lower value would fire
    /// drift alerts before a streak is actually sustained.
    pub fn with_drift_threshold(mut self, threshold: u32) -> Self {
        self.drift_threshold = threshold.max(MIN_DRIFT_THRESHOLD);
        self
    }

    /// Extracts the thinking block from a provider response body and
    /// assembles the prompt the caller should send to the analysis model.
    /// When no thinking block can be found at all (e.g. a text-only
    /// response), returns a synthetic clear signal directly, with no
    /// window mutation and no analysis call required.
    pub fn prepare_check(
        &self,
        session_id: &str,
        provider: &str,
        provider_body: &str,
        provider_model: &str,
        task_context: Option<&str>,
    ) -> Result<CheckOutcome, MonitorError> {
        let Some(extracted) = self.providers.extract_from_body(provider, provider_body, provider_model) else {
            return Ok(CheckOutcome::FastPathClear(self.synthetic_clear_signal(session_id)));
        };

        let thinking_block_hash = sha256_hex(extracted.content.as_bytes());
        let window_context: Vec<IntegrityCheckpoint> =
            self.window.get_context().into_iter().cloned().collect();

        let built = aip_prompt::build_prompt(
            &self.card,
            &self.conscience_values,
            &window_context,
            &extracted.content,
            task_context,
            self.token_budget,
        );

        Ok(CheckOutcome::NeedsAnalysis(PreparedCheck {
            system_prompt: built.system,
            user_prompt: built.user,
            thinking_block_hash,
            thinking_tokens_original: built.original_tokens,
            thinking_tokens_analyzed: built.analyzed_tokens,
            extraction_provider: extracted.provider,
            extraction_model: extracted.model,
            extraction_confidence: extracted.confidence,
            extraction_truncated: extracted.truncated || built.truncated,
        }))
    }

    /// Builds the synthetic clear checkpoint/signal for the no-thinking
    /// fast path. Not recorded in the window and not counted toward drift.
    fn synthetic_clear_signal(&self, session_id: &str) -> IntegritySignal {
        let checkpoint = IntegrityCheckpoint {
            checkpoint_id: format!("ic-{}", Uuid::new_v4()),
            agent_id: self.agent_id.clone(),
            card_id: self.card.card_id.clone(),
            session_id: session_id.to_string(),
            timestamp: Utc::now(),
            thinking_block_hash: NO_THINKING_HASH.to_string(),
            provider: "none".to_string(),
            model: "none".to_string(),
            verdict: aip_schemas::Verdict::Clear,
            concerns: vec![],
            reasoning_summary: "no thinking block present; nothing to evaluate".to_string(),
            conscience_context: aip_schemas::ConscienceContext::default(),
            window_position: aip_schemas::WindowPosition {
                index: self.window.total_checks() as usize,
                window_size: self.window.get_summary().max_size,
            },
            analysis_metadata: aip_schemas::AnalysisMetadata {
                analysis_model: self.analysis_model.clone(),
                analysis_duration_ms: 0,
                thinking_tokens_original: 0,
                thinking_tokens_analyzed: 0,
                truncated: false,
                extraction_confidence: 0.0,
            },
            linked_trace_id: None,
        };

        let mut summary = self.window.get_summary();
        summary.drift_alert_active = self.drift_state.alert_fired;

        aip_signal::build_signal(checkpoint, summary)
    }

    /// Parses the analysis model's raw response, records the resulting
    /// checkpoint in the window, steps the drift detector, and returns the
    /// outgoing signal. Also returns a drift alert if one just fired.
    pub fn record(
        &mut self,
        session_id: &str,
        raw_analysis_response: &str,
        prepared: &PreparedCheck,
    ) -> Result<(IntegritySignal, Option<IntegrityDriftAlert>), MonitorError> {
        let extraction = aip_schemas::ExtractedThinking {
            content: String::new(),
            provider: prepared.extraction_provider.clone(),
            model: prepared.extraction_model.clone(),
            extraction_method: if prepared.extraction_confidence >= 1.0 {
                aip_schemas::ExtractionMethod::NativeThinking
            } else if prepared.extraction_confidence >= 0.5 {
                aip_schemas::ExtractionMethod::ReasoningContent
            } else {
                aip_schemas::ExtractionMethod::ResponseAnalysis
            },
            confidence: prepared.extraction_confidence,
            truncated: prepared.extraction_truncated,
        };

        let info = ExtractionInfo {
            thinking_block_hash: &prepared.thinking_block_hash,
            extraction: &extraction,
            thinking_tokens_original: prepared.thinking_tokens_original,
            thinking_tokens_analyzed: prepared.thinking_tokens_analyzed,
        };

        let window_position = aip_schemas::WindowPosition {
            index: self.window.total_checks() as usize,
            window_size: self.window.get_summary().max_size,
        };

        let context = CheckpointContext {
            agent_id: &self.agent_id,
            card_id: &self.card.card_id,
            session_id,
            window_position,
            analysis_model: &self.analysis_model,
            analysis_duration_ms: 0,
            linked_trace_id: None,
        };

        let checkpoint = check_integrity(raw_analysis_response, &info, &context)?;

        self.window.push(checkpoint.clone());
        let window_contents: Vec<&IntegrityCheckpoint> = self.window.get_context();
        let (next_state, alert) = drift::step(&self.drift_state, &checkpoint, &window_contents, self.drift_threshold);
        self.drift_state = next_state;

        let mut summary = self.window.get_summary();
        summary.drift_alert_active = self.drift_state.alert_fired;

        let signal = aip_signal::build_signal(checkpoint, summary);
        Ok((signal, alert))
    }

    /// Issues a signed, chain-linked certificate for `signal`'s checkpoint.
    pub fn attest(
        &self,
        signal: &IntegritySignal,
        chain: &mut IntegrityChain,
        signing_key: &SigningKey,
    ) -> IntegrityCertificate {
        let checkpoint = &signal.checkpoint;
        let card = card_hash(&self.card);
        let values = values_hash(&self.conscience_values);
        let context = context_hash(&checkpoint.conscience_context);
        let _commitment = combined_commitment(&checkpoint.thinking_block_hash, &card, &values, &context);

        issue_certificate(
            CertificateInputs {
                checkpoint,
                card_hash: &card,
                values_hash: &values,
                context_hash: &context,
                model_version: &self.analysis_model,
                merkle: None,
                verdict_derivation: None,
            },
            chain,
            signing_key,
        )
    }

    pub fn card_summary(&self) -> String {
        summarize_card(&self.card)
    }
}
