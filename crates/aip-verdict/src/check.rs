use aip_schemas::{
    AnalysisMetadata, ConcernCategory, ConscienceContext, ConsultationDepth, ExtractedThinking,
    IntegrityCheckpoint, IntegrityConcern, Severity, Verdict, WindowPosition,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::VerdictError;
use crate::repair::extract_and_repair;
use crate::response::RawAnalysisResponse;

/// Everything the parser needs about the extraction step that is not
/// carried inside the analysis model's JSON response.
pub struct ExtractionInfo<'a> {
    pub thinking_block_hash: &'a str,
    pub extraction: &'a ExtractedThinking,
    pub thinking_tokens_original: u64,
    pub thinking_tokens_analyzed: u64,
}

pub struct CheckpointContext<'a> {
    pub agent_id: &'a str,
    pub card_id: &'a str,
    pub session_id: &'a str,
    pub window_position: WindowPosition,
    pub analysis_model: &'a str,
    pub analysis_duration_ms: u64,
    pub linked_trace_id: Option<&'a str>,
}

/// Parses and validates a raw analysis response into a strongly-typed
/// [`IntegrityCheckpoint`]. Never calls any model; pure data transformation.
pub fn check_integrity(
    raw_response: &str,
    extraction: &ExtractionInfo<'_>,
    context: &CheckpointContext<'_>,
) -> Result<IntegrityCheckpoint, VerdictError> {
    let repaired = extract_and_repair(raw_response)
        .ok_or_else(|| VerdictError::InvalidAnalysisResponse("no JSON object found".into()))?;

    let parsed: RawAnalysisResponse = serde_json::from_str(&repaired)
        .map_err(|e| VerdictError::InvalidAnalysisResponse(e.to_string()))?;

    let verdict = parse_verdict(&parsed.verdict)?;
    let concerns = parsed
        .concerns
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_concern(index, raw))
        .collect::<Result<Vec<_>, _>>()?;
    let consultation_depth = parse_consultation_depth(&parsed.conscience_context.consultation_depth)?;

    let conscience_context = ConscienceContext {
        values_checked: parsed.conscience_context.values_checked,
        conflicts: parsed.conscience_context.conflicts,
        supports: parsed.conscience_context.supports,
        considerations: parsed.conscience_context.considerations,
        consultation_depth,
    };

    let checkpoint = IntegrityCheckpoint {
        checkpoint_id: format!("ic-{}", Uuid::new_v4()),
        agent_id: context.agent_id.to_string(),
        card_id: context.card_id.to_string(),
        session_id: context.session_id.to_string(),
        timestamp: Utc::now(),
        thinking_block_hash: extraction.thinking_block_hash.to_string(),
        provider: extraction.extraction.provider.clone(),
        model: extraction.extraction.model.clone(),
        verdict,
        concerns,
        reasoning_summary: parsed.reasoning_summary,
        conscience_context,
        window_position: context.window_position,
        analysis_metadata: AnalysisMetadata {
            analysis_model: context.analysis_model.to_string(),
            analysis_duration_ms: context.analysis_duration_ms,
            thinking_tokens_original: extraction.thinking_tokens_original,
            thinking_tokens_analyzed: extraction.thinking_tokens_analyzed,
            truncated: extraction.extraction.truncated,
            extraction_confidence: extraction.extraction.confidence,
        },
        linked_trace_id: context.linked_trace_id.map(str::to_string),
    };

    tracing::debug!(
        checkpoint_id = %checkpoint.checkpoint_id,
        verdict = %checkpoint.verdict,
        concern_count = checkpoint.concerns.len(),
        "parsed integrity checkpoint"
    );

    Ok(checkpoint)
}

fn parse_verdict(value: &str) -> Result<Verdict, VerdictError> {
    match value {
        "clear" => Ok(Verdict::Clear),
        "review_needed" => Ok(Verdict::ReviewNeeded),
        "boundary_violation" => Ok(Verdict::BoundaryViolation),
        other => Err(VerdictError::InvalidVerdict(other.to_string())),
    }
}

fn parse_category(value: &str) -> Option<ConcernCategory> {
    match value {
        "prompt_injection" => Some(ConcernCategory::PromptInjection),
        "value_misalignment" => Some(ConcernCategory::ValueMisalignment),
        "autonomy_violation" => Some(ConcernCategory::AutonomyViolation),
        "reasoning_corruption" => Some(ConcernCategory::ReasoningCorruption),
        "deceptive_reasoning" => Some(ConcernCategory::DeceptiveReasoning),
        "undeclared_intent" => Some(ConcernCategory::UndeclaredIntent),
        _ => None,
    }
}

fn parse_severity(value: &str) -> Option<Severity> {
    match value {
        "low" => Some(Severity::Low),
        "medium" => Some(Severity::Medium),
        "high" => Some(Severity::High),
        "critical" => Some(Severity::Critical),
        _ => None,
    }
}

fn parse_consultation_depth(value: &str) -> Result<ConsultationDepth, VerdictError> {
    match value {
        "surface" => Ok(ConsultationDepth::Surface),
        "standard" => Ok(ConsultationDepth::Standard),
        "deep" => Ok(ConsultationDepth::Deep),
        other => Err(VerdictError::InvalidConscienceContext(format!(
            "unknown consultation_depth: {other}"
        ))),
    }
}

fn parse_concern(index: usize, raw: &crate::response::RawConcern) -> Result<IntegrityConcern, VerdictError> {
    let category = parse_category(&raw.category).ok_or_else(|| VerdictError::InvalidConcern {
        index,
        reason: format!("unknown category: {}", raw.category),
    })?;
    let severity = parse_severity(&raw.severity).ok_or_else(|| VerdictError::InvalidConcern {
        index,
        reason: format!("unknown severity: {}", raw.severity),
    })?;

    let mut concern = IntegrityConcern {
        category,
        severity,
        description: raw.description.clone(),
        evidence: raw.evidence.clone(),
        relevant_card_field: raw.relevant_card_field.clone(),
        relevant_conscience_value: raw.relevant_conscience_value.clone(),
    };
    concern.truncate_evidence();
    Ok(concern)
}
