//! Additive viability scoring for market opportunities

use super::types::{OpportunityScore, Recommendation, ScoreBreakdown};
use crate::catalog::{MarketOpportunity, ReferenceRepository, RiskLevel};
use crate::config::ScoringConfig;
use crate::error::{EngineError, EntityKind};
use crate::telemetry::{record_lookup_failure, record_operation, Operation};
use rust_decimal::Decimal;
use std::sync::Arc;

const ONE_BILLION: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
const MAX_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Generic checklist attached to every score
const RISK_MITIGATION: [&str; 4] = [
    "Validate demand with a limited pilot before full investment",
    "Set go/no-go milestones tied to revenue targets",
    "Review competitor moves and regulatory changes quarterly",
    "Keep a contingency budget for delivery overruns",
];

/// Scores registered opportunities
#[derive(Clone)]
pub struct OpportunityScorer {
    opportunities: Arc<dyn ReferenceRepository<MarketOpportunity>>,
    config: ScoringConfig,
}

impl OpportunityScorer {
    pub fn new(
        opportunities: Arc<dyn ReferenceRepository<MarketOpportunity>>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            opportunities,
            config,
        }
    }

    /// Score a registered opportunity by id
    pub fn score(&self, opportunity_id: &str) -> Result<OpportunityScore, EngineError> {
        let opportunity = self.opportunities.get(opportunity_id).ok_or_else(|| {
            record_lookup_failure(EntityKind::Opportunity);
            tracing::warn!(opportunity_id, "Unknown opportunity");
            EngineError::not_found(EntityKind::Opportunity, opportunity_id)
        })?;

        let result = self.evaluate(&opportunity);
        record_operation(Operation::OpportunityScore);
        tracing::debug!(
            opportunity_id,
            score = %result.score,
            recommendation = %result.recommendation,
            "Opportunity scored"
        );
        Ok(result)
    }

    /// Score every registered opportunity, best first, ties by id
    pub fn rank(&self) -> Vec<OpportunityScore> {
        let mut scores: Vec<_> = self
            .opportunities
            .get_all()
            .iter()
            .map(|o| self.evaluate(o))
            .collect();
        scores.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.opportunity_id.cmp(&b.opportunity_id))
        });
        scores
    }

    /// Score an opportunity record directly
    pub fn evaluate(&self, opportunity: &MarketOpportunity) -> OpportunityScore {
        let cfg = &self.config;

        // Saturating throughout: every component is capped or the total clamped
        let market_size = (opportunity.market_size / ONE_BILLION)
            .saturating_mul(cfg.market_size_points_per_billion)
            .min(cfg.market_size_cap);
        let probability = opportunity
            .probability
            .saturating_mul(cfg.probability_weight);
        let roi = opportunity
            .business_case
            .roi_multiple
            .saturating_mul(cfg.roi_points_per_multiple)
            .min(cfg.roi_cap);
        let risk_penalty = match opportunity.risk_level {
            RiskLevel::High => cfg.high_risk_penalty,
            RiskLevel::Medium => cfg.medium_risk_penalty,
            RiskLevel::Low => cfg.low_risk_penalty,
        };

        let score = market_size
            .saturating_add(probability)
            .saturating_add(roi)
            .saturating_sub(risk_penalty)
            .clamp(Decimal::ZERO, MAX_SCORE);

        let mut rationale = Vec::new();
        if market_size > cfg.market_size_rationale_threshold {
            rationale.push(format!(
                "Large addressable market (${}M)",
                (opportunity.market_size / Decimal::from(1_000_000)).round_dp(0)
            ));
        }
        if probability > cfg.probability_rationale_threshold {
            rationale.push(format!(
                "High probability of success ({}%)",
                (opportunity.probability * Decimal::ONE_HUNDRED).normalize()
            ));
        }
        if roi > cfg.roi_rationale_threshold {
            rationale.push(format!(
                "Strong return on investment ({}x)",
                opportunity.business_case.roi_multiple.normalize()
            ));
        }
        if risk_penalty > Decimal::ZERO {
            rationale.push(format!(
                "{} risk reduces the score by {}",
                capitalize(&opportunity.risk_level.to_string()),
                risk_penalty.normalize()
            ));
        }

        OpportunityScore {
            opportunity_id: opportunity.id.clone(),
            score,
            recommendation: self.recommend(score),
            breakdown: ScoreBreakdown {
                market_size,
                probability,
                roi,
                risk_penalty,
            },
            rationale,
            risk_mitigation: RISK_MITIGATION.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Map a score onto a recommendation
    pub fn recommend(&self, score: Decimal) -> Recommendation {
        if score >= self.config.pursue_threshold {
            Recommendation::Pursue
        } else if score >= self.config.monitor_threshold {
            Recommendation::Monitor
        } else {
            Recommendation::Pass
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
