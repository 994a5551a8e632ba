//! Table and JSON rendering for CLI output

use crate::catalog::{MarketOpportunity, PricingTier, RegionalPricing};
use crate::opportunity::OpportunityScore;
use crate::pricing::{DynamicPriceQuote, RegionalPrice};
use crate::strategy::OptimizationProposal;
use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt::Write;

const RULE: &str = "══════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────";

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable result as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn pct(fraction: Decimal) -> Decimal {
    (fraction * dec!(100)).round_dp(2).normalize()
}

fn money(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

pub fn format_regional_price(price: &RegionalPrice) -> String {
    format!(
        r#"
{rule}
               REGIONAL PRICE: {region} ({tier})
{rule}
Base Price:       {base} USD
Local Price:      {local} {currency}
Tax ({tax_type}):  {tax}
Tax Included:     {total} {currency}
Savings:          {savings} USD
PPP Adjusted:     {ppp}
Payment Methods:  {methods}
{rule}"#,
        rule = RULE,
        region = price.region,
        tier = price.tier,
        base = money(price.base_price),
        local = money(price.local_price),
        currency = price.currency,
        tax_type = price.tax_type,
        tax = money(price.tax_amount),
        total = money(price.tax_included),
        savings = money(price.savings),
        ppp = if price.ppp_adjusted { "yes" } else { "no" },
        methods = price.payment_methods.join(", "),
    )
}

pub fn format_price_matrix(prices: &[RegionalPrice]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<6} {:>12} {:>12} {:>10}",
        "REGION", "CUR", "LOCAL", "WITH TAX", "SAVINGS"
    );
    let _ = writeln!(out, "{}", THIN_RULE);
    for p in prices {
        let _ = writeln!(
            out,
            "{:<8} {:<6} {:>12} {:>12} {:>10}",
            p.region,
            p.currency,
            money(p.local_price),
            money(p.tax_included),
            money(p.savings)
        );
    }
    out
}

pub fn format_quote(quote: &DynamicPriceQuote) -> String {
    let f = &quote.adjustment_factors;
    let mut out = format!(
        r#"
{rule}
               DYNAMIC QUOTE: {tier} in {region}
{rule}

PRICE
{thin}
Original:         {original} USD
Adjusted:         {adjusted} USD
Regional:         {local} {currency} ({with_tax} incl. tax)

FACTORS
{thin}
Demand:           x{demand}
Competitive:      x{competitive}
Seasonal:         x{seasonal}
Total:            x{total}

Confidence:       {confidence}%
Valid:            {from} .. {until}

RECOMMENDATIONS
{thin}
"#,
        rule = RULE,
        thin = THIN_RULE,
        tier = quote.tier,
        region = quote.region,
        original = money(quote.original_price),
        adjusted = money(quote.adjusted_price),
        local = money(quote.regional_price.local_price),
        currency = quote.regional_price.currency,
        with_tax = money(quote.regional_price.tax_included),
        demand = f.demand.round_dp(4).normalize(),
        competitive = f.competitive.round_dp(4).normalize(),
        seasonal = f.seasonal.round_dp(4).normalize(),
        total = f.total.round_dp(4).normalize(),
        confidence = pct(quote.confidence),
        from = quote.valid_from.format("%Y-%m-%d %H:%M UTC"),
        until = quote.valid_until.format("%Y-%m-%d %H:%M UTC"),
    );
    for line in &quote.recommendations {
        let _ = writeln!(out, "- {}", line);
    }
    out.push_str(RULE);
    out
}

pub fn format_score(score: &OpportunityScore) -> String {
    let b = &score.breakdown;
    let mut out = format!(
        r#"
{rule}
               OPPORTUNITY: {id}
{rule}
Score:            {score} / 100
Recommendation:   {rec}

BREAKDOWN
{thin}
Market Size:      +{market}
Probability:      +{probability}
ROI:              +{roi}
Risk Penalty:     -{penalty}
"#,
        rule = RULE,
        thin = THIN_RULE,
        id = score.opportunity_id,
        score = score.score.round_dp(2).normalize(),
        rec = score.recommendation.to_string().to_uppercase(),
        market = b.market_size.round_dp(2).normalize(),
        probability = b.probability.round_dp(2).normalize(),
        roi = b.roi.round_dp(2).normalize(),
        penalty = b.risk_penalty.normalize(),
    );
    if !score.rationale.is_empty() {
        let _ = writeln!(out, "\nRATIONALE\n{}", THIN_RULE);
        for line in &score.rationale {
            let _ = writeln!(out, "- {}", line);
        }
    }
    let _ = writeln!(out, "\nRISK MITIGATION\n{}", THIN_RULE);
    for line in &score.risk_mitigation {
        let _ = writeln!(out, "- {}", line);
    }
    out.push_str(RULE);
    out
}

pub fn format_ranking(scores: &[OpportunityScore]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<4} {:<24} {:>8} {:<10}", "#", "OPPORTUNITY", "SCORE", "ACTION");
    let _ = writeln!(out, "{}", THIN_RULE);
    for (i, s) in scores.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:>8} {:<10}",
            i + 1,
            s.opportunity_id,
            s.score.round_dp(2).normalize(),
            s.recommendation
        );
    }
    out
}

pub fn format_proposals(proposals: &[OptimizationProposal]) -> String {
    if proposals.is_empty() {
        return "No optimization proposals: all metrics are within target ranges.".to_string();
    }

    let mut out = String::new();
    for (i, p) in proposals.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} [priority: {}, risk: {}]",
            i + 1,
            p.strategy,
            p.priority,
            p.risk_level
        );
        let _ = writeln!(out, "   {}", p.description);
        let _ = writeln!(
            out,
            "   Impact: revenue {:+}%, conversion {:+}%, churn {:+}%",
            pct(p.expected_impact.revenue),
            pct(p.expected_impact.conversion),
            pct(p.expected_impact.churn)
        );
        for step in &p.implementation {
            let _ = writeln!(out, "   - {}", step);
        }
    }
    out
}

pub fn format_tiers(tiers: &[PricingTier]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<14} {:>10} {:<8} {:>10} {:>12} {:>8}",
        "TIER", "PRICE", "BILLING", "DOMAINS", "QUERIES/MO", "SEATS"
    );
    let _ = writeln!(out, "{}", THIN_RULE);
    for t in tiers {
        let billing = match t.billing_cycle {
            crate::catalog::BillingCycle::Monthly => "monthly",
            crate::catalog::BillingCycle::Annual => "annual",
        };
        let _ = writeln!(
            out,
            "{:<14} {:>10} {:<8} {:>10} {:>12} {:>8}",
            t.id,
            money(t.base_price),
            billing,
            t.limits.domains.to_string(),
            t.limits.monthly_queries.to_string(),
            t.limits.team_members.to_string()
        );
    }
    out
}

pub fn format_regions(regions: &[RegionalPricing]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<6} {:>6} {:>8} {:<16}",
        "REGION", "CUR", "PPP", "TAX", "TAX TYPE"
    );
    let _ = writeln!(out, "{}", THIN_RULE);
    for r in regions {
        let _ = writeln!(
            out,
            "{:<8} {:<6} {:>6} {:>7}% {:<16}",
            r.region,
            r.currency,
            r.ppp_multiplier.normalize().to_string(),
            pct(r.tax_rate).to_string(),
            r.tax_type
        );
    }
    out
}

pub fn format_opportunities(opportunities: &[MarketOpportunity]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<22} {:>10} {:>6} {:>6} {:<8}",
        "OPPORTUNITY", "TAM ($M)", "P", "ROI", "RISK"
    );
    let _ = writeln!(out, "{}", THIN_RULE);
    for o in opportunities {
        let _ = writeln!(
            out,
            "{:<22} {:>10} {:>6} {:>6} {:<8}",
            o.id,
            (o.market_size / dec!(1000000)).round_dp(0).to_string(),
            o.probability.normalize().to_string(),
            o.business_case.roi_multiple.normalize().to_string(),
            o.risk_level.to_string()
        );
    }
    out
}
