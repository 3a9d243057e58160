//! Proposal document rendering.
//!
//! This module turns a [`ContractTerms`] record into the fixed-layout Italian
//! proposal text: a title, the monetary summary, the bonus installments, the
//! requested conditions and the grievances motivating them.

use crate::models::ContractTerms;

use super::format_amount;

/// Title line of the proposal.
pub const TITLE: &str = "PROPOSTA CONTRATTUALE – SENIOR SOFTWARE ENGINEER";

/// Fixed note following the net bonus.
///
/// The installment figures are literal text and are not derived from the
/// record's net bonus or payment steps.
pub const BONUS_INSTALLMENT_NOTE: &str =
    "(pagato in 3 rate da € 12.000) - Calcolo: 3 × € 12.000 = € 36.000.";

/// Header of the payment step section.
pub const PAYMENT_STEPS_HEADER: &str = "Rate bonus di ingresso:";

/// Header of the conditions section.
pub const CONDITIONS_HEADER: &str = "Condizioni contrattuali richieste:";

/// Suffix appended to the NASpI waiver line whatever the flag's value.
pub const NASPI_WAIVER_NOTE: &str = "(tramite Avvocati + rinuncia a sputtanamento planetario)";

/// Header of the grievance section.
pub const GRIEVANCES_HEADER: &str = "Motivazioni alla base delle richieste:";

/// Returns the Italian token for a condition flag.
///
/// # Examples
///
/// ```
/// use contract_proposal::render::yes_no;
///
/// assert_eq!(yes_no(true), "sì");
/// assert_eq!(yes_no(false), "no");
/// ```
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "sì" } else { "no" }
}

/// Renders contract terms into the proposal document.
///
/// Sections appear in a fixed order and lines are joined with `\n`, without a
/// trailing newline. Payment steps and grievances are written in the order
/// they are stored. An empty sequence leaves its header with no items below.
///
/// # Arguments
///
/// * `terms` - The contract terms to render
///
/// # Examples
///
/// ```
/// use contract_proposal::proposal::contract_terms;
/// use contract_proposal::render::render;
///
/// let document = render(&contract_terms());
/// assert!(document.starts_with("PROPOSTA CONTRATTUALE"));
/// assert!(document.contains("  - Step 2: Fine del terzo mese di lavoro → € 12,000"));
/// ```
pub fn render(terms: &ContractTerms) -> String {
    let conditions = &terms.contract_conditions;
    let mut lines: Vec<String> =
        Vec::with_capacity(16 + terms.payment_steps.len() + terms.grievance_clauses.len());

    lines.push(TITLE.to_string());
    lines.push(String::new());
    lines.push(format!(
        "Bonus di ingresso: € {} netti {}",
        format_amount(terms.net_bonus),
        BONUS_INSTALLMENT_NOTE
    ));
    lines.push(format!(
        "RAL: € {} lordi annui.",
        format_amount(terms.annual_salary)
    ));
    lines.push(format!(
        "Base di calcolo: periodo {}, RAL precedente € {} (considerando anche la tredicesima).",
        terms.calculation_period,
        format_amount(terms.previous_salary)
    ));

    lines.push(String::new());
    lines.push(PAYMENT_STEPS_HEADER.to_string());
    lines.extend(terms.payment_steps.iter().map(|step| {
        format!(
            "  - Step {}: {} → € {}",
            step.step,
            step.description,
            format_amount(step.amount)
        )
    }));

    lines.push(String::new());
    lines.push(CONDITIONS_HEADER.to_string());
    lines.push(format!(
        "  - Nessun periodo di prova: {}",
        yes_no(conditions.no_probation_period)
    ));
    lines.push(format!(
        "  - Preavviso secondo i termini di legge: {}",
        yes_no(conditions.legal_notice_period)
    ));
    lines.push(format!(
        "  - Rinuncia a NASpI e preavviso arretrati: {} {}",
        yes_no(conditions.waive_naspi_notice),
        NASPI_WAIVER_NOTE
    ));

    lines.push(String::new());
    lines.push(GRIEVANCES_HEADER.to_string());
    lines.extend(
        terms
            .grievance_clauses
            .iter()
            .map(|clause| format!("  - {}", clause)),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractConditions, PaymentStep};
    use rust_decimal::Decimal;

    fn create_test_terms() -> ContractTerms {
        ContractTerms {
            net_bonus: Decimal::from(36_000),
            annual_salary: Decimal::from(80_000),
            calculation_period: "1° ottobre 2024 - 1° settembre 2025".to_string(),
            previous_salary: Decimal::from(60_000),
            payment_steps: vec![
                PaymentStep {
                    step: 1,
                    description: "Firma del contratto".to_string(),
                    amount: Decimal::from(12_000),
                },
                PaymentStep {
                    step: 2,
                    description: "Fine del terzo mese di lavoro".to_string(),
                    amount: Decimal::from(12_000),
                },
            ],
            contract_conditions: ContractConditions {
                waive_naspi_notice: true,
                no_probation_period: true,
                legal_notice_period: false,
            },
            grievance_clauses: vec![
                "Prima motivazione".to_string(),
                "Seconda motivazione".to_string(),
            ],
        }
    }

    fn lines_of(document: &str) -> Vec<&str> {
        document.split('\n').collect()
    }

    #[test]
    fn test_title_is_followed_by_blank_line() {
        let document = render(&create_test_terms());
        let lines = lines_of(&document);

        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], "");
    }

    #[test]
    fn test_bonus_line_keeps_literal_restatement() {
        let mut terms = create_test_terms();
        terms.net_bonus = Decimal::from(50_000);
        let document = render(&terms);

        assert_eq!(
            lines_of(&document)[2],
            "Bonus di ingresso: € 50,000 netti (pagato in 3 rate da € 12.000) - Calcolo: 3 × € 12.000 = € 36.000."
        );
    }

    #[test]
    fn test_salary_and_basis_lines() {
        let document = render(&create_test_terms());
        let lines = lines_of(&document);

        assert_eq!(lines[3], "RAL: € 80,000 lordi annui.");
        assert_eq!(
            lines[4],
            "Base di calcolo: periodo 1° ottobre 2024 - 1° settembre 2025, RAL precedente € 60,000 (considerando anche la tredicesima)."
        );
    }

    #[test]
    fn test_calculation_period_is_rendered_verbatim() {
        let mut terms = create_test_terms();
        terms.calculation_period = "ottobre 2024 - settembre 2025".to_string();
        let document = render(&terms);

        assert_eq!(
            lines_of(&document)[4],
            "Base di calcolo: periodo ottobre 2024 - settembre 2025, RAL precedente € 60,000 (considerando anche la tredicesima)."
        );
    }

    #[test]
    fn test_payment_steps_follow_header_in_order() {
        let document = render(&create_test_terms());
        let lines = lines_of(&document);

        assert_eq!(lines[5], "");
        assert_eq!(lines[6], PAYMENT_STEPS_HEADER);
        assert_eq!(lines[7], "  - Step 1: Firma del contratto → € 12,000");
        assert_eq!(lines[8], "  - Step 2: Fine del terzo mese di lavoro → € 12,000");
    }

    #[test]
    fn test_condition_flags_render_as_tokens() {
        let document = render(&create_test_terms());

        assert!(document.contains("  - Nessun periodo di prova: sì\n"));
        assert!(document.contains("  - Preavviso secondo i termini di legge: no\n"));
        assert!(document.contains(
            "  - Rinuncia a NASpI e preavviso arretrati: sì (tramite Avvocati + rinuncia a sputtanamento planetario)\n"
        ));
    }

    #[test]
    fn test_naspi_note_is_kept_when_flag_is_false() {
        let mut terms = create_test_terms();
        terms.contract_conditions.waive_naspi_notice = false;
        let document = render(&terms);

        assert!(document.contains(
            "  - Rinuncia a NASpI e preavviso arretrati: no (tramite Avvocati + rinuncia a sputtanamento planetario)"
        ));
    }

    #[test]
    fn test_grievances_close_the_document() {
        let document = render(&create_test_terms());

        assert!(document.ends_with(
            "Motivazioni alla base delle richieste:\n  - Prima motivazione\n  - Seconda motivazione"
        ));
    }

    #[test]
    fn test_empty_sections_leave_headers_only() {
        let mut terms = create_test_terms();
        terms.payment_steps.clear();
        terms.grievance_clauses.clear();
        let document = render(&terms);

        assert!(document.contains("Rate bonus di ingresso:\n\nCondizioni contrattuali richieste:"));
        assert!(document.ends_with(GRIEVANCES_HEADER));
    }

    #[test]
    fn test_steps_are_not_reordered() {
        let mut terms = create_test_terms();
        terms.payment_steps.reverse();
        let document = render(&terms);

        let step_two = document.find("Step 2").unwrap();
        let step_one = document.find("Step 1").unwrap();
        assert!(step_two < step_one);
    }

    #[test]
    fn test_no_trailing_newline() {
        let document = render(&create_test_terms());
        assert!(!document.ends_with('\n'));
    }

    #[test]
    fn test_yes_no_tokens() {
        assert_eq!(yes_no(true), "sì");
        assert_eq!(yes_no(false), "no");
    }
}
