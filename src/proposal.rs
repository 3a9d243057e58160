//! The built-in contract proposal.
//!
//! This module holds the terms of the proposal this crate exists to produce
//! and the entry points that render them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{CalculationPeriod, ContractConditions, ContractTerms, PaymentStep};
use crate::render::render;

const PERIOD_START: NaiveDate = match NaiveDate::from_ymd_opt(2024, 10, 1) {
    Some(date) => date,
    None => panic!("invalid calculation period start"),
};

const PERIOD_END: NaiveDate = match NaiveDate::from_ymd_opt(2025, 9, 1) {
    Some(date) => date,
    None => panic!("invalid calculation period end"),
};

/// Amount of each of the three bonus installments.
const INSTALLMENT_AMOUNT: i64 = 12_000;

/// Builds the terms of the built-in proposal.
///
/// # Example
///
/// ```
/// use contract_proposal::proposal::contract_terms;
/// use rust_decimal::Decimal;
///
/// let terms = contract_terms();
/// assert_eq!(terms.net_bonus, Decimal::from(36_000));
/// assert_eq!(terms.payment_steps.len(), 3);
/// assert!(terms.installments_match_bonus());
/// ```
pub fn contract_terms() -> ContractTerms {
    let installments = [
        "Firma del contratto",
        "Fine del terzo mese di lavoro",
        "Fine del sesto mese di lavoro",
    ];

    ContractTerms {
        net_bonus: Decimal::from(36_000),
        annual_salary: Decimal::from(80_000),
        calculation_period: CalculationPeriod::new(PERIOD_START, PERIOD_END).to_string(),
        previous_salary: Decimal::from(60_000),
        payment_steps: installments
            .iter()
            .zip(1..)
            .map(|(description, step)| PaymentStep {
                step,
                description: description.to_string(),
                amount: Decimal::from(INSTALLMENT_AMOUNT),
            })
            .collect(),
        contract_conditions: ContractConditions {
            waive_naspi_notice: true,
            no_probation_period: true,
            legal_notice_period: true,
        },
        grievance_clauses: vec![
            "Mancato riconoscimento della tredicesima nel calcolo della RAL precedente".to_string(),
            "Ritardi ripetuti nel pagamento delle competenze arretrate".to_string(),
            "Preavviso non retribuito al termine del precedente rapporto".to_string(),
        ],
    }
}

/// Renders the built-in proposal.
///
/// # Example
///
/// ```
/// use contract_proposal::proposal::generate_contract_proposal;
///
/// let document = generate_contract_proposal();
/// assert!(document.contains("RAL: € 80,000 lordi annui."));
/// ```
pub fn generate_contract_proposal() -> String {
    generate_proposal_for(&contract_terms())
}

/// Renders a proposal for the given terms, logging diagnostics about them.
///
/// When the installments do not add up to the net bonus a warning is logged,
/// since the bonus line restates `3 × € 12.000 = € 36.000.` literally. The
/// document is rendered unchanged either way.
pub fn generate_proposal_for(terms: &ContractTerms) -> String {
    debug!(
        payment_steps = terms.payment_steps.len(),
        grievance_clauses = terms.grievance_clauses.len(),
        "Rendering contract proposal"
    );

    if !terms.installments_match_bonus() {
        warn!(
            net_bonus = %terms.net_bonus,
            installments_total = %terms.installments_total(),
            "Bonus installments do not add up to the net bonus"
        );
    }

    render(terms)
}
