//! Contract terms model and related types.
//!
//! This module defines the [`ContractTerms`] record rendered into a proposal,
//! together with its payment schedule and contractual conditions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One installment of the entry bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStep {
    /// Sequence number of the installment, starting at 1.
    pub step: u32,
    /// When the installment is paid (e.g., "Fine del terzo mese di lavoro").
    pub description: String,
    /// The amount paid in this installment.
    pub amount: Decimal,
}

/// The contractual conditions requested alongside the offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractConditions {
    /// Waiver of the NASpI claim and of back notice pay.
    pub waive_naspi_notice: bool,
    /// The contract starts without a probation period.
    pub no_probation_period: bool,
    /// Notice period follows the statutory terms.
    pub legal_notice_period: bool,
}

/// The full set of terms rendered into a contract proposal.
///
/// The record is built once and only read afterwards.
///
/// # Example
///
/// ```
/// use contract_proposal::models::{
///     ContractConditions, ContractTerms, PaymentStep,
/// };
/// use rust_decimal::Decimal;
///
/// let terms = ContractTerms {
///     net_bonus: Decimal::from(24_000),
///     annual_salary: Decimal::from(70_000),
///     calculation_period: "Q1 2024 - Q4 2024".to_string(),
///     previous_salary: Decimal::from(55_000),
///     payment_steps: vec![
///         PaymentStep {
///             step: 1,
///             description: "Firma del contratto".to_string(),
///             amount: Decimal::from(12_000),
///         },
///         PaymentStep {
///             step: 2,
///             description: "Fine del terzo mese di lavoro".to_string(),
///             amount: Decimal::from(12_000),
///         },
///     ],
///     contract_conditions: ContractConditions::default(),
///     grievance_clauses: vec![],
/// };
/// assert!(terms.installments_match_bonus());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    /// Total entry bonus, net.
    pub net_bonus: Decimal,
    /// Gross annual salary (RAL).
    pub annual_salary: Decimal,
    /// Human-readable period the previous salary was measured over
    /// (e.g., "1° ottobre 2024 - 1° settembre 2025"). Rendered as given.
    pub calculation_period: String,
    /// Gross annual salary in the previous position.
    pub previous_salary: Decimal,
    /// Bonus installments, ordered by step number.
    pub payment_steps: Vec<PaymentStep>,
    /// Conditions requested for the contract.
    pub contract_conditions: ContractConditions,
    /// Free-text grievances motivating the requests, in presentation order.
    pub grievance_clauses: Vec<String>,
}

impl ContractTerms {
    /// Returns the sum of all installment amounts.
    pub fn installments_total(&self) -> Decimal {
        self.payment_steps.iter().map(|step| step.amount).sum()
    }

    /// Returns true if the installments add up to the net bonus.
    ///
    /// This is informational only; records that disagree are still rendered.
    pub fn installments_match_bonus(&self) -> bool {
        self.installments_total() == self.net_bonus
    }
}
