//! Rendering of contract terms into the proposal document.
//!
//! This module contains amount formatting with grouped thousands, the
//! localized yes/no token for conditions, and the document renderer itself.

mod amount;
mod document;

pub use amount::format_amount;
pub use document::{
    BONUS_INSTALLMENT_NOTE, CONDITIONS_HEADER, GRIEVANCES_HEADER, NASPI_WAIVER_NOTE,
    PAYMENT_STEPS_HEADER, TITLE, render, yes_no,
};
