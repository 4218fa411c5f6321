//! The step-by-step checkout flow for the registration commission.
//!
//! A [`CheckoutSession`] walks method selection, details entry,
//! confirmation and processing in order; each transition checks it is
//! leaving the right step, so screens cannot be skipped.

use serde::{Deserialize, Serialize};
use tutoria_core::{Result, TeacherId, TutoriaError};

use crate::payment::{CardDetails, CommissionQuote, PaymentMethod};

/// Where a checkout session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    SelectMethod,
    EnterDetails,
    Confirm,
    Processing,
    Approved,
}

/// One teacher's walk through the payment screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub teacher_id: TeacherId,
    pub quote: CommissionQuote,
    pub step: CheckoutStep,
    pub method: PaymentMethod,
    pub card: Option<CardDetails>,
}

impl CheckoutSession {
    /// Open a session on the method-selection step with the standard
    /// quote. Card is the pre-selected method, as on the screen.
    pub fn new(teacher_id: impl Into<TeacherId>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            quote: CommissionQuote::standard(),
            step: CheckoutStep::SelectMethod,
            method: PaymentMethod::Card,
            card: None,
        }
    }

    /// Pick a payment method and move to the details step.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<()> {
        self.ensure_step(CheckoutStep::SelectMethod)?;
        self.method = method;
        self.step = CheckoutStep::EnterDetails;
        Ok(())
    }

    /// Enter payment details and move to confirmation.
    ///
    /// Card payments require valid card data; PSE and Nequi take none,
    /// so `card` is ignored for them.
    pub fn submit_details(&mut self, card: Option<CardDetails>) -> Result<()> {
        self.ensure_step(CheckoutStep::EnterDetails)?;
        if self.method.needs_card() {
            let card = card.unwrap_or_default();
            card.validate()?;
            self.card = Some(card);
        } else {
            self.card = None;
        }
        self.step = CheckoutStep::Confirm;
        Ok(())
    }

    /// Accept the summary and move to processing.
    pub fn confirm(&mut self) -> Result<()> {
        self.ensure_step(CheckoutStep::Confirm)?;
        self.step = CheckoutStep::Processing;
        Ok(())
    }

    /// Mark the session approved once the gateway reports settlement.
    pub fn settle(&mut self) -> Result<()> {
        self.ensure_step(CheckoutStep::Processing)?;
        self.step = CheckoutStep::Approved;
        Ok(())
    }

    /// Step back one screen. A session that reached processing cannot
    /// go back; the settlement is already under way.
    pub fn back(&mut self) -> Result<()> {
        let previous = match self.step {
            CheckoutStep::EnterDetails => CheckoutStep::SelectMethod,
            CheckoutStep::Confirm => CheckoutStep::EnterDetails,
            step => {
                return Err(TutoriaError::CheckoutRejected {
                    teacher_id: self.teacher_id.clone(),
                    reason: format!("cannot go back from {step:?}"),
                })
            }
        };
        self.step = previous;
        Ok(())
    }

    /// Whether the commission has been settled.
    pub fn is_approved(&self) -> bool {
        self.step == CheckoutStep::Approved
    }

    fn ensure_step(&self, expected: CheckoutStep) -> Result<()> {
        if self.step == expected {
            return Ok(());
        }
        Err(TutoriaError::CheckoutRejected {
            teacher_id: self.teacher_id.clone(),
            reason: format!("expected {expected:?} but session is at {:?}", self.step),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_flow_walks_every_step() {
        let mut session = CheckoutSession::new("temp_1");
        assert_eq!(session.step, CheckoutStep::SelectMethod);

        session.select_method(PaymentMethod::Card).unwrap();
        assert_eq!(session.step, CheckoutStep::EnterDetails);

        session.submit_details(Some(CardDetails::autofill())).unwrap();
        assert_eq!(session.step, CheckoutStep::Confirm);

        session.confirm().unwrap();
        assert_eq!(session.step, CheckoutStep::Processing);

        session.settle().unwrap();
        assert!(session.is_approved());
    }

    #[test]
    fn test_card_method_requires_valid_card() {
        let mut session = CheckoutSession::new("temp_1");
        session.select_method(PaymentMethod::Card).unwrap();

        // No card at all reads as an empty form.
        let err = session.submit_details(None).unwrap_err();
        assert!(err.to_string().contains("Número de tarjeta inválido"));
        // The failed submit leaves the session on the details step.
        assert_eq!(session.step, CheckoutStep::EnterDetails);

        session.submit_details(Some(CardDetails::autofill())).unwrap();
        assert_eq!(session.step, CheckoutStep::Confirm);
    }

    #[test]
    fn test_wallet_methods_take_no_card() {
        let mut session = CheckoutSession::new("temp_1");
        session.select_method(PaymentMethod::Nequi).unwrap();
        session.submit_details(None).unwrap();
        assert_eq!(session.step, CheckoutStep::Confirm);
        assert!(session.card.is_none());
    }

    #[test]
    fn test_steps_cannot_be_skipped() {
        let mut session = CheckoutSession::new("temp_1");
        let err = session.confirm().unwrap_err();
        assert!(err.to_string().contains("Checkout rejected"));

        let err = session.settle().unwrap_err();
        assert!(err.to_string().contains("Checkout rejected"));
        assert_eq!(session.step, CheckoutStep::SelectMethod);
    }

    #[test]
    fn test_back_retraces_but_not_past_processing() {
        let mut session = CheckoutSession::new("temp_1");
        session.select_method(PaymentMethod::Pse).unwrap();
        session.submit_details(None).unwrap();

        session.back().unwrap();
        assert_eq!(session.step, CheckoutStep::EnterDetails);
        session.back().unwrap();
        assert_eq!(session.step, CheckoutStep::SelectMethod);
        assert!(session.back().is_err());

        session.select_method(PaymentMethod::Pse).unwrap();
        session.submit_details(None).unwrap();
        session.confirm().unwrap();
        assert!(session.back().is_err());
    }

    #[test]
    fn test_quote_carries_standard_amounts() {
        let session = CheckoutSession::new("temp_1");
        assert_eq!(session.quote.total(), 26.50);
    }
}
