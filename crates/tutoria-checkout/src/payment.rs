//! Commission quote, payment methods and card handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tutoria_core::{Result, TeacherId, TutoriaError};

/// Flat listing commission, in USD.
pub const COMMISSION_USD: f64 = 25.0;

/// Fixed processing fee added on top, in USD.
pub const PROCESSING_FEE_USD: f64 = 1.50;

/// Cost breakdown shown on the payment summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionQuote {
    pub commission: f64,
    pub processing_fee: f64,
}

impl CommissionQuote {
    /// The standard registration quote.
    pub fn standard() -> Self {
        Self {
            commission: COMMISSION_USD,
            processing_fee: PROCESSING_FEE_USD,
        }
    }

    /// Amount actually charged.
    pub fn total(&self) -> f64 {
        self.commission + self.processing_fee
    }
}

/// How the commission gets paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Pse,
    Nequi,
}

impl PaymentMethod {
    /// Every method the gateway offers, in display order.
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Card, PaymentMethod::Pse, PaymentMethod::Nequi];

    /// Display name on the method card.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Pse => "PSE",
            PaymentMethod::Nequi => "Nequi",
        }
    }

    /// One-line description under the name.
    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Visa, Mastercard, Amex",
            PaymentMethod::Pse => "Transferencia inmediata",
            PaymentMethod::Nequi => "Billetera digital",
        }
    }

    /// Whether this method needs card details before confirming.
    pub fn needs_card(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

/// Card form data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub holder: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    /// The demo card the autofill button enters.
    pub fn autofill() -> Self {
        Self {
            number: "4532 1234 5678 9012".to_string(),
            holder: "JUAN PEREZ GARCIA".to_string(),
            expiry: "12/25".to_string(),
            cvv: "123".to_string(),
        }
    }

    /// Check the form fields, first problem wins.
    pub fn validate(&self) -> Result<()> {
        let number_len = self
            .number
            .chars()
            .filter(|c| !c.is_whitespace())
            .count();
        if number_len < 16 {
            return Err(invalid("number", "Número de tarjeta inválido"));
        }
        if self.holder.chars().count() < 3 {
            return Err(invalid("holder", "Nombre del titular es requerido"));
        }
        if self.expiry.chars().count() < 5 {
            return Err(invalid("expiry", "Fecha de expiración inválida"));
        }
        if self.cvv.chars().count() < 3 {
            return Err(invalid("cvv", "CVV inválido"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> TutoriaError {
    TutoriaError::InvalidCard {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Group a typed card number into blocks of four digits.
///
/// Takes the first contiguous digit run (whitespace ignored), capped at
/// sixteen digits. Input with no digits comes back unchanged.
pub fn format_card_number(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits: Vec<char> = cleaned
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .take(16)
        .collect();
    if digits.is_empty() {
        return input.to_string();
    }
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert the slash of an `MM/YY` expiry while typing.
pub fn format_expiry(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let month: String = digits[..2].iter().collect();
        let year: String = digits[2..digits.len().min(4)].iter().collect();
        format!("{month}/{year}")
    } else {
        digits.into_iter().collect()
    }
}

/// Proof of a settled commission payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub method: PaymentMethod,
    pub amount: f64,
    pub teacher_id: TeacherId,
    pub settled_at: DateTime<Utc>,
}

/// Reference shown on the success screen: `PAY-` plus the last eight
/// digits of the settlement timestamp in milliseconds.
pub fn payment_reference(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().unsigned_abs().to_string();
    let tail = if millis.len() > 8 {
        &millis[millis.len() - 8..]
    } else {
        millis.as_str()
    };
    format!("PAY-{tail}")
}
