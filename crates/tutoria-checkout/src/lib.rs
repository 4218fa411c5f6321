//! # Tutoria Checkout
//!
//! Registration commission checkout: the quote and payment methods,
//! card handling, the step-by-step [`CheckoutSession`], the simulated
//! gateway with its delayed settlement, and teacher onboarding.

pub mod gateway;
pub mod onboarding;
pub mod payment;
pub mod session;

pub use gateway::{PendingPayment, SimulatedGateway, DEFAULT_SETTLE_DELAY};
pub use onboarding::{demo_application, submit_application};
pub use payment::{
    format_card_number, format_expiry, payment_reference, CardDetails, CommissionQuote,
    PaymentMethod, PaymentReceipt, COMMISSION_USD, PROCESSING_FEE_USD,
};
pub use session::{CheckoutSession, CheckoutStep};
