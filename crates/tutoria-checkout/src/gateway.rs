//! Simulated payment gateway.
//!
//! Charging spawns a detached settlement task: it sleeps for the
//! configured delay, marks the teacher as paid in the store and then
//! publishes the receipt. The task keeps running even if the caller
//! drops its [`PendingPayment`] handle; a settlement in flight cannot
//! be cancelled.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{info, warn};
use tutoria_core::TeacherId;
use tutoria_store::Store;

use crate::payment::{payment_reference, CommissionQuote, PaymentMethod, PaymentReceipt};

/// Settlement delay of the simulated processor.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(3);

/// Gateway that settles every charge after a fixed delay.
#[derive(Clone)]
pub struct SimulatedGateway {
    store: Store,
    settle_delay: Duration,
}

impl SimulatedGateway {
    /// Gateway over a store, settling after the default three seconds.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// Gateway with a custom settlement delay.
    pub fn with_delay(store: Store, settle_delay: Duration) -> Self {
        Self {
            store,
            settle_delay,
        }
    }

    /// Start a charge for a teacher's commission.
    ///
    /// Returns immediately with a handle on the pending settlement.
    pub fn charge(
        &self,
        teacher_id: TeacherId,
        method: PaymentMethod,
        quote: CommissionQuote,
    ) -> PendingPayment {
        let (tx, rx) = watch::channel(None);
        let store = self.store.clone();
        let delay = self.settle_delay;
        let amount = quote.total();
        info!(
            "💳 charging ${:.2} for {} via {}",
            amount,
            teacher_id,
            method.name()
        );

        tokio::spawn(async move {
            sleep(delay).await;

            // An id that is neither in the catalog nor in onboarding is
            // logged and otherwise ignored; the charge still settles.
            if let Err(err) = store
                .update_teacher_payment_status(teacher_id.clone(), true)
                .await
            {
                warn!("payment settled but teacher {teacher_id} was gone: {err}");
            }

            let settled_at = Utc::now();
            let receipt = PaymentReceipt {
                reference: payment_reference(settled_at),
                method,
                amount,
                teacher_id,
                settled_at,
            };
            info!("✅ payment {} settled", receipt.reference);
            let _ = tx.send(Some(receipt));
        });

        PendingPayment { receiver: rx }
    }
}

/// Handle on a charge that has not settled yet.
pub struct PendingPayment {
    receiver: watch::Receiver<Option<PaymentReceipt>>,
}

impl PendingPayment {
    /// Wait for the settlement receipt.
    ///
    /// `None` only if the settlement task died before publishing.
    pub async fn settled(mut self) -> Option<PaymentReceipt> {
        loop {
            if let Some(receipt) = self.receiver.borrow_and_update().clone() {
                return Some(receipt);
            }
            if self.receiver.changed().await.is_err() {
                return self.receiver.borrow().clone();
            }
        }
    }

    /// Check for the receipt without waiting.
    pub fn receipt(&self) -> Option<PaymentReceipt> {
        self.receiver.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutoria_core::{Teacher, WeeklySchedule};

    fn fast_gateway(store: &Store) -> SimulatedGateway {
        SimulatedGateway::with_delay(store.clone(), Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_charge_settles_catalog_teacher() {
        let store = Store::seeded();
        let gateway = fast_gateway(&store);

        let pending = gateway.charge(
            "t6".into(),
            PaymentMethod::Card,
            CommissionQuote::standard(),
        );
        let receipt = pending.settled().await.unwrap();

        assert_eq!(receipt.amount, 26.50);
        assert_eq!(receipt.teacher_id.as_str(), "t6");
        assert!(receipt.reference.starts_with("PAY-"));

        let state = store.snapshot().await;
        assert!(state.teacher(&"t6".into()).unwrap().paid);
    }

    #[tokio::test]
    async fn test_charge_settles_onboarding_teacher() {
        let store = Store::seeded();
        let base = tutoria_store::seed::demo_teachers()[0].clone();
        // Park a provisional teacher that is not in the catalog.
        let teacher = Teacher {
            id: TeacherId::onboarding(),
            paid: false,
            weekly_schedule: WeeklySchedule::default_template(),
            ..base
        };
        let id = teacher.id.clone();
        store.set_current_teacher(teacher).await.unwrap();

        let gateway = fast_gateway(&store);
        let receipt = gateway
            .charge(id.clone(), PaymentMethod::Pse, CommissionQuote::standard())
            .settled()
            .await
            .unwrap();
        assert_eq!(receipt.teacher_id, id);

        let state = store.snapshot().await;
        assert!(state.current_teacher.as_ref().unwrap().paid);
        // The provisional entry never joins the catalog.
        assert_eq!(state.teachers.len(), 25);
    }

    #[tokio::test]
    async fn test_charge_for_unknown_teacher_still_settles() {
        let store = Store::seeded();
        let gateway = fast_gateway(&store);

        let receipt = gateway
            .charge(
                "t99".into(),
                PaymentMethod::Nequi,
                CommissionQuote::standard(),
            )
            .settled()
            .await
            .unwrap();
        assert_eq!(receipt.teacher_id.as_str(), "t99");

        // The failed flag update left the store where it was.
        assert_eq!(store.revision().await, 0);
    }

    #[tokio::test]
    async fn test_settlement_outlives_dropped_handle() {
        let store = Store::seeded();
        let gateway = fast_gateway(&store);

        let pending = gateway.charge(
            "t7".into(),
            PaymentMethod::Card,
            CommissionQuote::standard(),
        );
        drop(pending);

        sleep(Duration::from_millis(100)).await;
        let state = store.snapshot().await;
        assert!(state.teacher(&"t7".into()).unwrap().paid);
    }

    #[tokio::test]
    async fn test_receipt_is_none_before_settlement() {
        let store = Store::seeded();
        let gateway = SimulatedGateway::with_delay(store, Duration::from_secs(60));

        let pending = gateway.charge(
            "t8".into(),
            PaymentMethod::Card,
            CommissionQuote::standard(),
        );
        assert!(pending.receipt().is_none());
    }
}
