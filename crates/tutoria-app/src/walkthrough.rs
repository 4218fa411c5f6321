//! Scripted walk through the marketplace journeys.

use chrono::Utc;
use futures::StreamExt;
use tracing::info;
use tutoria_checkout::{
    demo_application, submit_application, CardDetails, CheckoutSession, PaymentMethod,
    SimulatedGateway,
};
use tutoria_core::{ProposalDraft, ProposalStatus, Requester, Role, UserProfile, WeeklySchedule};
use tutoria_store::{
    available_dates, available_times, filter_teachers, CatalogFilter, ChangeFilter,
    DashboardMetrics, ProposalStats, Store, ThemeController, SESSION_DURATIONS_HOURS,
};

/// Plays the demo journeys against one store.
pub struct Walkthrough {
    store: Store,
    theme: ThemeController,
}

impl Walkthrough {
    pub fn new(store: Store, theme: ThemeController) -> Self {
        Self { store, theme }
    }

    /// Run every journey in order: student, teacher triage, onboarding
    /// with payment, admin metrics, sign-out.
    pub async fn run(self) -> anyhow::Result<()> {
        // Log every committed change in the background.
        let mut changes = self.store.subscribe(ChangeFilter::all()).into_stream();
        let logger = tokio::spawn(async move {
            while let Some(change) = changes.next().await {
                info!("🔄 revision {} ({:?})", change.revision, change.kind);
            }
        });

        let starting = self.theme.load().await;
        let toggled = self.theme.toggle().await;
        info!("🎨 theme {starting:?} -> {toggled:?} (persisted)");

        self.student_journey().await?;
        self.teacher_journey().await?;
        self.onboarding_journey().await?;
        self.admin_journey().await?;
        self.sign_out().await?;

        logger.abort();
        Ok(())
    }

    /// Register as a student, browse the catalog and send a proposal.
    async fn student_journey(&self) -> anyhow::Result<()> {
        info!("🧑‍🎓 Student journey starting");
        self.store.set_role(Some(Role::User)).await?;

        let profile = UserProfile {
            name: "Carla Fernández".to_string(),
            email: "carla.fernandez@example.com".to_string(),
            phone: "+593 98 765 4321".to_string(),
            address: "Av. Amazonas 123, Quito, Ecuador".to_string(),
        };
        profile.validate()?;
        self.store.save_user_profile(profile.clone()).await?;

        let state = self.store.snapshot().await;
        let filter = CatalogFilter::new().with_specialty("Matemática");
        let hits = filter_teachers(&state, &filter);
        info!("🔎 {} teachers list Matemática", hits.len());

        let teacher = hits
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no teacher matches the search"))?;
        let today = Utc::now().date_naive();
        let dates = available_dates(teacher, today, 14);
        let date = dates
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("{} has no open dates", teacher.name))?;
        let time = available_times(teacher, date)
            .first()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{} has no slots on {date}", teacher.name))?;
        info!("📅 booking {} on {date} at {time}", teacher.name);

        let draft = ProposalDraft::new(
            teacher.id.clone(),
            Requester::from(&profile),
            "Hola, quisiera clases dos veces por semana.",
        )
        .with_booking(date, time, SESSION_DURATIONS_HOURS[0]);
        let state = self.store.create_proposal(draft).await?;
        info!("📨 proposal {} created", state.proposals[0].id);
        Ok(())
    }

    /// Switch to the teacher side and triage the demo inbox.
    async fn teacher_journey(&self) -> anyhow::Result<()> {
        info!("👩‍🏫 Teacher journey starting");
        self.store.set_role(Some(Role::Teacher)).await?;

        let state = self.store.snapshot().await;
        let stats = ProposalStats::collect(&state);
        info!(
            "📥 inbox: {} pending / {} accepted / {} rejected",
            stats.pending, stats.accepted, stats.rejected
        );

        self.store
            .update_proposal_status("p_demo2".into(), ProposalStatus::Accepted)
            .await?;
        let state = self
            .store
            .update_proposal_status("p_demo5".into(), ProposalStatus::Rejected)
            .await?;

        let stats = ProposalStats::collect(&state);
        info!(
            "📥 inbox now: {} pending / {} accepted / {} rejected",
            stats.pending, stats.accepted, stats.rejected
        );
        Ok(())
    }

    /// Apply as a new teacher and pay the listing commission.
    async fn onboarding_journey(&self) -> anyhow::Result<()> {
        info!("📋 Onboarding journey starting");
        let teacher = submit_application(
            &self.store,
            demo_application(),
            WeeklySchedule::default_template(),
        )
        .await?;

        let mut session = CheckoutSession::new(teacher.id.clone());
        session.select_method(PaymentMethod::Card)?;
        session.submit_details(Some(CardDetails::autofill()))?;
        session.confirm()?;

        let gateway = SimulatedGateway::new(self.store.clone());
        let pending = gateway.charge(teacher.id.clone(), session.method, session.quote);
        info!("⏳ waiting for the processor...");
        let receipt = pending
            .settled()
            .await
            .ok_or_else(|| anyhow::anyhow!("settlement task died"))?;
        session.settle()?;
        info!(
            "🧾 {} paid ${:.2} ({})",
            teacher.name, receipt.amount, receipt.reference
        );

        let state = self.store.snapshot().await;
        let current = state
            .current_teacher
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("current teacher missing after payment"))?;
        info!("✅ commission flag mirrored: paid = {}", current.paid);
        Ok(())
    }

    /// Look at the platform from the admin dashboard.
    async fn admin_journey(&self) -> anyhow::Result<()> {
        info!("🛠️ Admin journey starting");
        self.store.set_role(Some(Role::Admin)).await?;

        let state = self.store.snapshot().await;
        let metrics = DashboardMetrics::collect(&state);
        info!(
            "📊 {} users, {} teachers, {} proposals ({} accepted, {} rejected)",
            metrics.registered_users,
            metrics.registered_teachers,
            metrics.total_proposals,
            metrics.accepted_proposals,
            metrics.rejected_proposals
        );
        Ok(())
    }

    /// Clear the teacher-side state and drop the role.
    async fn sign_out(&self) -> anyhow::Result<()> {
        self.store.clear_teacher_data().await?;
        let state = self.store.set_role(None).await?;
        info!(
            "🚪 signed out; role = {:?}, teacher data cleared = {}",
            state.role,
            state.current_teacher.is_none()
        );
        Ok(())
    }
}
