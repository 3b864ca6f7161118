use checkin_reminders_core::ReminderController;
use checkin_reminders_domain::ID;
use checkin_reminders_infra::{setup_context, Config, ReminderContext, StaticTimeSys};
use chrono::NaiveDateTime;
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub ctx: ReminderContext,
    pub sys: Arc<StaticTimeSys>,
    pub user_id: ID,
}

// Builds an in-memory context whose clock is frozen at `now`
pub async fn spawn_app(now: NaiveDateTime) -> (TestApp, ReminderController) {
    let mut ctx = setup_context().await;
    let sys = Arc::new(StaticTimeSys::new(now));
    ctx.sys = sys.clone();
    let user_id = ID::new();
    ctx.config.owner_id = user_id;

    let controller = ReminderController::load(ctx.clone(), user_id)
        .await
        .expect("Failed to load reminders");

    let app = TestApp {
        config: ctx.config.clone(),
        ctx,
        sys,
        user_id,
    };
    (app, controller)
}
