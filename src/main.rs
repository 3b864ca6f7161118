mod telemetry;

use checkin_reminders_core::start_due_reminders_job;
use checkin_reminders_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber("checkin_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let job = start_due_reminders_job(context);
    tokio::select! {
        res = job => {
            if let Err(e) = res {
                error!("Due reminders job stopped unexpectedly: {:?}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }
}
