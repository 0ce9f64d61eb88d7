use crate::seed::{Seeder, run_seeder};
use crate::seeds::{attendance::AttendanceSeeder, attendee::AttendeeSeeder};
use migration::{Migrator, MigratorTrait};
use services::attendance_service::AttendanceService;

mod seed;
mod seeds;

const DEFAULT_COUNT: usize = 25;

#[tokio::main]
async fn main() {
    let count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>().expect("count must be a non-negative integer"))
        .unwrap_or(DEFAULT_COUNT);

    let db = db::connect().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let service = AttendanceService::from_connection(db);

    for (seeder, name) in [
        (
            Box::new(AttendeeSeeder {
                repo: service.attendees().clone(),
                count,
            }) as Box<dyn Seeder + Send + Sync>,
            "Attendee",
        ),
        (
            Box::new(AttendanceSeeder {
                service: service.clone(),
            }),
            "Attendance",
        ),
    ] {
        run_seeder(&*seeder, name).await;
    }
}
