use crate::seed::Seeder;
use services::attendance_service::AttendanceService;
use services::error::ServiceResult;

/// Checks in roughly half of the attendees and checks out a third of those,
/// so the dashboard starts with every status represented.
pub struct AttendanceSeeder {
    pub service: AttendanceService,
}

#[async_trait::async_trait]
impl Seeder for AttendanceSeeder {
    async fn seed(&self) -> ServiceResult<()> {
        let attendees = self.service.attendees().find_all().await?;

        for attendee in attendees {
            if fastrand::bool() {
                self.service.check_in(attendee.id).await?;
                if fastrand::u8(..3) == 0 {
                    self.service.check_out(attendee.id).await?;
                }
            }
        }

        Ok(())
    }
}
