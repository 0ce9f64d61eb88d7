use crate::seed::Seeder;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use services::attendee_repository::AttendeeRepository;
use services::error::ServiceResult;
use services::types::{Gender, NewAttendee};

const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

pub struct AttendeeSeeder {
    pub repo: AttendeeRepository,
    /// Random attendees added after the fixed demo ones.
    pub count: usize,
}

#[async_trait::async_trait]
impl Seeder for AttendeeSeeder {
    async fn seed(&self) -> ServiceResult<()> {
        // Fixed demo attendees
        for (name, email, phone, gender, region) in [
            ("John Doe", "john@example.com", "+1234567890", Gender::Male, "North"),
            ("Jane Smith", "jane@example.com", "+1987654321", Gender::Female, "South"),
            ("Alex Johnson", "alex@example.com", "+1122334455", Gender::Other, "East"),
        ] {
            self.repo
                .create(NewAttendee {
                    name: name.into(),
                    email: email.into(),
                    phone: phone.into(),
                    gender,
                    region: region.into(),
                })
                .await?;
        }

        // Random attendees
        for _ in 0..self.count {
            let gender = match fastrand::u8(..3) {
                0 => Gender::Male,
                1 => Gender::Female,
                _ => Gender::Other,
            };
            self.repo
                .create(NewAttendee {
                    name: Name().fake(),
                    email: SafeEmail().fake(),
                    phone: PhoneNumber().fake(),
                    gender,
                    region: REGIONS[fastrand::usize(..REGIONS.len())].into(),
                })
                .await?;
        }

        Ok(())
    }
}
