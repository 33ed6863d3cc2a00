pub mod feedings;
pub mod husbandry_records;
pub mod reptiles;
pub mod schedules;
pub mod users;

pub use feedings::FeedingService;
pub use husbandry_records::HusbandryRecordService;
pub use reptiles::ReptileService;
pub use schedules::{NewSchedule, ScheduleService};
pub use users::UserService;
