pub mod feedings;
pub mod husbandry_records;
pub mod reptiles;
pub mod schedules;
