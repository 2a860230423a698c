mod air_pollution_reading_repo;
mod alert_repo;
mod recipient_repo;
mod street_light_reading_repo;
mod threshold_repo;
mod traffic_reading_repo;

pub use air_pollution_reading_repo::AirPollutionReadingRepo;
pub use alert_repo::AlertRepo;
pub use recipient_repo::RecipientRepo;
pub use street_light_reading_repo::StreetLightReadingRepo;
pub use threshold_repo::ThresholdRepo;
pub use traffic_reading_repo::TrafficReadingRepo;
