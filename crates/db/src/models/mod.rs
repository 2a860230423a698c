pub mod alert;
pub mod recipient;
pub mod sensor_data;
pub mod threshold;
