pub mod form;
pub mod metrics;
pub mod palette;
pub mod popup;
pub mod radar;
pub mod status;
pub mod tables;
