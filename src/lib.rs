// Torqa - Terms of Reference quality assessment
// Library exports

pub mod config;
pub mod input;
pub mod pipeline;
pub mod providers;
pub mod readability;
pub mod report;
pub mod review;
