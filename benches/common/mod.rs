pub mod casteljau;
pub mod samples;
