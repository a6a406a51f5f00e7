// Question catalog and RIASEC scoring.
// Scoring is pure; persistence happens only in `service`, and only best-effort.

pub mod catalog;
pub mod handlers;
pub mod scoring;
pub mod service;
