// Scan pipeline: extraction feeds normalize → scoring → report.
// Pure functions throughout; handlers own the HTTP surface.

pub mod handlers;
pub mod normalize;
pub mod report;
pub mod scoring;
