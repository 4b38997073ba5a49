pub mod draft;
pub mod jobs;
pub mod migrate;
pub mod serve;
