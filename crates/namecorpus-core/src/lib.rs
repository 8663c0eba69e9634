pub mod config;
pub mod logging;

pub mod aggregate;
pub mod fetch;
pub mod names;
pub mod pipeline;
pub mod storage;
pub mod url_model;
