pub(crate) mod config;
pub(crate) mod output;
pub(crate) mod report;
pub(crate) mod run;
