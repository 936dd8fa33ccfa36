pub(crate) mod classify;
pub(crate) mod model;
pub(crate) mod resolve;
