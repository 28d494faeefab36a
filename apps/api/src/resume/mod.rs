// Resume persistence: every save inserts a new record holding the whole draft.

pub mod handlers;
pub mod store;
