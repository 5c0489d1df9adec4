// Form state pipeline: canonical document store, partial-update patches,
// section display order, and the per-user session facade exposed over HTTP.

pub mod handlers;
pub mod order;
pub mod patch;
pub mod session;
pub mod store;
