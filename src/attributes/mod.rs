mod access;
mod catalogue;
mod descriptor;
mod registry;

pub mod ids;

pub use access::AttrAccess;
pub use catalogue::builtin;
pub use descriptor::AttrRef;
pub use ids::AttrId;
pub use registry::{Registry, Snapshot};
