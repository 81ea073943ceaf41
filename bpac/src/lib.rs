pub mod dispatch;
pub mod error;
pub mod filter;
pub mod policy;
pub mod table;

pub use dispatch::Dispatch;
pub use filter::ActionFilter;
pub use policy::AccessPolicy;
