pub mod backend;
pub mod builder;
pub mod error;
pub mod filter;
pub mod tester;

pub use backend::ObjectPermissionBackend;
pub use builder::Builder;
pub use filter::ObjectPermissionFilter;
pub use tester::ObjectPermissionTester;
