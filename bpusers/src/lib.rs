pub mod agent;
pub mod directory;
pub mod error;
pub mod permissions;
pub mod policy;
pub mod user;

pub use agent::Agent;
pub use directory::Directory;
pub use user::{
    Group,
    User,
};
