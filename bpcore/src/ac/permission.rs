use enumset::{
    EnumSet,
    EnumSetType,
};
use serde::{Deserialize, Serialize};

/// The verbs every resource type may carry a permission for without
/// having to declare them.  `View` is included so that read access has
/// to be granted explicitly, just like the others.
#[non_exhaustive]
#[derive(Debug, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPermission {
    Add,
    Change,
    Delete,
    View,
}

pub type DefaultPermissions = EnumSet<DefaultPermission>;

mod impls;
