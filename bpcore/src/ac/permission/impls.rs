use std::{
    fmt,
    str::FromStr,
};
use crate::error::ValueError;
use super::DefaultPermission;

impl DefaultPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultPermission::Add => "add",
            DefaultPermission::Change => "change",
            DefaultPermission::Delete => "delete",
            DefaultPermission::View => "view",
        }
    }

    /// The bare codename of this permission for the named type, e.g.
    /// `change_user`.
    pub fn codename(&self, type_name: &str) -> String {
        format!("{}_{type_name}", self.as_str())
    }
}

impl fmt::Display for DefaultPermission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultPermission {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(DefaultPermission::Add),
            "change" => Ok(DefaultPermission::Change),
            "delete" => Ok(DefaultPermission::Delete),
            "view" => Ok(DefaultPermission::View),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}
