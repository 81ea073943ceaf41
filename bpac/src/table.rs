use bpcore::ac::{
    catalog,
    resource::ResourceMeta,
    template::CodeTemplate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Error;

/// Maps a lookup key (an action or a method) to the permission codes
/// required for it, as templates to be rendered for a resource type.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PermissionTable(BTreeMap<String, Vec<CodeTemplate>>);

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the templates and set them as the entry for key, replacing
    /// any existing entry.
    pub fn set<S>(
        &mut self,
        key: impl Into<String>,
        templates: impl IntoIterator<Item = S>,
    ) -> Result<(), Error>
    where
        S: AsRef<str>,
    {
        let templates = templates.into_iter()
            .map(|template| template.as_ref().parse())
            .collect::<Result<Vec<CodeTemplate>, _>>()?;
        self.0.insert(key.into(), templates);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&[CodeTemplate]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The permission codes required for key, rendered for the type;
    /// `None` if the table has no entry for key.
    pub fn required(&self, key: &str, meta: &ResourceMeta) -> Option<Vec<String>> {
        self.get(key).map(|templates| templates.iter()
            .map(|template| template.render(meta))
            .collect()
        )
    }

    /// Ensure every code in the table is valid for the type.
    pub fn validate(&self, meta: &ResourceMeta) -> Result<(), Error> {
        for (key, templates) in self.0.iter() {
            for template in templates {
                let code = template.render(meta);
                if let Err(e) = catalog::split(meta, &code) {
                    log::warn!("invalid entry for {key}: {e}");
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
