use std::{
    fmt,
    str::FromStr,
};
use crate::{
    ac::resource::ResourceMeta,
    error::Error,
};
use super::{
    CodeTemplate,
    Segment,
};

impl CodeTemplate {
    pub fn render(&self, meta: &ResourceMeta) -> String {
        self.segments
            .iter()
            .fold(String::new(), |mut result, segment| {
                match segment {
                    Segment::Literal(s) => result.push_str(s),
                    Segment::Namespace => result.push_str(meta.namespace()),
                    Segment::TypeName => result.push_str(meta.type_name()),
                }
                result
            })
    }

    pub fn as_str(&self) -> &str {
        self.source.as_ref()
    }
}

impl FromStr for CodeTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedTemplate(s.to_string());
        let mut segments = Vec::new();
        let mut rest = s;
        while let Some(start) = rest.find(['{', '}']) {
            if rest[start..].starts_with('}') {
                return Err(malformed());
            }
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let end = rest[start..].find('}')
                .ok_or_else(malformed)? + start;
            segments.push(match &rest[start + 1..end] {
                "namespace" => Segment::Namespace,
                "type_name" => Segment::TypeName,
                _ => return Err(malformed()),
            });
            rest = &rest[end + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }
        Ok(Self {
            source: s.to_string(),
            segments,
        })
    }
}

impl TryFrom<String> for CodeTemplate {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CodeTemplate> for String {
    fn from(value: CodeTemplate) -> Self {
        value.source
    }
}

impl fmt::Display for CodeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        ac::resource::ResourceMeta,
        error::Error,
    };
    use super::CodeTemplate;

    #[test]
    fn render() -> anyhow::Result<()> {
        let meta = ResourceMeta::builder("users", "user").build();
        let template: CodeTemplate = "{namespace}.change_{type_name}".parse()?;
        assert_eq!(template.render(&meta), "users.change_user");
        let template: CodeTemplate = "{namespace}.set_{type_name}_active".parse()?;
        assert_eq!(template.render(&meta), "users.set_user_active");
        let template: CodeTemplate = "users.view_admin".parse()?;
        assert_eq!(template.render(&meta), "users.view_admin");
        assert_eq!(template.to_string(), "users.view_admin");
        Ok(())
    }

    #[test]
    fn malformed() {
        for s in [
            "{app_label}.add_{model_name}",
            "{namespace.add_user",
            "namespace}.add_user",
            "{}.add_user",
        ] {
            assert_eq!(
                s.parse::<CodeTemplate>(),
                Err(Error::MalformedTemplate(s.to_string())),
            );
        }
    }

    #[test]
    fn serde() -> anyhow::Result<()> {
        let templates: Vec<CodeTemplate> = serde_json::from_str(
            r#"["{namespace}.view_{type_name}", "{namespace}.view_admin"]"#
        )?;
        assert_eq!(templates.len(), 2);
        assert_eq!(
            serde_json::to_string(&templates)?,
            r#"["{namespace}.view_{type_name}","{namespace}.view_admin"]"#,
        );
        assert!(serde_json::from_str::<CodeTemplate>(r#""{model_name}""#).is_err());
        Ok(())
    }
}
