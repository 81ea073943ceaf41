use bpcore::{
    ac::{
        registry::{
            FilterSet,
            PermissionSet,
        },
        resource::ResourceMeta,
        traits::{
            FilterProvider,
            PermissionProvider,
            Resource,
        },
    },
    error::PermissionDenied,
};
use std::sync::OnceLock;

use crate::actor::Member;

/// A resource owned by a `Member`, optionally published for all to see
/// and optionally locked against deletion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub id: i64,
    pub owner_id: i64,
    pub published: bool,
    pub locked: bool,
}

impl Document {
    pub fn new(id: i64, owner_id: i64) -> Self {
        Self {
            id,
            owner_id,
            .. Default::default()
        }
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    fn is_owner(member: &Member, doc: &Document) -> bool {
        member.authenticated && member.id == doc.owner_id
    }
}

static META: OnceLock<ResourceMeta> = OnceLock::new();
static PERMISSIONS: OnceLock<PermissionSet<Member, Document>> = OnceLock::new();
static FILTERS: OnceLock<FilterSet<Member, Vec<Document>>> = OnceLock::new();

impl Resource for Document {
    fn meta() -> &'static ResourceMeta {
        META.get_or_init(|| ResourceMeta::builder("docs", "document")
            .permission("publish_document", "Can publish document")
            .permission("archive_document", "Can archive document")
            .build()
        )
    }
}

impl PermissionProvider<Member> for Document {
    fn object_permissions() -> Option<&'static PermissionSet<Member, Self>> {
        Some(PERMISSIONS.get_or_init(|| PermissionSet::<Member, Document>::new()
            .register("view_document", |member, doc| Ok(
                doc.published || Document::is_owner(member, doc)
            ))
            .register("change_document", |member, doc| Ok(
                Document::is_owner(member, doc)
            ))
            .register("delete_document", |member, doc| {
                if doc.locked {
                    return Err(PermissionDenied);
                }
                Ok(Document::is_owner(member, doc))
            })
            .register("publish_document", |member, doc| Ok(
                !doc.published && Document::is_owner(member, doc)
            ))
        ))
    }
}

impl FilterProvider<Member, Vec<Document>> for Document {
    fn object_filters() -> Option<&'static FilterSet<Member, Vec<Document>>> {
        Some(FILTERS.get_or_init(|| FilterSet::<Member, Vec<Document>>::new()
            .register("view_document", |member, mut docs| {
                docs.retain(|doc| doc.published || Document::is_owner(member, doc));
                docs
            })
            .register("change_document", |member, mut docs| {
                docs.retain(|doc| Document::is_owner(member, doc));
                docs
            })
        ))
    }
}
