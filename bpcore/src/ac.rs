pub mod catalog;
pub mod decision;
pub mod permission;
pub mod registry;
pub mod resource;
pub mod template;
pub mod traits;

pub use self::decision::Decision;
pub use self::permission::DefaultPermission;
pub use self::resource::ResourceMeta;
pub use self::template::CodeTemplate;
