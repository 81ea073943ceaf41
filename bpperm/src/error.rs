pub use bpcore::error::{
    CodeError,
    Error,
    PermissionDenied,
};
