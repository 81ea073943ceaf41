use http::Method;
use std::collections::HashMap;

use crate::error::Error;

/// The actions a route dispatches each request method to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionRoutes(HashMap<Method, String>);

impl ActionRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes for a collection endpoint.
    pub fn collection() -> Self {
        Self::new()
            .route(Method::GET, "list")
            .route(Method::POST, "create")
            .route(Method::OPTIONS, "metadata")
    }

    /// Routes for an endpoint addressing a single instance.
    pub fn detail() -> Self {
        Self::new()
            .route(Method::GET, "retrieve")
            .route(Method::PUT, "update")
            .route(Method::PATCH, "partial_update")
            .route(Method::DELETE, "destroy")
            .route(Method::OPTIONS, "metadata")
    }

    pub fn route(mut self, method: Method, action: impl Into<String>) -> Self {
        self.0.insert(method, action.into());
        self
    }

    pub fn get(&self, method: &Method) -> Option<&str> {
        self.0.get(method).map(String::as_str)
    }

    /// The action for a request made with method, as dispatched by the
    /// route.  Note that HEAD is not routed on its own.
    pub fn dispatch(&self, method: Method) -> Dispatch<'_> {
        let action = self.get(&method);
        let dispatch = Dispatch::new(method).routes(self);
        match action {
            Some(action) => dispatch.action(action),
            None => dispatch,
        }
    }
}

/// A request as reported by the dispatch layer.
#[derive(Clone, Debug)]
pub struct Dispatch<'a> {
    method: Method,
    action: Option<&'a str>,
    routes: Option<&'a ActionRoutes>,
    ignore_policy: bool,
}

impl<'a> Dispatch<'a> {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            action: None,
            routes: None,
            ignore_policy: false,
        }
    }

    pub fn action(mut self, val: &'a str) -> Self {
        self.action = Some(val);
        self
    }

    pub fn routes(mut self, val: &'a ActionRoutes) -> Self {
        self.routes = Some(val);
        self
    }

    /// Exempt the request from the access policy entirely, e.g. for an
    /// index that lists the available endpoints.
    pub fn ignore_policy(mut self, val: bool) -> Self {
        self.ignore_policy = val;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn is_policy_ignored(&self) -> bool {
        self.ignore_policy
    }

    /// Resolve the action for the request.
    ///
    /// A HEAD request is served as a GET by the dispatch layer without
    /// being assigned an action, so it takes on the action that GET is
    /// routed to.
    pub fn resolve_action(&self) -> Result<&'a str, Error> {
        let action = match self.action {
            Some(action) => Some(action),
            None if self.method == Method::HEAD => self.routes
                .and_then(|routes| routes.get(&Method::GET)),
            None => None,
        };
        log::trace!("{} resolved to action {action:?}", self.method);
        action.ok_or_else(|| self.unsupported(None))
    }

    pub(crate) fn unsupported(&self, action: Option<&str>) -> Error {
        Error::UnsupportedAction {
            method: self.method.to_string(),
            action: action.map(str::to_string),
        }
    }
}
