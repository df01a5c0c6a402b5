//! Resolves component and modal custom IDs to the route that handles them.

use std::collections::HashMap;

use crate::{
    error::internal::InternalError,
    model::wizard::{split_custom_id, Route},
};

pub struct ComponentRouter {
    routes: HashMap<&'static str, Route>,
}

impl ComponentRouter {
    /// Builds the routing table for every known route.
    ///
    /// # Returns
    /// - `Ok(ComponentRouter)` - Every route id is unique
    /// - `Err(InternalError::DuplicateRoute)` - Two routes share an id
    pub fn new() -> Result<Self, InternalError> {
        Self::from_routes(Route::all())
    }

    fn from_routes(routes: impl IntoIterator<Item = Route>) -> Result<Self, InternalError> {
        let mut table = HashMap::new();

        for route in routes {
            if table.insert(route.id(), route).is_some() {
                return Err(InternalError::DuplicateRoute(route.id()));
            }
        }

        Ok(Self { routes: table })
    }

    /// Looks up the route for a custom ID and returns it with the ID's payload.
    pub fn resolve<'a>(&self, custom_id: &'a str) -> Option<(Route, Option<&'a str>)> {
        let (prefix, payload) = split_custom_id(custom_id);

        self.routes.get(prefix).map(|route| (*route, payload))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }
}
