/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const PLAN_ROUTE_COMPONENT: &str = "plan";
pub const PLAN_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", PLAN_ROUTE_COMPONENT);

pub const SUPPLEMENTS_ROUTE_COMPONENT: &str = "supplements";
pub const SUPPLEMENTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SUPPLEMENTS_ROUTE_COMPONENT);

/// Default location of the catalog document, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data.json";
