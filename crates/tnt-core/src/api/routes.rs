//! Path table for the `/api/v1` endpoints.

/// Common prefix of every endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Top-level resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    AttributeCategory,
    Campground,
    Trailhead,
    Trip,
    User,
}

impl Resource {
    /// Collection segment, e.g. `trailheads`.
    pub fn plural(self) -> &'static str {
        match self {
            Resource::AttributeCategory => "attribute_categories",
            Resource::Campground => "campgrounds",
            Resource::Trailhead => "trailheads",
            Resource::Trip => "trips",
            Resource::User => "users",
        }
    }

    /// Singular stem used by the `<stem>_attributes` catalog endpoints.
    pub fn singular(self) -> &'static str {
        match self {
            Resource::AttributeCategory => "attribute_category",
            Resource::Campground => "campground",
            Resource::Trailhead => "trailhead",
            Resource::Trip => "trip",
            Resource::User => "user",
        }
    }
}

/// Per-item sub-resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubResource {
    Attributes,
    Maps,
    Photos,
    Route,
}

impl SubResource {
    pub fn segment(self) -> &'static str {
        match self {
            SubResource::Attributes => "attributes",
            SubResource::Maps => "maps",
            SubResource::Photos => "photos",
            SubResource::Route => "route",
        }
    }
}

/// `/api/v1/trailheads`
pub fn collection(resource: Resource) -> String {
    format!("{}/{}", API_PREFIX, resource.plural())
}

/// `/api/v1/trailheads/42`
pub fn item(resource: Resource, id: u64) -> String {
    format!("{}/{}/{}", API_PREFIX, resource.plural(), id)
}

/// `/api/v1/trailheads/42/photos`
pub fn sub_resource(resource: Resource, id: u64, sub: SubResource) -> String {
    format!("{}/{}/{}/{}", API_PREFIX, resource.plural(), id, sub.segment())
}

/// `/api/v1/trailheads/42/attributes` for one item, or the
/// `/api/v1/trailhead_attributes` catalog when no id is given.
pub fn attributes(resource: Resource, id: Option<u64>) -> String {
    match id {
        Some(id) => sub_resource(resource, id, SubResource::Attributes),
        None => format!("{}/{}_attributes", API_PREFIX, resource.singular()),
    }
}

/// User path keyed by an arbitrary id string (authors arrive as raw JSON values).
pub fn user(id: &str) -> String {
    format!("{}/{}/{}", API_PREFIX, Resource::User.plural(), id)
}
