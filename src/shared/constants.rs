/// Client-facing message for lookups whose identifier does not exist
pub const MESSAGE_NOT_FOUND: &str = "Resource with given ID not found.";

/// Client-facing message for every other failure
pub const MESSAGE_SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Client-facing message for query strings that cannot be read
pub const MESSAGE_INVALID_QUERY: &str = "Invalid query parameters.";

/// Prefix under which the region endpoints are mounted
pub const API_V1_PREFIX: &str = "/api/v1";
