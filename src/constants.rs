// -
// Wire-level literals shared across the hook pipeline

/// Named query parameter carrying a query's identity tag
pub(crate) const IDENTITY_PARAM: &str = "wp_query_id";

/// Sentinel identity associated with the pipeline's main query
pub(crate) const MAIN_QUERY_IDENTITY: &str = "main_query";

/// Separator between identity and sequence in the rendered key form
pub(crate) const KEY_SEPARATOR: char = '_';

/// Leading text of every report line
pub(crate) const REPORT_PREFIX: &str = "WP_Query Execution Time";
