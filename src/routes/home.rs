//! Root greeting handler.

use crate::config::ROOT_GREETING;

/// Root handler.
///
/// Returns the fixed greeting as `text/plain`.
pub async fn index() -> &'static str {
    ROOT_GREETING
}
