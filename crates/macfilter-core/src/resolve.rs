// ── Site resolution ──

use crate::error::CoreError;
use crate::model::Site;

/// Map a user-entered site descriptor to a site.
///
/// Display names are tried first, then internal codes; both comparisons are
/// exact but case-insensitive. There is no partial matching.
pub fn resolve_site<'a>(sites: &'a [Site], query: &str) -> Result<&'a Site, CoreError> {
    let wanted = query.trim();

    sites
        .iter()
        .find(|s| same_name(&s.display_name, wanted))
        .or_else(|| sites.iter().find(|s| same_name(&s.code, wanted)))
        .ok_or_else(|| CoreError::SiteNotFound {
            query: query.to_owned(),
            available: sites.iter().map(|s| s.display_name.clone()).collect(),
        })
}

/// Equal after Unicode lowercasing, so `Büro` matches `BÜRO`.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
