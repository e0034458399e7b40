/*!
 * Owner and group name resolution
 */

use tracing::debug;
use users::{Groups, Users, UsersCache};

/// Maps numeric ids to display names
pub trait IdentityResolver {
    /// Username for `uid`, if the account database knows it
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Group name for `gid`, if the group database knows it
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Resolver backed by the system passwd and group databases
///
/// Lookups are cached for the lifetime of the resolver, so a directory full
/// of files owned by the same user hits the database once.
#[derive(Default)]
pub struct SystemIdentity {
    cache: UsersCache,
}

impl SystemIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        self.cache
            .get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().to_string())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        self.cache
            .get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().to_string())
    }
}

/// Render the `user group` column, falling back to numeric ids
pub fn owner_column(uid: u32, gid: u32, resolver: &dyn IdentityResolver) -> String {
    let user = resolver.user_name(uid).unwrap_or_else(|| {
        debug!(uid, "unknown user id");
        uid.to_string()
    });
    let group = resolver.group_name(gid).unwrap_or_else(|| {
        debug!(gid, "unknown group id");
        gid.to_string()
    });
    format!("{} {}", user, group)
}
