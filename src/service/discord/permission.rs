use serenity::all::{GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId};

/// Returns the `@everyone` role of a guild, whose ID always equals the guild ID.
pub fn everyone_role(guild_id: GuildId) -> RoleId {
    RoleId::new(guild_id.get())
}

/// Builds a channel overwrite that allows or denies `SEND_MESSAGES` for a role.
///
/// The overwrite replaces any existing overwrite for the role, so applying it
/// twice leaves the channel in the same state.
pub fn send_messages_overwrite(role_id: RoleId, allow: bool) -> PermissionOverwrite {
    let (allow, deny) = if allow {
        (Permissions::SEND_MESSAGES, Permissions::empty())
    } else {
        (Permissions::empty(), Permissions::SEND_MESSAGES)
    };

    PermissionOverwrite {
        allow,
        deny,
        kind: PermissionOverwriteType::Role(role_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everyone_role_shares_guild_id() {
        assert_eq!(everyone_role(GuildId::new(1234)), RoleId::new(1234));
    }

    /// Tests the lockdown overwrite.
    ///
    /// Expected: SEND_MESSAGES denied, nothing allowed, targeting the role
    #[test]
    fn deny_overwrite_revokes_send_messages() {
        let overwrite = send_messages_overwrite(RoleId::new(99), false);

        assert_eq!(overwrite.deny, Permissions::SEND_MESSAGES);
        assert!(overwrite.allow.is_empty());
        assert!(matches!(overwrite.kind, PermissionOverwriteType::Role(id) if id == RoleId::new(99)));
    }

    /// Tests the unlock overwrite.
    ///
    /// Expected: SEND_MESSAGES allowed, nothing denied
    #[test]
    fn allow_overwrite_restores_send_messages() {
        let overwrite = send_messages_overwrite(RoleId::new(99), true);

        assert_eq!(overwrite.allow, Permissions::SEND_MESSAGES);
        assert!(overwrite.deny.is_empty());
    }
}
