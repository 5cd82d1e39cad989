//! Acting-member resolution
//!
//! Commands that mutate or read a member's households run "as" someone.
//! The identity comes from `--as` (which clap also fills from
//! `HOUSESPLIT_MEMBER`), falling back to the `default_member` setting.

use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{HousesplitError, HousesplitResult};
use crate::models::Member;
use crate::storage::Storage;

use super::MemberService;

/// Resolve who is running the command
pub fn resolve_acting_member(
    storage: &Storage,
    explicit: Option<&str>,
    settings: &Settings,
) -> HousesplitResult<Member> {
    let members = MemberService::new(storage);

    let member = match (explicit, settings.default_member) {
        (Some(identifier), _) => members.require(identifier)?,
        (None, Some(id)) => members
            .get(id)?
            .ok_or_else(|| HousesplitError::member_not_found(id.to_string()))?,
        (None, None) => return Err(HousesplitError::NoIdentity),
    };

    debug!(member = %member.id, "acting member resolved");
    Ok(member)
}
