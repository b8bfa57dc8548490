//! Rules for the gist service.

use super::{Target, lexer};
use crate::resource::Resource;

/// `/{id}` or `/{owner}/{id}`, with an optional `#file-{name}` anchor.
pub(super) fn gist(target: &Target<'_>) -> Option<Resource> {
    let (owner, id) = match target.segments.as_slice() {
        [id] => (None, *id),
        [owner, id] if lexer::validate_user(owner) => (Some(owner.to_string()), *id),
        _ => return None,
    };
    if !lexer::is_gist_id(id) {
        return None;
    }
    let file = match target.fragment {
        Some(fragment) => Some(lexer::gist_file(fragment)?.to_string()),
        None => None,
    };
    Some(Resource::Gist {
        owner,
        id: id.to_string(),
        file,
    })
}
