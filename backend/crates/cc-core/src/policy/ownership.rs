//! Ownership-scoped access rules for user-authored resources.
//!
//! Reads are open for public resources and for the author; writes are
//! author-only regardless of visibility. An absent caller is anonymous.

use uuid::Uuid;

/// A resource with an owning author and a visibility flag
pub trait OwnedResource {
    fn author_id(&self) -> Uuid;
    fn is_public(&self) -> bool;
}

/// Whether `caller` is the author of `resource`
pub fn is_owner<R: OwnedResource + ?Sized>(resource: &R, caller: Option<Uuid>) -> bool {
    caller.is_some_and(|id| id == resource.author_id())
}

pub fn can_read<R: OwnedResource + ?Sized>(resource: &R, caller: Option<Uuid>) -> bool {
    resource.is_public() || is_owner(resource, caller)
}

pub fn can_write<R: OwnedResource + ?Sized>(resource: &R, caller: Option<Uuid>) -> bool {
    is_owner(resource, caller)
}
