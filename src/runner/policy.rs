//! Access policies deciding which marked members a runner may touch.

use crate::error::Denied;
use crate::registry::{MemberRef, Visibility};

/// Decides whether a marked member may be invoked or read.
pub trait AccessPolicy {
    fn may_invoke(&self, member: &MemberRef) -> Result<(), Denied>;

    /// Field reads bypass visibility unless a policy says otherwise.
    fn may_read(&self, member: &MemberRef) -> Result<(), Denied> {
        let _ = member;
        Ok(())
    }
}

impl<P: AccessPolicy + ?Sized> AccessPolicy for &P {
    fn may_invoke(&self, member: &MemberRef) -> Result<(), Denied> {
        (**self).may_invoke(member)
    }

    fn may_read(&self, member: &MemberRef) -> Result<(), Denied> {
        (**self).may_read(member)
    }
}

/// Only `pub` methods may be invoked; every marked field may be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicOnly;

impl AccessPolicy for PublicOnly {
    fn may_invoke(&self, member: &MemberRef) -> Result<(), Denied> {
        match member.visibility {
            Visibility::Public => Ok(()),
            Visibility::Restricted => Err(Denied::new("method is not public")),
        }
    }
}

/// Every marked member may be invoked and read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl AccessPolicy for Unrestricted {
    fn may_invoke(&self, _member: &MemberRef) -> Result<(), Denied> {
        Ok(())
    }
}
