use thiserror::Error;

use crate::model::{ProjectDescription, TaskDescription, UserId};

/// Records whose mutations are reserved to the user who created them.
pub trait Owned {
    fn creator(&self) -> UserId;
}

impl Owned for ProjectDescription {
    fn creator(&self) -> UserId {
        self.creator
    }
}

impl Owned for TaskDescription {
    fn creator(&self) -> UserId {
        self.creator
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("record does not exist")]
    NotFound,
    #[error("caller is not the creator of the record")]
    Forbidden,
}

pub fn require_owner<R: Owned>(record: R, caller: UserId) -> Result<R, OwnershipError> {
    if record.creator() != caller {
        return Err(OwnershipError::Forbidden);
    }

    Ok(record)
}

/// Checks a looked-up record before it is mutated: it must exist and belong to `caller`.
pub fn require_existing_owner<R: Owned>(
    record: Option<R>,
    caller: UserId,
) -> Result<R, OwnershipError> {
    let Some(record) = record else {
        return Err(OwnershipError::NotFound);
    };

    require_owner(record, caller)
}
