use thiserror::Error;

use crate::kind::KindViolation;

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid kind {kind:?}: {reason}")]
    InvalidKind { kind: String, reason: KindViolation },
}
