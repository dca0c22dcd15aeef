use crate::resolve::ResolveError;
use crate::variables::StoreError;
use thiserror::Error;

pub type SkinResult<T> = std::result::Result<T, SkinError>;

#[derive(Debug, Error)]
pub enum SkinError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
