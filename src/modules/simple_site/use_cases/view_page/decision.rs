use crate::modules::simple_site::core::page::PageId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ViewPageError {
    #[error("page {0} does not exist")]
    NotFound(PageId),
}
