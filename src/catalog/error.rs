use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid sort column: {0}")]
    InvalidSortColumn(String),
}
