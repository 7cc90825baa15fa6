mod create;
mod delete;
mod list;
mod payload;
mod show;
mod update;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use payload::{CreateProductRequest, UpdateProductRequest};
pub use show::show;
pub use update::update;
