pub mod product;

pub use product::{
    is_valid_category, Dimensions, NewProduct, Product, ProductImage, ProductPatch, Rating,
    CATEGORIES,
};
