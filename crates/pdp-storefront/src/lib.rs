pub mod client;
pub mod error;
pub mod fetcher;
pub mod page;
pub mod queries;
mod retry;
pub mod types;

pub use client::StorefrontClient;
pub use error::{PageError, StorefrontError};
pub use fetcher::{fetch_product, resolve_selected_variant, FetchedProduct};
pub use page::{assemble_page, load_product_page, ProductPage};
