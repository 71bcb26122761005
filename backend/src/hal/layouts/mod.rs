mod dense;
mod module;
mod product_form;
mod scratch;
mod sparse;

pub use dense::*;
pub use module::*;
pub use product_form::*;
pub use scratch::*;
pub use sparse::*;

pub(crate) use sparse::check_indices;
