mod as_value;
mod data_type;
mod error;
mod options;
mod prepared;
mod request;
mod rewrite;
mod scanner;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use data_type::*;
pub use error::*;
pub use options::*;
pub use prepared::*;
pub use request::*;
pub use rewrite::*;
pub use scanner::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
