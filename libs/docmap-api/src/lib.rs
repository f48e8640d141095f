pub mod codec;
pub mod error;
pub mod representation;
pub mod schema;
pub mod value;
