//! Loading of card dumps from the remote game server into core types.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
