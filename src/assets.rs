pub mod collection;
pub mod decode;
