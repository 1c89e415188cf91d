pub mod bench;
pub mod testing;
