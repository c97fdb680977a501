pub mod jpeg;
