pub mod attrs;
