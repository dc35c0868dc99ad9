pub mod globals;
pub mod imports;
