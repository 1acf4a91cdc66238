pub mod args;
pub mod file_utils;
