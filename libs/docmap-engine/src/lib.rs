pub mod class_map;
pub mod codecs;
pub mod config;
pub mod conventions;
pub mod enum_representation;
pub mod error;
pub mod member;
