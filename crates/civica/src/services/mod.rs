//! Business services layered over the store

pub mod attachments;
pub mod events;
pub mod issues;
pub mod recommend;
pub mod seed;
