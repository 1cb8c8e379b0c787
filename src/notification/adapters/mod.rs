//! Adapter implementations for the notification ports.

pub mod cache;
pub mod mail;
pub mod template;
