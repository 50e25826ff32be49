//! Request handlers.

pub mod checkin;
pub mod health;
pub mod qrcode;
