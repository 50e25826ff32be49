//! Server-rendered HTML pages.

pub mod qrcode;
