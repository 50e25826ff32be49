//! Integration tests driving the HTTP router end to end.

mod checkin_test;
mod helpers;
mod qrcode_test;
