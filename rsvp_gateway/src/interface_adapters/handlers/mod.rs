pub mod codes;
pub mod confirmations;
pub mod guests;
pub mod meta;
pub mod qr;
