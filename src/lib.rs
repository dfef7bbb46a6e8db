//! banner-gen library crate.
//!
//! Turns raster images into monospace character art and renders text with
//! FIGlet fonts, for `banner.txt` style startup banners.
//!
//! The core entry point is [`ascii::quantize`], a pure function from a
//! decoded [`ascii::PixelBuffer`] and [`ascii::RenderOptions`] to a
//! [`ascii::CharacterGrid`].

pub mod ascii;
pub mod banner;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod figlet;
pub mod supersede;

pub use error::Error;
