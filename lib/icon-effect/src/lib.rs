//! Icon effects
//!
//! Loads an icon, knocks out its near-white background and inverts what is
//! left, then writes it back out as an RGBA image.
//!
//! # Example
//! ```no_run
//! use icon_effect::{Effect, WhiteKnockout, io};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut img = io::decode("public/icons/shopee.jpg")?;
//! WhiteKnockout.apply(&mut img)?;
//! io::encode(&img, "public/icons/shopee.png", io::OUTPUT_FORMAT)?;
//! # Ok(())
//! # }
//! ```

pub mod io;
pub mod knockout_effect;

pub use knockout_effect::{KnockoutStats, WhiteKnockout};

use image::RgbaImage;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> Result<()>;
}
