//! Option listings.

use shortfilm::{FilmStyle, MusicVibe};
use strum::IntoEnumIterator;

/// Print every film style with its description.
pub fn list_styles() {
    println!("Available styles:");
    for style in FilmStyle::iter() {
        println!("  {:<12} {}", style.as_str(), style.description());
    }
}

/// Print every music vibe with its description.
pub fn list_vibes() {
    println!("Available music vibes:");
    for vibe in MusicVibe::iter() {
        println!("  {:<12} {}", vibe.as_str(), vibe.description());
    }
}
