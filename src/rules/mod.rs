pub mod wikiart;

pub use wikiart::WikiArtRules;
