//! Per-category payload generators.
//!
//! Every generator takes the random source and the reference clock from its
//! caller, so a seeded `MockGenerator` reproduces the same payload.

pub mod calculation;
pub mod flight;
pub mod movie;
pub mod music;
pub mod news;
pub mod recipe;
pub mod sports;
pub mod stock;
pub mod translation;
pub mod weather;

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform pick from a non-empty table.
pub(crate) fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// `count` distinct entries of `items`, in random order.
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, items: &[&str], count: usize) -> Vec<String> {
    let mut shuffled: Vec<&str> = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().take(count).map(String::from).collect()
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
