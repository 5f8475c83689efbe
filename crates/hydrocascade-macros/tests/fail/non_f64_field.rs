#![allow(dead_code)]
use hydrocascade_macros::FluxRecord;

#[derive(FluxRecord)]
pub struct Mixed {
    pub depth: f64,
    pub steps: u32,
}

fn main() {}
