#![allow(dead_code)]

pub mod wav;
pub mod zoolingo_env;
