pub mod content;
pub mod ordinals;
pub mod pages;
