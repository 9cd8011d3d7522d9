pub mod build;
pub mod layers;
pub mod locate;
pub mod neighbors;
pub mod polylines;
