pub mod eval;
pub mod advisor;
pub mod noise;
