pub mod normalize;
pub mod password;
