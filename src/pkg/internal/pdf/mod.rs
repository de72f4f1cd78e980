pub mod export;
pub mod markup;
