pub mod carousel;
pub mod defaults;
pub mod entities;
