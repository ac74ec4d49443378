pub mod dsn;

pub use dsn::DsnWriter;
