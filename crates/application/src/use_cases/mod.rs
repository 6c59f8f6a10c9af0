pub mod dns;

pub use dns::Resolver;
