mod dom;

pub use dom::DomError;
