mod aggregate;

pub use aggregate::{Container, ContainerDraft};
