use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no spheres to build a hitbox hierarchy from")]
    EmptyScene,

    #[error("{count} spheres exceed the capacity of {max}")]
    CapacityExceeded { count: usize, max: usize },
}
