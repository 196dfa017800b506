use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not available")]
    CapabilityUnavailable(&'static str),

    #[error("index error: atom {atom} has type {atype}, but only {n_elements} element(s) were given")]
    TypeIndex {
        atom: usize,
        atype: usize,
        n_elements: usize,
    },

    #[error("invalid array shape: {0}")]
    Shape(String),

    #[error("'{0}' is a reserved per-atom property")]
    ReservedProperty(String),

    #[error("invalid indices: {terms} != 0 (found {sum})")]
    NonZeroIndexSum { terms: &'static str, sum: f64 },

    #[error("hexagonal indices given with non-hexagonal box")]
    NonHexagonalBox,

    #[error("unknown lattice setting '{0}'. Allowed values are: p, a, b, c, i, and f")]
    UnknownSetting(String),

    #[cfg(feature = "chemfiles")]
    #[error(transparent)]
    Chemfiles(#[from] chemfiles::Error),
}

impl Error {
    pub fn shape(details: impl Into<String>) -> Self {
        Error::Shape(details.into())
    }
}
