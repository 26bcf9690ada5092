use thiserror::Error;

/// Errors that can occur during reconciliation and statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    /// Requested stratum value does not occur in the stratum column
    #[error("stratum value '{value}' not found in column '{column}'")]
    MissingStratum { column: String, value: String },

    /// No year column carrying the requested year token
    #[error("table '{table}' has no year column for '{year}'")]
    UnknownYearColumn { table: String, year: String },

    /// Referenced column is not part of the table or frame
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// Strict join requested and an entity is absent from one of the tables
    #[error("entity '{entity}' is missing from table '{table}' under a strict join")]
    UnjoinableEntity { entity: String, table: String },

    /// Too few usable observations for the requested statistic
    #[error("insufficient sample: need at least {needed} observations, got {got}")]
    InsufficientSample { needed: usize, got: usize },

    /// Too few rows relative to the number of predictors
    #[error("insufficient data: {rows} rows for {cols} predictors")]
    InsufficientData { rows: usize, cols: usize },

    /// An input collection that must not be empty is empty
    #[error("empty input: {field}")]
    EmptyInput { field: &'static str },

    /// Paired inputs have incompatible lengths
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Design matrix is singular (collinear or constant predictors)
    #[error("design matrix is rank deficient")]
    RankDeficient,

    /// Dependent variable is constant over the estimation sample
    #[error("dependent variable has zero variance")]
    DependentVarianceZero,

    /// Numerical failure inside a statistical routine
    #[error("numerical error: {0}")]
    Numeric(String),
}

/// Result type alias for reconciliation and statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
