use std::fmt;

/// Scalar produced by a workload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Int(u64),
    Float(f64),
}

impl Outcome {
    /// Exact for integers; floats agree to within one relative `f64::EPSILON`
    /// of the larger magnitude.
    pub fn matches(&self, other: &Outcome) -> bool {
        match (self, other) {
            (Outcome::Int(a), Outcome::Int(b)) => a == b,
            (Outcome::Float(a), Outcome::Float(b)) => (a - b).abs() <= f64::EPSILON * a.abs().max(b.abs()),
            _ => false,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Int(v) => write!(f, "{}", v),
            Outcome::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for Outcome {
    fn from(value: u64) -> Self {
        Outcome::Int(value)
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Outcome::Float(value)
    }
}
