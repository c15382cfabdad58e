//! Constraint identification types.

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use timetable_core::ConstraintRef;
///
/// let cr = ConstraintRef::new("timetable", "Room conflict");
/// assert_eq!(cr.full_name(), "timetable/Room conflict");
///
/// let bare = ConstraintRef::new("", "Room conflict");
/// assert_eq!(bare.full_name(), "Room conflict");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintRef {
    /// Package grouping the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
}

impl ConstraintRef {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }
}

/// Whether a constraint match subtracts from or adds to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactType {
    /// Subtract from the score.
    Penalty,
    /// Add to the score.
    Reward,
}

impl ImpactType {
    /// Applies the sign of this impact to a non-negative weight.
    #[inline]
    pub fn apply<Sc: std::ops::Neg<Output = Sc>>(self, weight: Sc) -> Sc {
        match self {
            ImpactType::Penalty => -weight,
            ImpactType::Reward => weight,
        }
    }
}
