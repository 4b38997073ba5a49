pub use jobboard_utils_derive::Patch;

/// A single field of a patch: either a new value or no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchValue<T> {
    Update(T),
    Unchanged,
}

impl<T> Default for PatchValue<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<T> PatchValue<T> {
    pub fn update(self, old_value: T) -> T {
        match self {
            Self::Update(new_value) => new_value,
            Self::Unchanged => old_value,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update(_))
    }
}

impl<T> From<Option<T>> for PatchValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => PatchValue::Update(x),
            None => PatchValue::Unchanged,
        }
    }
}

/// Shallow merge of a partial update into a struct.
pub trait Patch {
    type Patch;

    /// Applies `patch`, keeping every field the patch leaves unchanged.
    fn update(self, patch: Self::Patch) -> Self;
}
