//! Multi-select fields with an "automatic" sentinel.
//!
//! On the wire `selectedModels` and `advancedReasoningMethods` are plain
//! string lists in which `"automatic"` means "let the backend choose". Here
//! that convention is a tagged variant: [`Selection::Automatic`] or
//! [`Selection::Explicit`] holding a non-empty, duplicate-free, ordered set of
//! concrete picks. A list mixing the sentinel with concrete picks cannot be
//! represented, and an explicit selection can never become empty.
//!
//! # Toggle rules
//!
//! | Current | Toggled id | Result |
//! |---|---|---|
//! | any | `"automatic"` | `Automatic` |
//! | `Automatic` | `x` | `[x]` |
//! | `[.., x, ..]` (more than one) | `x` | picks without `x` |
//! | `[x]` | `x` | `Automatic` |
//! | `[a, b]` | `x` | `[a, b, x]` |

use crate::core::model::ModelId;
use crate::settings::options::ReasoningMethod;
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// The sentinel identifier meaning "let the backend choose"
pub const AUTOMATIC: &str = "automatic";

fn is_sentinel(id: &str) -> bool {
    id.eq_ignore_ascii_case(AUTOMATIC)
}

/// Item types that can live in a [`Selection`]
pub trait SelectionItem: Clone + PartialEq + AsRef<str> + From<String> {}

impl<T> SelectionItem for T where T: Clone + PartialEq + AsRef<str> + From<String> {}

/// Either the automatic sentinel or an explicit set of picks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Automatic,
    Explicit(Picks<T>),
}

/// Non-empty, duplicate-free, insertion-ordered picks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picks<T> {
    items: Vec<T>,
}

/// Model picker state (`selectedModels`)
pub type ModelSelection = Selection<ModelId>;

impl<T: SelectionItem> Picks<T> {
    fn single(item: T) -> Self {
        Self { items: vec![item] }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> &T {
        &self.items[0]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.as_ref() == id)
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Automatic
    }
}

impl<T: SelectionItem> Selection<T> {
    /// Build a selection from wire identifiers.
    ///
    /// Blank entries and duplicates are dropped. If any concrete id remains
    /// the sentinel is discarded; otherwise the result is `Automatic`.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items: Vec<T> = Vec::new();
        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() || is_sentinel(id) {
                continue;
            }
            if !items.iter().any(|item| item.as_ref() == id) {
                items.push(T::from(id.to_string()));
            }
        }
        if items.is_empty() {
            Selection::Automatic
        } else {
            Selection::Explicit(Picks { items })
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, Selection::Automatic)
    }

    /// Explicit picks, or `None` in automatic mode
    pub fn explicit(&self) -> Option<&Picks<T>> {
        match self {
            Selection::Automatic => None,
            Selection::Explicit(picks) => Some(picks),
        }
    }

    /// Concrete picks as a slice (empty in automatic mode)
    pub fn picks(&self) -> &[T] {
        match self {
            Selection::Automatic => &[],
            Selection::Explicit(picks) => picks.as_slice(),
        }
    }

    /// Whether `id` is currently selected; `"automatic"` matches automatic mode
    pub fn contains(&self, id: &str) -> bool {
        let id = id.trim();
        match self {
            Selection::Automatic => is_sentinel(id),
            Selection::Explicit(picks) => picks.contains(id),
        }
    }

    /// Wire representation: `["automatic"]` or the ordered picks
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Selection::Automatic => vec![AUTOMATIC],
            Selection::Explicit(picks) => picks.iter().map(|item| item.as_ref()).collect(),
        }
    }

    /// Apply one click on `id` in the picker.
    pub fn toggle(&self, id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() {
            return self.clone();
        }
        if is_sentinel(id) {
            return Selection::Automatic;
        }

        match self {
            Selection::Automatic => Selection::Explicit(Picks::single(T::from(id.to_string()))),
            Selection::Explicit(picks) if picks.contains(id) => {
                let remaining: Vec<T> = picks
                    .iter()
                    .filter(|item| item.as_ref() != id)
                    .cloned()
                    .collect();
                if remaining.is_empty() {
                    Selection::Automatic
                } else {
                    Selection::Explicit(Picks { items: remaining })
                }
            }
            Selection::Explicit(picks) => {
                let mut items = picks.items.clone();
                items.push(T::from(id.to_string()));
                Selection::Explicit(Picks { items })
            }
        }
    }
}

impl<T: SelectionItem> Serialize for Selection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ids = self.ids();
        let mut seq = serializer.serialize_seq(Some(ids.len()))?;
        for id in ids {
            seq.serialize_element(id)?;
        }
        seq.end()
    }
}

impl<'de, T: SelectionItem> Deserialize<'de> for Selection<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Vec::<String>::deserialize(deserializer)?;
        Ok(Selection::from_ids(ids))
    }
}

// ==================== Reasoning methods ====================

/// Reasoning-method picker state (`advancedReasoningMethods`)
///
/// Unlike the model picker this field starts out empty; once the user
/// touches it, it follows the same sentinel rules as [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReasoningSelection {
    selection: Option<Selection<ReasoningMethod>>,
}

impl ReasoningSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn automatic() -> Self {
        Self {
            selection: Some(Selection::Automatic),
        }
    }

    /// Build from wire identifiers; an empty list stays empty
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<S> = ids.into_iter().collect();
        if ids.iter().all(|id| id.as_ref().trim().is_empty()) {
            return Self::empty();
        }
        Self {
            selection: Some(Selection::from_ids(ids)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_none()
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self.selection, Some(Selection::Automatic))
    }

    pub fn methods(&self) -> &[ReasoningMethod] {
        self.selection.as_ref().map(|s| s.picks()).unwrap_or(&[])
    }

    pub fn contains(&self, method: &str) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| s.contains(method))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.selection.as_ref().map(|s| s.ids()).unwrap_or_default()
    }

    /// Apply one click on `method` in the picker
    pub fn toggle(&self, method: &str) -> Self {
        if method.trim().is_empty() {
            return self.clone();
        }
        let current = self.selection.clone().unwrap_or(Selection::Automatic);
        Self {
            selection: Some(current.toggle(method)),
        }
    }
}

impl Serialize for ReasoningSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ids = self.ids();
        let mut seq = serializer.serialize_seq(Some(ids.len()))?;
        for id in ids {
            seq.serialize_element(id)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ReasoningSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Vec::<String>::deserialize(deserializer)?;
        Ok(ReasoningSelection::from_ids(ids))
    }
}

// ==================== Advanced features ====================

/// Independent feature toggles (`advancedFeatures`), insertion-ordered
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSet {
    features: Vec<String>,
}

impl FeatureSet {
    pub fn contains(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature.trim())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Flip one feature on or off
    pub fn toggle(&self, feature: &str) -> Self {
        let feature = feature.trim();
        if feature.is_empty() {
            return self.clone();
        }
        let mut features = self.features.clone();
        if let Some(pos) = features.iter().position(|f| f == feature) {
            features.remove(pos);
        } else {
            features.push(feature.to_string());
        }
        Self { features }
    }
}

impl From<Vec<String>> for FeatureSet {
    fn from(values: Vec<String>) -> Self {
        let mut features: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            let value = value.trim();
            if !value.is_empty() && !features.iter().any(|f| f == value) {
                features.push(value.to_string());
            }
        }
        Self { features }
    }
}

impl From<FeatureSet> for Vec<String> {
    fn from(set: FeatureSet) -> Self {
        set.features
    }
}

impl<S: AsRef<str>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FeatureSet::from(
            iter.into_iter()
                .map(|s| s.as_ref().to_string())
                .collect::<Vec<_>>(),
        )
    }
}

// ==================== Free functions ====================

/// One click on `model_id` in the model picker
pub fn toggle_model(current: &ModelSelection, model_id: &str) -> ModelSelection {
    current.toggle(model_id)
}

/// One click on `method` in the reasoning-method picker
pub fn toggle_reasoning_method(current: &ReasoningSelection, method: &str) -> ReasoningSelection {
    current.toggle(method)
}

/// Flip one advanced feature
pub fn toggle_feature(current: &FeatureSet, feature: &str) -> FeatureSet {
    current.toggle(feature)
}
