// crates/domain/src/targets.rs
use hashbrown::HashMap;

use crate::category::Category;

/// Immutable lookup from a normalized word form to its [`Category`].
///
/// Built once per run and shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct TargetWordSet {
    forms: HashMap<&'static str, Category>,
}

impl TargetWordSet {
    /// The word families counted by this tool.
    pub fn standard() -> Self {
        let forms = Category::ALL
            .into_iter()
            .flat_map(|category| {
                category
                    .surface_forms()
                    .iter()
                    .map(move |form| (*form, category))
            })
            .collect();
        Self { forms }
    }

    /// Category of an already normalized token, if tracked.
    #[inline]
    pub fn classify(&self, normalized: &str) -> Option<Category> {
        self.forms.get(normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Default for TargetWordSet {
    fn default() -> Self {
        Self::standard()
    }
}
