//! Tag-style skill selector with catalog-backed autocomplete.
//!
//! Names outside the catalog are accepted: when nothing matches the query the
//! selector offers the query itself as a new skill, and the backend creates it
//! on submit.

use crate::models::skill::SkillEntry;

/// What the autocomplete list should show for the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions<'a> {
    /// Empty query, no list.
    Hidden,
    Candidates(Vec<&'a SkillEntry>),
    /// No catalog match: offer "Add new skill: <query>".
    AddNew(&'a str),
}

/// Query box plus ordered, duplicate-free selection of skill names.
///
/// The owning `ProfileForm` is the change sink: it reads `selected()` after
/// every `add`/`remove` and the snapshot carries that list.
#[derive(Debug, Clone, Default)]
pub struct TagSelector {
    catalog: Vec<SkillEntry>,
    query: String,
    selected: Vec<String>,
}

impl TagSelector {
    pub fn new(catalog: Vec<SkillEntry>) -> Self {
        Self {
            catalog,
            query: String::new(),
            selected: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &[SkillEntry] {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: Vec<SkillEntry>) {
        self.catalog = catalog;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Appends `name` to the selection and clears the query.
    ///
    /// Blank names and exact (case-sensitive) duplicates are ignored and leave
    /// the query untouched. Returns whether the selection changed.
    pub fn add(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.is_selected(name) {
            return false;
        }
        self.selected.push(name.to_string());
        self.query.clear();
        true
    }

    /// Adds whatever is typed in the query box (the Enter key path).
    pub fn add_query(&mut self) -> bool {
        let query = std::mem::take(&mut self.query);
        let added = self.add(&query);
        if !added {
            self.query = query;
        }
        added
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.selected.iter().position(|s| s == name) {
            Some(idx) => {
                self.selected.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Catalog entries whose name contains the query (case-insensitive) and
    /// that are not selected yet. Recomputed on every call.
    pub fn filtered_candidates(&self) -> impl Iterator<Item = &SkillEntry> + '_ {
        let needle = self.query.to_lowercase();
        self.catalog.iter().filter(move |skill| {
            skill.name.to_lowercase().contains(&needle) && !self.is_selected(&skill.name)
        })
    }

    pub fn suggestions(&self) -> Suggestions<'_> {
        if self.query.is_empty() {
            return Suggestions::Hidden;
        }
        let candidates: Vec<_> = self.filtered_candidates().collect();
        if candidates.is_empty() {
            Suggestions::AddNew(&self.query)
        } else {
            Suggestions::Candidates(candidates)
        }
    }

    fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<SkillEntry> {
        vec![
            SkillEntry::new("1", "React"),
            SkillEntry::new("2", "Rust"),
            SkillEntry::new("3", "PostgreSQL"),
        ]
    }

    #[test]
    fn test_type_then_select_from_catalog() {
        let mut selector = TagSelector::new(vec![SkillEntry::new("1", "React")]);
        selector.set_query("rea");

        let candidates: Vec<_> = selector.filtered_candidates().cloned().collect();
        assert_eq!(candidates, vec![SkillEntry::new("1", "React")]);

        assert!(selector.add(&candidates[0].name));
        assert_eq!(selector.selected(), ["React".to_string()]);
        assert_eq!(selector.query(), "");
    }

    #[test]
    fn test_duplicate_add_is_ignored() {
        let mut selector = TagSelector::new(catalog());
        assert!(selector.add("Rust"));
        selector.set_query("ru");
        assert!(!selector.add("Rust"));
        assert_eq!(selector.selected(), ["Rust".to_string()]);
        assert_eq!(selector.query(), "ru");
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut selector = TagSelector::new(catalog());
        assert!(selector.add("rust"));
        assert!(selector.add("Rust"));
        assert_eq!(selector.selected().len(), 2);
    }

    #[test]
    fn test_blank_names_never_change_selection() {
        let mut selector = TagSelector::new(catalog());
        assert!(!selector.add(""));
        assert!(!selector.add("   "));
        assert!(selector.selected().is_empty());
    }

    #[test]
    fn test_selected_names_drop_out_of_candidates() {
        let mut selector = TagSelector::new(catalog());
        selector.add("Rust");
        selector.set_query("R");
        let names: Vec<_> = selector.filtered_candidates().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["React", "PostgreSQL"]);
    }

    #[test]
    fn test_unknown_query_offers_new_skill() {
        let mut selector = TagSelector::new(catalog());
        selector.set_query("Haskell");
        assert_eq!(selector.suggestions(), Suggestions::AddNew("Haskell"));

        assert!(selector.add_query());
        assert_eq!(selector.selected(), ["Haskell".to_string()]);
        assert_eq!(selector.suggestions(), Suggestions::Hidden);
    }

    #[test]
    fn test_empty_catalog_still_allows_adhoc_skills() {
        let mut selector = TagSelector::default();
        selector.set_query("Elixir");
        assert_eq!(selector.suggestions(), Suggestions::AddNew("Elixir"));
        assert!(selector.add_query());
    }

    #[test]
    fn test_add_query_keeps_blank_query() {
        let mut selector = TagSelector::new(catalog());
        selector.set_query("  ");
        assert!(!selector.add_query());
        assert_eq!(selector.query(), "  ");
    }

    #[test]
    fn test_remove_only_named_skill() {
        let mut selector = TagSelector::new(catalog());
        selector.add("React");
        selector.add("Rust");
        assert!(selector.remove("React"));
        assert!(!selector.remove("React"));
        assert_eq!(selector.selected(), ["Rust".to_string()]);
    }
}
