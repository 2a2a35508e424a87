//! Resource shelf: learning materials tutors share and students browse.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::resource::{Resource, ResourceKind};

pub struct ResourceShelf {
    resources: Vec<Resource>,
}

impl ResourceShelf {
    pub fn seeded() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("seed date is valid");
        let res = |id, title: &str, kind, subject: &str, tutor: &str, date, url: &str| {
            Resource::new(id, title, kind, subject, tutor, date, url).expect("seed resource is valid")
        };

        let mut resources = vec![
            res(1, "Calculus 2 - Integral Exercises", ResourceKind::Pdf, "Calculus 2", "Tran Thi B", d(2025, 10, 12), "https://drive.example.com/calc2-integrals.pdf"),
            res(2, "Pointers and Memory in C++", ResourceKind::Video, "C++ Programming", "Nguyen Van D", d(2025, 10, 15), "https://youtube.com/watch?v=cpp-pointers"),
            res(3, "Linear Algebra Cheat Sheet", ResourceKind::Pdf, "Linear Algebra", "Tran Thi B", d(2025, 10, 18), "https://drive.example.com/linalg-cheatsheet.pdf"),
            res(4, "Interactive SQL Playground", ResourceKind::Link, "Database Systems", "Pham Van F", d(2025, 10, 20), "https://sqlplayground.example.com"),
            res(5, "Mechanics Problem Set Walkthrough", ResourceKind::Video, "General Physics", "Le Thi E", d(2025, 10, 22), "https://youtube.com/watch?v=mechanics-walkthrough"),
        ];
        resources[0].size = Some("2.4 MB".to_string());
        resources[2].size = Some("310 KB".to_string());

        Self { resources }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// All resources, or only those for one subject
    pub fn by_subject(&self, subject: Option<&str>) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| subject.map_or(true, |s| r.subject == s))
            .collect()
    }

    /// Distinct subjects present on the shelf, for the filter dropdown
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> =
            self.resources.iter().map(|r| r.subject.clone()).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }

    /// Resources shared by one tutor
    pub fn by_tutor(&self, tutor: &str) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.tutor == tutor).collect()
    }

    pub fn add(
        &mut self,
        title: &str,
        kind: ResourceKind,
        subject: &str,
        tutor: &str,
        uploaded: NaiveDate,
        url: &str,
    ) -> Result<i64> {
        let id = self.resources.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let resource = Resource::new(id, title, kind, subject, tutor, uploaded, url)
            .map_err(|e| anyhow!(e))?;
        self.resources.push(resource);
        log::info!("Shared resource '{}'", title);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_subject() {
        let shelf = ResourceShelf::seeded();
        assert_eq!(shelf.by_subject(Some("Calculus 2")).len(), 1);
        assert_eq!(shelf.by_subject(None).len(), 5);
    }

    #[test]
    fn test_subjects_distinct_sorted() {
        let shelf = ResourceShelf::seeded();
        let subjects = shelf.subjects();
        assert_eq!(subjects.len(), 5);
        let mut sorted = subjects.clone();
        sorted.sort();
        assert_eq!(subjects, sorted);
    }

    #[test]
    fn test_add_validates_and_allocates_id() {
        let mut shelf = ResourceShelf::seeded();
        let date = NaiveDate::from_ymd_opt(2025, 10, 25).unwrap();
        let id = shelf
            .add("Graph Theory Notes", ResourceKind::Pdf, "Discrete Mathematics", "Tran Thi B", date, "https://x.example.com/notes.pdf")
            .unwrap();
        assert_eq!(id, 6);
        assert!(shelf.add("", ResourceKind::Pdf, "s", "t", date, "u").is_err());
    }

    #[test]
    fn test_by_tutor() {
        let shelf = ResourceShelf::seeded();
        assert_eq!(shelf.by_tutor("Tran Thi B").len(), 2);
    }
}
