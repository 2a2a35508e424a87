//! Catalog service: courses, soft skills, tutoring classes and the
//! student's course-registration picks.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::course::{ClassStatus, Course, Skill, TutoringClass};

/// In-memory repository for everything the admin catalog screens manage
pub struct Catalog {
    courses: Vec<Course>,
    skills: Vec<Skill>,
    classes: Vec<TutoringClass>,
    /// Course ids the demo student has registered for tutoring support
    registered_courses: Vec<i64>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let course = |id, code: &str, name: &str, faculty: &str, credits| {
            Course::new(id, code, name, faculty, credits).expect("seed course is valid")
        };
        let courses = vec![
            course(1, "MT1007", "Calculus 2", "Faculty of Applied Science", 4),
            course(2, "CO1027", "C++ Programming", "Faculty of Computer Science", 3),
            course(3, "PH1003", "General Physics", "Faculty of Applied Science", 4),
            course(4, "CO2013", "Database Systems", "Faculty of Computer Science", 4),
            course(5, "MT1003", "Linear Algebra", "Faculty of Applied Science", 3),
        ];

        let skills = vec![
            Skill {
                id: 1,
                name: "Presentation Skills".to_string(),
                category: "Communication".to_string(),
            },
            Skill {
                id: 2,
                name: "Time Management".to_string(),
                category: "Self-management".to_string(),
            },
            Skill {
                id: 3,
                name: "Academic Writing".to_string(),
                category: "Communication".to_string(),
            },
        ];

        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("seed date is valid");
        let class = |id, name: &str, subject: &str, tutor: &str, max, current, status, created| {
            let mut c = TutoringClass::new(id, name, subject, tutor, max, created)
                .expect("seed class is valid");
            c.current_students = current;
            c.status = status;
            c
        };
        let classes = vec![
            class(1, "Calculus 2 - Class A", "Calculus 2", "Tran Thi B", 15, 12, ClassStatus::Active, d(2025, 9, 1)),
            class(2, "Basic C++ Programming", "C++ Programming", "Nguyen Van D", 10, 10, ClassStatus::Full, d(2025, 9, 5)),
            class(3, "Linear Algebra", "Linear Algebra", "Tran Thi B", 12, 8, ClassStatus::Active, d(2025, 9, 10)),
            class(4, "Database Systems", "Database Systems", "Pham Van F", 15, 14, ClassStatus::Active, d(2025, 9, 12)),
        ];

        Self {
            courses,
            skills,
            classes,
            registered_courses: vec![1, 2, 5],
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn classes(&self) -> &[TutoringClass] {
        &self.classes
    }

    pub fn add_course(
        &mut self,
        code: &str,
        name: &str,
        faculty: &str,
        credits: u8,
    ) -> Result<i64> {
        let id = self.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let course = Course::new(id, code, name, faculty, credits).map_err(|e| anyhow!(e))?;
        self.courses.push(course);
        log::info!("Added course {} ({})", name, code);
        Ok(id)
    }

    pub fn add_skill(&mut self, name: &str, category: &str) -> Result<i64> {
        if name.trim().is_empty() {
            return Err(anyhow!("Skill name cannot be empty"));
        }
        let id = self.skills.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.skills.push(Skill {
            id,
            name: name.to_string(),
            category: category.to_string(),
        });
        Ok(id)
    }

    pub fn create_class(
        &mut self,
        name: &str,
        subject: &str,
        tutor: &str,
        max_students: u32,
        created: NaiveDate,
    ) -> Result<i64> {
        let id = self.classes.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let class = TutoringClass::new(id, name, subject, tutor, max_students, created)
            .map_err(|e| anyhow!(e))?;
        self.classes.push(class);
        log::info!("Created tutoring class '{}'", name);
        Ok(id)
    }

    /// Remove a class (admin flow, behind a confirmation dialog)
    pub fn delete_class(&mut self, id: i64) -> Result<()> {
        let before = self.classes.len();
        self.classes.retain(|c| c.id != id);
        if self.classes.len() == before {
            return Err(anyhow!("Class with id {} not found", id));
        }
        log::info!("Deleted tutoring class {}", id);
        Ok(())
    }

    // Student course registration

    pub fn is_registered(&self, course_id: i64) -> bool {
        self.registered_courses.contains(&course_id)
    }

    pub fn registered_count(&self) -> usize {
        self.registered_courses.len()
    }

    /// Toggle the student's registration for a course; returns the new state
    pub fn toggle_registration(&mut self, course_id: i64) -> Result<bool> {
        if !self.courses.iter().any(|c| c.id == course_id) {
            return Err(anyhow!("Course with id {} not found", course_id));
        }
        if let Some(pos) = self.registered_courses.iter().position(|&id| id == course_id) {
            self.registered_courses.remove(pos);
            Ok(false)
        } else {
            self.registered_courses.push(course_id);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_course_allocates_next_id() {
        let mut catalog = Catalog::seeded();
        let id = catalog
            .add_course("MT2013", "Probability & Statistics", "Faculty of Applied Science", 3)
            .unwrap();
        assert_eq!(id, 6);
    }

    #[test]
    fn test_add_course_validates() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.add_course("", "X", "Y", 3).is_err());
    }

    #[test]
    fn test_create_and_delete_class() {
        let mut catalog = Catalog::seeded();
        let created = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let id = catalog
            .create_class("Physics Drop-in", "General Physics", "Le Thi E", 12, created)
            .unwrap();
        assert_eq!(catalog.classes().len(), 5);

        catalog.delete_class(id).unwrap();
        assert_eq!(catalog.classes().len(), 4);
        assert!(catalog.delete_class(id).is_err());
    }

    #[test]
    fn test_toggle_registration() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.is_registered(1));
        assert!(!catalog.toggle_registration(1).unwrap());
        assert!(catalog.toggle_registration(3).unwrap());
        assert!(catalog.toggle_registration(999).is_err());
    }
}
