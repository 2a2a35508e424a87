// Course catalog module
// Admin-managed courses, soft skills and tutoring classes

use chrono::NaiveDate;

/// A course in the university catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub faculty: String,
    pub credits: u8,
}

impl Course {
    pub fn new(
        id: i64,
        code: impl Into<String>,
        name: impl Into<String>,
        faculty: impl Into<String>,
        credits: u8,
    ) -> Result<Self, String> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() || name.trim().is_empty() {
            return Err("Course code and name are required".to_string());
        }

        Ok(Self {
            id,
            code,
            name,
            faculty: faculty.into(),
            credits,
        })
    }
}

/// A soft skill offered alongside courses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassStatus {
    Active,
    Full,
    Closed,
}

impl ClassStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClassStatus::Active => "Active",
            ClassStatus::Full => "Full",
            ClassStatus::Closed => "Closed",
        }
    }
}

/// A tutoring class opened by the admin and led by one tutor
#[derive(Debug, Clone, PartialEq)]
pub struct TutoringClass {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub tutor: String,
    pub max_students: u32,
    pub current_students: u32,
    pub status: ClassStatus,
    pub created: NaiveDate,
}

impl TutoringClass {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        subject: impl Into<String>,
        tutor: impl Into<String>,
        max_students: u32,
        created: NaiveDate,
    ) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Class name cannot be empty".to_string());
        }
        if max_students == 0 {
            return Err("Class must allow at least one student".to_string());
        }

        Ok(Self {
            id,
            name,
            subject: subject.into(),
            tutor: tutor.into(),
            max_students,
            current_students: 0,
            status: ClassStatus::Active,
            created,
        })
    }

    pub fn is_full(&self) -> bool {
        self.current_students >= self.max_students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course() {
        let c = Course::new(1, "MT1007", "Calculus 2", "Applied Science", 4).unwrap();
        assert_eq!(c.credits, 4);
    }

    #[test]
    fn test_course_requires_code_and_name() {
        assert!(Course::new(1, "", "Calculus 2", "Applied Science", 4).is_err());
        assert!(Course::new(1, "MT1007", "  ", "Applied Science", 4).is_err());
    }

    #[test]
    fn test_new_class() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let class = TutoringClass::new(1, "Calculus 2 - Class A", "Calculus 2", "Tran Thi B", 15, date).unwrap();
        assert_eq!(class.status, ClassStatus::Active);
        assert!(!class.is_full());
    }

    #[test]
    fn test_class_zero_capacity_rejected() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert!(TutoringClass::new(1, "X", "Calculus 2", "Tran Thi B", 0, date).is_err());
    }

    #[test]
    fn test_class_full() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        let mut class =
            TutoringClass::new(2, "Basic C++ Programming", "C++ Programming", "Nguyen Van D", 10, date).unwrap();
        class.current_students = 10;
        assert!(class.is_full());
    }
}
