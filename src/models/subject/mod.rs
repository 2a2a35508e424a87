// Subject module
// Courses/topics a tutor can opt into teaching

pub type SubjectId = String;

/// A teachable subject with the tutor's registration flag.
///
/// Registration gates availability: a slot may only be tagged with
/// subjects that are registered at the moment the slot is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub code: String,
    pub registered: bool,
}

impl Subject {
    pub fn new(
        id: impl Into<SubjectId>,
        name: impl Into<String>,
        code: impl Into<String>,
        registered: bool,
    ) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Subject name cannot be empty".to_string());
        }

        Ok(Self {
            id: id.into(),
            name,
            code: code.into(),
            registered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_subject() {
        let s = Subject::new("1", "Calculus 2", "MT1007", true).unwrap();
        assert_eq!(s.code, "MT1007");
        assert!(s.registered);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Subject::new("1", "", "MT1007", false).is_err());
    }
}
