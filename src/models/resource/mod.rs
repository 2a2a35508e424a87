// Resource module
// Learning materials shared by tutors and browsed by students

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Pdf,
    Link,
    Video,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Pdf => "PDF",
            ResourceKind::Link => "Link",
            ResourceKind::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub kind: ResourceKind,
    pub subject: String,
    pub tutor: String,
    pub uploaded: NaiveDate,
    pub url: String,
    /// Human-readable file size for PDFs, e.g. "2.4 MB"
    pub size: Option<String>,
}

impl Resource {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        kind: ResourceKind,
        subject: impl Into<String>,
        tutor: impl Into<String>,
        uploaded: NaiveDate,
        url: impl Into<String>,
    ) -> Result<Self, String> {
        let title = title.into();
        let url = url.into();
        if title.trim().is_empty() {
            return Err("Resource title cannot be empty".to_string());
        }
        if url.trim().is_empty() {
            return Err("Resource URL cannot be empty".to_string());
        }

        Ok(Self {
            id,
            title,
            kind,
            subject: subject.into(),
            tutor: tutor.into(),
            uploaded,
            url,
            size: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resource() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
        let r = Resource::new(
            1,
            "Calculus 2 - Integral Exercises",
            ResourceKind::Pdf,
            "Calculus 2",
            "Tran Thi B",
            date,
            "https://drive.example.com/calc2-integrals.pdf",
        )
        .unwrap();
        assert_eq!(r.kind.label(), "PDF");
    }

    #[test]
    fn test_requires_title_and_url() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 12).unwrap();
        assert!(Resource::new(1, "", ResourceKind::Link, "s", "t", date, "https://x").is_err());
        assert!(Resource::new(1, "T", ResourceKind::Link, "s", "t", date, " ").is_err());
    }
}
