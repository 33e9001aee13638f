use serde::{Deserialize, Serialize};

use crate::model::types::HOLE_COUNT;

/// Courses offered in the picker when no catalog file is given.
pub const BUILTIN_COURSES: &[&str] = &[
    "Knights Play",
    "Brevofield",
    "Quaker Creek",
    "Raleigh GA",
    "Zebulon CC",
];

pub const CUSTOM_COURSE: &str = "Custom";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub pars: Option<Vec<i32>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseCatalog {
    pub courses: Vec<Course>,
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self {
            courses: BUILTIN_COURSES
                .iter()
                .map(|name| Course {
                    name: (*name).to_string(),
                    pars: None,
                })
                .collect(),
        }
    }
}

impl CourseCatalog {
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Course> {
        self.courses.first()
    }

    /// Names in picker order, `Custom` last.
    #[must_use]
    pub fn picker_names(&self) -> Vec<&str> {
        self.courses
            .iter()
            .map(|c| c.name.as_str())
            .chain(std::iter::once(CUSTOM_COURSE))
            .collect()
    }
}

/// What the group picked in the course selector. Only ever displayed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum CourseSelection {
    Listed(String),
    Custom(Option<String>),
}

impl Default for CourseSelection {
    fn default() -> Self {
        Self::Listed(BUILTIN_COURSES[0].to_string())
    }
}

impl CourseSelection {
    #[must_use]
    pub fn for_catalog(catalog: &CourseCatalog) -> Self {
        match catalog.first() {
            Some(course) => Self::Listed(course.name.clone()),
            None => Self::Custom(None),
        }
    }

    /// Heading text, e.g. `Brevofield Golf Course`. A custom course with no
    /// name yet has no heading.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        match self {
            Self::Listed(name) | Self::Custom(Some(name)) => Some(format!("{name} Golf Course")),
            Self::Custom(None) => None,
        }
    }

    #[must_use]
    pub fn picker_value(&self) -> &str {
        match self {
            Self::Listed(name) => name,
            Self::Custom(_) => CUSTOM_COURSE,
        }
    }

    /// Par row for display, when the catalog carries one for this course.
    #[must_use]
    pub fn pars<'a>(&self, catalog: &'a CourseCatalog) -> Option<&'a [i32]> {
        match self {
            Self::Listed(name) => catalog
                .find(name)
                .and_then(|c| c.pars.as_deref())
                .filter(|p| p.len() == HOLE_COUNT),
            Self::Custom(_) => None,
        }
    }
}
