// src/domain/pagination.rs
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Parses `property[,asc|desc]`.
impl<F> FromStr for Sort<F>
where
    F: FromStr<Err = String>,
{
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (property, direction) = match value.split_once(',') {
            Some((property, direction)) => (property, direction.parse()?),
            None => (value, SortDirection::Asc),
        };
        Ok(Self {
            field: property.trim().parse()?,
            direction,
        })
    }
}

/// Zero-based page selection with an optional sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<F> {
    page: u32,
    size: u32,
    sort: Option<Sort<F>>,
}

impl<F> PageRequest<F> {
    /// `size` is clamped to at least one element per page.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> Option<&Sort<F>> {
        self.sort.as_ref()
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One materialized slice of a collection plus the numbers needed to
/// navigate the rest of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new<F>(items: Vec<T>, total_count: u64, request: &PageRequest<F>) -> Self {
        let size = request.size();
        let total_pages = if total_count == 0 {
            0
        } else {
            u32::try_from((total_count - 1) / u64::from(size) + 1).unwrap_or(u32::MAX)
        };
        Self {
            items,
            total_count,
            page: request.page(),
            size,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            size: self.size,
            total_pages: self.total_pages,
        }
    }
}

impl<F: fmt::Display> fmt::Display for Sort<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{},{direction}", self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Field;

    impl FromStr for Field {
        type Err = String;

        fn from_str(value: &str) -> Result<Self, Self::Err> {
            if value == "name" {
                Ok(Self)
            } else {
                Err(format!("unknown property: {value}"))
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::<Field>::new(0, 2);
        let page = Page::new(vec![1, 2], 5, &request);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let request = PageRequest::<Field>::new(0, 20);
        let page: Page<u8> = Page::new(vec![], 0, &request);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn size_is_at_least_one() {
        let request = PageRequest::<Field>::new(3, 0);
        assert_eq!(request.size(), 1);
        assert_eq!(request.offset(), 3);
    }

    #[test]
    fn sort_parses_direction_suffix() {
        let sort: Sort<Field> = "name,desc".parse().unwrap();
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort: Sort<Field> = "name".parse().unwrap();
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_rejects_unknown_property() {
        assert!("colour,asc".parse::<Sort<Field>>().is_err());
        assert!("name,sideways".parse::<Sort<Field>>().is_err());
    }
}
