//! Lookup strategy selection for the list endpoints.
//!
//! A `GET` on an entity collection accepts an id, a title prefix and, for
//! cities and locations, a parent scope. At most one may be given; the
//! choice is made here before any repository call.

use crate::error::{AppError, AppResult};

/// The single query strategy a list request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Every row, optionally restricted to one parent
    All { scope: Option<i32> },
    ById(i32),
    /// Rows whose title starts with the given, non-blank prefix
    ByTitle(String),
}

/// Query parameter names used in error messages.
#[derive(Debug, Clone, Copy)]
pub struct ParamNames {
    pub title: &'static str,
    pub scope: Option<&'static str>,
}

impl ParamNames {
    pub const TITLE: ParamNames = ParamNames {
        title: "title",
        scope: None,
    };

    pub const fn scoped(scope: &'static str) -> Self {
        ParamNames {
            title: "title",
            scope: Some(scope),
        }
    }

    fn listing(&self) -> String {
        match self.scope {
            Some(scope) => format!("id, {}, {}", self.title, scope),
            None => format!("id, {}", self.title),
        }
    }
}

impl Lookup {
    /// Resolves optional query parameters into exactly one lookup.
    ///
    /// # Errors
    /// - More than one parameter present
    /// - A title that is empty or whitespace only
    pub fn resolve(
        id: Option<i32>,
        title: Option<String>,
        scope: Option<i32>,
        names: ParamNames,
    ) -> AppResult<Lookup> {
        let given = [id.is_some(), title.is_some(), scope.is_some()]
            .into_iter()
            .filter(|present| *present)
            .count();
        if given > 1 {
            return Err(AppError::validation(
                "query",
                format!("at most one of {} may be given", names.listing()),
            ));
        }

        match (id, title) {
            (Some(id), _) => Ok(Lookup::ById(id)),
            (None, Some(title)) if title.trim().is_empty() => {
                Err(AppError::validation(names.title, "must not be blank"))
            }
            (None, Some(title)) => Ok(Lookup::ByTitle(title)),
            (None, None) => Ok(Lookup::All { scope }),
        }
    }
}
