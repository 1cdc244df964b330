/// Progress of one reference-data fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    NotStarted,
    Loading,
    Loaded(T),
    /// Holds the user-facing message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A course list fetch the driver must perform.
///
/// The request remembers the subject it was issued for and its place in
/// the sequence of course fetches. Its response is only applied while it is
/// the latest fetch and that subject is still the selected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursesRequest {
    pub subject: String,
    pub generation: u64,
}

impl CoursesRequest {
    /// Endpoint (below the API prefix) this request should be sent to.
    pub fn endpoint(&self) -> String {
        common::courses_endpoint(&self.subject)
    }
}

/// What happened to a resolved course fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response updated the course list
    Applied,
    /// A newer fetch or another subject superseded it; the response was dropped
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_accessors() {
        let loaded: LoadState<Vec<u8>> = LoadState::Loaded(vec![1, 2]);
        assert_eq!(loaded.data(), Some(&vec![1, 2]));
        assert!(!loaded.is_loading());

        let failed: LoadState<Vec<u8>> = LoadState::Failed("boom".to_string());
        assert!(failed.is_failed());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.data(), None);

        assert_eq!(LoadState::<()>::default(), LoadState::NotStarted);
    }

    #[test]
    fn test_courses_request_endpoint() {
        let request = CoursesRequest {
            subject: "CS".to_string(),
            generation: 1,
        };
        assert_eq!(request.endpoint(), "/subjects/courses?subject=CS");
    }
}
