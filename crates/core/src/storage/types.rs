use crate::matches::RefereeId;

/// Page size used when a listing does not ask for one.
pub const DEFAULT_LIMIT: u32 = 100;

/// Filter and pagination for listing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListQuery {
    /// Only matches officiated by this referee, or all matches when `None`.
    pub referee_id: Option<RefereeId>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            referee_id: None,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    /// Creates a first-page query filtered by referee.
    pub fn for_referee(referee_id: RefereeId) -> Self {
        Self {
            referee_id: Some(referee_id),
            ..Self::default()
        }
    }

    /// Sets the offset and page size.
    pub fn with_page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }

    /// Returns true for the unfiltered first page with the default size.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
