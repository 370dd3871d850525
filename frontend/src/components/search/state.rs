use common::reconcile::Reconciler;

/// Form inputs of the search screen plus the reconciler holding the results.
///
/// `season` and `category` are empty when no filter is chosen.
pub struct SearchComponent {
    pub reconciler: Reconciler,
    pub region: String,
    pub season: String,
    pub category: String,
    /// A bulk delete is in flight.
    pub deleting: bool,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self {
            reconciler: Reconciler::new(),
            region: String::new(),
            season: String::new(),
            category: String::new(),
            deleting: false,
        }
    }
}
