#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the edited endpoint value (best-effort).
    PersistEndpoint { value: String },
    /// Ask the host identity capability for the signed-in account.
    ResolveIdentity,
    /// Fetch the day summary for `email` from `base_url`.
    FetchSummary { base_url: String, email: String },
}
