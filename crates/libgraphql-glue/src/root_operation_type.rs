/// One of the three GraphQL root operation types whose fields may be
/// contributed piecemeal by fragments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RootOperationType {
    Query,
    Mutation,
    Subscription,
}
impl RootOperationType {
    /// All root operation types in the order their blocks are appended to a
    /// glued schema.
    pub const ALL: [RootOperationType; 3] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
    ];

    /// The line that opens this type's block (e.g. `type Query {`).
    pub fn opening_line(&self) -> &'static str {
        match self {
            Self::Query => "type Query {",
            Self::Mutation => "type Mutation {",
            Self::Subscription => "type Subscription {",
        }
    }
}
