use crate::RootOperationType;
use indexmap::IndexMap;

/// Maps a type name (e.g. `Query`) to a map of field name -> resolver.
pub type ResolverMap<R> = IndexMap<String, IndexMap<String, R>>;

/// A single unit of schema contribution, typically loaded from one file.
///
/// Every field is optional. A fragment with no fields set is valid and simply
/// contributes nothing when glued.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<R> {
    /// Free-form schema definitions (types, interfaces, enums, etc).
    pub schema: Option<String>,

    /// Resolvers keyed by type name, then by field name.
    pub resolver: Option<ResolverMap<R>>,

    /// Field definitions to be placed inside the `type Query { ... }` block.
    pub query: Option<String>,

    /// Field definitions to be placed inside the `type Mutation { ... }` block.
    pub mutation: Option<String>,

    /// Field definitions to be placed inside the
    /// `type Subscription { ... }` block.
    pub subscription: Option<String>,
}
impl<R> Fragment<R> {
    pub fn new() -> Self {
        Self {
            schema: None,
            resolver: None,
            query: None,
            mutation: None,
            subscription: None,
        }
    }

    /// A fragment whose only contribution is raw schema definition language.
    pub fn from_sdl(content: impl Into<String>) -> Self {
        Self::new().with_schema(content)
    }

    pub fn root_operation_fields(
        &self,
        operation_type: RootOperationType,
    ) -> Option<&str> {
        match operation_type {
            RootOperationType::Query => self.query.as_deref(),
            RootOperationType::Mutation => self.mutation.as_deref(),
            RootOperationType::Subscription => self.subscription.as_deref(),
        }
    }

    pub fn with_mutation(mut self, fields: impl Into<String>) -> Self {
        self.mutation = Some(fields.into());
        self
    }

    pub fn with_query(mut self, fields: impl Into<String>) -> Self {
        self.query = Some(fields.into());
        self
    }

    /// Adds a single resolver for `type_name.field_name`, replacing any
    /// resolver this fragment already held for the same field.
    pub fn with_resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: R,
    ) -> Self {
        self.resolver
            .get_or_insert_with(IndexMap::new)
            .entry(type_name.into())
            .or_default()
            .insert(field_name.into(), resolver);
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_subscription(mut self, fields: impl Into<String>) -> Self {
        self.subscription = Some(fields.into());
        self
    }
}
impl<R> std::default::Default for Fragment<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl Fragment<serde_json::Value> {
    /// Interprets a JSON document as a fragment.
    ///
    /// Each of the five known fields is checked against its expected shape
    /// independently. Fields of the wrong shape are treated as though they
    /// were absent, and unknown fields are ignored. A `resolver` entry whose
    /// value is not an object still registers its type name with no fields.
    pub fn from_json_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut fields) = value else {
            log::debug!(
                "Fragment document is not a JSON object, so it contributes \
                nothing."
            );
            return Self::new();
        };

        Self {
            schema: take_string_field(&mut fields, "schema"),
            resolver: take_resolver_field(&mut fields),
            query: take_string_field(&mut fields, "query"),
            mutation: take_string_field(&mut fields, "mutation"),
            subscription: take_string_field(&mut fields, "subscription"),
        }
    }
}

fn take_string_field(
    fields: &mut serde_json::Map<String, serde_json::Value>,
    field_name: &str,
) -> Option<String> {
    match fields.remove(field_name) {
        Some(serde_json::Value::String(text)) => Some(text),
        None | Some(serde_json::Value::Null) => None,
        Some(other) => {
            log::debug!(
                "Ignoring fragment field `{field_name}` because it is not a \
                string: {other}"
            );
            None
        },
    }
}

fn take_resolver_field(
    fields: &mut serde_json::Map<String, serde_json::Value>,
) -> Option<ResolverMap<serde_json::Value>> {
    let resolvers_by_type = match fields.remove("resolver") {
        Some(serde_json::Value::Object(resolvers_by_type)) => resolvers_by_type,
        None | Some(serde_json::Value::Null) => return None,
        Some(other) => {
            log::debug!(
                "Ignoring fragment field `resolver` because it is not an \
                object: {other}"
            );
            return None;
        },
    };

    let resolver_map = resolvers_by_type.into_iter()
        .map(|(type_name, field_resolvers)| {
            let field_resolvers = match field_resolvers {
                serde_json::Value::Object(field_resolvers) =>
                    field_resolvers.into_iter().collect(),
                other => {
                    if !other.is_null() {
                        log::debug!(
                            "Ignoring resolvers for `{type_name}` because \
                            they are not an object: {other}"
                        );
                    }
                    IndexMap::new()
                },
            };
            (type_name, field_resolvers)
        })
        .collect();

    Some(resolver_map)
}
