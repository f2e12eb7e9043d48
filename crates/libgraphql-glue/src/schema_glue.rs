use crate::Fragment;
use crate::GlueError;
use crate::ResolvedSchemaPath;
use crate::ResolverMap;
use crate::RootOperationType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, GlueError>;

/// The product of gluing: one schema document plus one resolver map.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GluedSchema<R> {
    pub schema: String,
    pub resolver: ResolverMap<R>,
}

/// Accumulates [`Fragment`]s, in order, into a [`GluedSchema`].
///
/// Fragments are folded strictly left-to-right: schema text is appended in
/// the order fragments are added, and when two fragments define a resolver
/// for the same type and field, the later one wins.
///
/// ```
/// use libgraphql_glue::Fragment;
/// use libgraphql_glue::ResolvedSchemaPath;
/// use libgraphql_glue::SchemaGlue;
/// use libgraphql_glue::SchemaPathSource;
///
/// let glued = SchemaGlue::new()
///     .add_fragment(
///         Fragment::from_sdl("type Post { id: ID }")
///             .with_query("posts: [Post]")
///             .with_resolver("Query", "posts", "listPosts"),
///     )
///     .build(&ResolvedSchemaPath {
///         dir: "schema".into(),
///         source: SchemaPathSource::Default,
///     })
///     .unwrap();
///
/// assert_eq!(
///     glued.schema,
///     "type Post { id: ID }\ntype Query {\nposts: [Post]\n}",
/// );
/// assert_eq!(glued.resolver["Query"]["posts"], "listPosts");
/// ```
#[derive(Clone, Debug)]
pub struct SchemaGlue<R> {
    mutation: String,
    num_fragments: usize,
    query: String,
    resolver: ResolverMap<R>,
    schema: String,
    subscription: String,
}
impl<R> SchemaGlue<R> {
    pub fn new() -> Self {
        Self {
            mutation: RootOperationType::Mutation.opening_line().to_string(),
            num_fragments: 0,
            query: RootOperationType::Query.opening_line().to_string(),
            resolver: IndexMap::new(),
            schema: String::new(),
            subscription: RootOperationType::Subscription.opening_line().to_string(),
        }
    }

    /// Folds one more fragment into the accumulated result.
    pub fn add_fragment(mut self, fragment: Fragment<R>) -> Self {
        let Fragment {
            schema,
            resolver,
            query,
            mutation,
            subscription,
        } = fragment;

        append_text(&mut self.schema, schema);
        append_text(&mut self.query, query);
        append_text(&mut self.mutation, mutation);
        append_text(&mut self.subscription, subscription);

        for (type_name, field_resolvers) in resolver.into_iter().flatten() {
            let merged_field_resolvers =
                self.resolver
                    .entry(type_name)
                    .or_default();
            for (field_name, field_resolver) in field_resolvers {
                merged_field_resolvers.insert(field_name, field_resolver);
            }
        }

        self.num_fragments += 1;
        self
    }

    /// Folds every fragment yielded by `fragments`, in order.
    pub fn add_fragments(
        self,
        fragments: impl IntoIterator<Item = Fragment<R>>,
    ) -> Self {
        fragments.into_iter().fold(self, Self::add_fragment)
    }

    /// Finalizes the glued schema.
    ///
    /// Each root operation type block that received at least one contribution
    /// is closed and appended to the schema (`Query`, then `Mutation`, then
    /// `Subscription`). Blocks that received nothing are omitted entirely.
    ///
    /// `resolved_path` is only used to describe where fragments were searched
    /// for if no schema text was accumulated.
    pub fn build(
        self,
        resolved_path: &ResolvedSchemaPath,
    ) -> Result<GluedSchema<R>> {
        if self.schema.is_empty() {
            return Err(GlueError::MissingSchema {
                path: resolved_path.dir.to_owned(),
                path_source: resolved_path.source,
            });
        }

        let mut schema = self.schema;
        let blocks = [
            (RootOperationType::Query, self.query),
            (RootOperationType::Mutation, self.mutation),
            (RootOperationType::Subscription, self.subscription),
        ];
        for (operation_type, block) in blocks {
            if block == operation_type.opening_line() {
                continue;
            }
            schema.push('\n');
            schema.push_str(block.as_str());
            schema.push_str("\n}");
        }

        log::debug!(
            "Glued {} fragments into a schema with resolvers for {} types.",
            self.num_fragments,
            self.resolver.len(),
        );

        Ok(GluedSchema {
            schema,
            resolver: self.resolver,
        })
    }

    pub fn num_fragments(&self) -> usize {
        self.num_fragments
    }

    /// The accumulated (still open) block for `operation_type`, including its
    /// opening line.
    pub fn root_operation_block(
        &self,
        operation_type: RootOperationType,
    ) -> &str {
        match operation_type {
            RootOperationType::Query => self.query.as_str(),
            RootOperationType::Mutation => self.mutation.as_str(),
            RootOperationType::Subscription => self.subscription.as_str(),
        }
    }

    pub fn resolver(&self) -> &ResolverMap<R> {
        &self.resolver
    }

    /// Schema text accumulated so far, without any root operation blocks.
    pub fn schema(&self) -> &str {
        self.schema.as_str()
    }
}
impl<R> std::default::Default for SchemaGlue<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends `text` to `acc` on a new line, then trims the whole accumulator.
/// Absent or empty text contributes nothing.
fn append_text(acc: &mut String, text: Option<String>) {
    let Some(text) = text.filter(|text| !text.is_empty()) else {
        return;
    };
    let appended = format!("{acc}\n{text}");
    *acc = appended.trim().to_string();
}
