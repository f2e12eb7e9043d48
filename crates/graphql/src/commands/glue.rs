use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_glue::FileFragmentLoader;
use libgraphql_glue::GlueOptions;
use libgraphql_glue::GluedSchema;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Only the glued schema definition language text.
    Sdl,

    /// A JSON object with `schema` and `resolver` keys.
    Json,
}

#[derive(Debug, clap::Args)]
pub(crate) struct GlueCmd {
    #[arg(
        help="Directory that relative schema paths (and `appconfig.json`) \
             are resolved against. Defaults to the current directory.",
        long,
    )]
    base_dir: Option<PathBuf>,

    #[arg(
        default_value="sdl",
        help="Output format.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "json".to_string(),
        ],
        help="Set of file extensions to treat as schema fragments when \
             searching the schema directory.",
        long,
        value_delimiter = ',',
    )]
    fragment_exts: Vec<String>,

    #[arg(
        help="Write the glued output to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Directory containing schema fragments. When omitted, \
             `graphql.schema` from `appconfig.json` is used, falling back to \
             `schema`.",
        name="SCHEMA_DIR",
    )]
    schema_dir: Option<PathBuf>,
}

impl GlueCmd {
    fn render(
        &self,
        glued: &GluedSchema<serde_json::Value>,
    ) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Sdl => Ok(glued.schema.to_owned()),
            OutputFormat::Json => serde_json::to_string_pretty(glued),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for GlueCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let base_dir = match &self.base_dir {
            Some(base_dir) => base_dir.to_owned(),
            None => match std::env::current_dir() {
                Ok(cwd) => cwd,
                Err(e) => return CommandResult::failure(format_args!(
                    "Unable to determine the current directory: {e}",
                )),
            },
        };

        let options = GlueOptions::new(self.fragment_exts.iter());
        log::debug!(
            "Gluing fragments with extensions: {}.",
            options.fragment_extensions.join(", "),
        );

        let glued = match libgraphql_glue::glue_with(
            base_dir.as_path(),
            self.schema_dir.as_deref(),
            &options,
            &FileFragmentLoader,
        ) {
            Ok(glued) => glued,
            Err(e) => return CommandResult::failure(format_args!("{e}")),
        };

        log::info!(
            "Glued schema has {} lines and resolvers for {} types.",
            glued.schema.lines().count(),
            glued.resolver.len(),
        );

        let rendered = match self.render(&glued) {
            Ok(rendered) => rendered,
            Err(e) => return CommandResult::failure(format_args!(
                "Unable to serialize the glued schema: {e}",
            )),
        };

        match &self.output {
            None => CommandResult::output(rendered),
            Some(output_path) => match std::fs::write(output_path, rendered) {
                Ok(()) => CommandResult::success(format_args!(
                    "Wrote glued schema to {output_path:?}.",
                )),
                Err(e) => CommandResult::failure(format_args!(
                    "Unable to write {output_path:?}: {e}",
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::process::ExitCode;

    fn parse_glue_cmd(args: &[&str]) -> GlueCmd {
        let cli = Cli::parse_from(
            ["graphql", "glue"].iter().chain(args.iter()),
        );
        match cli.cmd {
            Some(crate::commands::CommandEnum::Glue(cmd)) => *cmd,
            other => panic!("Expected a glue command, got {other:?}"),
        }
    }

    fn quiet_cli() -> Cli {
        Cli {
            cmd: None,
            quiet: true,
            verbose: false,
        }
    }

    fn write_post_fragment(schema_dir: &std::path::Path) {
        std::fs::create_dir_all(schema_dir).unwrap();
        std::fs::write(schema_dir.join("post.json"), r#"{
            "schema": "type Post { id: ID }",
            "query": "posts: [Post]",
            "resolver": { "Query": { "posts": "listPosts" } }
        }"#).unwrap();
    }

    #[test]
    fn default_args() {
        let cmd = parse_glue_cmd(&[]);
        assert_eq!(cmd.base_dir, None);
        assert_eq!(cmd.format, OutputFormat::Sdl);
        assert_eq!(cmd.fragment_exts, vec!["graphql", "graphqls", "json"]);
        assert_eq!(cmd.output, None);
        assert_eq!(cmd.schema_dir, None);
    }

    #[test]
    fn explicit_args() {
        let cmd = parse_glue_cmd(&[
            "--base-dir", "/srv/app",
            "--format", "json",
            "--fragment-exts", "gql,json",
            "-o", "out.json",
            "src/schema",
        ]);
        assert_eq!(cmd.base_dir, Some(PathBuf::from("/srv/app")));
        assert_eq!(cmd.format, OutputFormat::Json);
        assert_eq!(cmd.fragment_exts, vec!["gql", "json"]);
        assert_eq!(cmd.output, Some(PathBuf::from("out.json")));
        assert_eq!(cmd.schema_dir, Some(PathBuf::from("src/schema")));
    }

    #[tokio::test]
    async fn prints_glued_sdl() {
        let base_dir = tempfile::tempdir().unwrap();
        write_post_fragment(base_dir.path().join("schema").as_path());
        let base_dir_arg = base_dir.path().to_string_lossy().to_string();

        let result = parse_glue_cmd(&["--base-dir", base_dir_arg.as_str()])
            .run(quiet_cli())
            .await;

        assert_eq!(result.exit_code, ExitCode::SUCCESS);
        assert_eq!(
            result.stdout.as_deref(),
            Some("type Post { id: ID }\ntype Query {\nposts: [Post]\n}"),
        );
        assert_eq!(result.stderr, None);
    }

    #[tokio::test]
    async fn writes_glued_json_to_output_file() {
        let base_dir = tempfile::tempdir().unwrap();
        write_post_fragment(base_dir.path().join("fragments").as_path());
        let base_dir_arg = base_dir.path().to_string_lossy().to_string();
        let output_path = base_dir.path().join("glued.json");
        let output_arg = output_path.to_string_lossy().to_string();

        let result = parse_glue_cmd(&[
            "--base-dir", base_dir_arg.as_str(),
            "--format", "json",
            "--output", output_arg.as_str(),
            "fragments",
        ]).run(quiet_cli()).await;

        assert_eq!(result.exit_code, ExitCode::SUCCESS);
        let written: serde_json::Value = serde_json::from_str(
            std::fs::read_to_string(output_path).unwrap().as_str(),
        ).unwrap();
        assert_eq!(written, serde_json::json!({
            "schema": "type Post { id: ID }\ntype Query {\nposts: [Post]\n}",
            "resolver": { "Query": { "posts": "listPosts" } },
        }));
    }

    #[tokio::test]
    async fn missing_schema_is_reported_on_stderr() {
        let base_dir = tempfile::tempdir().unwrap();
        let base_dir_arg = base_dir.path().to_string_lossy().to_string();

        let result = parse_glue_cmd(&["--base-dir", base_dir_arg.as_str()])
            .run(quiet_cli())
            .await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        assert_eq!(result.stdout, None);
        assert!(
            result.stderr.unwrap()
                .contains("Missing GraphQL Schema: No schemas found under the path"),
        );
    }
}
