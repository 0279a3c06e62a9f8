use crate::Cli;
use clap::Parser;
use sdl_assembler::assembly::GoSchemaTarget;
use sdl_assembler::fragment::DiscoveryOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("graphql-sdl-gen").chain(args.iter().copied()))
        .unwrap()
}

mod args {
    use super::*;

    #[test]
    fn no_arguments_targets_conventional_paths() {
        let cli = parse(&[]);
        let config = cli.generate.to_config();

        assert!(!cli.verbose);
        assert!(!cli.generate.stdout);
        assert_eq!(config.schema_dir, PathBuf::from("schema"));
        assert_eq!(config.output_path, PathBuf::from("schema.go"));
        assert_eq!(config.discovery, DiscoveryOptions::default());
        assert_eq!(config.target, GoSchemaTarget::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cli = parse(&[
            "--schema-dir", "fragments",
            "-o", "graph/schema.go",
            "--package", "graph",
            "--const-name", "SDL",
            "--fragment-ext", "frag",
            "-v",
        ]);
        let config = cli.generate.to_config();

        assert!(cli.verbose);
        assert_eq!(config.schema_dir, PathBuf::from("fragments"));
        assert_eq!(config.output_path, PathBuf::from("graph/schema.go"));
        assert_eq!(config.discovery.fragment_ext, "frag");
        assert_eq!(config.target.package_name, "graph");
        assert_eq!(config.target.const_name, "SDL");
    }

    #[test]
    fn positional_arguments_are_rejected() {
        let result = Cli::try_parse_from(["graphql-sdl-gen", "schema"]);
        assert!(result.is_err());
    }
}

mod run {
    use super::*;

    fn write_fragment(dir: &TempDir, file_name: &str, content: &str) {
        let schema_dir = dir.path().join("schema");
        std::fs::create_dir_all(&schema_dir).unwrap();
        std::fs::write(schema_dir.join(file_name), content).unwrap();
    }

    fn cli_for(dir: &TempDir, extra_args: &[&str]) -> Cli {
        let schema_dir = dir.path().join("schema");
        let output = dir.path().join("schema.go");
        let mut args = vec![
            "--schema-dir", schema_dir.to_str().unwrap(),
            "--output", output.to_str().unwrap(),
        ];
        args.extend_from_slice(extra_args);
        parse(&args)
    }

    #[tokio::test]
    async fn writes_output_file() {
        let dir = TempDir::new().unwrap();
        write_fragment(&dir, "post.toml", "queries = 'post: Post!'\ntypes = 'type Post { id: String! }'\n");

        let result = cli_for(&dir, &[]).generate.run().await;

        assert_eq!(result.exit_code, ExitCode::SUCCESS);
        assert!(result.stderr.is_none());
        let output = std::fs::read_to_string(dir.path().join("schema.go")).unwrap();
        assert!(output.contains("type Query {\npost: Post!\n}"));
    }

    #[tokio::test]
    async fn stdout_mode_prints_without_writing() {
        let dir = TempDir::new().unwrap();
        write_fragment(&dir, "user.toml", "mutations = 'setName(name: String!): User!'\n");

        let result = cli_for(&dir, &["--stdout"]).generate.run().await;

        assert_eq!(result.exit_code, ExitCode::SUCCESS);
        let stdout = result.stdout.unwrap();
        assert!(stdout.starts_with("package resolver\n"));
        assert!(stdout.ends_with("\n`"));
        assert!(stdout.contains("setName(name: String!): User!"));
        assert!(!dir.path().join("schema.go").exists());
    }

    #[tokio::test]
    async fn load_failure_reports_error_and_keeps_output() {
        let dir = TempDir::new().unwrap();
        write_fragment(&dir, "broken.toml", "types = [");
        std::fs::write(dir.path().join("schema.go"), "previous").unwrap();

        let result = cli_for(&dir, &[]).generate.run().await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        let stderr = result.stderr.unwrap();
        assert!(stderr.contains("Schema generation failed while loading"));
        assert!(stderr.contains("broken"));
        assert_eq!(std::fs::read_to_string(dir.path().join("schema.go")).unwrap(), "previous");
    }

    #[tokio::test]
    async fn missing_schema_dir_reports_error() {
        let dir = TempDir::new().unwrap();

        let result = cli_for(&dir, &[]).generate.run().await;

        assert_eq!(result.exit_code, ExitCode::FAILURE);
        assert!(result.stderr.unwrap().contains("does not exist"));
    }
}
