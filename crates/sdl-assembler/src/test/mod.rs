
mod fixture_schema_tests {
    use crate::assembly::GoSchemaTarget;
    use crate::fragment::FragmentId;
    use crate::generator::Generator;
    use crate::generator::GeneratorConfig;
    use std::path::PathBuf;

    fn fixture_schema_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("test")
            .join("fixture_schema")
    }

    fn generate() -> String {
        let output_dir = tempfile::TempDir::new().unwrap();
        let output_path = output_dir.path().join("schema.go");
        let config = GeneratorConfig::new(fixture_schema_dir(), &output_path)
            .with_target(GoSchemaTarget::default());

        let report = Generator::new(config).run().unwrap();
        assert_eq!(
            report.fragment_ids,
            ["notification", "post", "scalars", "user"]
                .into_iter()
                .map(FragmentId::new)
                .collect::<Vec<_>>(),
        );

        std::fs::read_to_string(&output_path).unwrap()
    }

    #[test]
    fn fixture_schema_generates_complete_go_file() {
        let output = generate();

        assert!(output.starts_with("package resolver\n\n// Schema for api\nconst Schema = `\n"));
        assert!(output.ends_with("    tags: [String!]\n}\n\n`\n"));

        let mutation_open = output.find("type Mutation {").unwrap();
        let unread = output.find("unreadNotiCount(): UnreadNotiCount!").unwrap();
        let post = output.find("post(id: String!): Post!").unwrap();
        let profile = output.find("profile(): User!").unwrap();
        assert!(unread < post && post < profile && profile < mutation_open);

        let pub_post = output.find("pubPost(post: PostInput!): Post!").unwrap();
        let set_name = output.find("setName(name: String!): User!").unwrap();
        let post_input = output.find("input PostInput {").unwrap();
        assert!(mutation_open < pub_post && pub_post < set_name && set_name < post_input);

        let time = output.find("scalar Time").unwrap();
        let user = output.find("type User {").unwrap();
        assert!(post_input < time && time < user);
    }

    #[test]
    fn fixture_schema_is_reproducible() {
        assert_eq!(generate(), generate());
    }
}
