use crate::fragment::FragmentId;
use crate::fragment::FragmentLoader;
use crate::fragment::FragmentRegistry;
use crate::fragment::FragmentSet;
use crate::fragment::FragmentSource;
use crate::fragment::LoadError;
use crate::fragment::StaticFragment;
use std::cell::RefCell;

type Result<T> = std::result::Result<T, LoadError>;

fn registry() -> FragmentRegistry {
    FragmentRegistry::new()
        .with_fragment(
            FragmentId::new("a"),
            StaticFragment::new()
                .with_queries("a(): Int!")
                .with_mutations("")
                .with_types("type A { x: Int! }"),
        )
        .unwrap()
        .with_fragment(
            FragmentId::new("b"),
            StaticFragment::new()
                .with_queries("")
                .with_mutations("setB(): Boolean!")
                .with_types("type B { y: String! }"),
        )
        .unwrap()
}

/// Records the order in which fragments are requested.
struct RecordingLoader<'a> {
    inner: &'a FragmentRegistry,
    requested: RefCell<Vec<FragmentId>>,
}

impl FragmentLoader for RecordingLoader<'_> {
    fn load(&self, fragment_id: &FragmentId) -> Result<FragmentSource> {
        self.requested.borrow_mut().push(fragment_id.clone());
        self.inner.load(fragment_id)
    }
}

#[test]
fn segments_are_positionally_aligned() -> Result<()> {
    let registry = registry();
    let ids = [FragmentId::new("a"), FragmentId::new("b")];

    let fragment_set = FragmentSet::aggregate(&ids, &registry)?;

    assert_eq!(fragment_set.len(), 2);
    assert_eq!(fragment_set.fragment_ids(), &ids);
    assert_eq!(fragment_set.query_segments(), &["a(): Int!", ""]);
    assert_eq!(fragment_set.mutation_segments(), &["", "setB(): Boolean!"]);
    assert_eq!(
        fragment_set.type_segments(),
        &["type A { x: Int! }", "type B { y: String! }"],
    );
    Ok(())
}

#[test]
fn given_order_is_preserved() -> Result<()> {
    let registry = registry();
    let ids = [FragmentId::new("b"), FragmentId::new("a")];

    let fragment_set = FragmentSet::aggregate(&ids, &registry)?;

    assert_eq!(
        fragment_set.type_segments(),
        &["type B { y: String! }", "type A { x: Int! }"],
    );
    Ok(())
}

#[test]
fn loading_stops_at_first_failure() {
    let registry = registry();
    let loader = RecordingLoader {
        inner: &registry,
        requested: RefCell::new(vec![]),
    };
    let ids = [
        FragmentId::new("a"),
        FragmentId::new("missing"),
        FragmentId::new("b"),
    ];

    let result = FragmentSet::aggregate(&ids, &loader);

    assert!(matches!(
        result,
        Err(LoadError::NotFound { fragment_id, .. }) if fragment_id.as_str() == "missing",
    ));
    assert_eq!(
        loader.requested.into_inner(),
        vec![FragmentId::new("a"), FragmentId::new("missing")],
    );
}

#[test]
fn duplicate_type_names_are_kept_verbatim() -> Result<()> {
    let registry = FragmentRegistry::new()
        .with_fragment(
            FragmentId::new("post"),
            StaticFragment::new().with_types("type SliceInfo { firstCursor: String! }"),
        )
        .unwrap()
        .with_fragment(
            FragmentId::new("thread"),
            StaticFragment::new().with_types("type SliceInfo { firstCursor: String! }"),
        )
        .unwrap();
    let ids = registry.ids().cloned().collect::<Vec<_>>();

    let fragment_set = FragmentSet::aggregate(&ids, &registry)?;

    assert_eq!(fragment_set.type_segments().len(), 2);
    assert_eq!(fragment_set.type_segments()[0], fragment_set.type_segments()[1]);
    Ok(())
}

#[test]
fn collect_from_sources() {
    let fragment_set: FragmentSet = vec![
        FragmentSource::new(FragmentId::new("x"), "x: Int", "", ""),
        FragmentSource::new(FragmentId::new("y"), "", "", "type Y { y: Int }"),
    ].into_iter().collect();

    assert_eq!(fragment_set.query_segments(), &["x: Int", ""]);
    assert_eq!(fragment_set.type_segments(), &["", "type Y { y: Int }"]);
}

#[test]
fn empty_id_list_is_an_empty_set() -> Result<()> {
    let ids: [FragmentId; 0] = [];

    let fragment_set = FragmentSet::aggregate(&ids, &registry())?;

    assert!(fragment_set.is_empty());
    Ok(())
}
