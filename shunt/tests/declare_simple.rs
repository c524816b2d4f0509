//! Declaration decomposition tests using the recording registrar.

mod common;

use common::{ident, toggle_options, type_hint};
use shunt::testing::{ManualOracle, RecordingRegistrar, Rejected};
use shunt::{
    Binder, DeclareError, Declared, DescriptorError, InvalidKind, OptionMap, RelationKind,
    TOGGLE_KEY, ToggleDescriptor, options,
};

#[test]
fn passes_through_without_a_descriptor() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let opts = options! { "inverse_of" => "owner" };
    let declared = binder
        .one_to_many(&mut registrar, ident("examples"), opts.clone())
        .unwrap();

    assert_eq!(declared, Declared::Direct);
    let registrations = registrar.registrations();
    assert_eq!(registrations.len(), 1, "pass-through registers exactly once");
    assert_eq!(registrations[0].kind, RelationKind::OneToMany);
    assert_eq!(registrations[0].name, "examples");
    assert_eq!(registrations[0].options, opts, "options must be untouched");
    assert!(registrar.dispatchers().is_empty());
}

#[test]
fn registers_both_variants_and_installs_a_dispatcher() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let opts = toggle_options(
        "feature",
        options! { "on" => true },
        options! { "off" => true },
    );
    let declared = binder
        .one_to_many(&mut registrar, ident("examples"), opts)
        .unwrap();

    assert_eq!(registrar.registrations().len(), 2);
    let with = registrar.find("examples_with_feature").expect("with variant");
    assert_eq!(with.kind, RelationKind::OneToMany);
    assert_eq!(
        with.options,
        options! { "target_type" => "Example", "on" => true }
    );
    let without = registrar
        .find("examples_without_feature")
        .expect("without variant");
    assert_eq!(
        without.options,
        options! { "target_type" => "Example", "off" => true }
    );

    assert_eq!(registrar.dispatchers().len(), 1);
    assert_eq!(*registrar.dispatchers()[0].name(), "examples");

    assert!(declared.is_toggled());
    let variants = declared.variants().expect("toggled declaration");
    assert_eq!(variants.with, "examples_with_feature");
    assert_eq!(variants.without, "examples_without_feature");
}

#[test]
fn explicit_options_override_the_derived_hint() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let mut opts = toggle_options("feature", OptionMap::new(), OptionMap::new());
    opts.insert("target_type", "Custom");
    binder
        .one_to_many(&mut registrar, ident("examples"), opts)
        .unwrap();

    let with = registrar.find("examples_with_feature").unwrap();
    assert_eq!(with.options, options! { "target_type" => "Custom" });
}

#[test]
fn variant_options_override_base_options() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let mut opts = toggle_options("feature", options! { "scope" => "ranked" }, OptionMap::new());
    opts.insert("scope", "all");
    binder
        .one_to_many(&mut registrar, ident("examples"), opts)
        .unwrap();

    let with = registrar.find("examples_with_feature").unwrap();
    assert_eq!(
        with.options,
        options! { "target_type" => "Example", "scope" => "ranked" }
    );
    let without = registrar.find("examples_without_feature").unwrap();
    assert_eq!(
        without.options,
        options! { "target_type" => "Example", "scope" => "all" }
    );
}

#[test]
fn consumes_the_reserved_key() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let opts = toggle_options("feature", OptionMap::new(), OptionMap::new());
    binder
        .one_to_many(&mut registrar, ident("examples"), opts)
        .unwrap();

    for registration in registrar.registrations() {
        assert!(
            !registration.options.contains_key(TOGGLE_KEY),
            "the descriptor must never reach the host"
        );
    }
}

#[test]
fn malformed_descriptor_triggers_no_host_calls() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let mut opts = OptionMap::new();
    opts.insert(
        TOGGLE_KEY,
        ToggleDescriptor::for_feature(ident("feature")).with_on(OptionMap::new()),
    );
    let err = binder
        .one_to_many(&mut registrar, ident("examples"), opts)
        .unwrap_err();

    assert!(matches!(
        err,
        DeclareError::Descriptor(DescriptorError::MissingOff)
    ));
    assert!(registrar.registrations().is_empty());
    assert!(registrar.dispatchers().is_empty());
}

#[test]
fn non_descriptor_reserved_value_is_malformed() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let mut opts = OptionMap::new();
    opts.insert(TOGGLE_KEY, true);
    let err = binder
        .one_to_many(&mut registrar, ident("examples"), opts)
        .unwrap_err();

    assert!(matches!(
        err,
        DeclareError::Descriptor(DescriptorError::NotADescriptor)
    ));
    assert!(registrar.registrations().is_empty());
}

#[test]
fn unknown_kind_text_fails_before_any_host_call() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    let err = binder
        .declare_named(
            &mut registrar,
            "one_to_few",
            ident("examples"),
            OptionMap::new(),
        )
        .unwrap_err();

    match err {
        DeclareError::Kind(InvalidKind(kind)) => assert_eq!(kind, "one_to_few"),
        other => panic!("expected an invalid-kind error, got {other:?}"),
    }
    assert!(registrar.registrations().is_empty());
}

#[test]
fn known_kind_text_declares_normally() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    binder
        .declare_named(
            &mut registrar,
            "many_to_many",
            ident("examples"),
            OptionMap::new(),
        )
        .unwrap();

    assert_eq!(registrar.registrations()[0].kind, RelationKind::ManyToMany);
}

#[test]
fn host_errors_propagate_unchanged() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();
    registrar.fail_next("column missing");

    let err = binder
        .one_to_many(
            &mut registrar,
            ident("examples"),
            toggle_options("feature", OptionMap::new(), OptionMap::new()),
        )
        .unwrap_err();

    match err {
        DeclareError::Host(rejected) => {
            assert_eq!(rejected, Rejected("column missing".to_string()));
        }
        other => panic!("expected the host's own error, got {other:?}"),
    }
}

#[test]
fn each_declaration_surface_maps_to_its_kind() {
    let binder = Binder::new(ManualOracle::new(), type_hint);
    let mut registrar = RecordingRegistrar::new();

    binder
        .one_to_many(&mut registrar, ident("entries"), OptionMap::new())
        .unwrap();
    binder
        .one_to_one(&mut registrar, ident("profile"), OptionMap::new())
        .unwrap();
    binder
        .many_to_one(&mut registrar, ident("owner"), OptionMap::new())
        .unwrap();
    binder
        .many_to_many(&mut registrar, ident("labels"), OptionMap::new())
        .unwrap();

    let kinds: Vec<RelationKind> = registrar
        .registrations()
        .iter()
        .map(|registration| registration.kind)
        .collect();
    assert_eq!(kinds, RelationKind::ALL);
}
