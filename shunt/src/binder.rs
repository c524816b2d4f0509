//! Variant registration and dispatch generation.
//!
//! The binder turns one capability declaration into two variant
//! registrations plus one dispatcher, without the host mapping layer
//! knowing toggles exist. The host injects its registration surface
//! ([`Registrar`]) per declaration and the toggle oracle once, at
//! construction; no ambient state is involved.

use shunt_core::{
    DeclareError, DescriptorError, Dispatcher, Ident, OptionMap, OptionValue, Registrar,
    RelationKind, TARGET_TYPE_KEY, TOGGLE_KEY, ToggleOracle, TypeHint, VariantNames,
};
use std::sync::Arc;

/// Outcome of a capability declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declared {
    /// No toggle descriptor was present; the capability was registered
    /// directly under its own name.
    Direct,
    /// Two variants were registered and a dispatcher was installed.
    Toggled(VariantNames),
}

impl Declared {
    /// Whether the declaration produced a dispatcher.
    pub fn is_toggled(&self) -> bool {
        matches!(self, Declared::Toggled(_))
    }

    /// The derived variant names, when toggled.
    pub fn variants(&self) -> Option<&VariantNames> {
        match self {
            Declared::Toggled(variants) => Some(variants),
            Declared::Direct => None,
        }
    }
}

/// Turns capability declarations into variant registrations and
/// dispatchers.
///
/// The oracle reference is shared with every dispatcher the binder
/// generates; the type hinter supplies the host mapping layer's
/// name-to-type convention (see [`TypeHint`]).
///
/// # Example
///
/// ```rust,ignore
/// let features = Arc::new(SimpleRepository::new());
/// let binder = Binder::new(Arc::clone(&features), my_type_hint);
///
/// let mut options = OptionMap::new();
/// options.insert(
///     TOGGLE_KEY,
///     ToggleDescriptor::for_feature(Ident::new("new_ranking")?)
///         .with_on(options! { "scope" => "ranked" })
///         .with_off(OptionMap::new()),
/// );
/// binder.one_to_many(&mut registrar, Ident::new("entries")?, options)?;
/// ```
pub struct Binder<H> {
    oracle: Arc<dyn ToggleOracle>,
    hinter: H,
}

impl<H: TypeHint> Binder<H> {
    /// Create a binder around a toggle oracle and the host's type hinter.
    pub fn new(oracle: impl ToggleOracle + 'static, hinter: H) -> Self {
        Self {
            oracle: Arc::new(oracle),
            hinter,
        }
    }

    /// Create a binder around an already-shared oracle.
    pub fn shared(oracle: Arc<dyn ToggleOracle>, hinter: H) -> Self {
        Self { oracle, hinter }
    }

    /// Declare a capability, splitting it into toggled variants when its
    /// options carry a descriptor under [`TOGGLE_KEY`].
    ///
    /// Without a descriptor this is a pass-through: one `register` call
    /// with `name` and `options` untouched. With one, the descriptor is
    /// validated first (a malformed descriptor causes zero host calls),
    /// then both variants are registered and a dispatcher bound to `name`
    /// is installed. Host failures surface unchanged through
    /// [`DeclareError::Host`].
    pub fn declare<R: Registrar>(
        &self,
        registrar: &mut R,
        kind: RelationKind,
        name: Ident,
        mut options: OptionMap,
    ) -> Result<Declared, DeclareError<R::Error>> {
        let descriptor = match options.remove(TOGGLE_KEY) {
            None => {
                registrar
                    .register(kind, &name, options)
                    .map_err(DeclareError::Host)?;
                return Ok(Declared::Direct);
            }
            Some(OptionValue::Toggle(descriptor)) => descriptor,
            Some(_) => return Err(DescriptorError::NotADescriptor.into()),
        };
        let spec = descriptor.into_spec()?;

        // Hint first, so explicit declaration options override it.
        let mut base = OptionMap::new();
        base.insert(TARGET_TYPE_KEY, self.hinter.type_hint(&name));
        base.merge(options);

        let dispatcher = Dispatcher::new(name, spec.feature, Arc::clone(&self.oracle));
        let variants = dispatcher.variants().clone();

        registrar
            .register(kind, &variants.with, base.clone().merged(spec.on))
            .map_err(DeclareError::Host)?;
        registrar
            .register(kind, &variants.without, base.merged(spec.off))
            .map_err(DeclareError::Host)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            name = %dispatcher.name(),
            feature = %dispatcher.feature(),
            "installing toggled capability"
        );
        registrar.install(dispatcher).map_err(DeclareError::Host)?;

        Ok(Declared::Toggled(variants))
    }

    /// Declare a capability whose kind arrives as text.
    ///
    /// Fails with [`DeclareError::Kind`] before any host call when the
    /// text names no supported relationship shape.
    pub fn declare_named<R: Registrar>(
        &self,
        registrar: &mut R,
        kind: &str,
        name: Ident,
        options: OptionMap,
    ) -> Result<Declared, DeclareError<R::Error>> {
        let kind: RelationKind = kind.parse()?;
        self.declare(registrar, kind, name, options)
    }

    /// Declare a one-to-many capability.
    pub fn one_to_many<R: Registrar>(
        &self,
        registrar: &mut R,
        name: Ident,
        options: OptionMap,
    ) -> Result<Declared, DeclareError<R::Error>> {
        self.declare(registrar, RelationKind::OneToMany, name, options)
    }

    /// Declare a one-to-one capability.
    pub fn one_to_one<R: Registrar>(
        &self,
        registrar: &mut R,
        name: Ident,
        options: OptionMap,
    ) -> Result<Declared, DeclareError<R::Error>> {
        self.declare(registrar, RelationKind::OneToOne, name, options)
    }

    /// Declare a many-to-one (owning side) capability.
    pub fn many_to_one<R: Registrar>(
        &self,
        registrar: &mut R,
        name: Ident,
        options: OptionMap,
    ) -> Result<Declared, DeclareError<R::Error>> {
        self.declare(registrar, RelationKind::ManyToOne, name, options)
    }

    /// Declare a many-to-many capability.
    pub fn many_to_many<R: Registrar>(
        &self,
        registrar: &mut R,
        name: Ident,
        options: OptionMap,
    ) -> Result<Declared, DeclareError<R::Error>> {
        self.declare(registrar, RelationKind::ManyToMany, name, options)
    }
}
